//! Bookmarks service implementation.

use super::*;
use crate::auth::AuthManager;
use crate::errors::SlackResult;
use crate::transport::{decode_response, FormRequest, HttpTransport};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Trait for bookmarks service operations
#[async_trait]
pub trait BookmarksServiceTrait: Send + Sync {
    /// Add a bookmark to a channel
    async fn add(&self, request: AddBookmarkRequest) -> SlackResult<AddBookmarkResponse>;

    /// Edit a bookmark
    async fn edit(&self, request: EditBookmarkRequest) -> SlackResult<EditBookmarkResponse>;

    /// List bookmarks in a channel
    async fn list(&self, request: ListBookmarksRequest) -> SlackResult<ListBookmarksResponse>;

    /// Remove a bookmark
    async fn remove(&self, request: RemoveBookmarkRequest) -> SlackResult<RemoveBookmarkResponse>;
}

/// Bookmarks service implementation
#[derive(Clone)]
pub struct BookmarksService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    base_url: String,
}

impl BookmarksService {
    /// Create a new bookmarks service
    pub fn new(transport: Arc<dyn HttpTransport>, auth: AuthManager, base_url: String) -> Self {
        Self {
            transport,
            auth,
            base_url,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    fn form(&self, endpoint: &str) -> SlackResult<FormRequest> {
        Ok(
            FormRequest::post(self.build_url(endpoint), self.auth.bearer_headers()?)
                .field("token", self.auth.form_token()?),
        )
    }
}

#[async_trait]
impl BookmarksServiceTrait for BookmarksService {
    #[instrument(skip(self, request), fields(channel = %request.channel_id, title = %request.title))]
    async fn add(&self, request: AddBookmarkRequest) -> SlackResult<AddBookmarkResponse> {
        let form = self
            .form("bookmarks.add")?
            .field("channel_id", request.channel_id.0)
            .field("title", request.title)
            .field("type", request.bookmark_type)
            .opt_field("link", request.link)
            .opt_field("emoji", request.emoji)
            .opt_field("entity_id", request.entity_id)
            .opt_field("parent_id", request.parent_id);

        decode_response(&self.transport.send_form(form).await?)
    }

    #[instrument(skip(self, request), fields(channel = %request.channel_id, bookmark_id = %request.bookmark_id))]
    async fn edit(&self, request: EditBookmarkRequest) -> SlackResult<EditBookmarkResponse> {
        let form = self
            .form("bookmarks.edit")?
            .field("channel_id", request.channel_id.0)
            .field("bookmark_id", request.bookmark_id)
            .opt_field("title", request.title)
            .opt_field("emoji", request.emoji)
            .opt_field("link", request.link)
            .opt_field("type", request.bookmark_type);

        decode_response(&self.transport.send_form(form).await?)
    }

    #[instrument(skip(self, request), fields(channel = %request.channel_id))]
    async fn list(&self, request: ListBookmarksRequest) -> SlackResult<ListBookmarksResponse> {
        let form = self
            .form("bookmarks.list")?
            .field("channel_id", request.channel_id.0);

        decode_response(&self.transport.send_form(form).await?)
    }

    #[instrument(skip(self, request), fields(channel = %request.channel_id, bookmark_id = %request.bookmark_id))]
    async fn remove(&self, request: RemoveBookmarkRequest) -> SlackResult<RemoveBookmarkResponse> {
        let form = self
            .form("bookmarks.remove")?
            .field("channel_id", request.channel_id.0)
            .field("bookmark_id", request.bookmark_id);

        decode_response(&self.transport.send_form(form).await?)
    }
}
