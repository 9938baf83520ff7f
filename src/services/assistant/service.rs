//! Assistant threads service implementation.

use super::*;
use crate::auth::AuthManager;
use crate::errors::{ResponseError, SlackResult};
use crate::transport::{decode_response, FormRequest, HttpTransport};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Trait for assistant thread operations
#[async_trait]
pub trait AssistantServiceTrait: Send + Sync {
    /// Set or clear the status of an assistant thread
    async fn set_status(&self, request: SetStatusRequest) -> SlackResult<SetStatusResponse>;

    /// Set the title of an assistant thread
    async fn set_title(&self, request: SetTitleRequest) -> SlackResult<SetTitleResponse>;

    /// Set the suggested prompts offered in an assistant thread
    async fn set_suggested_prompts(
        &self,
        request: SetSuggestedPromptsRequest,
    ) -> SlackResult<SetSuggestedPromptsResponse>;
}

/// Assistant threads service implementation
#[derive(Clone)]
pub struct AssistantService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    base_url: String,
}

impl AssistantService {
    /// Create a new assistant threads service
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
impl AssistantServiceTrait for AssistantService {
    #[instrument(skip(self, request), fields(channel = %request.channel_id, thread_ts = %request.thread_ts))]
    async fn set_status(&self, request: SetStatusRequest) -> SlackResult<SetStatusResponse> {
        // The status field is sent even when empty, which clears the status.
        let form = self
            .form("assistant.threads.setStatus")?
            .field("channel_id", request.channel_id.0)
            .field("thread_ts", request.thread_ts.0)
            .field("status", request.status);

        decode_response(&self.transport.send_form(form).await?)
    }

    #[instrument(skip(self, request), fields(channel = %request.channel_id, thread_ts = %request.thread_ts))]
    async fn set_title(&self, request: SetTitleRequest) -> SlackResult<SetTitleResponse> {
        let form = self
            .form("assistant.threads.setTitle")?
            .field("channel_id", request.channel_id.0)
            .field("thread_ts", request.thread_ts.0)
            .field("title", request.title);

        decode_response(&self.transport.send_form(form).await?)
    }

    #[instrument(skip(self, request), fields(channel = %request.channel_id, prompts = request.prompts.len()))]
    async fn set_suggested_prompts(
        &self,
        request: SetSuggestedPromptsRequest,
    ) -> SlackResult<SetSuggestedPromptsResponse> {
        let mut form = self
            .form("assistant.threads.setSuggestedPrompts")?
            .field("channel_id", request.channel_id.0)
            .field("thread_ts", request.thread_ts.0)
            .opt_field("title", request.title);

        if !request.prompts.is_empty() {
            let prompts = serde_json::to_string(&request.prompts).map_err(|e| {
                ResponseError::UnexpectedResponse {
                    message: format!("failed to encode prompts: {e}"),
                }
            })?;
            form = form.field("prompts", prompts);
        }

        decode_response(&self.transport.send_form(form).await?)
    }
}
