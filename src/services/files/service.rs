//! Files service implementation.

use super::*;
use crate::auth::AuthManager;
use crate::errors::SlackResult;
use crate::transport::{decode_response, FileUpload, FormRequest, HttpTransport, MultipartRequest};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Trait for file operations
#[async_trait]
pub trait FilesServiceTrait: Send + Sync {
    /// Upload a file and optionally share it into channels
    async fn upload(&self, request: UploadFileRequest) -> SlackResult<UploadFileResponse>;

    /// Delete a file
    async fn delete(&self, request: DeleteFileRequest) -> SlackResult<DeleteFileResponse>;
}

/// Files service implementation
#[derive(Clone)]
pub struct FilesService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    base_url: String,
}

impl FilesService {
    /// Create a new files service
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
impl FilesServiceTrait for FilesService {
    #[instrument(skip(self, request), fields(filename = %request.filename, size = request.content.len()))]
    async fn upload(&self, request: UploadFileRequest) -> SlackResult<UploadFileResponse> {
        let channels = request.channels.map(|channels| {
            channels
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(",")
        });

        let multipart =
            MultipartRequest::new(self.build_url("files.upload"), self.auth.bearer_headers()?)
                .field("token", self.auth.form_token()?)
                .field("filename", request.filename.clone())
                .opt_field("title", request.title)
                .opt_field("filetype", request.filetype)
                .opt_field("initial_comment", request.initial_comment)
                .opt_field("channels", channels)
                .opt_field("thread_ts", request.thread_ts.map(|t| t.0))
                .file(FileUpload::new("file", request.filename, request.content));

        decode_response(&self.transport.send_multipart(multipart).await?)
    }

    #[instrument(skip(self, request), fields(file = %request.file))]
    async fn delete(&self, request: DeleteFileRequest) -> SlackResult<DeleteFileResponse> {
        let form = self.form("files.delete")?.field("file", request.file.0);

        decode_response(&self.transport.send_form(form).await?)
    }
}
