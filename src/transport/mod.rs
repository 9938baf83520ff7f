//! HTTP transport layer for the Slack client.
//!
//! Performs a single form-encoded (or multipart) POST per call and returns
//! the raw body; [`decode_response`] checks the JSON envelope. Transport
//! failures are surfaced unchanged; an envelope with `ok: false` becomes
//! [`SlackError::Api`] carrying the remote error string. Dropping the
//! returned future aborts the in-flight request.

use crate::errors::{NetworkError, ResponseError, SlackError, SlackResult};
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

/// HTTP transport trait for making API requests.
///
/// Implementations return the raw response body; callers decode it with
/// [`decode_response`]. Keeping deserialization out of the trait keeps it
/// object safe, so clients can swap in a test transport behind `dyn`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a form-encoded POST request and return the response body
    async fn send_form(&self, request: FormRequest) -> SlackResult<String>;

    /// Send a multipart POST request (for file uploads) and return the
    /// response body
    async fn send_multipart(&self, request: MultipartRequest) -> SlackResult<String>;
}

/// Form-encoded POST request
#[derive(Debug)]
pub struct FormRequest {
    /// Full endpoint URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Form fields, in insertion order
    pub fields: Vec<(String, String)>,
    /// Request timeout override
    pub timeout: Option<Duration>,
}

impl FormRequest {
    /// Create a new form POST request
    pub fn post(url: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            url: url.into(),
            headers,
            fields: Vec::new(),
            timeout: None,
        }
    }

    /// Add a form field
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Add a form field only when a value is present.
    ///
    /// `Some("")` still transmits the empty string, which some endpoints
    /// interpret as clearing the field.
    pub fn opt_field(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.field(name, value),
            None => self,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Look up a field value by name (last one wins)
    pub fn get_field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Multipart POST request for file uploads
#[derive(Debug)]
pub struct MultipartRequest {
    /// Full endpoint URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Form fields
    pub fields: Vec<(String, String)>,
    /// Files to upload
    pub files: Vec<FileUpload>,
    /// Request timeout override
    pub timeout: Option<Duration>,
}

impl MultipartRequest {
    /// Create a new multipart request
    pub fn new(url: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            url: url.into(),
            headers,
            fields: Vec::new(),
            files: Vec::new(),
            timeout: None,
        }
    }

    /// Add a form field
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Add a form field only when a value is present
    pub fn opt_field(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.field(name, value),
            None => self,
        }
    }

    /// Add a file
    pub fn file(mut self, upload: FileUpload) -> Self {
        self.files.push(upload);
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// File upload data
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// Form field name
    pub field_name: String,
    /// File name
    pub file_name: String,
    /// File content
    pub content: Bytes,
    /// MIME type
    pub mime_type: String,
}

impl FileUpload {
    /// Create a new file upload with MIME type guessed from the file name
    pub fn new(
        field_name: impl Into<String>,
        file_name: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        let file_name_str = file_name.into();
        let mime_type = mime_guess::from_path(&file_name_str)
            .first_or_octet_stream()
            .to_string();

        Self {
            field_name: field_name.into(),
            file_name: file_name_str,
            content: content.into(),
            mime_type,
        }
    }

    /// Set the MIME type
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }
}

/// Decode a response body: parse JSON, check the envelope, deserialize.
///
/// The single place where the ok/error convention is enforced. A body that
/// is not JSON yields a [`ResponseError`]; `ok: false` yields
/// [`SlackError::Api`] with the remote error string verbatim.
pub fn decode_response<Res: DeserializeOwned>(body: &str) -> SlackResult<Res> {
    let json: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        SlackError::Response(ResponseError::Deserialization {
            message: e.to_string(),
        })
    })?;

    if let Some(ok) = json.get("ok").and_then(|v| v.as_bool()) {
        if !ok {
            let code = json
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown_error");
            return Err(SlackError::api(code));
        }
    }

    serde_json::from_value(json).map_err(|e| {
        SlackError::Response(ResponseError::Deserialization {
            message: e.to_string(),
        })
    })
}

/// Default HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    default_timeout: Duration,
}

impl ReqwestTransport {
    /// Create a new transport with the given timeout
    pub fn new(timeout: Duration) -> SlackResult<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| SlackError::Network(NetworkError::Http(e.to_string())))?;

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    /// Create a new transport with a pre-built client
    pub fn with_client(client: Client, default_timeout: Duration) -> Self {
        Self {
            client,
            default_timeout,
        }
    }

    async fn read_body(&self, response: reqwest::Response) -> SlackResult<String> {
        let body = response
            .text()
            .await
            .map_err(|e| SlackError::Network(NetworkError::Http(e.to_string())))?;

        debug!(response_body = %body, "Received response");

        Ok(body)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(url = %request.url))]
    async fn send_form(&self, request: FormRequest) -> SlackResult<String> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);

        debug!(
            fields = %crate::observability::redact_form_fields(&request.fields),
            "Sending form request"
        );

        let response = self
            .client
            .post(&request.url)
            .headers(request.headers)
            .form(&request.fields)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| SlackError::Network(NetworkError::from(e)))?;

        self.read_body(response).await
    }

    #[instrument(skip(self, request), fields(url = %request.url, file_count = request.files.len()))]
    async fn send_multipart(&self, request: MultipartRequest) -> SlackResult<String> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);

        let mut form = reqwest::multipart::Form::new();

        for (name, value) in request.fields {
            form = form.text(name, value);
        }

        for file in request.files {
            let part = reqwest::multipart::Part::bytes(file.content.to_vec())
                .file_name(file.file_name)
                .mime_str(&file.mime_type)
                .map_err(|e| SlackError::Network(NetworkError::Http(e.to_string())))?;
            form = form.part(file.field_name, part);
        }

        let response = self
            .client
            .post(&request.url)
            .headers(request.headers)
            .multipart(form)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| SlackError::Network(NetworkError::from(e)))?;

        self.read_body(response).await
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_request_builder() {
        let headers = HeaderMap::new();
        let request = FormRequest::post("https://slack.com/api/test", headers)
            .field("channel_id", "C123")
            .field("title", "Docs");

        assert_eq!(request.fields.len(), 2);
        assert_eq!(request.get_field("channel_id"), Some("C123"));
        assert_eq!(request.get_field("missing"), None);
    }

    #[test]
    fn test_opt_field_omission() {
        let request = FormRequest::post("https://slack.com/api/test", HeaderMap::new())
            .opt_field("emoji", None::<String>)
            .opt_field("link", Some("https://x"));

        assert_eq!(request.fields.len(), 1);
        assert_eq!(request.get_field("link"), Some("https://x"));
        assert_eq!(request.get_field("emoji"), None);
    }

    #[test]
    fn test_opt_field_empty_value_transmitted() {
        // Some("") must still go on the wire; empty means "clear" for edits.
        let request = FormRequest::post("https://slack.com/api/test", HeaderMap::new())
            .opt_field("title", Some(""));

        assert_eq!(request.get_field("title"), Some(""));
    }

    #[test]
    fn test_file_upload_mime_detection() {
        let upload = FileUpload::new("file", "test.png", vec![0u8; 10]);
        assert_eq!(upload.mime_type, "image/png");

        let upload = FileUpload::new("file", "example.txt", vec![0u8; 10]);
        assert_eq!(upload.mime_type, "text/plain");
    }

    #[test]
    fn test_multipart_request_builder() {
        let headers = HeaderMap::new();
        let upload = FileUpload::new("file", "test.txt", b"content".to_vec());

        let request = MultipartRequest::new("https://slack.com/api/files.upload", headers)
            .field("channels", "C123")
            .opt_field("title", None::<String>)
            .file(upload);

        assert_eq!(request.fields.len(), 1);
        assert_eq!(request.files.len(), 1);
    }

    #[test]
    fn test_decode_response_success() {
        #[derive(serde::Deserialize)]
        struct Res {
            ok: bool,
            value: String,
        }

        let res: Res = decode_response(r#"{"ok":true,"value":"x"}"#).unwrap();
        assert!(res.ok);
        assert_eq!(res.value, "x");
    }

    #[test]
    fn test_decode_response_envelope_failure() {
        let err = decode_response::<serde_json::Value>(r#"{"ok":false,"error":"invalid_auth"}"#)
            .unwrap_err();
        assert_eq!(err.api_code(), Some("invalid_auth"));
    }

    #[test]
    fn test_decode_response_not_json() {
        let err = decode_response::<serde_json::Value>("<html>502</html>").unwrap_err();
        assert!(matches!(err, SlackError::Response(_)));
    }
}
