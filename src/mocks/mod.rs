//! Mock transport for testing.
//!
//! [`MockHttpTransport`] replays queued response bodies and records every
//! outbound request, so service tests can assert on the exact form fields
//! transmitted without a network.

use crate::errors::{NetworkError, SlackError, SlackResult};
use crate::transport::{FormRequest, HttpTransport, MultipartRequest};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;

/// A canned response for the mock transport
#[derive(Debug)]
pub struct MockResponse {
    result: Result<String, SlackError>,
}

impl MockResponse {
    /// A successful response with the given raw body
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            result: Ok(body.into()),
        }
    }

    /// A successful response with a JSON-serialized body
    pub fn json<T: Serialize>(data: &T) -> Self {
        Self {
            result: Ok(serde_json::to_string(data).expect("fixture must serialize")),
        }
    }

    /// An `ok: false` envelope carrying the given error code
    pub fn slack_error(error_code: &str) -> Self {
        Self {
            result: Ok(format!(r#"{{"ok":false,"error":"{}"}}"#, error_code)),
        }
    }

    /// A transport-level failure
    pub fn error(error: SlackError) -> Self {
        Self { result: Err(error) }
    }
}

/// A request captured by the mock transport
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Full endpoint URL
    pub url: String,
    /// Form fields in transmission order
    pub fields: Vec<(String, String)>,
    /// File names attached to a multipart request
    pub file_names: Vec<String>,
}

impl RecordedRequest {
    /// Look up a transmitted field value by name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Transmitted field names, sorted
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.iter().map(|(k, _)| k.as_str()).collect();
        names.sort_unstable();
        names
    }
}

/// Mock HTTP transport that replays queued responses
#[derive(Debug, Default)]
pub struct MockHttpTransport {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockHttpTransport {
    /// Create an empty mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response to be returned by the next send
    pub fn enqueue(&self, response: MockResponse) {
        self.responses.lock().push_back(response);
    }

    /// All requests captured so far
    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// The most recent captured request
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }

    fn next_response(&self) -> SlackResult<String> {
        match self.responses.lock().pop_front() {
            Some(response) => response.result,
            None => Err(SlackError::Network(NetworkError::ConnectionFailed {
                message: "mock transport has no queued response".to_string(),
            })),
        }
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send_form(&self, request: FormRequest) -> SlackResult<String> {
        self.requests.lock().push(RecordedRequest {
            url: request.url,
            fields: request.fields,
            file_names: Vec::new(),
        });
        self.next_response()
    }

    async fn send_multipart(&self, request: MultipartRequest) -> SlackResult<String> {
        self.requests.lock().push(RecordedRequest {
            url: request.url,
            fields: request.fields,
            file_names: request.files.into_iter().map(|f| f.file_name).collect(),
        });
        self.next_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderMap;

    #[test]
    fn test_replays_in_order() {
        let transport = MockHttpTransport::new();
        transport.enqueue(MockResponse::ok(r#"{"ok":true,"n":1}"#));
        transport.enqueue(MockResponse::slack_error("invalid_auth"));

        let first = tokio_test::block_on(
            transport.send_form(FormRequest::post("https://x/api/a", HeaderMap::new())),
        )
        .unwrap();
        assert!(first.contains(r#""n":1"#));

        let second = tokio_test::block_on(
            transport.send_form(FormRequest::post("https://x/api/b", HeaderMap::new())),
        )
        .unwrap();
        assert!(second.contains("invalid_auth"));

        let urls: Vec<String> = transport
            .recorded_requests()
            .into_iter()
            .map(|r| r.url)
            .collect();
        assert_eq!(urls, vec!["https://x/api/a", "https://x/api/b"]);
    }

    #[test]
    fn test_empty_queue_fails() {
        let transport = MockHttpTransport::new();
        let err = tokio_test::block_on(
            transport.send_form(FormRequest::post("https://x/api/a", HeaderMap::new())),
        )
        .unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_recorded_field_lookup() {
        let transport = MockHttpTransport::new();
        transport.enqueue(MockResponse::ok(r#"{"ok":true}"#));

        let request = FormRequest::post("https://x/api/a", HeaderMap::new())
            .field("token", "xoxb-test")
            .field("channel_id", "C123");
        tokio_test::block_on(transport.send_form(request)).unwrap();

        let recorded = transport.last_request().unwrap();
        assert_eq!(recorded.field("channel_id"), Some("C123"));
        assert_eq!(recorded.field_names(), vec!["channel_id", "token"]);
    }
}
