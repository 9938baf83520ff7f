//! Response types for the assistant threads service.
//!
//! The assistant.threads.* endpoints return only the common envelope.

use crate::types::ResponseEnvelope;
use serde::Deserialize;

/// Response from assistant.threads.setStatus
#[derive(Debug, Clone, Deserialize)]
pub struct SetStatusResponse {
    /// Common envelope
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
}

/// Response from assistant.threads.setTitle
#[derive(Debug, Clone, Deserialize)]
pub struct SetTitleResponse {
    /// Common envelope
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
}

/// Response from assistant.threads.setSuggestedPrompts
#[derive(Debug, Clone, Deserialize)]
pub struct SetSuggestedPromptsResponse {
    /// Common envelope
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_envelope_only() {
        let response: SetStatusResponse = serde_json::from_str(r#"{"ok": true}"#).unwrap();
        assert!(response.envelope.ok);
        assert!(response.envelope.error.is_none());
    }
}
