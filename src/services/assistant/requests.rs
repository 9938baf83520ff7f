//! Request types for the assistant threads service.

use crate::types::{ChannelId, Timestamp};
use serde::{Deserialize, Serialize};

/// Request for assistant.threads.setStatus
///
/// The status string is always transmitted; an empty string clears the
/// status shown to the user.
#[derive(Debug, Clone)]
pub struct SetStatusRequest {
    /// Channel containing the assistant thread
    pub channel_id: ChannelId,
    /// Timestamp of the thread's root message
    pub thread_ts: Timestamp,
    /// Status text, empty to clear
    pub status: String,
}

impl SetStatusRequest {
    /// Create a new set-status request
    pub fn new(
        channel_id: impl Into<ChannelId>,
        thread_ts: impl Into<Timestamp>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            thread_ts: thread_ts.into(),
            status: status.into(),
        }
    }

    /// Create a request that clears the thread status
    pub fn clear(channel_id: impl Into<ChannelId>, thread_ts: impl Into<Timestamp>) -> Self {
        Self::new(channel_id, thread_ts, "")
    }
}

/// Request for assistant.threads.setTitle
#[derive(Debug, Clone)]
pub struct SetTitleRequest {
    /// Channel containing the assistant thread
    pub channel_id: ChannelId,
    /// Timestamp of the thread's root message
    pub thread_ts: Timestamp,
    /// Title to display for the thread
    pub title: String,
}

impl SetTitleRequest {
    /// Create a new set-title request
    pub fn new(
        channel_id: impl Into<ChannelId>,
        thread_ts: impl Into<Timestamp>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            thread_ts: thread_ts.into(),
            title: title.into(),
        }
    }
}

/// A single suggested prompt shown to the user in an assistant thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedPrompt {
    /// Short label shown on the prompt button
    pub title: String,
    /// Message sent when the prompt is selected
    pub message: String,
}

impl SuggestedPrompt {
    /// Create a new suggested prompt
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Request for assistant.threads.setSuggestedPrompts
#[derive(Debug, Clone)]
pub struct SetSuggestedPromptsRequest {
    /// Channel containing the assistant thread
    pub channel_id: ChannelId,
    /// Timestamp of the thread's root message
    pub thread_ts: Timestamp,
    /// Optional heading shown above the prompts
    pub title: Option<String>,
    /// Prompts to offer
    pub prompts: Vec<SuggestedPrompt>,
}

impl SetSuggestedPromptsRequest {
    /// Create a new set-suggested-prompts request
    pub fn new(channel_id: impl Into<ChannelId>, thread_ts: impl Into<Timestamp>) -> Self {
        Self {
            channel_id: channel_id.into(),
            thread_ts: thread_ts.into(),
            title: None,
            prompts: Vec::new(),
        }
    }

    /// Set the heading shown above the prompts
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a suggested prompt
    pub fn prompt(mut self, title: impl Into<String>, message: impl Into<String>) -> Self {
        self.prompts.push(SuggestedPrompt::new(title, message));
        self
    }

    /// Replace the full prompt list
    pub fn prompts(mut self, prompts: Vec<SuggestedPrompt>) -> Self {
        self.prompts = prompts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_status() {
        let request = SetStatusRequest::clear("D12345", "1700000000.000100");
        assert_eq!(request.status, "");
        assert_eq!(request.channel_id.as_str(), "D12345");
    }

    #[test]
    fn test_prompt_builder_appends() {
        let request = SetSuggestedPromptsRequest::new("D12345", "1700000000.000100")
            .title("Try one of these")
            .prompt("Summarize", "Summarize this thread")
            .prompt("Translate", "Translate this thread to French");

        assert_eq!(request.prompts.len(), 2);
        assert_eq!(request.prompts[1].title, "Translate");
    }

    #[test]
    fn test_prompt_serialization() {
        let prompt = SuggestedPrompt::new("Summarize", "Summarize this thread");
        let json = serde_json::to_string(&prompt).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Summarize","message":"Summarize this thread"}"#
        );
    }
}
