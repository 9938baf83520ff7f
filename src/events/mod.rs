//! Event payloads related to assistant threads.
//!
//! These are the inbound Events API payloads an app receives when a user
//! opens an assistant thread or its context changes. The crate does not
//! receive events itself; these types are for callers that deserialize
//! event callbacks delivered to their own endpoint.

use crate::types::{ChannelId, Timestamp, UserId};
use serde::Deserialize;

/// Event sent when a user opens an assistant thread
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantThreadStartedEvent {
    /// Event type, always `assistant_thread_started`
    #[serde(rename = "type")]
    pub event_type: String,
    /// The thread that was started
    pub assistant_thread: AssistantThreadPayload,
}

/// Event sent when the context of an assistant thread changes,
/// e.g. the user switches channels while the thread is open
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantThreadContextChangedEvent {
    /// Event type, always `assistant_thread_context_changed`
    #[serde(rename = "type")]
    pub event_type: String,
    /// The thread whose context changed
    pub assistant_thread: AssistantThreadPayload,
}

/// Assistant thread details carried by both thread events
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantThreadPayload {
    /// User interacting with the assistant
    pub user_id: UserId,
    /// DM channel hosting the thread
    pub channel_id: ChannelId,
    /// Timestamp of the thread's root message
    pub thread_ts: Timestamp,
    /// Where the user was when the thread started or changed
    #[serde(default)]
    pub context: Option<AssistantThreadContextPayload>,
}

/// Context the user was viewing alongside the assistant thread
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantThreadContextPayload {
    /// Channel the user is viewing
    #[serde(default)]
    pub channel_id: Option<ChannelId>,
    /// Team owning that channel
    #[serde(default)]
    pub team_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_thread_started() {
        let body = r#"{
            "type": "assistant_thread_started",
            "assistant_thread": {
                "user_id": "U061F7AUR",
                "channel_id": "D0LAN2Q65",
                "thread_ts": "1715020008.968419",
                "context": {
                    "channel_id": "C0EB67URE",
                    "team_id": "T0123456"
                }
            }
        }"#;

        let event: AssistantThreadStartedEvent = serde_json::from_str(body).unwrap();
        assert_eq!(event.event_type, "assistant_thread_started");
        assert_eq!(event.assistant_thread.channel_id.as_str(), "D0LAN2Q65");
        let context = event.assistant_thread.context.unwrap();
        assert_eq!(context.team_id.as_deref(), Some("T0123456"));
    }

    #[test]
    fn test_deserialize_context_changed_without_context() {
        let body = r#"{
            "type": "assistant_thread_context_changed",
            "assistant_thread": {
                "user_id": "U061F7AUR",
                "channel_id": "D0LAN2Q65",
                "thread_ts": "1715020008.968419"
            }
        }"#;

        let event: AssistantThreadContextChangedEvent = serde_json::from_str(body).unwrap();
        assert!(event.assistant_thread.context.is_none());
    }
}
