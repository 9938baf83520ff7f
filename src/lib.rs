//! Slack Web API Client
//!
//! Typed bindings to a slice of the Slack Web API:
//! - Bookmarks (`bookmarks.*`)
//! - User groups (`usergroups.*`)
//! - Assistant threads (`assistant.threads.*`)
//! - File upload and deletion (`files.upload`, `files.delete`)
//!
//! Every endpoint follows the same shape: build a form-encoded payload from a
//! typed request, POST it once through the shared transport, and decode the
//! JSON envelope into a typed response or an error carrying the remote error
//! string.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use slack_web::SlackClient;
//! use slack_web::services::bookmarks::{AddBookmarkRequest, BookmarksServiceTrait};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from SLACK_TOKEN
//!     let client = slack_web::create_client_from_env()?;
//!
//!     let response = client
//!         .bookmarks()
//!         .add(AddBookmarkRequest::new_link("C0123456789", "Docs", "https://example.com"))
//!         .await?;
//!
//!     println!("Bookmark added: {}", response.bookmark.id);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Core modules
pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod transport;
pub mod types;

// Services
pub mod services;

// Event payloads
pub mod events;

// Observability
pub mod observability;

// Testing utilities
pub mod fixtures;
pub mod mocks;

// Tests
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use client::{SlackClient, SlackClientImpl};
pub use config::{SlackConfig, SlackConfigBuilder};
pub use errors::{SlackError, SlackResult};
pub use types::ResponseEnvelope;

/// Default base URL for the Slack Web API
pub const DEFAULT_BASE_URL: &str = "https://slack.com/api";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Create a Slack client with the given configuration
pub fn create_client(config: SlackConfig) -> SlackResult<SlackClientImpl> {
    SlackClientImpl::new(config)
}

/// Create a Slack client from environment variables
///
/// Reads:
/// - `SLACK_TOKEN` - API token (xoxb-*, xoxp-*, or xapp-*)
/// - `SLACK_BASE_URL` - Override the API base URL
/// - `SLACK_TIMEOUT` - Request timeout in seconds
pub fn create_client_from_env() -> SlackResult<SlackClientImpl> {
    let config = SlackConfig::from_env()?;
    create_client(config)
}
