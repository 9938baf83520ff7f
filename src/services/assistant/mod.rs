//! Assistant threads service for the Slack API.
//!
//! Covers the `assistant.threads.*` endpoints used by app assistants to
//! update the status, title, and suggested prompts of an assistant thread.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
