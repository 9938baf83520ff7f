//! Files service for the Slack API.
//!
//! Handles multipart uploads via files.upload and deletion via files.delete.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
