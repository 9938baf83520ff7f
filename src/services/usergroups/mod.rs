//! User groups service for the Slack API.
//!
//! Provides methods for creating, enabling, disabling, listing, and updating
//! user groups and their membership.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
