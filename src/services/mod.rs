//! Service implementations for Slack API endpoints.
//!
//! Each service module provides methods for one family of remote endpoints.
//! All services share the same pattern: build a form payload from a typed
//! request, post it once through the transport, decode the envelope.

pub mod assistant;
pub mod bookmarks;
pub mod files;
pub mod usergroups;

pub use assistant::AssistantService;
pub use bookmarks::BookmarksService;
pub use files::FilesService;
pub use usergroups::UsergroupsService;
