//! Request types for the bookmarks service.

use crate::types::ChannelId;

/// Request to add a bookmark.
///
/// `title` and `bookmark_type` are always transmitted; the optional fields
/// are omitted from the payload when unset.
#[derive(Debug, Clone)]
pub struct AddBookmarkRequest {
    /// Channel to add the bookmark to
    pub channel_id: ChannelId,
    /// Title of the bookmark
    pub title: String,
    /// Type of bookmark ("link")
    pub bookmark_type: String,
    /// Link URL, required for type "link"
    pub link: Option<String>,
    /// Emoji to use as the icon
    pub emoji: Option<String>,
    /// ID of an entity to associate with this bookmark
    pub entity_id: Option<String>,
    /// ID of the parent bookmark folder
    pub parent_id: Option<String>,
}

impl AddBookmarkRequest {
    /// Create a new link bookmark
    pub fn new_link(
        channel: impl Into<ChannelId>,
        title: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            channel_id: channel.into(),
            title: title.into(),
            bookmark_type: "link".to_string(),
            link: Some(link.into()),
            emoji: None,
            entity_id: None,
            parent_id: None,
        }
    }

    /// Set the emoji icon
    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    /// Set the associated entity
    pub fn entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Set the parent folder
    pub fn parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }
}

/// Request to edit a bookmark.
///
/// Unset fields are omitted from the payload and left unmodified remotely.
/// For `title` and `emoji` an explicit empty string clears the field.
#[derive(Debug, Clone)]
pub struct EditBookmarkRequest {
    /// Channel containing the bookmark
    pub channel_id: ChannelId,
    /// Bookmark ID to edit
    pub bookmark_id: String,
    /// New title; set to "" to clear
    pub title: Option<String>,
    /// New emoji; set to "" to clear
    pub emoji: Option<String>,
    /// New link
    pub link: Option<String>,
    /// New type
    pub bookmark_type: Option<String>,
}

impl EditBookmarkRequest {
    /// Create a new edit request
    pub fn new(channel: impl Into<ChannelId>, bookmark_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel.into(),
            bookmark_id: bookmark_id.into(),
            title: None,
            emoji: None,
            link: None,
            bookmark_type: None,
        }
    }

    /// Set a new title ("" clears it)
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set a new emoji ("" clears it)
    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    /// Set a new link
    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set a new type
    pub fn bookmark_type(mut self, bookmark_type: impl Into<String>) -> Self {
        self.bookmark_type = Some(bookmark_type.into());
        self
    }
}

/// Request to list bookmarks in a channel
#[derive(Debug, Clone)]
pub struct ListBookmarksRequest {
    /// Channel to list bookmarks from
    pub channel_id: ChannelId,
}

impl ListBookmarksRequest {
    /// Create a new list request
    pub fn new(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel_id: channel.into(),
        }
    }
}

/// Request to remove a bookmark
#[derive(Debug, Clone)]
pub struct RemoveBookmarkRequest {
    /// Channel containing the bookmark
    pub channel_id: ChannelId,
    /// Bookmark ID to remove
    pub bookmark_id: String,
}

impl RemoveBookmarkRequest {
    /// Create a new remove request
    pub fn new(channel: impl Into<ChannelId>, bookmark_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel.into(),
            bookmark_id: bookmark_id.into(),
        }
    }
}
