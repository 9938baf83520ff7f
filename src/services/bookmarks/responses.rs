//! Response types for the bookmarks service.

use crate::types::ResponseEnvelope;
use serde::Deserialize;

/// Response from bookmarks.add
#[derive(Debug, Clone, Deserialize)]
pub struct AddBookmarkResponse {
    /// Common envelope
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    /// Created bookmark
    pub bookmark: Bookmark,
}

/// Response from bookmarks.edit
#[derive(Debug, Clone, Deserialize)]
pub struct EditBookmarkResponse {
    /// Common envelope
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    /// Updated bookmark
    pub bookmark: Bookmark,
}

/// Response from bookmarks.list
#[derive(Debug, Clone, Deserialize)]
pub struct ListBookmarksResponse {
    /// Common envelope
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    /// All bookmarks in the channel
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
}

/// Response from bookmarks.remove
#[derive(Debug, Clone, Deserialize)]
pub struct RemoveBookmarkResponse {
    /// Common envelope
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
}

/// Bookmark snapshot as of the call
#[derive(Debug, Clone, Deserialize)]
pub struct Bookmark {
    /// Bookmark ID
    pub id: String,
    /// Channel ID
    pub channel_id: String,
    /// Bookmark title
    pub title: String,
    /// Link URL
    #[serde(default)]
    pub link: Option<String>,
    /// Emoji icon
    #[serde(default)]
    pub emoji: Option<String>,
    /// Icon URL
    #[serde(default)]
    pub icon_url: Option<String>,
    /// Type of bookmark
    #[serde(rename = "type")]
    pub bookmark_type: String,
    /// Date created (Unix timestamp)
    #[serde(default)]
    pub date_created: u64,
    /// Date updated (Unix timestamp)
    #[serde(default)]
    pub date_updated: u64,
    /// Rank (position in the channel's list)
    #[serde(default)]
    pub rank: String,
    /// Last updated by user ID
    #[serde(default)]
    pub last_updated_by_user_id: Option<String>,
    /// Last updated by team ID
    #[serde(default)]
    pub last_updated_by_team_id: Option<String>,
    /// Shortcut ID
    #[serde(default)]
    pub shortcut_id: Option<String>,
    /// Entity ID
    #[serde(default)]
    pub entity_id: Option<String>,
    /// App ID
    #[serde(default)]
    pub app_id: Option<String>,
    /// Parent ID (for folders)
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl Bookmark {
    /// Check if this is a link bookmark
    pub fn is_link(&self) -> bool {
        self.bookmark_type == "link"
    }

    /// Get the effective URL
    pub fn url(&self) -> Option<&str> {
        self.link.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_add_response() {
        let body = r#"{
            "ok": true,
            "bookmark": {
                "id": "Bk123",
                "channel_id": "C123",
                "title": "Docs",
                "link": "https://example.com",
                "type": "link",
                "date_created": 1700000000,
                "date_updated": 1700000000,
                "rank": "a"
            }
        }"#;

        let response: AddBookmarkResponse = serde_json::from_str(body).unwrap();
        assert!(response.envelope.ok);
        assert_eq!(response.bookmark.id, "Bk123");
        assert!(response.bookmark.is_link());
        assert_eq!(response.bookmark.url(), Some("https://example.com"));
    }

    #[test]
    fn test_deserialize_list_response_missing_bookmarks() {
        let response: ListBookmarksResponse = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert!(response.bookmarks.is_empty());
    }
}
