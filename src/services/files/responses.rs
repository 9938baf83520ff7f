//! Response types for the files service.

use crate::types::{FileId, ResponseEnvelope, UserId};
use serde::Deserialize;

/// Response from files.upload
#[derive(Debug, Clone, Deserialize)]
pub struct UploadFileResponse {
    /// Common envelope
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    /// Uploaded file metadata
    pub file: File,
}

/// Response from files.delete
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteFileResponse {
    /// Common envelope
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
}

/// File metadata returned by Slack
#[derive(Debug, Clone, Deserialize)]
pub struct File {
    /// File ID
    pub id: FileId,
    /// Creation time (Unix timestamp)
    #[serde(default)]
    pub created: i64,
    /// Deprecated duplicate of created
    #[serde(default)]
    pub timestamp: i64,
    /// File name
    #[serde(default)]
    pub name: Option<String>,
    /// Title shown in Slack
    #[serde(default)]
    pub title: Option<String>,
    /// MIME type
    #[serde(default)]
    pub mimetype: Option<String>,
    /// Slack file type identifier
    #[serde(default)]
    pub filetype: Option<String>,
    /// Uploading user
    #[serde(default)]
    pub user: Option<UserId>,
    /// Size in bytes
    #[serde(default)]
    pub size: Option<u64>,
    /// Authenticated download URL
    #[serde(default)]
    pub url_private: Option<String>,
    /// Permalink to the file
    #[serde(default)]
    pub permalink: Option<String>,
    /// Channels the file is shared into
    #[serde(default)]
    pub channels: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_upload_response() {
        let body = r#"{
            "ok": true,
            "file": {
                "id": "F0S43PZDF",
                "created": 1531763342,
                "timestamp": 1531763342,
                "name": "tedair.gif",
                "title": "tedair.gif",
                "mimetype": "image/gif",
                "filetype": "gif",
                "user": "U061F7AUR",
                "size": 137410,
                "url_private": "https://files.slack.com/files-pri/T061EG9R6-F0S43PZDF/tedair.gif",
                "permalink": "https://example.slack.com/files/U061F7AUR/F0S43PZDF/tedair.gif",
                "channels": ["C0T8SE4AU"]
            }
        }"#;

        let response: UploadFileResponse = serde_json::from_str(body).unwrap();
        assert!(response.envelope.ok);
        assert_eq!(response.file.id.as_str(), "F0S43PZDF");
        assert_eq!(response.file.size, Some(137410));
        assert_eq!(response.file.channels, vec!["C0T8SE4AU"]);
    }

    #[test]
    fn test_deserialize_sparse_file() {
        let response: UploadFileResponse =
            serde_json::from_str(r#"{"ok": true, "file": {"id": "F1"}}"#).unwrap();
        assert_eq!(response.file.id.as_str(), "F1");
        assert!(response.file.name.is_none());
        assert!(response.file.channels.is_empty());
    }
}
