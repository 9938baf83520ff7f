//! Request types for the files service.

use crate::types::{ChannelId, FileId, Timestamp};
use bytes::Bytes;

/// Request for files.upload
#[derive(Debug, Clone)]
pub struct UploadFileRequest {
    /// File content
    pub content: Bytes,
    /// File name, also used to guess the MIME type
    pub filename: String,
    /// Title shown in Slack
    pub title: Option<String>,
    /// Slack file type identifier, e.g. "text" or "png"
    pub filetype: Option<String>,
    /// Message posted alongside the file
    pub initial_comment: Option<String>,
    /// Channels to share the file into
    pub channels: Option<Vec<ChannelId>>,
    /// Thread to share the file into
    pub thread_ts: Option<Timestamp>,
}

impl UploadFileRequest {
    /// Create an upload request from in-memory content
    pub fn with_content(filename: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            content: content.into(),
            filename: filename.into(),
            title: None,
            filetype: None,
            initial_comment: None,
            channels: None,
            thread_ts: None,
        }
    }

    /// Set the title shown in Slack
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the Slack file type identifier
    pub fn filetype(mut self, filetype: impl Into<String>) -> Self {
        self.filetype = Some(filetype.into());
        self
    }

    /// Set the message posted alongside the file
    pub fn initial_comment(mut self, comment: impl Into<String>) -> Self {
        self.initial_comment = Some(comment.into());
        self
    }

    /// Set the channels the file is shared into
    pub fn channels(mut self, channels: Vec<ChannelId>) -> Self {
        self.channels = Some(channels);
        self
    }

    /// Share the file into a thread
    pub fn thread_ts(mut self, thread_ts: impl Into<Timestamp>) -> Self {
        self.thread_ts = Some(thread_ts.into());
        self
    }
}

/// Request for files.delete
#[derive(Debug, Clone)]
pub struct DeleteFileRequest {
    /// File to delete
    pub file: FileId,
}

impl DeleteFileRequest {
    /// Create a new delete request
    pub fn new(file: impl Into<FileId>) -> Self {
        Self { file: file.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_builder() {
        let request = UploadFileRequest::with_content("notes.txt", "hello".as_bytes().to_vec())
            .title("Notes")
            .channels(vec![ChannelId::from("C1"), ChannelId::from("C2")])
            .initial_comment("Here you go");

        assert_eq!(request.filename, "notes.txt");
        assert_eq!(request.title.as_deref(), Some("Notes"));
        assert_eq!(request.channels.as_ref().unwrap().len(), 2);
        assert!(request.thread_ts.is_none());
    }
}
