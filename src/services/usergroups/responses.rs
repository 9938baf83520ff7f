//! Response types for the usergroups service.

use crate::types::{ResponseEnvelope, UserId};
use serde::Deserialize;

/// Response from usergroups.create
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUsergroupResponse {
    /// Common envelope
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    /// Created user group
    pub usergroup: Usergroup,
}

/// Response from usergroups.disable
#[derive(Debug, Clone, Deserialize)]
pub struct DisableUsergroupResponse {
    /// Common envelope
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    /// Disabled user group
    pub usergroup: Usergroup,
}

/// Response from usergroups.enable
#[derive(Debug, Clone, Deserialize)]
pub struct EnableUsergroupResponse {
    /// Common envelope
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    /// Enabled user group
    pub usergroup: Usergroup,
}

/// Response from usergroups.list
#[derive(Debug, Clone, Deserialize)]
pub struct ListUsergroupsResponse {
    /// Common envelope
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    /// All user groups in the team
    #[serde(default)]
    pub usergroups: Vec<Usergroup>,
}

/// Response from usergroups.update
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUsergroupResponse {
    /// Common envelope
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    /// Updated user group
    pub usergroup: Usergroup,
}

/// Response from usergroups.users.list
#[derive(Debug, Clone, Deserialize)]
pub struct UsergroupUsersListResponse {
    /// Common envelope
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    /// Member user IDs
    #[serde(default)]
    pub users: Vec<UserId>,
}

/// Response from usergroups.users.update
#[derive(Debug, Clone, Deserialize)]
pub struct UsergroupUsersUpdateResponse {
    /// Common envelope
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    /// User group with the new member list
    pub usergroup: Usergroup,
}

/// User group snapshot as of the call
#[derive(Debug, Clone, Deserialize)]
pub struct Usergroup {
    /// User group ID
    pub id: String,
    /// Team ID
    pub team_id: String,
    /// Whether this is a user group (always true)
    #[serde(default)]
    pub is_usergroup: bool,
    /// Name of the user group
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Mention handle
    #[serde(default)]
    pub handle: String,
    /// Whether this is an external group
    #[serde(default)]
    pub is_external: bool,
    /// Date created (Unix timestamp)
    #[serde(default)]
    pub date_create: i64,
    /// Date updated (Unix timestamp)
    #[serde(default)]
    pub date_update: i64,
    /// Date deleted (Unix timestamp, 0 when active)
    #[serde(default)]
    pub date_delete: i64,
    /// Auto type
    #[serde(default)]
    pub auto_type: Option<String>,
    /// Created by user ID
    #[serde(default)]
    pub created_by: String,
    /// Updated by user ID
    #[serde(default)]
    pub updated_by: Option<String>,
    /// Deleted by user ID
    #[serde(default)]
    pub deleted_by: Option<String>,
    /// Default channels and private channels
    #[serde(default)]
    pub prefs: UsergroupPrefs,
    /// Number of users in the group
    #[serde(default)]
    pub user_count: Option<i64>,
    /// Member user IDs (present when requested)
    #[serde(default)]
    pub users: Vec<UserId>,
}

impl Usergroup {
    /// Check if the user group has been disabled
    pub fn is_disabled(&self) -> bool {
        self.date_delete != 0
    }
}

/// Default channels and groups (private channels) for a user group
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsergroupPrefs {
    /// Default channel IDs
    #[serde(default)]
    pub channels: Vec<String>,
    /// Default private channel IDs
    #[serde(default)]
    pub groups: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_usergroup() {
        let body = r#"{
            "ok": true,
            "usergroup": {
                "id": "S0615G0KT",
                "team_id": "T060RNRCH",
                "is_usergroup": true,
                "name": "Marketing Team",
                "description": "Marketing gurus",
                "handle": "marketing-team",
                "date_create": 1446746793,
                "date_update": 1446746793,
                "date_delete": 0,
                "created_by": "U060RNRCZ",
                "prefs": {"channels": ["C061FA5PB"], "groups": []},
                "user_count": 3
            }
        }"#;

        let response: CreateUsergroupResponse = serde_json::from_str(body).unwrap();
        assert!(response.envelope.ok);
        assert_eq!(response.usergroup.handle, "marketing-team");
        assert!(!response.usergroup.is_disabled());
        assert_eq!(response.usergroup.prefs.channels, vec!["C061FA5PB"]);
    }

    #[test]
    fn test_disabled_usergroup() {
        let group = Usergroup {
            id: "S1".to_string(),
            team_id: "T1".to_string(),
            is_usergroup: true,
            name: "old".to_string(),
            description: None,
            handle: "old".to_string(),
            is_external: false,
            date_create: 1,
            date_update: 2,
            date_delete: 3,
            auto_type: None,
            created_by: "U1".to_string(),
            updated_by: None,
            deleted_by: Some("U2".to_string()),
            prefs: UsergroupPrefs::default(),
            user_count: None,
            users: Vec::new(),
        };
        assert!(group.is_disabled());
    }
}
