//! Test fixtures for Slack API responses.
//!
//! Provides realistic response bodies for unit tests. Fixtures are JSON
//! values so tests can tweak individual fields before feeding them to the
//! mock transport.

use serde_json::{json, Value};

/// A successful bookmarks.add / bookmarks.edit envelope
pub fn bookmark_envelope() -> Value {
    json!({
        "ok": true,
        "bookmark": {
            "id": "Bk030XE4LNNM",
            "channel_id": "C0123456789",
            "title": "Team Docs",
            "link": "https://example.com/docs",
            "emoji": ":books:",
            "type": "link",
            "date_created": 1646704881,
            "date_updated": 1646704881,
            "rank": "a",
            "last_updated_by_user_id": "U0123456789",
            "last_updated_by_team_id": "T0123456789",
            "shortcut_id": "",
            "entity_id": "",
            "app_id": ""
        }
    })
}

/// A successful bookmarks.list envelope with two bookmarks
pub fn bookmark_list_envelope() -> Value {
    let bookmark = bookmark_envelope()["bookmark"].clone();
    let mut second = bookmark.clone();
    second["id"] = json!("Bk030XE4LNNN");
    second["title"] = json!("Runbook");
    json!({
        "ok": true,
        "bookmarks": [bookmark, second]
    })
}

/// A successful usergroups.create / usergroups.update envelope
pub fn usergroup_envelope() -> Value {
    json!({
        "ok": true,
        "usergroup": {
            "id": "S0615G0KT",
            "team_id": "T060RNRCH",
            "is_usergroup": true,
            "name": "Marketing Team",
            "description": "Marketing gurus, PR experts",
            "handle": "marketing-team",
            "is_external": false,
            "date_create": 1446746793,
            "date_update": 1446746793,
            "date_delete": 0,
            "auto_type": null,
            "created_by": "U060RNRCZ",
            "updated_by": "U060RNRCZ",
            "deleted_by": null,
            "prefs": {
                "channels": ["C061FA5PB"],
                "groups": []
            },
            "user_count": 3
        }
    })
}

/// A successful usergroups.users.list envelope
pub fn usergroup_users_envelope() -> Value {
    json!({
        "ok": true,
        "users": ["U060R4BJ4", "U060RNRCZ", "U061F7AUR"]
    })
}

/// A successful files.upload envelope
pub fn file_envelope() -> Value {
    json!({
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
    })
}

/// A bare `ok: true` envelope
pub fn ok_envelope() -> Value {
    json!({"ok": true})
}

/// An `ok: false` envelope with the given error code
pub fn error_envelope(code: &str) -> Value {
    json!({"ok": false, "error": code})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_carry_envelope() {
        assert_eq!(bookmark_envelope()["ok"], json!(true));
        assert_eq!(usergroup_envelope()["ok"], json!(true));
        assert_eq!(file_envelope()["ok"], json!(true));
        assert_eq!(error_envelope("invalid_auth")["error"], json!("invalid_auth"));
    }
}
