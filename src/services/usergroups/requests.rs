//! Request types for the usergroups service.
//!
//! The list and update endpoints take many optional parameters; they are
//! expressed as records with named optional fields and chainable setters.
//! Setters are last-wins and idempotent.

use crate::types::{TeamId, UserId};

/// Request to create a user group
#[derive(Debug, Clone)]
pub struct CreateUsergroupRequest {
    /// Name of the user group
    pub name: String,
    /// Mention handle (alphanumeric + underscore)
    pub handle: Option<String>,
    /// Description of the user group
    pub description: Option<String>,
    /// Default channel IDs for the group
    pub channels: Option<Vec<String>>,
    /// Team ID, required when an org token is used
    pub team_id: Option<TeamId>,
}

impl CreateUsergroupRequest {
    /// Create a new request
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handle: None,
            description: None,
            channels: None,
            team_id: None,
        }
    }

    /// Set the handle
    pub fn handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the default channels
    pub fn channels(mut self, channels: Vec<String>) -> Self {
        self.channels = Some(channels);
        self
    }

    /// Set the team ID
    pub fn team_id(mut self, team_id: impl Into<TeamId>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

/// Request to disable a user group
#[derive(Debug, Clone)]
pub struct DisableUsergroupRequest {
    /// User group ID
    pub usergroup: String,
    /// Team ID for enterprise grid setups
    pub team_id: Option<TeamId>,
}

impl DisableUsergroupRequest {
    /// Create a new request
    pub fn new(usergroup: impl Into<String>) -> Self {
        Self {
            usergroup: usergroup.into(),
            team_id: None,
        }
    }

    /// Set the team ID
    pub fn team_id(mut self, team_id: impl Into<TeamId>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

/// Request to enable a user group
#[derive(Debug, Clone)]
pub struct EnableUsergroupRequest {
    /// User group ID
    pub usergroup: String,
    /// Team ID for enterprise grid setups
    pub team_id: Option<TeamId>,
}

impl EnableUsergroupRequest {
    /// Create a new request
    pub fn new(usergroup: impl Into<String>) -> Self {
        Self {
            usergroup: usergroup.into(),
            team_id: None,
        }
    }

    /// Set the team ID
    pub fn team_id(mut self, team_id: impl Into<TeamId>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

/// Request to list user groups
#[derive(Debug, Clone, Default)]
pub struct ListUsergroupsRequest {
    /// Include the number of users in each group (default: false)
    pub include_count: Option<bool>,
    /// Include disabled groups (default: false)
    pub include_disabled: Option<bool>,
    /// Include the member list of each group (default: false)
    pub include_users: Option<bool>,
    /// Team to list groups in, required if an org token is used
    pub team_id: Option<TeamId>,
}

impl ListUsergroupsRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Include user counts
    pub fn include_count(mut self, include: bool) -> Self {
        self.include_count = Some(include);
        self
    }

    /// Include disabled groups
    pub fn include_disabled(mut self, include: bool) -> Self {
        self.include_disabled = Some(include);
        self
    }

    /// Include member lists
    pub fn include_users(mut self, include: bool) -> Self {
        self.include_users = Some(include);
        self
    }

    /// Set the team ID
    pub fn team_id(mut self, team_id: impl Into<TeamId>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

/// Request to update a user group.
///
/// Unset fields are omitted from the payload and left unmodified remotely.
/// An explicit empty `description` clears it.
#[derive(Debug, Clone)]
pub struct UpdateUsergroupRequest {
    /// User group ID
    pub usergroup: String,
    /// New name
    pub name: Option<String>,
    /// New handle
    pub handle: Option<String>,
    /// New description; set to "" to clear
    pub description: Option<String>,
    /// New default channels
    pub channels: Option<Vec<String>>,
    /// Team ID for enterprise grid setups
    pub team_id: Option<TeamId>,
}

impl UpdateUsergroupRequest {
    /// Create a new request
    pub fn new(usergroup: impl Into<String>) -> Self {
        Self {
            usergroup: usergroup.into(),
            name: None,
            handle: None,
            description: None,
            channels: None,
            team_id: None,
        }
    }

    /// Set a new name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set a new handle
    pub fn handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    /// Set a new description ("" clears it)
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set new default channels
    pub fn channels(mut self, channels: Vec<String>) -> Self {
        self.channels = Some(channels);
        self
    }

    /// Set the team ID
    pub fn team_id(mut self, team_id: impl Into<TeamId>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

/// Request to list members of a user group
#[derive(Debug, Clone)]
pub struct UsergroupUsersListRequest {
    /// User group ID
    pub usergroup: String,
    /// Team ID for enterprise grid setups
    pub team_id: Option<TeamId>,
}

impl UsergroupUsersListRequest {
    /// Create a new request
    pub fn new(usergroup: impl Into<String>) -> Self {
        Self {
            usergroup: usergroup.into(),
            team_id: None,
        }
    }

    /// Set the team ID
    pub fn team_id(mut self, team_id: impl Into<TeamId>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

/// Request to replace the members of a user group
#[derive(Debug, Clone)]
pub struct UsergroupUsersUpdateRequest {
    /// User group ID
    pub usergroup: String,
    /// User IDs to set as the full member list
    pub users: Vec<UserId>,
    /// Team ID for enterprise grid setups
    pub team_id: Option<TeamId>,
}

impl UsergroupUsersUpdateRequest {
    /// Create a new request
    pub fn new(usergroup: impl Into<String>, users: Vec<UserId>) -> Self {
        Self {
            usergroup: usergroup.into(),
            users,
            team_id: None,
        }
    }

    /// Set the team ID
    pub fn team_id(mut self, team_id: impl Into<TeamId>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_last_wins() {
        let request = ListUsergroupsRequest::new()
            .include_count(true)
            .include_count(false);
        assert_eq!(request.include_count, Some(false));
    }

    #[test]
    fn test_setters_idempotent() {
        let once = UpdateUsergroupRequest::new("S123").name("devs");
        let twice = UpdateUsergroupRequest::new("S123").name("devs").name("devs");
        assert_eq!(once.name, twice.name);
    }
}
