//! User groups service implementation.

use super::*;
use crate::auth::AuthManager;
use crate::errors::SlackResult;
use crate::transport::{decode_response, FormRequest, HttpTransport};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Trait for user group service operations
#[async_trait]
pub trait UsergroupsServiceTrait: Send + Sync {
    /// Create a user group
    async fn create(&self, request: CreateUsergroupRequest)
        -> SlackResult<CreateUsergroupResponse>;

    /// Disable a user group
    async fn disable(
        &self,
        request: DisableUsergroupRequest,
    ) -> SlackResult<DisableUsergroupResponse>;

    /// Re-enable a previously disabled user group
    async fn enable(&self, request: EnableUsergroupRequest)
        -> SlackResult<EnableUsergroupResponse>;

    /// List all user groups in the team
    async fn list(&self, request: ListUsergroupsRequest) -> SlackResult<ListUsergroupsResponse>;

    /// Update a user group's properties
    async fn update(&self, request: UpdateUsergroupRequest)
        -> SlackResult<UpdateUsergroupResponse>;

    /// List the members of a user group
    async fn users_list(
        &self,
        request: UsergroupUsersListRequest,
    ) -> SlackResult<UsergroupUsersListResponse>;

    /// Replace the members of a user group
    async fn users_update(
        &self,
        request: UsergroupUsersUpdateRequest,
    ) -> SlackResult<UsergroupUsersUpdateResponse>;
}

/// User groups service implementation
#[derive(Clone)]
pub struct UsergroupsService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    base_url: String,
}

impl UsergroupsService {
    /// Create a new user groups service
    pub fn new(transport: Arc<dyn HttpTransport>, auth: AuthManager, base_url: String) -> Self {
        Self {
            transport,
            auth,
            base_url,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    fn form(&self, endpoint: &str) -> SlackResult<FormRequest> {
        Ok(
            FormRequest::post(self.build_url(endpoint), self.auth.bearer_headers()?)
                .field("token", self.auth.form_token()?),
        )
    }
}

fn join_channels(channels: Vec<String>) -> String {
    channels.join(",")
}

fn join_users(users: &[crate::types::UserId]) -> String {
    users
        .iter()
        .map(|u| u.0.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

#[async_trait]
impl UsergroupsServiceTrait for UsergroupsService {
    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create(
        &self,
        request: CreateUsergroupRequest,
    ) -> SlackResult<CreateUsergroupResponse> {
        let form = self
            .form("usergroups.create")?
            .field("name", request.name)
            .opt_field("handle", request.handle)
            .opt_field("description", request.description)
            .opt_field("channels", request.channels.map(join_channels))
            .opt_field("team_id", request.team_id.map(|t| t.0));

        decode_response(&self.transport.send_form(form).await?)
    }

    #[instrument(skip(self, request), fields(usergroup = %request.usergroup))]
    async fn disable(
        &self,
        request: DisableUsergroupRequest,
    ) -> SlackResult<DisableUsergroupResponse> {
        let form = self
            .form("usergroups.disable")?
            .field("usergroup", request.usergroup)
            .opt_field("team_id", request.team_id.map(|t| t.0));

        decode_response(&self.transport.send_form(form).await?)
    }

    #[instrument(skip(self, request), fields(usergroup = %request.usergroup))]
    async fn enable(
        &self,
        request: EnableUsergroupRequest,
    ) -> SlackResult<EnableUsergroupResponse> {
        let form = self
            .form("usergroups.enable")?
            .field("usergroup", request.usergroup)
            .opt_field("team_id", request.team_id.map(|t| t.0));

        decode_response(&self.transport.send_form(form).await?)
    }

    #[instrument(skip(self, request))]
    async fn list(&self, request: ListUsergroupsRequest) -> SlackResult<ListUsergroupsResponse> {
        let mut form = self.form("usergroups.list")?;
        if let Some(true) = request.include_count {
            form = form.field("include_count", "true");
        }
        if let Some(true) = request.include_disabled {
            form = form.field("include_disabled", "true");
        }
        if let Some(true) = request.include_users {
            form = form.field("include_users", "true");
        }
        form = form.opt_field("team_id", request.team_id.map(|t| t.0));

        decode_response(&self.transport.send_form(form).await?)
    }

    #[instrument(skip(self, request), fields(usergroup = %request.usergroup))]
    async fn update(
        &self,
        request: UpdateUsergroupRequest,
    ) -> SlackResult<UpdateUsergroupResponse> {
        let form = self
            .form("usergroups.update")?
            .field("usergroup", request.usergroup)
            .opt_field("name", request.name)
            .opt_field("handle", request.handle)
            .opt_field("description", request.description)
            .opt_field("channels", request.channels.map(join_channels))
            .opt_field("team_id", request.team_id.map(|t| t.0));

        decode_response(&self.transport.send_form(form).await?)
    }

    #[instrument(skip(self, request), fields(usergroup = %request.usergroup))]
    async fn users_list(
        &self,
        request: UsergroupUsersListRequest,
    ) -> SlackResult<UsergroupUsersListResponse> {
        let form = self
            .form("usergroups.users.list")?
            .field("usergroup", request.usergroup)
            .opt_field("team_id", request.team_id.map(|t| t.0));

        decode_response(&self.transport.send_form(form).await?)
    }

    #[instrument(skip(self, request), fields(usergroup = %request.usergroup, users = request.users.len()))]
    async fn users_update(
        &self,
        request: UsergroupUsersUpdateRequest,
    ) -> SlackResult<UsergroupUsersUpdateResponse> {
        let form = self
            .form("usergroups.users.update")?
            .field("usergroup", request.usergroup)
            .field("users", join_users(&request.users))
            .opt_field("team_id", request.team_id.map(|t| t.0));

        decode_response(&self.transport.send_form(form).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserId;

    #[test]
    fn test_join_users() {
        let users = vec![UserId::from("U1"), UserId::from("U2"), UserId::from("U3")];
        assert_eq!(join_users(&users), "U1,U2,U3");
    }

    #[test]
    fn test_join_channels() {
        let channels = vec!["C1".to_string(), "C2".to_string()];
        assert_eq!(join_channels(channels), "C1,C2");
    }
}
