/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::v2::errors::SmarterUError;
use crate::v2::group::{groups_from_list, user_groups_from_info};
use crate::v2::learner_report::reports_from_info;
use crate::v2::macros::require;
use crate::v2::user::users_from_list;
use crate::v2::{
    ApiClient, ApiResponse, AuthenticationType, Creds, ExternalAuthorization,
    GetLearnerReportQuery, GetUserQuery, Group, GroupPermissions, LearnerReport,
    ListGroupsQuery, ListUsersQuery, MembershipAction, Permission, PermissionAction, User,
    UserRef, XmlGenerator,
};
use async_stream::try_stream;
use futures::Stream;
use std::sync::Arc;

// Page size used by list_users_stream when the query does not set one
const DEFAULT_PAGE_SIZE: u32 = 50;

/// Typed access to the SmarterU API.
///
/// Every call validates its input, sends exactly one request and maps the `<Info>`
/// block of the response back onto the data types. Cloning is cheap and clones share
/// the underlying HTTP client.
///
/// ```rust,no_run
/// use smarteru::v2::{Client, Creds, GetUserQuery};
///
/// # async fn run() -> Result<(), smarteru::v2::SmarterUError> {
/// let client = Client::new(Creds::new("account-api-key", "user-api-key"));
/// let user = client.get_user(&GetUserQuery::by_email("jane@example.com")).await?;
/// if let Some(user) = user.response {
///     println!("{:?} {:?}", user.given_name, user.surname);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    api_client: Arc<ApiClient>,
}

impl Client {
    pub fn new(creds: Creds) -> Self {
        Self {
            api_client: Arc::new(ApiClient::new(creds)),
        }
    }

    /// Creates a client that posts to `endpoint` through the provided HTTP client
    pub fn with_http_client(
        creds: Creds,
        http_client: reqwest::Client,
        endpoint: &str,
    ) -> Result<Self, SmarterUError> {
        Ok(Self {
            api_client: Arc::new(ApiClient::with_http_client(creds, http_client, endpoint)?),
        })
    }

    /// Lower level interface used by the typed calls
    pub fn api_client(&self) -> &ApiClient {
        &self.api_client
    }

    /// Generator producing exactly the envelopes this client sends
    pub fn generator(&self) -> XmlGenerator<'_> {
        XmlGenerator::new(&self.api_client.creds)
    }

    /// Creates a user and returns its email and employee id as SmarterU stored them
    pub async fn create_user(&self, user: &User) -> Result<User, SmarterUError> {
        require!(
            user.email.is_some() || user.employee_id.is_some(),
            "A user cannot be created without either an email or an employee id"
        );
        require!(user.given_name.is_some(), "A user cannot be created without a given name");
        require!(user.surname.is_some(), "A user cannot be created without a surname");
        require!(
            user.password.is_some() || user.authentication_type == Some(AuthenticationType::External),
            "A user cannot be created without a password unless it authenticates externally"
        );
        require!(user.home_group.is_some(), "A user cannot be created without a home group");

        let xml = self.generator().create_user(user)?;
        let body = self.api_client.post("createUser", xml).await?;
        Ok(User::from_identity_info(&body.info))
    }

    /// Updates a user.
    ///
    /// Set `old_email` or `old_employee_id` to change a user's email or employee id. Once
    /// SmarterU accepts the update both are cleared on `user`, so sending the same value
    /// again does not repeat the rename. They are left untouched when the call fails.
    pub async fn update_user(&self, user: &mut User) -> Result<User, SmarterUError> {
        require!(
            user.has_identifier(),
            "A user cannot be updated without either an email or an employee id"
        );

        let xml = self.generator().update_user(user)?;
        let body = self.api_client.post("updateUser", xml).await?;
        user.clear_old_identifiers();
        Ok(User::from_identity_info(&body.info))
    }

    pub async fn get_user(
        &self,
        query: &GetUserQuery,
    ) -> Result<ApiResponse<Option<User>>, SmarterUError> {
        let xml = self.generator().get_user(query)?;
        let body = self.api_client.post("getUser", xml).await?;
        let user = body.info.child("User").map(User::from_element).transpose()?;
        Ok(ApiResponse::new(user, body.errors))
    }

    /// Lists one page of users matching the query
    pub async fn list_users(&self, query: &ListUsersQuery) -> Result<Vec<User>, SmarterUError> {
        let xml = self.generator().list_users(query)?;
        let body = self.api_client.post("listUsers", xml).await?;
        users_from_list(&body.info)
    }

    /// Streams every user matching the query, requesting one page at a time.
    ///
    /// Paging starts at `query.page` (default 1) and stops after the first page holding
    /// fewer users than the page size.
    pub fn list_users_stream(
        &self,
        query: ListUsersQuery,
    ) -> impl Stream<Item = Result<User, SmarterUError>> + '_ {
        try_stream! {
            let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
            let mut page = query.page.unwrap_or(1);
            loop {
                let page_query = ListUsersQuery {
                    page: Some(page),
                    page_size: Some(page_size),
                    ..query.clone()
                };
                let users = self.list_users(&page_query).await?;
                let count = users.len();
                for user in users {
                    yield user;
                }
                if count == 0 || count < page_size as usize {
                    break;
                }
                page += 1;
            }
        }
    }

    /// The groups a user belongs to and the user's permissions in each
    pub async fn get_user_groups(
        &self,
        query: &GetUserQuery,
    ) -> Result<ApiResponse<Vec<GroupPermissions>>, SmarterUError> {
        let xml = self.generator().get_user_groups(query)?;
        let body = self.api_client.post("getUserGroups", xml).await?;
        let groups = user_groups_from_info(&body.info)?;
        Ok(ApiResponse::new(groups, body.errors))
    }

    /// Creates a group and returns its name and group id as SmarterU stored them
    pub async fn create_group(&self, group: &Group) -> Result<Group, SmarterUError> {
        require!(group.name.is_some(), "A group cannot be created without a name");

        let xml = self.generator().create_group(group)?;
        let body = self.api_client.post("createGroup", xml).await?;
        Ok(Group::from_identity_info(&body.info))
    }

    /// Updates a group.
    ///
    /// Set `old_name` or `old_group_id` to rename a group. Once SmarterU accepts the
    /// update both are cleared on `group`; they are left untouched when the call fails.
    pub async fn update_group(
        &self,
        group: &mut Group,
    ) -> Result<ApiResponse<Group>, SmarterUError> {
        require!(
            group.has_identifier(),
            "A group cannot be updated without either a name or a group id"
        );

        let xml = self.generator().update_group(group)?;
        let body = self.api_client.post("updateGroup", xml).await?;
        group.clear_old_identifiers();
        Ok(ApiResponse::new(
            Group::from_identity_info(&body.info),
            body.errors,
        ))
    }

    pub async fn get_group(
        &self,
        group: &Group,
    ) -> Result<ApiResponse<Option<Group>>, SmarterUError> {
        let group_ref = group.group_ref().ok_or_else(|| {
            SmarterUError::MissingValue(
                "A group cannot be retrieved without either a name or a group id".to_string(),
            )
        })?;

        let xml = self.generator().get_group(&group_ref)?;
        let body = self.api_client.post("getGroup", xml).await?;
        let group = body.info.child("Group").map(Group::from_element).transpose()?;
        Ok(ApiResponse::new(group, body.errors))
    }

    pub async fn list_groups(
        &self,
        query: &ListGroupsQuery,
    ) -> Result<ApiResponse<Vec<Group>>, SmarterUError> {
        let xml = self.generator().list_groups(query)?;
        let body = self.api_client.post("listGroups", xml).await?;
        Ok(ApiResponse::new(groups_from_list(&body.info), body.errors))
    }

    pub async fn add_users_to_group(
        &self,
        users: &[User],
        group: &Group,
    ) -> Result<ApiResponse<Group>, SmarterUError> {
        self.change_group_members(users, group, MembershipAction::Add)
            .await
    }

    pub async fn remove_users_from_group(
        &self,
        users: &[User],
        group: &Group,
    ) -> Result<ApiResponse<Group>, SmarterUError> {
        self.change_group_members(users, group, MembershipAction::Remove)
            .await
    }

    /// Grants the named permission codes (e.g. `MANAGE_USERS`) to a user within a group
    pub async fn grant_permissions<S: AsRef<str>>(
        &self,
        user: &User,
        group: &Group,
        permissions: &[S],
    ) -> Result<ApiResponse<Group>, SmarterUError> {
        let permissions = Permission::from_codes(PermissionAction::Grant, permissions)?;
        self.change_permissions(user, group, &permissions).await
    }

    /// Revokes the named permission codes from a user within a group
    pub async fn revoke_permissions<S: AsRef<str>>(
        &self,
        user: &User,
        group: &Group,
        permissions: &[S],
    ) -> Result<ApiResponse<Group>, SmarterUError> {
        let permissions = Permission::from_codes(PermissionAction::Deny, permissions)?;
        self.change_permissions(user, group, &permissions).await
    }

    /// One page of the learner report
    pub async fn get_learner_report(
        &self,
        query: &GetLearnerReportQuery,
    ) -> Result<Vec<LearnerReport>, SmarterUError> {
        query.validate()?;

        let xml = self.generator().get_learner_report(query)?;
        let body = self.api_client.post("getLearnerReport", xml).await?;
        reports_from_info(&body.info)
    }

    pub async fn request_external_authorization_by_email(
        &self,
        email: &str,
    ) -> Result<ExternalAuthorization, SmarterUError> {
        require!(
            !email.trim().is_empty(),
            "External authorization requires an email"
        );
        self.request_external_authorization(UserRef::Email(email.into()))
            .await
    }

    pub async fn request_external_authorization_by_employee_id(
        &self,
        employee_id: &str,
    ) -> Result<ExternalAuthorization, SmarterUError> {
        require!(
            !employee_id.trim().is_empty(),
            "External authorization requires an employee id"
        );
        self.request_external_authorization(UserRef::EmployeeId(employee_id.into()))
            .await
    }

    async fn request_external_authorization(
        &self,
        user: UserRef,
    ) -> Result<ExternalAuthorization, SmarterUError> {
        let xml = self.generator().request_external_authorization(&user)?;
        let body = self
            .api_client
            .post("requestExternalAuthorization", xml)
            .await?;
        ExternalAuthorization::from_info(&body.info)
    }

    async fn change_group_members(
        &self,
        users: &[User],
        group: &Group,
        action: MembershipAction,
    ) -> Result<ApiResponse<Group>, SmarterUError> {
        require!(
            group.has_identifier(),
            "Group membership cannot be changed without a group name or group id"
        );
        for user in users {
            require!(
                user.email.is_some() || user.employee_id.is_some(),
                "Every user added to or removed from a group needs an email or an employee id"
            );
        }

        let xml = self.generator().change_group_members(group, users, action)?;
        let body = self.api_client.post("updateGroup", xml).await?;
        Ok(ApiResponse::new(
            Group::from_identity_info(&body.info),
            body.errors,
        ))
    }

    async fn change_permissions(
        &self,
        user: &User,
        group: &Group,
        permissions: &[Permission],
    ) -> Result<ApiResponse<Group>, SmarterUError> {
        require!(
            user.email.is_some() || user.employee_id.is_some(),
            "Permissions cannot be changed for a user without an email or an employee id"
        );
        require!(
            group.has_identifier(),
            "Permissions cannot be changed without a group name or group id"
        );

        let xml = self.generator().change_permissions(user, group, permissions)?;
        let body = self.api_client.post("updateGroup", xml).await?;
        Ok(ApiResponse::new(
            Group::from_identity_info(&body.info),
            body.errors,
        ))
    }
}
