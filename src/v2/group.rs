/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::SmarterUError;
use crate::v2::parsers::Element;
use crate::v2::{
    LearningModule, MatchTag, MembershipAction, Permission, PermissionCode, Status,
    SubscriptionVariant, Tag, TagRef, UserRef,
};
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

/// A SmarterU group.
///
/// `old_name` and `old_group_id` are only used by
/// [`Client::update_group`](crate::v2::Client::update_group) to locate a group that is
/// being renamed. They are cleared once the update succeeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: Option<String>,
    pub old_name: Option<String>,
    pub group_id: Option<String>,
    pub old_group_id: Option<String>,
    pub status: Option<Status>,
    pub description: Option<String>,
    pub home_group_message: Option<String>,
    pub notification_emails: Vec<String>,
    pub user_help_override_default: Option<bool>,
    pub user_help_enabled: Option<bool>,
    pub user_help_emails: Vec<String>,
    pub user_help_text: Option<String>,
    pub tags: Vec<Tag>,
    pub user_limit_enabled: Option<bool>,
    pub user_limit_amount: Option<u32>,
    pub users: Vec<GroupPermissions>,
    pub learning_modules: Vec<LearningModule>,
    pub subscription_variants: Vec<SubscriptionVariant>,
    pub dashboard_set_id: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub modified_date: Option<DateTime<Utc>>,
}

impl Group {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// True when the group can be identified by name or group id
    pub fn has_identifier(&self) -> bool {
        self.name.is_some()
            || self.group_id.is_some()
            || self.old_name.is_some()
            || self.old_group_id.is_some()
    }

    /// The identifier used to locate this group on an update.
    ///
    /// Old values win over current ones and the name wins over the group id.
    pub(crate) fn update_identifier(&self) -> Option<GroupRef> {
        if let Some(name) = &self.old_name {
            return Some(GroupRef::Name(name.clone()));
        }
        if let Some(id) = &self.old_group_id {
            return Some(GroupRef::Id(id.clone()));
        }
        self.group_ref()
    }

    /// The current name or group id of this group, name first
    pub fn group_ref(&self) -> Option<GroupRef> {
        self.name
            .clone()
            .map(GroupRef::Name)
            .or_else(|| self.group_id.clone().map(GroupRef::Id))
    }

    /// Forgets the rename targets once SmarterU has applied them
    pub fn clear_old_identifiers(&mut self) {
        self.old_name = None;
        self.old_group_id = None;
    }

    // <Info> of createGroup/updateGroup responses, and <Group> of listGroups
    pub(crate) fn from_identity_info(info: &Element) -> Self {
        Self {
            name: info.text_of("Group").or_else(|| info.text_of("Name")),
            group_id: info.text_of("GroupID"),
            ..Default::default()
        }
    }

    // <Group> of a getGroup response
    pub(crate) fn from_element(el: &Element) -> Result<Self, SmarterUError> {
        let tags = el
            .child("Tags2")
            .map(|tags| tags.children_named("Tag2").filter_map(tag_from_element).collect())
            .unwrap_or_default();
        let user_limit = el.child("UserLimit");
        let user_limit_amount = match user_limit {
            Some(limit) => limit.parsed_of("Amount")?,
            None => None,
        };
        let user_limit_enabled = match user_limit {
            Some(limit) => limit.bool_of("Enabled")?,
            None => None,
        };

        Ok(Self {
            name: el.text_of("Name"),
            group_id: el.text_of("GroupID"),
            status: el.parsed_of("Status")?,
            description: el.text_of("Description"),
            home_group_message: el.text_of("HomeGroupMessage"),
            notification_emails: el.texts_in("NotificationEmails", "NotificationEmail"),
            user_help_override_default: el.bool_of("UserHelpOverrideDefault")?,
            user_help_enabled: el.bool_of("UserHelpEnabled")?,
            user_help_emails: el
                .text_of("UserHelpEmail")
                .map(|emails| emails.split(',').map(|e| e.trim().to_string()).collect())
                .unwrap_or_default(),
            user_help_text: el.text_of("UserHelpText"),
            tags,
            user_limit_enabled,
            user_limit_amount,
            dashboard_set_id: el.text_of("DashboardSetID"),
            created_date: el.date_of("CreatedDate")?,
            modified_date: el.date_of("ModifiedDate")?,
            ..Default::default()
        })
    }
}

// A <Tag2> carries an id, a name or both. The id is kept when both are present.
fn tag_from_element(el: &Element) -> Option<Tag> {
    let tag = el
        .text_of("TagID")
        .map(TagRef::Id)
        .or_else(|| el.text_of("TagName").map(TagRef::Name))?;
    let values = el
        .text_of("TagValues")
        .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
        .unwrap_or_default();
    Some(Tag { tag, values })
}

/// Identifies a group by name or by group id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupRef {
    Name(String),
    Id(String),
}

/// Links a user to a group together with the user's permissions in that group.
///
/// Inside a [`User`](crate::v2::User) only `group` is relevant, inside a [`Group`] only
/// `user`. Each side holds one identifier, so setting the email replaces the employee id
/// and setting the group name replaces the group id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPermissions {
    pub group: Option<GroupRef>,
    pub user: Option<UserRef>,
    pub home_group: bool,
    pub action: Option<MembershipAction>,
    pub permissions: Vec<Permission>,
}

impl GroupPermissions {
    pub fn for_group(group: GroupRef) -> Self {
        Self {
            group: Some(group),
            ..Default::default()
        }
    }

    pub fn for_user(user: UserRef) -> Self {
        Self {
            user: Some(user),
            ..Default::default()
        }
    }

    pub fn set_email(&mut self, email: &str) -> &mut Self {
        self.user = Some(UserRef::Email(email.into()));
        self
    }

    pub fn set_employee_id(&mut self, employee_id: &str) -> &mut Self {
        self.user = Some(UserRef::EmployeeId(employee_id.into()));
        self
    }

    pub fn set_group_name(&mut self, name: &str) -> &mut Self {
        self.group = Some(GroupRef::Name(name.into()));
        self
    }

    pub fn set_group_id(&mut self, group_id: &str) -> &mut Self {
        self.group = Some(GroupRef::Id(group_id.into()));
        self
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().and_then(UserRef::email)
    }

    pub fn employee_id(&self) -> Option<&str> {
        self.user.as_ref().and_then(UserRef::employee_id)
    }

    pub fn group_name(&self) -> Option<&str> {
        match &self.group {
            Some(GroupRef::Name(name)) => Some(name),
            _ => None,
        }
    }

    pub fn group_id(&self) -> Option<&str> {
        match &self.group {
            Some(GroupRef::Id(id)) => Some(id),
            _ => None,
        }
    }

    // <Group> of a getUserGroups response
    pub(crate) fn from_user_group(el: &Element) -> Result<Self, SmarterUError> {
        let group = el
            .text_of("Name")
            .map(GroupRef::Name)
            .or_else(|| el.text_of("Identifier").map(GroupRef::Id));
        let permissions = el
            .texts_in("Permissions", "Permission")
            .into_iter()
            .filter_map(|code| match PermissionCode::parse(&code) {
                Ok(code) => Some(Permission::grant(code)),
                Err(_) => {
                    warn!("Ignoring unknown permission code {code} in getUserGroups response");
                    None
                }
            })
            .collect();
        Ok(Self {
            group,
            home_group: el.bool_of("IsHomeGroup")?.unwrap_or(false),
            permissions,
            ..Default::default()
        })
    }
}

/// Filters for `listGroups`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListGroupsQuery {
    pub group_name: Option<MatchTag>,
    pub group_status: Option<Status>,
    pub tags: Vec<Tag>,
}

impl ListGroupsQuery {
    pub(crate) fn has_filters(&self) -> bool {
        self.group_name.is_some() || self.group_status.is_some() || !self.tags.is_empty()
    }
}

// <Group> entries of a listGroups response
pub(crate) fn groups_from_list(info: &Element) -> Vec<Group> {
    info.child("Groups")
        .map(|groups| {
            groups
                .children_named("Group")
                .map(Group::from_identity_info)
                .collect()
        })
        .unwrap_or_default()
}

// <Group> entries of a getUserGroups response
pub(crate) fn user_groups_from_info(
    info: &Element,
) -> Result<Vec<GroupPermissions>, SmarterUError> {
    info.child("UserGroups")
        .map(|groups| {
            groups
                .children_named("Group")
                .map(GroupPermissions::from_user_group)
                .collect()
        })
        .unwrap_or_else(|| Ok(Vec::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v2::parsers::parse_document;

    #[test]
    fn setting_employee_id_clears_email() {
        let mut gp = GroupPermissions::default();
        gp.set_email("a@example.com");
        assert_eq!(gp.email(), Some("a@example.com"));

        gp.set_employee_id("E1");
        assert_eq!(gp.employee_id(), Some("E1"));
        assert_eq!(gp.email(), None);

        gp.set_email("b@example.com");
        assert_eq!(gp.employee_id(), None);
    }

    #[test]
    fn setting_group_id_clears_group_name() {
        let mut gp = GroupPermissions::default();
        gp.set_group_name("Sales").set_group_id("12");
        assert_eq!(gp.group_id(), Some("12"));
        assert_eq!(gp.group_name(), None);

        gp.set_group_name("Sales");
        assert_eq!(gp.group_id(), None);
    }

    #[test]
    fn update_identifier_prefers_old_name() {
        let mut group = Group {
            name: Some("New".into()),
            old_name: Some("Old".into()),
            group_id: Some("12".into()),
            ..Default::default()
        };
        assert_eq!(group.update_identifier(), Some(GroupRef::Name("Old".into())));
        group.clear_old_identifiers();
        assert_eq!(group.update_identifier(), Some(GroupRef::Name("New".into())));

        let group = Group {
            group_id: Some("12".into()),
            ..Default::default()
        };
        assert_eq!(group.update_identifier(), Some(GroupRef::Id("12".into())));
    }

    #[test]
    fn group_from_get_group_element() {
        let el = parse_document(
            "<Group><Name>Sales</Name><GroupID>12</GroupID><Status>Inactive</Status>\
             <NotificationEmails><NotificationEmail>a@x.com</NotificationEmail><NotificationEmail>b@x.com</NotificationEmail></NotificationEmails>\
             <UserHelpEnabled>1</UserHelpEnabled><UserHelpEmail>h1@x.com,h2@x.com</UserHelpEmail>\
             <Tags2><Tag2><TagName>Region</TagName><TagValues>North,South</TagValues></Tag2><Tag2><TagID>9</TagID></Tag2></Tags2>\
             <UserLimit><Enabled>1</Enabled><Amount>25</Amount></UserLimit></Group>",
        )
        .unwrap();
        let group = Group::from_element(&el).unwrap();
        assert_eq!(group.name.as_deref(), Some("Sales"));
        assert_eq!(group.group_id.as_deref(), Some("12"));
        assert_eq!(group.status, Some(Status::Inactive));
        assert_eq!(group.notification_emails, vec!["a@x.com", "b@x.com"]);
        assert_eq!(group.user_help_enabled, Some(true));
        assert_eq!(group.user_help_emails, vec!["h1@x.com", "h2@x.com"]);
        assert_eq!(
            group.tags,
            vec![Tag::by_name("Region", &["North", "South"]), Tag::by_id("9", &[])]
        );
        assert_eq!(group.user_limit_enabled, Some(true));
        assert_eq!(group.user_limit_amount, Some(25));
    }

    #[test]
    fn user_groups_skip_unknown_permissions() {
        let info = parse_document(
            "<Info><UserGroups><Group><Name>Sales</Name><Identifier>12</Identifier><IsHomeGroup>1</IsHomeGroup>\
             <Permissions><Permission>MANAGE_USERS</Permission><Permission>TIME_TRAVEL</Permission></Permissions></Group>\
             <Group><Name>Support</Name><IsHomeGroup>0</IsHomeGroup></Group></UserGroups></Info>",
        )
        .unwrap();
        let groups = user_groups_from_info(&info).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].group_name(), Some("Sales"));
        assert!(groups[0].home_group);
        assert_eq!(
            groups[0].permissions,
            vec![Permission::grant(PermissionCode::ManageUsers)]
        );
        assert!(!groups[1].home_group);
        assert!(groups[1].permissions.is_empty());
    }
}
