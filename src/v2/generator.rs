/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Builds the XML request envelopes SmarterU expects.
//!
//! Every request has the same outer shape:
//!
//! ```xml
//! <SmarterU>
//!   <AccountAPI>…</AccountAPI>
//!   <UserAPI>…</UserAPI>
//!   <Method>…</Method>
//!   <Parameters>…</Parameters>
//! </SmarterU>
//! ```
//!
//! The generator writes unset optional fields as nothing at all, booleans as `1`/`0`
//! and assumes its input was validated by the [`Client`](crate::v2::Client).

use crate::v2::errors::SmarterUError;
use crate::v2::{
    Creds, DateRangeTag, GetLearnerReportQuery, GetUserQuery, Group, GroupFilter,
    GroupPermissions, GroupRef, LearningModule, ListGroupsQuery, ListUsersQuery, MatchTag,
    MembershipAction, Permission, SubscriptionVariant, Tag, TagRef, User, UserFilter,
    UserIdentifier, UserRef,
};
use quick_xml::Writer;
use quick_xml::events::BytesText;
use std::io;

type XmlWriter = Writer<Vec<u8>>;

// Filter dates are sent day first
const FILTER_DATE_FORMAT: &str = "%d/%m/%Y";

/// Serializes data types into SmarterU request envelopes
#[derive(Debug, Clone, Copy)]
pub struct XmlGenerator<'a> {
    creds: &'a Creds,
}

impl<'a> XmlGenerator<'a> {
    pub fn new(creds: &'a Creds) -> Self {
        Self { creds }
    }

    /// `createUser`
    pub fn create_user(&self, user: &User) -> Result<String, SmarterUError> {
        self.envelope("createUser", |w| {
            w.create_element("User").write_inner_content(|w| {
                write_user_info(w, user)?;
                write_user_profile(w, user)?;
                write_user_groups(w, &user.groups)?;
                w.create_element("Venues").write_empty()?;
                w.create_element("Wages").write_empty()?;
                Ok(())
            })?;
            Ok(())
        })
    }

    /// `updateUser`.
    ///
    /// The `<Identifier>` block holds `old_email`/`old_employee_id` when set, so the
    /// `<Info>` block can carry the new values.
    pub fn update_user(&self, user: &User) -> Result<String, SmarterUError> {
        self.envelope("updateUser", |w| {
            w.create_element("User").write_inner_content(|w| {
                if let Some(identifier) = user.update_identifier() {
                    w.create_element("Identifier")
                        .write_inner_content(|w| write_user_ref(w, &identifier))?;
                }
                write_user_info(w, user)?;
                write_user_profile(w, user)?;
                write_user_groups(w, &user.groups)?;
                w.create_element("Venues").write_empty()?;
                w.create_element("Wages").write_empty()?;
                Ok(())
            })?;
            Ok(())
        })
    }

    /// `getUser`
    pub fn get_user(&self, query: &GetUserQuery) -> Result<String, SmarterUError> {
        self.envelope("getUser", |w| {
            w.create_element("User")
                .write_inner_content(|w| write_user_identifier(w, &query.identifier))?;
            Ok(())
        })
    }

    /// `getUserGroups`
    pub fn get_user_groups(&self, query: &GetUserQuery) -> Result<String, SmarterUError> {
        self.envelope("getUserGroups", |w| {
            w.create_element("User")
                .write_inner_content(|w| write_user_identifier(w, &query.identifier))?;
            Ok(())
        })
    }

    /// `listUsers`
    pub fn list_users(&self, query: &ListUsersQuery) -> Result<String, SmarterUError> {
        self.envelope("listUsers", |w| {
            w.create_element("User").write_inner_content(|w| {
                write_optional_number(w, "Page", query.page)?;
                write_optional_number(w, "PageSize", query.page_size)?;
                write_optional_enum(w, "SortField", query.sort_field)?;
                write_optional_enum(w, "SortOrder", query.sort_order)?;
                if !query.has_filters() {
                    w.create_element("Filters").write_empty()?;
                    return Ok(());
                }
                w.create_element("Filters").write_inner_content(|w| {
                    if query.email.is_some() || query.employee_id.is_some() || query.name.is_some()
                    {
                        w.create_element("Users").write_inner_content(|w| {
                            w.create_element("UserIdentifier").write_inner_content(|w| {
                                write_optional_match(w, "Email", query.email.as_ref())?;
                                write_optional_match(w, "EmployeeID", query.employee_id.as_ref())?;
                                write_optional_match(w, "Name", query.name.as_ref())
                            })?;
                            Ok(())
                        })?;
                    }
                    write_optional_text(w, "HomeGroup", query.home_group.as_deref())?;
                    write_optional_text(w, "GroupName", query.group_name.as_deref())?;
                    write_optional_enum(w, "UserStatus", query.user_status)?;
                    if let Some(range) = &query.created_date {
                        write_date_range(w, "CreatedDate", range)?;
                    }
                    if let Some(range) = &query.modified_date {
                        write_date_range(w, "ModifiedDate", range)?;
                    }
                    write_list(w, "Teams", "TeamName", &query.teams)
                })?;
                Ok(())
            })?;
            Ok(())
        })
    }

    /// `createGroup`
    pub fn create_group(&self, group: &Group) -> Result<String, SmarterUError> {
        self.envelope("createGroup", |w| {
            w.create_element("Group").write_inner_content(|w| {
                write_optional_text(w, "Name", group.name.as_deref())?;
                write_optional_text(w, "GroupID", group.group_id.as_deref())?;
                write_group_body(w, group, false)
            })?;
            Ok(())
        })
    }

    /// `updateGroup`.
    ///
    /// The `<Identifier>` block holds `old_name`/`old_group_id` when set, so the
    /// `<Info>` block can carry the new values.
    pub fn update_group(&self, group: &Group) -> Result<String, SmarterUError> {
        self.envelope("updateGroup", |w| {
            w.create_element("Group").write_inner_content(|w| {
                if let Some(identifier) = group.update_identifier() {
                    write_group_identifier(w, &identifier)?;
                }
                w.create_element("Info").write_inner_content(|w| {
                    write_optional_text(w, "Name", group.name.as_deref())?;
                    write_optional_text(w, "GroupID", group.group_id.as_deref())?;
                    write_group_body(w, group, true)
                })?;
                Ok(())
            })?;
            Ok(())
        })
    }

    /// `getGroup`
    pub fn get_group(&self, group: &GroupRef) -> Result<String, SmarterUError> {
        self.envelope("getGroup", |w| {
            w.create_element("Group")
                .write_inner_content(|w| write_group_ref(w, group))?;
            Ok(())
        })
    }

    /// `listGroups`
    pub fn list_groups(&self, query: &ListGroupsQuery) -> Result<String, SmarterUError> {
        self.envelope("listGroups", |w| {
            w.create_element("Group").write_inner_content(|w| {
                if !query.has_filters() {
                    w.create_element("Filters").write_empty()?;
                    return Ok(());
                }
                w.create_element("Filters").write_inner_content(|w| {
                    write_optional_match(w, "GroupName", query.group_name.as_ref())?;
                    write_optional_enum(w, "GroupStatus", query.group_status)?;
                    write_tags(w, "Tags", "Tag", &query.tags)
                })?;
                Ok(())
            })?;
            Ok(())
        })
    }

    /// `updateGroup` adding or removing the given users
    pub fn change_group_members(
        &self,
        group: &Group,
        users: &[User],
        action: MembershipAction,
    ) -> Result<String, SmarterUError> {
        let members: Vec<GroupPermissions> = users
            .iter()
            .map(|user| GroupPermissions {
                user: user.user_ref(),
                home_group: is_home_group_of(user, group),
                action: Some(action),
                ..Default::default()
            })
            .collect();
        self.group_users_update(group, &members)
    }

    /// `updateGroup` granting or denying permissions to one member of the group
    pub fn change_permissions(
        &self,
        user: &User,
        group: &Group,
        permissions: &[Permission],
    ) -> Result<String, SmarterUError> {
        let member = GroupPermissions {
            user: user.user_ref(),
            home_group: is_home_group_of(user, group),
            permissions: permissions.to_vec(),
            ..Default::default()
        };
        self.group_users_update(group, std::slice::from_ref(&member))
    }

    /// `getLearnerReport`
    pub fn get_learner_report(
        &self,
        query: &GetLearnerReportQuery,
    ) -> Result<String, SmarterUError> {
        self.envelope("getLearnerReport", |w| {
            w.create_element("Report").write_inner_content(|w| {
                write_optional_number(w, "Page", query.page)?;
                write_optional_number(w, "PageSize", query.page_size)?;
                w.create_element("Filters")
                    .write_inner_content(|w| write_report_filters(w, query))?;
                write_list(w, "Columns", "ColumnName", &query.columns)?;
                if !query.custom_fields.is_empty() {
                    w.create_element("CustomFields").write_inner_content(|w| {
                        for field in &query.custom_fields {
                            write_text(w, "FieldName", &field.name)?;
                        }
                        Ok(())
                    })?;
                }
                Ok(())
            })?;
            Ok(())
        })
    }

    /// `requestExternalAuthorization` for the user with the given email or employee id
    pub fn request_external_authorization(
        &self,
        user: &UserRef,
    ) -> Result<String, SmarterUError> {
        self.envelope("requestExternalAuthorization", |w| {
            w.create_element("Security")
                .write_inner_content(|w| write_user_ref(w, user))?;
            Ok(())
        })
    }

    fn group_users_update(
        &self,
        group: &Group,
        members: &[GroupPermissions],
    ) -> Result<String, SmarterUError> {
        self.envelope("updateGroup", |w| {
            w.create_element("Group").write_inner_content(|w| {
                if let Some(identifier) = group.update_identifier() {
                    write_group_identifier(w, &identifier)?;
                }
                w.create_element("Info").write_inner_content(|w| {
                    write_container(w, "Users", members, false, |w, m| write_group_member(w, m, true))
                })?;
                Ok(())
            })?;
            Ok(())
        })
    }

    fn envelope<F>(&self, method: &str, parameters: F) -> Result<String, SmarterUError>
    where
        F: FnOnce(&mut XmlWriter) -> io::Result<()>,
    {
        let mut writer = Writer::new(Vec::with_capacity(1024));
        writer.create_element("SmarterU").write_inner_content(|w| {
            write_text(w, "AccountAPI", &self.creds.account_api_key)?;
            write_text(w, "UserAPI", &self.creds.user_api_key)?;
            write_text(w, "Method", method)?;
            w.create_element("Parameters")
                .write_inner_content(parameters)?;
            Ok(())
        })?;
        String::from_utf8(writer.into_inner())
            .map_err(|e| SmarterUError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

fn write_user_info(w: &mut XmlWriter, user: &User) -> io::Result<()> {
    w.create_element("Info").write_inner_content(|w| {
        write_optional_text(w, "Email", user.email.as_deref())?;
        write_optional_text(w, "EmployeeID", user.employee_id.as_deref())?;
        write_optional_text(w, "GivenName", user.given_name.as_deref())?;
        write_optional_text(w, "Surname", user.surname.as_deref())?;
        write_optional_text(w, "Password", user.password.as_deref())?;
        write_optional_text(w, "Timezone", user.timezone.map(|tz| tz.provided_name()))?;
        write_optional_bool(w, "LearnerNotifications", user.learner_notifications)?;
        write_optional_bool(w, "SupervisorNotifications", user.supervisor_notifications)?;
        write_optional_enum(w, "SendEmailTo", user.send_email_to)?;
        write_optional_text(w, "AlternateEmail", user.alternate_email.as_deref())?;
        write_optional_enum(w, "AuthenticationType", user.authentication_type)
    })?;
    Ok(())
}

fn write_user_profile(w: &mut XmlWriter, user: &User) -> io::Result<()> {
    w.create_element("Profile").write_inner_content(|w| {
        write_list(w, "Supervisors", "Supervisor", &user.supervisors)?;
        write_optional_text(w, "Organization", user.organization.as_deref())?;
        write_list(w, "Teams", "Team", &user.teams)?;
        write_container(w, "CustomFields", &user.custom_fields, false, |w, field| {
            w.create_element("CustomField").write_inner_content(|w| {
                write_text(w, "FieldName", &field.name)?;
                write_optional_text(w, "FieldValue", field.value.as_deref())
            })?;
            Ok(())
        })?;
        write_optional_text(w, "Language", user.language.as_deref())?;
        write_optional_enum(w, "Status", user.status)?;
        write_optional_text(w, "Title", user.title.as_deref())?;
        write_optional_text(w, "Division", user.division.as_deref())?;
        write_optional_bool(w, "AllowFeedback", user.allow_feedback)?;
        write_optional_text(w, "PhonePrimary", user.phone_primary.as_deref())?;
        write_optional_text(w, "PhoneAlternate", user.phone_alternate.as_deref())?;
        write_optional_text(w, "PhoneMobile", user.phone_mobile.as_deref())?;
        write_optional_text(w, "Fax", user.fax.as_deref())?;
        write_optional_text(w, "Website", user.website.as_deref())?;
        write_optional_text(w, "Address1", user.address1.as_deref())?;
        write_optional_text(w, "Address2", user.address2.as_deref())?;
        write_optional_text(w, "City", user.city.as_deref())?;
        write_optional_text(w, "Province", user.province.as_deref())?;
        write_optional_text(w, "Country", user.country.as_deref())?;
        write_optional_text(w, "PostalCode", user.postal_code.as_deref())?;
        write_optional_enum(w, "SendMailTo", user.send_mail_to)?;
        write_optional_bool(w, "ReceiveNotifications", user.receive_notifications)?;
        write_optional_text(w, "HomeGroup", user.home_group.as_deref())
    })?;
    Ok(())
}

// A user's memberships, always present and empty when there are none
fn write_user_groups(w: &mut XmlWriter, groups: &[GroupPermissions]) -> io::Result<()> {
    write_container(w, "Groups", groups, true, |w, membership| {
        w.create_element("Group").write_inner_content(|w| {
            match &membership.group {
                Some(GroupRef::Name(name)) => write_text(w, "GroupName", name)?,
                Some(GroupRef::Id(id)) => write_text(w, "GroupID", id)?,
                None => {}
            }
            write_container(
                w,
                "GroupPermissions",
                &membership.permissions,
                false,
                write_permission,
            )
        })?;
        Ok(())
    })
}

fn write_user_ref(w: &mut XmlWriter, user: &UserRef) -> io::Result<()> {
    match user {
        UserRef::Email(email) => write_text(w, "Email", email),
        UserRef::EmployeeId(id) => write_text(w, "EmployeeID", id),
    }
}

fn write_user_identifier(w: &mut XmlWriter, identifier: &UserIdentifier) -> io::Result<()> {
    match identifier {
        UserIdentifier::Id(id) => write_text(w, "ID", id),
        UserIdentifier::Email(email) => write_text(w, "Email", email),
        UserIdentifier::EmployeeId(id) => write_text(w, "EmployeeID", id),
    }
}

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

// Everything after the name and group id. Memberships carry their action on updates.
fn write_group_body(w: &mut XmlWriter, group: &Group, update: bool) -> io::Result<()> {
    write_optional_enum(w, "Status", group.status)?;
    write_optional_text(w, "Description", group.description.as_deref())?;
    write_optional_text(w, "HomeGroupMessage", group.home_group_message.as_deref())?;
    write_list(w, "NotificationEmails", "NotificationEmail", &group.notification_emails)?;
    write_optional_bool(w, "UserHelpOverrideDefault", group.user_help_override_default)?;
    write_optional_bool(w, "UserHelpEnabled", group.user_help_enabled)?;
    if !group.user_help_emails.is_empty() {
        write_text(w, "UserHelpEmail", &group.user_help_emails.join(","))?;
    }
    write_optional_text(w, "UserHelpText", group.user_help_text.as_deref())?;
    write_tags(w, "Tags2", "Tag2", &group.tags)?;
    if group.user_limit_enabled.is_some() || group.user_limit_amount.is_some() {
        w.create_element("UserLimit").write_inner_content(|w| {
            write_optional_bool(w, "Enabled", group.user_limit_enabled)?;
            write_optional_number(w, "Amount", group.user_limit_amount)
        })?;
    }
    // createGroup always lists its users, even when there are none
    write_container(w, "Users", &group.users, !update, |w, m| {
        write_group_member(w, m, update)
    })?;
    write_container(w, "LearningModules", &group.learning_modules, false, |w, m| {
        write_learning_module(w, m, update)
    })?;
    write_container(
        w,
        "SubscriptionVariants",
        &group.subscription_variants,
        false,
        |w, v| write_subscription_variant(w, v, update),
    )?;
    write_optional_text(w, "DashboardSetID", group.dashboard_set_id.as_deref())
}

fn write_group_member(w: &mut XmlWriter, member: &GroupPermissions, update: bool) -> io::Result<()> {
    w.create_element("User").write_inner_content(|w| {
        if let Some(user) = &member.user {
            write_user_ref(w, user)?;
        }
        write_bool(w, "HomeGroup", member.home_group)?;
        if update {
            write_optional_enum(w, "Action", member.action)?;
        }
        write_container(w, "Permissions", &member.permissions, false, write_permission)
    })?;
    Ok(())
}

fn write_learning_module(w: &mut XmlWriter, module: &LearningModule, update: bool) -> io::Result<()> {
    w.create_element("LearningModule").write_inner_content(|w| {
        write_text(w, "ID", &module.id)?;
        if update {
            write_optional_enum(w, "Action", module.action)?;
        }
        write_bool(w, "AllowSelfEnroll", module.allow_self_enroll)?;
        write_bool(w, "AutoEnroll", module.auto_enroll)
    })?;
    Ok(())
}

fn write_subscription_variant(
    w: &mut XmlWriter,
    variant: &SubscriptionVariant,
    update: bool,
) -> io::Result<()> {
    w.create_element("SubscriptionVariant").write_inner_content(|w| {
        write_text(w, "ID", &variant.id)?;
        if update {
            write_optional_enum(w, "Action", variant.action)?;
        }
        write_bool(w, "RequiresCredits", variant.requires_credits)
    })?;
    Ok(())
}

fn write_permission(w: &mut XmlWriter, permission: &Permission) -> io::Result<()> {
    w.create_element("Permission").write_inner_content(|w| {
        write_text(w, "Action", permission.action.as_api_str())?;
        write_text(w, "Code", permission.code.as_api_str())
    })?;
    Ok(())
}

fn write_group_ref(w: &mut XmlWriter, group: &GroupRef) -> io::Result<()> {
    match group {
        GroupRef::Name(name) => write_text(w, "Name", name),
        GroupRef::Id(id) => write_text(w, "GroupID", id),
    }
}

fn write_group_identifier(w: &mut XmlWriter, group: &GroupRef) -> io::Result<()> {
    w.create_element("Identifier")
        .write_inner_content(|w| write_group_ref(w, group))?;
    Ok(())
}

// A user's home group may be recorded by group name or by group id
fn is_home_group_of(user: &User, group: &Group) -> bool {
    let Some(home) = &user.home_group else {
        return false;
    };
    [&group.name, &group.group_id, &group.old_name, &group.old_group_id]
        .into_iter()
        .flatten()
        .any(|identifier| identifier == home)
}

fn write_tags(w: &mut XmlWriter, container: &str, item: &str, tags: &[Tag]) -> io::Result<()> {
    write_container(w, container, tags, false, |w, tag| {
        w.create_element(item).write_inner_content(|w| {
            match &tag.tag {
                TagRef::Id(id) => write_text(w, "TagID", id)?,
                TagRef::Name(name) => write_text(w, "TagName", name)?,
            }
            if !tag.values.is_empty() {
                write_text(w, "TagValues", &tag.joined_values())?;
            }
            Ok(())
        })?;
        Ok(())
    })
}

// ---------------------------------------------------------------------------
// Learner report
// ---------------------------------------------------------------------------

fn write_report_filters(w: &mut XmlWriter, query: &GetLearnerReportQuery) -> io::Result<()> {
    write_optional_text(w, "EnrollmentID", query.enrollment_id.as_deref())?;
    w.create_element("Groups").write_inner_content(|w| {
        match &query.groups {
            Some(GroupFilter::Status(status)) => write_text(w, "GroupStatus", status.as_api_str())?,
            Some(GroupFilter::Names(names)) => write_list(w, "GroupNames", "GroupName", names)?,
            None => {}
        }
        write_tags(w, "GroupTags", "GroupTag", &query.group_tags)
    })?;
    write_optional_enum(w, "LearningModuleStatus", query.learning_module_status)?;
    write_list(
        w,
        "LearningModuleNames",
        "LearningModuleName",
        &query.learning_module_names,
    )?;
    write_list(
        w,
        "EnrollmentStatuses",
        "EnrollmentStatus",
        &query.enrollment_statuses,
    )?;
    write_date_ranges(w, "CompletedDates", "CompletedDate", &query.completed_dates)?;
    write_date_ranges(w, "DueDates", "DueDate", &query.due_dates)?;
    write_date_ranges(w, "EnrolledDates", "EnrolledDate", &query.enrolled_dates)?;
    write_date_ranges(
        w,
        "GracePeriodDates",
        "GracePeriodDate",
        &query.grace_period_dates,
    )?;
    write_date_ranges(
        w,
        "LastAccessedDates",
        "LastAccessedDate",
        &query.last_accessed_dates,
    )?;
    write_date_ranges(w, "StartedDates", "StartedDate", &query.started_dates)?;
    write_date_ranges(w, "CreatedDates", "CreatedDate", &query.created_dates)?;
    write_date_ranges(w, "ModifiedDates", "ModifiedDate", &query.modified_dates)?;
    w.create_element("Users").write_inner_content(|w| match &query.users {
        Some(UserFilter::Status(status)) => write_text(w, "UserStatus", status.as_api_str()),
        Some(UserFilter::Identifiers(ids)) => {
            for id in ids {
                w.create_element("UserIdentifier")
                    .write_inner_content(|w| write_user_identifier(w, id))?;
            }
            Ok(())
        }
        None => Ok(()),
    })?;
    Ok(())
}

fn write_date_ranges(
    w: &mut XmlWriter,
    container: &str,
    item: &str,
    ranges: &[DateRangeTag],
) -> io::Result<()> {
    write_container(w, container, ranges, false, |w, range| write_date_range(w, item, range))
}

// <CreatedDate><CreatedDateFrom>…</CreatedDateFrom><CreatedDateTo>…</CreatedDateTo></CreatedDate>
fn write_date_range(w: &mut XmlWriter, tag: &str, range: &DateRangeTag) -> io::Result<()> {
    w.create_element(tag).write_inner_content(|w| {
        write_text(
            w,
            &format!("{tag}From"),
            &range.from.format(FILTER_DATE_FORMAT).to_string(),
        )?;
        write_text(
            w,
            &format!("{tag}To"),
            &range.to.format(FILTER_DATE_FORMAT).to_string(),
        )
    })?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Helper functions for writing common XML patterns
// ---------------------------------------------------------------------------

/// Write a simple `<tag>text</tag>` element.
fn write_text(w: &mut XmlWriter, tag: &str, text: &str) -> io::Result<()> {
    w.create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

/// Write `<tag>text</tag>` only if the value is `Some`.
fn write_optional_text(w: &mut XmlWriter, tag: &str, value: Option<&str>) -> io::Result<()> {
    if let Some(v) = value {
        write_text(w, tag, v)?;
    }
    Ok(())
}

fn write_bool(w: &mut XmlWriter, tag: &str, value: bool) -> io::Result<()> {
    write_text(w, tag, if value { "1" } else { "0" })
}

fn write_optional_bool(w: &mut XmlWriter, tag: &str, value: Option<bool>) -> io::Result<()> {
    if let Some(v) = value {
        write_bool(w, tag, v)?;
    }
    Ok(())
}

fn write_optional_number(w: &mut XmlWriter, tag: &str, value: Option<u32>) -> io::Result<()> {
    if let Some(v) = value {
        write_text(w, tag, &v.to_string())?;
    }
    Ok(())
}

fn write_optional_enum<E: Into<&'static str>>(
    w: &mut XmlWriter,
    tag: &str,
    value: Option<E>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text(w, tag, v.into())?;
    }
    Ok(())
}

// <Email><MatchType>EXACT</MatchType><Value>…</Value></Email>
fn write_optional_match(w: &mut XmlWriter, tag: &str, value: Option<&MatchTag>) -> io::Result<()> {
    if let Some(m) = value {
        w.create_element(tag).write_inner_content(|w| {
            write_text(w, "MatchType", m.match_type.as_api_str())?;
            write_text(w, "Value", &m.value)
        })?;
    }
    Ok(())
}

/// Write `<container><item>…</item>…</container>` for a non-empty list of strings.
fn write_list(w: &mut XmlWriter, container: &str, item: &str, values: &[String]) -> io::Result<()> {
    write_container(w, container, values, false, |w, v| write_text(w, item, v))
}

/// Write a container element around one child per item.
///
/// Empty lists are skipped unless `always` is set, in which case `<container/>` is
/// written.
fn write_container<T, F>(
    w: &mut XmlWriter,
    container: &str,
    items: &[T],
    always: bool,
    write_item: F,
) -> io::Result<()>
where
    F: Fn(&mut XmlWriter, &T) -> io::Result<()>,
{
    if items.is_empty() {
        if always {
            w.create_element(container).write_empty()?;
        }
        return Ok(());
    }
    w.create_element(container).write_inner_content(|w| {
        for item in items {
            write_item(w, item)?;
        }
        Ok(())
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v2::{
        CustomField, MatchType, PermissionCode, Status, StatusFilter, Timezone,
    };
    use chrono::NaiveDate;

    fn creds() -> Creds {
        Creds::new("acct-key", "user-key")
    }

    fn params(xml: &str) -> &str {
        let start = xml.find("<Parameters>").unwrap() + "<Parameters>".len();
        let end = xml.find("</Parameters>").unwrap();
        &xml[start..end]
    }

    #[test]
    fn envelope_shape() {
        let creds = creds();
        let xml = XmlGenerator::new(&creds)
            .get_user(&GetUserQuery::by_employee_id("E1"))
            .unwrap();
        assert_eq!(
            xml,
            "<SmarterU><AccountAPI>acct-key</AccountAPI><UserAPI>user-key</UserAPI>\
             <Method>getUser</Method><Parameters><User><EmployeeID>E1</EmployeeID></User>\
             </Parameters></SmarterU>"
        );
    }

    #[test]
    fn create_user_omits_unset_fields_and_keeps_empty_containers() {
        let creds = creds();
        let user = User {
            email: Some("jane@example.com".into()),
            given_name: Some("Jane".into()),
            surname: Some("Doe".into()),
            password: Some("secret".into()),
            home_group: Some("Sales".into()),
            learner_notifications: Some(true),
            allow_feedback: Some(false),
            timezone: Some(Timezone::from_provided_name("America/Chicago").unwrap()),
            ..Default::default()
        };
        let xml = XmlGenerator::new(&creds).create_user(&user).unwrap();
        assert_eq!(
            params(&xml),
            "<User><Info><Email>jane@example.com</Email><GivenName>Jane</GivenName>\
             <Surname>Doe</Surname><Password>secret</Password><Timezone>America/Chicago</Timezone>\
             <LearnerNotifications>1</LearnerNotifications></Info>\
             <Profile><AllowFeedback>0</AllowFeedback><HomeGroup>Sales</HomeGroup></Profile>\
             <Groups/><Venues/><Wages/></User>"
        );
    }

    #[test]
    fn create_user_with_groups_profile_lists() {
        let creds = creds();
        let mut membership = GroupPermissions::for_group(GroupRef::Name("Sales".into()));
        membership.permissions = vec![Permission::grant(PermissionCode::ManageUsers)];
        let user = User {
            employee_id: Some("E1".into()),
            teams: vec!["Red".into(), "Blue".into()],
            custom_fields: vec![CustomField::new("Shirt", "L")],
            status: Some(Status::Active),
            groups: vec![membership],
            ..Default::default()
        };
        let xml = XmlGenerator::new(&creds).create_user(&user).unwrap();
        let p = params(&xml);
        assert!(p.contains("<Teams><Team>Red</Team><Team>Blue</Team></Teams>"));
        assert!(p.contains(
            "<CustomFields><CustomField><FieldName>Shirt</FieldName><FieldValue>L</FieldValue></CustomField></CustomFields>"
        ));
        assert!(p.contains("<Status>Active</Status>"));
        assert!(p.contains(
            "<Groups><Group><GroupName>Sales</GroupName><GroupPermissions><Permission>\
             <Action>Grant</Action><Code>MANAGE_USERS</Code></Permission></GroupPermissions>\
             </Group></Groups>"
        ));
    }

    #[test]
    fn update_user_identifies_by_old_email() {
        let creds = creds();
        let user = User {
            email: Some("new@example.com".into()),
            old_email: Some("old@example.com".into()),
            ..Default::default()
        };
        let xml = XmlGenerator::new(&creds).update_user(&user).unwrap();
        assert_eq!(
            params(&xml),
            "<User><Identifier><Email>old@example.com</Email></Identifier>\
             <Info><Email>new@example.com</Email></Info><Profile></Profile>\
             <Groups/><Venues/><Wages/></User>"
        );
    }

    #[test]
    fn create_group_round_trip_fields() {
        let creds = creds();
        let mut member = GroupPermissions::for_user(UserRef::Email("a@x.com".into()));
        member.home_group = true;
        let group = Group {
            name: Some("My Group".into()),
            group_id: Some("12".into()),
            status: Some(Status::Active),
            description: Some("Desc & more".into()),
            notification_emails: vec!["n@x.com".into()],
            user_help_emails: vec!["h1@x.com".into(), "h2@x.com".into()],
            user_help_enabled: Some(true),
            tags: vec![Tag::by_name("Region", &["North", "South"])],
            user_limit_enabled: Some(true),
            user_limit_amount: Some(10),
            users: vec![member],
            learning_modules: vec![LearningModule::new("LM1")],
            subscription_variants: vec![SubscriptionVariant::new("SV1")],
            ..Default::default()
        };
        let xml = XmlGenerator::new(&creds).create_group(&group).unwrap();
        assert_eq!(
            params(&xml),
            "<Group><Name>My Group</Name><GroupID>12</GroupID><Status>Active</Status>\
             <Description>Desc &amp; more</Description>\
             <NotificationEmails><NotificationEmail>n@x.com</NotificationEmail></NotificationEmails>\
             <UserHelpEnabled>1</UserHelpEnabled><UserHelpEmail>h1@x.com,h2@x.com</UserHelpEmail>\
             <Tags2><Tag2><TagName>Region</TagName><TagValues>North,South</TagValues></Tag2></Tags2>\
             <UserLimit><Enabled>1</Enabled><Amount>10</Amount></UserLimit>\
             <Users><User><Email>a@x.com</Email><HomeGroup>1</HomeGroup></User></Users>\
             <LearningModules><LearningModule><ID>LM1</ID><AllowSelfEnroll>0</AllowSelfEnroll><AutoEnroll>0</AutoEnroll></LearningModule></LearningModules>\
             <SubscriptionVariants><SubscriptionVariant><ID>SV1</ID><RequiresCredits>0</RequiresCredits></SubscriptionVariant></SubscriptionVariants>\
             </Group>"
        );
    }

    #[test]
    fn create_group_always_lists_users() {
        let creds = creds();
        let xml = XmlGenerator::new(&creds)
            .create_group(&Group::named("Empty"))
            .unwrap();
        assert_eq!(params(&xml), "<Group><Name>Empty</Name><Users/></Group>");
    }

    #[test]
    fn update_group_carries_actions_and_old_identifier() {
        let creds = creds();
        let group = Group {
            name: Some("Renamed".into()),
            old_group_id: Some("12".into()),
            learning_modules: vec![LearningModule::new("LM1").with_action(MembershipAction::Remove)],
            ..Default::default()
        };
        let xml = XmlGenerator::new(&creds).update_group(&group).unwrap();
        assert_eq!(
            params(&xml),
            "<Group><Identifier><GroupID>12</GroupID></Identifier><Info><Name>Renamed</Name>\
             <LearningModules><LearningModule><ID>LM1</ID><Action>Remove</Action>\
             <AllowSelfEnroll>0</AllowSelfEnroll><AutoEnroll>0</AutoEnroll></LearningModule>\
             </LearningModules></Info></Group>"
        );
    }

    #[test]
    fn membership_change_marks_home_group() {
        let creds = creds();
        let users = vec![
            User {
                email: Some("a@x.com".into()),
                home_group: Some("Sales".into()),
                ..Default::default()
            },
            User {
                employee_id: Some("E2".into()),
                ..Default::default()
            },
        ];
        let xml = XmlGenerator::new(&creds)
            .change_group_members(&Group::named("Sales"), &users, MembershipAction::Add)
            .unwrap();
        assert!(xml.contains("<Method>updateGroup</Method>"));
        assert_eq!(
            params(&xml),
            "<Group><Identifier><Name>Sales</Name></Identifier><Info><Users>\
             <User><Email>a@x.com</Email><HomeGroup>1</HomeGroup><Action>Add</Action></User>\
             <User><EmployeeID>E2</EmployeeID><HomeGroup>0</HomeGroup><Action>Add</Action></User>\
             </Users></Info></Group>"
        );
    }

    #[test]
    fn home_group_matches_group_id() {
        let creds = creds();
        let user = User {
            email: Some("a@x.com".into()),
            home_group: Some("12".into()),
            ..Default::default()
        };
        let group = Group {
            group_id: Some("12".into()),
            ..Default::default()
        };
        let xml = XmlGenerator::new(&creds)
            .change_group_members(&group, std::slice::from_ref(&user), MembershipAction::Remove)
            .unwrap();
        assert_eq!(
            params(&xml),
            "<Group><Identifier><GroupID>12</GroupID></Identifier><Info><Users>\
             <User><Email>a@x.com</Email><HomeGroup>1</HomeGroup><Action>Remove</Action></User>\
             </Users></Info></Group>"
        );

        let other = Group {
            group_id: Some("13".into()),
            ..Default::default()
        };
        let xml = XmlGenerator::new(&creds)
            .change_permissions(&user, &other, &[])
            .unwrap();
        assert!(xml.contains("<HomeGroup>0</HomeGroup>"));
    }

    #[test]
    fn permission_change() {
        let creds = creds();
        let user = User {
            email: Some("a@x.com".into()),
            ..Default::default()
        };
        let xml = XmlGenerator::new(&creds)
            .change_permissions(
                &user,
                &Group::named("Sales"),
                &[Permission::deny(PermissionCode::Proctor)],
            )
            .unwrap();
        assert!(params(&xml).contains(
            "<User><Email>a@x.com</Email><HomeGroup>0</HomeGroup><Permissions><Permission>\
             <Action>Deny</Action><Code>PROCTOR</Code></Permission></Permissions></User>"
        ));
    }

    #[test]
    fn list_users_filters() {
        let creds = creds();
        let query = ListUsersQuery {
            page: Some(2),
            page_size: Some(25),
            email: Some(MatchTag {
                match_type: MatchType::Contains,
                value: "@example.com".into(),
            }),
            user_status: Some(StatusFilter::Active),
            created_date: Some(DateRangeTag::new(
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            )),
            teams: vec!["Red".into()],
            ..Default::default()
        };
        let xml = XmlGenerator::new(&creds).list_users(&query).unwrap();
        assert_eq!(
            params(&xml),
            "<User><Page>2</Page><PageSize>25</PageSize><Filters><Users><UserIdentifier>\
             <Email><MatchType>CONTAINS</MatchType><Value>@example.com</Value></Email>\
             </UserIdentifier></Users><UserStatus>Active</UserStatus>\
             <CreatedDate><CreatedDateFrom>02/01/2024</CreatedDateFrom><CreatedDateTo>04/03/2024</CreatedDateTo></CreatedDate>\
             <Teams><TeamName>Red</TeamName></Teams></Filters></User>"
        );
    }

    #[test]
    fn list_groups_without_filters() {
        let creds = creds();
        let xml = XmlGenerator::new(&creds)
            .list_groups(&ListGroupsQuery::default())
            .unwrap();
        assert_eq!(params(&xml), "<Group><Filters/></Group>");
    }

    #[test]
    fn learner_report_filters() {
        let creds = creds();
        let query = GetLearnerReportQuery {
            groups: Some(GroupFilter::Names(vec!["Sales".into()])),
            group_tags: vec![Tag::by_id("3", &["x"])],
            users: Some(UserFilter::Identifiers(vec![UserIdentifier::Email(
                "a@x.com".into(),
            )])),
            columns: vec!["COURSE_NAME".into()],
            custom_fields: vec![CustomField::named("Site")],
            ..Default::default()
        };
        let xml = XmlGenerator::new(&creds).get_learner_report(&query).unwrap();
        assert_eq!(
            params(&xml),
            "<Report><Filters><Groups><GroupNames><GroupName>Sales</GroupName></GroupNames>\
             <GroupTags><GroupTag><TagID>3</TagID><TagValues>x</TagValues></GroupTag></GroupTags></Groups>\
             <Users><UserIdentifier><Email>a@x.com</Email></UserIdentifier></Users></Filters>\
             <Columns><ColumnName>COURSE_NAME</ColumnName></Columns>\
             <CustomFields><FieldName>Site</FieldName></CustomFields></Report>"
        );
    }

    #[test]
    fn external_authorization_uses_one_key() {
        let creds = creds();
        let generator = XmlGenerator::new(&creds);
        let by_email = generator
            .request_external_authorization(&UserRef::Email("a@x.com".into()))
            .unwrap();
        assert_eq!(params(&by_email), "<Security><Email>a@x.com</Email></Security>");
        let by_id = generator
            .request_external_authorization(&UserRef::EmployeeId("E1".into()))
            .unwrap();
        assert_eq!(
            params(&by_id),
            "<Security><EmployeeID>E1</EmployeeID></Security>"
        );
    }
}
