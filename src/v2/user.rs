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
    AuthenticationType, CustomField, DateRangeTag, GroupPermissions, MatchTag, SendEmailTo,
    SendMailTo, SortField, SortOrder, Status, StatusFilter, Timezone,
};
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

/// A SmarterU user.
///
/// `old_email` and `old_employee_id` are only used by
/// [`Client::update_user`](crate::v2::Client::update_user) to locate a user whose email or
/// employee id is being changed. They are cleared once the update succeeds.
///
/// See [SmarterU API Docs](https://support.smarteru.com/docs/api-createuser) for more
/// details on the individual fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<String>,
    pub email: Option<String>,
    pub old_email: Option<String>,
    pub employee_id: Option<String>,
    pub old_employee_id: Option<String>,
    pub given_name: Option<String>,
    pub surname: Option<String>,
    /// Full name as reported by list calls
    pub name: Option<String>,
    pub password: Option<String>,
    pub timezone: Option<Timezone>,
    pub learner_notifications: Option<bool>,
    pub supervisor_notifications: Option<bool>,
    pub send_email_to: Option<SendEmailTo>,
    pub alternate_email: Option<String>,
    pub authentication_type: Option<AuthenticationType>,
    pub supervisors: Vec<String>,
    pub organization: Option<String>,
    pub teams: Vec<String>,
    pub custom_fields: Vec<CustomField>,
    pub language: Option<String>,
    pub status: Option<Status>,
    pub title: Option<String>,
    pub division: Option<String>,
    pub allow_feedback: Option<bool>,
    pub phone_primary: Option<String>,
    pub phone_alternate: Option<String>,
    pub phone_mobile: Option<String>,
    pub fax: Option<String>,
    pub website: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub send_mail_to: Option<SendMailTo>,
    pub receive_notifications: Option<bool>,
    pub home_group: Option<String>,
    pub groups: Vec<GroupPermissions>,
    pub created_date: Option<DateTime<Utc>>,
    pub modified_date: Option<DateTime<Utc>>,
}

impl User {
    /// True when the user can be identified by email or employee id
    pub fn has_identifier(&self) -> bool {
        self.email.is_some()
            || self.employee_id.is_some()
            || self.old_email.is_some()
            || self.old_employee_id.is_some()
    }

    /// The identifier used to locate this user on an update.
    ///
    /// Old values win over current ones and email wins over employee id.
    pub(crate) fn update_identifier(&self) -> Option<UserRef> {
        if let Some(email) = &self.old_email {
            return Some(UserRef::Email(email.clone()));
        }
        if let Some(employee_id) = &self.old_employee_id {
            return Some(UserRef::EmployeeId(employee_id.clone()));
        }
        self.user_ref()
    }

    /// The current email or employee id of this user, email first
    pub fn user_ref(&self) -> Option<UserRef> {
        self.email
            .clone()
            .map(UserRef::Email)
            .or_else(|| self.employee_id.clone().map(UserRef::EmployeeId))
    }

    /// Forgets the rename targets once SmarterU has applied them
    pub fn clear_old_identifiers(&mut self) {
        self.old_email = None;
        self.old_employee_id = None;
    }

    // <Info> of createUser/updateUser responses
    pub(crate) fn from_identity_info(info: &Element) -> Self {
        Self {
            email: info.text_of("Email"),
            employee_id: info.text_of("EmployeeID"),
            ..Default::default()
        }
    }

    // <User> of a getUser response
    pub(crate) fn from_element(el: &Element) -> Result<Self, SmarterUError> {
        let timezone = el.text_of("Timezone").and_then(|tz| {
            match Timezone::from_display_value(&tz).or_else(|_| Timezone::from_provided_name(&tz)) {
                Ok(timezone) => Some(timezone),
                Err(_) => {
                    warn!("Ignoring unknown timezone \"{tz}\" in user response");
                    None
                }
            }
        });
        let custom_fields = el
            .child("CustomFields")
            .map(|c| c.children_named("CustomField").map(CustomField::from_element).collect())
            .unwrap_or_default();

        Ok(Self {
            id: el.text_of("ID"),
            email: el.text_of("Email"),
            employee_id: el.text_of("EmployeeID"),
            given_name: el.text_of("GivenName"),
            surname: el.text_of("Surname"),
            name: el.text_of("Name"),
            timezone,
            learner_notifications: el.bool_of("LearnerNotifications")?,
            supervisor_notifications: el.bool_of("SupervisorNotifications")?,
            send_email_to: el.parsed_of("SendEmailTo")?,
            alternate_email: el.text_of("AlternateEmail"),
            authentication_type: el.parsed_of("AuthenticationType")?,
            supervisors: el.texts_in("Supervisors", "Supervisor"),
            organization: el.text_of("Organization"),
            teams: el.texts_in("Teams", "Team"),
            custom_fields,
            language: el.text_of("Language"),
            status: el.parsed_of("Status")?,
            title: el.text_of("Title"),
            division: el.text_of("Division"),
            allow_feedback: el.bool_of("AllowFeedback")?,
            phone_primary: el.text_of("PhonePrimary"),
            phone_alternate: el.text_of("PhoneAlternate"),
            phone_mobile: el.text_of("PhoneMobile"),
            fax: el.text_of("Fax"),
            website: el.text_of("Website"),
            address1: el.text_of("Address1"),
            address2: el.text_of("Address2"),
            city: el.text_of("City"),
            province: el.text_of("Province"),
            country: el.text_of("Country"),
            postal_code: el.text_of("PostalCode"),
            send_mail_to: el.parsed_of("SendMailTo")?,
            receive_notifications: el.bool_of("ReceiveNotifications")?,
            home_group: el.text_of("HomeGroup"),
            created_date: el.date_of("CreatedDate")?,
            modified_date: el.date_of("ModifiedDate")?,
            ..Default::default()
        })
    }
}

/// Identifies a user by email or by employee id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRef {
    Email(String),
    EmployeeId(String),
}

impl UserRef {
    pub fn email(&self) -> Option<&str> {
        match self {
            UserRef::Email(email) => Some(email),
            UserRef::EmployeeId(_) => None,
        }
    }

    pub fn employee_id(&self) -> Option<&str> {
        match self {
            UserRef::EmployeeId(id) => Some(id),
            UserRef::Email(_) => None,
        }
    }
}

/// Identifies a user by SmarterU id, email or employee id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserIdentifier {
    Id(String),
    Email(String),
    EmployeeId(String),
}

impl From<UserRef> for UserIdentifier {
    fn from(value: UserRef) -> Self {
        match value {
            UserRef::Email(email) => UserIdentifier::Email(email),
            UserRef::EmployeeId(id) => UserIdentifier::EmployeeId(id),
        }
    }
}

/// Query for `getUser` and `getUserGroups`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUserQuery {
    pub identifier: UserIdentifier,
}

impl GetUserQuery {
    pub fn by_id(id: &str) -> Self {
        Self {
            identifier: UserIdentifier::Id(id.into()),
        }
    }

    pub fn by_email(email: &str) -> Self {
        Self {
            identifier: UserIdentifier::Email(email.into()),
        }
    }

    pub fn by_employee_id(employee_id: &str) -> Self {
        Self {
            identifier: UserIdentifier::EmployeeId(employee_id.into()),
        }
    }
}

/// Filters and paging for `listUsers`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort_field: Option<SortField>,
    pub sort_order: Option<SortOrder>,
    pub email: Option<MatchTag>,
    pub employee_id: Option<MatchTag>,
    pub name: Option<MatchTag>,
    pub home_group: Option<String>,
    pub group_name: Option<String>,
    pub user_status: Option<StatusFilter>,
    pub created_date: Option<DateRangeTag>,
    pub modified_date: Option<DateRangeTag>,
    pub teams: Vec<String>,
}

impl ListUsersQuery {
    pub(crate) fn has_filters(&self) -> bool {
        self.email.is_some()
            || self.employee_id.is_some()
            || self.name.is_some()
            || self.home_group.is_some()
            || self.group_name.is_some()
            || self.user_status.is_some()
            || self.created_date.is_some()
            || self.modified_date.is_some()
            || !self.teams.is_empty()
    }
}

// <User> entries of a listUsers response
pub(crate) fn users_from_list(info: &Element) -> Result<Vec<User>, SmarterUError> {
    info.child("Users")
        .map(|users| users.children_named("User").map(User::from_element).collect())
        .unwrap_or_else(|| Ok(Vec::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v2::parsers::parse_document;

    #[test]
    fn update_identifier_prefers_old_values() {
        let mut user = User {
            email: Some("new@example.com".into()),
            old_email: Some("old@example.com".into()),
            employee_id: Some("E2".into()),
            ..Default::default()
        };
        assert_eq!(
            user.update_identifier(),
            Some(UserRef::Email("old@example.com".into()))
        );

        user.clear_old_identifiers();
        assert_eq!(
            user.update_identifier(),
            Some(UserRef::Email("new@example.com".into()))
        );

        let user = User {
            employee_id: Some("E2".into()),
            old_employee_id: Some("E1".into()),
            ..Default::default()
        };
        assert_eq!(user.update_identifier(), Some(UserRef::EmployeeId("E1".into())));
    }

    #[test]
    fn user_from_get_user_element() {
        let root = parse_document(
            "<User><ID>42</ID><Email>jane@example.com</Email><EmployeeID>E7</EmployeeID>\
             <GivenName>Jane</GivenName><Surname>Doe</Surname><Status>Active</Status>\
             <Timezone>(GMT-05:00) Eastern Time (US &amp; Canada)</Timezone>\
             <AllowFeedback>1</AllowFeedback><ReceiveNotifications>0</ReceiveNotifications>\
             <Teams><Team>Red</Team><Team>Blue</Team></Teams>\
             <Supervisors><Supervisor>boss@example.com</Supervisor></Supervisors>\
             <CustomFields><CustomField><FieldName>Shirt</FieldName><FieldValue>L</FieldValue></CustomField></CustomFields>\
             <AuthenticationType>SmarterU</AuthenticationType>\
             <CreatedDate>2022-07-29 15:46:12</CreatedDate><ModifiedDate></ModifiedDate></User>",
        )
        .unwrap();
        let user = User::from_element(&root).unwrap();
        assert_eq!(user.id.as_deref(), Some("42"));
        assert_eq!(user.email.as_deref(), Some("jane@example.com"));
        assert_eq!(user.status, Some(Status::Active));
        assert_eq!(user.timezone.unwrap().provided_name(), "America/New_York");
        assert_eq!(user.allow_feedback, Some(true));
        assert_eq!(user.receive_notifications, Some(false));
        assert_eq!(user.teams, vec!["Red", "Blue"]);
        assert_eq!(user.supervisors, vec!["boss@example.com"]);
        assert_eq!(user.custom_fields, vec![CustomField::new("Shirt", "L")]);
        assert_eq!(user.authentication_type, Some(AuthenticationType::SmarterU));
        assert!(user.created_date.is_some());
        assert!(user.modified_date.is_none());
    }

    #[test]
    fn unknown_status_in_response_is_malformed() {
        let root = parse_document("<User><Status>Sleeping</Status></User>").unwrap();
        assert!(matches!(
            User::from_element(&root),
            Err(SmarterUError::ResponseMalformed(_))
        ));
    }

    #[test]
    fn unknown_timezone_is_left_unset() {
        let root = parse_document(
            "<User><Email>jane@example.com</Email>\
             <Timezone>(GMT-03:00) Brasilia Summer</Timezone></User>",
        )
        .unwrap();
        let user = User::from_element(&root).unwrap();
        assert_eq!(user.email.as_deref(), Some("jane@example.com"));
        assert_eq!(user.timezone, None);
    }

    #[test]
    fn timezone_by_provided_name_is_accepted() {
        let root = parse_document("<User><Timezone>Asia/Kolkata</Timezone></User>").unwrap();
        let user = User::from_element(&root).unwrap();
        assert_eq!(user.timezone.map(|tz| tz.provided_name()), Some("Asia/Kolkata"));
    }
}
