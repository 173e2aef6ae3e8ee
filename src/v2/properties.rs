/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::macros::api_value;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr, VariantNames};

/// Status of a user or group
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr, VariantNames,
)]
pub enum Status {
    #[default]
    Active,
    Inactive,
}
api_value!(Status, "status");

/// Status filter used by list and report queries
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr, VariantNames,
)]
pub enum StatusFilter {
    Active,
    Inactive,
    All,
}
api_value!(StatusFilter, "status filter");

/// How a [`MatchTag`](crate::v2::MatchTag) value is compared
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr, VariantNames,
)]
pub enum MatchType {
    #[default]
    #[strum(serialize = "EXACT")]
    Exact,
    #[strum(serialize = "CONTAINS")]
    Contains,
}
api_value!(MatchType, "match type");

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr, VariantNames,
)]
pub enum SortField {
    #[strum(serialize = "NAME")]
    Name,
    #[strum(serialize = "EMPLOYEE_ID")]
    EmployeeId,
}
api_value!(SortField, "sort field");

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr, VariantNames,
)]
pub enum SortOrder {
    #[strum(serialize = "ASC")]
    Ascending,
    #[strum(serialize = "DESC")]
    Descending,
}
api_value!(SortOrder, "sort order");

/// Who receives the emails addressed to a user
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr, VariantNames,
)]
pub enum SendEmailTo {
    #[strum(serialize = "Self")]
    Myself,
    Supervisor,
    Alternate,
}
api_value!(SendEmailTo, "send email to");

/// Which address physical mail is sent to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr, VariantNames,
)]
pub enum SendMailTo {
    Personal,
    Organization,
}
api_value!(SendMailTo, "send mail to");

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr, VariantNames,
)]
pub enum AuthenticationType {
    SmarterU,
    External,
    Both,
}
api_value!(AuthenticationType, "authentication type");

/// Membership change requested on an update call
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr, VariantNames,
)]
pub enum MembershipAction {
    Add,
    Remove,
}
api_value!(MembershipAction, "action");
