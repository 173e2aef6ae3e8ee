/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::SmarterUError;
use crate::v2::macros::api_value;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr, VariantNames};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr, VariantNames,
)]
pub enum PermissionAction {
    #[default]
    Grant,
    Deny,
}
api_value!(PermissionAction, "permission action");

/// Group permission codes accepted by SmarterU
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr, VariantNames,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionCode {
    ManageGroup,
    CreateCourse,
    ManageGroupCourses,
    ManageUsers,
    ManageGroupUsers,
    ViewLearnerResults,
    Proctor,
    Marker,
    Instructor,
    ManageUserSubscriptions,
    ManageTrainingPlans,
}
api_value!(PermissionCode, "permission code");

/// A single permission change for a user within a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub action: PermissionAction,
    pub code: PermissionCode,
}

impl Permission {
    pub fn grant(code: PermissionCode) -> Self {
        Self {
            action: PermissionAction::Grant,
            code,
        }
    }

    pub fn deny(code: PermissionCode) -> Self {
        Self {
            action: PermissionAction::Deny,
            code,
        }
    }

    /// Builds one permission per code, failing on the first code SmarterU does not know
    pub fn from_codes<S: AsRef<str>>(
        action: PermissionAction,
        codes: &[S],
    ) -> Result<Vec<Self>, SmarterUError> {
        codes
            .iter()
            .map(|c| {
                Ok(Self {
                    action,
                    code: PermissionCode::parse(c.as_ref())?,
                })
            })
            .collect()
    }
}
