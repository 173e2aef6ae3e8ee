/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::SmarterUError;
use crate::v2::parsers::Element;
use crate::v2::{DateRangeTag, Status, StatusFilter, Tag, UserIdentifier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A custom field name and value, as configured on the SmarterU account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub name: String,
    pub value: Option<String>,
}

impl CustomField {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// A field requested as a report column, without a value
    pub fn named(name: &str) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub(crate) fn from_element(el: &Element) -> Self {
        Self {
            name: el.text_of("FieldName").unwrap_or_default(),
            value: el.text_of("FieldValue"),
        }
    }
}

/// One enrollment row of the learner report.
///
/// Which optional fields are populated depends on the columns requested in
/// [`GetLearnerReportQuery::columns`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearnerReport {
    pub id: Option<String>,
    pub course_name: Option<String>,
    pub surname: Option<String>,
    pub given_name: Option<String>,
    pub learning_module_id: Option<String>,
    pub user_id: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub modified_date: Option<DateTime<Utc>>,
    pub alternate_email: Option<String>,
    pub completed_date: Option<DateTime<Utc>>,
    pub course_duration: Option<String>,
    pub course_session_id: Option<String>,
    pub division: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub employee_id: Option<String>,
    pub enrolled_date: Option<DateTime<Utc>>,
    pub enrollment_id: Option<String>,
    pub grade: Option<String>,
    pub grade_percentage: Option<f64>,
    pub group_id: Option<String>,
    pub group_name: Option<String>,
    pub last_accessed_date: Option<DateTime<Utc>>,
    pub learner_notes: Option<String>,
    pub points: Option<String>,
    pub progress: Option<String>,
    pub role_id: Option<String>,
    pub started_date: Option<DateTime<Utc>>,
    pub subscription_name: Option<String>,
    pub title: Option<String>,
    pub user_email: Option<String>,
    pub variant_name: Option<String>,
    pub variant_start_date: Option<DateTime<Utc>>,
    pub variant_end_date: Option<DateTime<Utc>>,
    pub custom_fields: Vec<CustomField>,
}

impl LearnerReport {
    pub(crate) fn from_element(el: &Element) -> Result<Self, SmarterUError> {
        let custom_fields = el
            .child("CustomFields")
            .map(|c| {
                c.children_named("CustomField")
                    .map(CustomField::from_element)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            id: el.text_of("ID"),
            course_name: el.text_of("CourseName"),
            surname: el.text_of("Surname"),
            given_name: el.text_of("GivenName"),
            learning_module_id: el.text_of("LearningModuleID"),
            user_id: el.text_of("UserID"),
            created_date: el.date_of("CreatedDate")?,
            modified_date: el.date_of("ModifiedDate")?,
            alternate_email: el.text_of("AlternateEmail"),
            completed_date: el.date_of("CompletedDate")?,
            course_duration: el.text_of("CourseDuration"),
            course_session_id: el.text_of("CourseSessionID"),
            division: el.text_of("Division"),
            due_date: el.date_of("DueDate")?,
            employee_id: el.text_of("EmployeeID"),
            enrolled_date: el.date_of("EnrolledDate")?,
            enrollment_id: el.text_of("EnrollmentID"),
            grade: el.text_of("Grade"),
            grade_percentage: el.parsed_of("GradePercentage")?,
            group_id: el.text_of("GroupID"),
            group_name: el.text_of("GroupName"),
            last_accessed_date: el.date_of("LastAccessedDate")?,
            learner_notes: el.text_of("LearnerNotes"),
            points: el.text_of("Points"),
            progress: el.text_of("Progress"),
            role_id: el.text_of("RoleID"),
            started_date: el.date_of("StartedDate")?,
            subscription_name: el.text_of("SubscriptionName"),
            title: el.text_of("Title"),
            user_email: el.text_of("UserEmail"),
            variant_name: el.text_of("VariantName"),
            variant_start_date: el.date_of("VariantStartDate")?,
            variant_end_date: el.date_of("VariantEndDate")?,
            custom_fields,
        })
    }
}

/// Which groups a learner report covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupFilter {
    Status(StatusFilter),
    Names(Vec<String>),
}

/// Which users a learner report covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserFilter {
    Status(StatusFilter),
    Identifiers(Vec<UserIdentifier>),
}

/// Filters, paging and columns for `getLearnerReport`.
///
/// Both `groups` and `users` must be set before the query is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetLearnerReportQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub enrollment_id: Option<String>,
    pub groups: Option<GroupFilter>,
    pub group_tags: Vec<Tag>,
    pub learning_module_status: Option<Status>,
    pub learning_module_names: Vec<String>,
    pub enrollment_statuses: Vec<String>,
    pub completed_dates: Vec<DateRangeTag>,
    pub due_dates: Vec<DateRangeTag>,
    pub enrolled_dates: Vec<DateRangeTag>,
    pub grace_period_dates: Vec<DateRangeTag>,
    pub last_accessed_dates: Vec<DateRangeTag>,
    pub started_dates: Vec<DateRangeTag>,
    pub created_dates: Vec<DateRangeTag>,
    pub modified_dates: Vec<DateRangeTag>,
    pub users: Option<UserFilter>,
    pub columns: Vec<String>,
    pub custom_fields: Vec<CustomField>,
}

impl GetLearnerReportQuery {
    /// Checks that the group and user selections SmarterU requires are present
    pub fn validate(&self) -> Result<(), SmarterUError> {
        match &self.groups {
            None => {
                return Err(SmarterUError::MissingValue(
                    "Learner report query must filter groups by status or by name".into(),
                ));
            }
            Some(GroupFilter::Names(names)) if names.is_empty() => {
                return Err(SmarterUError::MissingValue(
                    "Learner report group name filter must name at least one group".into(),
                ));
            }
            _ => {}
        }
        match &self.users {
            None => Err(SmarterUError::MissingValue(
                "Learner report query must filter users by status or by identifier".into(),
            )),
            Some(UserFilter::Identifiers(ids)) if ids.is_empty() => {
                Err(SmarterUError::MissingValue(
                    "Learner report user filter must identify at least one user".into(),
                ))
            }
            _ => Ok(()),
        }
    }
}

// <Learner> rows of a getLearnerReport response
pub(crate) fn reports_from_info(info: &Element) -> Result<Vec<LearnerReport>, SmarterUError> {
    info.child("LearnerReport")
        .map(|report| {
            report
                .children_named("Learner")
                .map(LearnerReport::from_element)
                .collect()
        })
        .unwrap_or_else(|| Ok(Vec::new()))
}
