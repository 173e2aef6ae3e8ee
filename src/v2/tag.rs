/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::MatchType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifies a tag either by its SmarterU id or by its name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagRef {
    Id(String),
    Name(String),
}

/// A group tag and the values assigned to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub tag: TagRef,
    pub values: Vec<String>,
}

impl Tag {
    pub fn by_id(id: &str, values: &[&str]) -> Self {
        Self {
            tag: TagRef::Id(id.into()),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn by_name(name: &str, values: &[&str]) -> Self {
        Self {
            tag: TagRef::Name(name.into()),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        match &self.tag {
            TagRef::Id(id) => Some(id),
            TagRef::Name(_) => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match &self.tag {
            TagRef::Name(name) => Some(name),
            TagRef::Id(_) => None,
        }
    }

    // Tag values travel as a single comma separated string
    pub(crate) fn joined_values(&self) -> String {
        self.values.join(",")
    }
}

/// Text filter matched either exactly or as a substring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTag {
    pub match_type: MatchType,
    pub value: String,
}

impl MatchTag {
    pub fn exact(value: &str) -> Self {
        Self {
            match_type: MatchType::Exact,
            value: value.into(),
        }
    }

    pub fn contains(value: &str) -> Self {
        Self {
            match_type: MatchType::Contains,
            value: value.into(),
        }
    }
}

/// Inclusive date range filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeTag {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRangeTag {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }
}
