/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::MembershipAction;
use serde::{Deserialize, Serialize};

/// A course assigned to a group.
///
/// `action` is only sent on group updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningModule {
    pub id: String,
    pub allow_self_enroll: bool,
    pub auto_enroll: bool,
    pub action: Option<MembershipAction>,
}

impl LearningModule {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_action(mut self, action: MembershipAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// A subscription variant offered to a group.
///
/// `action` is only sent on group updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionVariant {
    pub id: String,
    pub requires_credits: bool,
    pub action: Option<MembershipAction>,
}

impl SubscriptionVariant {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_action(mut self, action: MembershipAction) -> Self {
        self.action = Some(action);
        self
    }
}
