/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::SmarterUError;
use crate::v2::parsers::Element;
use serde::{Deserialize, Serialize};

/// Keys returned by `requestExternalAuthorization`.
///
/// Redirecting the user's browser to `redirect_url` signs them in to SmarterU without
/// a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalAuthorization {
    pub auth_key: String,
    pub request_key: String,
    pub redirect_url: String,
}

impl ExternalAuthorization {
    pub(crate) fn from_info(info: &Element) -> Result<Self, SmarterUError> {
        let field = |name: &str| {
            info.text_of(name).ok_or_else(|| {
                SmarterUError::ResponseMalformed(format!(
                    "requestExternalAuthorization response is missing {name}"
                ))
            })
        };
        Ok(Self {
            auth_key: field("AuthKey")?,
            request_key: field("RequestKey")?,
            redirect_url: field("RedirectURL")?,
        })
    }
}
