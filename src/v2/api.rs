/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::{ErrorCode, SmarterUError};
use crate::v2::parsers::{Element, parse_document};
use log::{debug, error};
use reqwest::header::CONTENT_TYPE;
use std::collections::HashMap;

// SmarterU API endpoint
pub const API_ORIGIN: &str = "https://api.smarteru.com/apiv2/";

const REDACTED: &str = "********";

/// Directly communicates with the API.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) creds: Creds,
    endpoint: String,
    https_client: reqwest::Client,
}

impl ApiClient {
    /// Creates a new SmarterU client instance for the default endpoint
    pub fn new(creds: Creds) -> Self {
        Self {
            creds,
            endpoint: API_ORIGIN.to_string(),
            https_client: reqwest::Client::new(),
        }
    }

    /// Creates a client that posts to `endpoint` through the provided HTTP client
    pub fn with_http_client(
        creds: Creds,
        https_client: reqwest::Client,
        endpoint: &str,
    ) -> Result<Self, SmarterUError> {
        Ok(Self {
            creds,
            endpoint: url::Url::parse(endpoint)?.into(),
            https_client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts a request envelope and classifies the response envelope.
    ///
    /// A `<Result>` other than `Success` is logged with the API keys masked and returned
    /// as [`SmarterUError::Api`]. HTTP error statuses come back as
    /// [`SmarterUError::Request`].
    pub async fn post(&self, method: &str, xml: String) -> Result<ResponseBody, SmarterUError> {
        debug!("SmarterU {method} request to {}", self.endpoint);
        let resp = self
            .https_client
            .post(self.endpoint.as_str())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(form_body(&xml))
            .send()
            .await?
            .error_for_status()?;
        let text = resp.text().await?;

        let body = ResponseBody::parse(&text)?;
        if !body.is_success() {
            error!(
                "SmarterU {method} failed. Request: {} Response: {}",
                self.redact(&xml),
                self.redact(&text)
            );
            return Err(SmarterUError::Api(body.errors));
        }
        if !body.errors.is_empty() {
            debug!(
                "SmarterU {method} succeeded with {} non-fatal error(s)",
                body.errors.len()
            );
        }
        Ok(body)
    }

    /// Masks both API keys and every `<Password>` value wherever they appear in `text`.
    ///
    /// Keys are matched raw and in their XML escaped forms, since the envelope carries
    /// them escaped.
    pub(crate) fn redact(&self, text: &str) -> String {
        let mut redacted = text.to_string();
        for key in [&self.creds.account_api_key, &self.creds.user_api_key] {
            if key.is_empty() {
                continue;
            }
            let escaped = quick_xml::escape::escape(key.as_str());
            let partially_escaped = quick_xml::escape::partial_escape(key.as_str());
            for form in [key.as_str(), escaped.as_ref(), partially_escaped.as_ref()] {
                redacted = redacted.replace(form, REDACTED);
            }
        }
        mask_element(&redacted, "Password")
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("endpoint", &self.endpoint)
            .field("creds", &self.creds)
            .finish()
    }
}

// Replaces the text of every `<tag>…</tag>` with the redaction marker
fn mask_element(text: &str, tag: &str) -> String {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let mut masked = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(&open) {
        let content_start = start + open.len();
        let Some(len) = rest[content_start..].find(&close) else {
            break;
        };
        masked.push_str(&rest[..content_start]);
        masked.push_str(REDACTED);
        rest = &rest[content_start + len..];
    }
    masked.push_str(rest);
    masked
}

// The whole envelope travels as the single form field `Package`
pub(crate) fn form_body(xml: &str) -> String {
    format!("Package={}", urlencoding::encode(xml))
}

/// Account and user API keys for the SmarterU API
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Creds {
    pub(crate) account_api_key: String,
    pub(crate) user_api_key: String,
}

impl Creds {
    pub const ACCOUNT_API_KEY_VAR: &'static str = "SMARTERU_ACCOUNT_API_KEY";
    pub const USER_API_KEY_VAR: &'static str = "SMARTERU_USER_API_KEY";

    pub fn new(account_api_key: &str, user_api_key: &str) -> Self {
        Self {
            account_api_key: account_api_key.into(),
            user_api_key: user_api_key.into(),
        }
    }

    /// Reads the keys from `SMARTERU_ACCOUNT_API_KEY` and `SMARTERU_USER_API_KEY`
    pub fn from_env() -> Result<Self, SmarterUError> {
        let read = |var: &str| {
            std::env::var(var)
                .ok()
                .filter(|v| !v.is_empty())
                .ok_or_else(|| SmarterUError::MissingValue(format!("{var} is not set")))
        };
        Ok(Self {
            account_api_key: read(Self::ACCOUNT_API_KEY_VAR)?,
            user_api_key: read(Self::USER_API_KEY_VAR)?,
        })
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("account_api_key", &REDACTED)
            .field("user_api_key", &REDACTED)
            .finish()
    }
}

/// Response envelope returned from the API
#[derive(Debug, Clone)]
pub struct ResponseBody {
    pub result: String,
    pub(crate) info: Element,
    pub errors: Vec<ErrorCode>,
}

impl ResponseBody {
    pub(crate) fn parse(xml: &str) -> Result<Self, SmarterUError> {
        let root = parse_document(xml)?;
        if root.name != "SmarterU" {
            return Err(SmarterUError::ResponseMalformed(format!(
                "expected <SmarterU> root, found <{}>",
                root.name
            )));
        }
        let result = root.text_of("Result").ok_or_else(|| {
            SmarterUError::ResponseMalformed("response has no <Result>".to_string())
        })?;
        let errors = root
            .child("Errors")
            .map(|errors| {
                errors
                    .children_named("Error")
                    .map(|e| ErrorCode {
                        code: e.text_of("ErrorID").unwrap_or_default(),
                        message: e.text_of("ErrorMessage").unwrap_or_default(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        let info = root.child("Info").cloned().unwrap_or_default();
        Ok(Self {
            result,
            info,
            errors,
        })
    }

    /// Determine if the result returned in the response body is a success
    pub fn is_success(&self) -> bool {
        self.result == "Success"
    }
}

/// A successful response together with any non-fatal errors SmarterU reported
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub response: T,
    pub errors: Vec<ErrorCode>,
}

impl<T> ApiResponse<T> {
    pub(crate) fn new(response: T, errors: Vec<ErrorCode>) -> Self {
        Self { response, errors }
    }

    /// Non-fatal errors keyed by error code
    pub fn error_map(&self) -> HashMap<String, String> {
        self.errors
            .iter()
            .map(|e| (e.code.clone(), e.message.clone()))
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
