/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum SmarterUError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("XML processing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Missing value: {0}")]
    MissingValue(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("SmarterU rejected the request due to the following error(s): {}", format_error_codes(.0))]
    Api(Vec<ErrorCode>),

    #[error("API Response is malformed: {0}")]
    ResponseMalformed(String),
}

impl SmarterUError {
    /// Error codes returned by SmarterU when the request was rejected.
    ///
    /// Empty for every variant other than [`SmarterUError::Api`].
    pub fn error_codes(&self) -> &[ErrorCode] {
        match self {
            SmarterUError::Api(codes) => codes,
            _ => &[],
        }
    }
}

/// A single `<Error>` entry of a SmarterU response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCode {
    pub code: String,
    pub message: String,
}

impl ErrorCode {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

fn format_error_codes(codes: &[ErrorCode]) -> String {
    codes
        .iter()
        .map(|c| format!("{}: {}", c.code, c.message))
        .collect::<Vec<_>>()
        .join(", ")
}
