/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Adds `parse`/`as_api_str` to a strum enum so string input is checked against the
// vendor vocabulary and rejected with the list of accepted values.
macro_rules! api_value {
    ( $t:ty, $label:expr ) => {
        impl $t {
            /// Parses the SmarterU string form of this value
            pub fn parse(value: &str) -> Result<Self, $crate::v2::errors::SmarterUError> {
                <$t as std::str::FromStr>::from_str(value).map_err(|_| {
                    $crate::v2::errors::SmarterUError::InvalidArgument(format!(
                        "\"{}\" is not a valid {}. Valid values are: {}",
                        value,
                        $label,
                        <$t as strum::VariantNames>::VARIANTS.join(", ")
                    ))
                })
            }

            /// The string SmarterU expects on the wire
            pub fn as_api_str(&self) -> &'static str {
                self.into()
            }
        }
    };
}

// Fails with `MissingValue` unless the condition holds.
macro_rules! require {
    ( $cond:expr, $msg:expr ) => {
        if !$cond {
            return Err($crate::v2::errors::SmarterUError::MissingValue($msg.to_string()));
        }
    };
}

pub(crate) use {api_value, require};
