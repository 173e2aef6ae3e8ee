/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v2::errors::SmarterUError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::str::FromStr;

/// An element of a parsed SmarterU response.
///
/// Responses are small, so they are read into a tree once and then mapped onto the
/// data types.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Element {
    pub name: String,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Trimmed text of the named child, `None` when missing or empty
    pub fn text_of(&self, name: &str) -> Option<String> {
        self.child(name)
            .map(|c| c.text.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    }

    /// Texts of every `item` element inside the `container` child, in document order
    pub fn texts_in(&self, container: &str, item: &str) -> Vec<String> {
        self.child(container)
            .map(|c| {
                c.children_named(item)
                    .map(|i| i.text.trim())
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn bool_of(&self, name: &str) -> Result<Option<bool>, SmarterUError> {
        self.text_of(name).map(|t| parse_bool(&t)).transpose()
    }

    pub fn date_of(&self, name: &str) -> Result<Option<DateTime<Utc>>, SmarterUError> {
        self.text_of(name).map(|t| parse_date(&t)).transpose()
    }

    /// Parses the named child with `T::from_str`, naming the field on failure
    pub fn parsed_of<T: FromStr>(&self, name: &str) -> Result<Option<T>, SmarterUError> {
        self.text_of(name)
            .map(|t| {
                T::from_str(&t).map_err(|_| {
                    SmarterUError::ResponseMalformed(format!("unexpected {name} value \"{t}\""))
                })
            })
            .transpose()
    }
}

/// Reads an XML document into an [`Element`] tree and returns the root element
pub(crate) fn parse_document(xml: &str) -> Result<Element, SmarterUError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => stack.push(Element {
                name: element_name(e.name().as_ref())?,
                ..Default::default()
            }),
            Event::Empty(e) => {
                let el = Element {
                    name: element_name(e.name().as_ref())?,
                    ..Default::default()
                };
                match stack.last_mut() {
                    Some(parent) => parent.children.push(el),
                    None => return Ok(el),
                }
            }
            Event::End(_) => {
                let el = stack.pop().ok_or_else(|| {
                    SmarterUError::ResponseMalformed("unbalanced end tag".to_string())
                })?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(el),
                    None => return Ok(el),
                }
            }
            Event::Text(e) => {
                if let Some(current) = stack.last_mut() {
                    let decoded = e
                        .decode()
                        .map_err(|err| SmarterUError::ResponseMalformed(err.to_string()))?;
                    let unescaped = quick_xml::escape::unescape(&decoded)
                        .map_err(|err| SmarterUError::ResponseMalformed(err.to_string()))?;
                    current.text.push_str(&unescaped);
                }
            }
            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::GeneralRef(e) => {
                if let Some(current) = stack.last_mut() {
                    if let Some(ch) = e.resolve_char_ref()? {
                        current.text.push(ch);
                    } else {
                        let name = e
                            .decode()
                            .map_err(|err| SmarterUError::ResponseMalformed(err.to_string()))?;
                        let resolved = quick_xml::escape::resolve_predefined_entity(&name)
                            .ok_or_else(|| {
                                SmarterUError::ResponseMalformed(format!(
                                    "unknown entity &{name};"
                                ))
                            })?;
                        current.text.push_str(resolved);
                    }
                }
            }
            Event::Eof => {
                return Err(SmarterUError::ResponseMalformed(
                    "unexpected end of document".to_string(),
                ));
            }
            // Declarations, comments, processing instructions
            _ => {}
        }
    }
}

fn element_name(raw: &[u8]) -> Result<String, SmarterUError> {
    std::str::from_utf8(raw)
        .map(str::to_string)
        .map_err(|e| SmarterUError::ResponseMalformed(e.to_string()))
}

/// Parses SmarterU booleans, which are normally `1`/`0`
pub(crate) fn parse_bool(s: &str) -> Result<bool, SmarterUError> {
    match s.trim() {
        "1" => Ok(true),
        "0" => Ok(false),
        s if s.eq_ignore_ascii_case("true") => Ok(true),
        s if s.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(SmarterUError::ResponseMalformed(format!(
            "invalid boolean: {s}"
        ))),
    }
}

// Date formats seen across endpoints, tried in order
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%d-%b-%y %H:%M:%S",
];
const DATE_FORMATS: &[&str] = &["%d-%b-%y", "%d-%b-%Y", "%Y/%m/%d", "%Y-%m-%d"];

/// Parses the date formats returned by SmarterU. Values without a timezone are UTC.
pub(crate) fn parse_date(s: &str) -> Result<DateTime<Utc>, SmarterUError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in DATE_TIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ndt.and_utc());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d.and_time(chrono::NaiveTime::MIN).and_utc());
        }
    }
    Err(SmarterUError::ResponseMalformed(format!(
        "invalid date: {s}"
    )))
}
