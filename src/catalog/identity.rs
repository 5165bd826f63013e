//! Canonical course identifiers.

use serde::Serialize;
use std::fmt;

/// Normalized course code such as `CSCI200`.
///
/// Only [`CourseId::parse`] builds one, so a `CourseId` is never empty and never
/// contains whitespace, `-`, `_` or `,`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Normalize `raw` and wrap it; `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize_course_id(raw);
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip whitespace, `-`, `_` and `,`, then upper-case what remains.
///
/// `"cs-200"`, `"CS 200"` and `"cs_200"` all become `"CS200"`.
pub fn normalize_course_id(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '_' | ',')))
        .flat_map(char::to_uppercase)
        .collect();
    stripped.trim().to_string()
}
