//! Course records and the read-only views handed out by queries.

use crate::catalog::CourseId;
use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One catalog entry. Prerequisites keep source order and may name courses
/// the catalog does not contain.
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub prerequisites: Vec<CourseId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
/// `(identifier, title)` pair produced by the listing.
pub struct CourseSummary<'a> {
    pub id: &'a CourseId,
    pub title: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// A looked-up course with its prerequisites resolved against the catalog.
pub struct CourseDetail<'a> {
    pub id: &'a CourseId,
    pub title: &'a str,
    pub prerequisites: Prerequisites<'a>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Prerequisites<'a> {
    /// The course lists no prerequisites at all.
    None,
    #[serde(untagged)]
    Listed(Vec<ResolvedPrerequisite<'a>>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A prerequisite id paired with its title, or flagged as absent from the
/// catalog. Serializes as `{"id", "title"}` or `{"id", "missing": true}`.
pub enum ResolvedPrerequisite<'a> {
    Found { id: &'a CourseId, title: &'a str },
    Missing { id: &'a CourseId },
}

impl<'a> ResolvedPrerequisite<'a> {
    pub fn id(&self) -> &'a CourseId {
        match self {
            ResolvedPrerequisite::Found { id, .. } | ResolvedPrerequisite::Missing { id } => id,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, ResolvedPrerequisite::Missing { .. })
    }
}

impl Serialize for ResolvedPrerequisite<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ResolvedPrerequisite", 2)?;
        match self {
            ResolvedPrerequisite::Found { id, title } => {
                state.serialize_field("id", id)?;
                state.serialize_field("title", title)?;
            }
            ResolvedPrerequisite::Missing { id } => {
                state.serialize_field("id", id)?;
                state.serialize_field("missing", &true)?;
            }
        }
        state.end()
    }
}

impl Prerequisites<'_> {
    pub fn is_none(&self) -> bool {
        matches!(self, Prerequisites::None)
    }
}
