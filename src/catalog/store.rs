//! The catalog owned by one planner session.
//!
//! `CatalogStore` starts unloaded. `load` builds a complete `CourseIndex`
//! before touching the current one, so a failed load leaves the previous
//! catalog queryable and a successful one replaces map and sorted ids together.

use crate::catalog::{
    CourseDetail, CourseId, CourseIndex, CourseSummary, LoadOptions, LoadReport, Prerequisites,
    ResolvedPrerequisite,
};
use crate::error::{CatalogError, QueryError};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default)]
pub struct CatalogStore {
    options: LoadOptions,
    current: Option<CourseIndex>,
}

impl CatalogStore {
    pub fn new(options: LoadOptions) -> Self {
        Self {
            options,
            current: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    /// Load `path` and swap it in as the active catalog.
    pub fn load(&mut self, path: &Path) -> Result<LoadReport, CatalogError> {
        let (index, report) = CourseIndex::load(path, &self.options)?;
        self.replace(index);
        Ok(report)
    }

    /// Swap in an already-built index.
    pub fn replace(&mut self, index: CourseIndex) {
        debug!(
            previous = ?self.current.as_ref().map(CourseIndex::len),
            courses = index.len(),
            "replacing active catalog"
        );
        self.current = Some(index);
    }

    /// Every course as `(id, title)` in ascending id order.
    pub fn list_all(&self) -> Result<Vec<CourseSummary<'_>>, QueryError> {
        let index = self.current.as_ref().ok_or(QueryError::NotLoaded)?;
        Ok(index
            .courses()
            .map(|course| CourseSummary {
                id: &course.id,
                title: &course.title,
            })
            .collect())
    }

    /// Look up a course by a raw, unnormalized query and resolve its
    /// prerequisites against the active catalog.
    pub fn lookup(&self, raw_query: &str) -> Result<CourseDetail<'_>, QueryError> {
        let id = CourseId::parse(raw_query).ok_or(QueryError::EmptyQuery)?;
        let index = self.current.as_ref().ok_or(QueryError::NotLoaded)?;
        let course = index.course(&id).ok_or(QueryError::NotFound(id))?;

        let prerequisites = if course.prerequisites.is_empty() {
            Prerequisites::None
        } else {
            Prerequisites::Listed(
                course
                    .prerequisites
                    .iter()
                    .map(|prereq| match index.course(prereq) {
                        Some(found) => ResolvedPrerequisite::Found {
                            id: &found.id,
                            title: &found.title,
                        },
                        None => ResolvedPrerequisite::Missing { id: prereq },
                    })
                    .collect(),
            )
        };

        Ok(CourseDetail {
            id: &course.id,
            title: &course.title,
            prerequisites,
        })
    }
}
