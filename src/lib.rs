//! Academic advising lookup.
//!
//! Loads a course catalog from a delimited text file and answers two queries:
//! list every course alphabetically, or show one course with its
//! prerequisites resolved against the catalog. The interactive menu in
//! [`shell`] and the `course-planner` binary are thin drivers over
//! [`CatalogStore`].

pub mod catalog;
pub mod error;
pub mod record;
pub mod shell;

pub use catalog::{
    CatalogStore, Course, CourseDetail, CourseId, CourseIndex, CourseSummary, LoadOptions,
    LoadReport, MalformedRecord, Prerequisites, ResolvedPrerequisite, normalize_course_id,
};
pub use error::{CatalogError, QueryError};
pub use record::{DEFAULT_DELIMITER, split_record};
pub use shell::{MenuChoice, Shell};
