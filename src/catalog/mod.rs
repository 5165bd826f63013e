//! Course catalog wiring.
//!
//! This module turns a delimited course file (for example
//! `data/abcu_courses.csv`) into an in-memory catalog. `CourseIndex` is one
//! immutable snapshot with its sorted id order; `CatalogStore` owns the active
//! snapshot and answers listing and lookup queries against it.

pub mod identity;
pub mod index;
pub mod model;
pub mod store;

pub use identity::{CourseId, normalize_course_id};
pub use index::{CourseIndex, LoadOptions, LoadReport, MalformedRecord};
pub use model::{Course, CourseDetail, CourseSummary, Prerequisites, ResolvedPrerequisite};
pub use store::CatalogStore;

/// Sample catalog shipped with the repository.
pub const DEFAULT_CATALOG_PATH: &str = "data/abcu_courses.csv";
