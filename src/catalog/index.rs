//! Indexed view of a course catalog file.
//!
//! A `CourseIndex` is built in one pass over a delimited text source and never
//! mutated afterwards. Replacing the catalog means building a new index; the
//! sorted id list is computed once at construction and never patched.

use crate::catalog::{Course, CourseId};
use crate::error::CatalogError;
use crate::record::{DEFAULT_DELIMITER, split_record};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Parser settings applied while loading a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    pub delimiter: char,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A line skipped because it did not carry both an identifier and a title.
pub struct MalformedRecord {
    /// 1-based line number in the source.
    pub line: usize,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Outcome of a successful load.
pub struct LoadReport {
    /// Courses in the resulting catalog (after last-write-wins collapsing).
    pub loaded: usize,
    pub malformed: Vec<MalformedRecord>,
    /// Line numbers whose identifier normalized to nothing.
    pub discarded: Vec<usize>,
}

#[derive(Debug, Default)]
/// Course catalog keyed by identifier plus its ascending id order.
pub struct CourseIndex {
    by_id: HashMap<CourseId, Course>,
    sorted_ids: Vec<CourseId>,
}

impl CourseIndex {
    /// Open `path` and build an index from its lines.
    pub fn load(path: &Path, options: &LoadOptions) -> Result<(Self, LoadReport), CatalogError> {
        let file = File::open(path).map_err(|source| CatalogError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loading course catalog");
        let (index, report) = Self::from_reader(BufReader::new(file), options)?;
        info!(
            path = %path.display(),
            loaded = report.loaded,
            malformed = report.malformed.len(),
            "course catalog loaded"
        );
        Ok((index, report))
    }

    /// Build an index from any line source. Blank lines are skipped, lines
    /// with fewer than two fields are reported as malformed, and a repeated
    /// identifier replaces the earlier record.
    ///
    /// Lines are decoded lossily, so stray non-UTF-8 bytes in a title never
    /// abort the load; only real I/O failures do.
    pub fn from_reader<R: BufRead>(
        mut reader: R,
        options: &LoadOptions,
    ) -> Result<(Self, LoadReport), CatalogError> {
        let mut courses = Vec::new();
        let mut report = LoadReport::default();
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| CatalogError::Read {
                    line: line_number + 1,
                    source,
                })?;
            if read == 0 {
                break;
            }
            line_number += 1;
            let decoded = String::from_utf8_lossy(&buf);
            let line = decoded.trim_end_matches(['\r', '\n']).trim();
            if line.is_empty() {
                continue;
            }

            let fields = split_record(line, options.delimiter);
            if fields.len() < 2 {
                debug!(line = line_number, "skipping malformed course record");
                report.malformed.push(MalformedRecord {
                    line: line_number,
                    text: line.to_string(),
                });
                continue;
            }

            let Some(id) = CourseId::parse(&fields[0]) else {
                debug!(line = line_number, "discarding course record with empty id");
                report.discarded.push(line_number);
                continue;
            };
            let prerequisites = fields[2..]
                .iter()
                .filter_map(|raw| CourseId::parse(raw))
                .collect();
            courses.push(Course {
                id,
                title: fields[1].trim().to_string(),
                prerequisites,
            });
        }

        let index = Self::from_courses(courses);
        report.loaded = index.len();
        Ok((index, report))
    }

    /// Index already-built courses; later entries win on duplicate ids.
    pub fn from_courses<I>(courses: I) -> Self
    where
        I: IntoIterator<Item = Course>,
    {
        let mut by_id = HashMap::new();
        for course in courses {
            by_id.insert(course.id.clone(), course);
        }
        let mut sorted_ids: Vec<CourseId> = by_id.keys().cloned().collect();
        sorted_ids.sort();
        Self { by_id, sorted_ids }
    }

    /// Resolve a course by id.
    pub fn course(&self, id: &CourseId) -> Option<&Course> {
        self.by_id.get(id)
    }

    /// Iterates course ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &CourseId> {
        self.sorted_ids.iter()
    }

    /// Iterates courses in ascending id order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.sorted_ids.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
