use crate::catalog::CourseId;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a catalog load. The previously loaded catalog is left
/// untouched whenever one of these is returned.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("could not open \"{}\"", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed reading line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Conditions reported by the query operations instead of a result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("no course entered")]
    EmptyQuery,

    #[error("no catalog has been loaded")]
    NotLoaded,

    #[error("course {0} not found")]
    NotFound(CourseId),
}
