//! Error types for the course catalog.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// A prerequisite that names a course missing from the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingPrerequisite {
    /// Identifier of the course that lists the prerequisite.
    pub course: String,
    /// The prerequisite identifier that could not be found.
    pub prerequisite: String,
}

impl fmt::Display for MissingPrerequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.course, self.prerequisite)
    }
}

/// All errors the catalog can report.
///
/// The index itself never fails: a missing key is `None` and a duplicate
/// insert is a `false` return. Everything here comes from loading a catalog
/// file or from the post-load integrity check.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading a catalog or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file could not be opened.
    #[error("Unable to open catalog file {}: {}", .path.display(), .source)]
    OpenCatalog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line did not have at least an identifier and a name.
    #[error("Line {line}: incorrect line format ({reason})")]
    MalformedLine { line: usize, reason: String },

    /// The identifier field is not 4 letters followed by 3 digits.
    #[error("Line {line}: invalid course ID '{id}'")]
    InvalidCourseId { line: usize, id: String },

    /// The name field is itself shaped like a course identifier.
    #[error("Line {line}: course name is missing for '{id}'")]
    MissingCourseName { line: usize, id: String },

    /// A course identifier appeared twice under `DuplicatePolicy::Reject`.
    #[error("Line {line}: duplicate course ID '{id}'")]
    DuplicateCourse { line: usize, id: String },

    /// Some courses list prerequisites that have no entry in the catalog.
    #[error("{} prerequisite(s) are missing an entry in the catalog: {}", .0.len(), join_missing(.0))]
    DanglingPrerequisites(Vec<MissingPrerequisite>),
}

fn join_missing(missing: &[MissingPrerequisite]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    /// Line number the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MalformedLine { line, .. }
            | Error::InvalidCourseId { line, .. }
            | Error::MissingCourseName { line, .. }
            | Error::DuplicateCourse { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidCourseId {
            line: 3,
            id: "CS1".to_string(),
        };
        assert_eq!(format!("{}", err), "Line 3: invalid course ID 'CS1'");

        let err = Error::DanglingPrerequisites(vec![MissingPrerequisite {
            course: "CSCI301".to_string(),
            prerequisite: "CSCI999".to_string(),
        }]);
        assert_eq!(
            format!("{}", err),
            "1 prerequisite(s) are missing an entry in the catalog: CSCI301 -> CSCI999"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_error_line() {
        let err = Error::MalformedLine {
            line: 7,
            reason: "expected at least 2 fields".to_string(),
        };
        assert_eq!(err.line(), Some(7));
        assert_eq!(Error::DanglingPrerequisites(vec![]).line(), None);
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
