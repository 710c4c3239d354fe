//! CLI-level errors (wraps catalog errors)

use thiserror::Error;

use crate::cli::exitcode;
use crate::common::Error;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Catalog(#[from] Error),

    #[error("{0}")]
    Usage(String),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Catalog(Error::Io(err))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => exitcode::USAGE,
            CliError::Catalog(e) => match e {
                Error::Io(_) => exitcode::IOERR,
                Error::OpenCatalog { .. } => exitcode::NOINPUT,
                Error::DanglingPrerequisites(_) => exitcode::INVALID,
                Error::MalformedLine { .. }
                | Error::InvalidCourseId { .. }
                | Error::MissingCourseName { .. }
                | Error::DuplicateCourse { .. } => exitcode::DATAERR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Usage("no file".into()).exit_code(), exitcode::USAGE);

        let err: CliError = Error::InvalidCourseId {
            line: 1,
            id: "X".into(),
        }
        .into();
        assert_eq!(err.exit_code(), exitcode::DATAERR);

        let err: CliError = Error::MalformedLine {
            line: 2,
            reason: "line is not valid UTF-8".into(),
        }
        .into();
        assert_eq!(err.exit_code(), exitcode::DATAERR);

        let err: CliError = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert_eq!(err.exit_code(), exitcode::IOERR);
    }
}
