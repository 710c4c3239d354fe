//! Catalog loader - turns delimited text into index entries.
//!
//! # Line Format
//! ```text
//! CSCI300,Introduction to Algorithms,CSCI200,MATH201
//! └──┬──┘ └───────────┬────────────┘ └──────┬──────┘
//!   id           display name          prerequisites (0..n)
//! ```
//!
//! Fields are separated by [`FIELD_DELIMITER`] and trimmed. Blank lines are
//! skipped. Every rejected line is reported with its 1-based line number;
//! the caller decides whether that ends the program.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::catalog::CourseRecord;
use crate::common::config::{FIELD_DELIMITER, MIN_FIELDS};
use crate::common::{CatalogConfig, CourseId, DuplicatePolicy, Error, Result};
use crate::index::OrderedCourseIndex;

/// Counts from a completed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Lines read, including blank ones.
    pub lines: usize,
    /// Courses added to the index.
    pub inserted: usize,
    /// Courses skipped because their identifier was already present.
    pub duplicates: usize,
}

/// Parse one catalog line.
///
/// Returns `Ok(None)` for blank lines.
///
/// # Errors
/// - `Error::MalformedLine` if there are fewer than two fields
/// - `Error::InvalidCourseId` if field 0 is not 4 letters + 3 digits
/// - `Error::MissingCourseName` if field 1 is empty or looks like an identifier
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<CourseRecord>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
    if fields.len() < MIN_FIELDS {
        return Err(Error::MalformedLine {
            line: line_no,
            reason: format!(
                "expected at least {} fields, found {}",
                MIN_FIELDS,
                fields.len()
            ),
        });
    }

    let id = CourseId::parse(fields[0]).ok_or_else(|| Error::InvalidCourseId {
        line: line_no,
        id: fields[0].to_string(),
    })?;

    // A name shaped like an identifier means the name column was skipped.
    // Empty names are rejected as well.
    let name = fields[1];
    if name.is_empty() || CourseId::is_valid(name) {
        return Err(Error::MissingCourseName {
            line: line_no,
            id: id.into_string(),
        });
    }

    let prerequisites = fields[MIN_FIELDS..]
        .iter()
        .filter(|field| !field.is_empty())
        .map(|field| field.to_string())
        .collect();

    Ok(Some(CourseRecord::new(id.into_string(), name, prerequisites)))
}

/// Read every line of `reader` into `index`.
///
/// Stops at the first bad line. Entries inserted before the failure stay in
/// `index`; load into a fresh index if that matters.
pub fn load_from_reader<R: BufRead>(
    reader: R,
    index: &mut OrderedCourseIndex,
    config: &CatalogConfig,
) -> Result<LoadSummary> {
    let mut summary = LoadSummary::default();

    for (offset, line) in reader.lines().enumerate() {
        let line_no = offset + 1;
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(Error::MalformedLine {
                    line: line_no,
                    reason: "line is not valid UTF-8".to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        summary.lines = line_no;

        let Some(record) = parse_line(line_no, &line)? else {
            continue;
        };

        let id = record.identifier().to_string();
        if index.insert(&id, record) {
            summary.inserted += 1;
            continue;
        }

        match config.duplicate_policy {
            DuplicatePolicy::Reject => {
                return Err(Error::DuplicateCourse { line: line_no, id });
            }
            DuplicatePolicy::Ignore => {
                warn!(line = line_no, course = %id, "duplicate course ignored, keeping first entry");
                summary.duplicates += 1;
            }
        }
    }

    info!(
        lines = summary.lines,
        inserted = summary.inserted,
        duplicates = summary.duplicates,
        "catalog loaded"
    );
    Ok(summary)
}

/// Open the file at `path` and load it into `index`.
///
/// # Errors
/// Returns `Error::OpenCatalog` if the file cannot be opened, plus anything
/// [`load_from_reader`] reports.
pub fn load_from_path<P: AsRef<Path>>(
    path: P,
    index: &mut OrderedCourseIndex,
    config: &CatalogConfig,
) -> Result<LoadSummary> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening catalog");

    let file = File::open(path).map_err(|source| Error::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;

    load_from_reader(BufReader::new(file), index, config)
}
