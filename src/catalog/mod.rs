//! Course catalog built on the ordered index.
//!
//! # Components
//! - [`CourseCatalog`] - Load, validate and query a catalog file
//! - [`CourseRecord`] - One course
//! - [`loader`] - Line parsing and bulk insertion
//! - [`presenter`] - Text formatting of query results
//! - [`SharedCatalog`] - Lock-guarded handle for multi-threaded use

pub mod loader;
pub mod presenter;
mod record;
mod shared;

pub use loader::LoadSummary;
pub use record::CourseRecord;
pub use shared::SharedCatalog;

use std::io::BufRead;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::common::{CatalogConfig, Error, MissingPrerequisite, Result};
use crate::index::{Iter, OrderedCourseIndex};

/// A loaded course catalog.
///
/// Each load builds a fresh index and only replaces the current one once
/// the whole input parsed (and, if configured, passed the integrity check).
/// A failed load leaves the previous catalog untouched.
///
/// # Example
/// ```
/// use std::io::Cursor;
/// use coursecatalog::{CatalogConfig, CourseCatalog};
///
/// let mut catalog = CourseCatalog::new(CatalogConfig::default());
/// catalog
///     .load_reader(Cursor::new("CSCI100,Intro\nCSCI200,Data Structures,CSCI100\n"))
///     .unwrap();
///
/// assert_eq!(catalog.search("csci200").unwrap().prerequisites(), ["CSCI100"]);
/// ```
#[derive(Debug, Default)]
pub struct CourseCatalog {
    index: OrderedCourseIndex,
    config: CatalogConfig,
}

impl CourseCatalog {
    /// Create an empty catalog.
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            index: OrderedCourseIndex::new(),
            config,
        }
    }

    /// Load a catalog file, replacing the current contents.
    ///
    /// # Errors
    /// - `Error::OpenCatalog` if the file cannot be opened
    /// - any parse error from [`loader::parse_line`]
    /// - `Error::DuplicateCourse` under `DuplicatePolicy::Reject`
    /// - `Error::DanglingPrerequisites` if integrity is required and fails
    pub fn load_path<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadSummary> {
        let mut index = OrderedCourseIndex::new();
        let summary = loader::load_from_path(path, &mut index, &self.config)?;
        self.install(index, summary)
    }

    /// Load catalog lines from any buffered reader, replacing the current contents.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> Result<LoadSummary> {
        let mut index = OrderedCourseIndex::new();
        let summary = loader::load_from_reader(reader, &mut index, &self.config)?;
        self.install(index, summary)
    }

    fn install(&mut self, index: OrderedCourseIndex, summary: LoadSummary) -> Result<LoadSummary> {
        if self.config.require_integrity && !index.validate_referential_integrity() {
            let missing = index.missing_prerequisites();
            warn!(count = missing.len(), "catalog has dangling prerequisites");
            return Err(Error::DanglingPrerequisites(missing));
        }

        info!(courses = index.len(), height = index.height(), "catalog ready");
        debug!(stats = %index.stats(), "index statistics");
        self.index = index;
        Ok(summary)
    }

    /// Case-insensitive lookup.
    pub fn search(&self, course_id: &str) -> Option<&CourseRecord> {
        self.index.search(course_id)
    }

    /// All courses in ascending identifier order.
    pub fn list_ordered(&self) -> Iter<'_> {
        self.index.list_ordered()
    }

    /// True iff every prerequisite names a loaded course.
    pub fn validate(&self) -> bool {
        self.index.validate_referential_integrity()
    }

    /// Every dangling prerequisite.
    pub fn missing_prerequisites(&self) -> Vec<MissingPrerequisite> {
        self.index.missing_prerequisites()
    }

    /// The underlying index.
    pub fn index(&self) -> &OrderedCourseIndex {
        &self.index
    }

    /// Load options in effect.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Hand the index over, e.g. to wrap it in a [`SharedCatalog`].
    pub fn into_index(self) -> OrderedCourseIndex {
        self.index
    }
}
