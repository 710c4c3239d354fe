//! Configuration for the course catalog.

/// Length of a course identifier (e.g. `CSCI300`).
///
/// # Layout
/// ```text
/// ┌───┬───┬───┬───┬───┬───┬───┐
/// │ C │ S │ C │ I │ 3 │ 0 │ 0 │
/// └───┴───┴───┴───┴───┴───┴───┘
///   alphabetic prefix   digits
/// ```
pub const COURSE_ID_LEN: usize = 7;

/// Number of leading alphabetic characters in a course identifier.
pub const COURSE_ID_ALPHA_LEN: usize = 4;

/// Separator between fields of a catalog line.
pub const FIELD_DELIMITER: char = ',';

/// Minimum number of fields on a catalog line (identifier + name).
pub const MIN_FIELDS: usize = 2;

/// Environment variable consulted by the CLI for the catalog path.
pub const CATALOG_FILE_ENV: &str = "COURSE_CATALOG_FILE";

/// What the loader does when a course identifier appears twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep the first record, silently drop later ones.
    #[default]
    Ignore,
    /// Fail the load with [`Error::DuplicateCourse`](crate::Error::DuplicateCourse).
    Reject,
}

/// Runtime options for loading a catalog.
///
/// # Example
/// ```
/// use coursecatalog::common::config::{CatalogConfig, DuplicatePolicy};
///
/// let config = CatalogConfig::default();
/// assert_eq!(config.duplicate_policy, DuplicatePolicy::Ignore);
/// assert!(config.require_integrity);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Handling of repeated course identifiers.
    pub duplicate_policy: DuplicatePolicy,

    /// Fail the load when a prerequisite names an unknown course.
    pub require_integrity: bool,
}

impl CatalogConfig {
    /// Builder-style setter for the duplicate policy.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Builder-style setter for the integrity check.
    pub fn with_integrity_check(mut self, enabled: bool) -> Self {
        self.require_integrity = enabled;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Ignore,
            require_integrity: true,
        }
    }
}
