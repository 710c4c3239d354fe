//! Thread-safe handle to an index.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::catalog::CourseRecord;
use crate::common::MissingPrerequisite;
use crate::index::OrderedCourseIndex;

/// Cloneable, lock-guarded handle to one [`OrderedCourseIndex`].
///
/// # Thread Safety
/// - `insert`: write lock. A rotation touches several nodes, so no reader
///   may observe the tree mid-insert.
/// - `search`, `snapshot`, `validate`: read lock, many readers at once.
///
/// Records are cloned out so no lock guard escapes.
///
/// # Example
/// ```
/// use coursecatalog::{CourseRecord, SharedCatalog};
///
/// let catalog = SharedCatalog::default();
/// let writer = catalog.clone();
/// std::thread::spawn(move || {
///     writer.insert("CSCI100", CourseRecord::new("CSCI100", "Intro", vec![]));
/// })
/// .join()
/// .unwrap();
///
/// assert!(catalog.search("csci100").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    index: Arc<RwLock<OrderedCourseIndex>>,
}

impl SharedCatalog {
    /// Wrap an existing index.
    pub fn new(index: OrderedCourseIndex) -> Self {
        Self {
            index: Arc::new(RwLock::new(index)),
        }
    }

    /// Insert under the write lock. Returns `false` for a duplicate key.
    pub fn insert(&self, key: &str, record: CourseRecord) -> bool {
        self.index.write().insert(key, record)
    }

    /// Case-insensitive lookup; returns a copy of the record.
    pub fn search(&self, key: &str) -> Option<CourseRecord> {
        self.index.read().search(key).cloned()
    }

    /// All records in ascending key order, as of one consistent moment.
    pub fn snapshot(&self) -> Vec<CourseRecord> {
        self.index
            .read()
            .iter()
            .map(|(_, record)| record.clone())
            .collect()
    }

    /// See [`OrderedCourseIndex::validate_referential_integrity`].
    pub fn validate(&self) -> bool {
        self.index.read().validate_referential_integrity()
    }

    /// See [`OrderedCourseIndex::missing_prerequisites`].
    pub fn missing_prerequisites(&self) -> Vec<MissingPrerequisite> {
        self.index.read().missing_prerequisites()
    }

    /// Number of courses stored.
    pub fn len(&self) -> usize {
        self.index.read().len()
    }

    /// True if no course is stored.
    pub fn is_empty(&self) -> bool {
        self.index.read().is_empty()
    }
}

impl From<OrderedCourseIndex> for SharedCatalog {
    fn from(index: OrderedCourseIndex) -> Self {
        Self::new(index)
    }
}
