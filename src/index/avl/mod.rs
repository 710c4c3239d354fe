//! AVL-balanced ordered index of course records.
//!
//! # Structure
//! ```text
//!                 ┌─────────┐
//!                 │ CSCI200 │ h=3
//!                 └────┬────┘
//!            ┌─────────┴─────────┐
//!       ┌────┴────┐         ┌────┴────┐
//!       │ CSCI100 │ h=1     │ CSCI300 │ h=2
//!       └─────────┘         └────┬────┘
//!                                └────────┐
//!                                    ┌────┴────┐
//!                                    │ MATH201 │ h=1
//!                                    └─────────┘
//! ```
//!
//! For every node the heights of its two subtrees differ by at most one, so
//! lookups visit at most ~1.44·log₂(n+2) nodes.
//!
//! # Case handling
//! Keys are normalized with [`normalize_key`] before every comparison, on
//! insert and on lookup. `csci100` and `CSCI100` are the same course; the
//! record keeps whichever spelling was inserted first.

mod iter;
mod node;

pub use iter::Iter;
pub use node::Rotation;

use tracing::debug;

use crate::catalog::CourseRecord;
use crate::common::{normalize_key, MissingPrerequisite};
use crate::index::{IndexStats, StatsSnapshot};
use node::{height, InsertOutcome, Link, Node};

/// Height-balanced binary search tree mapping course identifiers to records.
///
/// # Thread Safety
/// Mutation needs `&mut self`. Wrap the index in a lock to share it between
/// threads (see [`SharedCatalog`](crate::catalog::SharedCatalog)); readers
/// may run together, never alongside an insert.
///
/// # Example
/// ```
/// use coursecatalog::{CourseRecord, OrderedCourseIndex};
///
/// let mut index = OrderedCourseIndex::new();
/// index.insert("CSCI200", CourseRecord::new("CSCI200", "Data Structures", vec!["CSCI100".into()]));
/// index.insert("CSCI100", CourseRecord::new("CSCI100", "Intro", vec![]));
///
/// assert_eq!(index.search("csci200").unwrap().display_name(), "Data Structures");
/// assert!(index.validate_referential_integrity());
///
/// let keys: Vec<&str> = index.iter().map(|(key, _)| key).collect();
/// assert_eq!(keys, ["CSCI100", "CSCI200"]);
/// ```
#[derive(Debug, Default)]
pub struct OrderedCourseIndex {
    root: Link,
    len: usize,
    stats: IndexStats,
}

impl OrderedCourseIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Insert a record under `key`.
    ///
    /// Returns `true` if a new entry was created. If the key is already
    /// present the existing record is kept and `record` is discarded; this
    /// is not an error.
    pub fn insert(&mut self, key: &str, record: CourseRecord) -> bool {
        let key = normalize_key(key);
        let mut outcome = InsertOutcome::default();

        self.root = Some(node::insert(self.root.take(), &key, record, &mut outcome));

        if let Some(rotation) = outcome.rotation {
            if rotation.is_double() {
                IndexStats::bump(&self.stats.double_rotations);
            } else {
                IndexStats::bump(&self.stats.single_rotations);
            }
        }

        if outcome.inserted {
            self.len += 1;
            IndexStats::bump(&self.stats.inserts);
            debug!(key = %key, height = self.height(), "inserted course");
        } else {
            IndexStats::bump(&self.stats.duplicates_ignored);
            debug!(key = %key, "duplicate course ignored");
        }

        outcome.inserted
    }

    /// Release every node.
    ///
    /// Children are detached before their parent is dropped, so each node
    /// is freed exactly once regardless of tree shape.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Look up a course, ignoring ASCII case.
    ///
    /// A missing key is an ordinary `None`, not an error.
    pub fn search(&self, key: &str) -> Option<&CourseRecord> {
        let found = self.find(&normalize_key(key));
        if found.is_some() {
            IndexStats::bump(&self.stats.search_hits);
        } else {
            IndexStats::bump(&self.stats.search_misses);
        }
        found
    }

    /// True if `key` (in any case) is present.
    pub fn contains(&self, key: &str) -> bool {
        self.find(&normalize_key(key)).is_some()
    }

    fn find(&self, needle: &str) -> Option<&CourseRecord> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match needle.cmp(node.key.as_str()) {
                std::cmp::Ordering::Less => current = node.left.as_deref(),
                std::cmp::Ordering::Greater => current = node.right.as_deref(),
                std::cmp::Ordering::Equal => return Some(&node.record),
            }
        }
        None
    }

    /// Iterate over all entries in ascending key order.
    ///
    /// Each call starts a fresh traversal; the index is not consumed.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root, self.len)
    }

    /// Alias of [`iter`](Self::iter).
    #[inline]
    pub fn list_ordered(&self) -> Iter<'_> {
        self.iter()
    }

    /// Number of courses stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no course is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree; 0 when empty.
    #[inline]
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// Key at the root, if any.
    pub fn root_key(&self) -> Option<&str> {
        self.root.as_deref().map(|node| node.key.as_str())
    }

    /// Get a snapshot of index statistics.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// True iff every prerequisite of every course is itself in the index.
    ///
    /// Stops at the first missing prerequisite. Use
    /// [`missing_prerequisites`](Self::missing_prerequisites) to list them.
    pub fn validate_referential_integrity(&self) -> bool {
        self.iter().all(|(_, record)| {
            record
                .prerequisites()
                .iter()
                .all(|prerequisite| self.contains(prerequisite))
        })
    }

    /// Every dangling prerequisite, in ascending course order.
    pub fn missing_prerequisites(&self) -> Vec<MissingPrerequisite> {
        let mut missing = Vec::new();
        for (_, record) in self.iter() {
            for prerequisite in record.prerequisites() {
                if !self.contains(prerequisite) {
                    missing.push(MissingPrerequisite {
                        course: record.identifier().to_string(),
                        prerequisite: prerequisite.clone(),
                    });
                }
            }
        }
        missing
    }

    /// Verify the structural invariants of the tree.
    ///
    /// Checks strict key order, cached heights, the AVL balance bound and the
    /// entry count. Intended for tests and debugging.
    pub fn check_invariants(&self) -> Result<(), String> {
        let count = check_subtree(&self.root, None, None)?.1;
        if count != self.len {
            return Err(format!("len is {} but tree holds {} nodes", self.len, count));
        }
        Ok(())
    }
}

/// Returns `(height, node_count)` of a valid subtree.
fn check_subtree(
    link: &Link,
    lower: Option<&str>,
    upper: Option<&str>,
) -> Result<(u32, usize), String> {
    let Some(node) = link.as_deref() else {
        return Ok((0, 0));
    };

    let key = node.key.as_str();
    if lower.is_some_and(|bound| key <= bound) || upper.is_some_and(|bound| key >= bound) {
        return Err(format!("key {} is out of order", key));
    }

    let (left_height, left_count) = check_subtree(&node.left, lower, Some(key))?;
    let (right_height, right_count) = check_subtree(&node.right, Some(key), upper)?;

    let expected = 1 + left_height.max(right_height);
    if node.height != expected {
        return Err(format!(
            "node {} caches height {} but has height {}",
            key, node.height, expected
        ));
    }
    if node.balance_factor().abs() > 1 {
        return Err(format!(
            "node {} is unbalanced (factor {})",
            key,
            node.balance_factor()
        ));
    }

    Ok((expected, left_count + right_count + 1))
}

impl<'a> IntoIterator for &'a OrderedCourseIndex {
    type Item = (&'a str, &'a CourseRecord);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<CourseRecord> for OrderedCourseIndex {
    fn extend<T: IntoIterator<Item = CourseRecord>>(&mut self, records: T) {
        for record in records {
            let key = record.identifier().to_string();
            self.insert(&key, record);
        }
    }
}

impl FromIterator<CourseRecord> for OrderedCourseIndex {
    fn from_iter<T: IntoIterator<Item = CourseRecord>>(records: T) -> Self {
        let mut index = Self::new();
        index.extend(records);
        index
    }
}
