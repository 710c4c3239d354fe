//! Index statistics tracking.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics tracked by the ordered index.
///
/// All fields are atomic so that `search(&self)` can count hits and misses
/// without interior locks, and so the index stays `Sync` behind a read lock.
///
/// # Memory Ordering
/// We use `Ordering::Relaxed` for all operations because:
/// - We only need atomicity (no partial updates)
/// - We don't need synchronization between different counters
/// - Statistics are "eventually consistent" - exact ordering doesn't matter
///
/// # Example
/// ```
/// use coursecatalog::index::IndexStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = IndexStats::new();
/// stats.search_hits.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.search_hits.load(Ordering::Relaxed), 1);
/// ```
#[derive(Debug)]
pub struct IndexStats {
    /// Number of keys added to the index.
    pub inserts: AtomicU64,

    /// Number of inserts dropped because the key already existed.
    pub duplicates_ignored: AtomicU64,

    /// Number of Left-Left / Right-Right rebalances.
    pub single_rotations: AtomicU64,

    /// Number of Left-Right / Right-Left rebalances.
    pub double_rotations: AtomicU64,

    /// Number of searches that found a record.
    pub search_hits: AtomicU64,

    /// Number of searches that found nothing.
    pub search_misses: AtomicU64,
}

impl IndexStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            inserts: AtomicU64::new(0),
            duplicates_ignored: AtomicU64::new(0),
            single_rotations: AtomicU64::new(0),
            double_rotations: AtomicU64::new(0),
            search_hits: AtomicU64::new(0),
            search_misses: AtomicU64::new(0),
        }
    }

    #[inline]
    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a snapshot of current statistics.
    ///
    /// This returns a non-atomic copy for display/logging.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            inserts: self.inserts.load(Ordering::Relaxed),
            duplicates_ignored: self.duplicates_ignored.load(Ordering::Relaxed),
            single_rotations: self.single_rotations.load(Ordering::Relaxed),
            double_rotations: self.double_rotations.load(Ordering::Relaxed),
            search_hits: self.search_hits.load(Ordering::Relaxed),
            search_misses: self.search_misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for IndexStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of index statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub inserts: u64,
    pub duplicates_ignored: u64,
    pub single_rotations: u64,
    pub double_rotations: u64,
    pub search_hits: u64,
    pub search_misses: u64,
}

impl StatsSnapshot {
    /// Fraction of searches that found a record (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.search_hits + self.search_misses;
        if total == 0 {
            0.0
        } else {
            self.search_hits as f64 / total as f64
        }
    }

    /// Total rebalancing operations.
    pub fn rotations(&self) -> u64 {
        self.single_rotations + self.double_rotations
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserts: {}, duplicates: {}, rotations: {}, hits: {}, misses: {}, hit_rate: {:.2}% }}",
            self.inserts,
            self.duplicates_ignored,
            self.rotations(),
            self.search_hits,
            self.search_misses,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = IndexStats::new();
        assert_eq!(stats.snapshot(), StatsSnapshot::default());
        assert_eq!(stats.snapshot().hit_rate(), 0.0);
    }

    #[test]
    fn test_stats_snapshot() {
        let stats = IndexStats::new();
        stats.search_hits.fetch_add(3, Ordering::Relaxed);
        stats.search_misses.fetch_add(1, Ordering::Relaxed);
        stats.single_rotations.fetch_add(2, Ordering::Relaxed);
        stats.double_rotations.fetch_add(1, Ordering::Relaxed);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.search_hits, 3);
        assert_eq!(snapshot.rotations(), 3);
        assert_eq!(snapshot.hit_rate(), 0.75);
    }

    #[test]
    fn test_stats_bump() {
        let stats = IndexStats::new();
        IndexStats::bump(&stats.inserts);
        IndexStats::bump(&stats.inserts);
        IndexStats::bump(&stats.duplicates_ignored);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.inserts, 2);
        assert_eq!(snapshot.duplicates_ignored, 1);
    }

    #[test]
    fn test_stats_display() {
        let stats = IndexStats::new();
        stats.inserts.fetch_add(10, Ordering::Relaxed);
        stats.search_hits.fetch_add(80, Ordering::Relaxed);
        stats.search_misses.fetch_add(20, Ordering::Relaxed);

        let display = format!("{}", stats.snapshot());

        assert!(display.contains("inserts: 10"));
        assert!(display.contains("hits: 80"));
        assert!(display.contains("80.00%"));
    }
}
