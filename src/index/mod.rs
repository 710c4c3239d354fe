//! Index structures.
//!
//! # Components
//! - [`OrderedCourseIndex`] - AVL-balanced ordered map of course records
//! - [`Iter`] - Lazy in-order traversal
//! - [`IndexStats`] - Insert, rotation and lookup counters

pub mod avl;
mod stats;

pub use avl::{Iter, OrderedCourseIndex, Rotation};
pub use stats::{IndexStats, StatsSnapshot};
