//! In-order iteration over the index.

use std::iter::FusedIterator;

use super::node::{Link, Node};
use crate::catalog::CourseRecord;

/// Lazy in-order iterator over `(key, record)` pairs.
///
/// Holds the path of not-yet-visited ancestors, so memory use is bounded by
/// the tree height. Created by [`OrderedCourseIndex::iter`](super::OrderedCourseIndex::iter).
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(super) fn new(root: &'a Link, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a CourseRecord);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some((node.key.as_str(), &node.record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
