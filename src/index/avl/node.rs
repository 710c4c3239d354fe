//! Tree nodes, rotations and recursive insertion.
//!
//! Every node exclusively owns its children through [`Link`]. Insertion
//! takes a subtree by value and hands back its (possibly new) root, so the
//! parent simply stores whatever comes back:
//!
//! ```text
//!   node.left = Some(insert(node.left.take(), key, record, outcome));
//! ```
//!
//! Rotations move boxes between slots; no node is ever copied or shared.

use std::cmp::Ordering;

use tracing::trace;

use crate::catalog::CourseRecord;

/// An owned, optional child subtree.
pub(crate) type Link = Option<Box<Node>>;

/// A single entry of the index.
///
/// `key` and `record` never change after creation. `height` is maintained by
/// the tree and counts nodes on the longest downward path (a leaf is 1).
#[derive(Debug)]
pub(crate) struct Node {
    pub(super) key: String,
    pub(super) record: CourseRecord,
    pub(super) height: u32,
    pub(super) left: Link,
    pub(super) right: Link,
}

/// Rebalancing case applied at a node during insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Single right rotation.
    LeftLeft,
    /// Single left rotation.
    RightRight,
    /// Left rotation of the left child, then right rotation.
    LeftRight,
    /// Right rotation of the right child, then left rotation.
    RightLeft,
}

impl Rotation {
    /// True for the two-step cases.
    pub fn is_double(self) -> bool {
        matches!(self, Rotation::LeftRight | Rotation::RightLeft)
    }
}

/// What happened during one call to [`insert`].
#[derive(Debug, Default)]
pub(crate) struct InsertOutcome {
    /// A new node was created.
    pub inserted: bool,
    /// The rebalancing case applied, if any. An AVL insert needs at most one.
    pub rotation: Option<Rotation>,
}

/// Height of a possibly-absent subtree.
#[inline]
pub(crate) fn height(link: &Link) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

impl Node {
    fn leaf(key: &str, record: CourseRecord) -> Box<Self> {
        Box::new(Node {
            key: key.to_string(),
            record,
            height: 1,
            left: None,
            right: None,
        })
    }

    #[inline]
    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(left) - height(right)`.
    #[inline]
    pub(super) fn balance_factor(&self) -> i64 {
        i64::from(height(&self.left)) - i64::from(height(&self.right))
    }
}

/// Rotate the subtree right, promoting the left child.
///
/// ```text
///        y               x
///       / \             / \
///      x   C    ==>    A   y
///     / \                 / \
///    A   B               B   C
/// ```
///
/// Only `y` and `x` change height; `y` is recomputed first since it is now
/// below `x`. A subtree without a left child is returned unchanged.
fn rotate_right(mut old_root: Box<Node>) -> Box<Node> {
    let Some(mut new_root) = old_root.left.take() else {
        return old_root;
    };

    old_root.left = new_root.right.take();
    old_root.update_height();

    new_root.right = Some(old_root);
    new_root.update_height();
    new_root
}

/// Mirror image of [`rotate_right`].
fn rotate_left(mut old_root: Box<Node>) -> Box<Node> {
    let Some(mut new_root) = old_root.right.take() else {
        return old_root;
    };

    old_root.right = new_root.left.take();
    old_root.update_height();

    new_root.left = Some(old_root);
    new_root.update_height();
    new_root
}

/// Insert `key` into the subtree and return the subtree's new root.
///
/// `key` must already be normalized. An equal key leaves the subtree
/// untouched and drops `record`.
pub(crate) fn insert(
    link: Link,
    key: &str,
    record: CourseRecord,
    outcome: &mut InsertOutcome,
) -> Box<Node> {
    let mut node = match link {
        None => {
            outcome.inserted = true;
            return Node::leaf(key, record);
        }
        Some(node) => node,
    };

    match key.cmp(node.key.as_str()) {
        Ordering::Less => node.left = Some(insert(node.left.take(), key, record, outcome)),
        Ordering::Greater => node.right = Some(insert(node.right.take(), key, record, outcome)),
        Ordering::Equal => return node,
    }

    node.update_height();
    rebalance(node, key, outcome)
}

/// Restore the balance invariant at `node` after inserting `key` below it.
///
/// The case is picked by comparing the inserted key with the heavy child's
/// key, the same comparison the descent used.
fn rebalance(mut node: Box<Node>, key: &str, outcome: &mut InsertOutcome) -> Box<Node> {
    let balance = node.balance_factor();

    let rotation = if balance > 1 {
        match node.left.as_ref().map(|child| key.cmp(child.key.as_str())) {
            Some(Ordering::Less) => Rotation::LeftLeft,
            Some(Ordering::Greater) => Rotation::LeftRight,
            _ => return node,
        }
    } else if balance < -1 {
        match node.right.as_ref().map(|child| key.cmp(child.key.as_str())) {
            Some(Ordering::Greater) => Rotation::RightRight,
            Some(Ordering::Less) => Rotation::RightLeft,
            _ => return node,
        }
    } else {
        return node;
    };

    trace!(pivot = %node.key, inserted = %key, ?rotation, "rebalancing");
    outcome.rotation = Some(rotation);

    match rotation {
        Rotation::LeftLeft => rotate_right(node),
        Rotation::RightRight => rotate_left(node),
        Rotation::LeftRight => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
        Rotation::RightLeft => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> CourseRecord {
        CourseRecord::new(id, format!("Course {}", id), vec![])
    }

    fn build(keys: &[&str]) -> (Link, Vec<Option<Rotation>>) {
        let mut root: Link = None;
        let mut rotations = Vec::new();
        for key in keys {
            let mut outcome = InsertOutcome::default();
            root = Some(insert(root.take(), key, record(key), &mut outcome));
            assert!(outcome.inserted);
            rotations.push(outcome.rotation);
        }
        (root, rotations)
    }

    fn shape(link: &Link) -> String {
        match link {
            None => ".".to_string(),
            Some(n) if n.left.is_none() && n.right.is_none() => n.key.clone(),
            Some(n) => format!("({} {} {})", shape(&n.left), n.key, shape(&n.right)),
        }
    }

    #[test]
    fn test_leaf_height() {
        let (root, _) = build(&["M"]);
        assert_eq!(height(&root), 1);
        assert_eq!(height(&None), 0);
    }

    #[test]
    fn test_left_left_case() {
        let (root, rotations) = build(&["C", "B", "A"]);
        assert_eq!(shape(&root), "(A B C)");
        assert_eq!(height(&root), 2);
        assert_eq!(rotations[2], Some(Rotation::LeftLeft));
    }

    #[test]
    fn test_right_right_case() {
        let (root, rotations) = build(&["A", "B", "C"]);
        assert_eq!(shape(&root), "(A B C)");
        assert_eq!(rotations[2], Some(Rotation::RightRight));
    }

    #[test]
    fn test_left_right_case() {
        let (root, rotations) = build(&["C", "A", "B"]);
        assert_eq!(shape(&root), "(A B C)");
        assert_eq!(rotations[2], Some(Rotation::LeftRight));
        assert!(Rotation::LeftRight.is_double());
    }

    #[test]
    fn test_right_left_case() {
        let (root, rotations) = build(&["A", "C", "B"]);
        assert_eq!(shape(&root), "(A B C)");
        assert_eq!(rotations[2], Some(Rotation::RightLeft));
    }

    #[test]
    fn test_rotation_moves_inner_subtree() {
        // Inserting A under a left-heavy 5-node tree rotates at the root and
        // hands D over to the old root's left slot.
        let (root, rotations) = build(&["E", "C", "F", "B", "D", "A"]);
        assert_eq!(rotations[5], Some(Rotation::LeftLeft));
        assert_eq!(shape(&root), "((A B .) C (D E F))");
        assert_eq!(height(&root), 3);
    }

    #[test]
    fn test_duplicate_keeps_original() {
        let (root, _) = build(&["B", "A"]);
        let mut outcome = InsertOutcome::default();
        let root = insert(root, "A", CourseRecord::new("A", "Replacement", vec![]), &mut outcome);

        assert!(!outcome.inserted);
        assert!(outcome.rotation.is_none());
        let left = root.left.as_ref().unwrap();
        assert_eq!(left.record.display_name(), "Course A");
    }

    #[test]
    fn test_balance_factor() {
        let (root, _) = build(&["B", "A"]);
        assert_eq!(root.unwrap().balance_factor(), 1);
    }

    #[test]
    fn test_rotate_without_child_is_noop() {
        let leaf = Node::leaf("A", record("A"));
        let same = rotate_right(leaf);
        assert_eq!(same.key, "A");
        let same = rotate_left(same);
        assert_eq!(same.height, 1);
    }
}
