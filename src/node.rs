use crate::tree;
use std::cmp;
use std::sync::atomic::{AtomicU64, Ordering};

/// An opaque identifier for a tree instance.
///
/// Nodes carry the id of the tree they were inserted into so that node arguments can be
/// validated for membership without the node holding a reference back to the tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TreeId(u64);

impl TreeId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        TreeId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A node of an AVL tree.
///
/// A node owns its children exclusively. Its `height` is the cached height of the subtree
/// rooted at it (a leaf has height 1, an absent child height 0) and is recomputed by every
/// mutating helper before the node is handed back to its caller.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) height: usize,
    pub(crate) left: tree::Tree<T>,
    pub(crate) right: tree::Tree<T>,
    pub(crate) owner: Option<TreeId>,
}

impl<T> Node<T> {
    /// Constructs a detached leaf node holding `value`.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::Node;
    ///
    /// let node = Node::new(1);
    /// assert_eq!(node.value(), &1);
    /// assert_eq!(node.height(), 1);
    /// ```
    pub fn new(value: T) -> Self {
        Node {
            value,
            height: 1,
            left: None,
            right: None,
            owner: None,
        }
    }

    /// Returns a reference to the value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the node and returns its value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the cached height of the subtree rooted at this node.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the height of the left subtree minus the height of the right subtree.
    pub fn balance_factor(&self) -> i32 {
        (tree::height(&self.left) as i32) - (tree::height(&self.right) as i32)
    }

    /// Returns a reference to the left child, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Returns a reference to the right child, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub(crate) fn update(&mut self) {
        let Node {
            ref mut height,
            ref left,
            ref right,
            ..
        } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }
}
