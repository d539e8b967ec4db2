//! An ordered, in-memory container implemented as an AVL tree: a self-balancing binary
//! search tree where the heights of the two child subtrees of any node differ by at most
//! one. All mutating operations rebalance the tree with single or double rotations on the
//! way back to the root, so lookups, inserts, and removes are `O(log n)`.
//!
//! The tree stores unique, totally ordered values and rejects duplicates. It is
//! single-threaded and holds everything in memory; callers needing shared access must
//! synchronize externally.
//!
//! # Examples
//! ```
//! use avl_tree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! tree.insert(2).unwrap();
//! tree.insert(1).unwrap();
//! tree.insert(3).unwrap();
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.min(), Ok(&1));
//! assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&1, &2, &3]);
//! ```

mod avl;
mod error;
mod node;
mod tree;

pub use self::avl::{AvlTree, AvlTreeIntoIter, AvlTreeIter};
pub use self::error::{Error, Result};
pub use self::node::Node;
