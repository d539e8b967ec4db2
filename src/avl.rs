use crate::error::{Error, Result};
use crate::node::{Node, TreeId};
use crate::tree;

/// An ordered collection of unique values implemented using an AVL tree.
///
/// An AVL tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of the two child subtrees of any node differ by at most one. Every value is stored
/// in a node tagged with the identity of its owning tree, so node arguments to operations
/// such as [`successor`](AvlTree::successor) can be validated for membership.
///
/// # Examples
/// ```
/// use avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(0).unwrap();
/// tree.insert(3).unwrap();
///
/// assert_eq!(tree.len(), 2);
///
/// assert_eq!(tree.min(), Ok(&0));
/// assert_eq!(tree.ceil(&2), Some(&3));
///
/// assert!(tree.try_remove(&0).is_some());
/// assert!(tree.try_remove(&1).is_none());
/// ```
pub struct AvlTree<T> {
    root: tree::Tree<T>,
    len: usize,
    id: TreeId,
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlTree<T>`.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        AvlTree {
            root: None,
            len: 0,
            id: TreeId::next(),
        }
    }

    /// Constructs an `AvlTree<T>` holding a single value.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::singleton(1);
    /// assert_eq!(tree.len(), 1);
    /// assert!(tree.contains(&1));
    /// ```
    pub fn singleton(value: T) -> Self {
        let mut tree = AvlTree::new();
        let _ = tree.insert(value);
        tree
    }

    /// Constructs an `AvlTree<T>` by inserting every value yielded by `values`, failing with
    /// `Error::DuplicateKey` on the first value that is already present.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::from_sequence(vec![2, 1, 3]).unwrap();
    /// assert_eq!(tree.len(), 3);
    ///
    /// assert!(AvlTree::from_sequence(vec![1, 1]).is_err());
    /// ```
    pub fn from_sequence<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = AvlTree::new();
        for value in values {
            tree.insert(value)?;
        }
        Ok(tree)
    }

    /// Inserts a value into the tree. If the value already exists, returns
    /// `Error::DuplicateKey` and leaves the tree untouched.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::{AvlTree, Error};
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.insert(1), Ok(()));
    /// assert_eq!(tree.insert(1), Err(Error::DuplicateKey));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> Result<()> {
        let mut new_node = Node::new(value);
        new_node.owner = Some(self.id);
        if tree::insert(&mut self.root, new_node) {
            self.len += 1;
            Ok(())
        } else {
            Err(Error::DuplicateKey)
        }
    }

    /// Non-failing variant of [`insert`](AvlTree::insert). Returns `true` if the value was
    /// inserted and `false` if it was already present.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.try_insert(1));
    /// assert!(!tree.try_insert(1));
    /// ```
    pub fn try_insert(&mut self, value: T) -> bool {
        self.insert(value).is_ok()
    }

    /// Inserts an externally constructed node at the slot determined by its value alone. Any
    /// prior children, height, or tree membership of the node are discarded; re-parenting a
    /// node removed from another tree is explicitly allowed.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::{AvlTree, Node};
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert_node(Node::new(1)).unwrap();
    /// assert!(tree.contains(&1));
    /// ```
    pub fn insert_node(&mut self, mut node: Node<T>) -> Result<()> {
        node.left = None;
        node.right = None;
        node.height = 1;
        node.owner = Some(self.id);
        if tree::insert(&mut self.root, node) {
            self.len += 1;
            Ok(())
        } else {
            Err(Error::DuplicateKey)
        }
    }

    /// Removes the node holding `value` and returns it detached, with its children and
    /// owner tag cleared. Removing a value that is not present is a no-op yielding
    /// `Ok(None)`, but calling `remove` on an empty tree fails with `Error::EmptyTree`.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::{AvlTree, Error};
    ///
    /// let mut tree = AvlTree::from_sequence(vec![1, 2]).unwrap();
    /// let removed = tree.remove(&1).unwrap();
    /// assert_eq!(removed.map(|node| node.into_value()), Some(1));
    /// assert!(tree.remove(&1).unwrap().is_none());
    ///
    /// tree.clear();
    /// assert_eq!(tree.remove(&1).err(), Some(Error::EmptyTree));
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<Option<Node<T>>> {
        if self.root.is_none() {
            return Err(Error::EmptyTree);
        }
        match tree::remove(&mut self.root, value) {
            Some(node) => {
                self.len -= 1;
                Ok(Some(node))
            },
            None => Ok(None),
        }
    }

    /// Non-failing variant of [`remove`](AvlTree::remove). Returns `None` both when the tree
    /// is empty and when the value is not present.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert!(tree.try_remove(&1).is_none());
    /// tree.insert(1).unwrap();
    /// assert!(tree.try_remove(&1).is_some());
    /// ```
    pub fn try_remove(&mut self, value: &T) -> Option<Node<T>> {
        tree::remove(&mut self.root, value).map(|node| {
            self.len -= 1;
            node
        })
    }

    /// Removes the node whose value equals `node`'s value. The node argument is used only as
    /// a carrier for the value and does not need to belong to this tree.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::{AvlTree, Node};
    ///
    /// let mut tree = AvlTree::from_sequence(vec![1, 2]).unwrap();
    /// let probe = Node::new(2);
    /// assert!(tree.remove_node(&probe).unwrap().is_some());
    /// assert!(!tree.contains(&2));
    /// ```
    pub fn remove_node(&mut self, node: &Node<T>) -> Result<Option<Node<T>>> {
        self.remove(node.value())
    }

    /// Searches for `value` and returns its node. Fails with `Error::EmptyTree` when the
    /// tree has no nodes at all; a missing value in a non-empty tree yields `Ok(None)`.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::{AvlTree, Error};
    ///
    /// let tree = AvlTree::from_sequence(vec![1, 3]).unwrap();
    /// assert_eq!(tree.find(&3).unwrap().map(|node| node.value()), Some(&3));
    /// assert!(tree.find(&2).unwrap().is_none());
    ///
    /// let empty: AvlTree<u32> = AvlTree::new();
    /// assert_eq!(empty.find(&1).err(), Some(Error::EmptyTree));
    /// ```
    pub fn find(&self, value: &T) -> Result<Option<&Node<T>>> {
        if self.root.is_none() {
            return Err(Error::EmptyTree);
        }
        Ok(tree::get(&self.root, value))
    }

    /// Non-failing variant of [`find`](AvlTree::find).
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::singleton(1);
    /// assert!(tree.get(&1).is_some());
    /// assert!(tree.get(&2).is_none());
    /// ```
    pub fn get(&self, value: &T) -> Option<&Node<T>> {
        tree::get(&self.root, value)
    }

    /// Checks if a value exists in the tree.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1).unwrap();
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns the minimum value of the tree, or `Error::EmptyTree` if there is none.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::{AvlTree, Error};
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.min(), Err(Error::EmptyTree));
    /// tree.insert(3).unwrap();
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T> {
        tree::min(&self.root)
            .map(|node| node.value())
            .ok_or(Error::EmptyTree)
    }

    /// Returns the maximum value of the tree, or `Error::EmptyTree` if there is none.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::from_sequence(vec![1, 3]).unwrap();
    /// assert_eq!(tree.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&T> {
        tree::max(&self.root)
            .map(|node| node.value())
            .ok_or(Error::EmptyTree)
    }

    /// Returns the greatest value less than or equal to `value`, if any.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::singleton(1);
    /// assert_eq!(tree.floor(&0), None);
    /// assert_eq!(tree.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, value: &T) -> Option<&T> {
        tree::floor(&self.root, value).map(|node| node.value())
    }

    /// Returns the least value greater than or equal to `value`, if any.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::singleton(1);
    /// assert_eq!(tree.ceil(&0), Some(&1));
    /// assert_eq!(tree.ceil(&2), None);
    /// ```
    pub fn ceil(&self, value: &T) -> Option<&T> {
        tree::ceil(&self.root, value).map(|node| node.value())
    }

    /// Returns the in-order successor of `node`, or `Ok(None)` if `node` holds the maximum
    /// value. Fails with `Error::EmptyTree` on an empty tree and `Error::WrongTree` when the
    /// node does not belong to this tree.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::from_sequence(vec![2, 1, 3]).unwrap();
    /// let node = tree.get(&1).unwrap();
    /// let next = tree.successor(node).unwrap();
    /// assert_eq!(next.map(|node| node.value()), Some(&2));
    /// ```
    pub fn successor<'a>(&'a self, node: &'a Node<T>) -> Result<Option<&'a Node<T>>> {
        self.check_membership(node)?;
        Ok(tree::successor(&self.root, node))
    }

    /// Returns the in-order predecessor of `node`, or `Ok(None)` if `node` holds the minimum
    /// value. Fails with `Error::EmptyTree` on an empty tree and `Error::WrongTree` when the
    /// node does not belong to this tree.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::from_sequence(vec![2, 1, 3]).unwrap();
    /// let node = tree.get(&1).unwrap();
    /// assert!(tree.predecessor(node).unwrap().is_none());
    /// ```
    pub fn predecessor<'a>(&'a self, node: &'a Node<T>) -> Result<Option<&'a Node<T>>> {
        self.check_membership(node)?;
        Ok(tree::predecessor(&self.root, node))
    }

    /// Returns the number of edges on the search path from `source` down to `target`, or
    /// `Ok(None)` when `target` is not in the subtree rooted at `source`. Fails with
    /// `Error::WrongTree` when either node does not belong to this tree.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::from_sequence(vec![2, 1, 3]).unwrap();
    /// let root = tree.root().unwrap();
    /// let leaf = tree.get(&3).unwrap();
    /// assert_eq!(tree.depth(root, leaf), Ok(Some(1)));
    /// assert_eq!(tree.depth(leaf, root), Ok(None));
    /// ```
    pub fn depth(&self, source: &Node<T>, target: &Node<T>) -> Result<Option<usize>> {
        self.check_membership(source)?;
        self.check_membership(target)?;
        Ok(tree::depth(source, target.value()))
    }

    /// Checks whether `node` belongs to this tree, comparing the node's owner tag against
    /// the tree's identity.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::from_sequence(vec![1, 2]).unwrap();
    /// {
    ///     let node = tree.get(&2).unwrap();
    ///     assert!(tree.owns(node));
    /// }
    /// let removed = tree.remove(&2).unwrap().unwrap();
    /// assert!(!tree.owns(&removed));
    /// ```
    pub fn owns(&self, node: &Node<T>) -> bool {
        node.owner == Some(self.id)
    }

    fn check_membership(&self, node: &Node<T>) -> Result<()> {
        if self.root.is_none() {
            return Err(Error::EmptyTree);
        }
        if !self.owns(node) {
            return Err(Error::WrongTree);
        }
        Ok(())
    }

    /// Returns the root node of the tree, if any.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::from_sequence(vec![1, 2, 3]).unwrap();
    /// assert_eq!(tree.root().map(|node| node.value()), Some(&2));
    /// ```
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns the number of values in the tree.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the height of the tree: 0 when empty, 1 for a single node.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.height(), 0);
    /// tree.insert(1).unwrap();
    /// tree.insert(2).unwrap();
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Returns the balance factor of the root: the height of the left subtree minus the
    /// height of the right subtree, 0 when the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.balance_factor(), 0);
    /// tree.insert(1).unwrap();
    /// tree.insert(2).unwrap();
    /// assert_eq!(tree.balance_factor(), -1);
    /// ```
    pub fn balance_factor(&self) -> i32 {
        self.root.as_ref().map_or(0, |node| node.balance_factor())
    }

    /// Checks that the balance factor of every node in the tree lies in `[-1, 1]`. This is
    /// the full AVL invariant, not just a check of the root, and always holds after any
    /// sequence of inserts and removes.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::from_sequence(vec![1, 2, 3, 4, 5]).unwrap();
    /// assert!(tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        tree::is_balanced(&self.root)
    }

    /// Clears the tree, removing all values.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1).unwrap();
    /// tree.insert(2).unwrap();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Applies `visit` to every value in ascending order.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::from_sequence(vec![2, 1, 3]).unwrap();
    /// let mut values = Vec::new();
    /// tree.in_order(|value| values.push(*value));
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    pub fn in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        tree::in_order(&self.root, &mut visit);
    }

    /// Applies `visit` to every value in pre-order: each node before its subtrees.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::from_sequence(vec![2, 1, 3]).unwrap();
    /// let mut values = Vec::new();
    /// tree.pre_order(|value| values.push(*value));
    /// assert_eq!(values, vec![2, 1, 3]);
    /// ```
    pub fn pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        tree::pre_order(&self.root, &mut visit);
    }

    /// Applies `visit` to every value in post-order: each node after its subtrees.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::from_sequence(vec![2, 1, 3]).unwrap();
    /// let mut values = Vec::new();
    /// tree.post_order(|value| values.push(*value));
    /// assert_eq!(values, vec![1, 3, 2]);
    /// ```
    pub fn post_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        tree::post_order(&self.root, &mut visit);
    }

    /// Returns an iterator over the tree yielding values in ascending order. Each iterator
    /// holds its own traversal stack, so any number of iterators over the same tree can run
    /// simultaneously, and [`reset`](AvlTreeIter::reset) restarts one from the root.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::from_sequence(vec![1, 3]).unwrap();
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlTreeIter<T> {
        AvlTreeIter {
            root: &self.root,
            current: &self.root,
            stack: Vec::new(),
        }
    }
}

impl<T> IntoIterator for AvlTree<T>
where
    T: Ord,
{
    type IntoIter = AvlTreeIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.root,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T>
where
    T: 'a + Ord,
{
    type IntoIter = AvlTreeIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlTree<T>`.
///
/// This iterator traverses the tree in-order and yields owned values.
pub struct AvlTreeIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for AvlTreeIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { value, right, .. } = node;
            self.current = right;
            value
        })
    }
}

/// A borrowing iterator for `AvlTree<T>`.
///
/// This iterator traverses the tree in-order with an explicit stack of node references and
/// yields immutable references to the values.
pub struct AvlTreeIter<'a, T> {
    root: &'a tree::Tree<T>,
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> AvlTreeIter<'a, T> {
    /// Restarts the iteration from the root of the tree.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::from_sequence(vec![2, 1, 3]).unwrap();
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    ///
    /// iterator.reset();
    /// assert_eq!(iterator.next(), Some(&1));
    /// ```
    pub fn reset(&mut self) {
        self.current = self.root;
        self.stack.clear();
    }
}

impl<'a, T> Iterator for AvlTreeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.value
        })
    }
}

impl<T> Default for AvlTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
