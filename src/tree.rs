use crate::node::Node;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Recomputes the height of the subtree root and restores the AVL invariant at this level
// with a single or double rotation. Both insert and remove call this on every node of the
// search path as the recursion unwinds.
fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance_factor() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance_factor() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance_factor() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance_factor() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

pub fn insert<T>(tree: &mut Tree<T>, new_node: Node<T>) -> bool
where
    T: Ord,
{
    let inserted = match tree {
        Some(ref mut node) => match new_node.value.cmp(&node.value) {
            Ordering::Less => insert(&mut node.left, new_node),
            Ordering::Greater => insert(&mut node.right, new_node),
            Ordering::Equal => false,
        },
        None => {
            *tree = Some(Box::new(new_node));
            return true;
        },
    };

    if inserted {
        balance(tree);
    }
    inserted
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    let has_left = match tree {
        Some(ref node) => node.left.is_some(),
        None => unreachable!(),
    };

    if has_left {
        let min = match tree {
            Some(ref mut node) => remove_min(&mut node.left),
            None => unreachable!(),
        };
        balance(tree);
        min
    } else {
        match tree.take() {
            Some(mut node) => {
                *tree = node.right.take();
                node
            },
            None => unreachable!(),
        }
    }
}

fn combine_subtrees<T>(left_tree: Tree<T>, mut right_tree: Tree<T>) -> Tree<T> {
    let mut new_root = remove_min(&mut right_tree);
    new_root.left = left_tree;
    new_root.right = right_tree;
    Some(new_root)
}

pub fn remove<T>(tree: &mut Tree<T>, value: &T) -> Option<Node<T>>
where
    T: Ord,
{
    let removed = match tree.take() {
        Some(mut node) => match value.cmp(&node.value) {
            Ordering::Less => {
                let removed = remove(&mut node.left, value);
                *tree = Some(node);
                removed
            },
            Ordering::Greater => {
                let removed = remove(&mut node.right, value);
                *tree = Some(node);
                removed
            },
            Ordering::Equal => {
                let mut removed = *node;
                let left = removed.left.take();
                let right = removed.right.take();
                match (left, right) {
                    (None, right) => *tree = right,
                    (left, None) => *tree = left,
                    (left, right) => *tree = combine_subtrees(left, right),
                }
                removed.owner = None;
                removed.height = 1;
                Some(removed)
            },
        },
        None => return None,
    };

    if removed.is_some() {
        balance(tree);
    }
    removed
}

pub fn get<'a, T>(tree: &'a Tree<T>, value: &T) -> Option<&'a Node<T>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match value.cmp(&node.value) {
            Ordering::Less => get(&node.left, value),
            Ordering::Greater => get(&node.right, value),
            Ordering::Equal => Some(&**node),
        }
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&Node<T>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &**curr
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&Node<T>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &**curr
    })
}

pub fn ceil<'a, T>(tree: &'a Tree<T>, value: &T) -> Option<&'a Node<T>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match value.cmp(&node.value) {
            Ordering::Greater => ceil(&node.right, value),
            Ordering::Less => {
                match ceil(&node.left, value) {
                    None => Some(&**node),
                    res => res,
                }
            },
            Ordering::Equal => Some(&**node),
        }
    })
}

pub fn floor<'a, T>(tree: &'a Tree<T>, value: &T) -> Option<&'a Node<T>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match value.cmp(&node.value) {
            Ordering::Less => floor(&node.left, value),
            Ordering::Greater => {
                match floor(&node.right, value) {
                    None => Some(&**node),
                    res => res,
                }
            },
            Ordering::Equal => Some(&**node),
        }
    })
}

// In-order successor of `node`: the leftmost node of the right subtree when one exists,
// otherwise the last node on the root-to-node search path whose value is greater.
pub fn successor<'a, T>(root: &'a Tree<T>, node: &'a Node<T>) -> Option<&'a Node<T>>
where
    T: Ord,
{
    if node.right.is_some() {
        return min(&node.right);
    }

    let mut candidate = None;
    let mut curr = root.as_ref();
    while let Some(curr_node) = curr {
        match node.value.cmp(&curr_node.value) {
            Ordering::Less => {
                candidate = Some(&**curr_node);
                curr = curr_node.left.as_ref();
            },
            Ordering::Greater => curr = curr_node.right.as_ref(),
            Ordering::Equal => break,
        }
    }
    candidate
}

pub fn predecessor<'a, T>(root: &'a Tree<T>, node: &'a Node<T>) -> Option<&'a Node<T>>
where
    T: Ord,
{
    if node.left.is_some() {
        return max(&node.left);
    }

    let mut candidate = None;
    let mut curr = root.as_ref();
    while let Some(curr_node) = curr {
        match node.value.cmp(&curr_node.value) {
            Ordering::Greater => {
                candidate = Some(&**curr_node);
                curr = curr_node.right.as_ref();
            },
            Ordering::Less => curr = curr_node.left.as_ref(),
            Ordering::Equal => break,
        }
    }
    candidate
}

// Number of edges on the search path from `source` down to `target`, or `None` if `target`
// is not in the subtree rooted at `source`.
pub fn depth<T>(source: &Node<T>, target: &T) -> Option<usize>
where
    T: Ord,
{
    let mut curr = source;
    let mut edges = 0;
    loop {
        match target.cmp(&curr.value) {
            Ordering::Equal => return Some(edges),
            Ordering::Less => curr = curr.left.as_deref()?,
            Ordering::Greater => curr = curr.right.as_deref()?,
        }
        edges += 1;
    }
}

pub fn in_order<T, F>(tree: &Tree<T>, visit: &mut F)
where
    F: FnMut(&T),
{
    if let Some(ref node) = tree {
        in_order(&node.left, visit);
        visit(&node.value);
        in_order(&node.right, visit);
    }
}

pub fn pre_order<T, F>(tree: &Tree<T>, visit: &mut F)
where
    F: FnMut(&T),
{
    if let Some(ref node) = tree {
        visit(&node.value);
        pre_order(&node.left, visit);
        pre_order(&node.right, visit);
    }
}

pub fn post_order<T, F>(tree: &Tree<T>, visit: &mut F)
where
    F: FnMut(&T),
{
    if let Some(ref node) = tree {
        post_order(&node.left, visit);
        post_order(&node.right, visit);
        visit(&node.value);
    }
}

pub fn is_balanced<T>(tree: &Tree<T>) -> bool {
    match tree {
        None => true,
        Some(ref node) => {
            node.balance_factor().abs() <= 1
                && is_balanced(&node.left)
                && is_balanced(&node.right)
        },
    }
}
