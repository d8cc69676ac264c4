mod diagram;
mod iter;
mod path;

#[cfg(test)]
mod test;

use compare::Compare;
use std::cmp;
use std::mem;
use super::balance::{self, Subtree};
use super::Error;

pub use self::diagram::Diagram;
pub use self::iter::{IntoIter, Iter};
pub use self::path::Path;

/// The contents of a slot: either empty or the owning link to a subtree.
pub type Link<T> = Option<Box<Node<T>>>;

/// Returns the cached height of the subtree in the given slot, or `-1` if it is empty.
pub fn height<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(-1, |node| node.height)
}

/// A node of an AVL tree.
///
/// Every node exclusively owns its two subtrees and caches its own height, where a leaf
/// has height `0`.
#[derive(Clone, Debug)]
pub struct Node<T> {
    left: Link<T>,
    right: Link<T>,
    height: isize,
    item: T,
}

impl<T> Node<T> {
    fn new(item: T) -> Self {
        Node { left: None, right: None, height: 0, item: item }
    }

    /// Returns a reference to the node's item.
    pub fn item(&self) -> &T { &self.item }

    /// Returns a reference to the node's left child, if any.
    pub fn left(&self) -> Option<&Node<T>> { self.left.as_deref() }

    /// Returns a reference to the node's right child, if any.
    pub fn right(&self) -> Option<&Node<T>> { self.right.as_deref() }

    /// Returns the cached height of the subtree rooted at this node.
    pub fn height(&self) -> isize { self.height }

    /// Returns the height of the left subtree minus the height of the right subtree.
    pub fn balance_factor(&self) -> isize { height(&self.left) - height(&self.right) }

    /// Checks if the node has no children.
    pub fn is_leaf(&self) -> bool { self.left.is_none() && self.right.is_none() }

    fn update_height(&mut self) {
        self.height = 1 + cmp::max(height(&self.left), height(&self.right));
    }
}

impl<T> Subtree for Box<Node<T>> {
    fn balance_factor(&self) -> isize { Node::balance_factor(self) }

    fn update_height(&mut self) { Node::update_height(self) }

    fn left_mut(&mut self) -> &mut Link<T> { &mut self.left }

    fn right_mut(&mut self) -> &mut Link<T> { &mut self.right }

    // Lift the right child into this node's place. The lowered node's height is
    // recomputed before the lifted one's.
    fn rotate_left(mut self) -> Self {
        match self.right.take() {
            None => self,
            Some(mut pivot) => {
                self.right = pivot.left.take();
                self.update_height();
                pivot.left = Some(self);
                pivot.update_height();
                pivot
            }
        }
    }

    fn rotate_right(mut self) -> Self {
        match self.left.take() {
            None => self,
            Some(mut pivot) => {
                self.left = pivot.right.take();
                self.update_height();
                pivot.right = Some(self);
                pivot.update_height();
                pivot
            }
        }
    }
}

/// Returns the leftmost node below the given slot.
pub fn min<T>(link: &Link<T>) -> Option<&Node<T>> {
    let mut node = link.as_deref()?;
    while let Some(left) = node.left() { node = left; }
    Some(node)
}

/// Returns the rightmost node below the given slot.
pub fn max<T>(link: &Link<T>) -> Option<&Node<T>> {
    let mut node = link.as_deref()?;
    while let Some(right) = node.right() { node = right; }
    Some(node)
}

/// Returns the item below the given slot that is equal to `key`.
pub fn find<'a, T, C, Q: ?Sized>(link: &'a Link<T>, cmp: &C, key: &Q) -> Option<&'a T>
    where C: Compare<Q, T> {

    let mut link = link;

    while let Some(ref node) = *link {
        link = match cmp.compare(key, &node.item) {
            cmp::Ordering::Equal => return Some(&node.item),
            cmp::Ordering::Less => &node.left,
            cmp::Ordering::Greater => &node.right,
        };
    }

    None
}

/// Inserts the item below the given root slot and rebalances the insertion path.
pub fn insert<T, C>(root: &mut Link<T>, cmp: &C, item: T) -> Result<(), Error>
    where C: Compare<T> {

    let mut path = Path::find(root, cmp, &item);

    match path.pop() {
        Some(slot) if slot.is_none() => *slot = Some(Box::new(Node::new(item))),
        _ => return Err(Error::DuplicateKey),
    }

    // the new leaf is balanced by construction, so only its ancestors are revisited
    balance::rebalance(&mut path);
    Ok(())
}

/// Removes the item equal to the given key from below the given root slot, returning it.
pub fn remove<T, C, Q: ?Sized>(root: &mut Link<T>, cmp: &C, key: &Q) -> Result<T, Error>
    where C: Compare<Q, T> {

    let mut path = Path::find(root, cmp, key);

    let item = match path.last_mut() {
        None => None,
        Some(&mut Some(ref mut node)) if node.left.is_some() && node.right.is_some() =>
            remove_successor(node),
        Some(slot) => {
            let item = unlink(slot);
            path.pop();
            item
        }
    };

    let item = item.ok_or(Error::KeyNotFound)?;
    balance::rebalance(&mut path);
    Ok(item)
}

// Moves the in-order successor's item into `node` and splices the successor out of
// `node`'s right subtree, rebalancing the successor path. Returns `node`'s old item.
fn remove_successor<T>(node: &mut Node<T>) -> Option<T> {
    let mut path = Path::leftmost(&mut node.right);

    {
        let successor = path.last_mut()?.as_mut()?;
        mem::swap(&mut node.item, &mut successor.item);
    }

    let item = path.pop().and_then(unlink);
    balance::rebalance(&mut path);
    item
}

// Replaces a node that has at most one child with that child (or nothing).
fn unlink<T>(slot: &mut Link<T>) -> Option<T> {
    slot.take().map(|node| {
        let node = *node;
        debug_assert!(node.left.is_none() || node.right.is_none());
        *slot = node.left.or(node.right);
        node.item
    })
}

/// Destroys the subtree in the given slot children-first, returning the number of nodes
/// destroyed.
pub fn clear<T>(slot: &mut Link<T>) -> usize {
    match slot.take() {
        None => 0,
        Some(mut node) => {
            let count = clear(&mut node.left) + clear(&mut node.right);
            drop(node);
            count + 1
        }
    }
}
