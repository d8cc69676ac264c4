//! The rotation and rebalance engine.

use super::node::{Link, Node, Path};

/// The owning handle to the root of a subtree that can be rotated in place.
pub trait Subtree: Sized {
    /// Returns the subtree's balance factor, computed from its children's cached heights.
    fn balance_factor(&self) -> isize;

    /// Recomputes the cached height of the subtree's root from its children's.
    fn update_height(&mut self);

    /// Returns a mutable reference to the slot holding the left child.
    fn left_mut(&mut self) -> &mut Option<Self>;

    /// Returns a mutable reference to the slot holding the right child.
    fn right_mut(&mut self) -> &mut Option<Self>;

    /// Rotates the subtree to the left, if possible, returning its new root.
    fn rotate_left(self) -> Self;

    /// Rotates the subtree to the right, if possible, returning its new root.
    fn rotate_right(self) -> Self;
}

/// Restores the AVL invariant at the root of the given subtree, whose children must already
/// satisfy it, and returns the subtree's new root.
///
/// Performs at most one single or double rotation.
pub fn balance<S>(mut node: S) -> S where S: Subtree {
    node.update_height();
    let factor = node.balance_factor();

    if factor >= 2 {
        if child_factor(node.left_mut()) < 0 {
            trace!("left-right rotation (balance factor {})", factor);
            let left = node.left_mut().take().map(S::rotate_left);
            *node.left_mut() = left;
        } else {
            trace!("right rotation (balance factor {})", factor);
        }

        node.rotate_right()
    } else if factor <= -2 {
        if child_factor(node.right_mut()) > 0 {
            trace!("right-left rotation (balance factor {})", factor);
            let right = node.right_mut().take().map(S::rotate_right);
            *node.right_mut() = right;
        } else {
            trace!("left rotation (balance factor {})", factor);
        }

        node.rotate_left()
    } else {
        node
    }
}

fn child_factor<S>(child: &Option<S>) -> isize where S: Subtree {
    child.as_ref().map_or(0, S::balance_factor)
}

/// Rebalances every slot of the path, deepest first, leaving the path empty.
///
/// Empty slots are skipped. Every node's height is recomputed even when it is already
/// balanced, since a change below may still have to propagate to its ancestors.
pub fn rebalance<T>(path: &mut Path<'_, T>) {
    while let Some(slot) = path.pop() {
        rebalance_slot(slot);
    }
}

fn rebalance_slot<T>(slot: &mut Link<T>) {
    if let Some(node) = slot.take() {
        *slot = Some(balance::<Box<Node<T>>>(node));
    }
}
