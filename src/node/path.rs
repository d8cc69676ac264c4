use compare::Compare;
use std::cmp::Ordering::*;
use std::marker::PhantomData;
use std::ptr::NonNull;
use super::Link;

/// The ordered sequence of slots visited while descending from some slot toward a target.
///
/// A path is a stack: the slot nearest the starting point is at the bottom, and the deepest
/// slot visited is on top. It mutably borrows the slot it started from for `'a`, and every
/// slot it records lies within that subtree.
///
/// Slots are only ever handed out through `&mut self`, and a popped slot is no longer part
/// of the path, so at most one slot is accessible at a time. Rewriting a slot never moves the
/// slots above it in the path, because those live inside ancestors (or the root field) that
/// the rewrite does not touch.
pub struct Path<'a, T: 'a> {
    slots: Vec<NonNull<Link<T>>>,
    _marker: PhantomData<&'a mut Link<T>>,
}

impl<'a, T> Path<'a, T> {
    /// Creates a path containing only the given slot.
    pub fn new(slot: &'a mut Link<T>) -> Self {
        Path { slots: vec![NonNull::from(slot)], _marker: PhantomData }
    }

    /// Descends from the given slot toward `key`.
    ///
    /// The deepest slot of the returned path holds either the node equal to `key` or, if
    /// there is no such node, the empty slot where it would be inserted. A path through an
    /// empty tree consists of the (empty) root slot alone.
    pub fn find<C, Q: ?Sized>(root: &'a mut Link<T>, cmp: &C, key: &Q) -> Self
        where C: Compare<Q, T> {

        let mut path = Path::new(root);

        loop {
            let order = match path.last_mut() {
                Some(&mut Some(ref node)) => cmp.compare(key, &node.item),
                _ => break,
            };

            match order {
                Equal => break,
                Less => path.push_left(),
                Greater => path.push_right(),
            };
        }

        path
    }

    /// Descends from the given slot along left children to the last node on that spine.
    ///
    /// Starting from a node's right child, the deepest slot of the returned path holds the
    /// node's in-order successor. If the starting slot is empty, so is the path.
    pub fn leftmost(start: &'a mut Link<T>) -> Self {
        if start.is_none() {
            return Path { slots: vec![], _marker: PhantomData };
        }

        let mut path = Path::new(start);

        while let Some(&mut Some(ref node)) = path.last_mut() {
            if node.left.is_none() { break; }
            path.push_left();
        }

        path
    }

    /// Returns the number of slots in the path.
    pub fn len(&self) -> usize { self.slots.len() }

    /// Checks if the path contains no slots.
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }

    /// Pushes the left child slot of the node in the deepest slot onto the path.
    ///
    /// Does nothing if the deepest slot is empty.
    pub fn push_left(&mut self) { self.push_child(true) }

    /// Pushes the right child slot of the node in the deepest slot onto the path.
    ///
    /// Does nothing if the deepest slot is empty.
    pub fn push_right(&mut self) { self.push_child(false) }

    fn push_child(&mut self, left: bool) {
        if let Some(&mut Some(ref mut node)) = self.last_mut() {
            let next = NonNull::from(if left { &mut node.left } else { &mut node.right });
            self.slots.push(next);
        }
    }

    /// Returns a mutable reference to the deepest slot of the path without removing it.
    pub fn last_mut(&mut self) -> Option<&mut Link<T>> {
        // SAFETY: every recorded slot is reachable from the slot borrowed for `'a`, and the
        // returned borrow is tied to `self`, so no other slot can be accessed while it lives.
        self.slots.last_mut().map(|slot| unsafe { slot.as_mut() })
    }

    /// Removes the deepest slot from the path and returns a mutable reference to it.
    pub fn pop(&mut self) -> Option<&mut Link<T>> {
        // SAFETY: as for `last_mut`; the slot is no longer recorded once popped.
        self.slots.pop().map(|slot| unsafe { &mut *slot.as_ptr() })
    }
}
