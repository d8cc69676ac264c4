use super::{Link, Node};

/// A double-ended in-order iterator over borrowed nodes.
///
/// Each end keeps the stack of ancestors it still has to visit. The two ends walk the tree
/// independently, and the shared count of remaining items keeps them from passing each
/// other.
pub struct Iter<'a, T: 'a> {
    front: Vec<&'a Node<T>>,
    back: Vec<&'a Node<T>>,
    size: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, size: usize) -> Self {
        let mut it = Iter { front: vec![], back: vec![], size: size };
        it.push_front(root.as_deref());
        it.push_back(root.as_deref());
        it
    }

    fn push_front(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.front.push(n);
            node = n.left();
        }
    }

    fn push_back(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.back.push(n);
            node = n.right();
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter { front: self.front.clone(), back: self.back.clone(), size: self.size }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.size == 0 { return None; }
        let node = self.front.pop()?;
        self.push_front(node.right());
        self.size -= 1;
        Some(node.item())
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.size == 0 { return None; }
        let node = self.back.pop()?;
        self.push_back(node.left());
        self.size -= 1;
        Some(node.item())
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// An ascending iterator that takes ownership of the nodes.
///
/// Each node is dismantled as it is reached: its left subtree has already been moved onto
/// the stack, and its right subtree is moved there before the item is yielded.
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
    size: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, size: usize) -> Self {
        let mut it = IntoIter { stack: vec![], size: size };
        it.push(root);
        it
    }

    fn push(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let mut node = self.stack.pop()?;
        let right = node.right.take();
        self.push(right);
        self.size -= 1;
        let node = *node;
        Some(node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
