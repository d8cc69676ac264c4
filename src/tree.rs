//! An ordered set based on an AVL tree.

use compare::{Compare, Natural};
use std::fmt::{self, Debug};
use std::ptr::NonNull;
use super::node::{self, Diagram, IntoIter, Iter, Link, Node};
use super::Error;

/// The order in which [`Tree::traverse`](struct.Tree.html#method.traverse) visits items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Smallest item first.
    Ascending,
    /// Largest item first.
    Descending,
}

/// An ordered set based on a height-balanced binary search tree.
///
/// Items are unique under the tree's comparator. Insertion, removal and lookup take time
/// logarithmic in the number of items, and the minimum and maximum are available in constant
/// time.
///
/// The behavior of this tree is undefined if an item's ordering relative to any other item
/// changes while the item is in the tree. This is normally only possible through `Cell`,
/// `RefCell`, or unsafe code.
pub struct Tree<T, C = Natural<T>> where C: Compare<T> {
    root: Link<T>,
    len: usize,
    // Re-derived from the spines after every mutation; never dereferenced while stale.
    min: Option<NonNull<Node<T>>>,
    max: Option<NonNull<Node<T>>>,
    cmp: C,
}

unsafe impl<T, C> Send for Tree<T, C> where T: Send, C: Compare<T> + Send {}
unsafe impl<T, C> Sync for Tree<T, C> where T: Sync, C: Compare<T> + Sync {}

impl<T> Tree<T> where T: Ord {
    /// Creates an empty tree ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::Tree::new();
    ///
    /// tree.insert(2).unwrap();
    /// tree.insert(1).unwrap();
    /// tree.insert(3).unwrap();
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { Tree::with_cmp(compare::natural()) }
}

impl<T, C> Tree<T, C> where C: Compare<T> {
    /// Creates an empty tree ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut tree = avl::Tree::with_cmp(natural().rev());
    ///
    /// tree.insert(2).unwrap();
    /// tree.insert(1).unwrap();
    /// tree.insert(3).unwrap();
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Tree { root: None, len: 0, min: None, max: None, cmp: cmp }
    }

    /// Checks if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::Tree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(2).unwrap();
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of items in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::Tree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert(2).unwrap();
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize { self.len }

    /// Returns the height of the tree, where a single node has height `0` and an empty tree
    /// has height `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// for i in 0..7 { tree.insert(i).unwrap(); }
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> isize { node::height(&self.root) }

    /// Returns a reference to the tree's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Returns a reference to the tree's root node, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::Tree::new();
    ///
    /// tree.insert(10).unwrap();
    /// tree.insert(20).unwrap();
    /// tree.insert(30).unwrap();
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.item(), &20);
    /// assert_eq!(root.left().map(|n| *n.item()), Some(10));
    /// assert_eq!(root.right().map(|n| *n.item()), Some(30));
    /// ```
    pub fn root(&self) -> Option<&Node<T>> { self.root.as_deref() }

    /// Removes all items from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::Tree::new();
    ///
    /// tree.insert(2).unwrap();
    /// tree.insert(1).unwrap();
    /// tree.insert(3).unwrap();
    ///
    /// tree.clear();
    ///
    /// assert_eq!(tree.len(), 0);
    /// assert!(tree.min().is_err());
    /// ```
    pub fn clear(&mut self) {
        self.min = None;
        self.max = None;
        let destroyed = node::clear(&mut self.root);
        debug_assert_eq!(destroyed, self.len);
        self.len = 0;
    }

    /// Inserts an item into the tree.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateKey` and leaves the tree unchanged if the tree already
    /// contains an item equal to the given one.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Error;
    ///
    /// let mut tree = avl::Tree::new();
    /// assert_eq!(tree.insert(1), Ok(()));
    /// assert_eq!(tree.insert(1), Err(Error::DuplicateKey));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> Result<(), Error> {
        let result = node::insert(&mut self.root, &self.cmp, item);
        // the descent reborrows every node on the path, even when it fails
        self.refresh_extremes();
        result?;
        self.len += 1;
        debug!("inserted item, tree now holds {} items", self.len);
        Ok(())
    }

    /// Removes the item equal to the given key from the tree and returns it.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyNotFound` and leaves the tree unchanged if the tree does not
    /// contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Error;
    ///
    /// let mut tree = avl::Tree::new();
    ///
    /// tree.insert(2).unwrap();
    /// tree.insert(1).unwrap();
    /// tree.insert(3).unwrap();
    ///
    /// assert_eq!(tree.remove(&1), Ok(1));
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.remove(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Result<T, Error> where C: Compare<Q, T> {
        let result = node::remove(&mut self.root, &self.cmp, key);
        self.refresh_extremes();
        let item = result?;
        self.len -= 1;
        debug!("removed item, tree now holds {} items", self.len);
        Ok(item)
    }

    /// Returns a reference to the item equal to the given key.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyNotFound` if the tree does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Error;
    ///
    /// let mut tree = avl::Tree::<u32>::new();
    /// assert_eq!(tree.find(&1), Err(Error::KeyNotFound));
    ///
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.find(&1), Ok(&1));
    /// ```
    pub fn find<Q: ?Sized>(&self, key: &Q) -> Result<&T, Error> where C: Compare<Q, T> {
        node::find(&self.root, &self.cmp, key).ok_or(Error::KeyNotFound)
    }

    /// Checks if the tree contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::Tree::<u32>::new();
    /// assert!(!tree.contains(&1));
    /// tree.insert(1).unwrap();
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, T> {
        self.find(key).is_ok()
    }

    /// Returns a reference to the tree's minimum item.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyTree` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Error;
    ///
    /// let mut tree = avl::Tree::new();
    /// assert_eq!(tree.min(), Err(Error::EmptyTree));
    ///
    /// tree.insert(2).unwrap();
    /// tree.insert(1).unwrap();
    /// tree.insert(3).unwrap();
    ///
    /// assert_eq!(tree.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T, Error> { self.extreme(self.min) }

    /// Returns a reference to the tree's maximum item.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyTree` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Error;
    ///
    /// let mut tree = avl::Tree::new();
    /// assert_eq!(tree.max(), Err(Error::EmptyTree));
    ///
    /// tree.insert(2).unwrap();
    /// tree.insert(1).unwrap();
    /// tree.insert(3).unwrap();
    ///
    /// assert_eq!(tree.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&T, Error> { self.extreme(self.max) }

    fn extreme(&self, node: Option<NonNull<Node<T>>>) -> Result<&T, Error> {
        // SAFETY: the cached pointers are re-derived after every mutable access to `self.root`,
        // failed ones included, and the nodes they point to are owned by `self.root`, which
        // `&self` keeps alive and unchanged.
        node.map(|node| unsafe { &*node.as_ptr() }.item()).ok_or(Error::EmptyTree)
    }

    fn refresh_extremes(&mut self) {
        self.min = node::min(&self.root).map(NonNull::from);
        self.max = node::max(&self.root).map(NonNull::from);
    }

    /// Returns an iterator over the tree.
    ///
    /// The iterator yields the items in ascending order according to the tree's comparator,
    /// or in descending order when reversed.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::Tree::new();
    ///
    /// tree.insert(2).unwrap();
    /// tree.insert(1).unwrap();
    /// tree.insert(3).unwrap();
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &2, &3]);
    /// assert_eq!(tree.iter().rev().collect::<Vec<_>>(), [&3, &2, &1]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> { Iter::new(&self.root, self.len) }

    /// Returns an iterator that visits every item in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Order;
    ///
    /// let tree: avl::Tree<_> = vec![5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.traverse(Order::Ascending).collect::<Vec<_>>(), [&3, &5, &8]);
    /// assert_eq!(tree.traverse(Order::Descending).collect::<Vec<_>>(), [&8, &5, &3]);
    /// ```
    pub fn traverse(&self, order: Order) -> Traverse<'_, T> {
        Traverse { iter: self.iter(), order: order }
    }

    /// Returns an iterator that consumes the tree, yielding its items in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::Tree::new();
    ///
    /// tree.insert("b".to_string()).unwrap();
    /// tree.insert("a".to_string()).unwrap();
    ///
    /// assert_eq!(tree.into_iter().collect::<Vec<_>>(), ["a", "b"]);
    /// ```
    pub fn into_iter(mut self) -> IntoIter<T> {
        self.min = None;
        self.max = None;
        IntoIter::new(self.root.take(), self.len)
    }

    /// Returns a value that draws the tree's shape when formatted with `{}`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::Tree::new();
    /// assert_eq!(tree.display().to_string(), "Empty");
    ///
    /// tree.insert(2).unwrap();
    /// tree.insert(1).unwrap();
    /// tree.insert(3).unwrap();
    ///
    /// assert_eq!(tree.display().to_string(),
    ///            "     ┌---[1]\n*---[2]\n     └---[3]\n");
    /// ```
    pub fn display(&self) -> Diagram<'_, T> { Diagram::new(&self.root) }

    #[cfg(test)]
    pub(crate) fn into_root(mut self) -> Link<T> { self.root.take() }
}

impl<T, C> Clone for Tree<T, C> where T: Clone, C: Compare<T> + Clone {
    fn clone(&self) -> Self {
        let mut tree = Tree { root: self.root.clone(), len: self.len, min: None, max: None,
                              cmp: self.cmp.clone() };
        tree.refresh_extremes();
        tree
    }
}

impl<T, C> Debug for Tree<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> Default for Tree<T, C> where C: Compare<T> + Default {
    fn default() -> Self { Tree::with_cmp(Default::default()) }
}

/// Inserts every item that is not already present; duplicates are dropped.
impl<T, C> Extend<T> for Tree<T, C> where C: Compare<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) {
        for item in it { let _ = self.insert(item); }
    }
}

impl<T, C> FromIterator<T> for Tree<T, C> where C: Compare<T> + Default {
    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut tree: Self = Default::default();
        tree.extend(it);
        tree
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> where C: Compare<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, C> IntoIterator for Tree<T, C> where C: Compare<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { self.into_iter() }
}

impl<T, C> PartialEq for Tree<T, C> where C: Compare<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() &&
            self.iter().zip(other.iter()).all(|(l, r)| self.cmp.compares_eq(l, r))
    }
}

impl<T, C> Eq for Tree<T, C> where C: Compare<T> {}

/// An iterator over the tree's items in a chosen order.
///
/// Acquire through [`Tree::traverse`](struct.Tree.html#method.traverse).
pub struct Traverse<'a, T: 'a> {
    iter: Iter<'a, T>,
    order: Order,
}

impl<'a, T> Clone for Traverse<'a, T> {
    fn clone(&self) -> Self { Traverse { iter: self.iter.clone(), order: self.order } }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match self.order {
            Order::Ascending => self.iter.next(),
            Order::Descending => self.iter.next_back(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.iter.size_hint() }
}

impl<'a, T> ExactSizeIterator for Traverse<'a, T> {}
