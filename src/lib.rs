//! An ordered set based on a height-balanced (AVL) binary search tree.
//!
//! Every insertion and removal records the slots it passes on the way down and then walks
//! them back up, recomputing cached heights and rotating wherever the heights of a node's two
//! subtrees have drifted apart by two. The tree therefore stays within a constant factor of
//! the optimal height, and insertion, removal and lookup all take logarithmic time.
//!
//! The ordering is supplied as a [`Compare`](compare::Compare) implementation, defaulting to
//! the natural order of the items.
//!
//! # Examples
//!
//! ```
//! use avl::{Error, Order, Tree};
//!
//! let mut tree = Tree::new();
//!
//! for letter in "avltree".chars().filter(|&c| c != 'e') {
//!     tree.insert(letter).unwrap();
//! }
//!
//! assert_eq!(tree.insert('a'), Err(Error::DuplicateKey));
//! assert_eq!(tree.min(), Ok(&'a'));
//! assert_eq!(tree.max(), Ok(&'v'));
//! assert_eq!(tree.traverse(Order::Descending).collect::<String>(), "vtrla");
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

mod balance;
mod error;
mod node;
#[cfg(feature = "ordered_iter")]
mod ordered_iter;
#[cfg(feature = "quickcheck")]
mod quickcheck;
mod tree;

pub use error::Error;
pub use node::{Diagram, IntoIter, Iter, Node};
pub use tree::{Order, Traverse, Tree};
