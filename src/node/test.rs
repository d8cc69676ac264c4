use compare::natural;
use quickcheck::{Arbitrary, Gen, TestResult, quickcheck};
use std::cmp;
use std::fmt::Debug;
use super::{Link, Node, Path, clear, unlink};
use crate::{Error, Tree};

/// An operation on a `Tree`.
#[derive(Clone, Debug)]
enum Op<T> where T: Clone + Ord {
    /// Insert an item into the tree.
    Insert(T),
    /// Remove the item at index `n % tree.len()` from the tree.
    Remove(usize),
}

impl<T> Arbitrary for Op<T> where T: Arbitrary + Ord {
    fn arbitrary(gen: &mut Gen) -> Op<T> {
        if bool::arbitrary(gen) {
            Op::Insert(Arbitrary::arbitrary(gen))
        } else {
            Op::Remove(Arbitrary::arbitrary(gen))
        }
    }
}

impl<T> Op<T> where T: Clone + Ord {
    /// Perform the operation on the given tree.
    fn exec(self, tree: &mut Tree<T>) {
        match self {
            Op::Insert(item) => {
                let present = tree.contains(&item);
                assert_eq!(tree.insert(item).is_err(), present);
            }
            Op::Remove(index) => if !tree.is_empty() {
                let item = tree.iter().nth(index % tree.len()).unwrap().clone();
                assert!(tree.remove(&item) == Ok(item));
            },
        }
    }
}

// Checks ordering, cached heights and balance below `node`, returning its height and size.
fn check<T>(node: Option<&Node<T>>, lo: Option<&T>, hi: Option<&T>) -> (isize, usize)
    where T: Ord + Debug {

    match node {
        None => (-1, 0),
        Some(node) => {
            if let Some(lo) = lo { assert!(node.item > *lo, "{:?} <= {:?}", node.item, lo); }
            if let Some(hi) = hi { assert!(node.item < *hi, "{:?} >= {:?}", node.item, hi); }

            let (left_height, left_len) = check(node.left(), lo, Some(&node.item));
            let (right_height, right_len) = check(node.right(), Some(&node.item), hi);

            assert_eq!(node.height, 1 + cmp::max(left_height, right_height));
            assert!((left_height - right_height).abs() <= 1,
                    "unbalanced at {:?}: {} vs {}", node.item, left_height, right_height);

            (node.height, left_len + right_len + 1)
        }
    }
}

fn assert_avl_tree<T>(tree: &Tree<T>) where T: Ord + Debug {
    let (height, len) = check(tree.root(), None, None);
    assert_eq!(height, tree.height());
    assert_eq!(len, tree.len());
    assert_eq!(tree.min().ok(), tree.iter().next());
    assert_eq!(tree.max().ok(), tree.iter().next_back());
}

fn shape<T>(node: Option<&Node<T>>) -> String where T: Debug {
    match node {
        None => "-".to_string(),
        Some(node) if node.is_leaf() => format!("{:?}", node.item),
        Some(node) => format!("{:?}({}, {})", node.item, shape(node.left()), shape(node.right())),
    }
}

fn build(items: &[u32]) -> Tree<u32> {
    let mut tree = Tree::new();
    for &item in items { tree.insert(item).unwrap(); }
    assert_avl_tree(&tree);
    tree
}

#[test]
fn test_avl() {
    fn check(ops: Vec<Op<u8>>) -> TestResult {
        let mut tree = Tree::new();

        for op in ops {
            op.exec(&mut tree);
            assert_avl_tree(&tree);
        }

        TestResult::passed()
    }

    quickcheck(check as fn(_) -> _);
}

#[test]
fn path_through_empty_tree() {
    let mut root: Link<u32> = None;
    let mut path = Path::find(&mut root, &natural::<u32>(), &1);
    assert_eq!(path.len(), 1);
    assert!(path.last_mut().unwrap().is_none());

    path.push_left();
    path.push_right();
    assert_eq!(path.len(), 1);
}

#[test]
fn path_ends_at_match_or_vacancy() {
    let mut root = build(&[4, 2, 6, 1, 3, 5, 7]).into_root();
    let cmp = natural::<u32>();

    let mut path = Path::find(&mut root, &cmp, &4);
    assert_eq!(path.len(), 1);
    assert_eq!(path.last_mut().unwrap().as_ref().map(|n| n.item), Some(4));

    let mut path = Path::find(&mut root, &cmp, &7);
    assert_eq!(path.len(), 3);
    assert_eq!(path.last_mut().unwrap().as_ref().map(|n| n.item), Some(7));

    let mut path = Path::find(&mut root, &cmp, &8);
    assert_eq!(path.len(), 4);
    assert!(path.last_mut().unwrap().is_none());
    assert_eq!(path.pop().unwrap().is_none(), true);
    assert_eq!(path.pop().unwrap().as_ref().map(|n| n.item), Some(7));
    assert_eq!(path.pop().unwrap().as_ref().map(|n| n.item), Some(6));
    assert_eq!(path.pop().unwrap().as_ref().map(|n| n.item), Some(4));
    assert!(path.is_empty());
}

#[test]
fn leftmost_reaches_successor() {
    let mut root = build(&[4, 2, 6, 1, 3, 5, 7]).into_root();
    let node = root.as_mut().unwrap();

    let mut path = Path::leftmost(&mut node.right);
    assert_eq!(path.len(), 2);
    assert_eq!(path.last_mut().unwrap().as_ref().map(|n| n.item), Some(5));

    let mut empty: Link<u32> = None;
    assert!(Path::leftmost(&mut empty).is_empty());
}

#[test]
fn insert_ascending_run_rotates_left() {
    let tree = build(&[10, 20, 30]);
    assert_eq!(shape(tree.root()), "20(10, 30)");
    assert_eq!(tree.root().unwrap().balance_factor(), 0);
}

#[test]
fn insert_zig_zag_rotates_twice() {
    assert_eq!(shape(build(&[30, 10, 20]).root()), "20(10, 30)");
    assert_eq!(shape(build(&[10, 30, 20]).root()), "20(10, 30)");
}

#[test]
fn remove_leaf() {
    let mut tree = build(&[2, 1, 3]);
    assert_eq!(tree.remove(&1), Ok(1));
    assert_eq!(shape(tree.root()), "2(-, 3)");
    assert_avl_tree(&tree);
}

#[test]
fn remove_node_with_one_child() {
    let mut tree = build(&[2, 1, 3, 4]);
    assert_eq!(tree.remove(&3), Ok(3));
    assert_eq!(shape(tree.root()), "2(1, 4)");
    assert_avl_tree(&tree);
}

#[test]
fn remove_with_immediate_right_successor() {
    // 3 is the right child of 2 and has no left child
    let mut tree = build(&[2, 1, 3, 4]);
    assert_eq!(tree.remove(&2), Ok(2));
    assert_eq!(shape(tree.root()), "3(1, 4)");
    assert_avl_tree(&tree);

    let mut tree = build(&[2, 1, 3]);
    assert_eq!(tree.remove(&2), Ok(2));
    assert_eq!(shape(tree.root()), "3(1, -)");
    assert_avl_tree(&tree);
}

#[test]
fn remove_with_deep_successor() {
    let mut tree = build(&[4, 2, 6, 1, 3, 5, 7]);
    assert_eq!(tree.remove(&4), Ok(4));
    assert_eq!(shape(tree.root()), "5(2(1, 3), 6(-, 7))");
    assert_avl_tree(&tree);
}

#[test]
fn successor_cases_agree_on_shape() {
    // the same set reached with the successor directly below the root and further down
    let mut direct = build(&[4, 2, 5, 1, 3, 6]);
    direct.remove(&4).unwrap();

    let mut deep = build(&[4, 2, 6, 1, 3, 5]);
    deep.remove(&4).unwrap();

    assert_eq!(shape(direct.root()), "5(2(1, 3), 6)");
    assert_eq!(shape(deep.root()), "5(2(1, 3), 6)");
}

#[test]
fn remove_rebalances_after_successor_splice() {
    let mut tree = build(&[5, 2, 8, 1, 4, 7, 10, 3, 6, 9, 11, 12]);
    assert_eq!(tree.remove(&5), Ok(5));
    assert_avl_tree(&tree);
    assert_eq!(tree.root().map(|n| n.item), Some(6));
}

#[test]
fn missing_key_is_not_found() {
    let mut tree = build(&[1, 2, 3]);
    assert_eq!(tree.remove(&4), Err(Error::KeyNotFound));
    assert_eq!(tree.find(&0), Err(Error::KeyNotFound));
    assert_eq!(tree.len(), 3);
}

#[test]
fn unlink_splices_single_child() {
    let mut root = build(&[1, 2]).into_root();
    assert_eq!(unlink(&mut root), Some(1));
    assert_eq!(shape(root.as_deref()), "2");
    assert_eq!(unlink(&mut root), Some(2));
    assert!(root.is_none());
    assert_eq!(unlink(&mut root), None);
}

#[test]
fn clear_counts_nodes() {
    let mut root = build(&[4, 2, 6, 1, 3, 5, 7]).into_root();
    assert_eq!(clear(&mut root), 7);
    assert!(root.is_none());
    assert_eq!(clear(&mut root), 0);
}

#[test]
fn diagram_draws_shape() {
    let tree = build(&[4, 2, 6, 1]);
    let expected = concat!(
        "          ┌---[1]\n",
        "     ┌---[2]\n",
        "*---[4]\n",
        "     └---[6]\n",
    );
    assert_eq!(tree.display().to_string(), expected);
}
