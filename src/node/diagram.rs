use std::fmt::{self, Display, Formatter};
use super::{Link, Node};

/// A sideways drawing of a tree's shape, one node per line.
///
/// Left subtrees are drawn above their parent and right subtrees below it, indented five
/// columns per level. The root is marked with `*---`, left children with `┌---` and right
/// children with `└---`. An empty tree is drawn as `Empty`.
///
/// Acquire through [`Tree::display`](crate::Tree::display).
pub struct Diagram<'a, T: 'a> {
    root: &'a Link<T>,
}

impl<'a, T> Diagram<'a, T> {
    pub(crate) fn new(root: &'a Link<T>) -> Self { Diagram { root: root } }
}

#[derive(Clone, Copy)]
enum Side {
    Root,
    Left,
    Right,
}

fn draw<T>(f: &mut Formatter, node: &Node<T>, depth: usize, side: Side) -> fmt::Result
    where T: Display {

    if let Some(left) = node.left() { draw(f, left, depth + 1, Side::Left)?; }

    for _ in 0..depth { f.write_str("     ")?; }

    let marker = match side {
        Side::Root => "*---",
        Side::Left => "┌---",
        Side::Right => "└---",
    };

    writeln!(f, "{}[{}]", marker, node.item())?;

    if let Some(right) = node.right() { draw(f, right, depth + 1, Side::Right)?; }
    Ok(())
}

impl<'a, T> Display for Diagram<'a, T> where T: Display {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self.root {
            None => f.write_str("Empty"),
            Some(ref root) => draw(f, root, 0, Side::Root),
        }
    }
}
