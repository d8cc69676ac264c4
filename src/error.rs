/// An error returned by a fallible tree operation.
///
/// No operation that returns an error modifies the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// The item being inserted compares equal to an item already in the tree.
    #[error("element already exists")]
    DuplicateKey,
    /// No item in the tree compares equal to the given key.
    #[error("there is no such element")]
    KeyNotFound,
    /// The tree contains no items.
    #[error("the tree is empty")]
    EmptyTree,
}
