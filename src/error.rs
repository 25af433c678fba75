use crate::node::Side;

/// Broad class of a [`TreeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The tree is in a state that forbids the operation.
    IllegalState,
    /// An argument violates a structural precondition.
    IllegalArgument,
}

/// Errors returned by tree operations.
///
/// A failed mutator leaves the tree exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// `add_root` on a tree that already has a root.
    #[error("tree already has a root")]
    RootExists,
    /// The requested child slot is occupied.
    #[error("node already has a {0} child")]
    ChildExists(Side),
    /// Only nodes with at most one child can be removed.
    #[error("node has two children")]
    TwoChildren,
    /// Subtrees can only be attached to a leaf.
    #[error("node is not a leaf")]
    NotLeaf,
    /// The position was issued by a different tree.
    #[error("position does not belong to this tree")]
    ForeignPosition,
    /// The node behind the position has been removed or moved.
    #[error("position is no longer in the tree")]
    StalePosition,
}

impl TreeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TreeError::RootExists => ErrorKind::IllegalState,
            TreeError::ChildExists(_)
            | TreeError::TwoChildren
            | TreeError::NotLeaf
            | TreeError::ForeignPosition
            | TreeError::StalePosition => ErrorKind::IllegalArgument,
        }
    }
}

pub type Result<T, E = TreeError> = std::result::Result<T, E>;
