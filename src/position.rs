use generational_arena::Index;

use crate::TreeId;

/// Opaque handle to a node of a [`crate::LinkedBinaryTree`].
///
/// Two positions compare equal iff they denote the same node of the same tree.
/// A position stays valid until its node is removed, or moved into another tree
/// by [`crate::LinkedBinaryTree::attach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) tree: TreeId,
    pub(crate) index: Index,
}

impl Position {
    pub(crate) fn new(tree: TreeId, index: Index) -> Self {
        Self { tree, index }
    }

    /// Id of the tree that issued this position
    pub fn tree_id(&self) -> TreeId {
        self.tree
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (slot, generation) = self.index.into_raw_parts();
        write!(f, "{}:{}", slot, generation)
    }
}
