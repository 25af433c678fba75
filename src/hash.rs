use std::hash::{Hash, Hasher};

use generational_arena::Index;
use xxhash_rust::xxh64::Xxh64;

use crate::{LinkedBinaryTree, Position, Result};

// Written for every child slot so that mirrored shapes hash differently
const EMPTY_SLOT: u8 = 0;
const NODE: u8 = 1;

impl<E> LinkedBinaryTree<E>
where
    E: Hash,
{
    /// xxh64 digest of the shape and elements of the whole tree
    pub fn xxhash(&self) -> u64 {
        let mut hasher = Xxh64::new(0);
        self.hash_subtree(self.root, &mut hasher);
        hasher.finish()
    }

    /// xxh64 digest of the shape and elements of the subtree rooted at `p`.
    ///
    /// Equal subtrees hash equally regardless of where they sit in the tree.
    pub fn subtree_hash(&self, p: Position) -> Result<u64> {
        self.node(p)?;
        let mut hasher = Xxh64::new(0);
        self.hash_subtree(Some(p.index), &mut hasher);
        Ok(hasher.finish())
    }

    /// Feed the subtree at `start` to `state` in preorder, including empty slots
    fn hash_subtree<H: Hasher>(&self, start: Option<Index>, state: &mut H) {
        let mut stack = vec![start];
        while let Some(slot) = stack.pop() {
            match slot.and_then(|index| self.arena.get(index)) {
                Some(node) => {
                    state.write_u8(NODE);
                    node.element.hash(state);
                    stack.push(node.right);
                    stack.push(node.left);
                }
                None => state.write_u8(EMPTY_SLOT),
            }
        }
    }
}

impl<E> Hash for LinkedBinaryTree<E>
where
    E: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_subtree(self.root, state)
    }
}

#[cfg(test)]
mod tests {
    use crate::{test::sample_tree, LinkedBinaryTree};

    #[test]
    fn identical_trees_hash_equal() {
        let (one, _) = sample_tree();
        let (two, _) = sample_tree();
        assert_eq!(one.xxhash(), two.xxhash());
    }

    #[test]
    fn mirrored_trees_differ() {
        let mut left = LinkedBinaryTree::new();
        let root = left.add_root("A").unwrap();
        left.add_left(root, "B").unwrap();

        let mut right = LinkedBinaryTree::new();
        let root = right.add_root("A").unwrap();
        right.add_right(root, "B").unwrap();

        assert_ne!(left.xxhash(), right.xxhash());
    }

    #[test]
    fn subtree_hash_is_position_independent() {
        let (tree, nodes) = sample_tree();
        let b = nodes[1];

        let mut standalone = LinkedBinaryTree::new();
        let root = standalone.add_root("B").unwrap();
        standalone.add_left(root, "D").unwrap();
        standalone.add_right(root, "E").unwrap();

        assert_eq!(tree.subtree_hash(b).unwrap(), standalone.xxhash());
        assert_ne!(tree.subtree_hash(b).unwrap(), tree.xxhash());
    }

    #[test]
    fn element_change_changes_hash() {
        let (mut tree, nodes) = sample_tree();
        let before = tree.xxhash();
        tree.set(nodes[6], "Z").unwrap();
        assert_ne!(before, tree.xxhash());
    }
}
