use std::collections::VecDeque;

use generational_arena::Index;

use crate::{LinkedBinaryTree, Position};

/// Level-order enumeration of positions, left to right within each level.
pub struct BreadthFirst<'iter, E> {
    tree: &'iter LinkedBinaryTree<E>,
    queue: VecDeque<Index>,
}

impl<'iter, E> BreadthFirst<'iter, E> {
    pub(crate) fn new(tree: &'iter LinkedBinaryTree<E>) -> Self {
        Self {
            tree,
            queue: tree.root.into_iter().collect(),
        }
    }
}

impl<'iter, E> Iterator for BreadthFirst<'iter, E> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.queue.pop_front()?;
        if let Some(node) = self.tree.arena.get(index) {
            self.queue.extend(node.left);
            self.queue.extend(node.right);
        }
        Some(self.tree.position(index))
    }
}
