//! Lazy traversals over a [`LinkedBinaryTree`].
//!
//! Each traversal borrows the tree immutably, so the tree cannot be mutated
//! while an enumeration is in progress. Calling the constructor again starts a
//! fresh traversal over the current shape.

use std::iter::FusedIterator;

use generational_arena::Index;

use crate::{LinkedBinaryTree, Position};

mod breadth_first;
mod depth_first;

pub use breadth_first::BreadthFirst;
pub use depth_first::{Postorder, Preorder};

/// Inorder enumeration of positions: left subtree, node, right subtree.
pub struct Positions<'iter, E> {
    tree: &'iter LinkedBinaryTree<E>,
    // Nodes whose left subtree has been entered but which are not yet yielded
    stack: Vec<Index>,
}

impl<'iter, E> Positions<'iter, E> {
    pub(crate) fn new(tree: &'iter LinkedBinaryTree<E>) -> Self {
        let mut positions = Self {
            tree,
            stack: Vec::new(),
        };
        positions.push_left_spine(tree.root);
        positions
    }

    fn push_left_spine(&mut self, mut current: Option<Index>) {
        while let Some(index) = current {
            self.stack.push(index);
            current = self.tree.arena.get(index).and_then(|node| node.left);
        }
    }
}

impl<'iter, E> Iterator for Positions<'iter, E> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let right = self.tree.arena.get(index).and_then(|node| node.right);
        self.push_left_spine(right);
        Some(self.tree.position(index))
    }
}

impl<'iter, E> FusedIterator for Positions<'iter, E> {}

/// Inorder enumeration of elements, in the same order as [`Positions`].
pub struct Iter<'iter, E> {
    positions: Positions<'iter, E>,
}

impl<'iter, E> Iter<'iter, E> {
    pub(crate) fn new(tree: &'iter LinkedBinaryTree<E>) -> Self {
        Self {
            positions: Positions::new(tree),
        }
    }
}

impl<'iter, E> Iterator for Iter<'iter, E> {
    type Item = &'iter E;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.positions.tree;
        self.positions
            .next()
            .and_then(|position| tree.element(position).ok())
    }
}

impl<'iter, E> FusedIterator for Iter<'iter, E> {}
