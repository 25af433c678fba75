use generational_arena::Index;

use crate::{LinkedBinaryTree, Position};

/// Preorder enumeration of positions: node, left subtree, right subtree.
pub struct Preorder<'iter, E> {
    tree: &'iter LinkedBinaryTree<E>,
    stack: Vec<Index>,
}

impl<'iter, E> Preorder<'iter, E> {
    pub(crate) fn new(tree: &'iter LinkedBinaryTree<E>) -> Self {
        Self {
            tree,
            stack: tree.root.into_iter().collect(),
        }
    }
}

impl<'iter, E> Iterator for Preorder<'iter, E> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        if let Some(node) = self.tree.arena.get(index) {
            // Right is pushed first so the left subtree is visited first
            self.stack.extend(node.right);
            self.stack.extend(node.left);
        }
        Some(self.tree.position(index))
    }
}

/// Postorder enumeration of positions: left subtree, right subtree, node.
pub struct Postorder<'iter, E> {
    tree: &'iter LinkedBinaryTree<E>,
    // (node, children already pushed)
    stack: Vec<(Index, bool)>,
}

impl<'iter, E> Postorder<'iter, E> {
    pub(crate) fn new(tree: &'iter LinkedBinaryTree<E>) -> Self {
        Self {
            tree,
            stack: tree.root.map(|root| (root, false)).into_iter().collect(),
        }
    }
}

impl<'iter, E> Iterator for Postorder<'iter, E> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, expanded)) = self.stack.pop() {
            if expanded {
                return Some(self.tree.position(index));
            }
            let Some(node) = self.tree.arena.get(index) else {
                continue;
            };
            self.stack.push((index, true));
            self.stack.extend(node.right.map(|right| (right, false)));
            self.stack.extend(node.left.map(|left| (left, false)));
        }
        None
    }
}
