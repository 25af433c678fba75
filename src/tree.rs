use colored::Colorize as _;
use generational_arena::{Arena, Index};
use tracing::{debug, debug_span, warn};

use crate::{
    iterator::{BreadthFirst, Iter, Positions, Postorder, Preorder},
    node::{Node, Side},
    Position, Result, TreeError, TreeId,
};

/// A binary tree addressed through [`Position`] handles.
///
/// Nodes are stored in a generational arena owned by the tree. Every node has
/// at most a left and a right child, each present or absent independently.
#[derive(Debug)]
pub struct LinkedBinaryTree<E> {
    id: TreeId,
    pub(crate) arena: Arena<Node<E>>,
    pub(crate) root: Option<Index>,
}

impl<E> Default for LinkedBinaryTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> LinkedBinaryTree<E> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            id: TreeId::generate(),
            arena: Arena::new(),
            root: None,
        }
    }

    /// Create an empty tree with room for `capacity` nodes before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: TreeId::generate(),
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub fn id(&self) -> TreeId {
        self.id
    }

    /// Number of nodes in the tree
    pub fn size(&self) -> usize {
        self.arena.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub(crate) fn position(&self, index: Index) -> Position {
        Position::new(self.id, index)
    }

    /// Resolve a position to its node, rejecting foreign and stale handles
    pub(crate) fn node(&self, p: Position) -> Result<&Node<E>> {
        if p.tree != self.id {
            return Err(TreeError::ForeignPosition);
        }
        self.arena.get(p.index).ok_or(TreeError::StalePosition)
    }

    fn node_mut(&mut self, p: Position) -> Result<&mut Node<E>> {
        if p.tree != self.id {
            return Err(TreeError::ForeignPosition);
        }
        self.arena.get_mut(p.index).ok_or(TreeError::StalePosition)
    }

    /// Whether `p` denotes a live node of this tree
    pub fn contains(&self, p: Position) -> bool {
        self.node(p).is_ok()
    }

    pub fn root(&self) -> Option<Position> {
        self.root.map(|index| self.position(index))
    }

    pub fn parent(&self, p: Position) -> Result<Option<Position>> {
        Ok(self.node(p)?.parent.map(|index| self.position(index)))
    }

    pub fn left(&self, p: Position) -> Result<Option<Position>> {
        self.child(p, Side::Left)
    }

    pub fn right(&self, p: Position) -> Result<Option<Position>> {
        self.child(p, Side::Right)
    }

    pub fn child(&self, p: Position, side: Side) -> Result<Option<Position>> {
        Ok(self.node(p)?.child(side).map(|index| self.position(index)))
    }

    /// The other child of `p`'s parent, if there is one
    pub fn sibling(&self, p: Position) -> Result<Option<Position>> {
        let Some(parent) = self.node(p)?.parent else {
            return Ok(None);
        };
        let sibling = self.arena.get(parent).and_then(|parent| {
            match parent.side_of(p.index) {
                Some(Side::Left) => parent.right,
                Some(Side::Right) => parent.left,
                None => None,
            }
        });
        Ok(sibling.map(|index| self.position(index)))
    }

    /// Children of `p`, left child first
    pub fn children(&self, p: Position) -> Result<Vec<Position>> {
        let node = self.node(p)?;
        Ok([node.left, node.right]
            .into_iter()
            .flatten()
            .map(|index| self.position(index))
            .collect())
    }

    pub fn num_children(&self, p: Position) -> Result<usize> {
        Ok(self.node(p)?.num_children())
    }

    pub fn is_internal(&self, p: Position) -> Result<bool> {
        Ok(!self.node(p)?.is_leaf())
    }

    pub fn is_external(&self, p: Position) -> Result<bool> {
        Ok(self.node(p)?.is_leaf())
    }

    pub fn is_root(&self, p: Position) -> Result<bool> {
        Ok(self.node(p)?.parent.is_none())
    }

    /// Number of ancestors of `p`
    pub fn depth(&self, p: Position) -> Result<usize> {
        let mut depth = 0;
        let mut current = self.node(p)?.parent;
        while let Some(index) = current {
            depth += 1;
            current = self.arena.get(index).and_then(|node| node.parent);
        }
        Ok(depth)
    }

    /// Length in edges of the longest downward path from `p` to a leaf
    pub fn subtree_height(&self, p: Position) -> Result<usize> {
        self.node(p)?;

        let mut height = 0;
        let mut stack = vec![(p.index, 0usize)];
        while let Some((index, depth)) = stack.pop() {
            let Some(node) = self.arena.get(index) else {
                continue;
            };
            height = height.max(depth);
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        Ok(height)
    }

    /// Height of the whole tree, 0 when empty
    pub fn height(&self) -> usize {
        self.root()
            .and_then(|root| self.subtree_height(root).ok())
            .unwrap_or(0)
    }

    pub fn element(&self, p: Position) -> Result<&E> {
        Ok(&self.node(p)?.element)
    }

    pub fn element_mut(&mut self, p: Position) -> Result<&mut E> {
        Ok(&mut self.node_mut(p)?.element)
    }

    /// Replace the element at `p`, returning the previous one. The shape of the
    /// tree is unchanged.
    pub fn set(&mut self, p: Position, element: E) -> Result<E> {
        let node = self.node_mut(p)?;
        Ok(std::mem::replace(&mut node.element, element))
    }

    /// Install a root holding `element`. Fails if the tree already has a root.
    pub fn add_root(&mut self, element: E) -> Result<Position> {
        if let Some(root) = self.root {
            warn!(root = %self.position(root), "add_root on non-empty tree");
            return Err(TreeError::RootExists);
        }

        let index = self.arena.insert(Node::new(element, None));
        self.root = Some(index);

        let root = self.position(index);
        debug!("{} {}", "Added root".green(), root);
        Ok(root)
    }

    pub fn add_left(&mut self, p: Position, element: E) -> Result<Position> {
        self.add_child(p, Side::Left, element)
    }

    pub fn add_right(&mut self, p: Position, element: E) -> Result<Position> {
        self.add_child(p, Side::Right, element)
    }

    /// Create a node holding `element` in the `side` slot of `p`. The slot must be empty.
    pub fn add_child(&mut self, p: Position, side: Side, element: E) -> Result<Position> {
        if self.node(p)?.child(side).is_some() {
            warn!(position = %p, %side, "child slot already occupied");
            return Err(TreeError::ChildExists(side));
        }

        let index = self.arena.insert(Node::new(element, Some(p.index)));
        self.node_mut(p)?.set_child(side, Some(index));

        let child = self.position(index);
        debug!("{} {} child {} of {}", "Added".green(), side, child, p);
        Ok(child)
    }

    /// Remove the node at `p` and return its element.
    ///
    /// The node must have at most one child. A single child is spliced into the
    /// slot `p` occupied, or becomes the root when `p` was the root.
    pub fn remove(&mut self, p: Position) -> Result<E> {
        let node = self.node(p)?;
        if node.num_children() == 2 {
            warn!(position = %p, "remove on node with two children");
            return Err(TreeError::TwoChildren);
        }

        let Some(node) = self.arena.remove(p.index) else {
            return Err(TreeError::StalePosition);
        };
        let child = node.left.or(node.right);

        if let Some(child) = child.and_then(|child| self.arena.get_mut(child)) {
            child.parent = node.parent;
        }

        match node.parent {
            Some(parent) => {
                if let Some(parent) = self.arena.get_mut(parent) {
                    if let Some(side) = parent.side_of(p.index) {
                        parent.set_child(side, child);
                    }
                }
            }
            None => self.root = child,
        }

        match child {
            Some(child) => debug!(
                "{} {}, spliced {} into its slot",
                "Removed".red(),
                p,
                self.position(child)
            ),
            None => debug!("{} {}", "Removed".red(), p),
        }

        Ok(node.element)
    }

    /// Graft `left` and `right` as the left and right subtrees of the leaf at `p`.
    ///
    /// Nodes are moved out of the donor trees, which are left empty. Positions
    /// previously issued by the donors become stale; the moved nodes get new
    /// positions in this tree.
    pub fn attach(&mut self, p: Position, left: &mut Self, right: &mut Self) -> Result<()> {
        if !self.node(p)?.is_leaf() {
            warn!(position = %p, "attach on internal node");
            return Err(TreeError::NotLeaf);
        }

        debug_span!("attach", position = %p).in_scope(|| {
            debug!(
                "{} {} + {} nodes",
                "Attaching".bright_purple(),
                left.size(),
                right.size()
            );
            self.graft(p.index, Side::Left, left);
            self.graft(p.index, Side::Right, right);
        });

        Ok(())
    }

    /// Move every node of `donor` into this arena, hanging the donor's root in
    /// the `side` slot of `anchor`.
    fn graft(&mut self, anchor: Index, side: Side, donor: &mut Self) {
        let Some(donor_root) = donor.root.take() else {
            return;
        };

        let mut stack = vec![(donor_root, anchor, side)];
        while let Some((donor_index, parent, side)) = stack.pop() {
            let Some(node) = donor.arena.remove(donor_index) else {
                continue;
            };
            let Node {
                element,
                left,
                right,
                ..
            } = node;

            let index = self.arena.insert(Node::new(element, Some(parent)));
            if let Some(parent) = self.arena.get_mut(parent) {
                parent.set_child(side, Some(index));
            }

            if let Some(right) = right {
                stack.push((right, index, Side::Right));
            }
            if let Some(left) = left {
                stack.push((left, index, Side::Left));
            }
        }
    }

    /// Inorder sequence of positions
    pub fn positions(&self) -> Positions<'_, E> {
        Positions::new(self)
    }

    /// Inorder sequence of elements
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(self)
    }

    pub fn preorder(&self) -> Preorder<'_, E> {
        Preorder::new(self)
    }

    pub fn postorder(&self) -> Postorder<'_, E> {
        Postorder::new(self)
    }

    pub fn breadth_first(&self) -> BreadthFirst<'_, E> {
        BreadthFirst::new(self)
    }
}

impl<'a, E> IntoIterator for &'a LinkedBinaryTree<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
