use generational_arena::Index;

/// Selects one of the two child slots of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Arena record for a single tree node. Links are arena indices; the parent
/// link is a back-reference and does not own.
#[derive(Debug)]
pub(crate) struct Node<E> {
    pub(crate) element: E,
    pub(crate) parent: Option<Index>,
    pub(crate) left: Option<Index>,
    pub(crate) right: Option<Index>,
}

impl<E> Node<E> {
    pub(crate) fn new(element: E, parent: Option<Index>) -> Self {
        Self {
            element,
            parent,
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<Index>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    /// Which slot of this node holds `child`, if any
    pub(crate) fn side_of(&self, child: Index) -> Option<Side> {
        if self.left == Some(child) {
            Some(Side::Left)
        } else if self.right == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Return the number of child nodes for this node
    pub(crate) fn num_children(&self) -> usize {
        self.left.is_some() as usize + self.right.is_some() as usize
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[cfg(test)]
mod tests {
    use generational_arena::Arena;

    use super::*;

    #[test]
    fn child_slots() {
        let mut arena = Arena::new();
        let parent = arena.insert(Node::new("parent", None));
        let child = arena.insert(Node::new("child", Some(parent)));

        let node = &mut arena[parent];
        assert!(node.is_leaf());

        node.set_child(Side::Right, Some(child));
        assert_eq!(node.child(Side::Right), Some(child));
        assert_eq!(node.child(Side::Left), None);
        assert_eq!(node.side_of(child), Some(Side::Right));
        assert_eq!(node.num_children(), 1);
        assert!(!node.is_leaf());

        node.set_child(Side::Right, None);
        assert_eq!(node.side_of(child), None);
        assert_eq!(node.num_children(), 0);
    }
}
