use crate::LinkedBinaryTree;

/// Tree Comparison
///
/// Two trees are equal when they have the same shape and equal elements at
/// corresponding nodes. Positions and tree ids take no part.
impl<E> PartialEq for LinkedBinaryTree<E>
where
    E: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.size() != other.size() {
            return false;
        }

        let mut stack = vec![(self.root, other.root)];
        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => continue,
                (Some(a), Some(b)) => {
                    let (Some(a), Some(b)) = (self.arena.get(a), other.arena.get(b)) else {
                        return false;
                    };
                    if a.element != b.element {
                        return false;
                    }
                    stack.push((a.left, b.left));
                    stack.push((a.right, b.right));
                }
                _ => return false,
            }
        }

        true
    }
}

impl<E> Eq for LinkedBinaryTree<E> where E: Eq {}

#[cfg(test)]
mod tests {
    use crate::{test::sample_tree, LinkedBinaryTree};

    #[test]
    fn same_shape_and_elements() {
        let (one, _) = sample_tree();
        let (two, _) = sample_tree();
        assert_eq!(one, two);
        assert_ne!(one.id(), two.id());
    }

    #[test]
    fn empty_trees_equal() {
        assert_eq!(LinkedBinaryTree::<u8>::new(), LinkedBinaryTree::new());
    }

    #[test]
    fn same_inorder_different_shape() {
        //  B        A
        // /          \
        // A           B
        let mut one = LinkedBinaryTree::new();
        let b = one.add_root("B").unwrap();
        one.add_left(b, "A").unwrap();

        let mut two = LinkedBinaryTree::new();
        let a = two.add_root("A").unwrap();
        two.add_right(a, "B").unwrap();

        assert!(one.iter().eq(two.iter()));
        assert_ne!(one, two);
    }

    #[test]
    fn differing_element() {
        let (one, _) = sample_tree();
        let (mut two, nodes) = sample_tree();
        two.set(nodes[3], "X").unwrap();
        assert_ne!(one, two);
    }
}
