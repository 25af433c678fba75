use crate::{LinkedBinaryTree, Position};

/// Builds the complete tree of height 2 used across the tests:
///
/// ```txt
///        A
///      /   \
///     B     C
///    / \   / \
///   D   E F   G
/// ```
///
/// Positions are returned in the order A, B, C, D, E, F, G.
pub fn sample_tree() -> (LinkedBinaryTree<&'static str>, [Position; 7]) {
    let mut tree = LinkedBinaryTree::new();
    let a = tree.add_root("A").unwrap();
    let b = tree.add_left(a, "B").unwrap();
    let c = tree.add_right(a, "C").unwrap();
    let d = tree.add_left(b, "D").unwrap();
    let e = tree.add_right(b, "E").unwrap();
    let f = tree.add_left(c, "F").unwrap();
    let g = tree.add_right(c, "G").unwrap();

    (tree, [a, b, c, d, e, f, g])
}
