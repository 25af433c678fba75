//! # Binarbor
//!
//! Positional binary trees for Rust.
//!
//! ## Overview
//!
//! A [`LinkedBinaryTree`] owns its nodes in a generational arena and hands out
//! [`Position`] handles instead of references. Every mutation checks the
//! binary tree shape: a node has at most a left and a right child, a root can
//! only be added to an empty tree, only nodes with at most one child can be
//! removed, and subtrees are only attached to leaves. Rejected mutations
//! return a [`TreeError`] and leave the tree untouched.
//!
//! ```
//! use binarbor::LinkedBinaryTree;
//!
//! let mut tree = LinkedBinaryTree::new();
//! let a = tree.add_root("A").unwrap();
//! let b = tree.add_left(a, "B").unwrap();
//! tree.add_right(a, "C").unwrap();
//!
//! assert_eq!(tree.parent(b).unwrap(), Some(a));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), ["B", "A", "C"]);
//! ```

mod compare;
mod display;
mod error;
mod hash;
mod id;
mod node;
mod position;
mod tree;

pub mod iterator;

#[cfg(test)]
mod test;

pub use error::{ErrorKind, Result, TreeError};
pub use id::*;
pub use node::Side;
pub use position::Position;
pub use tree::LinkedBinaryTree;
