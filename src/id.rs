pub trait UniqueGenerator: std::fmt::Debug {
    type Output: std::fmt::Debug;
    /// Generate a unique value
    fn generate(&mut self) -> Self::Output;
}

#[derive(Default, Debug)]
pub(crate) struct UuidGenerator;

impl UniqueGenerator for UuidGenerator {
    type Output = uuid::Uuid;

    fn generate(&mut self) -> uuid::Uuid {
        uuid::Uuid::new_v4()
    }
}

/// Identity of a [`crate::LinkedBinaryTree`]. Positions carry the id of the tree
/// that issued them, so a handle from one tree is never resolved in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeId(uuid::Uuid);

impl TreeId {
    pub(crate) fn generate() -> Self {
        TreeId(UuidGenerator.generate())
    }
}

impl std::fmt::Display for TreeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
