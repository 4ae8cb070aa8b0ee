//! Error types shared by every structure in the crate.

use std::collections::TryReserveError;

/// Everything that can go wrong when operating on a `copse` structure.
///
/// Only [`ElementNotFound`][Error::ElementNotFound], [`EmptyTree`][Error::EmptyTree] and
/// [`ResourceExhaustion`][Error::ResourceExhaustion] are returned by [`Tree`][crate::Tree] and
/// [`UnionFind`][crate::UnionFind]. The remaining variants belong to the containers in
/// [`collections`][crate::collections]; the tree and the union-find never let them escape.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Growing a backing buffer failed.
    #[error("storage allocation failed")]
    ResourceExhaustion(#[from] TryReserveError),
    /// The requested value was never inserted.
    #[error("element not found")]
    ElementNotFound,
    /// A removal was attempted on a tree without a root.
    #[error("tree is empty")]
    EmptyTree,
    /// An index fell outside `[0, len)`.
    #[error("index {index} is out of bounds for length {len}")]
    OutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The length of the container at the time of the request.
        len: usize,
    },
    /// A hash table lookup missed.
    #[error("key not found")]
    NotFound,
    /// `pop` was called on an empty stack.
    #[error("stack is empty")]
    EmptyStack,
}

/// A `Result` defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
