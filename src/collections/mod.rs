//! The plain containers the [`Tree`][crate::Tree] and [`UnionFind`][crate::UnionFind] are built
//! from. Every operation that can grow a buffer reports allocation failure as
//! [`Error::ResourceExhaustion`][crate::Error::ResourceExhaustion] instead of aborting, and every
//! indexed access is bounds checked.

mod array;
mod hash_table;
mod list;
mod stack;

pub use array::DynamicArray;
pub use hash_table::HashTable;
pub use list::{IntoIter as ListIntoIter, Iter as ListIter, List};
pub use stack::Stack;
