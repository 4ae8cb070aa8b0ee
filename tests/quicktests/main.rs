mod tree;
mod union_find;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a union-find in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Merge the sets holding both values
    Unify(T, T),
    /// Look up the representative of the value
    Find(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Unify(T::arbitrary(g), T::arbitrary(g)),
            2 => Op::Find(T::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
