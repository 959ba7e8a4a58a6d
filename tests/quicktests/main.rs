use quickcheck::{Arbitrary, Gen};

mod tree;

/// An enum for the various kinds of "things" to do to
/// a binary search tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Remove the value from the data structure
    Delete(T),
    /// Rebuild the tree to minimal height
    Rebalance,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Rebalancing is rarer than the
    /// others so trees get a chance to drift out of shape between rebuilds.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2]) {
            Some(0) => Op::Insert(T::arbitrary(g)),
            Some(1) => Op::Delete(T::arbitrary(g)),
            _ => Op::Rebalance,
        }
    }
}
