use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<V> {
    /// Insert the value into the data structure
    Insert(V),
    /// Remove one occurrence of the value from the data structure
    Remove(V),
}

impl<V> Arbitrary for Op<V>
where
    V: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Insert(V::arbitrary(g)),
            1 => Op::Remove(V::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
