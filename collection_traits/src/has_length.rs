use crate::HasLength;
use std::collections::{BTreeSet, VecDeque};

#[duplicate::duplicate_item(
    ty(T);
    [ Vec<T> ];
    [ VecDeque<T> ];
    [ BTreeSet<T> ];
)]
impl<T> HasLength for ty([T]) {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<const N: usize, T> HasLength for [T; N] {
    fn len(&self) -> usize {
        N
    }
}
