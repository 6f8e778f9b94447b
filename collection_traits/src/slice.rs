use crate::{HasLength, Iterable};

impl<T> HasLength for [T] {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Iterable for [T] {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &T> {
        <[T]>::iter(self)
    }
}
