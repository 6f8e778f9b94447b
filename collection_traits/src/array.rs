use crate::cursor::ReadOnlyCursor;
use crate::error::{CollectionError, Operation};
use crate::{Collection, CollectionKind, Iterable};

impl<const N: usize, T> Iterable for [T; N] {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter()
    }
}

/// Fixed-size arrays support queries only
impl<const N: usize, T: PartialEq> Collection for [T; N] {
    type Cursor<'a>
        = ReadOnlyCursor<'a, T>
    where
        Self: 'a;

    fn kind(&self) -> CollectionKind {
        CollectionKind::Sequence
    }

    fn contains(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }

    fn cursor(&mut self) -> Self::Cursor<'_> {
        ReadOnlyCursor::new(self.as_slice().iter())
    }

    fn add(&mut self, _value: T) -> Result<bool, CollectionError> {
        Err(CollectionError::unsupported(Operation::Add))
    }

    fn remove(&mut self, _value: &T) -> Result<bool, CollectionError> {
        Err(CollectionError::unsupported(Operation::Remove))
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        Err(CollectionError::unsupported(Operation::Clear))
    }
}
