use crate::cursor::ReadOnlyCursor;
use crate::error::{CollectionError, Operation};
use crate::{Collection, CollectionKind, HasLength, Iterable};

/// Read-only view over a borrowed collection.
///
/// Queries go to the backing collection. Every mutation, including removal
/// through a cursor, fails with [`CollectionError::Unsupported`].
#[derive(Debug)]
pub struct Unmodifiable<'a, C: ?Sized> {
    inner: &'a C,
}

impl<'a, C: ?Sized> Unmodifiable<'a, C> {
    pub fn new(inner: &'a C) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &'a C {
        self.inner
    }
}

impl<C: ?Sized> Clone for Unmodifiable<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Unmodifiable<'_, C> {}

impl<C: HasLength + ?Sized> HasLength for Unmodifiable<'_, C> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<C: Iterable + ?Sized> Iterable for Unmodifiable<'_, C> {
    type Item = C::Item;

    fn iter(&self) -> impl Iterator<Item = &Self::Item> {
        self.inner.iter()
    }
}

impl<C: Collection + ?Sized> Collection for Unmodifiable<'_, C> {
    type Cursor<'a>
        = ReadOnlyCursor<'a, C::Item>
    where
        Self: 'a;

    fn kind(&self) -> CollectionKind {
        self.inner.kind()
    }

    fn contains(&self, value: &Self::Item) -> bool {
        self.inner.contains(value)
    }

    fn cursor(&mut self) -> Self::Cursor<'_> {
        ReadOnlyCursor::new(self.inner.iter())
    }

    fn add(&mut self, _value: Self::Item) -> Result<bool, CollectionError> {
        Err(CollectionError::unsupported(Operation::Add))
    }

    fn remove(&mut self, _value: &Self::Item) -> Result<bool, CollectionError> {
        Err(CollectionError::unsupported(Operation::Remove))
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        Err(CollectionError::unsupported(Operation::Clear))
    }

    fn extend_from<I>(&mut self, values: I) -> Result<bool, CollectionError>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        match values.into_iter().next() {
            Some(_) => Err(CollectionError::unsupported(Operation::Add)),
            None => Ok(false),
        }
    }
}
