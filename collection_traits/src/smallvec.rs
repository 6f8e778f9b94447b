use crate::cursor::{DrainAll, DrainCursor};
use crate::error::CollectionError;
use crate::filter::FallibleFilter;
use crate::{Collection, CollectionKind, HasLength, Iterable};
use smallvec::SmallVec;

impl<const N: usize, T> HasLength for SmallVec<[T; N]> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<const N: usize, T> Iterable for SmallVec<[T; N]> {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter()
    }
}

impl<const N: usize, T> DrainAll for SmallVec<[T; N]> {
    type Item = T;

    fn drain_all(&mut self) -> Vec<T> {
        self.drain(..).collect()
    }
}

impl<const N: usize, T: PartialEq> Collection for SmallVec<[T; N]> {
    type Cursor<'a>
        = DrainCursor<'a, Self>
    where
        Self: 'a;

    fn kind(&self) -> CollectionKind {
        CollectionKind::Sequence
    }

    fn contains(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }

    fn cursor(&mut self) -> Self::Cursor<'_> {
        DrainCursor::new(self)
    }

    fn add(&mut self, value: T) -> Result<bool, CollectionError> {
        self.push(value);
        Ok(true)
    }

    fn remove(&mut self, value: &T) -> Result<bool, CollectionError> {
        let Some(index) = self.as_slice().iter().position(|item| item == value) else {
            return Ok(false);
        };
        SmallVec::remove(self, index);
        Ok(true)
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        SmallVec::clear(self);
        Ok(())
    }

    fn try_remove_if<F, E>(&mut self, filter: F) -> Result<bool, E>
    where
        F: FnMut(&T) -> Result<bool, E>,
        E: From<CollectionError>,
    {
        let mut filter = FallibleFilter::new(filter);
        SmallVec::retain(self, |value| filter.keep(&*value));
        filter.finish()
    }
}
