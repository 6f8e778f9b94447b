use crate::cursor::{DrainAll, DrainCursor};
use crate::error::CollectionError;
use crate::filter::FallibleFilter;
use crate::{Collection, CollectionKind, HasLength, Iterable};
use arrayvec::ArrayVec;
use tracing::debug;

impl<const N: usize, T> HasLength for ArrayVec<T, N> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<const N: usize, T> Iterable for ArrayVec<T, N> {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter()
    }
}

impl<const N: usize, T> DrainAll for ArrayVec<T, N> {
    type Item = T;

    fn drain_all(&mut self) -> Vec<T> {
        self.drain(..).collect()
    }
}

/// Bounded sequence: adding to a full vector fails instead of dropping the value
impl<const N: usize, T: PartialEq> Collection for ArrayVec<T, N> {
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
        if self.try_push(value).is_err() {
            debug!(capacity = N, "refusing to add to a full array vector");
            return Err(CollectionError::IllegalState(format!(
                "capacity of {N} elements is exhausted"
            )));
        }
        Ok(true)
    }

    fn remove(&mut self, value: &T) -> Result<bool, CollectionError> {
        let Some(index) = self.as_slice().iter().position(|item| item == value) else {
            return Ok(false);
        };
        ArrayVec::remove(self, index);
        Ok(true)
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        ArrayVec::clear(self);
        Ok(())
    }

    fn try_remove_if<F, E>(&mut self, filter: F) -> Result<bool, E>
    where
        F: FnMut(&T) -> Result<bool, E>,
        E: From<CollectionError>,
    {
        let mut filter = FallibleFilter::new(filter);
        ArrayVec::retain(self, |value| filter.keep(&*value));
        filter.finish()
    }
}
