use crate::cursor::{DrainAll, DrainCursor};
use crate::error::CollectionError;
use crate::filter::FallibleFilter;
use crate::{Collection, CollectionKind, Iterable};
use std::collections::VecDeque;

impl<T> Iterable for VecDeque<T> {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &T> {
        VecDeque::iter(self)
    }
}

impl<T> DrainAll for VecDeque<T> {
    type Item = T;

    fn drain_all(&mut self) -> Vec<T> {
        self.drain(..).collect()
    }
}

impl<T: PartialEq> Collection for VecDeque<T> {
    type Cursor<'a>
        = DrainCursor<'a, Self>
    where
        Self: 'a;

    fn kind(&self) -> CollectionKind {
        CollectionKind::Sequence
    }

    fn contains(&self, value: &T) -> bool {
        VecDeque::contains(self, value)
    }

    fn cursor(&mut self) -> Self::Cursor<'_> {
        DrainCursor::new(self)
    }

    fn add(&mut self, value: T) -> Result<bool, CollectionError> {
        self.push_back(value);
        Ok(true)
    }

    fn remove(&mut self, value: &T) -> Result<bool, CollectionError> {
        let Some(index) = VecDeque::iter(self).position(|item| item == value) else {
            return Ok(false);
        };
        VecDeque::remove(self, index);
        Ok(true)
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        VecDeque::clear(self);
        Ok(())
    }

    fn try_remove_if<F, E>(&mut self, filter: F) -> Result<bool, E>
    where
        F: FnMut(&T) -> Result<bool, E>,
        E: From<CollectionError>,
    {
        let mut filter = FallibleFilter::new(filter);
        VecDeque::retain(self, |value| filter.keep(value));
        filter.finish()
    }
}
