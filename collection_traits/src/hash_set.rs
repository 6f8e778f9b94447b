use crate::cursor::{DrainAll, DrainCursor};
use crate::error::CollectionError;
use crate::filter::FallibleFilter;
use crate::{Collection, CollectionKind, HasLength, Iterable};
use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

impl<T, S> HasLength for HashSet<T, S> {
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }
}

impl<T, S> Iterable for HashSet<T, S> {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &T> {
        HashSet::iter(self)
    }
}

impl<T, S> DrainAll for HashSet<T, S> {
    type Item = T;

    fn drain_all(&mut self) -> Vec<T> {
        self.drain().collect()
    }
}

impl<T, S> Collection for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Cursor<'a>
        = DrainCursor<'a, Self>
    where
        Self: 'a;

    fn kind(&self) -> CollectionKind {
        CollectionKind::Set
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn cursor(&mut self) -> Self::Cursor<'_> {
        DrainCursor::new(self)
    }

    fn add(&mut self, value: T) -> Result<bool, CollectionError> {
        Ok(self.insert(value))
    }

    fn remove(&mut self, value: &T) -> Result<bool, CollectionError> {
        Ok(HashSet::remove(self, value))
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        HashSet::clear(self);
        Ok(())
    }

    fn try_remove_if<F, E>(&mut self, filter: F) -> Result<bool, E>
    where
        F: FnMut(&T) -> Result<bool, E>,
        E: From<CollectionError>,
    {
        let mut filter = FallibleFilter::new(filter);
        HashSet::retain(self, |value| filter.keep(value));
        filter.finish()
    }
}
