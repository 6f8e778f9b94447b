use crate::cursor::{DrainAll, DrainCursor};
use crate::error::CollectionError;
use crate::filter::FallibleFilter;
use crate::{Collection, CollectionKind, Iterable};
use std::collections::BTreeSet;

impl<T> Iterable for BTreeSet<T> {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &T> {
        BTreeSet::iter(self)
    }
}

/// Tree sets carry no allocation or hasher worth keeping
impl<T> DrainAll for BTreeSet<T> {
    type Item = T;

    fn drain_all(&mut self) -> Vec<T> {
        std::mem::take(self).into_iter().collect()
    }
}

impl<T: Ord> Collection for BTreeSet<T> {
    type Cursor<'a>
        = DrainCursor<'a, Self>
    where
        Self: 'a;

    fn kind(&self) -> CollectionKind {
        CollectionKind::Set
    }

    fn contains(&self, value: &T) -> bool {
        BTreeSet::contains(self, value)
    }

    fn cursor(&mut self) -> Self::Cursor<'_> {
        DrainCursor::new(self)
    }

    fn add(&mut self, value: T) -> Result<bool, CollectionError> {
        Ok(self.insert(value))
    }

    fn remove(&mut self, value: &T) -> Result<bool, CollectionError> {
        Ok(BTreeSet::remove(self, value))
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        BTreeSet::clear(self);
        Ok(())
    }

    fn try_remove_if<F, E>(&mut self, filter: F) -> Result<bool, E>
    where
        F: FnMut(&T) -> Result<bool, E>,
        E: From<CollectionError>,
    {
        let mut filter = FallibleFilter::new(filter);
        BTreeSet::retain(self, |value| filter.keep(value));
        filter.finish()
    }
}
