use crate::cursor::{DrainAll, DrainCursor};
use crate::error::CollectionError;
use crate::filter::FallibleFilter;
use crate::{Collection, CollectionKind, HasLength, Iterable};
use ordermap::OrderSet;
use std::hash::{BuildHasher, Hash};

#[allow(clippy::disallowed_types)]
impl<V, H> HasLength for OrderSet<V, H> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

#[allow(clippy::disallowed_types)]
impl<V, H> Iterable for OrderSet<V, H> {
    type Item = V;

    fn iter(&self) -> impl Iterator<Item = &V> {
        OrderSet::iter(self)
    }
}

#[allow(clippy::disallowed_types)]
impl<V, H> DrainAll for OrderSet<V, H> {
    type Item = V;

    fn drain_all(&mut self) -> Vec<V> {
        self.drain(..).collect()
    }
}

/// Insertion-ordered set; removal keeps the order of the remaining elements
#[allow(clippy::disallowed_types)]
impl<V, H> Collection for OrderSet<V, H>
where
    V: Hash + Eq,
    H: BuildHasher,
{
    type Cursor<'a>
        = DrainCursor<'a, Self>
    where
        Self: 'a;

    fn kind(&self) -> CollectionKind {
        CollectionKind::Set
    }

    fn contains(&self, value: &V) -> bool {
        OrderSet::contains(self, value)
    }

    fn cursor(&mut self) -> Self::Cursor<'_> {
        DrainCursor::new(self)
    }

    fn add(&mut self, value: V) -> Result<bool, CollectionError> {
        Ok(self.insert(value))
    }

    fn remove(&mut self, value: &V) -> Result<bool, CollectionError> {
        Ok(OrderSet::remove(self, value))
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        OrderSet::clear(self);
        Ok(())
    }

    fn try_remove_if<F, E>(&mut self, filter: F) -> Result<bool, E>
    where
        F: FnMut(&V) -> Result<bool, E>,
        E: From<CollectionError>,
    {
        let mut filter = FallibleFilter::new(filter);
        OrderSet::retain(self, |value| filter.keep(value));
        filter.finish()
    }
}
