#![forbid(clippy::unconditional_recursion)]
//! Contract shared by all mutable groups of elements: sequences, sets and
//! bags.
//!
//! Every mutating operation is optional. An implementation that does not
//! support a category of mutation reports [`CollectionError::Unsupported`],
//! and any refusal other than "this element is already present" is an
//! error rather than an `Ok(false)`.

use std::any::type_name;
use std::hash::Hash;

pub use crate::cursor::{Cursor, DrainAll, DrainCursor, ReadOnlyCursor};
pub use crate::error::{CollectionError, Operation};
pub use crate::ext::{CollectionExt, DisplayElements};
pub use crate::stream::{Execution, Stream};
pub use crate::synchronized::Synchronized;
pub use crate::unmodifiable::Unmodifiable;
pub use crate::validated::{reject_none, Validated};

pub mod cursor;
pub mod equality;
pub mod error;
pub mod ext;
pub mod stream;
pub mod synchronized;
pub mod unmodifiable;
pub mod validated;

mod array;
mod btree_set;
mod filter;
mod has_length;
mod hash_set;
mod slice;
mod vec;
mod vec_deque;

#[cfg(feature = "arrayvec")]
mod arrayvec;
#[cfg(feature = "ordermap")]
mod order_map;
#[cfg(feature = "smallvec")]
mod smallvec;

#[cfg(test)]
mod tests;

pub trait HasLength {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait Iterable {
    type Item;

    fn iter(&self) -> impl Iterator<Item = &Self::Item>;
}

/// How a collection compares itself to other collections
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    /// Ordered, duplicates allowed
    Sequence,
    /// Unique elements, order irrelevant for equality
    Set,
    /// Duplicates allowed, order irrelevant for equality
    Bag,
}

pub trait Collection: HasLength + Iterable {
    type Cursor<'a>: Cursor<Item = Self::Item>
    where
        Self: 'a;

    fn kind(&self) -> CollectionKind;

    fn contains(&self, value: &Self::Item) -> bool;

    /// Traversal that can remove the element it last yielded
    fn cursor(&mut self) -> Self::Cursor<'_>;

    /// Inserts `value`, returning whether the collection changed.
    ///
    /// `Ok(false)` is only allowed when the value is already present and
    /// the collection does not permit duplicates.
    fn add(&mut self, value: Self::Item) -> Result<bool, CollectionError>;

    /// Removes at most one element equal to `value`
    fn remove(&mut self, value: &Self::Item) -> Result<bool, CollectionError>;

    fn clear(&mut self) -> Result<(), CollectionError>;

    fn contains_all<O>(&self, other: &O) -> bool
    where
        O: Iterable<Item = Self::Item> + ?Sized,
    {
        other.iter().all(|value| self.contains(value))
    }

    fn add_all<O>(&mut self, other: &O) -> Result<bool, CollectionError>
    where
        O: Iterable<Item = Self::Item> + ?Sized,
        Self::Item: Clone,
    {
        self.extend_from(other.iter().cloned())
    }

    /// Adds every value produced by `values`, stopping at the first refusal
    fn extend_from<I>(&mut self, values: I) -> Result<bool, CollectionError>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let mut changed = false;
        for value in values {
            changed |= self.add(value)?;
        }
        Ok(changed)
    }

    fn remove_all<O>(&mut self, other: &O) -> Result<bool, CollectionError>
    where
        O: Collection<Item = Self::Item> + ?Sized,
    {
        self.remove_if(|value| other.contains(value))
    }

    fn retain_all<O>(&mut self, other: &O) -> Result<bool, CollectionError>
    where
        O: Collection<Item = Self::Item> + ?Sized,
    {
        self.remove_if(|value| !other.contains(value))
    }

    fn remove_if<F>(&mut self, mut filter: F) -> Result<bool, CollectionError>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.try_remove_if(|value| Ok::<_, CollectionError>(filter(value)))
    }

    /// Removes every element for which `filter` returns `Ok(true)`.
    ///
    /// Elements are removed as they are visited. If `filter` fails, the
    /// error is returned and elements removed before it stay removed.
    fn try_remove_if<F, E>(&mut self, mut filter: F) -> Result<bool, E>
    where
        F: FnMut(&Self::Item) -> Result<bool, E>,
        E: From<CollectionError>,
    {
        let mut cursor = self.cursor();
        let mut removed = false;
        while let Some(value) = cursor.advance() {
            if filter(value)? {
                cursor.remove_current()?;
                removed = true;
            }
        }
        Ok(removed)
    }

    fn to_vec(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Copies all elements into `buffer`, converting each into `B`.
    ///
    /// The buffer is reused when its capacity fits every element,
    /// otherwise a new one of exactly the required capacity is allocated.
    fn export_into<B>(&self, mut buffer: Vec<B>) -> Result<Vec<B>, CollectionError>
    where
        B: TryFrom<Self::Item>,
        Self::Item: Clone,
    {
        let len = self.len();
        if buffer.capacity() < len {
            buffer = Vec::with_capacity(len);
        } else {
            buffer.clear();
        }

        for (index, value) in self.iter().enumerate() {
            let value = B::try_from(value.clone()).map_err(|_| {
                CollectionError::ArrayStoreMismatch {
                    buffer: type_name::<B>(),
                    index,
                }
            })?;
            buffer.push(value);
        }

        Ok(buffer)
    }

    /// Calls `allocate` with a zero length and exports into the result
    fn export_with<B, A>(&self, allocate: A) -> Result<Vec<B>, CollectionError>
    where
        A: FnOnce(usize) -> Vec<B>,
        B: TryFrom<Self::Item>,
        Self::Item: Clone,
    {
        self.export_into(allocate(0))
    }

    /// Value comparison restricted to collections of the same kind.
    ///
    /// Bags are compared by pairwise scanning, which is quadratic; use
    /// [`equality::bag_eq`] directly when elements are hashable.
    fn content_eq<O>(&self, other: &O) -> bool
    where
        O: Collection<Item = Self::Item> + ?Sized,
        Self::Item: PartialEq,
    {
        match (self.kind(), other.kind()) {
            (CollectionKind::Sequence, CollectionKind::Sequence) => {
                equality::sequence_eq(self, other)
            }
            (CollectionKind::Set, CollectionKind::Set) => equality::set_eq(self, other),
            (CollectionKind::Bag, CollectionKind::Bag) => equality::bag_eq_by_scan(self, other),
            _ => false,
        }
    }

    /// Hash consistent with [`Collection::content_eq`]
    fn content_hash(&self) -> u64
    where
        Self::Item: Hash,
    {
        match self.kind() {
            CollectionKind::Sequence => equality::ordered_hash(self.iter()),
            CollectionKind::Set | CollectionKind::Bag => equality::unordered_hash(self.iter()),
        }
    }
}
