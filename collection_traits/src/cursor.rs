use crate::error::{CollectionError, Operation};
use tracing::trace;

/// Single-use traversal that can remove the element it last yielded.
///
/// The cursor holds the collection's exclusive borrow, so the collection
/// cannot be modified behind its back.
pub trait Cursor {
    type Item;

    fn advance(&mut self) -> Option<&Self::Item>;

    /// Removes the element returned by the last [`Cursor::advance`].
    ///
    /// Fails with [`CollectionError::IllegalState`] if nothing was yielded
    /// yet or the element was already removed.
    fn remove_current(&mut self) -> Result<Self::Item, CollectionError>;
}

/// Storage whose elements can be moved out while the storage itself, with
/// its allocation and hasher, stays in place
pub trait DrainAll {
    type Item;

    fn drain_all(&mut self) -> Vec<Self::Item>;
}

/// Cursor that moves the collection's elements out and puts back every
/// element that was not removed, in traversal order.
///
/// Dropping the cursor early restores the untraversed rest.
pub struct DrainCursor<'a, C>
where
    C: DrainAll + Extend<<C as DrainAll>::Item>,
{
    target: &'a mut C,
    pending: std::vec::IntoIter<<C as DrainAll>::Item>,
    current: Option<<C as DrainAll>::Item>,
    removed: usize,
}

impl<'a, C> DrainCursor<'a, C>
where
    C: DrainAll + Extend<<C as DrainAll>::Item>,
{
    pub fn new(target: &'a mut C) -> Self {
        let pending = target.drain_all().into_iter();
        Self {
            target,
            pending,
            current: None,
            removed: 0,
        }
    }
}

impl<C> Cursor for DrainCursor<'_, C>
where
    C: DrainAll + Extend<<C as DrainAll>::Item>,
{
    type Item = <C as DrainAll>::Item;

    fn advance(&mut self) -> Option<&Self::Item> {
        self.target.extend(self.current.take());
        self.current = self.pending.next();
        self.current.as_ref()
    }

    fn remove_current(&mut self) -> Result<Self::Item, CollectionError> {
        let value = self.current.take().ok_or_else(|| {
            CollectionError::IllegalState("cursor has no current element".to_string())
        })?;
        self.removed += 1;
        Ok(value)
    }
}

impl<C> Drop for DrainCursor<'_, C>
where
    C: DrainAll + Extend<<C as DrainAll>::Item>,
{
    fn drop(&mut self) {
        self.target.extend(self.current.take());
        self.target.extend(&mut self.pending);
        trace!(removed = self.removed, "drain cursor released");
    }
}

/// Cursor over elements that cannot be removed
pub struct ReadOnlyCursor<'a, T> {
    elements: Box<dyn Iterator<Item = &'a T> + 'a>,
}

impl<'a, T> ReadOnlyCursor<'a, T> {
    pub fn new(elements: impl Iterator<Item = &'a T> + 'a) -> Self {
        Self {
            elements: Box::new(elements),
        }
    }
}

impl<T> Cursor for ReadOnlyCursor<'_, T> {
    type Item = T;

    fn advance(&mut self) -> Option<&T> {
        self.elements.next()
    }

    fn remove_current(&mut self) -> Result<T, CollectionError> {
        Err(CollectionError::unsupported(Operation::CursorRemove))
    }
}
