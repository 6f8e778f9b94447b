use crate::error::CollectionError;
use crate::Collection;
use parking_lot::{Mutex, MutexGuard};

/// Collection shared between threads behind a mutex.
///
/// Each operation holds the lock for its whole duration. Compound
/// operations spanning several calls should go through [`Synchronized::lock`].
#[derive(Debug, Default)]
pub struct Synchronized<C> {
    inner: Mutex<C>,
}

impl<C: Collection> Synchronized<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, C> {
        self.inner.lock()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn contains(&self, value: &C::Item) -> bool {
        self.inner.lock().contains(value)
    }

    pub fn add(&self, value: C::Item) -> Result<bool, CollectionError> {
        self.inner.lock().add(value)
    }

    pub fn remove(&self, value: &C::Item) -> Result<bool, CollectionError> {
        self.inner.lock().remove(value)
    }

    pub fn remove_if(
        &self,
        filter: impl FnMut(&C::Item) -> bool,
    ) -> Result<bool, CollectionError> {
        self.inner.lock().remove_if(filter)
    }

    pub fn clear(&self) -> Result<(), CollectionError> {
        self.inner.lock().clear()
    }

    /// Copies the current elements out under the lock
    pub fn snapshot(&self) -> Vec<C::Item>
    where
        C::Item: Clone,
    {
        self.inner.lock().to_vec()
    }

    pub fn into_inner(self) -> C {
        self.inner.into_inner()
    }
}
