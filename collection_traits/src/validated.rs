use crate::error::CollectionError;
use crate::{Collection, CollectionKind, HasLength, Iterable};
use tracing::debug;

/// Collection that checks every added element against a policy.
///
/// A rejected element surfaces the policy's error from [`Collection::add`],
/// the collection is left untouched.
#[derive(Debug, Clone)]
pub struct Validated<C, P> {
    inner: C,
    policy: P,
}

impl<C, P> Validated<C, P>
where
    C: Collection,
    P: Fn(&C::Item) -> Result<(), CollectionError>,
{
    /// Wraps `inner`, which must already satisfy `policy`
    pub fn new(inner: C, policy: P) -> Result<Self, CollectionError> {
        for value in inner.iter() {
            policy(value)?;
        }
        Ok(Self { inner, policy })
    }
}

impl<C, P> Validated<C, P> {
    pub fn get_ref(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

/// Policy refusing `None` elements
pub fn reject_none<T>(value: &Option<T>) -> Result<(), CollectionError> {
    match value {
        Some(_) => Ok(()),
        None => Err(CollectionError::NullRejected),
    }
}

impl<C: HasLength, P> HasLength for Validated<C, P> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<C: Iterable, P> Iterable for Validated<C, P> {
    type Item = C::Item;

    fn iter(&self) -> impl Iterator<Item = &Self::Item> {
        self.inner.iter()
    }
}

impl<C, P> Collection for Validated<C, P>
where
    C: Collection,
    P: Fn(&C::Item) -> Result<(), CollectionError>,
{
    type Cursor<'a>
        = C::Cursor<'a>
    where
        Self: 'a;

    fn kind(&self) -> CollectionKind {
        self.inner.kind()
    }

    fn contains(&self, value: &Self::Item) -> bool {
        self.inner.contains(value)
    }

    fn cursor(&mut self) -> Self::Cursor<'_> {
        self.inner.cursor()
    }

    fn add(&mut self, value: Self::Item) -> Result<bool, CollectionError> {
        if let Err(err) = (self.policy)(&value) {
            debug!(%err, "element refused by policy");
            return Err(err);
        }
        self.inner.add(value)
    }

    fn remove(&mut self, value: &Self::Item) -> Result<bool, CollectionError> {
        self.inner.remove(value)
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        self.inner.clear()
    }

    fn try_remove_if<F, E>(&mut self, filter: F) -> Result<bool, E>
    where
        F: FnMut(&Self::Item) -> Result<bool, E>,
        E: From<CollectionError>,
    {
        self.inner.try_remove_if(filter)
    }
}
