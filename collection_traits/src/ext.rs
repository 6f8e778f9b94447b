use crate::error::CollectionError;
use crate::stream::{Execution, Stream};
use crate::Collection;
use itertools::Itertools;
use num_traits::Bounded;
use std::any::{type_name, Any};
use std::fmt::{Display, Formatter};

/// Operations derived purely from the [`Collection`] contract
pub trait CollectionExt: Collection {
    /// Element count converted to `N`, saturating at `N::max_value()`
    fn saturating_len<N>(&self) -> N
    where
        N: TryFrom<usize> + Bounded,
    {
        N::try_from(self.len()).unwrap_or_else(|_| N::max_value())
    }

    /// Lazy sequential sequence over the elements
    fn stream(&self) -> Stream<'_, Self> {
        Stream::new(self, Execution::Sequential)
    }

    /// Lazy sequence whose terminal operations may run on the rayon pool
    fn parallel_stream(&self) -> Stream<'_, Self> {
        Stream::new(self, Execution::Parallel)
    }

    fn stream_with(&self, execution: Execution) -> Stream<'_, Self> {
        Stream::new(self, execution)
    }

    /// Membership test for a value of unknown type
    fn contains_any(&self, candidate: &dyn Any) -> Result<bool, CollectionError>
    where
        Self::Item: Any,
    {
        let candidate = downcast::<Self::Item>(candidate)?;
        Ok(self.contains(candidate))
    }

    fn remove_any(&mut self, candidate: &dyn Any) -> Result<bool, CollectionError>
    where
        Self::Item: Any,
    {
        let candidate = downcast::<Self::Item>(candidate)?;
        self.remove(candidate)
    }

    /// Renders the elements as `[a, b, c]` in iteration order
    fn display(&self) -> DisplayElements<'_, Self>
    where
        Self::Item: Display,
    {
        DisplayElements(self)
    }
}

impl<C: Collection + ?Sized> CollectionExt for C {}

fn downcast<T: Any>(candidate: &dyn Any) -> Result<&T, CollectionError> {
    candidate
        .downcast_ref::<T>()
        .ok_or_else(|| CollectionError::TypeMismatch {
            expected: type_name::<T>(),
        })
}

pub struct DisplayElements<'a, C: ?Sized>(&'a C);

impl<C> Display for DisplayElements<'_, C>
where
    C: Collection + ?Sized,
    C::Item: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.iter().format(", "))
    }
}
