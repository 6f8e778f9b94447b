use crate::cursor::{DrainAll, DrainCursor};
use crate::error::CollectionError;
use crate::filter::FallibleFilter;
use crate::{Collection, CollectionKind, Iterable};

impl<T> Iterable for Vec<T> {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter()
    }
}

impl<T> DrainAll for Vec<T> {
    type Item = T;

    fn drain_all(&mut self) -> Vec<T> {
        self.drain(..).collect()
    }
}

impl<T: PartialEq> Collection for Vec<T> {
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
        Vec::push(self, value);
        Ok(true)
    }

    fn remove(&mut self, value: &T) -> Result<bool, CollectionError> {
        match self.as_slice().iter().position(|item| item == value) {
            Some(index) => {
                Vec::remove(self, index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn clear(&mut self) -> Result<(), CollectionError> {
        Vec::clear(self);
        Ok(())
    }

    fn try_remove_if<F, E>(&mut self, filter: F) -> Result<bool, E>
    where
        F: FnMut(&T) -> Result<bool, E>,
        E: From<CollectionError>,
    {
        let mut filter = FallibleFilter::new(filter);
        Vec::retain(self, |value| filter.keep(value));
        filter.finish()
    }
}

#[cfg(test)]
mod test {
    use crate::Collection;

    #[test]
    fn remove_takes_first_match() {
        let mut items = vec![1, 2, 3, 2];

        assert_eq!(Collection::remove(&mut items, &2), Ok(true));
        assert_eq!(items, vec![1, 3, 2]);
        assert_eq!(Collection::remove(&mut items, &5), Ok(false));
    }

    #[test]
    fn predicate_failure_keeps_earlier_removals() {
        let mut items = vec![1, 2, 3, 4, 5, 6];

        let result = items.try_remove_if(|v| {
            if *v == 5 {
                Err(crate::CollectionError::IllegalState("five".to_string()))
            } else {
                Ok(v % 2 == 0)
            }
        });

        assert!(result.is_err());
        assert_eq!(items, vec![1, 3, 5, 6]);
    }
}
