/// Adapts a fallible removal filter to a `retain` closure.
///
/// After the first failure every remaining element is kept and the error
/// is reported by [`FallibleFilter::finish`].
pub(crate) struct FallibleFilter<F, E> {
    filter: F,
    failure: Option<E>,
    removed: bool,
}

impl<F, E> FallibleFilter<F, E> {
    pub fn new(filter: F) -> Self {
        Self {
            filter,
            failure: None,
            removed: false,
        }
    }

    pub fn keep<T>(&mut self, value: &T) -> bool
    where
        F: FnMut(&T) -> Result<bool, E>,
    {
        if self.failure.is_some() {
            return true;
        }

        match (self.filter)(value) {
            Ok(true) => {
                self.removed = true;
                false
            }
            Ok(false) => true,
            Err(err) => {
                self.failure = Some(err);
                true
            }
        }
    }

    pub fn finish(self) -> Result<bool, E> {
        match self.failure {
            Some(err) => Err(err),
            None => Ok(self.removed),
        }
    }
}
