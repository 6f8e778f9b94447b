use crate::Collection;
use rayon::prelude::*;
use std::fmt::{Debug, Formatter};

/// Execution hint for terminal stream operations
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Execution {
    #[default]
    Sequential,
    Parallel,
}

type Elements<'a, T> = Box<dyn Iterator<Item = &'a T> + 'a>;

/// Lazy, one-shot sequence over a collection's elements.
///
/// Nothing is read from the collection until the first element is pulled.
/// The remaining length is always known exactly.
pub struct Stream<'a, C: Collection + ?Sized> {
    source: &'a C,
    execution: Execution,
    elements: Option<Elements<'a, C::Item>>,
    remaining: usize,
}

impl<'a, C: Collection + ?Sized> Stream<'a, C> {
    pub(crate) fn new(source: &'a C, execution: Execution) -> Self {
        Self {
            source,
            execution,
            elements: None,
            remaining: source.len(),
        }
    }

    pub fn execution(&self) -> Execution {
        self.execution
    }

    pub fn is_parallel(&self) -> bool {
        self.execution == Execution::Parallel
    }

    pub fn is_started(&self) -> bool {
        self.elements.is_some()
    }

    /// Converts the rest of the stream into a rayon parallel iterator
    pub fn into_par_iter(self) -> rayon::vec::IntoIter<&'a C::Item>
    where
        C::Item: Sync,
    {
        let snapshot: Vec<&'a C::Item> = self.collect();
        snapshot.into_par_iter()
    }

    /// Maps every remaining element and collects the results in order,
    /// honoring the execution hint
    pub fn map_collect<R, F>(self, map: F) -> Vec<R>
    where
        C::Item: Sync,
        R: Send,
        F: Fn(&'a C::Item) -> R + Sync + Send,
    {
        match self.execution {
            Execution::Sequential => self.map(map).collect(),
            Execution::Parallel => self.into_par_iter().map(map).collect(),
        }
    }
}

impl<'a, C: Collection + ?Sized> Iterator for Stream<'a, C> {
    type Item = &'a C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.source;
        let next = self
            .elements
            .get_or_insert_with(|| -> Elements<'a, C::Item> { Box::new(source.iter()) })
            .next();
        if next.is_some() {
            self.remaining = self.remaining.saturating_sub(1);
        } else {
            self.remaining = 0;
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<C: Collection + ?Sized> ExactSizeIterator for Stream<'_, C> {}

impl<C: Collection + ?Sized> Debug for Stream<'_, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stream")
            .field("execution", &self.execution)
            .field("started", &self.is_started())
            .field("remaining", &self.remaining)
            .finish()
    }
}
