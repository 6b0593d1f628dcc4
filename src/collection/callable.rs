//! Storage and invocation shared by [`Queue`](super::Queue) and
//! [`Stack`](super::Stack).

use std::fmt;

use super::DoublyLinkedList;
use crate::control::safe;
use crate::error::Error;

/// A stored function taking `A` and returning `R`.
pub type Callable<A, R> = Box<dyn Fn(A) -> R>;

pub(super) struct Callables<A, R> {
    functions: DoublyLinkedList<Callable<A, R>>,
}

impl<A, R> Callables<A, R> {
    pub(super) const fn new() -> Self {
        Self {
            functions: DoublyLinkedList::new(),
        }
    }

    pub(super) fn push(&mut self, function: Callable<A, R>) {
        self.functions.insert(function);
    }

    pub(super) fn len(&self) -> usize {
        self.functions.len()
    }

    fn ordered(&self, reversed: bool) -> Box<dyn Iterator<Item = &Callable<A, R>> + '_> {
        if reversed {
            Box::new(self.functions.iter_rev())
        } else {
            Box::new(self.functions.iter())
        }
    }

    pub(super) fn call(&self, args: &A, reversed: bool) -> Vec<Result<R, Error>>
    where
        A: Clone,
    {
        tracing::trace!(functions = self.len(), reversed, "calling stored functions");
        self.ordered(reversed)
            .map(|function| safe(function, args.clone()))
            .collect()
    }

    #[cfg(feature = "async")]
    pub(super) async fn call_async<O>(&self, args: &A, reversed: bool) -> Vec<Result<O, Error>>
    where
        A: Clone,
        R: Future<Output = O>,
    {
        tracing::trace!(functions = self.len(), reversed, "awaiting stored functions");
        let mut outcomes = Vec::with_capacity(self.len());
        for function in self.ordered(reversed) {
            outcomes.push(crate::control::safe_async(function, args.clone()).await);
        }
        outcomes
    }
}

impl<A, R> fmt::Debug for Callables<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Callables")
            .field("len", &self.len())
            .finish()
    }
}
