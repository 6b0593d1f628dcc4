//! First-in first-out sequence of functions.

use std::fmt;

use super::callable::{Callable, Callables};
use crate::error::Error;

/// Functions called in the order they were pushed.
///
/// Each call is guarded with [`safe`](crate::control::safe), so a panicking
/// function yields an `Err` in its position and the remaining functions
/// still run.
///
/// # Examples
///
/// ```rust
/// use tagrail::queue;
///
/// let queue = queue![|x: i32| x * x, |x: i32| x + 2, |x: i32| x / 2];
/// let outcomes = queue.call(10);
///
/// assert_eq!(outcomes, vec![Ok(100), Ok(12), Ok(5)]);
/// ```
pub struct Queue<A, R> {
    callables: Callables<A, R>,
}

impl<A, R> Queue<A, R> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            callables: Callables::new(),
        }
    }

    /// Creates a queue from already boxed functions, keeping their order.
    pub fn from_fns<I>(functions: I) -> Self
    where
        I: IntoIterator<Item = Callable<A, R>>,
    {
        let mut queue = Self::new();
        for function in functions {
            queue.callables.push(function);
        }
        queue
    }

    /// Appends `function` to the back.
    pub fn push<F>(&mut self, function: F) -> &mut Self
    where
        F: Fn(A) -> R + 'static,
    {
        self.callables.push(Box::new(function));
        self
    }

    /// Calls every function with a clone of `args`, front to back.
    pub fn call(&self, args: A) -> Vec<Result<R, Error>>
    where
        A: Clone,
    {
        self.callables.call(&args, false)
    }

    /// Awaits every function with a clone of `args`, one after another,
    /// front to back.
    #[cfg(feature = "async")]
    pub async fn call_async<O>(&self, args: A) -> Vec<Result<O, Error>>
    where
        A: Clone,
        R: Future<Output = O>,
    {
        self.callables.call_async(&args, false).await
    }

    /// Returns the number of functions.
    #[inline]
    pub fn len(&self) -> usize {
        self.callables.len()
    }

    /// Returns `true` if there are no functions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A, R> Default for Queue<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, R> fmt::Debug for Queue<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Queue").field("len", &self.len()).finish()
    }
}

/// Builds a [`Queue`] from a list of functions.
///
/// Closures need annotated parameters, as the argument type is only known
/// from them.
#[macro_export]
macro_rules! queue {
    () => {
        $crate::collection::Queue::new()
    };
    ($($function:expr),+ $(,)?) => {{
        let mut queue = $crate::collection::Queue::new();
        $(queue.push($function);)+
        queue
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn calls_without_arguments() {
        let queue = crate::queue![|()| 10, |()| 20, |()| 30];
        let outcomes = queue.call(());

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes, vec![Ok(10), Ok(20), Ok(30)]);
    }

    #[rstest]
    fn a_panic_only_fails_its_own_slot() {
        let queue = crate::queue![
            |x: i32| x + 1,
            |_: i32| -> i32 { panic!("second one broke") },
            |x: i32| x - 1,
        ];

        assert_eq!(
            queue.call(1),
            vec![Ok(2), Err(Error::new("second one broke")), Ok(0)]
        );
    }

    #[rstest]
    fn from_fns_keeps_order() {
        let functions: Vec<Callable<&str, usize>> = vec![
            Box::new(str::len),
            Box::new(|text: &str| text.matches('a').count()),
        ];
        let queue = Queue::from_fns(functions);

        assert_eq!(queue.call("banana"), vec![Ok(6), Ok(3)]);
    }

    #[rstest]
    fn empty_queue_returns_nothing() {
        let queue: Queue<i32, i32> = crate::queue![];
        assert!(queue.is_empty());
        assert!(queue.call(1).is_empty());
    }

    #[cfg(feature = "async")]
    #[rstest]
    #[tokio::test]
    async fn call_async_awaits_in_order() {
        use futures::FutureExt;

        let mut queue = Queue::new();
        queue
            .push(|x: u32| async move { x.pow(2) }.boxed())
            .push(|x: u32| async move { x + 2 }.boxed())
            .push(|x: u32| async move { x / 2 }.boxed());

        assert_eq!(queue.call_async(10).await, vec![Ok(100), Ok(12), Ok(5)]);
    }
}
