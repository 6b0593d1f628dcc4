//! Last-in first-out sequence of functions.

use std::fmt;

use super::callable::{Callable, Callables};
use crate::error::Error;

/// Functions called from the most recently pushed to the first.
///
/// Shares its calling rules with [`Queue`](super::Queue): every call is
/// guarded with [`safe`](crate::control::safe) and gets its own clone of the
/// arguments.
///
/// # Examples
///
/// ```rust
/// use tagrail::stack;
///
/// let stack = stack![|x: i32| x * x, |x: i32| x + 2, |x: i32| x / 2];
///
/// assert_eq!(stack.call(10), vec![Ok(5), Ok(12), Ok(100)]);
/// ```
pub struct Stack<A, R> {
    callables: Callables<A, R>,
}

impl<A, R> Stack<A, R> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            callables: Callables::new(),
        }
    }

    /// Creates a stack from already boxed functions; the last one is on top.
    pub fn from_fns<I>(functions: I) -> Self
    where
        I: IntoIterator<Item = Callable<A, R>>,
    {
        let mut stack = Self::new();
        for function in functions {
            stack.callables.push(function);
        }
        stack
    }

    /// Puts `function` on top.
    pub fn push<F>(&mut self, function: F) -> &mut Self
    where
        F: Fn(A) -> R + 'static,
    {
        self.callables.push(Box::new(function));
        self
    }

    /// Calls every function with a clone of `args`, top to bottom.
    pub fn call(&self, args: A) -> Vec<Result<R, Error>>
    where
        A: Clone,
    {
        self.callables.call(&args, true)
    }

    /// Awaits every function with a clone of `args`, one after another,
    /// top to bottom.
    ///
    /// Distinct `async` closures return distinct future types, so stacks
    /// mixing them store boxed futures such as `futures::future::BoxFuture`.
    #[cfg(feature = "async")]
    pub async fn call_async<O>(&self, args: A) -> Vec<Result<O, Error>>
    where
        A: Clone,
        R: Future<Output = O>,
    {
        self.callables.call_async(&args, true).await
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

impl<A, R> Default for Stack<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, R> fmt::Debug for Stack<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Stack").field("len", &self.len()).finish()
    }
}

/// Builds a [`Stack`] from a list of functions; the last one ends on top.
#[macro_export]
macro_rules! stack {
    () => {
        $crate::collection::Stack::new()
    };
    ($($function:expr),+ $(,)?) => {{
        let mut stack = $crate::collection::Stack::new();
        $(stack.push($function);)+
        stack
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn calls_the_last_pushed_first() {
        let stack = crate::stack![|()| 10, |()| 20, |()| 30];
        assert_eq!(stack.call(()), vec![Ok(30), Ok(20), Ok(10)]);
    }

    #[rstest]
    fn each_function_gets_its_own_copy_of_the_arguments() {
        let stack = crate::stack![
            |mut values: Vec<i32>| {
                values.push(1);
                values.len()
            },
            |mut values: Vec<i32>| {
                values.push(2);
                values.len()
            },
        ];

        assert_eq!(stack.call(vec![0]), vec![Ok(2), Ok(2)]);
    }

    #[rstest]
    fn panics_are_captured_per_slot() {
        let stack = crate::stack![
            |text: &'static str| text.len(),
            |_: &'static str| -> usize { panic!("top failed") },
        ];

        assert_eq!(stack.call("abc"), vec![Err(Error::new("top failed")), Ok(3)]);
    }

    #[cfg(feature = "async")]
    #[rstest]
    #[tokio::test]
    async fn call_async_awaits_top_to_bottom() {
        use futures::FutureExt;

        let mut stack = Stack::new();
        stack
            .push(|x: f64| async move { x * x }.boxed())
            .push(|x: f64| async move { x + 2.0 }.boxed())
            .push(|x: f64| async move { x / 2.0 }.boxed());

        assert_eq!(stack.call_async(10.0).await, vec![Ok(5.0), Ok(12.0), Ok(100.0)]);
    }

    #[cfg(feature = "async")]
    #[rstest]
    #[tokio::test]
    async fn call_async_captures_panicking_futures() {
        use futures::FutureExt;

        let mut stack = Stack::new();
        stack
            .push(|x: u8| async move { x }.boxed())
            .push(|x: u8| {
                async move {
                    tokio::task::yield_now().await;
                    if x > 0 {
                        panic!("late failure");
                    }
                    x
                }
                .boxed()
            });

        let outcomes: Vec<Result<u8, Error>> = stack.call_async(7).await;
        assert_eq!(outcomes, vec![Err(Error::new("late failure")), Ok(7)]);
    }
}
