//! A synchronous publish/subscribe notifier.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

type Subscriber<A> = Arc<dyn Fn(&A) + Send + Sync>;

struct Registry<A> {
    next_id: AtomicU64,
    subscribers: Mutex<Vec<(u64, Subscriber<A>)>>,
}

impl<A> Registry<A> {
    fn snapshot(&self) -> Vec<Subscriber<A>> {
        self.subscribers
            .lock()
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect()
    }
}

/// Broadcasts a value to every subscriber, in subscription order.
///
/// `notify` works on a snapshot of the subscribers taken before the first
/// call, and the lock is released while subscribers run. A subscriber may
/// therefore subscribe or unsubscribe (itself or others) during a
/// notification; the change applies from the next `notify`.
///
/// Clones share the same subscribers.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicI64, Ordering};
/// use tagrail::control::PushSub;
///
/// let total = Arc::new(AtomicI64::new(0));
/// let pushsub = PushSub::new();
///
/// let counter = Arc::clone(&total);
/// let subscription = pushsub.subscribe(move |amount: &i64| {
///     counter.fetch_add(*amount, Ordering::SeqCst);
/// });
///
/// pushsub.notify(&5);
/// assert!(subscription.unsubscribe());
/// pushsub.notify(&5);
///
/// assert_eq!(total.load(Ordering::SeqCst), 5);
/// ```
pub struct PushSub<A> {
    registry: Arc<Registry<A>>,
}

impl<A> PushSub<A> {
    /// Creates a notifier without subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Registry {
                next_id: AtomicU64::new(0),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Registers `subscriber` and returns the handle that removes it.
    ///
    /// Registering the same function twice creates two subscriptions.
    pub fn subscribe<F>(&self, subscriber: F) -> Unsubscriber<A>
    where
        F: Fn(&A) + Send + Sync + 'static,
    {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry.subscribers.lock().push((id, Arc::new(subscriber)));
        tracing::debug!(id, "subscriber registered");

        Unsubscriber {
            registry: Arc::downgrade(&self.registry),
            id,
        }
    }

    /// Calls every current subscriber with `value`.
    pub fn notify(&self, value: &A) {
        let subscribers = self.registry.snapshot();
        tracing::trace!(subscribers = subscribers.len(), "notifying");
        for subscriber in subscribers {
            subscriber(value);
        }
    }

    /// Returns the number of subscriptions.
    pub fn len(&self) -> usize {
        self.registry.subscribers.lock().len()
    }

    /// Returns `true` if nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A> Default for PushSub<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for PushSub<A> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<A> fmt::Debug for PushSub<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PushSub")
            .field("subscribers", &self.len())
            .finish()
    }
}

/// Removes one subscription from a [`PushSub`].
///
/// Dropping the handle keeps the subscription alive.
pub struct Unsubscriber<A> {
    registry: Weak<Registry<A>>,
    id: u64,
}

impl<A> Unsubscriber<A> {
    /// Removes the subscription.
    ///
    /// Returns `true` if it was still registered, `false` if it had already
    /// been removed or the notifier is gone.
    pub fn unsubscribe(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };

        let mut subscribers = registry.subscribers.lock();
        let Some(position) = subscribers.iter().position(|(id, _)| *id == self.id) else {
            return false;
        };
        subscribers.remove(position);
        tracing::debug!(id = self.id, "subscriber removed");
        true
    }
}

impl<A> fmt::Debug for Unsubscriber<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Unsubscriber").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn notifies_in_subscription_order() {
        let total = Arc::new(Mutex::new(0.0_f64));
        let pushsub = PushSub::new();

        pushsub.notify(&5.0);
        assert!((*total.lock()).abs() < f64::EPSILON);

        let adder = Arc::clone(&total);
        let add = pushsub.subscribe(move |amount: &f64| *adder.lock() += amount);
        pushsub.notify(&5.0);
        assert!((*total.lock() - 5.0).abs() < f64::EPSILON);

        let divider = Arc::clone(&total);
        let divide = pushsub.subscribe(move |amount: &f64| *divider.lock() /= amount);
        pushsub.notify(&5.0);
        assert!((*total.lock() - 2.0).abs() < f64::EPSILON);

        assert!(divide.unsubscribe());
        pushsub.notify(&5.0);
        assert!((*total.lock() - 7.0).abs() < f64::EPSILON);

        assert!(add.unsubscribe());
        pushsub.notify(&51_235_467.0);
        assert!((*total.lock() - 7.0).abs() < f64::EPSILON);
        assert!(pushsub.is_empty());
    }

    #[rstest]
    fn unsubscribe_twice_reports_false() {
        let pushsub = PushSub::<()>::new();
        let subscription = pushsub.subscribe(|()| {});
        assert!(subscription.unsubscribe());
        assert!(!subscription.unsubscribe());
    }

    #[rstest]
    fn unsubscribing_during_notify_applies_next_time() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let pushsub = PushSub::<u8>::new();
        let slot: Arc<Mutex<Option<Unsubscriber<u8>>>> = Arc::new(Mutex::new(None));

        let first_calls = Arc::clone(&calls);
        let first_slot = Arc::clone(&slot);
        pushsub.subscribe(move |value| {
            first_calls.lock().push(("first", *value));
            if let Some(second) = first_slot.lock().as_ref() {
                second.unsubscribe();
            }
        });

        let second_calls = Arc::clone(&calls);
        *slot.lock() = Some(pushsub.subscribe(move |value| second_calls.lock().push(("second", *value))));

        pushsub.notify(&1);
        pushsub.notify(&2);

        assert_eq!(*calls.lock(), vec![("first", 1), ("second", 1), ("first", 2)]);
    }

    #[rstest]
    fn handles_outliving_the_notifier_are_inert() {
        let pushsub = PushSub::<i32>::new();
        let subscription = pushsub.subscribe(|_| {});
        drop(pushsub);
        assert!(!subscription.unsubscribe());
    }
}
