//! Multi-subscriber change notification.
//!
//! [`ValueChanged`] is a cloneable handle to a shared subscriber list:
//! application code keeps one clone around to subscribe and unsubscribe
//! while the host tree owns the widget itself.

use std::sync::Arc;

use parking_lot::RwLock;

type Listener = Arc<dyn Fn(f32, f32) + Send + Sync>;

/// Token returned by [`ValueChanged::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// A value-changed event carrying `(lower, upper)`.
///
/// Clones share the same subscriber list. Emission happens synchronously on
/// the caller's thread, in subscription order.
#[derive(Clone, Default)]
pub struct ValueChanged {
    inner: Arc<RwLock<Registry>>,
}

impl ValueChanged {
    /// Creates an event with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and returns its subscription token.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(f32, f32) + Send + Sync + 'static,
    {
        let mut registry = self.inner.write();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(listener)));
        Subscription(id)
    }

    /// Removes a previously registered listener. Unknown tokens are ignored.
    pub fn unsubscribe(&self, subscription: Subscription) {
        let mut registry = self.inner.write();
        registry.listeners.retain(|(id, _)| *id != subscription.0);
    }

    /// Invokes every listener with the given values.
    pub fn emit(&self, lower: f32, upper: f32) {
        // Snapshot so listeners may subscribe/unsubscribe re-entrantly.
        let listeners: Vec<Listener> = self
            .inner
            .read()
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(lower, upper);
        }
    }

    /// The number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.read().listeners.len()
    }
}
