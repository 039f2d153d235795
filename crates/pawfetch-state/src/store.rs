//! Observable value container: one snapshot plus subscribe/notify semantics.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Callback<T> = Arc<dyn Fn(&Arc<T>) + Send + Sync>;

struct Registry<T> {
    snapshot: Arc<T>,
    subscribers: Vec<(u64, Callback<T>)>,
    next_id: u64,
}

/// In-memory holder of a single value with subscribe/notify semantics.
///
/// Mutations install a fresh snapshot and then invoke every subscriber, in
/// registration order, with the new value. Published snapshots are immutable:
/// a subscriber holding an old `Arc` never observes later changes through it.
pub struct Store<T> {
    registry: Arc<Mutex<Registry<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<T> Store<T> {
    /// Creates a store holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry {
                snapshot: Arc::new(initial),
                subscribers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<T> {
        Arc::clone(&self.lock().snapshot)
    }

    /// Replaces the value and notifies subscribers with the new snapshot.
    pub fn replace(&self, next: T) {
        self.install(|_| next);
    }

    /// Replaces the value with one derived from the current snapshot.
    ///
    /// The read-modify-write is a single atomic step from subscribers' point
    /// of view: no notification is delivered between the read and the write.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        self.install(f);
    }

    /// Registers `callback` to be invoked immediately with the current
    /// snapshot and again after every future mutation.
    ///
    /// Subscribers are notified in registration order. The returned handle
    /// removes the callback when dropped; call [`Subscription::detach`] to
    /// keep the subscription alive for the store's lifetime.
    pub fn subscribe(&self, callback: impl Fn(&Arc<T>) + Send + Sync + 'static) -> Subscription
    where
        T: Send + Sync + 'static,
    {
        let callback: Callback<T> = Arc::new(callback);
        let (id, snapshot) = {
            let mut registry = self.lock();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.subscribers.push((id, Arc::clone(&callback)));
            (id, Arc::clone(&registry.snapshot))
        };
        callback(&snapshot);

        let registry = Arc::downgrade(&self.registry);
        Subscription::new(move || unsubscribe(&registry, id))
    }

    fn install(&self, f: impl FnOnce(&T) -> T) {
        let (snapshot, callbacks) = {
            let mut registry = self.lock();
            let next = Arc::new(f(&registry.snapshot));
            registry.snapshot = Arc::clone(&next);
            let callbacks: Vec<Callback<T>> = registry
                .subscribers
                .iter()
                .map(|(_, callback)| Arc::clone(callback))
                .collect();
            (next, callbacks)
        };

        // Invoke outside the lock so a callback may read the store again.
        for callback in callbacks {
            callback(&snapshot);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Registry<T>> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn unsubscribe<T>(registry: &Weak<Mutex<Registry<T>>>, id: u64) {
    if let Some(registry) = registry.upgrade() {
        let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
        registry.subscribers.retain(|(entry, _)| *entry != id);
    }
}

/// Handle for an active store subscription.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Removes the callback from the store. Equivalent to dropping the handle.
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    /// Keeps the subscription alive without holding the handle.
    pub fn detach(mut self) {
        self.cancel = None;
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}
