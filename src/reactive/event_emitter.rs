//! EventEmitter<T>: a simple typed pub/sub primitive.
//!
//! Listeners are stored as `Arc<dyn Fn(&T)>` so snapshots are cheap.
//! Snapshot-on-emit semantics mean:
//!   - A listener removed *during* emission is still called in that round.
//!   - A listener added *during* emission is NOT called until the next emit.
//!   - A `once` listener is unregistered before its first call runs.
//!
//! Panics inside a listener propagate to the caller of `emit`, which is the
//! mutating collection method that published the event.
//!
//! All methods take `&self` (interior mutability via `parking_lot::Mutex`),
//! so listeners can call `on()`/`off()` during `emit()` without deadlocking.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

/// A listener ID returned by [`EventEmitter::on`] that can be passed to
/// [`EventEmitter::off`] to remove the listener.
pub type ListenerId = u64;

/// Closure type for event listeners.
pub type ListenerFn<T> = dyn Fn(&T) + Send + Sync;

struct Listener<T> {
    id: ListenerId,
    callback: Arc<ListenerFn<T>>,
    once: bool,
}

/// Typed synchronous event emitter.
///
/// `T` is the event payload type. Internal state is protected by a
/// `parking_lot::Mutex` that is never held during callbacks.
pub struct EventEmitter<T> {
    listeners: Mutex<Vec<Listener<T>>>,
    next_id: AtomicU64,
}

impl<T> EventEmitter<T> {
    /// Create a new, empty emitter.
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register `callback` and return its [`ListenerId`].
    pub fn on(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> ListenerId {
        self.register(Arc::new(callback), false)
    }

    /// Register `callback` for the next emission only.
    ///
    /// The returned id can still be passed to [`off`](Self::off) to cancel
    /// the listener before it fires.
    pub fn once(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> ListenerId {
        self.register(Arc::new(callback), true)
    }

    fn register(&self, callback: Arc<ListenerFn<T>>, once: bool) -> ListenerId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().push(Listener { id, callback, once });
        id
    }

    /// Remove the listener identified by `id`.
    ///
    /// Does nothing if `id` is not present (safe to call multiple times).
    pub fn off(&self, id: ListenerId) {
        self.listeners.lock().retain(|l| l.id != id);
    }

    /// Emit `event` to all currently registered listeners, in registration
    /// order, on the caller's stack.
    pub fn emit(&self, event: &T) {
        let snapshot: Vec<Arc<ListenerFn<T>>> = {
            let mut guard = self.listeners.lock();
            let snapshot = guard.iter().map(|l| Arc::clone(&l.callback)).collect();
            guard.retain(|l| !l.once);
            snapshot
        };
        // Lock is released, so callbacks can safely call on()/off().
        for cb in snapshot {
            cb(event);
        }
    }

    /// Number of currently registered listeners.
    pub fn size(&self) -> usize {
        self.listeners.lock().len()
    }

    pub fn has_listeners(&self) -> bool {
        !self.listeners.lock().is_empty()
    }
}

impl<T> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for EventEmitter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.size())
            .finish()
    }
}
