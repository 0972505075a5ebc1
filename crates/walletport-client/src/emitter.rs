//! Named-event listener registry.
//!
//! Each emitting component owns one `Emitter`: the channel for wallet
//! push-events, the provider for application-facing events. Listeners for the
//! same name fire in registration order.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;

/// Listener callback. Receives the event payload (`Value::Null` when none).
pub type Listener = Arc<dyn Fn(&Value) + Send + Sync>;

/// Handle returned by `on`/`once`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Entry {
    id: ListenerId,
    once: bool,
    f: Listener,
}

pub struct Emitter {
    listeners: DashMap<String, Vec<Entry>>,
    seq: AtomicU64,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            listeners: DashMap::new(),
            seq: AtomicU64::new(1),
        }
    }

    pub fn on<F>(&self, event: &str, f: F) -> ListenerId
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.insert(event, false, Arc::new(f))
    }

    /// Like `on`, but the listener is removed before its first invocation.
    pub fn once<F>(&self, event: &str, f: F) -> ListenerId
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.insert(event, true, Arc::new(f))
    }

    pub fn off(&self, event: &str, id: ListenerId) -> bool {
        let removed = match self.listeners.get_mut(event) {
            Some(mut list) => {
                let before = list.len();
                list.retain(|e| e.id != id);
                list.len() != before
            }
            None => false,
        };
        self.listeners.remove_if(event, |_, list| list.is_empty());
        removed
    }

    /// Drop all listeners for `event`, or for every event when `None`.
    pub fn remove_all(&self, event: Option<&str>) {
        match event {
            Some(name) => {
                self.listeners.remove(name);
            }
            None => self.listeners.clear(),
        }
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.get(event).map(|l| l.len()).unwrap_or(0)
    }

    pub fn event_names(&self) -> Vec<String> {
        self.listeners
            .iter()
            .filter(|e| !e.value().is_empty())
            .map(|e| e.key().clone())
            .collect()
    }

    /// Invoke every listener registered for `event`, in registration order.
    /// Returns how many listeners ran.
    ///
    /// The registry lock is released before any listener runs, so listeners
    /// may subscribe or unsubscribe. A panicking listener is logged and the
    /// remaining ones still fire.
    pub fn emit(&self, event: &str, payload: &Value) -> usize {
        let snapshot: Vec<Listener> = match self.listeners.get_mut(event) {
            Some(mut list) => {
                let fs = list.iter().map(|e| Arc::clone(&e.f)).collect();
                list.retain(|e| !e.once);
                fs
            }
            None => return 0,
        };
        self.listeners.remove_if(event, |_, list| list.is_empty());

        for f in &snapshot {
            if catch_unwind(AssertUnwindSafe(|| f(payload))).is_err() {
                tracing::warn!(event, "listener panicked");
            }
        }
        snapshot.len()
    }

    fn insert(&self, event: &str, once: bool, f: Listener) -> ListenerId {
        let id = ListenerId(self.seq.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .entry(event.to_string())
            .or_insert_with(Vec::new)
            .push(Entry { id, once, f });
        id
    }
}
