//! Process-wide single-instance construction.

use std::sync::{Arc, Mutex};

/// At-most-once construction of a shared value.
///
/// The existence check and the construction both happen inside one critical
/// section, so concurrent first-time callers yield exactly one instance.
/// Initializers passed after the first construction are ignored.
#[derive(Debug, Default)]
pub struct Singleton<T> {
    slot: Mutex<Option<Arc<T>>>,
}

impl<T> Singleton<T> {
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Return the instance, constructing it with `init` if absent.
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> Arc<T> {
        let mut slot = self.slot.lock().unwrap();
        match &*slot {
            Some(existing) => Arc::clone(existing),
            None => {
                let value = Arc::new(init());
                *slot = Some(Arc::clone(&value));
                value
            }
        }
    }

    /// Fallible variant of [`get_or_init`](Self::get_or_init).
    ///
    /// If `init` fails, nothing is cached and the next caller constructs
    /// again.
    pub fn get_or_try_init<E>(&self, init: impl FnOnce() -> Result<T, E>) -> Result<Arc<T>, E> {
        let mut slot = self.slot.lock().unwrap();
        match &*slot {
            Some(existing) => Ok(Arc::clone(existing)),
            None => {
                let value = Arc::new(init()?);
                *slot = Some(Arc::clone(&value));
                Ok(value)
            }
        }
    }

    /// Return the instance if it has been constructed.
    pub fn get(&self) -> Option<Arc<T>> {
        self.slot.lock().unwrap().clone()
    }

    /// Drop the cached instance so the next `get_or_init` constructs anew.
    ///
    /// Intended for test isolation; live `Arc` handles keep the previous
    /// value alive.
    pub fn reset(&self) {
        *self.slot.lock().unwrap() = None;
    }
}
