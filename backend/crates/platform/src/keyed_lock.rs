//! Per-key async mutexes
//!
//! [`KeyedMutex`] hands out one async mutex per key. Holders of different
//! keys never wait on each other; holders of the same key are served in
//! FIFO order (tokio's mutex is fair). A slot is removed from the map when
//! its last holder or waiter goes away, including a waiter whose future is
//! dropped before it gets the lock. The map only ever contains keys with
//! in-flight work.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Debug, Default)]
pub struct KeyedMutex {
    slots: DashMap<String, Arc<Mutex<()>>>,
}

impl KeyedMutex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until `key` is free and take it.
    ///
    /// Cancel-safe: dropping the future while it waits releases the slot.
    pub async fn lock(&self, key: &str) -> KeyedGuard<'_> {
        // The dashmap shard lock must be released before awaiting.
        let mutex = Arc::clone(self.slots.entry(key.to_owned()).or_default().value());
        let slot = Slot {
            owner: self,
            key: key.to_owned(),
            mutex: Some(Arc::clone(&mutex)),
        };
        let guard = mutex.lock_owned().await;

        KeyedGuard {
            _guard: guard,
            slot,
        }
    }

    /// Number of keys with a holder or waiter
    pub fn active_keys(&self) -> usize {
        self.slots.len()
    }
}

/// One holder's or waiter's reference to a map entry
struct Slot<'a> {
    owner: &'a KeyedMutex,
    key: String,
    mutex: Option<Arc<Mutex<()>>>,
}

impl Drop for Slot<'_> {
    fn drop(&mut self) {
        // Release our Arc first; a count of 1 then means only the map holds it.
        // New holders clone under the shard lock, which remove_if also takes.
        self.mutex.take();
        self.owner
            .slots
            .remove_if(&self.key, |_, slot| Arc::strong_count(slot) == 1);
    }
}

/// Exclusive hold on one key of a [`KeyedMutex`]
#[must_use = "the key is released as soon as the guard is dropped"]
pub struct KeyedGuard<'a> {
    // Declared first so the mutex is unlocked before the slot is checked.
    _guard: OwnedMutexGuard<()>,
    slot: Slot<'a>,
}

impl KeyedGuard<'_> {
    pub fn key(&self) -> &str {
        &self.slot.key
    }
}
