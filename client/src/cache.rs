//! In-memory entity cache with coalesced misses

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::OnceCell;

/// A cached value with caller-specific context attached to the returned copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagged<V, A> {
    pub value: V,
    pub tag: A,
}

/// Name-keyed store of built entities.
///
/// Every read hands out an owned clone, so callers can never mutate what is
/// stored. Concurrent first requests for the same name share one in-flight
/// build: the first caller runs its builder and the others wait for its
/// result. A failed build stores nothing and returns the error to the caller
/// whose builder failed; the next waiter (or any later call) builds again.
///
/// Entries live until [`clear`](Self::clear) or until the cache is dropped.
pub struct EntityCache<V> {
    entries: Mutex<HashMap<String, Arc<OnceCell<V>>>>,
}

impl<V: Clone> EntityCache<V> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, Arc<OnceCell<V>>>> {
        // Guards are never held across a build, so a poisoned map is still consistent
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn slot(&self, name: &str) -> Arc<OnceCell<V>> {
        self.entries().entry(name.to_string()).or_default().clone()
    }

    /// Remove `slot` if it is still the empty slot registered for `name` and
    /// no other caller is waiting on it. Waiters retry the build themselves.
    fn discard(&self, name: &str, slot: &Arc<OnceCell<V>>) {
        let mut entries = self.entries();
        // Handles are only cloned under this lock: one in the map, one here
        if let Some(current) = entries.get(name)
            && Arc::ptr_eq(current, slot)
            && Arc::strong_count(slot) == 2
            && !current.initialized()
        {
            entries.remove(name);
        }
    }

    /// Return a copy of the entry for `name`, running `build` on a miss
    pub async fn get_or_build<F, Fut, E>(&self, name: &str, build: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let slot = self.slot(name);

        if let Some(value) = slot.get() {
            tracing::trace!(name, "Cache hit");
            return Ok(value.clone());
        }

        let value = slot
            .get_or_try_init(|| {
                tracing::debug!(name, "Cache miss, building entry");
                build()
            })
            .await;

        match value {
            Ok(value) => Ok(value.clone()),
            Err(e) => {
                tracing::warn!(name, "Entry build failed, nothing cached");
                self.discard(name, &slot);
                Err(e)
            }
        }
    }

    /// Like [`get_or_build`](Self::get_or_build), attaching `tag` to the
    /// returned copy only
    pub async fn get_tagged<A, F, Fut, E>(
        &self,
        name: &str,
        tag: A,
        build: F,
    ) -> Result<Tagged<V, A>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        let value = self.get_or_build(name, build).await?;
        Ok(Tagged { value, tag })
    }

    /// Copy of a finished entry, without building
    pub fn peek(&self, name: &str) -> Option<V> {
        self.entries().get(name)?.get().cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries()
            .get(name)
            .is_some_and(|slot| slot.initialized())
    }

    /// Number of finished entries
    pub fn len(&self) -> usize {
        self.entries()
            .values()
            .filter(|slot| slot.initialized())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry. Builds already in flight finish into detached slots.
    pub fn clear(&self) {
        self.entries().clear();
    }
}

impl<V: Clone> Default for EntityCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for EntityCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self
            .entries
            .lock()
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default();
        f.debug_struct("EntityCache").field("names", &names).finish()
    }
}
