//! Keyed query cache backing the dashboard screens.
//!
//! Each distinct key (the filter half of a (resource, filter) pair; the
//! resource half is which cache instance you hold) tracks one fetch
//! independently: switching the list filter addresses a different entry and
//! never touches its siblings, so returning to an earlier filter may serve
//! a stale value until a refetch lands. There is no polling, no background
//! revalidation, and no retry policy here; views drive every fetch.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

use jiff::Timestamp;
use parking_lot::Mutex;

/// Observable state of one cache entry.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<V> {
    /// A fetch is in flight and no data has ever resolved for this key.
    Loading,
    /// The last fetch failed; no partial data is implied.
    Error(String),
    /// A value is present, possibly stale relative to the backend.
    Success { value: V, fetched_at: Timestamp },
}

impl<V> QueryState<V> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            QueryState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&V> {
        match self {
            QueryState::Success { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// Cache of fetch results keyed by `K`.
///
/// Interior mutability so fetch handlers can resolve entries through a
/// shared `Arc` while views read concurrently. A monotonic version counter
/// bumps on every state change; views subscribe to it to know when to
/// re-render.
#[derive(Debug, Default)]
pub struct QueryCache<K, V> {
    entries: Mutex<HashMap<K, QueryState<V>>>,
    version: AtomicU64,
}

impl<K: Eq + Hash + Clone, V: Clone> QueryCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            version: AtomicU64::new(0),
        }
    }

    /// Current state for a key, or `None` when the key has never been
    /// queried.
    pub fn get(&self, key: &K) -> Option<QueryState<V>> {
        self.entries.lock().get(key).cloned()
    }

    /// Mark a fetch as started. A key with no resolved value enters
    /// `Loading`; a key already holding a `Success` value keeps it visible
    /// while the refetch runs (manual-refresh semantics).
    pub fn begin(&self, key: &K) {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(QueryState::Success { .. }) => {}
            _ => {
                entries.insert(key.clone(), QueryState::Loading);
                self.bump();
            }
        }
    }

    /// Store a fetch outcome. Success values are stamped with the resolve
    /// time. Resolving the same key twice (a superseded duplicate fetch) is
    /// an idempotent overwrite; keys never cross-write.
    pub fn resolve(&self, key: &K, result: Result<V, String>) {
        let state = match result {
            Ok(value) => QueryState::Success {
                value,
                fetched_at: Timestamp::now(),
            },
            Err(message) => QueryState::Error(message),
        };
        self.entries.lock().insert(key.clone(), state);
        self.bump();
    }

    /// Drop a key's entry entirely, forcing the next query to refetch.
    pub fn invalidate(&self, key: &K) {
        if self.entries.lock().remove(key).is_some() {
            self.bump();
        }
    }

    /// Monotonic change counter.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Handle for change notification: views poll it after handlers run and
    /// re-render when it reports a change.
    pub fn subscribe(&self) -> Subscription {
        Subscription {
            last_seen: self.version(),
        }
    }

    fn bump(&self) {
        self.version.fetch_add(1, Ordering::AcqRel);
    }
}

/// Cursor over a cache's version counter.
#[derive(Debug, Clone)]
pub struct Subscription {
    last_seen: u64,
}

impl Subscription {
    /// True when the cache changed since the last call; advances the cursor.
    pub fn poll<K: Eq + Hash + Clone, V: Clone>(&mut self, cache: &QueryCache<K, V>) -> bool {
        let current = cache.version();
        let changed = current != self.last_seen;
        self.last_seen = current;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TicketStatus;

    type ListCache = QueryCache<Option<TicketStatus>, Vec<&'static str>>;

    #[test]
    fn test_unqueried_key_has_no_entry() {
        let cache = ListCache::new();
        assert!(cache.get(&None).is_none());
    }

    #[test]
    fn test_begin_then_resolve_success() {
        let cache = ListCache::new();
        let key = Some(TicketStatus::New);

        cache.begin(&key);
        assert!(cache.get(&key).unwrap().is_loading());

        cache.resolve(&key, Ok(vec!["Q-1001"]));
        let state = cache.get(&key).unwrap();
        assert_eq!(state.value(), Some(&vec!["Q-1001"]));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_error_state_is_distinct_from_loading() {
        let cache = ListCache::new();
        cache.begin(&None);
        cache.resolve(&None, Err("connection refused".to_string()));

        let state = cache.get(&None).unwrap();
        assert_eq!(state.error(), Some("connection refused"));
        assert!(!state.is_loading(), "an error must end the loading state");
        assert!(state.value().is_none());
    }

    #[test]
    fn test_keys_are_independent_entries() {
        let cache = ListCache::new();
        cache.resolve(&None, Ok(vec!["Q-1", "Q-2"]));
        cache.resolve(&Some(TicketStatus::Ready), Ok(vec!["Q-2"]));

        // Starting a fetch for one filter leaves the other untouched.
        cache.begin(&Some(TicketStatus::New));
        assert_eq!(cache.get(&None).unwrap().value().unwrap().len(), 2);
        assert_eq!(
            cache
                .get(&Some(TicketStatus::Ready))
                .unwrap()
                .value()
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn test_refresh_keeps_stale_value_until_resolution() {
        let cache = ListCache::new();
        cache.resolve(&None, Ok(vec!["Q-1"]));

        // Manual refresh: the old value stays visible while the fetch runs.
        cache.begin(&None);
        assert_eq!(cache.get(&None).unwrap().value(), Some(&vec!["Q-1"]));

        cache.resolve(&None, Ok(vec!["Q-1", "Q-2"]));
        assert_eq!(cache.get(&None).unwrap().value().unwrap().len(), 2);
    }

    #[test]
    fn test_duplicate_resolution_is_idempotent() {
        let cache = ListCache::new();
        cache.resolve(&None, Ok(vec!["Q-1"]));
        // A superseded fetch for the same key resolving late.
        cache.resolve(&None, Ok(vec!["Q-1"]));
        assert_eq!(cache.get(&None).unwrap().value(), Some(&vec!["Q-1"]));
    }

    #[test]
    fn test_invalidate_forces_refetch() {
        let cache = ListCache::new();
        cache.resolve(&None, Ok(vec!["Q-1"]));
        cache.invalidate(&None);
        assert!(cache.get(&None).is_none());

        // begin on the now-vacant key re-enters Loading.
        cache.begin(&None);
        assert!(cache.get(&None).unwrap().is_loading());
    }

    #[test]
    fn test_subscription_sees_changes() {
        let cache = ListCache::new();
        let mut sub = cache.subscribe();
        assert!(!sub.poll(&cache));

        cache.begin(&None);
        assert!(sub.poll(&cache));
        assert!(!sub.poll(&cache), "poll advances the cursor");

        cache.resolve(&None, Ok(vec![]));
        assert!(sub.poll(&cache));
    }
}
