use dashmap::DashMap;
use dnsrpc_application::ports::ResultCachePort;
use rustc_hash::FxBuildHasher;
use std::time::{Duration, Instant};
use tracing::debug;

/// Values are served while `now - stored_at <= ttl`.
fn is_expired(stored_at: Instant, now: Instant, ttl: Duration) -> bool {
    now.duration_since(stored_at) > ttl
}

struct CachedResult {
    value: String,
    stored_at: Instant,
}

/// Fixed-TTL result cache for expensive commands.
///
/// Entries expire lazily: an expired entry is removed by the lookup that
/// finds it. With no `max_entries` the map grows without bound; with a bound,
/// inserts at capacity first purge expired entries and then drop an
/// arbitrary one.
pub struct TtlResultCache {
    entries: DashMap<String, CachedResult, FxBuildHasher>,
    ttl: Duration,
    max_entries: Option<usize>,
}

impl TtlResultCache {
    pub fn new(ttl: Duration, max_entries: Option<usize>) -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            ttl,
            max_entries,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    fn make_room(&self, max_entries: usize) {
        let now = Instant::now();
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|e| is_expired(e.value().stored_at, now, self.ttl))
            .map(|e| e.key().clone())
            .take(64)
            .collect();
        for key in &expired {
            self.entries.remove(key);
        }

        if self.entries.len() >= max_entries {
            // The iterator holds a shard read guard; release it before removing.
            let victim = self.entries.iter().next().map(|e| e.key().clone());
            if let Some(key) = victim {
                debug!(key = %key, "Result cache full, evicting");
                self.entries.remove(&key);
            }
        }
    }
}

impl ResultCachePort for TtlResultCache {
    fn get(&self, key: &str) -> Option<String> {
        match self.entries.entry(key.to_string()) {
            dashmap::Entry::Vacant(_) => None,
            dashmap::Entry::Occupied(e) => {
                if is_expired(e.get().stored_at, Instant::now(), self.ttl) {
                    e.remove();
                    None
                } else {
                    Some(e.get().value.clone())
                }
            }
        }
    }

    fn set(&self, key: &str, value: String) {
        if let Some(max_entries) = self.max_entries {
            if self.entries.len() >= max_entries && !self.entries.contains_key(key) {
                self.make_room(max_entries);
            }
        }

        self.entries.insert(
            key.to_string(),
            CachedResult {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
