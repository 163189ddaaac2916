use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

struct CacheEntry {
    value: String,
    expires_at: Instant,
}

/// Process-local TTL cache for repeated public reads. Entries are only ever
/// invalidated by expiry, so readers can observe data up to one TTL stale
/// after a write.
pub struct Cache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl Cache {
    pub fn new() -> Self {
        Cache {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn get_str(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().ok()?;
        let entry = entries.get(key)?;
        if entry.expires_at <= Instant::now() {
            return None;
        }
        Some(entry.value.clone())
    }

    pub fn set_str(&self, key: &str, value: String, ttl: Duration) {
        let Ok(mut entries) = self.entries.write() else {
            return;
        };
        let now = Instant::now();
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                expires_at: now + ttl,
            },
        );
    }

    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get_str(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("discarding unreadable cache entry {}: {}", key, err);
                None
            }
        }
    }

    pub fn set_json<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) {
        match serde_json::to_string(value) {
            Ok(raw) => self.set_str(key, raw, ttl),
            Err(err) => warn!("could not cache {}: {}", key, err),
        }
    }
}

impl Default for Cache {
    fn default() -> Self {
        Cache::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn entries_live_until_their_ttl() {
        let cache = Cache::new();
        cache.set_str("leaderboard:1", "[]".to_string(), Duration::from_secs(60));
        assert_eq!(cache.get_str("leaderboard:1").as_deref(), Some("[]"));
        assert_eq!(cache.get_str("leaderboard:2"), None);
    }

    #[test]
    fn expired_entries_are_misses() {
        let cache = Cache::new();
        cache.set_str("club:3", "{}".to_string(), Duration::from_millis(10));
        sleep(Duration::from_millis(25));
        assert_eq!(cache.get_str("club:3"), None);
    }

    #[test]
    fn json_values_round_trip() {
        let cache = Cache::new();
        cache.set_json("ids", &vec![1, 2, 3], Duration::from_secs(5));
        assert_eq!(cache.get_json::<Vec<i32>>("ids"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn unreadable_entries_are_dropped() {
        let cache = Cache::new();
        cache.set_str("ids", "not-json".to_string(), Duration::from_secs(5));
        assert_eq!(cache.get_json::<Vec<i32>>("ids"), None);
    }
}
