//! Summary caching to reduce calls to the text-generation service
//!
//! Repeated questions over an unchanged catalog produce the same ranked ids,
//! so the generated intro can be reused until it goes stale.

use super::SummaryRequest;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

struct CachedSummary {
    text: String,
    stored_at: Instant,
}

impl CachedSummary {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() < ttl
    }
}

#[derive(Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Shared in-memory summary cache; clones see the same entries
#[derive(Clone)]
pub struct SummaryCache {
    entries: Arc<RwLock<HashMap<String, CachedSummary>>>,
    counters: Arc<Counters>,
    ttl: Duration,
}

impl SummaryCache {
    /// Cache whose entries live for one hour
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(3600))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            counters: Arc::new(Counters::default()),
            ttl,
        }
    }

    /// Fresh summary for `key`, if any
    pub fn get(&self, key: &str) -> Option<String> {
        let hit = self
            .entries
            .read()
            .ok()
            .and_then(|entries| {
                entries
                    .get(key)
                    .filter(|entry| entry.is_fresh(self.ttl))
                    .map(|entry| entry.text.clone())
            });

        let counter = if hit.is_some() {
            &self.counters.hits
        } else {
            &self.counters.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        hit
    }

    /// Store `text` under `key`, dropping stale entries first
    pub fn set(&self, key: String, text: String) {
        if let Ok(mut entries) = self.entries.write() {
            let ttl = self.ttl;
            entries.retain(|_, entry| entry.is_fresh(ttl));
            entries.insert(
                key,
                CachedSummary {
                    text,
                    stored_at: Instant::now(),
                },
            );
        }
    }

    pub fn stats(&self) -> CacheStats {
        let (entries, stale) = match self.entries.read() {
            Ok(entries) => (
                entries.len(),
                entries.values().filter(|e| !e.is_fresh(self.ttl)).count(),
            ),
            Err(_) => (0, 0),
        };

        CacheStats {
            entries,
            stale,
            hits: self.counters.hits.load(Ordering::Relaxed),
            misses: self.counters.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for SummaryCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry counts and lookup outcomes
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: usize,
    pub stale: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Cache key for a summary: model, normalized query and ranked product ids
pub fn summary_cache_key(model: &str, request: &SummaryRequest) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    model.hash(&mut hasher);
    request.query.trim().to_lowercase().hash(&mut hasher);
    for id in request.product_ids() {
        id.hash(&mut hasher);
    }
    format!("summary:{}:{:x}", model, hasher.finish())
}
