//! Process-lifetime cache of per-movie watch-provider offers.
//!
//! Entries are never invalidated or expired; the only bound is a capacity
//! limit with oldest-insertion eviction so a long-lived process cannot
//! grow without limit. The cache is owned by the aggregation service, not
//! module-global state.

use std::collections::{HashMap, VecDeque};

use tokio::sync::RwLock;

use crate::movie::Platform;

pub struct ProviderCache {
    capacity: usize,
    inner: RwLock<CacheInner>,
}

#[derive(Default)]
struct CacheInner {
    entries: HashMap<u64, Vec<Platform>>,
    order: VecDeque<u64>,
}

impl ProviderCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: RwLock::new(CacheInner::default()),
        }
    }

    /// Cached offers for a movie, if present.
    pub async fn get(&self, id: u64) -> Option<Vec<Platform>> {
        self.inner.read().await.entries.get(&id).cloned()
    }

    /// Store the offers for a movie, evicting the oldest entry when full.
    pub async fn insert(&self, id: u64, platforms: Vec<Platform>) {
        if self.capacity == 0 {
            return;
        }

        let mut inner = self.inner.write().await;
        if inner.entries.insert(id, platforms).is_none() {
            inner.order.push_back(id);
            if inner.order.len() > self.capacity {
                if let Some(oldest) = inner.order.pop_front() {
                    inner.entries.remove(&oldest);
                }
            }
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }
}
