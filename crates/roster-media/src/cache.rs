//! Bounded photo cache
//!
//! Keyed by image path. Eviction is first-in-first-out: once the cache is
//! full, adding a new path drops the oldest inserted entry, regardless of how
//! recently it was read.

use crate::thumbnail::get_image_data;
use crate::types::Result;
use log::debug;
use std::collections::{HashMap, VecDeque};

pub const DEFAULT_CACHE_CAPACITY: usize = 50;

#[derive(Debug, Clone)]
pub struct ImageCache {
    entries: HashMap<String, String>,
    /// Insertion order, oldest first
    order: VecDeque<String>,
    capacity: usize,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl ImageCache {
    /// A zero capacity is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn has(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Store `data` for `path`.
    ///
    /// Replacing an existing path keeps its place in the eviction order.
    pub fn insert(&mut self, path: impl Into<String>, data: impl Into<String>) {
        let path = path.into();
        if let Some(existing) = self.entries.get_mut(&path) {
            *existing = data.into();
            return;
        }

        while self.entries.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            debug!("Evicting cached image {}", oldest);
            self.entries.remove(&oldest);
        }

        self.order.push_back(path.clone());
        self.entries.insert(path, data.into());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Return the cached data URL for `path`, loading and caching it on a miss.
    pub async fn get_or_load(&mut self, path: &str) -> Result<String> {
        if let Some(data) = self.get(path) {
            return Ok(data.to_string());
        }

        let data = get_image_data(path).await?;
        self.insert(path, data.clone());
        Ok(data)
    }
}
