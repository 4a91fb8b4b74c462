//! Position cache - flat FEN-keyed memo table
//!
//! Memoizes analysis results by board fingerprint. Two key namespaces share the table:
//!
//! - **Whole position**: the FEN string alone
//! - **Square-scoped**: `FEN + ":" + square`, e.g. `"... 0 1:e2"`
//!
//! A FEN never contains `':'`, so the namespaces cannot collide.
//!
//! There is no eviction policy beyond [`PositionCache::clear`], which the game session
//! calls on reset and whenever an arbitrary FEN is loaded. Per-session position counts
//! are small, so the table stays small.
//!
//! # Idempotence
//!
//! A hit returns a clone of exactly what was stored, and only results of pure
//! computations are stored, so a hit is value-identical to a fresh computation. Whether
//! a lookup hit is reported separately through [`CacheStatus`] and [`CacheStats`],
//! never through the value.
//!
//! # Concurrency
//!
//! The map sits behind a single `parking_lot::Mutex`. Contention is negligible: the
//! core is single-threaded and the lock is only ever held for a map operation, never
//! while computing a value.

use crate::types::Square;
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::debug;

/// Whether a lookup was served from the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

/// Hit/miss counters since the last [`PositionCache::clear`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Key for a whole-position query
pub fn position_key(fen: &str) -> String {
    fen.to_string()
}

/// Key for a square-scoped query
pub fn square_key(fen: &str, square: Square) -> String {
    format!("{fen}:{square}")
}

struct CacheInner<V> {
    entries: HashMap<String, V>,
    hits: u64,
    misses: u64,
}

/// FEN-keyed memo table guarded by one mutex
pub struct PositionCache<V> {
    inner: Mutex<CacheInner<V>>,
}

impl<V: Clone> Default for PositionCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> PositionCache<V> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                hits: 0,
                misses: 0,
            }),
        }
    }

    /// Look up a key, counting the hit or miss
    pub fn get(&self, key: &str) -> Option<V> {
        let mut inner = self.inner.lock();
        match inner.entries.get(key).cloned() {
            Some(value) => {
                inner.hits += 1;
                Some(value)
            }
            None => {
                inner.misses += 1;
                None
            }
        }
    }

    pub fn put(&self, key: impl Into<String>, value: V) {
        self.inner.lock().entries.insert(key.into(), value);
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    ///
    /// The lock is released while `compute` runs. Errors from `compute` are returned
    /// as-is and nothing is stored.
    pub fn get_or_compute<E>(
        &self,
        key: &str,
        compute: impl FnOnce() -> Result<V, E>,
    ) -> Result<(V, CacheStatus), E> {
        if let Some(value) = self.get(key) {
            return Ok((value, CacheStatus::Hit));
        }
        let value = compute()?;
        self.put(key, value.clone());
        Ok((value, CacheStatus::Miss))
    }

    /// Infallible form of [`PositionCache::get_or_compute`]
    pub fn get_or_insert_with(&self, key: &str, compute: impl FnOnce() -> V) -> (V, CacheStatus) {
        if let Some(value) = self.get(key) {
            return (value, CacheStatus::Hit);
        }
        let value = compute();
        self.put(key, value.clone());
        (value, CacheStatus::Miss)
    }

    /// Drop every entry and reset the counters
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        if !inner.entries.is_empty() {
            debug!("[CACHE] Clearing {} entries", inner.entries.len());
        }
        inner.entries.clear();
        inner.hits = 0;
        inner.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            hits: inner.hits,
            misses: inner.misses,
            entries: inner.entries.len(),
        }
    }
}
