//! Bounded memo of synthesized gradients with least-recently-used eviction.
//!
//! Keyed by the palette colors (in order) plus the serialized settings.
//! Hits hand back the stored `Arc`, so callers can compare by pointer to skip
//! downstream work. Two images whose quantized palettes coincide share
//! entries; the source image itself is not part of the key.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::models::{ColorPalette, Gradient, GradientCustomizationSettings};
use crate::services::synthesizer;

/// Default maximum number of resident entries
pub const DEFAULT_CAPACITY: usize = 20;

/// Lookups between hit-rate log lines
const STATS_LOG_INTERVAL: u64 = 10;

struct CacheEntry {
    gradients: Arc<Vec<Gradient>>,
    /// Logical access time; larger is more recent
    last_access: u64,
}

/// Snapshot of cache counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Hit percentage over all lookups, 0 when nothing was looked up.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64 * 100.0
        }
    }
}

/// Single-owner gradient cache.
pub struct GradientCache {
    entries: HashMap<String, CacheEntry>,
    capacity: usize,
    clock: u64,
    hits: u64,
    misses: u64,
}

impl GradientCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Cache holding at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
            clock: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Composite key: `"#c0:#c1:..|<hardness>:<positions>"`.
    pub fn cache_key(palette: &ColorPalette, settings: &GradientCustomizationSettings) -> String {
        format!(
            "{}|{}",
            palette.hex_colors().join(":"),
            settings.cache_fragment()
        )
    }

    /// Return cached gradients for `(palette, settings)`, synthesizing and
    /// storing them on a miss.
    pub fn get_or_compute(
        &mut self,
        palette: &ColorPalette,
        settings: &GradientCustomizationSettings,
    ) -> Arc<Vec<Gradient>> {
        let key = Self::cache_key(palette, settings);
        let now = self.tick();

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.last_access = now;
            let gradients = entry.gradients.clone();
            self.hits += 1;
            self.log_stats();
            return gradients;
        }

        let gradients = Arc::new(synthesizer::synthesize(palette, settings));
        self.entries.insert(
            key,
            CacheEntry {
                gradients: gradients.clone(),
                last_access: now,
            },
        );
        self.misses += 1;
        self.trim();
        self.log_stats();
        gradients
    }

    /// Whether an entry is resident. Does not refresh its access time.
    pub fn contains(&self, palette: &ColorPalette, settings: &GradientCustomizationSettings) -> bool {
        self.entries.contains_key(&Self::cache_key(palette, settings))
    }

    /// Drop all entries and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            capacity: self.capacity,
            hits: self.hits,
            misses: self.misses,
        }
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Evict least recently accessed entries until within capacity
    fn trim(&mut self) {
        while self.entries.len() > self.capacity {
            let Some(oldest) = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_access)
                .map(|(key, _)| key.clone())
            else {
                break;
            };
            self.entries.remove(&oldest);
            tracing::debug!(
                key = %oldest,
                cache_size = self.entries.len(),
                "Gradient cache: evicted least recently used entry"
            );
        }
    }

    fn log_stats(&self) {
        let stats = self.stats();
        let total = stats.hits + stats.misses;
        if total % STATS_LOG_INTERVAL == 0 {
            tracing::info!(
                hit_rate = %format!("{:.1}%", stats.hit_rate()),
                hits = stats.hits,
                misses = stats.misses,
                "Gradient cache performance"
            );
        }
    }
}

impl Default for GradientCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache shared between callers.
///
/// The whole get-or-compute sequence runs under one lock, so concurrent
/// requests for the same key synthesize once and the rest observe the hit.
#[derive(Clone)]
pub struct SharedGradientCache {
    inner: Arc<Mutex<GradientCache>>,
}

impl SharedGradientCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(GradientCache::with_capacity(capacity))),
        }
    }

    pub fn get_or_compute(
        &self,
        palette: &ColorPalette,
        settings: &GradientCustomizationSettings,
    ) -> Arc<Vec<Gradient>> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_compute(palette, settings)
    }

    pub fn stats(&self) -> CacheStats {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .stats()
    }

    pub fn clear(&self) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Default for SharedGradientCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
