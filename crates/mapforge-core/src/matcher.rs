//! Nearest palette color matching.
//!
//! Maps an arbitrary RGB triple to the id of the closest palette entry
//! under Euclidean distance in L*a*b* space. Results are memoized per
//! matcher instance, so a raster full of repeated colors only pays for
//! each distinct color once.

use std::collections::HashMap;

use crate::color::rgb_to_lab;
use crate::palette;

/// Finds the closest palette entry for RGB queries, caching results.
///
/// The cache is owned by the matcher rather than shared process state, so
/// its lifetime is explicit: one matcher typically serves one conversion.
/// Memoization is transparent: a cached answer is always identical to
/// what a fresh scan would return.
#[derive(Debug, Default)]
pub struct ColorMatcher {
    cache: HashMap<[u8; 3], u8>,
}

impl ColorMatcher {
    /// Create a matcher with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of the palette entry closest to `rgb` in L*a*b*.
    ///
    /// Ties break to the first entry in the palette's ascending-id order,
    /// which keeps the output deterministic.
    pub fn nearest(&mut self, rgb: [u8; 3]) -> u8 {
        if let Some(&id) = self.cache.get(&rgb) {
            return id;
        }
        let id = nearest_uncached(rgb);
        self.cache.insert(rgb, id);
        id
    }

    /// Number of distinct colors resolved so far.
    pub fn cached_colors(&self) -> usize {
        self.cache.len()
    }
}

/// Linear scan over the palette, keeping the minimum distance.
fn nearest_uncached(rgb: [u8; 3]) -> u8 {
    let query = rgb_to_lab(rgb[0], rgb[1], rgb[2]);

    let mut best_id = 0u8;
    let mut best_distance = f64::INFINITY;
    for entry in palette::entries() {
        let distance = query.distance(&entry.lab);
        if distance < best_distance {
            best_distance = distance;
            best_id = entry.id;
        }
    }
    best_id
}
