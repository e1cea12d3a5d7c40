//! Horizontal band partition.

use std::ops::Range;

/// Split `height` rows into `count` horizontal bands, top to bottom.
///
/// Every band is `max(1, height / count)` rows tall except the last, which
/// runs to the bottom edge and absorbs the remainder. When the image has
/// fewer rows than bands the trailing bands are empty ranges.
pub fn band_ranges(height: u32, count: usize) -> Vec<Range<u32>> {
    if count == 0 {
        return Vec::new();
    }

    let band_height = (height / count as u32).max(1);
    (0..count as u32)
        .map(|i| {
            let start = (i * band_height).min(height);
            let end = if i as usize == count - 1 {
                height
            } else {
                ((i + 1) * band_height).min(height)
            };
            start..end.max(start)
        })
        .collect()
}
