//! Quantized color histogram for a single band.

use std::collections::HashMap;

use crate::color::Rgb;

/// Channel quantization step. Each channel is rounded to the nearest
/// multiple, giving 27 levels per channel (0, 10, .., 260).
pub const BUCKET_STEP: u8 = 10;

/// Quantized bucket identity: the rounded level index of each channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BucketKey {
    r: u8,
    g: u8,
    b: u8,
}

impl BucketKey {
    /// Bucket for an unquantized color. Halves round up, so 5 lands in the
    /// 10 bucket and 255 in the 260 bucket.
    #[inline]
    pub fn of(color: Rgb) -> Self {
        let level = |c: u8| ((c as u16 + BUCKET_STEP as u16 / 2) / BUCKET_STEP as u16) as u8;
        Self {
            r: level(color.r),
            g: level(color.g),
            b: level(color.b),
        }
    }
}

#[derive(Debug, Clone)]
struct Bucket {
    count: u32,
    /// First sample seen for this bucket, reported verbatim. On downsampled
    /// input the first rows of a band sit next to the band above, so this
    /// can be a resampling overshoot of the band's color rather than a
    /// pixel of the source; it still lies in the winning bucket.
    representative: Rgb,
}

/// Frequency count per bucket, remembering the first sample of each bucket.
///
/// Buckets keep their first-seen order so that ties in frequency resolve to
/// the bucket encountered first in scan order.
#[derive(Debug, Default)]
pub struct BucketHistogram {
    index: HashMap<BucketKey, usize>,
    buckets: Vec<Bucket>,
}

impl BucketHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one sample.
    pub fn add(&mut self, color: Rgb) {
        let key = BucketKey::of(color);
        match self.index.get(&key) {
            Some(&slot) => self.buckets[slot].count += 1,
            None => {
                self.index.insert(key, self.buckets.len());
                self.buckets.push(Bucket {
                    count: 1,
                    representative: color,
                });
            }
        }
    }

    /// Number of distinct buckets seen.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Representative sample of the most frequent bucket, or `None` when no
    /// sample was counted.
    pub fn dominant(&self) -> Option<Rgb> {
        let mut best: Option<&Bucket> = None;
        for bucket in &self.buckets {
            if best.map_or(true, |b| bucket.count > b.count) {
                best = Some(bucket);
            }
        }
        best.map(|b| b.representative)
    }
}
