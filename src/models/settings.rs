use serde::{Deserialize, Serialize};

/// Highest blend hardness value; softest blending.
pub const MAX_BLEND_HARDNESS: u8 = 100;

/// User-tunable gradient parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientCustomizationSettings {
    /// 0 = distinct bands, 100 = fully blended
    pub blend_hardness: u8,

    /// One percentage per color. When present with the palette's length it
    /// replaces hardness-derived stop placement for every template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_color_positions: Option<Vec<f64>>,
}

impl GradientCustomizationSettings {
    /// Settings with the given hardness (clamped to 0..=100) and no custom
    /// positions.
    pub fn new(blend_hardness: u8) -> Self {
        Self {
            blend_hardness: blend_hardness.min(MAX_BLEND_HARDNESS),
            custom_color_positions: None,
        }
    }

    pub fn with_positions(mut self, positions: Vec<f64>) -> Self {
        self.custom_color_positions = Some(positions);
        self
    }

    /// Custom positions usable for a palette of `color_count` colors.
    ///
    /// Returns `None` when there are none or when their length does not
    /// match; callers then fall back to hardness-derived placement.
    pub fn positions_for(&self, color_count: usize) -> Option<&[f64]> {
        match self.custom_color_positions.as_deref() {
            Some(positions) if positions.len() == color_count => Some(positions),
            Some(positions) => {
                tracing::debug!(
                    positions = positions.len(),
                    colors = color_count,
                    "Custom positions do not match palette, using hardness placement"
                );
                None
            }
            None => None,
        }
    }

    /// Stable textual form used in cache keys: `"<hardness>:<p0>,<p1>,.."`.
    pub fn cache_fragment(&self) -> String {
        let positions = self
            .custom_color_positions
            .as_deref()
            .map(|p| {
                p.iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .unwrap_or_default();
        format!("{}:{}", self.blend_hardness, positions)
    }
}

impl Default for GradientCustomizationSettings {
    fn default() -> Self {
        Self::new(50)
    }
}
