use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use band_palette::{MAX_ANALYSIS_DIMENSION, MAX_COLORS, MIN_COLORS};

use crate::models::settings::MAX_BLEND_HARDNESS;

/// Environment variable naming the config file when `--config` is absent
pub const CONFIG_ENV: &str = "AFTERGLOW_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Palette size used when the caller does not ask for one
    #[serde(default = "default_color_count")]
    pub color_count: usize,

    /// Initial blend hardness
    #[serde(default = "default_blend_hardness")]
    pub blend_hardness: u8,

    /// Maximum resident gradient cache entries
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Quiet period before a dragged position is published
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Larger images are downsampled to this bound before analysis
    #[serde(default = "default_max_analysis_dimension")]
    pub max_analysis_dimension: u32,
}

fn default_color_count() -> usize {
    8
}

fn default_blend_hardness() -> u8 {
    50
}

fn default_cache_capacity() -> usize {
    20
}

fn default_debounce_ms() -> u64 {
    50
}

fn default_max_analysis_dimension() -> u32 {
    MAX_ANALYSIS_DIMENSION
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults when
    /// the file is missing or malformed.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    let config = config.validated();
                    tracing::info!(
                        path = %path.display(),
                        color_count = config.color_count,
                        cache_capacity = config.cache_capacity,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Clamp every field into its supported range.
    pub fn validated(mut self) -> Self {
        self.color_count = self.color_count.clamp(MIN_COLORS, MAX_COLORS);
        self.blend_hardness = self.blend_hardness.min(MAX_BLEND_HARDNESS);
        self.cache_capacity = self.cache_capacity.max(1);
        self.max_analysis_dimension = self.max_analysis_dimension.max(1);
        self
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            color_count: default_color_count(),
            blend_hardness: default_blend_hardness(),
            cache_capacity: default_cache_capacity(),
            debounce_ms: default_debounce_ms(),
            max_analysis_dimension: default_max_analysis_dimension(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.color_count, 8);
        assert_eq!(config.blend_hardness, 50);
        assert_eq!(config.cache_capacity, 20);
        assert_eq!(config.debounce(), Duration::from_millis(50));
        assert_eq!(config.max_analysis_dimension, 800);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let yaml = r#"
color_count: 5
debounce_ms: 120
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.color_count, 5);
        assert_eq!(config.debounce_ms, 120);
        assert_eq!(config.blend_hardness, 50);
        assert_eq!(config.cache_capacity, 20);
    }

    #[test]
    fn test_validated_clamps_out_of_range_values() {
        let config = AppConfig {
            color_count: 40,
            blend_hardness: 180,
            cache_capacity: 0,
            debounce_ms: 0,
            max_analysis_dimension: 0,
        }
        .validated();

        assert_eq!(config.color_count, 12);
        assert_eq!(config.blend_hardness, 100);
        assert_eq!(config.cache_capacity, 1);
        assert_eq!(config.max_analysis_dimension, 1);

        let config = AppConfig {
            color_count: 1,
            ..Default::default()
        }
        .validated();
        assert_eq!(config.color_count, 2);
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        assert_eq!(AppConfig::load(None), AppConfig::default());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(Some(&dir.path().join("missing.yaml")));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_malformed_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "color_count: [not, a, number]").unwrap();
        assert_eq!(AppConfig::load(Some(file.path())), AppConfig::default());
    }

    #[test]
    fn test_load_from_file_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "color_count: 99\ncache_capacity: 3").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config.color_count, 12);
        assert_eq!(config.cache_capacity, 3);
    }
}
