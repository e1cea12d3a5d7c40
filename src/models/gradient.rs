use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::settings::{GradientCustomizationSettings, MAX_BLEND_HARDNESS};

/// CSS gradient function family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientType {
    Linear,
    Radial,
    Conic,
}

/// Per-template hardness adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopStyle {
    /// Hardness used unmodified
    Plain,
    /// Hardness - 20, floored at 0
    Soft,
    /// Hardness - 10, floored at 0
    Emphasized,
    /// Hardness + 10, capped at 100
    Balanced,
}

impl StopStyle {
    /// Effective hardness for this style.
    pub fn adjust(self, hardness: u8) -> u8 {
        let hardness = hardness.min(MAX_BLEND_HARDNESS);
        match self {
            StopStyle::Plain => hardness,
            StopStyle::Soft => hardness.saturating_sub(20),
            StopStyle::Emphasized => hardness.saturating_sub(10),
            StopStyle::Balanced => (hardness + 10).min(MAX_BLEND_HARDNESS),
        }
    }
}

/// One fixed direction/style configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionTemplate {
    /// Presentation label, stored on the generated gradient
    pub label: &'static str,
    /// CSS direction argument
    pub direction: &'static str,
    pub style: StopStyle,
}

impl DirectionTemplate {
    const fn new(label: &'static str, direction: &'static str, style: StopStyle) -> Self {
        Self {
            label,
            direction,
            style,
        }
    }
}

/// Every synthesis emits one gradient per template, in this order.
///
/// The first ten are the downward, sideways and diagonal directions. `to top`
/// is an Afterglow addition appended last so the earlier indices stay put.
pub const DIRECTION_TEMPLATES: [DirectionTemplate; 11] = [
    DirectionTemplate::new("to bottom", "to bottom", StopStyle::Plain),
    DirectionTemplate::new("to bottom (soft)", "to bottom", StopStyle::Soft),
    DirectionTemplate::new("to bottom (emphasized)", "to bottom", StopStyle::Emphasized),
    DirectionTemplate::new("to bottom (balanced)", "to bottom", StopStyle::Balanced),
    DirectionTemplate::new("to bottom slight right", "170deg", StopStyle::Plain),
    DirectionTemplate::new("to bottom slight left", "190deg", StopStyle::Plain),
    DirectionTemplate::new("to right", "to right", StopStyle::Plain),
    DirectionTemplate::new("to left", "to left", StopStyle::Plain),
    DirectionTemplate::new("to bottom right", "to bottom right", StopStyle::Plain),
    DirectionTemplate::new("to bottom left", "to bottom left", StopStyle::Plain),
    DirectionTemplate::new("to top", "to top", StopStyle::Plain),
];

/// A synthesized gradient. Immutable once created; new settings produce new
/// gradients rather than mutating old ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: GradientType,
    pub direction: String,
    pub css: String,
    /// Snapshot of the settings that produced `css`
    pub customization_settings: GradientCustomizationSettings,
}
