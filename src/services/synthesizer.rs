//! Gradient stop synthesis.
//!
//! Turns an ordered palette plus [`GradientCustomizationSettings`] into one
//! CSS `linear-gradient` per [`DIRECTION_TEMPLATES`] entry.
//!
//! Hardness controls how far each color bleeds into its neighbours. With
//! smoothness `s = hardness / 100` and `overlap = max(1, 20 * s)`:
//!
//! ```text
//! first color     0%            (+ plateau stop at overlap%      if s > 0.1)
//! interior i      base          (base = i / (n - 1) * 100        if s < 0.1)
//!                 base -/+ overlap/2 around base                  otherwise
//! last color      100%          (+ plateau stop at 100-overlap%  if s > 0.1)
//! ```
//!
//! Interior blending stops of crowded palettes can land before the previous
//! color's last stop. Such stops are raised to the running maximum, which is
//! how CSS itself resolves out-of-order color stops, so positions in the
//! emitted string never decrease.

use band_palette::Rgb;
use uuid::Uuid;

use crate::models::{
    ColorPalette, DirectionTemplate, Gradient, GradientCustomizationSettings, GradientType,
    DIRECTION_TEMPLATES,
};

/// Below this smoothness stops are placed without blending bands.
const SMOOTHNESS_THRESHOLD: f64 = 0.1;

/// Widest blend band, in percent, reached at hardness 100.
const MAX_OVERLAP: f64 = 20.0;

/// Narrowest blend band, in percent.
const MIN_OVERLAP: f64 = 1.0;

/// A `(color, position%)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub color: Rgb,
    pub position: f64,
}

impl ColorStop {
    fn new(color: Rgb, position: f64) -> Self {
        Self { color, position }
    }
}

/// Synthesize all template gradients for `palette`.
pub fn synthesize(
    palette: &ColorPalette,
    settings: &GradientCustomizationSettings,
) -> Vec<Gradient> {
    synthesize_colors(palette.colors(), settings)
}

/// Synthesize from a bare color slice. An empty slice yields no gradients.
pub fn synthesize_colors(colors: &[Rgb], settings: &GradientCustomizationSettings) -> Vec<Gradient> {
    if colors.is_empty() {
        return Vec::new();
    }

    let custom = settings
        .positions_for(colors.len())
        .map(|positions| custom_stops(colors, positions));

    DIRECTION_TEMPLATES
        .iter()
        .map(|template| {
            let stops = match &custom {
                Some(stops) => stops.clone(),
                None => place_stops(colors, template.style.adjust(settings.blend_hardness)),
            };
            build_gradient(template, &stops, settings)
        })
        .collect()
}

fn build_gradient(
    template: &DirectionTemplate,
    stops: &[ColorStop],
    settings: &GradientCustomizationSettings,
) -> Gradient {
    Gradient {
        id: Uuid::new_v4(),
        kind: GradientType::Linear,
        direction: template.label.to_string(),
        css: linear_gradient_css(template.direction, stops),
        customization_settings: settings.clone(),
    }
}

/// Hardness-derived stop placement. Output positions are non-decreasing,
/// start at 0 and end at 100 (a lone color gets a single stop at 0).
pub fn place_stops(colors: &[Rgb], hardness: u8) -> Vec<ColorStop> {
    let n = colors.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![ColorStop::new(colors[0], 0.0)],
        _ => {}
    }

    let smoothness = f64::from(hardness.min(100)) / 100.0;
    let overlap = (MAX_OVERLAP * smoothness).max(MIN_OVERLAP);
    let plateau = smoothness > SMOOTHNESS_THRESHOLD;

    let mut stops = Vec::with_capacity(n * 3);

    let first = colors[0];
    stops.push(ColorStop::new(first, 0.0));
    if plateau {
        stops.push(ColorStop::new(first, overlap));
    }

    for (i, &color) in colors.iter().enumerate().take(n - 1).skip(1) {
        let base = i as f64 / (n - 1) as f64 * 100.0;
        if smoothness < SMOOTHNESS_THRESHOLD {
            stops.push(ColorStop::new(color, base));
        } else {
            let half = overlap / 2.0;
            stops.push(ColorStop::new(color, (base - half).clamp(0.0, 100.0)));
            stops.push(ColorStop::new(color, base));
            stops.push(ColorStop::new(color, (base + half).clamp(0.0, 100.0)));
        }
    }

    let last = colors[n - 1];
    if plateau {
        stops.push(ColorStop::new(last, 100.0 - overlap));
    }
    stops.push(ColorStop::new(last, 100.0));

    make_monotonic(&mut stops);
    stops
}

/// One stop per color at the caller's positions, no blending stops.
pub fn custom_stops(colors: &[Rgb], positions: &[f64]) -> Vec<ColorStop> {
    let mut stops: Vec<ColorStop> = colors
        .iter()
        .zip(positions)
        .map(|(&color, &position)| ColorStop::new(color, position))
        .collect();
    make_monotonic(&mut stops);
    stops
}

/// Clamp into `[0, 100]` and raise any stop below its predecessor.
fn make_monotonic(stops: &mut [ColorStop]) {
    let mut floor = 0.0_f64;
    for stop in stops.iter_mut() {
        let position = if stop.position.is_finite() {
            stop.position.clamp(0.0, 100.0)
        } else {
            floor
        };
        stop.position = position.max(floor);
        floor = stop.position;
    }
}

/// `linear-gradient(<direction>, <color> <pos>%, ...)`
pub fn linear_gradient_css(direction: &str, stops: &[ColorStop]) -> String {
    let stops = stops
        .iter()
        .map(|stop| format!("{} {}%", stop.color, format_percent(stop.position)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("linear-gradient({}, {})", direction, stops)
}

/// At most two decimals, trailing zeros dropped: `33.33`, `12.5`, `100`.
pub fn format_percent(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}
