//! Assertion helpers for gradient output.

use afterglow::models::Gradient;
use band_palette::Rgb;

/// Stop positions of a `linear-gradient(...)` string, in order.
pub fn parse_stop_positions(css: &str) -> Vec<f64> {
    let inner = css
        .trim()
        .strip_prefix("linear-gradient(")
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or_else(|| panic!("Not a linear-gradient: {css}"));
    inner
        .split(',')
        .skip(1)
        .map(|stop| {
            stop.trim()
                .rsplit_once(' ')
                .and_then(|(_, pos)| pos.strip_suffix('%'))
                .and_then(|pos| pos.parse().ok())
                .unwrap_or_else(|| panic!("Bad stop {stop:?} in {css}"))
        })
        .collect()
}

/// Assert positions start at 0, end at 100 and never decrease.
pub fn assert_monotonic_stops(css: &str) {
    let positions = parse_stop_positions(css);
    assert!(!positions.is_empty(), "No stops parsed from {css}");
    assert_eq!(positions.first(), Some(&0.0), "First stop not at 0%: {css}");
    assert_eq!(positions.last(), Some(&100.0), "Last stop not at 100%: {css}");
    assert!(
        positions.windows(2).all(|w| w[0] <= w[1]),
        "Stop positions decrease: {positions:?} in {css}"
    );
}

pub fn assert_all_monotonic(gradients: &[Gradient]) {
    for gradient in gradients {
        assert_monotonic_stops(&gradient.css);
    }
}

/// Colors of the stops, in order.
pub fn stop_colors(css: &str) -> Vec<Rgb> {
    let inner = css
        .strip_prefix("linear-gradient(")
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or_else(|| panic!("Not a linear-gradient: {css}"));
    inner
        .split(',')
        .skip(1)
        .map(|stop| {
            let color = stop.trim().split(' ').next().unwrap();
            color.parse().unwrap()
        })
        .collect()
}

/// Assert every palette color appears among the stops, in palette order.
pub fn assert_colors_in_order(css: &str, palette: &[Rgb]) {
    let mut seen = stop_colors(css);
    seen.dedup();
    assert_eq!(seen, palette, "Stop colors out of palette order in {css}");
}

/// Assert adjacent positions keep `gap` points apart with pinned ends.
pub fn assert_gapped_layout(positions: &[u8], gap: u8) {
    if positions.len() < 2 {
        return;
    }
    assert_eq!(positions[0], 0, "First position moved: {positions:?}");
    assert_eq!(positions[positions.len() - 1], 100, "Last position moved: {positions:?}");
    for w in positions.windows(2) {
        assert!(
            w[1] >= w[0] + gap,
            "Gap below {gap} between {} and {} in {positions:?}",
            w[0],
            w[1]
        );
    }
}
