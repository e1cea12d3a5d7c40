//! Manual stop positioning.
//!
//! [`PositionAdjuster`] owns one stop position per palette color and moves
//! them in response to divider drags:
//!
//! ```text
//!            start_drag(i)              end_drag()
//!   Idle ---------------------> Dragging(i) ---------> Idle
//!    |                            |    ^
//!    | reset()                    +----+ update_drag(pct)
//!    v
//!   Idle (equal spacing)
//! ```
//!
//! Positions are whole percentages. The first is pinned to 0, the last to
//! 100, and neighbours stay at least [`MIN_GAP`] apart after every
//! transition. Changes made while dragging are published into
//! `custom_color_positions` through a [`Debouncer`] so continuous pointer
//! movement does not trigger a resynthesis per event.

use std::time::{Duration, Instant};

use crate::error::AdjustError;
use crate::models::GradientCustomizationSettings;
use crate::services::debounce::Debouncer;

/// Smallest distance between adjacent positions, in percentage points
pub const MIN_GAP: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging { index: usize },
}

/// Result of a transition: the current positions, plus settings when the
/// transition published them.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    pub positions: Vec<u8>,
    pub settings: Option<GradientCustomizationSettings>,
}

#[derive(Debug)]
pub struct PositionAdjuster {
    positions: Vec<u8>,
    state: DragState,
    settings: GradientCustomizationSettings,
    publisher: Debouncer<Vec<u8>>,
}

/// `round(i / (n - 1) * 100)` for each index.
pub fn equal_spacing(color_count: usize) -> Vec<u8> {
    match color_count {
        0 => Vec::new(),
        1 => vec![0],
        n => (0..n)
            .map(|i| (i as f64 / (n - 1) as f64 * 100.0).round() as u8)
            .collect(),
    }
}

/// Whether `positions` satisfies the pinned-ends and minimum-gap invariant.
pub fn is_valid_layout(positions: &[u8]) -> bool {
    match positions {
        [] => true,
        [only] => *only == 0,
        [first, .., last] => {
            *first == 0
                && *last == 100
                && positions
                    .windows(2)
                    .all(|w| w[1] >= w[0].saturating_add(MIN_GAP))
        }
    }
}

impl PositionAdjuster {
    /// Start idle for a palette of `color_count` colors.
    ///
    /// Existing custom positions are adopted when they have the right length
    /// and form a valid layout; otherwise positions start equally spaced.
    /// Whenever custom positions are present, `settings()` carries exactly
    /// the positions in use.
    pub fn new(
        color_count: usize,
        settings: GradientCustomizationSettings,
        debounce: Duration,
    ) -> Self {
        let adopted = settings
            .custom_color_positions
            .as_deref()
            .and_then(|custom| adopt_positions(custom, color_count));
        let had_custom = settings.custom_color_positions.is_some();
        if had_custom && adopted.is_none() {
            tracing::debug!(
                color_count,
                "Saved positions unusable, falling back to equal spacing"
            );
        }

        let mut adjuster = Self {
            positions: adopted.unwrap_or_else(|| equal_spacing(color_count)),
            state: DragState::Idle,
            settings,
            publisher: Debouncer::new(debounce),
        };
        if had_custom {
            adjuster.publish(adjuster.positions.clone());
        }
        adjuster
    }

    pub fn positions(&self) -> &[u8] {
        &self.positions
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Most recently published settings.
    pub fn settings(&self) -> &GradientCustomizationSettings {
        &self.settings
    }

    /// Positions of the dividers between colors (every position but the first).
    pub fn divider_positions(&self) -> &[u8] {
        self.positions.get(1..).unwrap_or(&[])
    }

    /// Span between each pair of adjacent positions; sums to 100.
    pub fn segment_heights(&self) -> Vec<u8> {
        self.positions.windows(2).map(|w| w[1] - w[0]).collect()
    }

    /// Begin tracking divider `index`.
    pub fn start_drag(&mut self, index: usize) -> Result<Adjustment, AdjustError> {
        if let DragState::Dragging { index } = self.state {
            return Err(AdjustError::AlreadyDragging { index });
        }
        if index >= self.positions.len() {
            return Err(AdjustError::IndexOutOfRange {
                index,
                len: self.positions.len(),
            });
        }

        self.state = DragState::Dragging { index };
        tracing::debug!(index, "Divider drag started");
        Ok(self.adjustment(None))
    }

    pub fn update_drag(&mut self, pointer_percent: f64) -> Result<Adjustment, AdjustError> {
        self.update_drag_at(pointer_percent, Instant::now())
    }

    /// Move the dragged divider toward `pointer_percent`, clamped between
    /// its neighbours. A change schedules a debounced publish; a previously
    /// scheduled publish whose quiet period elapsed by `now` is returned.
    pub fn update_drag_at(
        &mut self,
        pointer_percent: f64,
        now: Instant,
    ) -> Result<Adjustment, AdjustError> {
        let DragState::Dragging { index } = self.state else {
            return Err(AdjustError::NotDragging);
        };

        let published = self.publisher.poll_at(now).map(|p| self.publish(p));

        let target = self.clamped_target(index, pointer_percent);
        if target != self.positions[index] {
            self.positions[index] = target;
            self.publisher.schedule_at(self.positions.clone(), now);
        }

        debug_assert!(is_valid_layout(&self.positions));
        Ok(self.adjustment(published))
    }

    /// Stop tracking. Publishes any change still waiting on the debounce.
    pub fn end_drag(&mut self) -> Result<Adjustment, AdjustError> {
        let DragState::Dragging { index } = self.state else {
            return Err(AdjustError::NotDragging);
        };

        self.state = DragState::Idle;
        let published = self.publisher.flush().map(|p| self.publish(p));
        tracing::debug!(index, positions = ?self.positions, "Divider drag ended");
        Ok(self.adjustment(published))
    }

    /// Restore equal spacing and publish it.
    pub fn reset(&mut self) -> Result<Adjustment, AdjustError> {
        if self.is_dragging() {
            return Err(AdjustError::DragInProgress);
        }

        self.publisher.cancel();
        self.positions = equal_spacing(self.positions.len());
        let published = self.publish(self.positions.clone());
        Ok(self.adjustment(Some(published)))
    }

    pub fn poll_settings(&mut self) -> Option<GradientCustomizationSettings> {
        self.poll_settings_at(Instant::now())
    }

    /// Publish a pending change whose quiet period has elapsed.
    pub fn poll_settings_at(&mut self, now: Instant) -> Option<GradientCustomizationSettings> {
        self.publisher.poll_at(now).map(|p| self.publish(p))
    }

    /// Follow a palette size change. Index correspondence with colors is
    /// lost, so positions are regenerated with equal spacing rather than
    /// resized; an active drag is abandoned.
    pub fn sync_color_count(&mut self, color_count: usize) -> Option<Adjustment> {
        if color_count == self.positions.len() {
            return None;
        }

        tracing::debug!(
            from = self.positions.len(),
            to = color_count,
            "Palette size changed, regenerating positions"
        );
        self.state = DragState::Idle;
        self.publisher.cancel();
        self.positions = equal_spacing(color_count);
        let published = self.publish(self.positions.clone());
        Some(self.adjustment(Some(published)))
    }

    /// Change hardness while keeping the current positions.
    pub fn set_blend_hardness(&mut self, blend_hardness: u8) -> GradientCustomizationSettings {
        self.settings.blend_hardness = GradientCustomizationSettings::new(blend_hardness).blend_hardness;
        self.settings.clone()
    }

    fn clamped_target(&self, index: usize, pointer_percent: f64) -> u8 {
        let last = self.positions.len() - 1;
        if index == 0 {
            return 0;
        }
        if index == last {
            return 100;
        }
        if !pointer_percent.is_finite() {
            return self.positions[index];
        }

        let lower = f64::from(self.positions[index - 1].saturating_add(MIN_GAP));
        let upper = f64::from(self.positions[index + 1].saturating_sub(MIN_GAP));
        pointer_percent.max(lower).min(upper).round() as u8
    }

    fn publish(&mut self, positions: Vec<u8>) -> GradientCustomizationSettings {
        self.settings.custom_color_positions =
            Some(positions.into_iter().map(f64::from).collect());
        self.settings.clone()
    }

    fn adjustment(&self, settings: Option<GradientCustomizationSettings>) -> Adjustment {
        Adjustment {
            positions: self.positions.clone(),
            settings,
        }
    }
}

fn adopt_positions(custom: &[f64], color_count: usize) -> Option<Vec<u8>> {
    if custom.len() != color_count {
        return None;
    }
    let positions: Vec<u8> = custom
        .iter()
        .map(|&p| (p.is_finite() && (0.0..=100.0).contains(&p)).then(|| p.round() as u8))
        .collect::<Option<_>>()?;
    is_valid_layout(&positions).then_some(positions)
}
