//! Thumbnail rail scroll arithmetic.
//!
//! The rail scrolls along one axis, vertical on wide layouts and horizontal
//! on narrow ones. Wheel input is normalized, capped and eased toward a
//! target offset; pointer drags move the offset directly.

/// Fraction of a wheel step applied to the scroll target.
pub const WHEEL_SCALE: f64 = 0.18;
/// Cap on a single wheel step, to tame momentum spikes.
pub const WHEEL_CAP: f64 = 60.0;
/// Easing factor applied per animation frame.
pub const EASE: f64 = 0.26;
/// Distance below which easing snaps to the target.
pub const SNAP_WINDOW: f64 = 0.5;
/// Margin kept around the active thumbnail when scrolling it into view.
pub const SCROLL_MARGIN: f64 = 6.0;
/// Pointer travel past which a rail gesture counts as a drag, not a click.
pub const DRAG_THRESHOLD: f64 = 4.0;
/// Pixels per line for line-mode wheel deltas.
const LINE_HEIGHT: f64 = 16.0;

/// Wheel delta unit as reported by the browser event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDeltaMode {
    Pixels,
    Lines,
    Pages,
}

impl WheelDeltaMode {
    /// Map the DOM `deltaMode` constant; unknown values read as pixels.
    #[must_use]
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => Self::Lines,
            2 => Self::Pages,
            _ => Self::Pixels,
        }
    }
}

/// Reduce a wheel event to one pixel delta along the scroll axis.
///
/// The dominant axis wins (vertical when present, else horizontal); line
/// and page modes are converted using the rail's span for pages.
#[must_use]
pub fn normalize_wheel_delta(delta_x: f64, delta_y: f64, mode: WheelDeltaMode, span: f64) -> f64 {
    let raw = if delta_y.abs() > 0.0 { delta_y } else { delta_x };
    match mode {
        WheelDeltaMode::Pixels => raw,
        WheelDeltaMode::Lines => raw * LINE_HEIGHT,
        WheelDeltaMode::Pages => raw * span,
    }
}

/// Cap and scale a normalized wheel delta into a target adjustment.
#[must_use]
pub fn wheel_step(raw: f64) -> f64 {
    raw.signum() * raw.abs().min(WHEEL_CAP) * WHEEL_SCALE
}

/// Clamp a scroll target into the rail's scrollable range.
#[must_use]
pub fn clamp_offset(target: f64, max: f64) -> f64 {
    target.clamp(0.0, max.max(0.0))
}

/// One easing step toward the target offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EaseStep {
    pub offset: f64,
    pub settled: bool,
}

/// Move the current offset a fraction of the way to the target, snapping
/// once within the settle window.
#[must_use]
pub fn ease_toward(current: f64, target: f64) -> EaseStep {
    let diff = target - current;
    if diff.abs() < SNAP_WINDOW {
        EaseStep {
            offset: target,
            settled: true,
        }
    } else {
        EaseStep {
            offset: current + diff * EASE,
            settled: false,
        }
    }
}

/// Distance the prev/next rail buttons jump, from the rail's visible span.
#[must_use]
pub fn page_step(horizontal: bool, span: f64) -> f64 {
    let step = (span * 0.85).floor();
    if horizontal {
        step.max(120.0)
    } else {
        step.max(140.0)
    }
}

/// One-dimensional extent along the rail's scroll axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub start: f64,
    pub end: f64,
}

/// Scroll adjustment that brings an item into the rail's visible bounds.
///
/// Returns `None` when the item is already fully visible; the caller
/// scrolls by the returned delta otherwise.
#[must_use]
pub fn scroll_correction(item: Extent, viewport: Extent) -> Option<f64> {
    if item.start < viewport.start {
        Some(item.start - viewport.start - SCROLL_MARGIN)
    } else if item.end > viewport.end {
        Some(item.end - viewport.end + SCROLL_MARGIN)
    } else {
        None
    }
}

/// Whether pointer travel along the rail axis has become a drag.
#[must_use]
pub fn drag_exceeds_threshold(delta: f64) -> bool {
    delta.abs() >= DRAG_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_modes_normalize_to_pixels() {
        assert!((normalize_wheel_delta(0.0, 30.0, WheelDeltaMode::Pixels, 200.0) - 30.0).abs() < 1e-9);
        assert!((normalize_wheel_delta(0.0, 2.0, WheelDeltaMode::Lines, 200.0) - 32.0).abs() < 1e-9);
        assert!((normalize_wheel_delta(0.0, 1.0, WheelDeltaMode::Pages, 200.0) - 200.0).abs() < 1e-9);
        // Horizontal fallback when there is no vertical component.
        assert!((normalize_wheel_delta(-12.0, 0.0, WheelDeltaMode::Pixels, 200.0) - -12.0).abs() < 1e-9);
    }

    #[test]
    fn wheel_step_caps_spikes_and_keeps_sign() {
        assert!((wheel_step(1000.0) - WHEEL_CAP * WHEEL_SCALE).abs() < 1e-9);
        assert!((wheel_step(-1000.0) - -(WHEEL_CAP * WHEEL_SCALE)).abs() < 1e-9);
        assert!((wheel_step(10.0) - 1.8).abs() < 1e-9);
    }

    #[test]
    fn offsets_clamp_to_scrollable_range() {
        assert!((clamp_offset(-5.0, 100.0) - 0.0).abs() < f64::EPSILON);
        assert!((clamp_offset(150.0, 100.0) - 100.0).abs() < f64::EPSILON);
        // Rail shorter than its viewport: nothing to scroll.
        assert!((clamp_offset(10.0, -20.0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn easing_converges_and_snaps() {
        let step = ease_toward(0.0, 100.0);
        assert!(!step.settled);
        assert!((step.offset - 26.0).abs() < 1e-9);

        let snap = ease_toward(99.8, 100.0);
        assert!(snap.settled);
        assert!((snap.offset - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn page_steps_have_orientation_floors() {
        assert!((page_step(true, 100.0) - 120.0).abs() < f64::EPSILON);
        assert!((page_step(false, 100.0) - 140.0).abs() < f64::EPSILON);
        assert!((page_step(true, 400.0) - 340.0).abs() < f64::EPSILON);
    }

    #[test]
    fn scroll_correction_is_directional() {
        let viewport = Extent {
            start: 100.0,
            end: 300.0,
        };
        // Before the visible window: negative correction with margin.
        let before = scroll_correction(
            Extent {
                start: 80.0,
                end: 120.0,
            },
            viewport,
        );
        assert_eq!(before, Some(-26.0));
        // After the window: positive correction with margin.
        let after = scroll_correction(
            Extent {
                start: 290.0,
                end: 340.0,
            },
            viewport,
        );
        assert_eq!(after, Some(46.0));
        // Fully visible: no correction.
        assert_eq!(
            scroll_correction(
                Extent {
                    start: 150.0,
                    end: 200.0
                },
                viewport
            ),
            None
        );
    }

    #[test]
    fn rail_drag_threshold_is_four_pixels() {
        assert!(!drag_exceeds_threshold(3.9));
        assert!(drag_exceeds_threshold(4.0));
        assert!(drag_exceeds_threshold(-4.5));
    }
}
