/// Swipe distance cap in pixels.
pub const SWIPE_MAX_THRESHOLD_PX: f64 = 120.0;
/// Swipe threshold as a fraction of the viewport width.
pub const SWIPE_VIEWPORT_FRACTION: f64 = 0.22;
/// Horizontal wiggle past which a pointer gesture counts as a drag.
pub const DRAG_WIGGLE_PX: f64 = 3.0;

/// Navigation state of the main stage.
///
/// The index stays inside `[0, total - 1]`; wrap-around applies only when
/// the carousel was configured to loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    total: usize,
    wrap: bool,
}

impl CarouselState {
    #[must_use]
    pub fn new(total: usize, wrap: bool) -> Self {
        Self {
            index: 0,
            total,
            wrap,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Jump to a slide, clamping out-of-range input into the valid range.
    pub fn go_to(&mut self, i: usize) {
        if self.total == 0 {
            self.index = 0;
        } else {
            self.index = i.min(self.total - 1);
        }
    }

    /// Step back one slide; wraps to the last slide when looping, otherwise
    /// a no-op at the first slide.
    pub fn prev(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        } else if self.wrap && self.total > 0 {
            self.index = self.total - 1;
        }
    }

    /// Step forward one slide; wraps to the first slide when looping,
    /// otherwise a no-op at the last slide.
    pub fn next(&mut self) {
        if self.total > 0 && self.index < self.total - 1 {
            self.index += 1;
        } else if self.wrap && self.total > 0 {
            self.index = 0;
        }
    }
}

/// Pixel offset of the track for a slide index.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn track_offset(index: usize, viewport_width: f64) -> f64 {
    -(index as f64) * viewport_width
}

/// What a released swipe gesture should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Prev,
    Next,
    Snap,
}

/// Decide a released swipe from its horizontal delta.
///
/// The threshold is the smaller of 120px and 22% of the viewport width;
/// anything below it snaps back to the current slide.
#[must_use]
pub fn swipe_outcome(drag_dx: f64, viewport_width: f64) -> SwipeOutcome {
    let threshold = SWIPE_MAX_THRESHOLD_PX.min(viewport_width * SWIPE_VIEWPORT_FRACTION);
    if drag_dx > threshold {
        SwipeOutcome::Prev
    } else if drag_dx < -threshold {
        SwipeOutcome::Next
    } else {
        SwipeOutcome::Snap
    }
}

/// Whether pointer movement is enough to suppress the trailing click.
#[must_use]
pub fn counts_as_drag(drag_dx: f64) -> bool {
    drag_dx.abs() > DRAG_WIGGLE_PX
}
