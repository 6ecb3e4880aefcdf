//! Imperative DOM work for the gallery: stage swipes, rail wheel easing,
//! rail drag-to-scroll, and keeping the active thumbnail in view.

use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use vitrine_core::{carousel, rail};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, PointerEvent, ScrollBehavior, ScrollToOptions, WheelEvent};

/// Delay before a settled drag stops suppressing clicks.
pub const CLICK_COOLDOWN_MS: i32 = 50;
/// Easing tick cadence, close enough to a display frame.
pub const FRAME_MS: i32 = 16;

/// Live pointer-drag state of the main stage.
#[derive(Default)]
pub struct StageDrag {
    pub active: bool,
    pub start_x: f64,
    pub dx: f64,
}

/// Live pointer-drag state of the thumbnail rail.
#[derive(Default)]
pub struct RailDrag {
    pub active: bool,
    pub start_x: f64,
    pub start_y: f64,
    pub start_left: f64,
    pub start_top: f64,
}

/// Wheel easing target along both axes; only the live axis is used.
#[derive(Default)]
pub struct RailMotion {
    pub target_x: f64,
    pub target_y: f64,
    pub animating: bool,
}

/// The rail lays out horizontally on narrow viewports, where its wrapper
/// switches to a flex row.
#[must_use]
pub fn rail_is_horizontal(rail: &Element) -> bool {
    let Some(win) = dom::window() else {
        return false;
    };
    win.get_computed_style(rail)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("display").ok())
        .is_some_and(|display| display.contains("flex"))
}

fn max_scroll(rail: &Element, horizontal: bool) -> f64 {
    if horizontal {
        f64::from(rail.scroll_width() - rail.client_width())
    } else {
        f64::from(rail.scroll_height() - rail.client_height())
    }
}

/// Fold a wheel event into the easing target.
pub fn apply_wheel(rail: &Element, motion: &Rc<RefCell<RailMotion>>, event: &WheelEvent) {
    let horizontal = rail_is_horizontal(rail);
    let span = if horizontal {
        f64::from(rail.client_width())
    } else {
        f64::from(rail.client_height())
    };
    let raw = rail::normalize_wheel_delta(
        event.delta_x(),
        event.delta_y(),
        rail::WheelDeltaMode::from_dom(event.delta_mode()),
        span,
    );
    let step = rail::wheel_step(raw);
    let max = max_scroll(rail, horizontal);
    let mut motion = motion.borrow_mut();
    if horizontal {
        motion.target_x = rail::clamp_offset(motion.target_x + step, max);
    } else {
        motion.target_y = rail::clamp_offset(motion.target_y + step, max);
    }
    motion.animating = true;
}

/// Jump the easing target by one page in the given direction.
pub fn apply_page_jump(rail: &Element, motion: &Rc<RefCell<RailMotion>>, direction: i32) {
    let horizontal = rail_is_horizontal(rail);
    let span = if horizontal {
        f64::from(rail.client_width())
    } else {
        f64::from(rail.client_height())
    };
    let step = rail::page_step(horizontal, span) * f64::from(direction.signum());
    let max = max_scroll(rail, horizontal);
    let mut motion = motion.borrow_mut();
    if horizontal {
        motion.target_x = rail::clamp_offset(f64::from(rail.scroll_left()) + step, max);
    } else {
        motion.target_y = rail::clamp_offset(f64::from(rail.scroll_top()) + step, max);
    }
    motion.animating = true;
}

/// One easing tick toward the wheel target; a no-op while idle.
#[allow(clippy::cast_possible_truncation)]
pub fn rail_tick(rail: &Element, motion: &Rc<RefCell<RailMotion>>) {
    let animating = motion.borrow().animating;
    if !animating {
        return;
    }
    let horizontal = rail_is_horizontal(rail);
    let (current, target) = {
        let motion = motion.borrow();
        if horizontal {
            (f64::from(rail.scroll_left()), motion.target_x)
        } else {
            (f64::from(rail.scroll_top()), motion.target_y)
        }
    };
    let step = rail::ease_toward(current, target);
    if horizontal {
        rail.set_scroll_left(step.offset.round() as i32);
    } else {
        rail.set_scroll_top(step.offset.round() as i32);
    }
    if step.settled {
        motion.borrow_mut().animating = false;
    }
}

/// Start a rail drag: freeze easing and record the anchor offsets.
pub fn begin_rail_drag(
    rail: &Element,
    drag: &Rc<RefCell<RailDrag>>,
    motion: &Rc<RefCell<RailMotion>>,
    was_dragging: &Rc<RefCell<bool>>,
    event: &PointerEvent,
) {
    {
        let mut motion = motion.borrow_mut();
        motion.animating = false;
        motion.target_x = f64::from(rail.scroll_left());
        motion.target_y = f64::from(rail.scroll_top());
    }
    *drag.borrow_mut() = RailDrag {
        active: true,
        start_x: f64::from(event.client_x()),
        start_y: f64::from(event.client_y()),
        start_left: f64::from(rail.scroll_left()),
        start_top: f64::from(rail.scroll_top()),
    };
    *was_dragging.borrow_mut() = false;
}

/// Track a rail drag, flipping the click guard past the drag threshold.
#[allow(clippy::cast_possible_truncation)]
pub fn move_rail_drag(
    rail: &Element,
    drag: &Rc<RefCell<RailDrag>>,
    motion: &Rc<RefCell<RailMotion>>,
    was_dragging: &Rc<RefCell<bool>>,
    event: &PointerEvent,
) {
    let state = {
        let drag = drag.borrow();
        if !drag.active {
            return;
        }
        (drag.start_x, drag.start_y, drag.start_left, drag.start_top)
    };
    let horizontal = rail_is_horizontal(rail);
    if horizontal {
        let dx = f64::from(event.client_x()) - state.0;
        if rail::drag_exceeds_threshold(dx) {
            *was_dragging.borrow_mut() = true;
        }
        rail.set_scroll_left((state.2 - dx).round() as i32);
        motion.borrow_mut().target_x = f64::from(rail.scroll_left());
    } else {
        let dy = f64::from(event.client_y()) - state.1;
        if rail::drag_exceeds_threshold(dy) {
            *was_dragging.borrow_mut() = true;
        }
        rail.set_scroll_top((state.3 - dy).round() as i32);
        motion.borrow_mut().target_y = f64::from(rail.scroll_top());
    }
}

/// Settle a rail drag and clear the click guard after a short cooldown.
pub fn end_rail_drag(drag: &Rc<RefCell<RailDrag>>, was_dragging: &Rc<RefCell<bool>>) {
    if !drag.borrow().active {
        return;
    }
    drag.borrow_mut().active = false;
    clear_after_cooldown(Rc::clone(was_dragging));
}

/// Reset a suppression flag once the cooldown elapses.
pub fn clear_after_cooldown(flag: Rc<RefCell<bool>>) {
    let Some(win) = dom::window() else {
        *flag.borrow_mut() = false;
        return;
    };
    let reset = Closure::once(move || {
        *flag.borrow_mut() = false;
    });
    if win
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            reset.as_ref().unchecked_ref(),
            CLICK_COOLDOWN_MS,
        )
        .is_err()
    {
        dom::console_error("failed to schedule drag cooldown");
    }
    reset.forget();
}

/// Apply the live drag offset to the track, bypassing the rendered style.
pub fn track_drag_transform(track: &HtmlElement, index: usize, dx: f64) {
    let width = f64::from(track.client_width());
    let offset = carousel::track_offset(index, width) + dx;
    let style = track.style();
    let _ = style.set_property("transition", "none");
    let _ = style.set_property("transform", &format!("translate3d({offset}px, 0, 0)"));
}

/// Snap the track back to the current slide with a short transition.
pub fn track_snap(track: &HtmlElement, index: usize) {
    let style = track.style();
    let _ = style.set_property("transition", "transform 280ms ease");
    let _ = style.set_property(
        "transform",
        &format!("translate3d(-{}%, 0, 0)", index * 100),
    );
}

/// Decide a released stage drag. Returns the swipe outcome so the caller
/// can dispatch navigation or snap back.
#[must_use]
pub fn release_stage_drag(
    track: &HtmlElement,
    drag: &Rc<RefCell<StageDrag>>,
    did_drag: &Rc<RefCell<bool>>,
) -> Option<carousel::SwipeOutcome> {
    let dx = {
        let state = drag.borrow();
        if !state.active {
            return None;
        }
        state.dx
    };
    drag.borrow_mut().active = false;
    let outcome = carousel::swipe_outcome(dx, f64::from(track.client_width()));
    clear_after_cooldown(Rc::clone(did_drag));
    Some(outcome)
}

/// Scroll the rail so the active thumbnail is visible, directionally and
/// only when it sits outside the rail's bounds.
pub fn ensure_active_thumb_visible(rail: &Element, index: usize) {
    let Ok(Some(thumb)) = rail.query_selector(&format!("[data-index=\"{index}\"]")) else {
        return;
    };
    let rail_rect = rail.get_bounding_client_rect();
    let thumb_rect = thumb.get_bounding_client_rect();
    let horizontal = rail_is_horizontal(rail);
    let (item, viewport) = if horizontal {
        (
            rail::Extent {
                start: thumb_rect.left(),
                end: thumb_rect.right(),
            },
            rail::Extent {
                start: rail_rect.left(),
                end: rail_rect.right(),
            },
        )
    } else {
        (
            rail::Extent {
                start: thumb_rect.top(),
                end: thumb_rect.bottom(),
            },
            rail::Extent {
                start: rail_rect.top(),
                end: rail_rect.bottom(),
            },
        )
    };
    let Some(delta) = rail::scroll_correction(item, viewport) else {
        return;
    };
    let options = ScrollToOptions::new();
    if horizontal {
        options.set_left(delta);
    } else {
        options.set_top(delta);
    }
    options.set_behavior(ScrollBehavior::Smooth);
    rail.scroll_by_with_scroll_to_options(&options);
}
