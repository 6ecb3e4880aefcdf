//! Product media gallery: indexed stage with swipe, synchronized
//! thumbnail rail, dot indicators, counter, lightbox and autoplay.

mod interactions;
mod view;

use crate::{dom, registry};
use interactions::{RailDrag, RailMotion, StageDrag};
use std::rc::Rc;
use vitrine_core::{CarouselState, LightboxState, Media, SwipeOutcome, carousel, media_position};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, KeyboardEvent, PointerEvent};
use yew::prelude::*;

/// Class on the document root that suppresses page scroll while the
/// lightbox is open.
pub const NO_SCROLL_CLASS: &str = "gallery-no-scroll";

#[derive(Clone, PartialEq)]
struct Stage(CarouselState);

enum StageAction {
    GoTo(usize),
    Prev,
    Next,
}

impl Reducible for Stage {
    type Action = StageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0;
        match action {
            StageAction::GoTo(i) => state.go_to(i),
            StageAction::Prev => state.prev(),
            StageAction::Next => state.next(),
        }
        Rc::new(Self(state))
    }
}

#[derive(Clone, PartialEq)]
struct Overlay(LightboxState);

enum OverlayAction {
    OpenAt(usize),
    Close,
    Prev,
    Next,
}

impl Reducible for Overlay {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0;
        match action {
            OverlayAction::OpenAt(i) => state.open_at(i),
            OverlayAction::Close => state.close(),
            OverlayAction::Prev => state.prev(),
            OverlayAction::Next => state.next(),
        }
        Rc::new(Self(state))
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub media: Vec<Media>,
    pub section_id: AttrValue,
    #[prop_or_default]
    pub wrap: bool,
    #[prop_or_default]
    pub autoplay: bool,
    #[prop_or(3500)]
    pub autoplay_interval_ms: u32,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let total = props.media.len();
    let stage = use_reducer_eq({
        let wrap = props.wrap;
        move || Stage(CarouselState::new(total, wrap))
    });
    let overlay = use_reducer_eq({
        let wrap = props.wrap;
        move || Overlay(LightboxState::new(total, wrap))
    });
    let track_ref = use_node_ref();
    let rail_ref = use_node_ref();
    let stage_drag = use_mut_ref(StageDrag::default);
    let did_drag = use_mut_ref(|| false);
    let rail_drag = use_mut_ref(RailDrag::default);
    let thumb_was_dragging = use_mut_ref(|| false);
    let rail_motion = use_mut_ref(RailMotion::default);

    // Window-level release so drags ending outside the widget still settle.
    {
        let dispatcher = stage.dispatcher();
        let track_ref = track_ref.clone();
        let stage_drag = Rc::clone(&stage_drag);
        let did_drag = Rc::clone(&did_drag);
        let rail_drag = Rc::clone(&rail_drag);
        let thumb_was_dragging = Rc::clone(&thumb_was_dragging);
        let wrap = props.wrap;
        use_effect_with((), move |()| {
            let release = Closure::wrap(Box::new(move |_: PointerEvent| {
                if let Some(track) = track_ref.cast::<HtmlElement>()
                    && let Some(outcome) =
                        interactions::release_stage_drag(&track, &stage_drag, &did_drag)
                {
                    let index: usize = track
                        .get_attribute("data-index")
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(0);
                    let can_move = match outcome {
                        SwipeOutcome::Prev => index > 0 || (wrap && total > 1),
                        SwipeOutcome::Next => index + 1 < total || (wrap && total > 1),
                        SwipeOutcome::Snap => false,
                    };
                    if can_move {
                        match outcome {
                            SwipeOutcome::Prev => dispatcher.dispatch(StageAction::Prev),
                            SwipeOutcome::Next => dispatcher.dispatch(StageAction::Next),
                            SwipeOutcome::Snap => {}
                        }
                    } else {
                        interactions::track_snap(&track, index);
                    }
                }
                interactions::end_rail_drag(&rail_drag, &thumb_was_dragging);
            }) as Box<dyn FnMut(PointerEvent)>);
            if let Some(win) = dom::window() {
                let listener = release.as_ref().unchecked_ref();
                let _ = win.add_event_listener_with_callback("pointerup", listener);
                let _ = win.add_event_listener_with_callback("pointercancel", listener);
            }
            move || {
                if let Some(win) = dom::window() {
                    let listener = release.as_ref().unchecked_ref();
                    let _ = win.remove_event_listener_with_callback("pointerup", listener);
                    let _ = win.remove_event_listener_with_callback("pointercancel", listener);
                }
                drop(release);
            }
        });
    }

    // Rail wheel easing runs on a frame-paced interval for the component's
    // lifetime; ticks are no-ops while idle.
    {
        let rail_ref = rail_ref.clone();
        let rail_motion = Rc::clone(&rail_motion);
        use_effect_with((), move |()| {
            let mut interval_id: Option<i32> = None;
            let mut stored: Option<Closure<dyn FnMut()>> = None;
            if let Some(win) = dom::window() {
                let tick = Closure::wrap(Box::new(move || {
                    if let Some(rail) = rail_ref.cast::<Element>() {
                        interactions::rail_tick(&rail, &rail_motion);
                    }
                }) as Box<dyn FnMut()>);
                if let Ok(id) = win.set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    interactions::FRAME_MS,
                ) {
                    interval_id = Some(id);
                    stored = Some(tick);
                }
            }
            move || {
                if let Some(id) = interval_id
                    && let Some(win) = dom::window()
                {
                    win.clear_interval_with_handle(id);
                }
                drop(stored);
            }
        });
    }

    // Fixed-interval autoplay. It keeps ticking through drags and while the
    // lightbox is open; current product behavior.
    {
        let dispatcher = stage.dispatcher();
        use_effect_with(
            (props.autoplay, props.autoplay_interval_ms, total),
            move |(autoplay, interval_ms, total)| {
                let mut interval_id: Option<i32> = None;
                let mut stored: Option<Closure<dyn FnMut()>> = None;
                if *autoplay
                    && *total > 1
                    && let Some(win) = dom::window()
                    && let Ok(timeout) = i32::try_from(*interval_ms)
                {
                    let advance = Closure::wrap(Box::new(move || {
                        dispatcher.dispatch(StageAction::Next);
                    }) as Box<dyn FnMut()>);
                    if let Ok(id) = win.set_interval_with_callback_and_timeout_and_arguments_0(
                        advance.as_ref().unchecked_ref(),
                        timeout,
                    ) {
                        interval_id = Some(id);
                        stored = Some(advance);
                    }
                }
                move || {
                    if let Some(id) = interval_id
                        && let Some(win) = dom::window()
                    {
                        win.clear_interval_with_handle(id);
                    }
                    drop(stored);
                }
            },
        );
    }

    // Keyboard control while the lightbox is open.
    {
        let dispatcher = overlay.dispatcher();
        use_effect_with(overlay.0.is_open(), move |open| {
            let mut stored: Option<Closure<dyn FnMut(KeyboardEvent)>> = None;
            if *open && let Some(doc) = dom::document() {
                let keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                    match event.key().as_str() {
                        "Escape" => dispatcher.dispatch(OverlayAction::Close),
                        "ArrowLeft" => dispatcher.dispatch(OverlayAction::Prev),
                        "ArrowRight" => dispatcher.dispatch(OverlayAction::Next),
                        _ => {}
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);
                let _ = doc
                    .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
                stored = Some(keydown);
            }
            move || {
                if let Some(closure) = stored
                    && let Some(doc) = dom::document()
                {
                    let _ = doc.remove_event_listener_with_callback(
                        "keydown",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    // Page scroll suppression follows the lightbox.
    use_effect_with(overlay.0.is_open(), |open| {
        dom::set_root_class(NO_SCROLL_CLASS, *open);
        || {}
    });

    // Featured-media jumps from the variant form arrive via the registry.
    {
        let media = props.media.clone();
        let dispatcher = stage.dispatcher();
        use_effect_with(props.section_id.clone(), move |section| {
            let jump = Callback::from(move |media_id: u64| {
                if let Some(pos) = media_position(&media, media_id) {
                    dispatcher.dispatch(StageAction::GoTo(pos));
                }
            });
            registry::register(section, jump);
            let section = section.clone();
            move || registry::unregister(&section)
        });
    }

    // Keep the active thumbnail inside the rail's visible bounds.
    {
        let rail_ref = rail_ref.clone();
        use_effect_with(stage.0.index(), move |index| {
            if let Some(rail) = rail_ref.cast::<Element>() {
                interactions::ensure_active_thumb_visible(&rail, *index);
            }
            || {}
        });
    }

    let on_pointer_down = {
        let stage_drag = Rc::clone(&stage_drag);
        let track_ref = track_ref.clone();
        Callback::from(move |event: PointerEvent| {
            *stage_drag.borrow_mut() = StageDrag {
                active: true,
                start_x: f64::from(event.client_x()),
                dx: 0.0,
            };
            if let Some(track) = track_ref.cast::<HtmlElement>() {
                let _ = track.style().set_property("transition", "none");
            }
        })
    };
    let on_pointer_move = {
        let stage_drag = Rc::clone(&stage_drag);
        let did_drag = Rc::clone(&did_drag);
        let track_ref = track_ref.clone();
        let index = stage.0.index();
        Callback::from(move |event: PointerEvent| {
            let dx = {
                let mut drag = stage_drag.borrow_mut();
                if !drag.active {
                    return;
                }
                drag.dx = f64::from(event.client_x()) - drag.start_x;
                if carousel::counts_as_drag(drag.dx) {
                    *did_drag.borrow_mut() = true;
                }
                drag.dx
            };
            if let Some(track) = track_ref.cast::<HtmlElement>() {
                interactions::track_drag_transform(&track, index, dx);
            }
        })
    };
    let on_open_lightbox = {
        let did_drag = Rc::clone(&did_drag);
        let dispatcher = overlay.dispatcher();
        Callback::from(move |i: usize| {
            if *did_drag.borrow() {
                return;
            }
            dispatcher.dispatch(OverlayAction::OpenAt(i));
        })
    };
    let stage_handlers = view::StageHandlers {
        on_prev: {
            let dispatcher = stage.dispatcher();
            Callback::from(move |event: MouseEvent| {
                event.prevent_default();
                dispatcher.dispatch(StageAction::Prev);
            })
        },
        on_next: {
            let dispatcher = stage.dispatcher();
            Callback::from(move |event: MouseEvent| {
                event.prevent_default();
                dispatcher.dispatch(StageAction::Next);
            })
        },
        on_pointer_down,
        on_pointer_move,
        on_open_lightbox,
    };

    let on_dot = {
        let dispatcher = stage.dispatcher();
        Callback::from(move |i: usize| dispatcher.dispatch(StageAction::GoTo(i)))
    };
    let rail_handlers = view::RailHandlers {
        on_thumb: {
            let dispatcher = stage.dispatcher();
            let thumb_was_dragging = Rc::clone(&thumb_was_dragging);
            Callback::from(move |i: usize| {
                if *thumb_was_dragging.borrow() {
                    return;
                }
                dispatcher.dispatch(StageAction::GoTo(i));
            })
        },
        on_wheel: {
            let rail_ref = rail_ref.clone();
            let rail_motion = Rc::clone(&rail_motion);
            Callback::from(move |event: WheelEvent| {
                event.prevent_default();
                if let Some(rail) = rail_ref.cast::<Element>() {
                    interactions::apply_wheel(&rail, &rail_motion, &event);
                }
            })
        },
        on_pointer_down: {
            let rail_ref = rail_ref.clone();
            let rail_drag = Rc::clone(&rail_drag);
            let rail_motion = Rc::clone(&rail_motion);
            let thumb_was_dragging = Rc::clone(&thumb_was_dragging);
            Callback::from(move |event: PointerEvent| {
                if let Some(rail) = rail_ref.cast::<Element>() {
                    interactions::begin_rail_drag(
                        &rail,
                        &rail_drag,
                        &rail_motion,
                        &thumb_was_dragging,
                        &event,
                    );
                }
            })
        },
        on_pointer_move: {
            let rail_ref = rail_ref.clone();
            let rail_drag = Rc::clone(&rail_drag);
            let rail_motion = Rc::clone(&rail_motion);
            let thumb_was_dragging = Rc::clone(&thumb_was_dragging);
            Callback::from(move |event: PointerEvent| {
                if let Some(rail) = rail_ref.cast::<Element>() {
                    interactions::move_rail_drag(
                        &rail,
                        &rail_drag,
                        &rail_motion,
                        &thumb_was_dragging,
                        &event,
                    );
                }
            })
        },
        on_page: {
            let rail_ref = rail_ref.clone();
            let rail_motion = Rc::clone(&rail_motion);
            Callback::from(move |direction: i32| {
                if let Some(rail) = rail_ref.cast::<Element>() {
                    interactions::apply_page_jump(&rail, &rail_motion, direction);
                }
            })
        },
    };
    let lightbox_handlers = view::LightboxHandlers {
        on_close: {
            let dispatcher = overlay.dispatcher();
            Callback::from(move |_| dispatcher.dispatch(OverlayAction::Close))
        },
        on_prev: {
            let dispatcher = overlay.dispatcher();
            Callback::from(move |_| dispatcher.dispatch(OverlayAction::Prev))
        },
        on_next: {
            let dispatcher = overlay.dispatcher();
            Callback::from(move |_| dispatcher.dispatch(OverlayAction::Next))
        },
    };

    let index = stage.0.index();
    html! {
        <div
            id={format!("product-media-gallery-{}", props.section_id)}
            class="product-gallery"
            data-section-id={props.section_id.clone()}
        >
            { view::stage_view(&props.media, index, &track_ref, &stage_handlers) }
            { view::dots_view(total, index, &on_dot) }
            { view::counter_view(index, total) }
            { view::thumbs_view(&props.media, index, &rail_ref, &rail_handlers) }
            { view::lightbox_view(&props.media, &overlay.0, &lightbox_handlers) }
        </div>
    }
}
