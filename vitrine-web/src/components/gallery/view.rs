//! Declarative markup for the gallery: stage, dots, counter, thumbnail
//! rail and lightbox overlay.

use vitrine_core::{LightboxState, Media};
use yew::prelude::*;

fn indexed(callback: &Callback<usize>, index: usize) -> Callback<MouseEvent> {
    let callback = callback.clone();
    Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        callback.emit(index);
    })
}

pub(super) struct StageHandlers {
    pub on_prev: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
    pub on_pointer_down: Callback<PointerEvent>,
    pub on_pointer_move: Callback<PointerEvent>,
    pub on_open_lightbox: Callback<usize>,
}

pub(super) fn stage_view(
    media: &[Media],
    index: usize,
    track_ref: &NodeRef,
    handlers: &StageHandlers,
) -> Html {
    let style = format!(
        "transition: transform 300ms ease; transform: translate3d(-{}%, 0, 0);",
        index * 100
    );
    html! {
        <div class="gallery-stage">
            <button
                type="button"
                class="gallery-prev"
                aria-label="Previous slide"
                onclick={handlers.on_prev.clone()}
            >{"‹"}</button>
            <div class="gallery-viewport">
                <div
                    class="gallery-track"
                    ref={track_ref.clone()}
                    data-index={index.to_string()}
                    style={style}
                    onpointerdown={handlers.on_pointer_down.clone()}
                    onpointermove={handlers.on_pointer_move.clone()}
                >
                    { for media.iter().enumerate().map(|(i, item)| html! {
                        <figure
                            class={classes!("gallery-slide", (i == index).then_some("is-active"))}
                            data-index={i.to_string()}
                            data-media-id={item.id.to_string()}
                        >
                            <img src={item.src.clone()} alt={item.alt.clone()} draggable="false" />
                            <button
                                type="button"
                                class="gallery-open-lightbox"
                                aria-label="Zoom image"
                                onclick={indexed(&handlers.on_open_lightbox, i)}
                            />
                        </figure>
                    }) }
                </div>
            </div>
            <button
                type="button"
                class="gallery-next"
                aria-label="Next slide"
                onclick={handlers.on_next.clone()}
            >{"›"}</button>
        </div>
    }
}

pub(super) fn dots_view(total: usize, index: usize, on_dot: &Callback<usize>) -> Html {
    html! {
        <div class="gallery-dots">
            { for (0..total).map(|i| html! {
                <button
                    type="button"
                    class={classes!("gallery-dot", (i == index).then_some("is-active"))}
                    aria-label={format!("Go to slide {}", i + 1)}
                    data-index={i.to_string()}
                    onclick={indexed(on_dot, i)}
                />
            }) }
        </div>
    }
}

pub(super) fn counter_view(index: usize, total: usize) -> Html {
    html! {
        <div class="gallery-counter">
            <span class="gallery-current">{index + 1}</span>
            {"/"}
            <span class="gallery-total">{total}</span>
        </div>
    }
}

pub(super) struct RailHandlers {
    pub on_thumb: Callback<usize>,
    pub on_wheel: Callback<WheelEvent>,
    pub on_pointer_down: Callback<PointerEvent>,
    pub on_pointer_move: Callback<PointerEvent>,
    pub on_page: Callback<i32>,
}

pub(super) fn thumbs_view(
    media: &[Media],
    index: usize,
    rail_ref: &NodeRef,
    handlers: &RailHandlers,
) -> Html {
    let page = |direction: i32| {
        let on_page = handlers.on_page.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_page.emit(direction);
        })
    };
    html! {
        <div class="gallery-thumbs">
            <button
                type="button"
                class="gallery-thumbs-prev"
                aria-label="Scroll thumbnails back"
                onclick={page(-1)}
            >{"‹"}</button>
            <div
                class="gallery-thumbs-track"
                ref={rail_ref.clone()}
                onwheel={handlers.on_wheel.clone()}
                onpointerdown={handlers.on_pointer_down.clone()}
                onpointermove={handlers.on_pointer_move.clone()}
            >
                { for media.iter().enumerate().map(|(i, item)| html! {
                    <button
                        type="button"
                        class={classes!("gallery-thumb", (i == index).then_some("is-active"))}
                        data-index={i.to_string()}
                        data-media-id={item.id.to_string()}
                        onclick={indexed(&handlers.on_thumb, i)}
                    >
                        <img src={item.thumb_src().to_string()} alt={item.alt.clone()} draggable="false" />
                    </button>
                }) }
            </div>
            <button
                type="button"
                class="gallery-thumbs-next"
                aria-label="Scroll thumbnails forward"
                onclick={page(1)}
            >{"›"}</button>
        </div>
    }
}

pub(super) struct LightboxHandlers {
    pub on_close: Callback<MouseEvent>,
    pub on_prev: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

pub(super) fn lightbox_view(
    media: &[Media],
    lightbox: &LightboxState,
    handlers: &LightboxHandlers,
) -> Html {
    if !lightbox.is_open() {
        return Html::default();
    }
    let current = media.get(lightbox.index());
    html! {
        <div class="gallery-lightbox is-open" role="dialog" aria-modal="true">
            <div class="gallery-lightbox-backdrop" onclick={handlers.on_close.clone()} />
            <button
                type="button"
                class="gallery-lightbox-close"
                aria-label="Close"
                onclick={handlers.on_close.clone()}
            >{"×"}</button>
            <button
                type="button"
                class="gallery-lightbox-prev"
                aria-label="Previous image"
                onclick={handlers.on_prev.clone()}
            >{"‹"}</button>
            { if let Some(item) = current {
                html! {
                    <img
                        class="gallery-lightbox-img"
                        src={item.src.clone()}
                        alt={item.alt.clone()}
                        draggable="false"
                    />
                }
            } else {
                Html::default()
            } }
            <button
                type="button"
                class="gallery-lightbox-next"
                aria-label="Next image"
                onclick={handlers.on_next.clone()}
            >{"›"}</button>
            <div class="gallery-lightbox-counter">
                <span class="gallery-lightbox-current">{lightbox.index() + 1}</span>
                {"/"}
                <span class="gallery-lightbox-total">{media.len()}</span>
            </div>
        </div>
    }
}
