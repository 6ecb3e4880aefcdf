//! Variant form: swatch and dropdown option groups synchronized with the
//! cart platform's price, availability and checkout affordances.

mod surface;
mod view;

use crate::{cart, dom, registry, section};
use serde::Deserialize;
use std::cell::RefCell;
use std::rc::Rc;
use surface::DomFormSurface;
use vitrine_core::{
    InventoryPolicy, OptionPicks, SubmitGuard, VariantForm, VariantList, clamp_quantity,
    submit_guard,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// How long the transient add-to-cart success message stays visible.
const SUCCESS_NOTE_MS: i32 = 5000;

/// How an option group is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    #[default]
    Swatch,
    Dropdown,
}

/// Per-group presentation config from the embedded options payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OptionConfig {
    pub name: String,
    #[serde(default)]
    pub kind: OptionKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NoteKind {
    Error,
    Success,
}

/// Transient message from the submit path, shown in place of the
/// variant-derived message until the next transition clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SubmitNote {
    kind: NoteKind,
    text: String,
}

impl SubmitNote {
    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoteKind::Error,
            text: text.into(),
        }
    }

    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoteKind::Success,
            text: text.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductFormProps {
    pub variants: VariantList,
    pub section_id: AttrValue,
    /// Page path the section fragment refresh is issued against.
    pub product_path: AttrValue,
    #[prop_or_default]
    pub initial_variant: Option<u64>,
    #[prop_or_default]
    pub options: Vec<OptionConfig>,
    /// Host-rendered fragments captured at boot, kept as last-known-good.
    #[prop_or_default]
    pub initial_price_html: Option<AttrValue>,
    #[prop_or_default]
    pub initial_payment_html: Option<AttrValue>,
    /// Surface add-to-cart failures inline. Off by default; the host theme
    /// opts in through its markup.
    #[prop_or_default]
    pub show_submit_errors: bool,
}

fn hide_note_later(note: UseStateHandle<Option<SubmitNote>>) {
    let Some(win) = dom::window() else { return };
    let clear = Closure::once(move || {
        note.set(None);
    });
    if win
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            clear.as_ref().unchecked_ref(),
            SUCCESS_NOTE_MS,
        )
        .is_err()
    {
        dom::console_error("failed to schedule message timeout");
    }
    clear.forget();
}

#[function_component(ProductForm)]
pub fn product_form(props: &ProductFormProps) -> Html {
    let form = {
        let variants = props.variants.clone();
        let initial_variant = props.initial_variant;
        use_mut_ref(move || VariantForm::with_initial(variants, initial_variant, None))
    };
    let update = use_state(|| {
        form.borrow()
            .as_ref()
            .map(VariantForm::initial_update)
    });
    let picks = use_mut_ref(|| {
        (*update).as_ref().map_or_else(OptionPicks::default, |u| {
            OptionPicks::new(u.options[0].clone(), u.options[1].clone(), u.options[2].clone())
        })
    });
    let note = use_state(|| None::<SubmitNote>);
    let price_html = use_state(|| props.initial_price_html.clone());
    let payment_html = use_state(|| props.initial_payment_html.clone());
    let gate = use_mut_ref(section::LatestRequestGate::new);
    let qty_ref = use_node_ref();
    let form_ref = use_node_ref();

    // Variant transitions fan out to the address bar, the gallery and the
    // server-rendered fragments. Quantity-only updates skip all three.
    {
        let price_html = price_html.clone();
        let payment_html = payment_html.clone();
        let gate = Rc::clone(&gate);
        let section_id = props.section_id.clone();
        let product_path = props.product_path.clone();
        use_effect_with((*update).clone(), move |update| {
            if let Some(update) = update
                && update.refresh_fragments
            {
                dom::replace_variant_param(update.variant_id);
                if let Some(media_id) = update.featured_media_id {
                    registry::jump_to_media(&section_id, media_id);
                }
                let signal = gate.borrow().begin();
                let variant_id = update.variant_id;
                let path = product_path.to_string();
                let section_id = section_id.to_string();
                spawn_local(async move {
                    let Some(fragments) = section::refresh_fragments(
                        &path,
                        &section_id,
                        variant_id,
                        signal.as_ref(),
                    )
                    .await
                    else {
                        return;
                    };
                    if let Some(price) = fragments.price {
                        price_html.set(Some(AttrValue::from(price)));
                    }
                    if let Some(payment) = fragments.payment {
                        payment_html.set(Some(AttrValue::from(payment)));
                    }
                });
            }
            || {}
        });
    }

    let make_surface = {
        let picks = Rc::clone(&picks);
        let qty_ref = qty_ref.clone();
        let update = update.clone();
        move || DomFormSurface {
            picks: Rc::clone(&picks),
            qty_ref: qty_ref.clone(),
            update: update.clone(),
        }
    };

    let on_swatch = {
        let form = Rc::clone(&form);
        let picks = Rc::clone(&picks);
        let note = note.clone();
        let make_surface = make_surface.clone();
        Callback::from(move |(slot, value): (usize, String)| {
            picks.borrow_mut().values[slot] = value;
            note.set(None);
            if let Some(form) = form.borrow_mut().as_mut() {
                form.sync_picks(&mut make_surface());
            }
        })
    };
    // Dropdown groups go through the same pick resolution as swatches.
    let on_dropdown = on_swatch.clone();

    let on_raw_select = {
        let form = Rc::clone(&form);
        let note = note.clone();
        let make_surface = make_surface.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            let Ok(id) = select.value().parse::<u64>() else {
                return;
            };
            note.set(None);
            if let Some(form) = form.borrow_mut().as_mut() {
                form.sync_select(&mut make_surface(), id);
            }
        })
    };

    let sync_quantity = {
        let form = Rc::clone(&form);
        let note = note.clone();
        let make_surface = make_surface.clone();
        move || {
            note.set(None);
            if let Some(form) = form.borrow_mut().as_mut() {
                form.sync_quantity(&mut make_surface());
            }
        }
    };
    let quantity_handlers = view::QuantityHandlers {
        on_input: {
            let sync_quantity = sync_quantity.clone();
            Callback::from(move |_: InputEvent| sync_quantity())
        },
        on_change: {
            let sync_quantity = sync_quantity;
            Callback::from(move |_: Event| sync_quantity())
        },
        on_minus: {
            let form = Rc::clone(&form);
            let note = note.clone();
            let make_surface = make_surface.clone();
            Callback::from(move |_: MouseEvent| {
                note.set(None);
                if let Some(form) = form.borrow_mut().as_mut() {
                    form.step_quantity(&mut make_surface(), -1);
                }
            })
        },
        on_plus: {
            let form = Rc::clone(&form);
            let note = note.clone();
            let make_surface = make_surface.clone();
            Callback::from(move |_: MouseEvent| {
                note.set(None);
                if let Some(form) = form.borrow_mut().as_mut() {
                    form.step_quantity(&mut make_surface(), 1);
                }
            })
        },
    };

    let onsubmit = {
        let form = Rc::clone(&form);
        let form_ref = form_ref.clone();
        let qty_ref = qty_ref.clone();
        let note = note.clone();
        let show_errors = props.show_submit_errors;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(variant) = form.borrow().as_ref().map(|f| f.current().clone()) else {
                return;
            };
            let Some(form_el) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let quantity = qty_ref
                .cast::<HtmlInputElement>()
                .map_or_else(|| "1".to_string(), |input| input.value());
            let note = note.clone();
            spawn_local(async move {
                // Tracked deny-policy variants are checked against the cart
                // before any write; the race with concurrent cart edits is
                // accepted, the backend still has the final word.
                if variant.tracks_inventory()
                    && variant.inventory_policy == InventoryPolicy::Deny
                {
                    let in_cart = cart::quantity_in_cart(variant.id).await;
                    if let SubmitGuard::Blocked { message } = submit_guard(&variant, in_cart) {
                        note.set(Some(SubmitNote::error(message)));
                        return;
                    }
                }
                let Ok(fields) = FormData::new_with_form(&form_el) else {
                    return;
                };
                let _ = fields.set_with_str("id", &variant.id.to_string());
                let _ = fields.set_with_str("quantity", &clamp_quantity(&quantity).to_string());
                match cart::add_to_cart(&fields).await {
                    Ok(body) => {
                        note.set(Some(SubmitNote::success("Product added to cart.")));
                        hide_note_later(note.clone());
                        cart::emit_cart_added(&body);
                    }
                    Err(err) => {
                        if show_errors {
                            note.set(Some(SubmitNote::error(err.to_string())));
                        } else {
                            log::warn!("add to cart failed: {err}");
                        }
                    }
                }
            });
        })
    };

    let Some(current) = (*update).clone() else {
        return html! { <div class="product-form is-empty" /> };
    };
    let groups = props.variants.option_groups();
    let price_block = (*price_html).clone().map_or_else(Html::default, |html| {
        Html::from_html_unchecked(html)
    });
    let payment_block = (*payment_html).clone().map_or_else(Html::default, |html| {
        Html::from_html_unchecked(html)
    });
    html! {
        <div class="product-form">
            <form
                ref={form_ref.clone()}
                data-product-form=""
                method="post"
                action="/cart/add"
                onsubmit={onsubmit}
            >
                <input
                    type="hidden"
                    name="id"
                    data-variant-id-field=""
                    value={current.variant_id.to_string()}
                />
                <div
                    class="product-price"
                    data-price=""
                    id={format!("price-container-{}", props.section_id)}
                >
                    { price_block }
                </div>
                { view::stock_view(&current.stock) }
                { view::swatch_groups_view(&groups, &props.options, &current.options, &on_swatch, &on_dropdown) }
                { view::raw_select_view(props.variants.variants.as_slice(), current.variant_id, &on_raw_select) }
                { view::quantity_view(current.quantity, &qty_ref, &quantity_handlers) }
                <button
                    type="submit"
                    class="add-to-cart"
                    data-atc=""
                    disabled={!current.button.enabled}
                    aria-disabled={if current.button.enabled { "false" } else { "true" }}
                >{current.button.label}</button>
                <div class="payment-button" data-payment-button="">
                    { payment_block }
                </div>
                { view::message_view((*note).as_ref(), current.message.as_ref()) }
                { view::sku_barcode_view(&current) }
            </form>
        </div>
    }
}
