//! Declarative markup for the variant form: swatch groups, the raw select
//! fallback, quantity stepper, purchase affordances and message block.

use super::{NoteKind, OptionConfig, OptionKind, SubmitNote};
use vitrine_core::{FormMessage, FormUpdate, StockLabel, Variant};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

fn group_change(on_dropdown: &Callback<(usize, String)>, slot: usize) -> Callback<Event> {
    let on_dropdown = on_dropdown.clone();
    Callback::from(move |event: Event| {
        if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
            on_dropdown.emit((slot, select.value()));
        }
    })
}

pub(super) fn swatch_groups_view(
    groups: &[Vec<String>; 3],
    configs: &[OptionConfig],
    selected: &[String; 3],
    on_swatch: &Callback<(usize, String)>,
    on_dropdown: &Callback<(usize, String)>,
) -> Html {
    html! {
        <div class="option-groups" data-swatch-root="">
            { for groups.iter().enumerate().filter(|(_, values)| !values.is_empty()).map(|(slot, values)| {
                let config = configs.get(slot).cloned().unwrap_or_else(|| OptionConfig {
                    name: format!("Option {}", slot + 1),
                    kind: OptionKind::default(),
                });
                let picked = selected[slot].clone();
                match config.kind {
                    OptionKind::Dropdown => html! {
                        <div class="option-group" data-kind="dropdown">
                            <label class="option-name">{config.name.clone()}</label>
                            <select
                                class="option-select"
                                onchange={group_change(on_dropdown, slot)}
                            >
                                { for values.iter().map(|value| html! {
                                    <option
                                        value={value.clone()}
                                        selected={*value == picked}
                                    >{value.clone()}</option>
                                }) }
                            </select>
                        </div>
                    },
                    OptionKind::Swatch => html! {
                        <div class="option-group" data-kind="swatch">
                            <label class="option-name">
                                {config.name.clone()}
                                <span class="option-picked">{picked.clone()}</span>
                            </label>
                            <div class="option-values">
                                { for values.iter().map(|value| {
                                    let active = *value == picked;
                                    let onclick = {
                                        let on_swatch = on_swatch.clone();
                                        let value = value.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            on_swatch.emit((slot, value.clone()));
                                        })
                                    };
                                    html! {
                                        <button
                                            type="button"
                                            class={classes!("swatch", active.then_some("is-active"))}
                                            data-option-value={value.clone()}
                                            aria-pressed={if active { "true" } else { "false" }}
                                            {onclick}
                                        >{value.clone()}</button>
                                    }
                                }) }
                            </div>
                        </div>
                    },
                }
            }) }
        </div>
    }
}

pub(super) fn raw_select_view(
    variants: &[Variant],
    current_id: u64,
    onchange: &Callback<Event>,
) -> Html {
    html! {
        <select
            class="variant-select"
            data-variant-select=""
            aria-label="Select variant"
            onchange={onchange.clone()}
        >
            { for variants.iter().map(|variant| {
                let label = variant
                    .option_values()
                    .iter()
                    .filter(|v| !v.is_empty())
                    .copied()
                    .collect::<Vec<_>>()
                    .join(" / ");
                html! {
                    <option
                        value={variant.id.to_string()}
                        selected={variant.id == current_id}
                    >{label}</option>
                }
            }) }
        </select>
    }
}

pub(super) struct QuantityHandlers {
    pub on_input: Callback<InputEvent>,
    pub on_change: Callback<Event>,
    pub on_minus: Callback<MouseEvent>,
    pub on_plus: Callback<MouseEvent>,
}

pub(super) fn quantity_view(quantity: u32, qty_ref: &NodeRef, handlers: &QuantityHandlers) -> Html {
    html! {
        <div class="quantity-stepper">
            <button
                type="button"
                class="quantity-minus"
                data-qty-minus=""
                aria-label="Decrease quantity"
                onclick={handlers.on_minus.clone()}
            >{"−"}</button>
            <input
                ref={qty_ref.clone()}
                class="quantity-input"
                data-qty-input=""
                type="number"
                min="1"
                name="quantity"
                value={quantity.to_string()}
                oninput={handlers.on_input.clone()}
                onchange={handlers.on_change.clone()}
            />
            <button
                type="button"
                class="quantity-plus"
                data-qty-plus=""
                aria-label="Increase quantity"
                onclick={handlers.on_plus.clone()}
            >{"+"}</button>
        </div>
    }
}

pub(super) fn stock_view(stock: &StockLabel) -> Html {
    let state_class = if stock.in_stock {
        "in-stock"
    } else {
        "out-of-stock"
    };
    html! {
        <span
            class={classes!("stock-label", state_class)}
            data-available-quantity=""
        >{stock.text.clone()}</span>
    }
}

pub(super) fn message_view(note: Option<&SubmitNote>, message: Option<&FormMessage>) -> Html {
    let (class, text) = match (note, message) {
        (Some(note), _) => (
            match note.kind {
                NoteKind::Error => "form-message is-error",
                NoteKind::Success => "form-message is-success",
            },
            note.text.clone(),
        ),
        (None, Some(message)) => ("form-message is-error", message.text()),
        (None, None) => ("form-message", String::new()),
    };
    let style = if text.is_empty() {
        "visibility: hidden;"
    } else {
        "visibility: visible;"
    };
    html! {
        <div class={class} data-notifications="" role="status" style={style}>{text}</div>
    }
}

pub(super) fn sku_barcode_view(update: &FormUpdate) -> Html {
    html! {
        <div class="product-codes">
            <p class="product-sku">
                {"SKU: "}<span data-sku="">{update.sku.clone()}</span>
            </p>
            <p class="product-barcode">
                {"Barcode: "}<span data-barcode="">{update.barcode.clone()}</span>
            </p>
        </div>
    }
}
