//! Cart platform calls: the quantity probe and the add-to-cart POST.

use crate::dom;
use thiserror::Error;
use vitrine_core::CartContents;
use web_sys::{CustomEvent, CustomEventInit, FormData};

const CART_URL: &str = "/cart.js";
const CART_ADD_URL: &str = "/cart/add.js";
/// Event emitted after a successful add, for mini-cart style listeners.
pub const CART_ADDED_EVENT: &str = "cart:added";

/// Units of a variant already held in the cart.
///
/// Any failure reads as zero; the submit guard then lets the backend have
/// the final word.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn quantity_in_cart(variant_id: u64) -> i64 {
    match dom::fetch_json_text(CART_URL).await {
        Ok(body) => CartContents::from_json(&body)
            .map(|cart| cart.quantity_for(variant_id))
            .unwrap_or(0),
        Err(_) => 0,
    }
}

/// Failure modes of the add-to-cart POST.
#[derive(Debug, Error)]
pub enum AddToCartError {
    /// The backend rejected the line, e.g. because stock ran out meanwhile.
    #[error("{description}")]
    Rejected { description: String },
    #[error("add to cart request failed: {0}")]
    Network(String),
}

/// POST the form to the add endpoint and return the raw response payload.
///
/// # Errors
///
/// Returns [`AddToCartError::Rejected`] for an HTTP error status (with the
/// backend's `description` when present) and [`AddToCartError::Network`]
/// when the request itself fails.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn add_to_cart(form: &FormData) -> Result<String, AddToCartError> {
    let outcome = dom::post_form(CART_ADD_URL, form)
        .await
        .map_err(|err| AddToCartError::Network(dom::js_error_message(&err)))?;
    if outcome.ok {
        Ok(outcome.body)
    } else {
        let description = serde_json::from_str::<serde_json::Value>(&outcome.body)
            .ok()
            .and_then(|v| v.get("description")?.as_str().map(str::to_string))
            .unwrap_or_else(|| "Add to cart failed".to_string());
        Err(AddToCartError::Rejected { description })
    }
}

/// Dispatch the `cart:added` event with the response payload as detail.
pub fn emit_cart_added(payload_json: &str) {
    let Some(doc) = dom::document() else { return };
    let detail = js_sys::JSON::parse(payload_json).unwrap_or(wasm_bindgen::JsValue::NULL);
    let init = CustomEventInit::new();
    init.set_detail(&detail);
    if let Ok(event) = CustomEvent::new_with_event_init_dict(CART_ADDED_EVENT, &init) {
        let _ = doc.dispatch_event(&event);
    }
}
