//! Server-rendered section fragment refresh.
//!
//! Price and dynamic checkout markup come from the backend, so a variant
//! change re-fetches the page section and splices the two fragments into
//! the live view. Only the most recently issued request is allowed to
//! land: each new request aborts the one in flight, and abort rejections
//! are swallowed as expected noise.

use crate::dom;
use std::cell::RefCell;
use wasm_bindgen::JsValue;
use web_sys::{AbortController, AbortSignal, DomParser, SupportedType};

/// Shared cancellation handle enforcing last-request-wins.
#[derive(Default)]
pub struct LatestRequestGate {
    current: RefCell<Option<AbortController>>,
}

impl LatestRequestGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort any in-flight request and hand out the signal for the next one.
    ///
    /// Returns `None` when the browser cannot create an abort controller;
    /// the caller then proceeds unguarded.
    pub fn begin(&self) -> Option<AbortSignal> {
        if let Some(previous) = self.current.borrow_mut().take() {
            previous.abort();
        }
        let controller = AbortController::new().ok()?;
        let signal = controller.signal();
        *self.current.borrow_mut() = Some(controller);
        Some(signal)
    }
}

/// The two spliceable fragments of a section response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionFragments {
    pub price: Option<String>,
    pub payment: Option<String>,
}

/// URL of the section render for a variant, relative to the product page.
#[must_use]
pub fn fragment_url(path: &str, section_id: &str, variant_id: u64) -> String {
    format!("{path}?section_id={section_id}&variant={variant_id}")
}

/// Extract the price and payment fragments from a section response body.
///
/// # Errors
///
/// Returns the rejection value when the markup cannot be parsed.
pub fn parse_fragments(html: &str, section_id: &str) -> Result<SectionFragments, JsValue> {
    let parser = DomParser::new()?;
    let doc = parser.parse_from_string(html, SupportedType::TextHtml)?;
    let price = doc
        .query_selector(&format!("#price-container-{section_id}"))
        .ok()
        .flatten()
        .map(|el| el.inner_html());
    let payment = doc
        .query_selector("[data-payment-button]")
        .ok()
        .flatten()
        .map(|el| el.inner_html());
    Ok(SectionFragments { price, payment })
}

/// Fetch and parse the fragments for a variant.
///
/// Returns `Ok(None)` when the request was superseded (aborted); other
/// failures are logged and also produce `None` so the caller keeps its
/// last-known-good fragments.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn refresh_fragments(
    path: &str,
    section_id: &str,
    variant_id: u64,
    signal: Option<&AbortSignal>,
) -> Option<SectionFragments> {
    let url = fragment_url(path, section_id, variant_id);
    let html = match dom::fetch_text(&url, signal).await {
        Ok(html) => html,
        Err(err) => {
            if !dom::is_abort_error(&err) {
                log::warn!(
                    "section fragment refresh failed: {}",
                    dom::js_error_message(&err)
                );
            }
            return None;
        }
    };
    match parse_fragments(&html, section_id) {
        Ok(fragments) => Some(fragments),
        Err(err) => {
            log::warn!(
                "section fragment parse failed: {}",
                dom::js_error_message(&err)
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_url_is_page_relative() {
        assert_eq!(
            fragment_url("/products/tee", "main-product", 42),
            "/products/tee?section_id=main-product&variant=42"
        );
    }
}
