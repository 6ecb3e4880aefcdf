//! Widget bootstrapping: find marked roots in the host page, read the
//! embedded payloads, and mount the yew components over them.

use crate::components::gallery::{Gallery, GalleryProps};
use crate::components::product_form::{OptionConfig, ProductForm, ProductFormProps};
use crate::dom;
use vitrine_core::{VariantList, media_from_json};
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Element;
use yew::AttrValue;

const DEFAULT_AUTOPLAY_MS: u32 = 3500;

fn embedded_json(root: &Element, selector: &str) -> Option<String> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
}

fn attr_flag(root: &Element, name: &str) -> bool {
    root.get_attribute(name).as_deref() == Some("true")
}

/// Parse the embedded variant payload, degrading to an empty list.
#[must_use]
pub fn parse_variants(json: &str) -> VariantList {
    VariantList::from_json(json).unwrap_or_else(|err| {
        log::warn!("variant payload ignored: {err}");
        VariantList::empty()
    })
}

/// Mount every widget whose root markup is present in the document.
pub fn mount_all() {
    let Some(doc) = dom::document() else { return };
    if let Ok(nodes) = doc.query_selector_all("[data-product-media-gallery]") {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                mount_gallery(&el);
            }
        }
    }
    if let Ok(Some(el)) = doc.query_selector("[data-product-info]") {
        mount_product_form(&el);
    }
}

/// Attach a gallery to a root container carrying the media payload and
/// display settings in its dataset.
pub fn mount_gallery(root: &Element) {
    let media = embedded_json(root, "[data-media-json]")
        .and_then(|json| match media_from_json(&json) {
            Ok(media) => Some(media),
            Err(err) => {
                log::warn!("media payload ignored: {err}");
                None
            }
        })
        .unwrap_or_default();
    let props = GalleryProps {
        media,
        section_id: AttrValue::from(root.get_attribute("data-section-id").unwrap_or_default()),
        wrap: attr_flag(root, "data-loop"),
        autoplay: attr_flag(root, "data-autoplay"),
        autoplay_interval_ms: root
            .get_attribute("data-autoplay-speed")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_AUTOPLAY_MS),
    };
    root.set_inner_html("");
    yew::Renderer::<Gallery>::with_root_and_props(root.clone(), props).render();
}

/// Attach the variant form to the product info root.
pub fn mount_product_form(root: &Element) {
    let variants = dom::document()
        .and_then(|doc| doc.query_selector("[data-variants-json]").ok().flatten())
        .and_then(|el| el.text_content())
        .map(|json| parse_variants(&json))
        .unwrap_or_default();
    let options: Vec<OptionConfig> = embedded_json(root, "[data-options-json]")
        .and_then(|json| match serde_json::from_str(&json) {
            Ok(options) => Some(options),
            Err(err) => {
                log::warn!("options payload ignored: {err}");
                None
            }
        })
        .unwrap_or_default();
    // The host-rendered price and payment fragments become the initial
    // last-known-good copies before the mount replaces the markup.
    let initial_price_html = root
        .query_selector("[data-price]")
        .ok()
        .flatten()
        .map(|el| AttrValue::from(el.inner_html()));
    let initial_payment_html = root
        .query_selector("[data-payment-button]")
        .ok()
        .flatten()
        .map(|el| AttrValue::from(el.inner_html()));
    let props = ProductFormProps {
        variants,
        section_id: AttrValue::from(root.get_attribute("data-section-id").unwrap_or_default()),
        product_path: AttrValue::from(
            dom::window()
                .and_then(|win| win.location().pathname().ok())
                .unwrap_or_else(|| "/".to_string()),
        ),
        initial_variant: dom::variant_param(),
        options,
        initial_price_html,
        initial_payment_html,
        show_submit_errors: attr_flag(root, "data-show-add-errors"),
    };
    root.set_inner_html("");
    yew::Renderer::<ProductForm>::with_root_and_props(root.clone(), props).render();
}

/// Host-page hook: attach a gallery to the given root container.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = initGallery)]
pub fn init_gallery(root: Element) {
    mount_gallery(&root);
}

/// Host-page hook: attach the variant form to the given root container.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = initProductForm)]
pub fn init_product_form(root: Element) {
    mount_product_form(&root);
}
