//! Section-keyed registry of mounted galleries.
//!
//! The variant form asks the gallery for a jump to a variant's featured
//! media through this registry; when no gallery registered for the section,
//! a raw class-toggle scan over the host markup is used instead.

use crate::dom;
use std::cell::RefCell;
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use yew::Callback;

thread_local! {
    static GALLERIES: RefCell<HashMap<String, Callback<u64>>> = RefCell::new(HashMap::new());
}

/// Register a mounted gallery's jump hook under its section id.
pub fn register(section_id: &str, jump: Callback<u64>) {
    GALLERIES.with(|cell| {
        cell.borrow_mut().insert(section_id.to_string(), jump);
    });
}

/// Drop a gallery's registration, on unmount.
pub fn unregister(section_id: &str) {
    GALLERIES.with(|cell| {
        cell.borrow_mut().remove(section_id);
    });
}

/// Ask the section's gallery to show the given media item.
///
/// Falls back to toggling `is-active` classes directly on the host markup
/// when no gallery is registered for the section.
pub fn jump_to_media(section_id: &str, media_id: u64) {
    let handled = GALLERIES.with(|cell| {
        cell.borrow().get(section_id).map(|jump| jump.emit(media_id)).is_some()
    });
    if !handled {
        fallback_jump(section_id, media_id);
    }
}

fn fallback_jump(section_id: &str, media_id: u64) {
    let Some(doc) = dom::document() else { return };
    let Some(wrap) = doc.get_element_by_id(&format!("product-media-gallery-{section_id}")) else {
        return;
    };
    if let Ok(active) = wrap.query_selector_all(".gallery-slide.is-active, .gallery-thumb.is-active")
    {
        for i in 0..active.length() {
            if let Some(el) = active
                .item(i)
                .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
            {
                let _ = el.class_list().remove_1("is-active");
            }
        }
    }
    for selector in [
        format!(".gallery-slide[data-media-id=\"{media_id}\"]"),
        format!(".gallery-thumb[data-media-id=\"{media_id}\"]"),
    ] {
        if let Ok(Some(el)) = wrap.query_selector(&selector) {
            let _ = el.class_list().add_1("is-active");
        }
    }
}
