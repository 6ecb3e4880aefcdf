#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod boot;
pub mod cart;
pub mod components;
pub mod dom;
pub mod registry;
pub mod section;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Attach widgets to every marked root already in the document.
    boot::mount_all();
}
