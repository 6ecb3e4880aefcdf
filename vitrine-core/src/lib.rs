//! Vitrine Widget Core
//!
//! Platform-agnostic logic for the Vitrine storefront widgets: the product
//! media carousel and the variant form synchronizer. This crate holds all
//! state transitions and purchase arithmetic without DOM or network
//! dependencies; the browser layer lives in `vitrine-web`.

pub mod carousel;
pub mod cart;
pub mod form;
pub mod index;
pub mod lightbox;
pub mod media;
pub mod picks;
pub mod purchase;
pub mod rail;
pub mod variant;

// Re-export commonly used types
pub use carousel::{CarouselState, SwipeOutcome, counts_as_drag, swipe_outcome, track_offset};
pub use cart::{CartContents, CartLine};
pub use form::{FormSurface, FormUpdate, VariantForm};
pub use index::{VariantIndex, option_key};
pub use lightbox::LightboxState;
pub use media::{Media, media_from_json, media_position};
pub use picks::{OptionPicks, resolve_picks};
pub use purchase::{
    AtcButton, FormMessage, StockLabel, SubmitGuard, clamp_quantity, purchase_button,
    purchase_message, stock_label, submit_guard,
};
pub use variant::{InventoryPolicy, Variant, VariantList, VariantPayloadError};
