use crate::variant::{InventoryPolicy, Variant};

/// Lowest quantity the stepper can produce.
pub const MIN_QUANTITY: u32 = 1;

/// Clamp a raw quantity input to a valid integer of at least one.
///
/// Non-numeric input (including an empty field) is treated as one.
#[must_use]
pub fn clamp_quantity(raw: &str) -> u32 {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n >= i64::from(MIN_QUANTITY))
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(MIN_QUANTITY)
}

/// Computed add-to-cart control state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtcButton {
    pub enabled: bool,
    pub label: &'static str,
}

/// Derive the add-to-cart button from availability, policy and quantity.
#[must_use]
pub fn purchase_button(variant: &Variant, quantity: u32) -> AtcButton {
    let quantity_ok = i64::from(quantity) <= variant.inventory_quantity;
    if !variant.available {
        AtcButton {
            enabled: false,
            label: "Out Of Stock",
        }
    } else if variant.inventory_policy == InventoryPolicy::Deny && !quantity_ok {
        AtcButton {
            enabled: false,
            label: "Add to cart",
        }
    } else if variant.inventory_policy == InventoryPolicy::Continue {
        AtcButton {
            enabled: true,
            label: "Pre - Order",
        }
    } else {
        AtcButton {
            enabled: true,
            label: "Add to cart",
        }
    }
}

/// Inline message shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    OutOfStock,
    QuantityCapped { limit: i64 },
}

impl FormMessage {
    /// User-facing copy, matching the storefront theme's shipped strings.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::OutOfStock => "This variant is out of stock.".to_string(),
            Self::QuantityCapped { limit } => {
                format!("Sorry! Currently you can't add more then {limit} quantities.")
            }
        }
    }
}

/// Derive the inline message for a variant at the requested quantity.
///
/// Returns `None` when the message block should be cleared.
#[must_use]
pub fn purchase_message(variant: &Variant, quantity: u32) -> Option<FormMessage> {
    if !variant.available {
        return Some(FormMessage::OutOfStock);
    }
    if variant.inventory_policy == InventoryPolicy::Deny
        && i64::from(quantity) > variant.inventory_quantity
    {
        return Some(FormMessage::QuantityCapped {
            limit: variant.inventory_quantity,
        });
    }
    None
}

/// Three-tier stock label with its styling flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLabel {
    pub text: String,
    pub in_stock: bool,
}

/// Derive the stock label for a variant.
#[must_use]
pub fn stock_label(variant: &Variant) -> StockLabel {
    let quantity = variant.inventory_quantity.max(0);
    let text = if variant.inventory_policy == InventoryPolicy::Continue {
        "In Stock".to_string()
    } else if quantity == 0 {
        "Out Of Stock".to_string()
    } else {
        format!("In Stock ({quantity})")
    };
    let in_stock = variant.inventory_policy == InventoryPolicy::Continue || quantity > 0;
    StockLabel { text, in_stock }
}

/// Outcome of the pre-submit inventory check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitGuard {
    Proceed,
    Blocked { message: String },
}

/// Decide whether an add-to-cart submission may proceed.
///
/// Only enforced when inventory is tracked and oversell is denied; the
/// submission is blocked only when the cart already holds the full
/// remaining stock for the variant.
#[must_use]
pub fn submit_guard(variant: &Variant, quantity_in_cart: i64) -> SubmitGuard {
    let capped = variant.tracks_inventory() && variant.inventory_policy == InventoryPolicy::Deny;
    if capped && quantity_in_cart >= variant.inventory_quantity {
        SubmitGuard::Blocked {
            message: "You already have the maximum available quantity for this variant in your cart."
                .to_string(),
        }
    } else {
        SubmitGuard::Proceed
    }
}
