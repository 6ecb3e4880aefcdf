use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Oversell policy for a variant with tracked inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryPolicy {
    /// Selling past tracked stock is forbidden.
    #[default]
    Deny,
    /// Orders past zero stock are accepted (pre-order / backorder).
    Continue,
}

/// Nested media reference as emitted by some payload shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedMedia {
    pub id: u64,
}

/// A single purchasable option combination.
///
/// Parsed once from the embedded payload and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: u64,
    #[serde(default)]
    pub option1: Option<String>,
    #[serde(default)]
    pub option2: Option<String>,
    #[serde(default)]
    pub option3: Option<String>,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub inventory_policy: InventoryPolicy,
    #[serde(default)]
    pub inventory_quantity: i64,
    /// Opaque tracking marker; inventory is tracked when this is non-empty.
    #[serde(default)]
    pub inventory_management: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub featured_media: Option<FeaturedMedia>,
    #[serde(default)]
    pub featured_media_id: Option<u64>,
}

impl Variant {
    /// The three option values in order, empty string standing in for unset.
    #[must_use]
    pub fn option_values(&self) -> [&str; 3] {
        [
            self.option1.as_deref().unwrap_or(""),
            self.option2.as_deref().unwrap_or(""),
            self.option3.as_deref().unwrap_or(""),
        ]
    }

    /// Whether the cart platform tracks stock for this variant.
    #[must_use]
    pub fn tracks_inventory(&self) -> bool {
        self.inventory_management
            .as_deref()
            .is_some_and(|m| !m.is_empty())
    }

    /// Featured media id, preferring the nested payload shape.
    #[must_use]
    pub fn featured_media_id(&self) -> Option<u64> {
        self.featured_media
            .as_ref()
            .map(|m| m.id)
            .or(self.featured_media_id)
    }
}

/// Error raised when the embedded variant payload cannot be parsed.
#[derive(Debug, Error)]
pub enum VariantPayloadError {
    #[error("variant payload is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Container for the embedded variant payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantList {
    pub variants: Vec<Variant>,
}

impl VariantList {
    /// Create an empty list (useful for tests and degraded boots).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse the embedded JSON payload, an array of variant records.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into variant records.
    pub fn from_json(json: &str) -> Result<Self, VariantPayloadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Distinct values per option position, in payload order.
    ///
    /// Positions no variant uses come back empty so the UI can skip the
    /// whole group.
    #[must_use]
    pub fn option_groups(&self) -> [Vec<String>; 3] {
        let mut groups: [Vec<String>; 3] = Default::default();
        for variant in &self.variants {
            for (slot, value) in groups.iter_mut().zip(variant.option_values()) {
                if !value.is_empty() && !slot.iter().any(|v| v == value) {
                    slot.push(value.to_string());
                }
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_parses_with_defaults() {
        let json = r#"[
            {
                "id": 111,
                "option1": "Red",
                "option2": "S",
                "available": true,
                "inventory_policy": "deny",
                "inventory_quantity": 3,
                "inventory_management": "shopify",
                "sku": "RED-S",
                "featured_media": { "id": 9001 }
            },
            { "id": 222 }
        ]"#;

        let list = VariantList::from_json(json).unwrap();
        assert_eq!(list.variants.len(), 2);

        let first = &list.variants[0];
        assert_eq!(first.option_values(), ["Red", "S", ""]);
        assert!(first.tracks_inventory());
        assert_eq!(first.featured_media_id(), Some(9001));

        let bare = &list.variants[1];
        assert_eq!(bare.inventory_policy, InventoryPolicy::Deny);
        assert!(!bare.available);
        assert!(!bare.tracks_inventory());
        assert_eq!(bare.featured_media_id(), None);
    }

    #[test]
    fn option_groups_keep_payload_order() {
        let list = VariantList::from_json(
            r#"[
                { "id": 1, "option1": "Red", "option2": "S" },
                { "id": 2, "option1": "Red", "option2": "M" },
                { "id": 3, "option1": "Blue", "option2": "S" }
            ]"#,
        )
        .unwrap();
        let groups = list.option_groups();
        assert_eq!(groups[0], vec!["Red", "Blue"]);
        assert_eq!(groups[1], vec!["S", "M"]);
        assert!(groups[2].is_empty());
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(VariantList::from_json("{not json").is_err());
        assert!(VariantList::from_json(r#"{"id": 1}"#).is_err());
    }
}
