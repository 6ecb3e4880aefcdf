//! Read model for the cart platform's `/cart.js` response.
use serde::Deserialize;

/// One line of the remote cart.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CartLine {
    pub variant_id: u64,
    #[serde(default)]
    pub quantity: i64,
}

/// Cart contents as returned by `GET /cart.js`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CartContents {
    #[serde(default)]
    pub items: Vec<CartLine>,
}

impl CartContents {
    /// Parse a `/cart.js` response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not the expected JSON shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Units of the given variant already held in the cart.
    #[must_use]
    pub fn quantity_for(&self, variant_id: u64) -> i64 {
        self.items
            .iter()
            .filter(|line| line.variant_id == variant_id)
            .map(|line| line.quantity)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_quantity_across_matching_lines() {
        let cart = CartContents::from_json(
            r#"{"items":[
                {"variant_id": 1, "quantity": 2},
                {"variant_id": 2, "quantity": 5},
                {"variant_id": 1, "quantity": 1}
            ]}"#,
        )
        .unwrap();
        assert_eq!(cart.quantity_for(1), 3);
        assert_eq!(cart.quantity_for(2), 5);
        assert_eq!(cart.quantity_for(9), 0);
    }

    #[test]
    fn empty_or_missing_items_sum_to_zero() {
        let cart = CartContents::from_json("{}").unwrap();
        assert_eq!(cart.quantity_for(1), 0);
    }
}
