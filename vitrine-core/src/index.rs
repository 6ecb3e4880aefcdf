use crate::variant::Variant;
use std::collections::HashMap;

/// Join option values into the lookup key used by [`VariantIndex`].
///
/// Unset values are skipped, so `["Red", "", ""]` and `["Red"]` produce the
/// same key, matching the storefront payload convention.
#[must_use]
pub fn option_key<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join("||")
}

/// Read-only lookup structures over a variant list.
///
/// Built in a single pass at startup; positions refer into the list the
/// index was built from. When two variants share an option key the later
/// one wins, as in the source payload's map construction.
#[derive(Debug, Clone, Default)]
pub struct VariantIndex {
    by_id: HashMap<u64, usize>,
    by_key: HashMap<String, usize>,
}

impl VariantIndex {
    /// Build both lookup tables from the payload order.
    #[must_use]
    pub fn build(variants: &[Variant]) -> Self {
        let mut by_id = HashMap::with_capacity(variants.len());
        let mut by_key = HashMap::with_capacity(variants.len());
        for (pos, variant) in variants.iter().enumerate() {
            by_id.insert(variant.id, pos);
            by_key.insert(option_key(variant.option_values()), pos);
        }
        Self { by_id, by_key }
    }

    /// Position of the variant with the given id.
    #[must_use]
    pub fn position_by_id(&self, id: u64) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    /// Position of the variant with the given joined option key.
    #[must_use]
    pub fn position_by_key(&self, key: &str) -> Option<usize> {
        self.by_key.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::VariantList;

    fn sample() -> VariantList {
        VariantList::from_json(
            r#"[
                { "id": 1, "option1": "Red", "option2": "S" },
                { "id": 2, "option1": "Red", "option2": "M" },
                { "id": 3, "option1": "Blue" }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn key_skips_unset_values() {
        assert_eq!(option_key(["Red", "", ""]), "Red");
        assert_eq!(option_key(["Red", "M", ""]), "Red||M");
        assert_eq!(option_key(["", "", ""]), "");
    }

    #[test]
    fn index_finds_by_id_and_key() {
        let list = sample();
        let index = VariantIndex::build(&list.variants);

        assert_eq!(index.position_by_id(2), Some(1));
        assert_eq!(index.position_by_id(99), None);
        assert_eq!(index.position_by_key("Red||M"), Some(1));
        assert_eq!(index.position_by_key("Blue"), Some(2));
        assert_eq!(index.position_by_key("Green"), None);
    }
}
