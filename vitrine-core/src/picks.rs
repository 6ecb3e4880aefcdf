use crate::index::{VariantIndex, option_key};
use crate::variant::Variant;

/// Ordered triple of option values read from the live UI.
///
/// An empty string means the position is unset (for example, a swatch group
/// with no active selection yet).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionPicks {
    pub values: [String; 3],
}

impl OptionPicks {
    #[must_use]
    pub fn new(option1: impl Into<String>, option2: impl Into<String>, option3: impl Into<String>) -> Self {
        Self {
            values: [option1.into(), option2.into(), option3.into()],
        }
    }

    /// Joined lookup key over the set positions.
    #[must_use]
    pub fn key(&self) -> String {
        option_key(self.values.iter().map(String::as_str))
    }

    /// Whether a variant matches on every position that is actually set.
    #[must_use]
    pub fn matches(&self, variant: &Variant) -> bool {
        self.values
            .iter()
            .zip(variant.option_values())
            .all(|(pick, value)| pick.is_empty() || pick == value)
    }
}

/// Resolve the variant for the given picks.
///
/// Exact-key lookup takes precedence. On a miss the list is scanned for the
/// first variant matching only the set positions, so an incomplete pick may
/// resolve to an arbitrary matching variant; this is deliberate, not a bug.
/// The final fallback is the first variant overall.
#[must_use]
pub fn resolve_picks<'a>(
    variants: &'a [Variant],
    index: &VariantIndex,
    picks: &OptionPicks,
) -> Option<&'a Variant> {
    if let Some(pos) = index.position_by_key(&picks.key()) {
        return variants.get(pos);
    }
    variants
        .iter()
        .find(|v| picks.matches(v))
        .or_else(|| variants.first())
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
                { "id": 3, "option1": "Blue", "option2": "M" }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn exact_key_wins() {
        let list = sample();
        let index = VariantIndex::build(&list.variants);
        let picks = OptionPicks::new("Red", "M", "");
        let v = resolve_picks(&list.variants, &index, &picks).unwrap();
        assert_eq!(v.id, 2);
    }

    #[test]
    fn partial_pick_takes_first_match() {
        let list = sample();
        let index = VariantIndex::build(&list.variants);
        // Only the second position set; both id 2 and id 3 match, first wins.
        let picks = OptionPicks::new("", "M", "");
        let v = resolve_picks(&list.variants, &index, &picks).unwrap();
        assert_eq!(v.id, 2);
    }

    #[test]
    fn unmatched_picks_fall_back_to_first_variant() {
        let list = sample();
        let index = VariantIndex::build(&list.variants);
        let picks = OptionPicks::new("Green", "XL", "");
        let v = resolve_picks(&list.variants, &index, &picks).unwrap();
        assert_eq!(v.id, 1);
    }

    #[test]
    fn empty_list_resolves_to_none() {
        let index = VariantIndex::default();
        assert!(resolve_picks(&[], &index, &OptionPicks::default()).is_none());
    }
}
