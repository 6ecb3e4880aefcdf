use crate::index::VariantIndex;
use crate::picks::{OptionPicks, resolve_picks};
use crate::purchase::{
    AtcButton, FormMessage, MIN_QUANTITY, StockLabel, clamp_quantity, purchase_button,
    purchase_message, stock_label,
};
use crate::variant::{Variant, VariantList};

/// Capabilities the synchronizer needs from the hosting UI.
///
/// Keeping the seam this narrow lets the resolution and application logic
/// run against a mock surface in host-side tests, with the browser layer
/// supplying the real implementation.
pub trait FormSurface {
    /// Current option picks as shown by the controls.
    fn read_picks(&self) -> OptionPicks;
    /// Raw quantity field content, not yet clamped.
    fn read_quantity(&self) -> String;
    /// Reflect a computed update back into the UI.
    fn render(&mut self, update: &FormUpdate);
}

/// Everything the UI must reflect after a state transition.
#[derive(Debug, Clone, PartialEq)]
pub struct FormUpdate {
    pub variant_id: u64,
    /// Selected option values for swatch reflection, empty when unset.
    pub options: [String; 3],
    pub quantity: u32,
    pub button: AtcButton,
    pub message: Option<FormMessage>,
    pub stock: StockLabel,
    pub sku: String,
    pub barcode: String,
    pub featured_media_id: Option<u64>,
    /// Whether the server-rendered fragments need a refresh. Set on variant
    /// changes, clear on quantity-only edits.
    pub refresh_fragments: bool,
}

/// State machine over the single current variant.
///
/// Exactly one variant is current at all times after construction; every
/// transition funnels through [`VariantForm::apply_variant`].
#[derive(Debug, Clone)]
pub struct VariantForm {
    variants: Vec<Variant>,
    index: VariantIndex,
    current: usize,
    quantity: u32,
}

impl VariantForm {
    /// Build the form over a parsed payload, defaulting to the first variant.
    ///
    /// Returns `None` for an empty payload; the widget then degrades to a
    /// plain form with no synchronization.
    #[must_use]
    pub fn new(list: VariantList) -> Option<Self> {
        Self::with_initial(list, None, None)
    }

    /// Build the form and pick the initial variant: the URL's `?variant=`
    /// id when it resolves, else the raw select's value, else the first
    /// variant in the payload.
    #[must_use]
    pub fn with_initial(
        list: VariantList,
        url_variant: Option<u64>,
        select_value: Option<u64>,
    ) -> Option<Self> {
        if list.variants.is_empty() {
            return None;
        }
        let index = VariantIndex::build(&list.variants);
        let current = url_variant
            .and_then(|id| index.position_by_id(id))
            .or_else(|| select_value.and_then(|id| index.position_by_id(id)))
            .unwrap_or(0);
        Some(Self {
            variants: list.variants,
            index,
            current,
            quantity: MIN_QUANTITY,
        })
    }

    #[must_use]
    pub fn current(&self) -> &Variant {
        &self.variants[self.current]
    }

    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    fn update_for_current(&self, refresh_fragments: bool) -> FormUpdate {
        let variant = self.current();
        let [o1, o2, o3] = variant.option_values();
        FormUpdate {
            variant_id: variant.id,
            options: [o1.to_string(), o2.to_string(), o3.to_string()],
            quantity: self.quantity,
            button: purchase_button(variant, self.quantity),
            message: purchase_message(variant, self.quantity),
            stock: stock_label(variant),
            sku: variant.sku.clone().unwrap_or_default(),
            barcode: variant.barcode.clone().unwrap_or_default(),
            featured_media_id: variant.featured_media_id(),
            refresh_fragments,
        }
    }

    /// The single state-transition function: make `id` current, reset the
    /// quantity to one, and compute the full UI update.
    ///
    /// Unknown ids leave the state untouched and produce no update.
    pub fn apply_variant(&mut self, id: u64) -> Option<FormUpdate> {
        let pos = self.index.position_by_id(id)?;
        self.current = pos;
        self.quantity = MIN_QUANTITY;
        Some(self.update_for_current(true))
    }

    /// Update for the current variant without a transition, used on mount.
    #[must_use]
    pub fn initial_update(&self) -> FormUpdate {
        self.update_for_current(true)
    }

    /// Swatch or dropdown change: read the picks, resolve, apply, render.
    pub fn sync_picks<S: FormSurface>(&mut self, surface: &mut S) {
        let picks = surface.read_picks();
        let Some(id) = resolve_picks(&self.variants, &self.index, &picks).map(|v| v.id) else {
            return;
        };
        if let Some(update) = self.apply_variant(id) {
            surface.render(&update);
        }
    }

    /// Raw select change: apply the chosen id directly.
    pub fn sync_select<S: FormSurface>(&mut self, surface: &mut S, id: u64) {
        if let Some(update) = self.apply_variant(id) {
            surface.render(&update);
        }
    }

    /// Quantity edit: clamp the raw field content and re-evaluate the
    /// button and message against the current variant. The current variant
    /// and the server fragments are left alone.
    pub fn sync_quantity<S: FormSurface>(&mut self, surface: &mut S) {
        self.quantity = clamp_quantity(&surface.read_quantity());
        let update = self.update_for_current(false);
        surface.render(&update);
    }

    /// Stepper click: adjust by one in either direction, floor of one.
    pub fn step_quantity<S: FormSurface>(&mut self, surface: &mut S, delta: i32) {
        let current = clamp_quantity(&surface.read_quantity());
        let next = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs()).max(MIN_QUANTITY)
        } else {
            current.saturating_add(delta.unsigned_abs())
        };
        self.quantity = next;
        let update = self.update_for_current(false);
        surface.render(&update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> VariantList {
        VariantList::from_json(
            r#"[
                { "id": 1, "option1": "Red", "option2": "S", "available": true,
                  "inventory_policy": "deny", "inventory_quantity": 3,
                  "inventory_management": "shopify", "sku": "RED-S" },
                { "id": 2, "option1": "Red", "option2": "M", "available": true,
                  "inventory_policy": "deny", "inventory_quantity": 0,
                  "inventory_management": "shopify", "sku": "RED-M" }
            ]"#,
        )
        .unwrap()
    }

    #[derive(Default)]
    struct MockSurface {
        picks: OptionPicks,
        quantity: String,
        rendered: Vec<FormUpdate>,
    }

    impl FormSurface for MockSurface {
        fn read_picks(&self) -> OptionPicks {
            self.picks.clone()
        }
        fn read_quantity(&self) -> String {
            self.quantity.clone()
        }
        fn render(&mut self, update: &FormUpdate) {
            self.rendered.push(update.clone());
        }
    }

    #[test]
    fn empty_payload_builds_no_form() {
        assert!(VariantForm::new(VariantList::empty()).is_none());
    }

    #[test]
    fn initial_variant_prefers_url_then_select() {
        let form = VariantForm::with_initial(list(), Some(2), None).unwrap();
        assert_eq!(form.current().id, 2);

        let form = VariantForm::with_initial(list(), Some(999), Some(2)).unwrap();
        assert_eq!(form.current().id, 2);

        let form = VariantForm::with_initial(list(), None, None).unwrap();
        assert_eq!(form.current().id, 1);
    }

    #[test]
    fn pick_sync_applies_resolved_variant() {
        let mut form = VariantForm::new(list()).unwrap();
        let mut surface = MockSurface {
            picks: OptionPicks::new("Red", "M", ""),
            quantity: "1".to_string(),
            ..MockSurface::default()
        };
        form.sync_picks(&mut surface);

        assert_eq!(form.current().id, 2);
        let update = surface.rendered.last().unwrap();
        assert_eq!(update.variant_id, 2);
        assert_eq!(update.sku, "RED-M");
        assert!(update.refresh_fragments);
        assert_eq!(update.quantity, 1);
    }

    #[test]
    fn variant_change_resets_quantity() {
        let mut form = VariantForm::new(list()).unwrap();
        let mut surface = MockSurface {
            quantity: "5".to_string(),
            ..MockSurface::default()
        };
        form.sync_quantity(&mut surface);
        assert_eq!(form.quantity(), 5);

        let update = form.apply_variant(2).unwrap();
        assert_eq!(update.quantity, 1);
        assert_eq!(form.quantity(), 1);
    }

    #[test]
    fn quantity_sync_does_not_touch_fragments() {
        let mut form = VariantForm::new(list()).unwrap();
        let mut surface = MockSurface {
            quantity: "4".to_string(),
            ..MockSurface::default()
        };
        form.sync_quantity(&mut surface);

        let update = surface.rendered.last().unwrap();
        assert!(!update.refresh_fragments);
        assert_eq!(update.variant_id, 1);
        // Over the stock of three: disabled button plus capped message.
        assert!(!update.button.enabled);
        assert!(matches!(
            update.message,
            Some(FormMessage::QuantityCapped { limit: 3 })
        ));
    }

    #[test]
    fn stepper_floors_at_one_for_any_input() {
        let mut form = VariantForm::new(list()).unwrap();
        let mut surface = MockSurface {
            quantity: "not a number".to_string(),
            ..MockSurface::default()
        };
        form.step_quantity(&mut surface, -1);
        assert_eq!(form.quantity(), 1);

        surface.quantity = "1".to_string();
        form.step_quantity(&mut surface, -1);
        assert_eq!(form.quantity(), 1);

        form.step_quantity(&mut surface, 1);
        assert_eq!(form.quantity(), 2);
    }

    #[test]
    fn unknown_select_id_is_ignored() {
        let mut form = VariantForm::new(list()).unwrap();
        let mut surface = MockSurface::default();
        form.sync_select(&mut surface, 999);
        assert!(surface.rendered.is_empty());
        assert_eq!(form.current().id, 1);
    }
}
