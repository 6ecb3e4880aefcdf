use vitrine_core::{
    FormMessage, FormSurface, FormUpdate, OptionPicks, SubmitGuard, VariantForm, VariantIndex,
    VariantList, resolve_picks, submit_guard,
};

const PAYLOAD: &str = r#"[
    { "id": 1, "option1": "Red", "option2": "S", "available": true,
      "inventory_policy": "deny", "inventory_quantity": 3,
      "inventory_management": "shopify", "sku": "TEE-RED-S", "barcode": "111",
      "featured_media_id": 901 },
    { "id": 2, "option1": "Red", "option2": "M", "available": true,
      "inventory_policy": "deny", "inventory_quantity": 0,
      "inventory_management": "shopify", "sku": "TEE-RED-M", "barcode": "222" },
    { "id": 3, "option1": "Blue", "option2": "M", "available": true,
      "inventory_policy": "continue", "inventory_quantity": 0,
      "inventory_management": "shopify", "sku": "TEE-BLUE-M" }
]"#;

struct RecordingSurface {
    picks: OptionPicks,
    quantity: String,
    rendered: Vec<FormUpdate>,
}

impl RecordingSurface {
    fn new() -> Self {
        Self {
            picks: OptionPicks::default(),
            quantity: "1".to_string(),
            rendered: Vec::new(),
        }
    }
}

impl FormSurface for RecordingSurface {
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
fn picks_resolve_to_the_exact_variant() {
    let list = VariantList::from_json(PAYLOAD).unwrap();
    let index = VariantIndex::build(&list.variants);
    let picks = OptionPicks::new("Red", "M", "");
    assert_eq!(resolve_picks(&list.variants, &index, &picks).unwrap().id, 2);
}

#[test]
fn exact_key_precedes_partial_fallback() {
    // "Blue" alone is a complete key for variant 3's first position only if
    // no second option is set there; with option2 present the exact key
    // misses, and the partial scan over set positions takes over.
    let list = VariantList::from_json(PAYLOAD).unwrap();
    let index = VariantIndex::build(&list.variants);

    let partial = OptionPicks::new("Blue", "", "");
    assert_eq!(
        resolve_picks(&list.variants, &index, &partial).unwrap().id,
        3
    );

    // A full exact pick never falls through to scanning.
    let exact = OptionPicks::new("Red", "S", "");
    assert_eq!(resolve_picks(&list.variants, &index, &exact).unwrap().id, 1);
}

#[test]
fn full_apply_updates_every_affordance() {
    let mut form = VariantForm::new(VariantList::from_json(PAYLOAD).unwrap()).unwrap();
    let mut surface = RecordingSurface::new();
    surface.picks = OptionPicks::new("Blue", "M", "");
    form.sync_picks(&mut surface);

    let update = surface.rendered.last().unwrap();
    assert_eq!(update.variant_id, 3);
    assert_eq!(update.options[0], "Blue");
    assert_eq!(update.sku, "TEE-BLUE-M");
    assert_eq!(update.barcode, "");
    assert!(update.button.enabled);
    assert_eq!(update.button.label, "Pre - Order");
    assert_eq!(update.message, None);
    assert_eq!(update.stock.text, "In Stock");
    assert!(update.refresh_fragments);
}

#[test]
fn quantity_over_stock_round_trips_through_the_surface() {
    let mut form = VariantForm::new(VariantList::from_json(PAYLOAD).unwrap()).unwrap();
    let mut surface = RecordingSurface::new();

    surface.quantity = "4".to_string();
    form.sync_quantity(&mut surface);
    let over = surface.rendered.last().unwrap();
    assert!(!over.button.enabled);
    assert_eq!(
        over.message,
        Some(FormMessage::QuantityCapped { limit: 3 })
    );

    surface.quantity = "3".to_string();
    form.sync_quantity(&mut surface);
    let at_limit = surface.rendered.last().unwrap();
    assert!(at_limit.button.enabled);
    assert_eq!(at_limit.message, None);
}

#[test]
fn cart_already_at_stock_blocks_submission() {
    let list = VariantList::from_json(PAYLOAD).unwrap();
    let capped = &list.variants[0];

    assert!(matches!(
        submit_guard(capped, 3),
        SubmitGuard::Blocked { .. }
    ));
    assert_eq!(submit_guard(capped, 2), SubmitGuard::Proceed);

    // The continue-policy variant never blocks, whatever the cart holds.
    assert_eq!(submit_guard(&list.variants[2], 50), SubmitGuard::Proceed);
}

#[test]
fn featured_media_follows_the_variant() {
    let mut form = VariantForm::new(VariantList::from_json(PAYLOAD).unwrap()).unwrap();
    let update = form.apply_variant(1).unwrap();
    assert_eq!(update.featured_media_id, Some(901));
    let update = form.apply_variant(2).unwrap();
    assert_eq!(update.featured_media_id, None);
}
