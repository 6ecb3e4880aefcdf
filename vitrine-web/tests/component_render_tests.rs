use futures::executor::block_on;
use vitrine_core::{Media, VariantList};
use vitrine_web::components::gallery::{Gallery, GalleryProps};
use vitrine_web::components::product_form::{ProductForm, ProductFormProps};
use yew::{AttrValue, LocalServerRenderer};

fn sample_media() -> Vec<Media> {
    vec![
        Media {
            id: 10,
            src: "front.jpg".to_string(),
            alt: "Front".to_string(),
            preview: None,
        },
        Media {
            id: 20,
            src: "back.jpg".to_string(),
            alt: "Back".to_string(),
            preview: Some("back-small.jpg".to_string()),
        },
        Media {
            id: 30,
            src: "side.jpg".to_string(),
            alt: "Side".to_string(),
            preview: None,
        },
    ]
}

fn sample_variants() -> VariantList {
    VariantList::from_json(
        r#"[
            { "id": 111, "option1": "Red", "option2": "S", "available": true,
              "inventory_policy": "deny", "inventory_quantity": 3,
              "inventory_management": "shopify", "sku": "TEE-RED-S", "barcode": "4001" },
            { "id": 222, "option1": "Red", "option2": "M", "available": false,
              "inventory_policy": "deny", "inventory_quantity": 0,
              "inventory_management": "shopify", "sku": "TEE-RED-M" },
            { "id": 333, "option1": "Blue", "option2": "S", "available": true,
              "inventory_policy": "continue", "inventory_quantity": 0,
              "inventory_management": "shopify", "sku": "TEE-BLUE-S" }
        ]"#,
    )
    .unwrap()
}

#[test]
fn gallery_renders_stage_thumbs_and_dots() {
    let props = GalleryProps {
        media: sample_media(),
        section_id: AttrValue::from("main"),
        wrap: true,
        autoplay: false,
        autoplay_interval_ms: 3500,
    };
    let html = block_on(LocalServerRenderer::<Gallery>::with_props(props).render());

    assert!(html.contains("product-media-gallery-main"));
    assert!(html.contains("gallery-track"));
    assert!(html.contains("gallery-slide"));
    assert!(html.contains("is-active"));
    assert!(html.contains("gallery-thumb"));
    assert!(html.contains("gallery-dot"));
    assert!(html.contains("front.jpg"));
    // Thumbnails prefer the preview rendition when one exists.
    assert!(html.contains("back-small.jpg"));
    // The lightbox overlay only mounts once opened.
    assert!(!html.contains("gallery-lightbox"));
}

#[test]
fn gallery_renders_empty_without_media() {
    let props = GalleryProps {
        media: Vec::new(),
        section_id: AttrValue::from("main"),
        wrap: false,
        autoplay: false,
        autoplay_interval_ms: 3500,
    };
    let html = block_on(LocalServerRenderer::<Gallery>::with_props(props).render());
    assert!(html.contains("gallery-track"));
    assert!(!html.contains("gallery-slide"));
}

#[test]
fn product_form_reflects_the_initial_variant() {
    let props = ProductFormProps {
        variants: sample_variants(),
        section_id: AttrValue::from("main-product"),
        product_path: AttrValue::from("/products/tee"),
        initial_variant: None,
        options: Vec::new(),
        initial_price_html: Some(AttrValue::from("<span class=\"money\">$19</span>")),
        initial_payment_html: None,
        show_submit_errors: false,
    };
    let html = block_on(LocalServerRenderer::<ProductForm>::with_props(props).render());

    assert!(html.contains("data-variant-id-field"));
    assert!(html.contains("value=\"111\""));
    assert!(html.contains("Add to cart"));
    assert!(html.contains("In Stock (3)"));
    assert!(html.contains("TEE-RED-S"));
    assert!(html.contains("price-container-main-product"));
    assert!(html.contains("$19"));
    assert!(html.contains("data-payment-button"));
    // Both option positions render as swatch groups by default.
    assert!(html.contains("data-kind=\"swatch\""));
    assert!(html.contains("data-option-value=\"Red\""));
    assert!(html.contains("data-option-value=\"Blue\""));
    // The quantity stepper starts clamped at one.
    assert!(html.contains("data-qty-input"));
    assert!(html.contains("value=\"1\""));
    // No message until something goes wrong.
    assert!(html.contains("visibility: hidden"));
}

#[test]
fn product_form_marks_unavailable_variant() {
    let props = ProductFormProps {
        variants: sample_variants(),
        section_id: AttrValue::from("main-product"),
        product_path: AttrValue::from("/products/tee"),
        initial_variant: Some(222),
        options: Vec::new(),
        initial_price_html: None,
        initial_payment_html: None,
        show_submit_errors: false,
    };
    let html = block_on(LocalServerRenderer::<ProductForm>::with_props(props).render());

    assert!(html.contains("Out Of Stock"));
    assert!(html.contains("disabled"));
    assert!(html.contains("This variant is out of stock."));
    assert!(html.contains("TEE-RED-M"));
}

#[test]
fn product_form_labels_preorder_for_continue_policy() {
    let props = ProductFormProps {
        variants: sample_variants(),
        section_id: AttrValue::from("main-product"),
        product_path: AttrValue::from("/products/tee"),
        initial_variant: Some(333),
        options: Vec::new(),
        initial_price_html: None,
        initial_payment_html: None,
        show_submit_errors: false,
    };
    let html = block_on(LocalServerRenderer::<ProductForm>::with_props(props).render());

    assert!(html.contains("Pre - Order"));
    assert!(html.contains("In Stock"));
    assert!(html.contains("TEE-BLUE-S"));
}

#[test]
fn product_form_degrades_without_variants() {
    let props = ProductFormProps {
        variants: VariantList::empty(),
        section_id: AttrValue::from("main-product"),
        product_path: AttrValue::from("/products/tee"),
        initial_variant: None,
        options: Vec::new(),
        initial_price_html: None,
        initial_payment_html: None,
        show_submit_errors: false,
    };
    let html = block_on(LocalServerRenderer::<ProductForm>::with_props(props).render());
    assert!(html.contains("is-empty"));
    assert!(!html.contains("data-atc"));
}
