//! Browser-only tests for the pieces that need real DOM and fetch plumbing.

#![cfg(target_arch = "wasm32")]

use vitrine_web::section::{LatestRequestGate, parse_fragments};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn gate_aborts_superseded_requests() {
    let gate = LatestRequestGate::new();
    let first = gate.begin().expect("first signal");
    assert!(!first.aborted());

    let second = gate.begin().expect("second signal");
    assert!(first.aborted(), "older in-flight request must be cancelled");
    assert!(!second.aborted(), "the latest request stays live");

    let third = gate.begin().expect("third signal");
    assert!(second.aborted());
    assert!(!third.aborted());
}

#[wasm_bindgen_test]
fn section_fragments_are_extracted_by_selector() {
    let html = r#"
        <html><body>
            <div id="price-container-main"><span class="money">$24</span></div>
            <div data-payment-button><button>Buy it now</button></div>
        </body></html>
    "#;
    let fragments = parse_fragments(html, "main").expect("parse");
    assert_eq!(
        fragments.price.as_deref(),
        Some(r#"<span class="money">$24</span>"#)
    );
    assert!(fragments.payment.unwrap().contains("Buy it now"));
}

#[wasm_bindgen_test]
fn missing_fragments_read_as_absent() {
    let fragments = parse_fragments("<html><body><p>no shop here</p></body></html>", "main")
        .expect("parse");
    assert_eq!(fragments.price, None);
    assert_eq!(fragments.payment, None);
}

#[wasm_bindgen_test]
fn variant_param_round_trips_through_the_address_bar() {
    vitrine_web::dom::replace_variant_param(987_654);
    assert_eq!(vitrine_web::dom::variant_param(), Some(987_654));
}
