mod common;

use cargofleet_lib::temperature::KNOWN_PRODUCTS;
use cargofleet_lib::{is_temperature_suitable, Container, Counter, Error};

use common::dims;

#[test]
fn construction_follows_required_temperature() {
    let counter = Counter::new();

    for (product, required) in KNOWN_PRODUCTS {
        let too_cold =
            Container::refrigerated(&counter, dims(2000.0, 12_000.0), product, required - 0.5);
        match too_cold {
            Err(Error::TemperatureTooLow { required_c, .. }) => assert_eq!(required_c, *required),
            other => panic!("unexpected result for {product}: {:?}", other),
        }

        for temperature in [*required, required + 10.0] {
            let container =
                Container::refrigerated(&counter, dims(2000.0, 12_000.0), product, temperature)
                    .expect("warm enough");
            assert_eq!(container.product_type(), Some(*product));
            assert_eq!(container.temperature_c(), Some(temperature));
        }
    }
}

#[test]
fn construction_rejects_blank_product() {
    let counter = Counter::new();
    let err = Container::refrigerated(&counter, dims(2000.0, 12_000.0), " ", 5.0)
        .expect_err("blank product");
    assert!(matches!(err, Error::InvalidArgument { field: "product_type", .. }));
}

#[test]
fn unknown_products_are_accepted_at_any_temperature() {
    let counter = Counter::new();
    let container = Container::refrigerated(&counter, dims(2000.0, 12_000.0), "Kiwi", -40.0)
        .expect("unknown product accepted");
    assert_eq!(container.product_type(), Some("Kiwi"));
    assert!(is_temperature_suitable("Kiwi", -40.0));
}

#[test]
fn product_change_rejected_while_loaded() {
    let counter = Counter::new();
    let mut container = Container::refrigerated(&counter, dims(2000.0, 12_000.0), "Bananas", 14.0)
        .expect("bananas");
    container.load_cargo(100.0).expect("fits");

    // Fish only needs 2°C, so only the cargo blocks the change.
    let err = container.change_product_type("Fish").expect_err("loaded");
    match err {
        Error::NonEmptyContainer { cargo_kg, .. } => assert_eq!(cargo_kg, 100.0),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(container.product_type(), Some("Bananas"));
}

#[test]
fn product_change_respects_fixed_temperature() {
    let counter = Counter::new();
    let mut container =
        Container::refrigerated(&counter, dims(2000.0, 12_000.0), "Fish", 2.0).expect("fish");

    let err = container.change_product_type("chocolate").expect_err("too cold");
    assert!(matches!(err, Error::TemperatureTooLow { .. }));
    assert_eq!(container.product_type(), Some("Fish"));

    container.change_product_type("Meat").expect("meat is fine at 2°C");
    assert_eq!(container.product_type(), Some("Meat"));
    assert_eq!(container.temperature_c(), Some(2.0));

    container.change_product_type("Kiwi").expect("unknown accepted");
    assert_eq!(container.product_type(), Some("Kiwi"));

    assert!(container.change_product_type("").is_err());
    assert_eq!(container.product_type(), Some("Kiwi"));
}

#[test]
fn product_change_allowed_after_emptying() {
    let counter = Counter::new();
    let mut container =
        Container::refrigerated(&counter, dims(2000.0, 12_000.0), "Cheese", 21.0).expect("cheese");
    container.load_cargo(500.0).expect("fits");
    container.empty_cargo();

    container.change_product_type("Butter").expect("empty and warm enough");
    assert_eq!(container.product_type(), Some("Butter"));
}
