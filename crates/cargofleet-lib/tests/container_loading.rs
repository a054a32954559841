mod common;

use std::sync::Arc;

use cargofleet_lib::{
    CapacityLimit, Container, Counter, Error, HazardChannel, RecordingHazardSink,
};

use common::{dims, gas, liquid};

#[test]
fn additive_loads_sum_within_capacity() {
    let counter = Counter::new();

    for (w1, w2) in [(0.0, 0.0), (1000.0, 2500.0), (4000.0, 4000.0), (7999.5, 0.5)] {
        let mut container =
            Container::refrigerated(&counter, dims(2000.0, 8000.0), "Cheese", 8.0).expect("cold");
        container.load_cargo(w1).expect("first load fits");
        let total = container.load_cargo(w2).expect("second load fits");
        assert_eq!(total, w1 + w2);
        assert_eq!(container.cargo_weight_kg(), w1 + w2);
    }
}

#[test]
fn loads_beyond_headroom_fail_without_mutation() {
    let counter = Counter::new();
    let mut container = gas(&counter, 8000.0);
    container.load_cargo(6000.0).expect("fits");

    for attempt in [2000.5, 2001.0, 10_000.0] {
        let err = container.load_cargo(attempt).expect_err("overfill");
        assert!(matches!(err, Error::Overfill { limit: CapacityLimit::Absolute, .. }));
        assert_eq!(container.cargo_weight_kg(), 6000.0);
    }
}

#[test]
fn zero_load_is_a_no_op() {
    let counter = Counter::new();
    let mut container = liquid(&counter, 10_000.0, true);
    container.load_cargo(5000.0).expect("at ceiling");

    let weight = container.load_cargo(0.0).expect("zero never fails");
    assert_eq!(weight, 5000.0);
    assert_eq!(container.cargo_weight_kg(), 5000.0);
}

#[test]
fn non_hazardous_liquid_scenario() {
    let counter = Counter::new();
    let mut container = liquid(&counter, 10_000.0, false);

    assert_eq!(container.load_cargo(4000.0).expect("fits"), 4000.0);
    assert_eq!(container.load_cargo(4500.0).expect("fits"), 8500.0);

    let err = container.load_cargo(600.0).expect_err("9100 > 9000");
    match err {
        Error::Overfill {
            attempted_kg,
            current_kg,
            available_kg,
            limit,
            ..
        } => {
            assert_eq!(attempted_kg, 600.0);
            assert_eq!(current_kg, 8500.0);
            assert!((available_kg - 500.0).abs() < 1e-9);
            assert!(matches!(limit, CapacityLimit::Liquid { hazardous: false, .. }));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(container.cargo_weight_kg(), 8500.0);
}

#[test]
fn liquid_ceilings_cap_reachable_weight() {
    let counter = Counter::new();
    for (hazardous, ceiling) in [(true, 5000.0), (false, 9000.0)] {
        let mut container = liquid(&counter, 10_000.0, hazardous);
        let mut step = 0;
        while container.load_cargo(750.0).is_ok() {
            step += 1;
            assert!(step < 100, "loading never hit the ceiling");
        }
        assert!(container.cargo_weight_kg() <= ceiling);
        assert!(container.cargo_weight_kg() > ceiling - 750.0);
        assert!(container.load_cargo(ceiling - container.cargo_weight_kg()).is_ok());
        assert!((container.cargo_weight_kg() - ceiling).abs() < 1e-9);
    }
}

#[test]
fn every_liquid_overfill_raises_a_hazard_notice() {
    let counter = Counter::new();
    let sink = Arc::new(RecordingHazardSink::new());
    let mut container =
        liquid(&counter, 10_000.0, false).with_hazard_channel(HazardChannel::new(sink.clone()));

    container.load_cargo(9000.0).expect("at ceiling");
    assert!(container.load_cargo(1.0).is_err());
    assert!(container.load_cargo(50.0).is_err());

    let notices = sink.notices();
    assert_eq!(notices.len(), 2);
    assert!(notices[0].message.contains("90%"));
}

#[test]
fn gas_keeps_five_percent_residual() {
    let counter = Counter::new();
    let mut container = gas(&counter, 8000.0);
    container.load_cargo(7000.0).expect("fits");

    container.empty_cargo();
    assert!((container.cargo_weight_kg() - 350.0).abs() < 1e-9);

    container.load_cargo(7600.0).expect("350 + 7600 fits");
    assert!((container.cargo_weight_kg() - 7950.0).abs() < 1e-9);
}

#[test]
fn non_gas_containers_empty_fully() {
    let counter = Counter::new();
    let mut container = liquid(&counter, 10_000.0, false);
    container.load_cargo(3000.0).expect("fits");
    container.empty_cargo();
    assert_eq!(container.cargo_weight_kg(), 0.0);
}
