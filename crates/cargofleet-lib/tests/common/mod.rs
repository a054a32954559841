//! Common test utilities and fixture helpers.
//!
//! Builders for the container and ship shapes used across integration tests.
//! Every helper takes the caller's [`Counter`] so tests never share serials.

use cargofleet_lib::{Container, ContainerShip, Counter, Dimensions, ShipSpec};

/// Standard 200x200cm envelope with the given own weight and capacity.
pub fn dims(own_weight_kg: f64, max_capacity_kg: f64) -> Dimensions {
    Dimensions::new(200.0, own_weight_kg, 200.0, max_capacity_kg).expect("valid dimensions")
}

#[allow(dead_code)]
pub fn liquid(counter: &Counter, max_capacity_kg: f64, hazardous: bool) -> Container {
    Container::liquid(counter, dims(1500.0, max_capacity_kg), hazardous).expect("liquid container")
}

#[allow(dead_code)]
pub fn gas(counter: &Counter, max_capacity_kg: f64) -> Container {
    Container::gas(counter, dims(1200.0, max_capacity_kg), 15.0).expect("gas container")
}

/// Refrigerated container with `own_weight_kg` hull carrying `cargo_kg` of Fish at 2°C.
#[allow(dead_code)]
pub fn fish(counter: &Counter, own_weight_kg: f64, cargo_kg: f64) -> Container {
    let mut container = Container::refrigerated(counter, dims(own_weight_kg, 12_000.0), "Fish", 2.0)
        .expect("refrigerated container");
    container.load_cargo(cargo_kg).expect("cargo fits");
    container
}

#[allow(dead_code)]
pub fn ship(name: &str, max_containers: usize, max_weight_tons: f64) -> ContainerShip {
    let spec = ShipSpec::new(25.0, max_containers, max_weight_tons).expect("valid ship spec");
    ContainerShip::new(name, spec).expect("valid ship")
}

/// Serials of the ship's containers in on-board order.
#[allow(dead_code)]
pub fn serials(ship: &ContainerShip) -> Vec<String> {
    ship.containers()
        .iter()
        .map(|container| container.serial().to_string())
        .collect()
}
