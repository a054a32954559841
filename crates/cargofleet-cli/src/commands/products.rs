//! Product commands: list the temperature table and check a temperature against it.

use serde::Serialize;

use cargofleet_lib::{is_temperature_suitable, known_products, required_temperature};

/// Minimum temperature for one known product.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductRequirement {
    pub product: String,
    pub required_c: f64,
}

/// Result of checking a temperature against a product's requirement.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TemperatureCheck {
    pub product: String,
    pub temperature_c: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_c: Option<f64>,
    pub suitable: bool,
}

/// Known products sorted by name.
pub fn list_products() -> Vec<ProductRequirement> {
    known_products()
        .into_iter()
        .map(|(product, required_c)| ProductRequirement {
            product: product.to_string(),
            required_c,
        })
        .collect()
}

pub fn check_temperature(product: &str, temperature_c: f64) -> TemperatureCheck {
    TemperatureCheck {
        product: product.to_string(),
        temperature_c,
        required_c: required_temperature(product),
        suitable: is_temperature_suitable(product, temperature_c),
    }
}
