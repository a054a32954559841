//! Minimum storage temperatures for refrigerated products.
//!
//! The table is built once on first use and is read-only afterwards. Product
//! lookups are case-insensitive; products missing from the table carry no
//! requirement.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Known products and their minimum temperature in °C.
pub const KNOWN_PRODUCTS: &[(&str, f64)] = &[
    ("Bananas", 13.3),
    ("Chocolate", 18.0),
    ("Fish", 2.0),
    ("Meat", -15.0),
    ("Ice Cream", -18.0),
    ("Frozen pizza", -30.0),
    ("Cheese", 7.2),
    ("Sausages", 5.0),
    ("Butter", 20.5),
    ("Eggs", 19.0),
];

static REQUIRED_TEMPERATURES: Lazy<HashMap<String, f64>> = Lazy::new(|| {
    KNOWN_PRODUCTS
        .iter()
        .map(|(name, celsius)| (normalize_product(name), *celsius))
        .collect()
});

fn normalize_product(product: &str) -> String {
    product.trim().to_lowercase()
}

/// Minimum temperature required for `product`, if the product is known.
pub fn required_temperature(product: &str) -> Option<f64> {
    REQUIRED_TEMPERATURES
        .get(&normalize_product(product))
        .copied()
}

/// Whether `temperature_c` is warm enough for `product`.
///
/// Unknown products are always suitable.
pub fn is_temperature_suitable(product: &str, temperature_c: f64) -> bool {
    match required_temperature(product) {
        Some(required) => temperature_c >= required,
        None => true,
    }
}

/// Known products sorted by name, for listings.
pub fn known_products() -> Vec<(&'static str, f64)> {
    let mut products = KNOWN_PRODUCTS.to_vec();
    products.sort_by(|a, b| a.0.cmp(b.0));
    products
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_are_case_insensitive() {
        assert_eq!(required_temperature("fish"), Some(2.0));
        assert_eq!(required_temperature("ICE CREAM"), Some(-18.0));
        assert_eq!(required_temperature(" Frozen Pizza "), Some(-30.0));
    }

    #[test]
    fn unknown_products_have_no_requirement() {
        assert_eq!(required_temperature("Kiwi"), None);
        assert!(is_temperature_suitable("Kiwi", -273.0));
    }

    #[test]
    fn suitability_is_inclusive_of_the_minimum() {
        assert!(is_temperature_suitable("Bananas", 13.3));
        assert!(!is_temperature_suitable("Bananas", 13.2));
        assert!(is_temperature_suitable("Meat", -10.0));
    }

    #[test]
    fn known_products_are_sorted() {
        let products = known_products();
        assert_eq!(products.len(), KNOWN_PRODUCTS.len());
        assert_eq!(products.first().map(|p| p.0), Some("Bananas"));
        assert_eq!(products.last().map(|p| p.0), Some("Sausages"));
    }
}
