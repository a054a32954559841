//! Ship limits.
//!
//! A ship's speed, container count and tonnage ceilings are fixed at
//! construction.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Kilograms per metric ton.
pub const KG_PER_TON: f64 = 1000.0;

/// Immutable limits of a container ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipSpec {
    pub max_speed_knots: f64,
    pub max_containers: usize,
    pub max_weight_tons: f64,
}

impl ShipSpec {
    /// Create validated ship limits.
    pub fn new(max_speed_knots: f64, max_containers: usize, max_weight_tons: f64) -> Result<Self> {
        let spec = Self {
            max_speed_knots,
            max_containers,
            max_weight_tons,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Validate ship limits for correctness.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            (self.max_speed_knots, "max_speed_knots"),
            (self.max_weight_tons, "max_weight_tons"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::invalid(
                    field,
                    format!("{field} must be a finite positive number"),
                ));
            }
        }

        if self.max_containers == 0 {
            return Err(Error::invalid(
                "max_containers",
                "max_containers must be positive",
            ));
        }

        Ok(())
    }

    /// Tonnage ceiling expressed in kilograms.
    pub fn max_weight_kg(&self) -> f64 {
        self.max_weight_tons * KG_PER_TON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_limits() {
        let spec = ShipSpec::new(25.0, 5, 50.0).expect("valid spec");
        assert_eq!(spec.max_weight_kg(), 50_000.0);
    }

    #[test]
    fn rejects_each_non_positive_limit() {
        let cases = [
            (ShipSpec::new(0.0, 5, 50.0), "max_speed_knots"),
            (ShipSpec::new(25.0, 0, 50.0), "max_containers"),
            (ShipSpec::new(25.0, 5, -1.0), "max_weight_tons"),
        ];

        for (result, expected) in cases {
            match result {
                Err(Error::InvalidArgument { field, .. }) => assert_eq!(field, expected),
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }
}
