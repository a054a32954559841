//! Cargo containers and their per-kind loading rules.
//!
//! A [`Container`] holds the fields every kind shares plus a [`ContainerKind`]
//! carrying the kind-specific state. Loading, emptying and product changes
//! dispatch on the kind:
//!
//! - liquid containers cap their fill at 50% (hazardous) or 90% of capacity and
//!   raise a hazard notice before rejecting an overfill;
//! - gas containers keep 5% of their cargo as residual gas when emptied;
//! - refrigerated containers must run warm enough for their product.

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{CapacityLimit, Error, Result};
use crate::hazard::HazardChannel;
use crate::output::ContainerSummary;
use crate::sequence::Sequence;
use crate::serial::SerialNumber;
use crate::temperature::required_temperature;

/// Fill ceiling for hazardous liquids, as a fraction of max capacity.
pub const HAZARDOUS_LIQUID_FILL_RATIO: f64 = 0.5;

/// Fill ceiling for non-hazardous liquids, as a fraction of max capacity.
pub const LIQUID_FILL_RATIO: f64 = 0.9;

/// Fraction of cargo a gas container retains after being emptied.
pub const GAS_RESIDUAL_RATIO: f64 = 0.05;

/// Physical envelope shared by every container kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    pub height_cm: f64,
    pub own_weight_kg: f64,
    pub depth_cm: f64,
    pub max_capacity_kg: f64,
}

impl Dimensions {
    /// Create validated dimensions; every value must be finite and positive.
    pub fn new(
        height_cm: f64,
        own_weight_kg: f64,
        depth_cm: f64,
        max_capacity_kg: f64,
    ) -> Result<Self> {
        let dimensions = Self {
            height_cm,
            own_weight_kg,
            depth_cm,
            max_capacity_kg,
        };
        dimensions.validate()?;
        Ok(dimensions)
    }

    /// Validate the envelope for correctness.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            (self.height_cm, "height_cm"),
            (self.own_weight_kg, "own_weight_kg"),
            (self.depth_cm, "depth_cm"),
            (self.max_capacity_kg, "max_capacity_kg"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::invalid(
                    field,
                    format!("{field} must be a finite positive number"),
                ));
            }
        }

        Ok(())
    }
}

/// Kind-specific container state.
#[derive(Debug, Clone)]
pub enum ContainerKind {
    Liquid {
        hazardous: bool,
        hazard: HazardChannel,
    },
    Gas {
        pressure_atm: f64,
        hazard: HazardChannel,
    },
    Refrigerated {
        product: String,
        temperature_c: f64,
    },
}

impl ContainerKind {
    /// One-letter code embedded in serial numbers.
    pub fn code(&self) -> &'static str {
        match self {
            ContainerKind::Liquid { .. } => "L",
            ContainerKind::Gas { .. } => "G",
            ContainerKind::Refrigerated { .. } => "C",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContainerKind::Liquid { .. } => "Liquid",
            ContainerKind::Gas { .. } => "Gas",
            ContainerKind::Refrigerated { .. } => "Refrigerated",
        }
    }
}

/// A cargo container.
#[derive(Debug, Clone)]
pub struct Container {
    serial: SerialNumber,
    dimensions: Dimensions,
    cargo_kg: f64,
    kind: ContainerKind,
}

impl Container {
    /// Create a liquid container.
    pub fn liquid(sequence: &dyn Sequence, dimensions: Dimensions, hazardous: bool) -> Result<Self> {
        Self::build(
            sequence,
            dimensions,
            ContainerKind::Liquid {
                hazardous,
                hazard: HazardChannel::default(),
            },
        )
    }

    /// Create a gas container; `pressure_atm` must be positive.
    pub fn gas(sequence: &dyn Sequence, dimensions: Dimensions, pressure_atm: f64) -> Result<Self> {
        if !pressure_atm.is_finite() || pressure_atm <= 0.0 {
            return Err(Error::invalid("pressure_atm", "pressure must be positive"));
        }
        Self::build(
            sequence,
            dimensions,
            ContainerKind::Gas {
                pressure_atm,
                hazard: HazardChannel::default(),
            },
        )
    }

    /// Create a refrigerated container for `product` kept at `temperature_c`.
    ///
    /// Fails when the product is blank or when a known product requires a
    /// warmer temperature. Unknown products are accepted with a warning.
    pub fn refrigerated(
        sequence: &dyn Sequence,
        dimensions: Dimensions,
        product: &str,
        temperature_c: f64,
    ) -> Result<Self> {
        let product = product.trim();
        if product.is_empty() {
            return Err(Error::invalid(
                "product_type",
                "product type cannot be empty",
            ));
        }
        if !temperature_c.is_finite() {
            return Err(Error::invalid(
                "temperature_c",
                "temperature must be a finite number",
            ));
        }
        match required_temperature(product) {
            Some(required_c) if temperature_c < required_c => {
                return Err(Error::TemperatureTooLow {
                    product: product.to_string(),
                    temperature_c,
                    required_c,
                });
            }
            Some(_) => {}
            None => warn!(
                product,
                temperature_c, "product type has no minimum temperature requirement; accepting"
            ),
        }
        Self::build(
            sequence,
            dimensions,
            ContainerKind::Refrigerated {
                product: product.to_string(),
                temperature_c,
            },
        )
    }

    fn build(sequence: &dyn Sequence, dimensions: Dimensions, kind: ContainerKind) -> Result<Self> {
        dimensions.validate()?;
        let serial = SerialNumber::generate(kind.code(), sequence)?;
        debug!(serial = %serial, kind = kind.label(), "container created");
        Ok(Self {
            serial,
            dimensions,
            cargo_kg: 0.0,
            kind,
        })
    }

    /// Route hazard notices to `channel`. No effect on kinds without the capability.
    #[must_use]
    pub fn with_hazard_channel(mut self, channel: HazardChannel) -> Self {
        match &mut self.kind {
            ContainerKind::Liquid { hazard, .. } | ContainerKind::Gas { hazard, .. } => {
                *hazard = channel;
            }
            ContainerKind::Refrigerated { .. } => {}
        }
        self
    }

    pub fn serial(&self) -> &SerialNumber {
        &self.serial
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn kind(&self) -> &ContainerKind {
        &self.kind
    }

    pub fn height_cm(&self) -> f64 {
        self.dimensions.height_cm
    }

    pub fn depth_cm(&self) -> f64 {
        self.dimensions.depth_cm
    }

    pub fn own_weight_kg(&self) -> f64 {
        self.dimensions.own_weight_kg
    }

    pub fn max_capacity_kg(&self) -> f64 {
        self.dimensions.max_capacity_kg
    }

    pub fn cargo_weight_kg(&self) -> f64 {
        self.cargo_kg
    }

    /// Own weight plus cargo, the figure ships count against their tonnage.
    pub fn total_weight_kg(&self) -> f64 {
        self.dimensions.own_weight_kg + self.cargo_kg
    }

    /// Hazard channel, present only on kinds that can signal hazards.
    pub fn hazard_channel(&self) -> Option<&HazardChannel> {
        match &self.kind {
            ContainerKind::Liquid { hazard, .. } | ContainerKind::Gas { hazard, .. } => {
                Some(hazard)
            }
            ContainerKind::Refrigerated { .. } => None,
        }
    }

    pub fn product_type(&self) -> Option<&str> {
        match &self.kind {
            ContainerKind::Refrigerated { product, .. } => Some(product),
            _ => None,
        }
    }

    pub fn temperature_c(&self) -> Option<f64> {
        match self.kind {
            ContainerKind::Refrigerated { temperature_c, .. } => Some(temperature_c),
            _ => None,
        }
    }

    /// Highest cargo weight this container may reach through loading.
    pub fn fill_ceiling_kg(&self) -> f64 {
        match self.kind {
            ContainerKind::Liquid { hazardous, .. } => {
                self.dimensions.max_capacity_kg * liquid_fill_ratio(hazardous)
            }
            _ => self.dimensions.max_capacity_kg,
        }
    }

    /// Add `weight_kg` of cargo, returning the new cargo weight.
    ///
    /// Zero is accepted as a no-op. Nothing is mutated on failure.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidArgument`] if `weight_kg` is negative or not finite.
    /// * [`Error::Overfill`] if a capacity ceiling would be exceeded. Liquid
    ///   containers notify their hazard channel before returning it.
    pub fn load_cargo(&mut self, weight_kg: f64) -> Result<f64> {
        if !weight_kg.is_finite() || weight_kg < 0.0 {
            return Err(Error::invalid(
                "weight_kg",
                "cannot add negative cargo weight",
            ));
        }
        if weight_kg == 0.0 {
            warn!(
                serial = %self.serial,
                cargo_kg = self.cargo_kg,
                "attempted to add 0kg; cargo weight unchanged"
            );
            return Ok(self.cargo_kg);
        }

        if let ContainerKind::Liquid { hazardous, hazard } = &self.kind {
            let percent = liquid_fill_ratio(*hazardous) * 100.0;
            let limit_kg = self.fill_ceiling_kg();
            if self.cargo_kg + weight_kg > limit_kg {
                let available_kg = (limit_kg - self.cargo_kg).max(0.0);
                hazard.notify(
                    &self.serial,
                    format!(
                        "attempt to add {weight_kg}kg to container {} (current: {}kg, allowed total: {limit_kg}kg) would exceed the {percent}% capacity limit",
                        self.serial, self.cargo_kg
                    ),
                );
                return Err(Error::Overfill {
                    serial: self.serial.clone(),
                    attempted_kg: weight_kg,
                    current_kg: self.cargo_kg,
                    available_kg,
                    limit_kg,
                    limit: CapacityLimit::Liquid {
                        hazardous: *hazardous,
                        percent,
                    },
                });
            }
        }

        self.load_within_capacity(weight_kg)
    }

    // Absolute capacity check shared by every kind; the only place cargo grows.
    fn load_within_capacity(&mut self, weight_kg: f64) -> Result<f64> {
        let max_kg = self.dimensions.max_capacity_kg;
        if self.cargo_kg + weight_kg > max_kg {
            return Err(Error::Overfill {
                serial: self.serial.clone(),
                attempted_kg: weight_kg,
                current_kg: self.cargo_kg,
                available_kg: max_kg - self.cargo_kg,
                limit_kg: max_kg,
                limit: CapacityLimit::Absolute,
            });
        }

        self.cargo_kg += weight_kg;
        debug!(
            serial = %self.serial,
            added_kg = weight_kg,
            cargo_kg = self.cargo_kg,
            "cargo loaded"
        );
        Ok(self.cargo_kg)
    }

    /// Empty the container. Gas containers keep a residual fraction.
    pub fn empty_cargo(&mut self) {
        self.cargo_kg = match self.kind {
            ContainerKind::Gas { .. } => self.cargo_kg * GAS_RESIDUAL_RATIO,
            _ => 0.0,
        };
        debug!(serial = %self.serial, cargo_kg = self.cargo_kg, "container emptied");
    }

    /// Switch a refrigerated container to `new_product`.
    ///
    /// The container must be empty and its fixed temperature must satisfy the
    /// new product's requirement; the temperature itself never changes.
    pub fn change_product_type(&mut self, new_product: &str) -> Result<()> {
        let ContainerKind::Refrigerated {
            product,
            temperature_c,
        } = &mut self.kind
        else {
            return Err(Error::invalid(
                "product_type",
                format!("container {} is not refrigerated", self.serial),
            ));
        };

        let new_product = new_product.trim();
        if new_product.is_empty() {
            return Err(Error::invalid(
                "product_type",
                "new product type cannot be empty",
            ));
        }
        if self.cargo_kg > 0.0 {
            return Err(Error::NonEmptyContainer {
                serial: self.serial.clone(),
                cargo_kg: self.cargo_kg,
            });
        }
        match required_temperature(new_product) {
            Some(required_c) if *temperature_c < required_c => {
                return Err(Error::TemperatureTooLow {
                    product: new_product.to_string(),
                    temperature_c: *temperature_c,
                    required_c,
                });
            }
            Some(_) => {}
            None => warn!(
                serial = %self.serial,
                product = new_product,
                temperature_c = *temperature_c,
                "product type has no minimum temperature requirement; accepting"
            ),
        }

        debug!(
            serial = %self.serial,
            from = %product,
            to = new_product,
            "changing product type"
        );
        *product = new_product.to_string();
        Ok(())
    }

    /// Structured, serialisable view of this container.
    pub fn summary(&self) -> ContainerSummary {
        ContainerSummary::from_container(self)
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.summary().fmt(f)
    }
}

fn liquid_fill_ratio(hazardous: bool) -> f64 {
    if hazardous {
        HAZARDOUS_LIQUID_FILL_RATIO
    } else {
        LIQUID_FILL_RATIO
    }
}
