//! Serialisable summaries of containers and ships.
//!
//! [`ContainerSummary`] and [`ShipSummary`] are snapshots built from live
//! state. Their `Display` impls produce the text views; the CLI serialises
//! the same structs for `--format json`.

use std::fmt;

use serde::Serialize;

use crate::container::{Container, ContainerKind};
use crate::serial::SerialNumber;

/// Kind-specific details shown alongside a container summary.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum KindDetails {
    Liquid { hazardous: bool },
    Gas { pressure_atm: f64 },
    Refrigerated { product: String, temperature_c: f64 },
}

/// Structured representation of a container for display and serialisation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContainerSummary {
    pub serial: SerialNumber,
    pub type_code: &'static str,
    pub cargo_kg: f64,
    pub max_capacity_kg: f64,
    pub own_weight_kg: f64,
    pub height_cm: f64,
    pub depth_cm: f64,
    pub details: KindDetails,
}

impl ContainerSummary {
    pub fn from_container(container: &Container) -> Self {
        let details = match container.kind() {
            ContainerKind::Liquid { hazardous, .. } => KindDetails::Liquid {
                hazardous: *hazardous,
            },
            ContainerKind::Gas { pressure_atm, .. } => KindDetails::Gas {
                pressure_atm: *pressure_atm,
            },
            ContainerKind::Refrigerated {
                product,
                temperature_c,
            } => KindDetails::Refrigerated {
                product: product.clone(),
                temperature_c: *temperature_c,
            },
        };

        Self {
            serial: container.serial().clone(),
            type_code: container.kind().code(),
            cargo_kg: container.cargo_weight_kg(),
            max_capacity_kg: container.max_capacity_kg(),
            own_weight_kg: container.own_weight_kg(),
            height_cm: container.height_cm(),
            depth_cm: container.depth_cm(),
            details,
        }
    }
}

impl fmt::Display for ContainerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Type: {} | Cargo: {}kg / {}kg | Own Weight: {}kg | Dimensions: H:{}cm, D:{}cm",
            self.serial,
            self.type_code,
            self.cargo_kg,
            self.max_capacity_kg,
            self.own_weight_kg,
            self.height_cm,
            self.depth_cm
        )?;
        match &self.details {
            KindDetails::Liquid { hazardous } => {
                write!(f, " | Liquid | Hazardous: {hazardous}")
            }
            KindDetails::Gas { pressure_atm } => write!(f, " | Pressure: {pressure_atm} atm"),
            KindDetails::Refrigerated {
                product,
                temperature_c,
            } => write!(f, " | Product: {product} | Temp: {temperature_c}°C"),
        }
    }
}

/// Snapshot of a ship's limits and current load.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShipSummary {
    pub name: String,
    pub max_speed_knots: f64,
    pub max_containers: usize,
    pub max_weight_tons: f64,
    pub container_count: usize,
    pub total_weight_tons: f64,
    pub containers: Vec<ContainerSummary>,
}

impl fmt::Display for ShipSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Ship Information: {} ---", self.name)?;
        writeln!(f, "- Max Speed: {} knots", self.max_speed_knots)?;
        writeln!(f, "- Max Containers: {}", self.max_containers)?;
        writeln!(f, "- Max Weight: {} tons", self.max_weight_tons)?;
        writeln!(f, "- Current Containers: {}", self.container_count)?;
        writeln!(f, "- Current Total Weight: {:.2} tons", self.total_weight_tons)?;
        if self.containers.is_empty() {
            writeln!(f, "- Load: Ship is empty.")?;
        } else {
            writeln!(f, "- Containers on board:")?;
            for container in &self.containers {
                writeln!(f, "  - {container}")?;
            }
        }
        write!(f, "--- End of Ship Information: {} ---", self.name)
    }
}
