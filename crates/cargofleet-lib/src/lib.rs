//! cargofleet library entry points.
//!
//! This crate models cargo containers (liquid, gas, refrigerated) with their
//! per-kind loading rules, and container ships that enforce container-count and
//! tonnage ceilings across load, remove, replace and transfer operations.
//! Higher-level consumers (the CLI) should only depend on the items exported
//! here instead of reimplementing the rules.
//!

#![deny(warnings)]

pub mod container;
pub mod error;
pub mod hazard;
pub mod output;
pub mod sequence;
pub mod serial;
pub mod ship;
pub mod temperature;

pub use container::{
    Container, ContainerKind, Dimensions, GAS_RESIDUAL_RATIO, HAZARDOUS_LIQUID_FILL_RATIO,
    LIQUID_FILL_RATIO,
};
pub use error::{CapacityLimit, Error, Rejected, Result};
pub use hazard::{HazardChannel, HazardNotice, HazardSink, RecordingHazardSink, TracingHazardSink};
pub use output::{ContainerSummary, KindDetails, ShipSummary};
pub use sequence::{Counter, Sequence};
pub use serial::SerialNumber;
pub use ship::{ContainerShip, LoadReport, ShipSpec};
pub use temperature::{is_temperature_suitable, known_products, required_temperature};
