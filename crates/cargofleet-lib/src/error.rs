use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::container::Container;
use crate::serial::SerialNumber;

/// Convenient result alias for the cargofleet library.
pub type Result<T> = std::result::Result<T, Error>;

/// Which ceiling an [`Error::Overfill`] ran into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CapacityLimit {
    /// The container's absolute `max_capacity_kg`.
    Absolute,
    /// The percentage ceiling enforced on liquid containers.
    Liquid { hazardous: bool, percent: f64 },
}

impl fmt::Display for CapacityLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityLimit::Absolute => write!(f, "max capacity"),
            CapacityLimit::Liquid { hazardous, percent } => {
                let label = if *hazardous {
                    "hazardous"
                } else {
                    "non-hazardous"
                };
                write!(f, "{percent}% {label} liquid limit")
            }
        }
    }
}

/// Top-level library error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A constructor or mutator received a structurally invalid value.
    #[error("invalid {field}: {message}")]
    InvalidArgument { field: &'static str, message: String },

    /// Loading cargo would exceed one of the container's ceilings.
    #[error(
        "adding {attempted_kg}kg to container {serial} would exceed its {limit} of {limit_kg}kg \
         (current: {current_kg}kg, available: {available_kg:.2}kg)"
    )]
    Overfill {
        serial: SerialNumber,
        attempted_kg: f64,
        current_kg: f64,
        available_kg: f64,
        limit_kg: f64,
        limit: CapacityLimit,
    },

    /// The ship already carries its maximum number of containers.
    #[error("cannot load container {serial} onto {ship}: ship is at maximum container capacity ({max_containers})")]
    ContainerCountExceeded {
        ship: String,
        serial: SerialNumber,
        max_containers: usize,
    },

    /// Placing the container would push the ship past its tonnage ceiling.
    #[error(
        "cannot place container {serial} on {ship}: maximum weight capacity of {max_tons} tons \
         would be exceeded (projected: {projected_tons:.2}t)"
    )]
    ShipWeightExceeded {
        ship: String,
        serial: SerialNumber,
        projected_tons: f64,
        max_tons: f64,
    },

    /// Raised when a serial number is not present on the ship.
    #[error("container {serial} not found on ship {ship}")]
    ContainerNotFound { ship: String, serial: String },

    /// Raised when the ship already carries a container with this serial number.
    #[error("container {serial} already exists on ship {ship}")]
    DuplicateSerial { ship: String, serial: SerialNumber },

    /// Raised when changing the product of a container that still holds cargo.
    #[error("container {serial} must be emptied before changing product type (current weight: {cargo_kg}kg)")]
    NonEmptyContainer { serial: SerialNumber, cargo_kg: f64 },

    /// Raised when a refrigerated container runs colder than its product allows.
    #[error("temperature {temperature_c}°C is too low for product '{product}'; required minimum is {required_c}°C")]
    TemperatureTooLow {
        product: String,
        temperature_c: f64,
        required_c: f64,
    },
}

impl Error {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            field,
            message: message.into(),
        }
    }
}

/// A ship-level placement failure that hands the container back to the caller.
///
/// Placement operations take containers by value; when they fail the
/// container is returned untouched alongside the reason.
#[derive(Debug, Error)]
#[error("container {} rejected: {reason}", .container.serial())]
pub struct Rejected {
    pub container: Container,
    #[source]
    pub reason: Error,
}

impl Rejected {
    pub(crate) fn new(container: Container, reason: Error) -> Self {
        Self { container, reason }
    }

    /// Split into the returned container and the failure reason.
    pub fn into_parts(self) -> (Container, Error) {
        (self.container, self.reason)
    }
}
