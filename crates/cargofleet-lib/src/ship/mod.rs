//! Container ships and placement of containers on them.
//!
//! - [`spec`] - Immutable ship limits and their validation
//!
//! A [`ContainerShip`] owns its containers. After every successful mutation
//! the ship holds at most `max_containers` containers and their combined own
//! and cargo weight stays within `max_weight_tons`. Failed operations leave
//! the ship untouched; operations that took a container by value hand it back
//! in a [`Rejected`].
//!
//! # Example
//!
//! ```
//! use cargofleet_lib::{Container, ContainerShip, Counter, Dimensions, ShipSpec};
//!
//! let serials = Counter::new();
//! let mut ship = ContainerShip::new("Aurora", ShipSpec::new(25.0, 5, 50.0).unwrap()).unwrap();
//!
//! let mut tank = Container::liquid(&serials, Dimensions::new(200.0, 1500.0, 200.0, 10_000.0).unwrap(), false).unwrap();
//! tank.load_cargo(4000.0).unwrap();
//! ship.load_container(tank).unwrap();
//!
//! assert_eq!(ship.len(), 1);
//! assert!((ship.total_weight_tons() - 5.5).abs() < 1e-9);
//! ```

pub mod spec;

use tracing::{debug, info, warn};

use crate::container::Container;
use crate::error::{Error, Rejected, Result};
use crate::output::{ContainerSummary, ShipSummary};
use crate::sequence::Sequence;
use crate::serial::SerialNumber;

pub use spec::{ShipSpec, KG_PER_TON};

/// Outcome of a batch load: what went aboard and what came back.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<SerialNumber>,
    pub rejected: Vec<Rejected>,
}

impl LoadReport {
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    pub fn failed_count(&self) -> usize {
        self.rejected.len()
    }
}

/// A ship carrying an ordered collection of containers.
#[derive(Debug)]
pub struct ContainerShip {
    name: String,
    spec: ShipSpec,
    containers: Vec<Container>,
}

impl ContainerShip {
    /// Create an empty ship named `name`.
    pub fn new(name: impl Into<String>, spec: ShipSpec) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::invalid("name", "ship name cannot be empty"));
        }
        spec.validate()?;

        Ok(Self {
            name,
            spec,
            containers: Vec::new(),
        })
    }

    /// Create an empty ship named `Ship-<N>` from the next value of `sequence`.
    pub fn with_generated_name(sequence: &dyn Sequence, spec: ShipSpec) -> Result<Self> {
        spec.validate()?;
        Self::new(format!("Ship-{}", sequence.next_value()), spec)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn spec(&self) -> &ShipSpec {
        &self.spec
    }

    /// Containers on board, in loading order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    pub fn total_weight_kg(&self) -> f64 {
        self.containers.iter().map(Container::total_weight_kg).sum()
    }

    pub fn total_weight_tons(&self) -> f64 {
        self.total_weight_kg() / KG_PER_TON
    }

    /// Look a container up by serial, ignoring case.
    pub fn container(&self, serial: &str) -> Option<&Container> {
        self.position(serial).map(|index| &self.containers[index])
    }

    pub fn contains(&self, serial: &str) -> bool {
        self.position(serial).is_some()
    }

    fn position(&self, serial: &str) -> Option<usize> {
        self.containers
            .iter()
            .position(|container| container.serial().matches(serial))
    }

    fn not_found(&self, serial: &str) -> Error {
        Error::ContainerNotFound {
            ship: self.name.clone(),
            serial: serial.to_string(),
        }
    }

    fn check_tonnage(&self, serial: &SerialNumber, projected_kg: f64) -> Result<()> {
        if projected_kg > self.spec.max_weight_kg() {
            return Err(Error::ShipWeightExceeded {
                ship: self.name.clone(),
                serial: serial.clone(),
                projected_tons: projected_kg / KG_PER_TON,
                max_tons: self.spec.max_weight_tons,
            });
        }
        Ok(())
    }

    /// Check whether `container` could be loaded without breaching either ceiling.
    ///
    /// Serial uniqueness is not part of this check.
    pub fn check_placement(&self, container: &Container) -> Result<()> {
        if self.containers.len() >= self.spec.max_containers {
            return Err(Error::ContainerCountExceeded {
                ship: self.name.clone(),
                serial: container.serial().clone(),
                max_containers: self.spec.max_containers,
            });
        }
        self.check_tonnage(
            container.serial(),
            self.total_weight_kg() + container.total_weight_kg(),
        )
    }

    /// Append `container` to the ship.
    ///
    /// Fails, returning the container, when the ship is full or the projected
    /// tonnage exceeds the ship's ceiling.
    pub fn load_container(&mut self, container: Container) -> std::result::Result<(), Rejected> {
        if let Err(reason) = self.check_placement(&container) {
            warn!(ship = %self.name, serial = %container.serial(), %reason, "container not loaded");
            return Err(Rejected::new(container, reason));
        }

        info!(ship = %self.name, serial = %container.serial(), "container loaded");
        self.containers.push(container);
        Ok(())
    }

    /// Load each container in order, keeping earlier successes when later ones fail.
    pub fn load_containers(&mut self, containers: Vec<Container>) -> LoadReport {
        let mut report = LoadReport::default();
        if containers.is_empty() {
            warn!(ship = %self.name, "no containers provided to load");
            return report;
        }

        debug!(ship = %self.name, count = containers.len(), "loading containers");
        for container in containers {
            let serial = container.serial().clone();
            match self.load_container(container) {
                Ok(()) => report.loaded.push(serial),
                Err(rejected) => report.rejected.push(rejected),
            }
        }

        info!(
            ship = %self.name,
            loaded = report.loaded_count(),
            failed = report.failed_count(),
            "batch load completed"
        );
        report
    }

    /// Take the container with `serial` off the ship and return it.
    pub fn remove_container(&mut self, serial: &str) -> Result<Container> {
        let index = self.position(serial).ok_or_else(|| self.not_found(serial))?;
        let container = self.containers.remove(index);
        info!(ship = %self.name, serial = %container.serial(), "container removed");
        Ok(container)
    }

    /// Empty the cargo of the container with `serial`, returning what remains in it.
    pub fn unload_container_cargo(&mut self, serial: &str) -> Result<f64> {
        let index = self.position(serial).ok_or_else(|| self.not_found(serial))?;
        let container = &mut self.containers[index];
        container.empty_cargo();
        Ok(container.cargo_weight_kg())
    }

    /// Put `replacement` in the slot of the container with `old_serial`.
    ///
    /// The replaced container is returned. Fails when a container with the
    /// replacement's serial is already aboard, when `old_serial` is not found,
    /// or when the swap would exceed the tonnage ceiling.
    pub fn replace_container(
        &mut self,
        old_serial: &str,
        replacement: Container,
    ) -> std::result::Result<Container, Rejected> {
        match self.check_replacement(old_serial, &replacement) {
            Ok(index) => {
                info!(
                    ship = %self.name,
                    old = %self.containers[index].serial(),
                    new = %replacement.serial(),
                    "container replaced"
                );
                Ok(std::mem::replace(&mut self.containers[index], replacement))
            }
            Err(reason) => {
                warn!(ship = %self.name, serial = %replacement.serial(), %reason, "container not replaced");
                Err(Rejected::new(replacement, reason))
            }
        }
    }

    fn check_replacement(&self, old_serial: &str, replacement: &Container) -> Result<usize> {
        if self.contains(replacement.serial().as_str()) {
            return Err(Error::DuplicateSerial {
                ship: self.name.clone(),
                serial: replacement.serial().clone(),
            });
        }
        let index = self
            .position(old_serial)
            .ok_or_else(|| self.not_found(old_serial))?;
        let projected_kg = self.total_weight_kg() - self.containers[index].total_weight_kg()
            + replacement.total_weight_kg();
        self.check_tonnage(replacement.serial(), projected_kg)?;
        Ok(index)
    }

    /// Move the container with `serial` onto `target`.
    ///
    /// The container leaves this ship only if `target` accepts it; otherwise
    /// it stays in its original position. `self` and `target` are distinct
    /// mutable borrows, so a ship can never be its own target.
    pub fn transfer_container(&mut self, target: &mut ContainerShip, serial: &str) -> Result<()> {
        let index = self.position(serial).ok_or_else(|| self.not_found(serial))?;
        let container = self.containers.remove(index);
        match target.load_container(container) {
            Ok(()) => {
                info!(from = %self.name, to = %target.name, serial, "container transferred");
                Ok(())
            }
            Err(rejected) => {
                let (container, reason) = rejected.into_parts();
                self.containers.insert(index, container);
                warn!(from = %self.name, to = %target.name, serial, %reason, "transfer failed");
                Err(reason)
            }
        }
    }

    /// Summary of the container with `serial`.
    pub fn container_info(&self, serial: &str) -> Result<ContainerSummary> {
        self.container(serial)
            .map(Container::summary)
            .ok_or_else(|| self.not_found(serial))
    }

    /// Summary of the ship's limits and current load.
    pub fn summary(&self) -> ShipSummary {
        ShipSummary {
            name: self.name.clone(),
            max_speed_knots: self.spec.max_speed_knots,
            max_containers: self.spec.max_containers,
            max_weight_tons: self.spec.max_weight_tons,
            container_count: self.containers.len(),
            total_weight_tons: self.total_weight_tons(),
            containers: self.containers.iter().map(Container::summary).collect(),
        }
    }
}
