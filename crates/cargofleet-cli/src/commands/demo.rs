//! Demo command: walks two ships and five containers through every operation.

use std::fmt::Display;

use anyhow::Result;
use serde::Serialize;

use cargofleet_lib::{Container, ContainerShip, Counter, Dimensions, ShipSpec, ShipSummary};

/// Outcome of one narrated operation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DemoStep {
    pub action: String,
    pub ok: bool,
    pub detail: String,
}

/// Everything the demo did, plus the final state of both ships.
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub steps: Vec<DemoStep>,
    pub ships: Vec<ShipSummary>,
}

impl DemoReport {
    pub fn failures(&self) -> usize {
        self.steps.iter().filter(|step| !step.ok).count()
    }
}

#[derive(Default)]
struct Narrative {
    steps: Vec<DemoStep>,
}

impl Narrative {
    fn record<T, E: Display>(
        &mut self,
        action: impl Into<String>,
        result: std::result::Result<T, E>,
        describe: impl FnOnce(&T) -> String,
    ) -> Option<T> {
        let action = action.into();
        match result {
            Ok(value) => {
                self.steps.push(DemoStep {
                    action,
                    ok: true,
                    detail: describe(&value),
                });
                Some(value)
            }
            Err(err) => {
                self.steps.push(DemoStep {
                    action,
                    ok: false,
                    detail: err.to_string(),
                });
                None
            }
        }
    }

    /// Record a step that cannot fail.
    fn note(&mut self, action: impl Into<String>, detail: impl Into<String>) {
        self.steps.push(DemoStep {
            action: action.into(),
            ok: true,
            detail: detail.into(),
        });
    }

    fn load(&mut self, container: &mut Container, weight_kg: f64) {
        let action = format!("load {weight_kg}kg into {}", container.serial());
        self.record(action, container.load_cargo(weight_kg), |total| {
            format!("cargo now {total}kg")
        });
    }

    fn board(&mut self, ship: &mut ContainerShip, container: Container) {
        let action = format!("load container {} onto {}", container.serial(), ship.name());
        let tons = container.total_weight_kg() / 1000.0;
        self.record(action, ship.load_container(container), |_| {
            format!("{tons:.2}t aboard")
        });
    }
}

/// Run the demo scenario. Serial numbers start at `serial_start`.
pub fn run_demo(serial_start: u64) -> Result<DemoReport> {
    let serials = Counter::starting_at(serial_start);
    let ship_names = Counter::new();
    let mut narrative = Narrative::default();

    let mut ship1 = ContainerShip::with_generated_name(&ship_names, ShipSpec::new(25.0, 5, 50.0)?)?;
    let mut ship2 = ContainerShip::with_generated_name(&ship_names, ShipSpec::new(20.0, 10, 80.0)?)?;

    let mut liquid =
        Container::liquid(&serials, Dimensions::new(200.0, 1500.0, 200.0, 10_000.0)?, false)?;
    let mut hazardous =
        Container::liquid(&serials, Dimensions::new(200.0, 1600.0, 200.0, 10_000.0)?, true)?;
    let mut gas = Container::gas(&serials, Dimensions::new(180.0, 1200.0, 180.0, 8000.0)?, 15.0)?;
    let mut fish = Container::refrigerated(
        &serials,
        Dimensions::new(220.0, 2000.0, 210.0, 12_000.0)?,
        "Fish",
        2.0,
    )?;
    let bananas = Container::refrigerated(
        &serials,
        Dimensions::new(220.0, 2000.0, 210.0, 12_000.0)?,
        "Bananas",
        14.0,
    )?;

    // 90% ceiling: the third load overfills.
    for weight in [4000.0, 4500.0, 600.0] {
        narrative.load(&mut liquid, weight);
    }
    // 50% ceiling: the last kilogram overfills.
    for weight in [2000.0, 3000.0, 1.0] {
        narrative.load(&mut hazardous, weight);
    }
    narrative.load(&mut gas, 7000.0);
    narrative.load(&mut gas, 1001.0);
    gas.empty_cargo();
    narrative.note(
        format!("empty {}", gas.serial()),
        format!("{:.2}kg residual gas kept", gas.cargo_weight_kg()),
    );
    narrative.load(&mut gas, 7600.0);
    narrative.load(&mut fish, 5000.0);
    narrative.load(&mut fish, 6000.0);

    let liquid_serial = liquid.serial().to_string();
    let hazardous_serial = hazardous.serial().to_string();
    let gas_serial = gas.serial().to_string();
    let bananas_serial = bananas.serial().to_string();

    narrative.board(&mut ship1, liquid);
    narrative.board(&mut ship1, hazardous);

    let report = ship1.load_containers(vec![gas, fish]);
    narrative.note(
        format!("batch load 2 containers onto {}", ship1.name()),
        format!(
            "loaded {}, failed {}",
            report.loaded_count(),
            report.failed_count()
        ),
    );

    narrative.board(&mut ship1, bananas);

    let mut extra =
        Container::liquid(&serials, Dimensions::new(100.0, 1000.0, 100.0, 5000.0)?, false)?;
    narrative.load(&mut extra, 1000.0);
    narrative.board(&mut ship1, extra);

    narrative.record(
        format!("unload cargo of {liquid_serial}"),
        ship1.unload_container_cargo(&liquid_serial),
        |left| format!("{left}kg left"),
    );
    narrative.record(
        format!("inspect {liquid_serial}"),
        ship1.container_info(&liquid_serial),
        |info| info.to_string(),
    );
    narrative.record(
        format!("remove {hazardous_serial} from {}", ship1.name()),
        ship1.remove_container(&hazardous_serial),
        |removed| format!("{} is now unowned", removed.serial()),
    );
    let target = ship2.name().to_string();
    narrative.record(
        format!("transfer {gas_serial} to {target}"),
        ship1.transfer_container(&mut ship2, &gas_serial),
        |_| format!("{gas_serial} now on {target}"),
    );

    let mut replacement =
        Container::liquid(&serials, Dimensions::new(180.0, 1400.0, 180.0, 9000.0)?, false)?;
    narrative.load(&mut replacement, 500.0);
    narrative.load(&mut replacement, 1500.0);
    let replacement_serial = replacement.serial().to_string();
    narrative.record(
        format!("replace {bananas_serial} with {replacement_serial}"),
        ship1.replace_container(&bananas_serial, replacement),
        |old| format!("{} taken off", old.serial()),
    );

    Ok(DemoReport {
        steps: narrative.steps,
        ships: vec![ship1.summary(), ship2.summary()],
    })
}
