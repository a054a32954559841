//! Integration tests for the CLI subcommands.
//!
//! These tests use `assert_cmd` to verify text and JSON output and exit codes.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("cargofleet-cli");
    cmd.env("RUST_LOG", "error").env("NO_COLOR", "1");
    cmd
}

#[test]
fn demo_prints_narrative_and_ship_summaries() {
    cli()
        .arg("demo")
        .assert()
        .success()
        .stdout(contains("FAIL load 600kg into KON-L-1"))
        .stdout(contains("--- Ship Information: Ship-1 ---"))
        .stdout(contains("--- Ship Information: Ship-2 ---"))
        .stdout(contains("4 rejected"));
}

#[test]
fn demo_json_output_is_parseable() {
    let output = cli()
        .args(["--format", "json", "demo", "--serial-start", "10"])
        .output()
        .expect("run demo");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let ships = value["ships"].as_array().expect("ships array");
    assert_eq!(ships.len(), 2);
    assert_eq!(ships[1]["containers"][0]["serial"], "KON-G-12");
}

#[test]
fn products_lists_temperature_table() {
    cli()
        .arg("products")
        .assert()
        .success()
        .stdout(contains("Known products (10):"))
        .stdout(contains("Frozen pizza").and(contains("-30.0")));
}

#[test]
fn check_temperature_accepts_negative_values() {
    cli()
        .args(["check-temperature", "--product", "ice cream", "--temperature", "-20"])
        .assert()
        .success()
        .stdout(contains("-20°C is too cold for ice cream (minimum -18°C)"));
}

#[test]
fn check_temperature_json_for_unknown_product() {
    cli()
        .args([
            "--format",
            "json",
            "check-temperature",
            "--product",
            "Kiwi",
            "--temperature",
            "4",
        ])
        .assert()
        .success()
        .stdout(contains("\"suitable\": true"))
        .stdout(contains("required_c").not());
}

#[test]
fn rejects_unknown_subcommand() {
    cli().arg("sail").assert().failure();
}
