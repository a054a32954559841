use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use cargofleet_cli::commands::{demo, products};
use cargofleet_cli::logging::{init_logging, LogFormat, LoggingConfig};
use cargofleet_cli::output::{
    render_demo, render_products, render_temperature_check, OutputFormat,
};
use cargofleet_cli::terminal::ColorPalette;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cargo container and ship placement utilities")]
struct Cli {
    /// Output format for command results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Log output format (logs go to stderr). Overrides `LOG_FORMAT`.
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormat>,

    /// Disable ANSI colors in text output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the loading, placement and transfer walkthrough with two ships.
    Demo {
        /// First container serial number to hand out.
        #[arg(long, default_value_t = 1)]
        serial_start: u64,
    },
    /// List known products and their minimum storage temperatures.
    Products,
    /// Check whether a temperature is warm enough for a product.
    CheckTemperature {
        /// Product type, matched case-insensitively.
        #[arg(long)]
        product: String,
        /// Container temperature in °C.
        #[arg(long, allow_hyphen_values = true)]
        temperature: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if let Some(format) = cli.log_format {
        logging = logging.with_format(format);
    }
    init_logging(&logging);

    let palette = if cli.no_color {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Demo { serial_start } => {
            let report = demo::run_demo(serial_start).context("demo scenario failed")?;
            render_demo(&mut out, &report, cli.format, palette)?;
        }
        Command::Products => {
            render_products(&mut out, &products::list_products(), cli.format, palette)?;
        }
        Command::CheckTemperature {
            product,
            temperature,
        } => {
            let check = products::check_temperature(&product, temperature);
            render_temperature_check(&mut out, &check, cli.format, palette)?;
        }
    }

    out.flush()?;
    Ok(())
}
