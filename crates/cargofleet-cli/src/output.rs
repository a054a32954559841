//! Output formatting for command results.
//!
//! Every renderer writes either a human-readable text view or pretty JSON to
//! the supplied writer.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::commands::demo::DemoReport;
use crate::commands::products::{ProductRequirement, TemperatureCheck};
use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Render the demo narrative followed by the final ship summaries.
pub fn render_demo<W: Write>(
    out: &mut W,
    report: &DemoReport,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, report);
    }

    for step in &report.steps {
        let (tag_color, tag) = if step.ok {
            (palette.tag_ok, " OK ")
        } else {
            (palette.tag_fail, "FAIL")
        };
        writeln!(
            out,
            "{tag_color}{tag}{reset} {} {gray}({}){reset}",
            step.action,
            step.detail,
            reset = palette.reset,
            gray = palette.gray,
        )?;
    }

    for ship in &report.ships {
        writeln!(out)?;
        writeln!(out, "{ship}")?;
    }

    writeln!(
        out,
        "\n{} operations, {} rejected",
        report.steps.len(),
        report.failures()
    )?;
    Ok(())
}

/// Render the known product table.
pub fn render_products<W: Write>(
    out: &mut W,
    products: &[ProductRequirement],
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, &products);
    }

    writeln!(out, "Known products ({}):", products.len())?;
    writeln!(out, "{:<16} {:>12}", "Product", "Min Temp (°C)")?;
    for product in products {
        writeln!(
            out,
            "{bold}{:<16}{reset} {cyan}{:>12.1}{reset}",
            product.product,
            product.required_c,
            bold = palette.white_bold,
            cyan = palette.cyan,
            reset = palette.reset,
        )?;
    }
    Ok(())
}

/// Render a temperature suitability check.
pub fn render_temperature_check<W: Write>(
    out: &mut W,
    check: &TemperatureCheck,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, check);
    }

    let verdict = if check.suitable {
        "suitable"
    } else {
        "too cold"
    };
    let requirement = match check.required_c {
        Some(required) => format!("minimum {required}°C"),
        None => "no known requirement".to_string(),
    };
    writeln!(
        out,
        "{}°C is {verdict} for {bold}{}{reset} ({requirement})",
        check.temperature_c,
        check.product,
        bold = palette.white_bold,
        reset = palette.reset,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::products::{check_temperature, list_products};

    fn render_to_string(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).expect("render succeeds");
        String::from_utf8(buffer).expect("utf8 output")
    }

    #[test]
    fn temperature_check_text_mentions_requirement() {
        let check = check_temperature("Fish", 1.0);
        let text = render_to_string(|out| {
            render_temperature_check(out, &check, OutputFormat::Text, ColorPalette::plain())
        });
        assert_eq!(text, "1°C is too cold for Fish (minimum 2°C)\n");
    }

    #[test]
    fn products_json_is_an_array() {
        let products = list_products();
        let text = render_to_string(|out| {
            render_products(out, &products, OutputFormat::Json, ColorPalette::plain())
        });
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value.as_array().map(Vec::len), Some(products.len()));
    }
}
