//! Output formatting for CLI display
//!
//! Renders brewery lists and city indexes for the non-interactive commands
//! as colored text, JSON or CSV.

use crate::BrewError;
use crate::brewery::Brewery;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

/// Output format for the `list` command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human readable listing
    #[default]
    Text,
    /// JSON array of brewery objects
    Json,
    /// CSV with a header row
    Csv,
}

/// Flat row written by the CSV format
#[derive(Serialize)]
struct CsvRow<'a> {
    id: String,
    name: &'a str,
    brewery_type: &'a str,
    street: &'a str,
    city: &'a str,
    postal_code: &'a str,
    phone: &'a str,
    website_url: &'a str,
}

impl<'a> From<&'a Brewery> for CsvRow<'a> {
    fn from(b: &'a Brewery) -> Self {
        Self {
            id: b.id.to_string(),
            name: &b.name,
            brewery_type: b.brewery_type.as_str(),
            street: b.street.as_deref().unwrap_or_default(),
            city: &b.city,
            postal_code: b.postal_code.as_deref().unwrap_or_default(),
            phone: b.phone.as_deref().unwrap_or_default(),
            website_url: b.website_url.as_deref().unwrap_or_default(),
        }
    }
}

/// Format a brewery as a multi-line text block
///
/// In quiet mode only the name is printed.
#[must_use]
pub fn brewery_block(brewery: &Brewery, quiet: bool) -> String {
    if quiet {
        return brewery.name.clone();
    }

    let mut out = format!(
        "{} {}\n",
        brewery.name.bold(),
        format!("[{}]", brewery.brewery_type.label()).magenta()
    );
    let address = brewery.address_line();
    if !address.is_empty() {
        out.push_str(&format!("  Address: {address}\n"));
    }
    if let Some(phone) = brewery.phone.as_deref().filter(|p| !p.is_empty()) {
        out.push_str(&format!("  Phone:   {phone}\n"));
    }
    if let Some(url) = brewery.website_url.as_deref().filter(|u| !u.is_empty()) {
        out.push_str(&format!("  Website: {}\n", url.cyan()));
    }
    out
}

/// Write breweries to `out` in the requested format
///
/// # Errors
///
/// Returns `BrewError` if writing or serialization fails.
pub fn write_breweries(
    out: &mut impl Write,
    breweries: &[Brewery],
    format: OutputFormat,
    quiet: bool,
) -> Result<(), BrewError> {
    match format {
        OutputFormat::Text => {
            for brewery in breweries {
                writeln!(out, "{}", brewery_block(brewery, quiet))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, breweries)
                .map_err(|e| BrewError::OutputError(e.to_string()))?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for brewery in breweries {
                writer
                    .serialize(CsvRow::from(brewery))
                    .map_err(|e| BrewError::OutputError(e.to_string()))?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

/// Format a city with its brewery count
#[must_use]
pub fn city_with_count(city: &str, count: usize, quiet: bool) -> String {
    if quiet {
        city.to_string()
    } else {
        format!("  {city} ({count} brewer{})", if count == 1 { "y" } else { "ies" })
    }
}
