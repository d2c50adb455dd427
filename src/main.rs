//! Brewtour CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Open the interactive browser (default command)
//! brewtour
//! brewtour browse --state Texas
//!
//! # Print filtered breweries
//! brewtour list --state Texas --type micro --city Austin --name ale
//! brewtour -q list --state Oregon --format csv
//!
//! # Print the cities with breweries in a state
//! brewtour cities --state Colorado
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/brewtour/config.toml` on Linux) and created with defaults on
//! first run.

use brewtour::{
    BrewError,
    api::{OpenBreweryDbClient, fetch_for_state},
    cli::{Cli, Commands, ConfigCommands, FilterArgs},
    config::BrewConfig,
    fetcher::FetchWorker,
    filters::{apply_filters, city_index},
    logging::{LogTarget, init_logging},
    output::{OutputFormat, city_with_count, write_breweries},
    ui::{OutputWriter, StdoutWriter, prompt_state, tui::BrowserApp},
};
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::info;

type Result<T> = std::result::Result<T, BrewError>;

/// Handle the browse command - interactive directory browser
///
/// # Errors
///
/// Returns `BrewError` if the HTTP client cannot be built or the terminal fails.
fn handle_browse_command(config: &BrewConfig, state: Option<String>) -> Result<()> {
    let client = OpenBreweryDbClient::from_config(config)?;
    let worker = FetchWorker::new(Arc::new(client), config.allowed_types.clone());

    BrowserApp::new(worker).with_initial_state(state).run()?;
    Ok(())
}

/// Handle the list command - fetch a state and print the visible subset
///
/// # Errors
///
/// Returns `BrewError` if the arguments are invalid, the fetch fails or
/// output cannot be written.
fn handle_list_command(
    config: &BrewConfig,
    state: Option<String>,
    filters: &FilterArgs,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let output = StdoutWriter::new(quiet);
    let filter = filters.to_filter_state()?;

    let state = match state {
        Some(state) => state,
        None => prompt_state()?,
    };

    let client = OpenBreweryDbClient::from_config(config)?;
    let dataset = fetch_for_state(&client, &state, &config.allowed_types)?;
    let visible = apply_filters(&dataset, &filter);
    info!(state = %state, total = dataset.len(), visible = visible.len(), "Listing breweries");

    if visible.is_empty() {
        output.warning(&format!("No breweries in {state} match the given filters"));
    } else if format == OutputFormat::Text {
        output.info(&format!(
            "Showing {} of {} breweries in {state}:",
            visible.len(),
            dataset.len()
        ));
    }

    let mut stdout = io::stdout().lock();
    write_breweries(&mut stdout, &visible, format, quiet)?;
    stdout.flush()?;
    Ok(())
}

/// Handle the cities command - print the city index with counts
///
/// # Errors
///
/// Returns `BrewError` if the fetch fails or output cannot be written.
fn handle_cities_command(config: &BrewConfig, state: &str, quiet: bool) -> Result<()> {
    let output = StdoutWriter::new(quiet);
    let client = OpenBreweryDbClient::from_config(config)?;
    let dataset = fetch_for_state(&client, state, &config.allowed_types)?;

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for brewery in &dataset {
        *counts.entry(brewery.city.as_str()).or_default() += 1;
    }

    let cities = city_index(&dataset);
    if cities.is_empty() {
        output.warning(&format!("No breweries found in {state}"));
        return Ok(());
    }

    output.info(&format!("Cities with breweries in {state}:"));
    let mut stdout = io::stdout().lock();
    for city in &cities {
        let count = counts.get(city.as_str()).copied().unwrap_or_default();
        writeln!(stdout, "{}", city_with_count(city, count, quiet))?;
    }
    Ok(())
}

/// Handle config subcommands
///
/// # Errors
///
/// Returns `BrewError` if the configuration cannot be rendered or located.
fn handle_config_command(config: &BrewConfig, command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => print!("{}", config.to_toml()?),
        ConfigCommands::Path => println!("{}", BrewConfig::config_path()?.display()),
    }
    Ok(())
}

fn run(cli: &Cli, config: &BrewConfig) -> Result<()> {
    let quiet = cli.quiet || config.quiet;

    match cli.get_command() {
        Commands::Browse { state } => handle_browse_command(config, state),
        Commands::List {
            state,
            filters,
            format,
        } => handle_list_command(config, state, &filters, format, quiet),
        Commands::Cities { state } => handle_cities_command(config, &state, quiet),
        Commands::Config { command } => handle_config_command(config, &command),
    }
}

fn main() {
    let cli = Cli::parse_args();

    let config = match BrewConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", BrewError::from(e));
            std::process::exit(1);
        }
    };

    // The browser owns the terminal, so it only ever logs to a file
    if matches!(cli.get_command(), Commands::Browse { .. }) {
        if let Some(path) = config.log_path() {
            init_logging(&config.log_level, LogTarget::File(&path));
        }
    } else {
        let level = if cli.quiet || config.quiet { "error" } else { config.log_level.as_str() };
        init_logging(level, LogTarget::Stderr);
    }

    if let Err(e) = run(&cli, &config) {
        StdoutWriter::default().error(&e.to_string());
        std::process::exit(1);
    }
}
