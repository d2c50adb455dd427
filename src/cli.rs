//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **browse**: Interactive directory browser (default)
//! - **list**: Fetch a state and print the filtered breweries
//! - **cities**: Print the city index for a state
//! - **config**: Show the active configuration or its location
//!
//! # Examples
//!
//! ```
//! use brewtour::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["brewtour", "list", "--state", "Texas", "--type", "micro"]);
//! assert!(matches!(cli.get_command(), Commands::List { .. }));
//! ```

use crate::BrewError;
use crate::brewery::BreweryType;
use crate::filters::FilterState;
use crate::output::OutputFormat;
use clap::{Parser, Subcommand};

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the active configuration as TOML
    Show,
    /// Print the configuration file location
    Path,
}

/// Filter arguments shared by commands that print breweries
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Only show breweries of this type (micro, regional, brewpub)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub brewery_type: Option<String>,

    /// Only show breweries in these cities (repeatable)
    #[arg(short = 'c', long = "city", value_name = "CITY")]
    pub cities: Vec<String>,

    /// Only show breweries whose name contains this text
    #[arg(short = 'n', long = "name", value_name = "QUERY")]
    pub name: Option<String>,
}

impl FilterArgs {
    /// Build a filter state from the arguments
    ///
    /// # Errors
    ///
    /// Returns `BrewError::InvalidInput` for a type outside the selectable set.
    pub fn to_filter_state(&self) -> Result<FilterState, BrewError> {
        let mut filter = FilterState::new();

        if let Some(raw) = &self.brewery_type {
            filter.set_type(Some(parse_selectable_type(raw)?));
        }
        for city in &self.cities {
            filter.select_city(city.clone());
        }
        if let Some(name) = &self.name {
            filter.set_name_query(name.clone());
        }

        Ok(filter)
    }
}

/// Parse a brewery type accepted by the type filter
///
/// # Errors
///
/// Returns `BrewError::InvalidInput` if `raw` is not one of the selectable types.
pub fn parse_selectable_type(raw: &str) -> Result<BreweryType, BrewError> {
    let Ok(kind) = raw.parse::<BreweryType>();
    if BreweryType::SELECTABLE.contains(&kind) {
        Ok(kind)
    } else {
        let allowed: Vec<&str> = BreweryType::SELECTABLE.iter().map(BreweryType::as_str).collect();
        Err(BrewError::InvalidInput(format!(
            "Unknown brewery type '{raw}' (expected one of: {})",
            allowed.join(", ")
        )))
    }
}

/// Main CLI structure
#[derive(Parser, Debug)]
#[command(name = "brewtour")]
#[command(about = "Browse breweries by US state", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive browser (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Fetch this state as soon as the browser opens
        #[arg(short = 's', long = "state", value_name = "STATE")]
        state: Option<String>,
    },

    /// Fetch a state and print the matching breweries
    #[command(visible_alias = "ls")]
    List {
        /// US state to fetch (prompted for when omitted)
        #[arg(short = 's', long = "state", value_name = "STATE")]
        state: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,

        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the cities that have breweries in a state
    Cities {
        /// US state to fetch
        #[arg(short = 's', long = "state", value_name = "STATE")]
        state: String,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Browse { state: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_browse() {
        let cli = Cli::parse_from(["brewtour"]);
        assert_eq!(cli.get_command(), Commands::Browse { state: None });
        assert!(!cli.quiet);
    }

    #[test]
    fn test_browse_with_state() {
        let cli = Cli::parse_from(["brewtour", "browse", "--state", "Texas"]);
        assert_eq!(
            cli.get_command(),
            Commands::Browse {
                state: Some("Texas".into())
            }
        );
    }

    #[test]
    fn test_list_parses_filters() {
        let cli = Cli::parse_from([
            "brewtour", "-q", "list", "-s", "Texas", "--type", "micro", "-c", "Austin", "-c",
            "Dallas", "--name", "ale", "--format", "json",
        ]);
        assert!(cli.quiet);

        let Commands::List {
            state,
            filters,
            format,
        } = cli.get_command()
        else {
            panic!("expected list command");
        };
        assert_eq!(state.as_deref(), Some("Texas"));
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(filters.cities, vec!["Austin", "Dallas"]);

        let filter = filters.to_filter_state().unwrap();
        assert_eq!(filter.brewery_type, Some(BreweryType::Micro));
        assert!(filter.is_city_selected("Austin"));
        assert!(filter.is_city_selected("Dallas"));
        assert_eq!(filter.name_query, "ale");
    }

    #[test]
    fn test_parse_selectable_type() {
        assert_eq!(parse_selectable_type("Brewpub").unwrap(), BreweryType::Brewpub);
        assert!(matches!(
            parse_selectable_type("nano"),
            Err(BrewError::InvalidInput(_))
        ));
        assert!(parse_selectable_type("closed").is_err());
    }

    #[test]
    fn test_empty_filter_args_are_inactive() {
        let filter = FilterArgs::default().to_filter_state().unwrap();
        assert!(!filter.is_active());
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::parse_from(["brewtour", "config", "path"]);
        assert_eq!(
            cli.get_command(),
            Commands::Config {
                command: ConfigCommands::Path
            }
        );
    }
}
