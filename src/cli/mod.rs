//! Command-line interface definitions.
//!
//! Defines the CLI structure for the simulator using `clap` and dispatches
//! each subcommand to its handler.

pub mod config;
pub mod diagnostic;
pub mod output;
pub mod prompt;
pub mod render;
pub mod simulate;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::{Config, LoggingConfig};
use crate::domain::{GridKind, ScenarioInputs};
use crate::error::Result;

/// Feedlot purchase profitability simulator
#[derive(Parser, Debug)]
#[command(name = "feedlot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the result, its composition and both sensitivity tables
    Simulate(SimulateArgs),

    /// Print a single sensitivity table
    Grid(GridArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `feedlot config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a documented configuration file.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file.
    Validate(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, env = "FEEDLOT_CONFIG", default_value = "feedlot.toml")]
    pub config: PathBuf,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file
    #[arg(default_value = "feedlot.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Scenario inputs given on the command line, layered over the config.
#[derive(Parser, Debug, Default)]
pub struct ScenarioArgs {
    /// Path to configuration file (defaults built in when absent)
    #[arg(short, long, env = "FEEDLOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Live weight bought (kg)
    #[arg(long, allow_negative_numbers = true)]
    pub kg_purchased: Option<f64>,

    /// Average daily gain, ADPV (kg/day)
    #[arg(long, allow_negative_numbers = true)]
    pub daily_gain: Option<f64>,

    /// Feed conversion (kg dry matter per kg gained)
    #[arg(long, allow_negative_numbers = true)]
    pub feed_conversion: Option<f64>,

    /// Days on feed
    #[arg(long)]
    pub days_on_feed: Option<u32>,

    /// Dressing yield at the sale scale (%)
    #[arg(long, allow_negative_numbers = true)]
    pub dressing_yield: Option<f64>,

    /// Delivered purchase price per kg
    #[arg(long, allow_negative_numbers = true)]
    pub purchase_price: Option<f64>,

    /// Average diet cost per kg of dry matter
    #[arg(long, allow_negative_numbers = true)]
    pub feed_cost: Option<f64>,

    /// Sale price per kg
    #[arg(long, allow_negative_numbers = true)]
    pub sale_price: Option<f64>,
}

impl ScenarioArgs {
    /// Apply the given overrides on top of `base`.
    #[must_use]
    pub fn apply(&self, base: ScenarioInputs) -> ScenarioInputs {
        ScenarioInputs {
            kg_purchased: self.kg_purchased.unwrap_or(base.kg_purchased),
            daily_gain: self.daily_gain.unwrap_or(base.daily_gain),
            feed_conversion_ratio: self.feed_conversion.unwrap_or(base.feed_conversion_ratio),
            days_on_feed: self.days_on_feed.unwrap_or(base.days_on_feed),
            dressing_yield_pct: self.dressing_yield.unwrap_or(base.dressing_yield_pct),
            purchase_price_per_kg: self.purchase_price.unwrap_or(base.purchase_price_per_kg),
            feed_cost_per_kg_drymatter: self
                .feed_cost
                .unwrap_or(base.feed_cost_per_kg_drymatter),
            sale_price_per_kg: self.sale_price.unwrap_or(base.sale_price_per_kg),
        }
    }
}

/// Arguments for `simulate`.
#[derive(Parser, Debug)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Prompt for every input, pre-filled with the current value
    #[arg(short, long)]
    pub interactive: bool,

    /// Skip the sensitivity tables in text output
    #[arg(long)]
    pub no_grids: bool,
}

/// Arguments for `grid`.
#[derive(Parser, Debug)]
pub struct GridArgs {
    /// Which table to print
    pub kind: GridChoice,

    #[command(flatten)]
    pub scenario: ScenarioArgs,
}

/// Sensitivity table selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum GridChoice {
    /// Purchase price against sale price
    Price,
    /// Feed conversion against daily gain
    Conversion,
}

impl From<GridChoice> for GridKind {
    fn from(choice: GridChoice) -> Self {
        match choice {
            GridChoice::Price => Self::Price,
            GridChoice::Conversion => Self::Conversion,
        }
    }
}

/// Install color and output settings from the global flags.
pub fn configure(cli: &Cli) {
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(output::OutputConfig::new(cli.json, cli.quiet));
}

/// Run the selected subcommand.
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Simulate(args) => {
            let config = load_config(args.scenario.config.as_deref(), cli.verbose)?;
            simulate::execute_simulate(&args, &config)
        }
        Commands::Grid(args) => {
            let config = load_config(args.scenario.config.as_deref(), cli.verbose)?;
            simulate::execute_grid(&args, &config)
        }
        Commands::Config(command) => {
            LoggingConfig::default().with_verbosity(cli.verbose).init();
            match command {
                ConfigCommand::Init(args) => config::execute_init(&args.path, args.force),
                ConfigCommand::Show(arg) => config::execute_show(&arg.config),
                ConfigCommand::Validate(arg) => config::execute_validate(&arg.config),
            }
        }
    }
}

/// Load the configuration (built-in defaults without a path) and start logging.
fn load_config(path: Option<&Path>, verbose: u8) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.logging = config.logging.with_verbosity(verbose);
    config.init_logging();
    debug!(path = ?path, "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simulate_with_overrides() {
        let cli = Cli::try_parse_from([
            "feedlot",
            "simulate",
            "--sale-price",
            "4.2",
            "--days-on-feed",
            "90",
        ])
        .unwrap();

        match cli.command {
            Commands::Simulate(args) => {
                assert_eq!(args.scenario.sale_price, Some(4.2));
                assert_eq!(args.scenario.days_on_feed, Some(90));
                assert!(!args.interactive);
            }
            other => panic!("expected simulate, got {other:?}"),
        }
    }

    #[test]
    fn parses_negative_override() {
        let cli =
            Cli::try_parse_from(["feedlot", "simulate", "--purchase-price", "-1.5"]).unwrap();
        match cli.command {
            Commands::Simulate(args) => assert_eq!(args.scenario.purchase_price, Some(-1.5)),
            other => panic!("expected simulate, got {other:?}"),
        }
    }

    #[test]
    fn parses_grid_kind() {
        let cli = Cli::try_parse_from(["feedlot", "grid", "conversion", "--json"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Grid(args) => assert_eq!(GridKind::from(args.kind), GridKind::Conversion),
            other => panic!("expected grid, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_grid_kind() {
        assert!(Cli::try_parse_from(["feedlot", "grid", "weather"]).is_err());
    }

    #[test]
    fn color_defaults_to_auto() {
        let cli = Cli::try_parse_from(["feedlot", "config", "show"]).unwrap();
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn scenario_args_layer_over_base() {
        let args = ScenarioArgs {
            kg_purchased: Some(400.0),
            feed_cost: Some(0.3),
            ..ScenarioArgs::default()
        };
        let inputs = args.apply(ScenarioInputs::default());

        assert_eq!(inputs.kg_purchased, 400.0);
        assert_eq!(inputs.feed_cost_per_kg_drymatter, 0.3);
        assert_eq!(inputs.sale_price_per_kg, 4.0);
        assert_eq!(inputs.days_on_feed, 120);
    }
}
