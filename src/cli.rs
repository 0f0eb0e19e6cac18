use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use flexi_plan::config::DEFAULT_CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(name = "flexi", version, about = "Flexi-postpaid plan builder")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive plan builder (default)
    Build,

    /// Price a plan from command-line selections
    Quote(QuoteArgs),

    /// List base plans and bundle options
    Catalog,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone, Default)]
pub struct QuoteArgs {
    /// Base plan id (basic, smart, max)
    #[arg(short, long)]
    pub base: Option<String>,

    /// Extra data in GB (clamped to the catalog range)
    #[arg(short, long, allow_negative_numbers = true)]
    pub extra_data: Option<i64>,

    /// Monthly spend cap (clamped and snapped to the slider step)
    #[arg(long, allow_negative_numbers = true)]
    pub cap: Option<i64>,

    /// Turn a category on (repeatable)
    #[arg(long, value_name = "CATEGORY")]
    pub enable: Vec<String>,

    /// Turn a category off (repeatable)
    #[arg(long, value_name = "CATEGORY")]
    pub disable: Vec<String>,

    /// Select a category option (repeatable)
    #[arg(short, long, value_name = "CATEGORY=OPTION", value_parser = parse_key_val)]
    pub option: Vec<(String, String)>,

    /// Print the quote as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Build if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Build)
    }
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() && !value.is_empty() => {
            Ok((key.to_string(), value.to_string()))
        }
        _ => Err(format!("expected CATEGORY=OPTION, got '{}'", s)),
    }
}
