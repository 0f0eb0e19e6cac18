use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use flexi_plan::{config, init_tracing};

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();
    let command = args.get_command();

    let cfg = config::load_config(&args.config)?;

    // The builder owns the terminal, so it runs without a log subscriber
    if !matches!(command, cli::Commands::Build) {
        init_tracing(&cfg.logging);
    }

    // Dispatch to appropriate command handler
    match command {
        cli::Commands::Build => commands::build::execute(&cfg)?,
        cli::Commands::Quote(quote_args) => commands::quote::execute(&cfg, &quote_args)?,
        cli::Commands::Catalog => commands::catalog::execute(&cfg),
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
            cli::ConfigCommands::Validate => commands::config::validate(&cfg),
        },
        cli::Commands::Version => {
            println!("Flexi Plan Builder v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
