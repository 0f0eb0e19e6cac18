use anyhow::Result;
use colored::Colorize;
use flexi_plan::config::Config;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration (file, environment and defaults)
pub fn show(cfg: &Config) -> Result<()> {
    info!("Displaying effective configuration");

    println!("{}", "Current Configuration:".green().bold());
    println!();

    // Serialize to TOML format
    let toml_string = toml::to_string_pretty(cfg)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
///
/// Loading already validated the configuration; this prints a summary
pub fn validate(cfg: &Config) {
    info!("Configuration validation successful");

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Log Level: {}", cfg.logging.level);
    println!("  Log Format: {}", cfg.logging.format);
    println!("  Base Plans: {}", cfg.catalog.base_plans.len());
    println!("  Bundle Categories: {}", cfg.catalog.categories.len());
    println!("  Options: {}", count_options(cfg));
}

/// Count bundle options across all categories
fn count_options(cfg: &Config) -> usize {
    cfg.catalog.categories.iter().map(|c| c.options.len()).sum()
}
