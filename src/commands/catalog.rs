use colored::Colorize;
use tracing::info;

use flexi_plan::{
    config::Config,
    format::{format_amount, option_entry},
};

/// Execute the catalog command
pub fn execute(cfg: &Config) {
    let catalog = &cfg.catalog;
    let symbol = cfg.display.currency_symbol.as_str();
    info!(categories = catalog.categories.len(), "Listing catalog");

    println!("{}", "Base Rental Plans:".bold());
    for plan in &catalog.base_plans {
        let marker = if plan.id == catalog.default_base {
            " (default)".dimmed()
        } else {
            "".normal()
        };
        println!(
            "  {} [{}] {}{}",
            plan.name.cyan(),
            plan.id,
            format_amount(symbol, u64::from(plan.price)),
            marker
        );
        for benefit in &plan.benefits {
            println!("    ✓ {}", benefit);
        }
    }
    println!();

    println!(
        "{} {}/GB, {}..={} GB",
        "Extra Data:".bold(),
        format_amount(symbol, u64::from(catalog.extra_data.rate_per_gb)),
        catalog.extra_data.min_gb,
        catalog.extra_data.max_gb
    );
    println!(
        "{} {}..={} in steps of {}",
        "Spend Cap:".bold(),
        format_amount(symbol, u64::from(catalog.spend_cap.min)),
        format_amount(symbol, u64::from(catalog.spend_cap.max)),
        catalog.spend_cap.step
    );
    println!();

    println!("{}", "Bundles:".bold());
    for category in &catalog.categories {
        let status = if category.enabled_by_default {
            "on".green()
        } else {
            "off".red()
        };
        println!("  {} [{}] ({})", category.label.cyan(), category.key, status);
        for option in &category.options {
            let marker = if option.id == category.default_option {
                "*"
            } else {
                " "
            };
            println!("   {} {:<16} {}", marker, option.id, option_entry(symbol, option));
        }
    }
}
