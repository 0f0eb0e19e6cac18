use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use flexi_plan::{
    config::Config,
    format::format_amount,
    pricing::Quote,
    session::{Action, Session},
};

use crate::cli::QuoteArgs;

/// Execute the quote command
///
/// Starts from the catalog defaults, applies the selections given on the
/// command line and prints the breakdown
pub fn execute(cfg: &Config, args: &QuoteArgs) -> Result<()> {
    let mut session = Session::new(Arc::new(cfg.catalog.clone()));

    for action in actions_from_args(args) {
        let label = format!("{:?}", action);
        if let Err(e) = session.apply(action) {
            if args.json {
                let body = json!({
                    "error": {
                        "message": e.to_string(),
                        "type": e.kind(),
                    }
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            }
            return Err(e).with_context(|| format!("Failed to apply {}", label));
        }
    }

    let quote = session.quote();
    info!(total = quote.total, base = %quote.base, "Quote computed");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        print_quote(&quote, &cfg.display.currency_symbol);
    }

    Ok(())
}

/// Translate flags into actions: base, extra data, cap, options, enables, disables
pub fn actions_from_args(args: &QuoteArgs) -> Vec<Action> {
    let mut actions = Vec::new();

    if let Some(base) = &args.base {
        actions.push(Action::SelectBase(base.clone()));
    }
    if let Some(gb) = args.extra_data {
        actions.push(Action::SetExtraData(saturate_u32(gb)));
    }
    if let Some(cap) = args.cap {
        actions.push(Action::SetSpendCap(saturate_u32(cap)));
    }
    for (category, option) in &args.option {
        actions.push(Action::SelectOption {
            category: category.clone(),
            option: option.clone(),
        });
    }
    for category in &args.enable {
        actions.push(Action::SetEnabled {
            category: category.clone(),
            enabled: true,
        });
    }
    for category in &args.disable {
        actions.push(Action::SetEnabled {
            category: category.clone(),
            enabled: false,
        });
    }

    actions
}

/// Squeeze a flag value into `u32`; the selection clamps it from there
fn saturate_u32(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

/// Print a human-readable breakdown
pub fn print_quote(quote: &Quote, symbol: &str) {
    let money = |n: u64| format_amount(symbol, n);

    println!("{}", "Flexi-Postpaid Plan".red().bold());
    println!();
    println!(
        "  {:<28} {:>10}",
        format!("{} (base rental)", quote.base_name).cyan(),
        money(u64::from(quote.base_price))
    );
    println!(
        "  {:<28} {:>10}",
        format!("Extra data {} GB", quote.extra_data_gb).cyan(),
        format!("+{}", money(quote.extra_data_price))
    );

    for item in &quote.items {
        let name = format!("{}: {}", item.label, item.option_label);
        if item.enabled {
            println!(
                "  {:<28} {:>10}",
                name.cyan(),
                format!("+{}", money(u64::from(item.price)))
            );
        } else {
            println!("  {:<28} {:>10}", name.dimmed(), "off".dimmed());
        }
    }

    println!();
    println!(
        "  {}: {} {}",
        "Spend cap".cyan(),
        money(u64::from(quote.spend_cap)),
        "(display only)".dimmed()
    );
    println!(
        "  {}: {}",
        "Total".bold(),
        format!("{}/mo", money(quote.total)).green().bold()
    );
}
