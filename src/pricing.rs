//! Pricing engine
//!
//! A pure function from a [`Configuration`] to a monthly total. The total is
//! the base plan price, plus extra data at the per-GB rate, plus the selected
//! option of every enabled category. The spend cap never takes part.

use serde::Serialize;
use tracing::warn;

use crate::catalog::{BundleCategory, Catalog};
use crate::selection::Configuration;

/// Compute the monthly total for a configuration
///
/// An id that does not resolve against the catalog contributes 0 instead
/// of failing. Setters reject such ids, so this only fires for configurations
/// built by hand.
pub fn compute_total(catalog: &Catalog, config: &Configuration) -> u64 {
    let mut total = u64::from(base_price(catalog, config));
    total += extra_data_price(catalog, config);

    for (key, axis) in &config.axes {
        if !axis.enabled {
            continue;
        }
        match catalog.category(key) {
            Some(category) => total += u64::from(option_price(category, &axis.selected)),
            None => warn!(category = %key, "Unknown category in configuration, priced at 0"),
        }
    }

    total
}

/// Extra data cost: quantity times the per-GB rate
pub fn extra_data_price(catalog: &Catalog, config: &Configuration) -> u64 {
    u64::from(config.extra_data_gb) * u64::from(catalog.extra_data.rate_per_gb)
}

fn base_price(catalog: &Catalog, config: &Configuration) -> u32 {
    match catalog.base_plan(&config.base) {
        Some(plan) => plan.price,
        None => {
            warn!(base = %config.base, "Unknown base plan in configuration, priced at 0");
            0
        }
    }
}

/// Price of an option, 0 when the id is not in the category
pub fn option_price(category: &BundleCategory, id: &str) -> u32 {
    match category.option(id) {
        Some(option) => option.price,
        None => {
            warn!(
                category = %category.key,
                option = %id,
                "Unknown option in configuration, priced at 0"
            );
            0
        }
    }
}

/// One category row of a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub category: String,
    pub label: String,
    pub option: String,
    pub option_label: String,
    pub price: u32,
    pub enabled: bool,
}

/// Itemised breakdown of a configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub base: String,
    pub base_name: String,
    pub base_price: u32,
    pub extra_data_gb: u32,
    pub extra_data_price: u64,
    /// Every category in catalog order, enabled or not
    pub items: Vec<LineItem>,
    pub spend_cap: u32,
    pub total: u64,
}

impl Quote {
    /// Categories that contribute to the total
    pub fn active_items(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter(|i| i.enabled)
    }
}

/// Build the itemised quote; `total` is exactly [`compute_total`]
pub fn quote(catalog: &Catalog, config: &Configuration) -> Quote {
    let base_name = catalog
        .base_plan(&config.base)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| config.base.clone());

    let items = catalog
        .categories
        .iter()
        .filter_map(|category| {
            let axis = config.axis(&category.key)?;
            let option_label = category
                .option(&axis.selected)
                .map(|o| o.label.clone())
                .unwrap_or_else(|| axis.selected.clone());

            Some(LineItem {
                category: category.key.clone(),
                label: category.label.clone(),
                option: axis.selected.clone(),
                option_label,
                price: option_price(category, &axis.selected),
                enabled: axis.enabled,
            })
        })
        .collect();

    Quote {
        base: config.base.clone(),
        base_name,
        base_price: base_price(catalog, config),
        extra_data_gb: config.extra_data_gb,
        extra_data_price: extra_data_price(catalog, config),
        items,
        spend_cap: config.spend_cap,
        total: compute_total(catalog, config),
    }
}
