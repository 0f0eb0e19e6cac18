//! Selection state: the user's current pick on every configurable axis
//!
//! [`Configuration`] is a plain value. Setters on [`Selection`] never edit it
//! in place; they build the next value and swap it in only when the change
//! is valid, so a rejected change leaves the previous configuration intact.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::catalog::{Catalog, SpendCapRange, OTT};
use crate::error::PlanError;

/// Runtime state of one toggleable category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisState {
    pub enabled: bool,
    /// Always an option id of the owning category
    pub selected: String,
}

/// Aggregate of every choice the user has made
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    /// Base plan id
    pub base: String,
    pub extra_data_gb: u32,
    /// Display only, never constrains the total
    pub spend_cap: u32,
    pub axes: BTreeMap<String, AxisState>,
}

impl Configuration {
    /// Session-start configuration seeded from the catalog defaults
    pub fn defaults(catalog: &Catalog) -> Self {
        let axes = catalog
            .categories
            .iter()
            .map(|c| {
                (
                    c.key.clone(),
                    AxisState {
                        enabled: c.enabled_by_default,
                        selected: c.default_option.clone(),
                    },
                )
            })
            .collect();

        Self {
            base: catalog.default_base.clone(),
            extra_data_gb: catalog.extra_data.default_gb,
            spend_cap: catalog.spend_cap.default,
            axes,
        }
    }

    pub fn axis(&self, key: &str) -> Option<&AxisState> {
        self.axes.get(key)
    }
}

/// Holds the current configuration and exposes one setter per axis
#[derive(Debug, Clone)]
pub struct Selection {
    catalog: Arc<Catalog>,
    config: Configuration,
}

impl Selection {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let config = Configuration::defaults(&catalog);
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Select the base plan by id
    pub fn set_base(&mut self, id: &str) -> Result<(), PlanError> {
        if self.catalog.base_plan(id).is_none() {
            return Err(PlanError::InvalidBasePlan(id.to_string()));
        }

        debug!(base = id, "Base plan selected");
        self.replace(Configuration {
            base: id.to_string(),
            ..self.config.clone()
        });
        Ok(())
    }

    /// Set the extra-data quantity, clamped into the catalog's range
    pub fn set_extra_data(&mut self, gb: u32) {
        let data = &self.catalog.extra_data;
        let clamped = clamp_between(gb, data.min_gb, data.max_gb);
        debug!(requested = gb, extra_data_gb = clamped, "Extra data set");

        self.replace(Configuration {
            extra_data_gb: clamped,
            ..self.config.clone()
        });
    }

    /// Set the spend cap, clamped into range and snapped to the slider step
    pub fn set_spend_cap(&mut self, value: u32) {
        let snapped = snap_spend_cap(&self.catalog.spend_cap, value);
        debug!(requested = value, spend_cap = snapped, "Spend cap set");

        self.replace(Configuration {
            spend_cap: snapped,
            ..self.config.clone()
        });
    }

    pub fn set_ott_enabled(&mut self, enabled: bool) -> Result<(), PlanError> {
        self.set_bundle_enabled(OTT, enabled)
    }

    pub fn set_ott_option(&mut self, id: &str) -> Result<(), PlanError> {
        self.set_bundle_option(OTT, id)
    }

    /// Turn a category on or off; its selected option is kept either way
    pub fn set_bundle_enabled(&mut self, key: &str, enabled: bool) -> Result<(), PlanError> {
        self.catalog.require_category(key)?;

        let mut next = self.config.clone();
        let axis = next
            .axes
            .get_mut(key)
            .ok_or_else(|| PlanError::InvalidCategory(key.to_string()))?;
        axis.enabled = enabled;

        debug!(category = key, enabled, "Category toggled");
        self.replace(next);
        Ok(())
    }

    /// Select a category's option; allowed while the category is off
    pub fn set_bundle_option(&mut self, key: &str, id: &str) -> Result<(), PlanError> {
        let category = self.catalog.require_category(key)?;
        if category.option(id).is_none() {
            return Err(PlanError::InvalidSelection {
                category: key.to_string(),
                option: id.to_string(),
            });
        }

        let mut next = self.config.clone();
        let axis = next
            .axes
            .get_mut(key)
            .ok_or_else(|| PlanError::InvalidCategory(key.to_string()))?;
        axis.selected = id.to_string();

        debug!(category = key, option = id, "Option selected");
        self.replace(next);
        Ok(())
    }

    fn replace(&mut self, next: Configuration) {
        self.config = next;
    }
}

/// Clamp into `[min, max]`, then round to the nearest step above `min`
///
/// Ties round up. A value that would land past `max` (when the range is not
/// a whole number of steps) falls back one step. Catalogs that skipped
/// validation are tolerated: swapped bounds are reordered and a zero step
/// behaves as 1.
pub fn snap_spend_cap(range: &SpendCapRange, value: u32) -> u32 {
    let (min, max) = (range.min.min(range.max), range.min.max(range.max));
    let step = range.step.max(1);

    let clamped = clamp_between(value, min, max);
    let offset = clamped - min;
    let steps = offset / step + u32::from(offset % step >= step - step / 2);
    let snapped = min.saturating_add(steps.saturating_mul(step));

    if snapped > max {
        snapped - step
    } else {
        snapped
    }
}

/// `u32::clamp` without the panic on swapped bounds
fn clamp_between(value: u32, a: u32, b: u32) -> u32 {
    value.clamp(a.min(b), a.max(b))
}
