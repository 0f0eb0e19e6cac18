//! Price book for the flexi-postpaid builder
//!
//! The catalog is the fixed set of things a user can pick from: the base
//! rental plans, the extra-data rate, the spend-cap slider bounds and every
//! toggleable bundle category (OTT included) with its priced variants.
//! A built-in catalog is always available; a `[catalog]` table in the
//! configuration file replaces it wholesale.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::PlanError;

/// Category key of the OTT streaming pack
pub const OTT: &str = "ott";

/// Base rental plan; exactly one is active at a time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasePlan {
    pub id: String,
    pub name: String,
    pub price: u32,
    #[serde(default)]
    pub benefits: Vec<String>,
}

/// One priced variant of a bundle category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleOption {
    pub id: String,
    pub label: String,
    pub price: u32,
}

/// A toggleable choice axis: on/off plus one selected variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleCategory {
    pub key: String,
    pub label: String,
    pub options: Vec<BundleOption>,
    /// Option pre-selected at session start, even while the category is off
    pub default_option: String,
    #[serde(default)]
    pub enabled_by_default: bool,
}

impl BundleCategory {
    /// Look up an option by id
    pub fn option(&self, id: &str) -> Option<&BundleOption> {
        self.options.iter().find(|o| o.id == id)
    }
}

/// Linear pay-per-GB add-on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraDataPricing {
    pub rate_per_gb: u32,
    pub min_gb: u32,
    pub max_gb: u32,
    pub default_gb: u32,
}

/// Bounds of the spend-cap slider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendCapRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

/// Fields missing from a configured catalog fall back to the built-in ones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub base_plans: Vec<BasePlan>,
    pub default_base: String,
    pub extra_data: ExtraDataPricing,
    pub spend_cap: SpendCapRange,
    /// Bundle categories in display order
    pub categories: Vec<BundleCategory>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The stock flexi-postpaid price book
    pub fn builtin() -> Self {
        Self {
            base_plans: vec![
                plan(
                    "basic",
                    "Basic",
                    199,
                    &["Unlimited Calls", "100 SMS/day", "30 GB 5G data"],
                ),
                plan(
                    "smart",
                    "Smart",
                    299,
                    &[
                        "Unlimited Calls",
                        "200 SMS/day",
                        "60 GB 5G data",
                        "Weekend Data Rollover",
                    ],
                ),
                plan(
                    "max",
                    "Max",
                    399,
                    &[
                        "Unlimited Calls",
                        "300 SMS/day",
                        "90 GB 5G data",
                        "Weekend Data Rollover",
                        "Roaming (Domestic)",
                        "5G Priority Network",
                    ],
                ),
            ],
            default_base: "smart".to_string(),
            extra_data: ExtraDataPricing {
                rate_per_gb: 2,
                min_gb: 0,
                max_gb: 100,
                default_gb: 50,
            },
            spend_cap: SpendCapRange {
                min: 500,
                max: 3000,
                step: 50,
                default: 1000,
            },
            categories: vec![
                category(
                    OTT,
                    "OTT Pack",
                    &[
                        ("netflix", "Netflix", 199),
                        ("prime", "Amazon Prime", 149),
                        ("hotstar", "Disney+ Hotstar", 199),
                        ("sonyliv", "Sony LIV", 129),
                    ],
                    "netflix",
                    true,
                ),
                category(
                    "gaming",
                    "Gaming Pack",
                    &[
                        ("xbox", "Xbox Live (Core)", 99),
                        ("psplus_ess", "PlayStation Plus Essential", 149),
                        ("psplus_extra", "PlayStation Plus Extra", 199),
                    ],
                    "xbox",
                    true,
                ),
                category(
                    "travel",
                    "Travel Data",
                    &[
                        ("domestic5", "Domestic 5GB", 199),
                        ("intl1", "International 1GB", 399),
                        ("intl3", "International 3GB", 699),
                    ],
                    "domestic5",
                    false,
                ),
                category(
                    "ai",
                    "AI Tools",
                    &[
                        ("chatgpt_go", "ChatGPT Go", 99),
                        ("perplexity_pro", "Perplexity Pro", 299),
                        ("chatgpt_plus", "ChatGPT Plus", 499),
                    ],
                    "chatgpt_go",
                    false,
                ),
                category(
                    "linkedin",
                    "LinkedIn Premium",
                    &[
                        ("career", "LinkedIn Premium Career", 199),
                        ("business", "LinkedIn Premium Business", 349),
                    ],
                    "career",
                    false,
                ),
                category(
                    "cloud",
                    "Cloud Storage",
                    &[
                        ("100", "Cloud Storage 100 GB", 99),
                        ("1tb", "Cloud Storage 1 TB", 149),
                        ("2tb", "Cloud Storage 2 TB", 249),
                    ],
                    "1tb",
                    true,
                ),
                category(
                    "fitness",
                    "Fitness & Health",
                    &[
                        ("basic", "Fitness & Health Basic", 99),
                        ("plus", "Fitness & Health Plus", 149),
                    ],
                    "basic",
                    true,
                ),
                category(
                    "edu",
                    "Education Pack",
                    &[
                        ("k12", "Education Pack K-12", 149),
                        ("college", "Education Pack College", 249),
                        ("pro", "Education Pack Pro", 299),
                    ],
                    "college",
                    false,
                ),
            ],
        }
    }

    pub fn base_plan(&self, id: &str) -> Option<&BasePlan> {
        self.base_plans.iter().find(|p| p.id == id)
    }

    pub fn category(&self, key: &str) -> Option<&BundleCategory> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Same as [`Catalog::category`] but fails with `InvalidCategory`
    pub fn require_category(&self, key: &str) -> Result<&BundleCategory, PlanError> {
        self.category(key)
            .ok_or_else(|| PlanError::InvalidCategory(key.to_string()))
    }

    /// Check the structural invariants every selection relies on
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.base_plans.is_empty() {
            return Err(PlanError::Catalog(
                "At least one base plan must be configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for plan in &self.base_plans {
            if plan.id.is_empty() {
                return Err(PlanError::Catalog("Base plan id cannot be empty".to_string()));
            }
            if !seen.insert(plan.id.as_str()) {
                return Err(PlanError::Catalog(format!(
                    "Duplicate base plan id '{}'",
                    plan.id
                )));
            }
        }

        if self.base_plan(&self.default_base).is_none() {
            return Err(PlanError::Catalog(format!(
                "Default base plan '{}' is not in the catalog",
                self.default_base
            )));
        }

        let data = &self.extra_data;
        if data.min_gb > data.max_gb {
            return Err(PlanError::Catalog(format!(
                "Extra data range is empty: {}..={} GB",
                data.min_gb, data.max_gb
            )));
        }
        if !(data.min_gb..=data.max_gb).contains(&data.default_gb) {
            return Err(PlanError::Catalog(format!(
                "Default extra data {} GB is outside {}..={} GB",
                data.default_gb, data.min_gb, data.max_gb
            )));
        }

        let cap = &self.spend_cap;
        if cap.step == 0 {
            return Err(PlanError::Catalog("Spend cap step must be positive".to_string()));
        }
        if cap.min > cap.max {
            return Err(PlanError::Catalog(format!(
                "Spend cap range is empty: {}..={}",
                cap.min, cap.max
            )));
        }
        if !(cap.min..=cap.max).contains(&cap.default) {
            return Err(PlanError::Catalog(format!(
                "Default spend cap {} is outside {}..={}",
                cap.default, cap.min, cap.max
            )));
        }

        let mut keys = HashSet::new();
        for category in &self.categories {
            if !keys.insert(category.key.as_str()) {
                return Err(PlanError::Catalog(format!(
                    "Duplicate category key '{}'",
                    category.key
                )));
            }
            if category.options.is_empty() {
                return Err(PlanError::Catalog(format!(
                    "Category '{}' has no options",
                    category.key
                )));
            }

            let mut ids = HashSet::new();
            for option in &category.options {
                if !ids.insert(option.id.as_str()) {
                    return Err(PlanError::Catalog(format!(
                        "Duplicate option '{}' in category '{}'",
                        option.id, category.key
                    )));
                }
            }

            if category.option(&category.default_option).is_none() {
                return Err(PlanError::Catalog(format!(
                    "Default option '{}' of category '{}' is not in its options",
                    category.default_option, category.key
                )));
            }
        }

        Ok(())
    }
}

fn plan(id: &str, name: &str, price: u32, benefits: &[&str]) -> BasePlan {
    BasePlan {
        id: id.to_string(),
        name: name.to_string(),
        price,
        benefits: benefits.iter().map(|b| b.to_string()).collect(),
    }
}

fn category(
    key: &str,
    label: &str,
    options: &[(&str, &str, u32)],
    default_option: &str,
    enabled_by_default: bool,
) -> BundleCategory {
    BundleCategory {
        key: key.to_string(),
        label: label.to_string(),
        options: options
            .iter()
            .map(|(id, label, price)| BundleOption {
                id: id.to_string(),
                label: label.to_string(),
                price: *price,
            })
            .collect(),
        default_option: default_option.to_string(),
        enabled_by_default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.base_plans.len(), 3);
        assert_eq!(catalog.categories.len(), 8);
    }

    #[test]
    fn test_builtin_ott_has_four_options() {
        let catalog = Catalog::builtin();
        let ott = catalog.category(OTT).unwrap();
        assert_eq!(ott.options.len(), 4);
        assert_eq!(ott.option("sonyliv").unwrap().price, 129);
    }

    #[test]
    fn test_base_plans_have_distinct_ids() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.base_plan("smart").unwrap().price, 299);
        assert_eq!(catalog.base_plan("max").unwrap().benefits.len(), 6);
        assert!(catalog.base_plan("299").is_none());
    }

    #[test]
    fn test_require_category_unknown_key() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.require_category("music").unwrap_err(),
            PlanError::InvalidCategory("music".to_string())
        );
    }

    #[test]
    fn test_validate_rejects_missing_default_option() {
        let mut catalog = Catalog::builtin();
        catalog.categories[1].default_option = "steam".to_string();

        let result = catalog.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Default option 'steam' of category 'gaming'"));
    }

    #[test]
    fn test_validate_rejects_duplicate_category() {
        let mut catalog = Catalog::builtin();
        let dup = catalog.categories[2].clone();
        catalog.categories.push(dup);

        assert!(catalog
            .validate()
            .unwrap_err()
            .to_string()
            .contains("Duplicate category key 'travel'"));
    }

    #[test]
    fn test_validate_rejects_zero_step() {
        let mut catalog = Catalog::builtin();
        catalog.spend_cap.step = 0;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_default_base() {
        let mut catalog = Catalog::builtin();
        catalog.default_base = "ultra".to_string();
        assert!(catalog.validate().is_err());
    }
}
