/// Loading configuration files through the layered config loader
use flexi_plan::{
    catalog::Catalog,
    config::load_config,
    pricing::compute_total,
    selection::Configuration,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    let cfg = load_config(&path).unwrap();
    assert_eq!(cfg.logging.format, "text");
    assert_eq!(cfg.catalog, Catalog::builtin());
}

#[test]
fn test_file_overrides_logging_and_display() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("flexi.toml");
    fs::write(
        &path,
        r#"
[logging]
level = "debug"
format = "json"

[display]
currency_symbol = "Rs "
"#,
    )
    .unwrap();

    let cfg = load_config(&path).unwrap();
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.format, "json");
    assert_eq!(cfg.display.currency_symbol, "Rs ");
    assert_eq!(cfg.catalog, Catalog::builtin());
}

#[test]
fn test_partial_catalog_override() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("flexi.toml");
    fs::write(
        &path,
        r#"
[catalog]
default_base = "max"
"#,
    )
    .unwrap();

    let cfg = load_config(&path).unwrap();
    let defaults = Configuration::defaults(&cfg.catalog);
    assert_eq!(defaults.base, "max");
    assert_eq!(compute_total(&cfg.catalog, &defaults), 1045);
}

#[test]
fn test_custom_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("flexi.toml");
    fs::write(
        &path,
        r#"
[catalog]
default_base = "lite"

[catalog.extra_data]
rate_per_gb = 3
min_gb = 0
max_gb = 20
default_gb = 10

[[catalog.base_plans]]
id = "lite"
name = "Lite"
price = 149
benefits = ["Unlimited Calls"]

[[catalog.categories]]
key = "music"
label = "Music"
default_option = "spotify"
enabled_by_default = true

[[catalog.categories.options]]
id = "spotify"
label = "Spotify Premium"
price = 119
"#,
    )
    .unwrap();

    let cfg = load_config(&path).unwrap();
    assert_eq!(cfg.catalog.base_plans.len(), 1);
    assert_eq!(cfg.catalog.categories.len(), 1);
    assert_eq!(cfg.catalog.spend_cap.max, 3000);

    let defaults = Configuration::defaults(&cfg.catalog);
    assert_eq!(compute_total(&cfg.catalog, &defaults), 149 + 30 + 119);
}

#[test]
fn test_invalid_catalog_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("flexi.toml");
    fs::write(
        &path,
        r#"
[catalog]
default_base = "ultra"
"#,
    )
    .unwrap();

    let result = load_config(&path);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Default base plan 'ultra' is not in the catalog"));
}

#[test]
fn test_invalid_log_format_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("flexi.toml");
    fs::write(&path, "[logging]\nformat = \"xml\"\n").unwrap();

    assert!(load_config(&path).is_err());
}
