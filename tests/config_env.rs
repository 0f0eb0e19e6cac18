/// Environment layering for the config loader
///
/// Kept in its own test binary: environment variables are process-global and
/// would leak into the file-based tests running in parallel.
use flexi_plan::config::load_config;
use std::{env, fs};
use tempfile::TempDir;

#[test]
fn test_environment_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("flexi.toml");
    fs::write(
        &path,
        r#"
[logging]
level = "info"

[display]
currency_symbol = "Rs "
"#,
    )
    .unwrap();

    env::set_var("FLEXI_PLAN__LOGGING__LEVEL", "debug");
    let result = load_config(&path);
    env::remove_var("FLEXI_PLAN__LOGGING__LEVEL");

    let cfg = result.unwrap();
    assert_eq!(cfg.logging.level, "debug");
    // Keys not set in the environment still come from the file
    assert_eq!(cfg.display.currency_symbol, "Rs ");
}
