use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["includes"], serde_json::json!([]));
    assert_eq!(parsed["ignores"], serde_json::json!(["**/.godot/**"]));
    assert_eq!(parsed["sourceRoot"], "./");
    assert_eq!(parsed["ignoreGeneratedFiles"], true);

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .trawlrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".trawlrc.json").exists());
    let content = test.read_file(".trawlrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".trawlrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .trawlrc.json already exists
    ");

    assert_eq!(test.read_file(".trawlrc.json")?, "{}");

    Ok(())
}
