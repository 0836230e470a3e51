use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .arbgenrc.json"));

    let content = test.read_file(".arbgenrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["templateLocale"], "en");
    assert_eq!(parsed["outputDir"], "lib/l10n");
    assert_eq!(parsed["locales"].as_array().map(Vec::len), Some(6));
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".arbgenrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(test.read_file(".arbgenrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_dart("en", "static const String ok = 'OK';")?;

    let output = test.command().output()?;
    assert!(
        output.status.success(),
        "Convert should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.arb_exists("en"));

    Ok(())
}
