use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Created .platerc.json"));
    assert!(test.root().join(".platerc.json").exists());

    let content = test.read_file(".platerc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["root"], "locales");
    assert_eq!(parsed["locale"], "en_US");
    assert_eq!(parsed["separator"], "|");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".platerc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(1));
    assert_eq!(
        out.stderr,
        "error: .platerc.json already exists\n  \
         = hint: edit the existing file, or delete it to start over\n"
    );
    assert_eq!(test.read_file(".platerc.json")?, "{}");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let out = run(test.command())?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Usage:"));
    assert!(out.stdout.contains("translate"));

    Ok(())
}
