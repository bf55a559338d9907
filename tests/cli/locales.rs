use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_locales_lists_loaded() -> Result<()> {
    let test = CliTest::with_locales()?;

    let out = run(test.locales_command())?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "en_US   English\nit_IT   Italiano\n");

    Ok(())
}

#[test]
fn test_locales_all_does_not_need_files() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.locales_command();
    cmd.arg("--all");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("en_US   English\n"));
    assert!(out.stdout.contains("fil_PH  Filipino\n"));
    assert_eq!(out.stdout.lines().count(), plate::languages::LANGUAGES.len());

    Ok(())
}

#[test]
fn test_locales_reports_load_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en_US.json", "{ not json")?;

    let out = run(test.locales_command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains(r#"Error in file "en_US.json""#));

    Ok(())
}
