use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_translate_with_args() -> Result<()> {
    let test = CliTest::with_locales()?;

    let mut cmd = test.translate_command("hello");
    cmd.args(["--arg", "name=Ann"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "Hello, Ann!\n");

    Ok(())
}

#[test]
fn test_translate_plural_in_locale() -> Result<()> {
    let test = CliTest::with_locales()?;

    for (count, expected) in [("0", "nessuna mela\n"), ("1", "una mela\n"), ("7", "7 mele\n")] {
        let mut cmd = test.translate_command("apples");
        cmd.args(["--in", "it_IT", "--count", count]);
        let out = run(cmd)?;
        assert_eq!(out.stdout, expected);
    }

    Ok(())
}

#[test]
fn test_translate_falls_back_and_keeps_emoji() -> Result<()> {
    let test = CliTest::with_locales()?;

    let mut cmd = test.translate_command("party");
    cmd.args(["--locale", "it_IT"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "Let's party 🎉\n");

    Ok(())
}

#[test]
fn test_translate_missing_interpolation_value() -> Result<()> {
    let test = CliTest::with_locales()?;

    let out = run(test.translate_command("hello"))?;

    assert_eq!(out.code, Some(1));
    assert_eq!(
        out.stderr,
        "error: Missing interpolation value for key \"name\"\n"
    );

    Ok(())
}

#[test]
fn test_translate_missing_key() -> Result<()> {
    let test = CliTest::with_locales()?;

    let out = run(test.translate_command("goodbye"))?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains(r#"Phrase key "goodbye" does not exist"#));

    Ok(())
}

#[test]
fn test_translate_invalid_locale() -> Result<()> {
    let test = CliTest::with_locales()?;

    let mut cmd = test.translate_command("hello");
    cmd.args(["--in", "fr_FR", "--arg", "name=Ann"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains(
        r#"Invalid locale code "fr_FR". Possible values are: "en_US" (English), "it_IT" (Italiano)"#
    ));

    Ok(())
}

#[test]
fn test_translate_bad_arg_syntax() -> Result<()> {
    let test = CliTest::with_locales()?;

    let mut cmd = test.translate_command("hello");
    cmd.args(["--arg", "name"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("expected NAME=VALUE"));

    Ok(())
}
