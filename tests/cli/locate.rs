use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_locate_value() -> Result<()> {
    let test = CliTest::with_german()?;

    let mut cmd = test.command();
    cmd.args(["locate", "greeting.bye"]);
    let (stdout, _, code) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "i18n/de.json:4\n  = value: Tschüss\n");
    Ok(())
}

#[test]
fn test_locate_quoted_key() -> Result<()> {
    let test = CliTest::with_german()?;

    let mut cmd = test.command();
    cmd.args(["locate", "'.nav..home'"]);
    let (stdout, _, code) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "i18n/de.json:7\n  = value: Startseite\n");
    Ok(())
}

#[test]
fn test_locate_group_key() -> Result<()> {
    let test = CliTest::with_german()?;

    let mut cmd = test.command();
    cmd.args(["locate", "nav"]);
    let (stdout, _, code) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "i18n/de.json:6\n");
    Ok(())
}

#[test]
fn test_locate_missing_key() -> Result<()> {
    let test = CliTest::with_german()?;

    let mut cmd = test.command();
    cmd.args(["locate", "greeting.morning"]);
    let (stdout, stderr, code) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Key \"greeting.morning\" not found in i18n/de.json"));
    Ok(())
}

#[test]
fn test_locate_without_translation_files() -> Result<()> {
    let test = CliTest::with_file(".lingua", "{}")?;

    let mut cmd = test.command();
    cmd.args(["locate", "greeting.bye"]);
    let (_, stderr, code) = run(cmd)?;

    assert_eq!(code, 2);
    assert!(stderr.contains("select-locale"));
    Ok(())
}
