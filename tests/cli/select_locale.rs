use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, GERMAN, run};

#[test]
fn test_register_new_locale() -> Result<()> {
    let test = CliTest::with_file("locales/de.json", GERMAN)?;
    test.write_file(".lingua", "{}")?;

    let mut cmd = test.command();
    cmd.args(["select-locale", "locales/de.json", "--locale", "de"]);
    let (stdout, _, code) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "✓ Registered locales/de.json as 'de' translation file in .lingua\n"
    );

    let config: serde_json::Value = serde_json::from_str(&test.read_file(".lingua")?)?;
    assert_eq!(
        config["translationFiles"],
        serde_json::json!([{ "lang": "de", "path": "locales/de.json" }])
    );
    Ok(())
}

#[test]
fn test_replace_existing_locale() -> Result<()> {
    let test = CliTest::with_german()?;
    test.write_file("locales/de.json", r#"{ "greeting": { "hello": "Servus" } }"#)?;

    let mut cmd = test.command();
    cmd.args(["select-locale", "locales/de.json", "--locale", "de"]);
    let (stdout, _, code) = run(cmd)?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Updated locales/de.json"));

    test.write_file("src/app.ts", "t('greeting.hello');\n")?;
    let (stdout, _, _) = run(test.annotate_command())?;
    assert!(stdout.contains("= hover: Servus\n"));
    Ok(())
}

#[test]
fn test_creates_config_when_missing() -> Result<()> {
    let test = CliTest::with_file("de.json", GERMAN)?;

    let mut cmd = test.command();
    cmd.args(["select-locale", "de.json", "--locale", "de"]);
    let (_, _, code) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(test.read_file(".lingua")?.contains("\"de.json\""));
    Ok(())
}

#[test]
fn test_missing_translation_file() -> Result<()> {
    let test = CliTest::with_file(".lingua", "{}")?;

    let mut cmd = test.command();
    cmd.args(["select-locale", "nope.json", "--locale", "de"]);
    let (_, stderr, code) = run(cmd)?;

    assert_eq!(code, 2);
    assert!(stderr.contains("does not exist"));
    assert_eq!(test.read_file(".lingua")?, "{}");
    Ok(())
}

#[test]
fn test_invalid_translation_file() -> Result<()> {
    let test = CliTest::with_file("broken.json", "{ not json")?;

    let mut cmd = test.command();
    cmd.args(["select-locale", "broken.json", "--locale", "de"]);
    let (_, _, code) = run(cmd)?;

    assert_eq!(code, 2);
    assert!(!test.root().join(".lingua").exists());
    Ok(())
}

#[test]
fn test_keeps_unknown_config_keys() -> Result<()> {
    let test = CliTest::with_file("de.json", GERMAN)?;
    test.write_file(".lingua", r#"{ "scanFiles": ["ts"], "translationFiles": [] }"#)?;

    let mut cmd = test.command();
    cmd.args(["select-locale", "de.json", "--locale", "de"]);
    let (_, _, code) = run(cmd)?;
    assert_eq!(code, 0);

    let config: serde_json::Value = serde_json::from_str(&test.read_file(".lingua")?)?;
    assert_eq!(config["scanFiles"], serde_json::json!(["ts"]));
    assert_eq!(config["translationFiles"][0]["path"], "de.json");
    Ok(())
}
