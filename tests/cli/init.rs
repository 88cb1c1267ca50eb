use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (stdout, _, code) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "✓ Created .lingua\n");

    let config: serde_json::Value = serde_json::from_str(&test.read_file(".lingua")?)?;
    assert_eq!(config["analysisExtensions"], serde_json::json!(["ts", "html"]));
    assert_eq!(config["decoration"]["maxTranslationLength"], 80);
    Ok(())
}

#[test]
fn test_init_refuses_existing_config() -> Result<()> {
    let test = CliTest::with_file(".lingua", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (_, stderr, code) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stderr.contains(".lingua already exists"));
    assert_eq!(test.read_file(".lingua")?, "{}");
    Ok(())
}
