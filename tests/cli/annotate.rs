use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_exact_match() -> Result<()> {
    let test = CliTest::with_german()?;
    test.write_file("src/app.ts", "const a = t('greeting.hello');\n")?;

    let (stdout, stderr, code) = run(test.annotate_command())?;

    assert_eq!(code, 0, "stderr: {}", stderr);
    assert_eq!(
        stdout,
        "translation: \"greeting.hello\"\n  \
         --> src/app.ts:1:14\n  \
         |\n\
         1 | const a = t('greeting.hello');\n  \
         |              ^^^^^^^^^^^^^^ • Hallo\n  \
         = hover: Hallo\n\
         \n\
         ✓ Scanned 1 file: 1 translation, 0 potential identifiers\n"
    );
    Ok(())
}

#[test]
fn test_partial_match() -> Result<()> {
    let test = CliTest::with_german()?;
    test.write_file("src/app.ts", "t(\"greeting\");\n")?;

    let (stdout, _, code) = run(test.annotate_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("partial: \"greeting\""));
    assert!(stdout.contains("= hover: Translations available: greeting ..."));
    assert!(!stdout.contains(" • "));
    Ok(())
}

#[test]
fn test_potential_identifiers_flag() -> Result<()> {
    let test = CliTest::with_german()?;
    test.write_file("src/app.ts", "load(`foo.bar`);\n")?;

    let (stdout, _, _) = run(test.annotate_command())?;
    assert!(!stdout.contains("potential: \"foo.bar\""));
    assert!(stdout.contains("0 translations, 0 potential identifiers"));

    let mut cmd = test.annotate_command();
    cmd.arg("--show-potential");
    let (stdout, _, code) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("potential: \"foo.bar\""));
    assert!(stdout.contains("~~~~~~~"));
    assert!(stdout.contains("0 translations, 1 potential identifier\n"));
    Ok(())
}

#[test]
fn test_decoration_config() -> Result<()> {
    let test = CliTest::with_german()?;
    test.write_file(
        ".lingua",
        r#"{
            "translationFiles": [{ "lang": "de", "path": "i18n/de.json" }],
            "decoration": {
                "showInlineTranslation": false,
                "maxTranslationLength": 5,
                "showPotentialIdentifieres": true
            }
        }"#,
    )?;
    test.write_file("src/nav.ts", "go('nav.home'); go('nav.away');\n")?;

    let (stdout, _, code) = run(test.annotate_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("= hover: Star...\n"));
    assert!(!stdout.contains(" • "));
    assert!(stdout.contains("potential: \"nav.away\""));
    Ok(())
}

#[test]
fn test_command_line_overrides() -> Result<()> {
    let test = CliTest::with_german()?;
    test.write_file("src/nav.ts", "go('nav.home');\n")?;

    let mut cmd = test.annotate_command();
    cmd.args(["--no-inline", "--max-length", "4"]);
    let (stdout, _, code) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("= hover: Sta...\n"));
    assert!(!stdout.contains(" • "));
    Ok(())
}

#[test]
fn test_invalid_max_length() -> Result<()> {
    let test = CliTest::with_german()?;
    test.write_file("src/nav.ts", "go('nav.home');\n")?;

    let mut cmd = test.annotate_command();
    cmd.args(["--max-length", "1"]);
    let (_, stderr, code) = run(cmd)?;

    assert_eq!(code, 2);
    assert!(stderr.contains("maxTranslationLength"));
    Ok(())
}

#[test]
fn test_invalid_config_file() -> Result<()> {
    let test = CliTest::with_file(".lingua", r#"{ "decoration": { "maxTranslationLength": 0 } }"#)?;

    let (_, stderr, code) = run(test.annotate_command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("maxTranslationLength"));
    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let test = CliTest::with_german()?;
    test.write_file(
        "src/app.ts",
        "t('greeting.hello');\nt('greeting');\nt('greeting.hello');\n",
    )?;

    let mut cmd = test.annotate_command();
    cmd.args(["src/app.ts", "--format", "json"]);
    let (stdout, _, code) = run(cmd)?;

    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout)?;
    let file = &json[0];
    assert_eq!(file["file"], "src/app.ts");

    let translations = file["translationAnnotations"].as_array().unwrap();
    assert_eq!(translations.len(), 3);
    assert_eq!(translations[0]["kind"], "translation");
    assert_eq!(translations[0]["span"]["start"], 3);
    assert_eq!(translations[0]["span"]["end"], 17);
    assert_eq!(translations[0]["hoverText"], "Hallo");
    assert_eq!(translations[0]["inlineText"], " • Hallo");
    assert_eq!(translations[1]["kind"], "partial");
    assert_eq!(translations[1]["range"]["start"]["line"], 1);
    assert_eq!(translations[2]["range"]["start"]["line"], 2);
    assert_eq!(translations[2]["range"]["start"]["column"], 3);
    assert_eq!(file["potentialAnnotations"], serde_json::json!([]));
    Ok(())
}

#[test]
fn test_language_selection() -> Result<()> {
    let test = CliTest::with_german()?;
    test.write_file("i18n/en.json", r#"{ "greeting": { "hello": "Hello" } }"#)?;
    test.write_file(
        ".lingua",
        r#"{
            "translationFiles": [
                { "lang": "de", "path": "i18n/de.json" },
                { "lang": "en", "path": "i18n/en.json" }
            ],
            "defaultLanguage": "en"
        }"#,
    )?;
    test.write_file("src/app.ts", "t('greeting.hello');\n")?;

    let (stdout, _, _) = run(test.annotate_command())?;
    assert!(stdout.contains("= hover: Hello\n"));

    let mut cmd = test.annotate_command();
    cmd.args(["--lang", "de"]);
    let (stdout, _, _) = run(cmd)?;
    assert!(stdout.contains("= hover: Hallo\n"));

    let mut cmd = test.annotate_command();
    cmd.args(["--lang", "fr"]);
    let (_, stderr, code) = run(cmd)?;
    assert_eq!(code, 2);
    assert!(stderr.contains("'fr'"));
    Ok(())
}

#[test]
fn test_without_translation_files() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "t('greeting.hello');\n")?;
    test.write_file(".lingua", "{}")?;

    let (stdout, stderr, code) = run(test.annotate_command())?;

    assert_eq!(code, 0);
    assert!(stderr.contains("No translation file is configured"));
    assert_eq!(
        stdout,
        "✓ Scanned 1 file: 0 translations, 0 potential identifiers\n"
    );
    Ok(())
}

#[test]
fn test_missing_translation_file() -> Result<()> {
    let test = CliTest::with_file(
        ".lingua",
        r#"{ "translationFiles": [{ "lang": "de", "path": "missing.json" }] }"#,
    )?;

    let (_, stderr, code) = run(test.annotate_command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("missing.json"));
    Ok(())
}

#[test]
fn test_discovery_respects_extensions_and_ignores() -> Result<()> {
    let test = CliTest::with_german()?;
    test.write_file("src/app.ts", "t('greeting.hello');\n")?;
    test.write_file("src/page.html", "<p>{{ 'greeting.bye' | translate }}</p>\n")?;
    test.write_file("src/style.css", ".a { content: 'greeting.hello'; }\n")?;
    test.write_file("node_modules/lib/index.ts", "t('greeting.hello');\n")?;

    let (stdout, _, code) = run(test.annotate_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("--> src/app.ts:1:4"));
    assert!(stdout.contains("--> src/page.html:1:8"));
    assert!(!stdout.contains("style.css"));
    assert!(!stdout.contains("node_modules"));
    assert!(stdout.ends_with("✓ Scanned 2 files: 2 translations, 0 potential identifiers\n"));
    Ok(())
}

#[test]
fn test_unreadable_file_argument() -> Result<()> {
    let test = CliTest::with_german()?;

    let mut cmd = test.annotate_command();
    cmd.arg("src/missing.ts");
    let (stdout, stderr, code) = run(cmd)?;

    assert_eq!(code, 2);
    assert!(stderr.contains("warning:"));
    assert!(stderr.contains("src/missing.ts"));
    assert!(stdout.contains("Scanned 0 files"));
    Ok(())
}

#[test]
fn test_root_argument() -> Result<()> {
    let test = CliTest::with_german()?;
    test.write_file("src/app.ts", "t('greeting.bye');\n")?;

    let elsewhere = CliTest::new()?;
    let mut cmd = elsewhere.command();
    cmd.arg("annotate").arg("--root").arg(test.root());
    let (stdout, _, code) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("= hover: Tschüss\n"));
    Ok(())
}

#[test]
fn test_root_from_environment() -> Result<()> {
    let test = CliTest::with_german()?;
    test.write_file("src/app.ts", "t('nav.home');\n")?;

    let elsewhere = CliTest::new()?;
    let mut cmd = elsewhere.annotate_command();
    cmd.env("LINGUA_ROOT", test.root());
    let (stdout, _, code) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("= hover: Startseite\n"));
    Ok(())
}
