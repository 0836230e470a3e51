use anyhow::Result;
use insta::assert_snapshot;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

const EN_SOURCE: &str = r#"
class AppLocalizationsEn {
  static const String title = 'Pricofy';
  static const String greeting = 'Hello, {name}!';
  static const String searchResults =
      '{count} results '
      'for {query}';
  static const String quote = "It's live";
}
"#;

const ES_SOURCE: &str = r"
class AppLocalizationsEs {
  static const String title = 'Pricofy';
  static const String greeting = '¡Hola, {name}!';
  static const String welcome = 'Bienvenido a la app de Málaga';
  static const String apostrophe = 'l\'oferta';
}
";

#[test]
fn test_convert_template_bundle() -> Result<()> {
    let test = CliTest::new()?;
    test.write_dart("en", EN_SOURCE)?;

    let output = test.command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_snapshot!(test.read_arb("en")?.trim_end(), @r#"
    {
      "@@locale": "en",
      "title": "Pricofy",
      "greeting": "Hello, {name}!",
      "@greeting": {
        "placeholders": {
          "name": {
            "type": "String"
          }
        }
      },
      "searchResults": "{count} results for {query}",
      "@searchResults": {
        "placeholders": {
          "count": {
            "type": "String"
          },
          "query": {
            "type": "String"
          }
        }
      },
      "quote": "It's live"
    }
    "#);

    Ok(())
}

#[test]
fn test_convert_non_template_bundle() -> Result<()> {
    let test = CliTest::new()?;
    test.write_dart("es", ES_SOURCE)?;

    let output = test.command().output()?;
    assert!(output.status.success());

    let content = test.read_arb("es")?;
    assert!(content.contains("\"welcome\": \"Bienvenido a la app de Málaga\""));
    assert!(content.contains("¡Hola"));

    let parsed: Value = serde_json::from_str(&content)?;
    assert_eq!(
        parsed,
        json!({
            "@@locale": "es",
            "title": "Pricofy",
            "greeting": "¡Hola, {name}!",
            "welcome": "Bienvenido a la app de Málaga",
            "apostrophe": "l'oferta"
        })
    );

    Ok(())
}

#[test]
fn test_progress_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_dart("es", ES_SOURCE)?;
    test.write_dart("en", EN_SOURCE)?;

    let output = test.command().output()?;
    let out = stdout(&output);
    let root = test.root().display().to_string();

    assert!(out.contains("Processing es...\n  Found 4 strings\n"));
    assert!(out.contains(&format!("  Written to {}/lib/l10n/app_es.arb\n", root)));
    assert!(out.contains("Processing en...\n  Found 4 strings\n"));
    assert!(out.find("Processing es").unwrap() < out.find("Processing en").unwrap());
    assert!(out.contains("Done! Converted 2 locales"));
    assert!(out.contains("(4 skipped)"));
    assert!(out.ends_with("Now run: flutter gen-l10n\n"));

    Ok(())
}

#[test]
fn test_missing_locales_are_skipped() -> Result<()> {
    let test = CliTest::new()?;
    test.write_dart("it", "static const String ciao = 'Ciao';")?;

    let output = test.command().output()?;
    assert!(output.status.success());

    let err = stderr(&output);
    for suffix in ["es", "en", "fr", "pt", "de"] {
        assert!(err.contains(&format!(
            "warning: {}/lib/core/localization/app_localizations_{}.dart not found, skipping",
            test.root().display(),
            suffix
        )));
        assert!(!test.arb_exists(suffix));
    }
    assert!(test.arb_exists("it"));

    Ok(())
}

#[test]
fn test_no_inputs_still_succeeds() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());
    assert!(stderr(&output).contains("No localization files found for 6 configured locales"));
    assert!(!test.root().join("lib/l10n").exists());

    Ok(())
}

#[test]
fn test_empty_input_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_dart("fr", "")?;

    let output = test.command().output()?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Found 0 strings"));
    assert_eq!(test.read_arb("fr")?, "{\n  \"@@locale\": \"fr\"\n}\n");

    Ok(())
}

#[test]
fn test_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_dart("en", EN_SOURCE)?;

    let output = test.command().arg("--dry-run").output()?;
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Would write"));
    assert!(out.contains("(created)"));
    assert!(!test.root().join("lib/l10n").exists());

    Ok(())
}

#[test]
fn test_verbose_lists_placeholder_keys() -> Result<()> {
    let test = CliTest::new()?;
    test.write_dart("en", EN_SOURCE)?;

    let output = test.command().arg("-v").output()?;
    assert!(stdout(&output).contains("placeholders: greeting, searchResults"));

    Ok(())
}

#[test]
fn test_config_file_and_flags() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".arbgenrc.json",
        r#"{
  "locales": ["en", {"suffix": "br", "locale": "pt_BR"}],
  "inputDir": "i18n",
  "outputDir": "assets/arb"
}"#,
    )?;
    test.write_file("i18n/app_localizations_br.dart", "static const String hi = 'Oi {nome}';")?;

    let output = test
        .command()
        .args(["--template-locale", "pt_BR"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let parsed: Value = serde_json::from_str(&test.read_file("assets/arb/app_pt_BR.arb")?)?;
    assert_eq!(parsed["@@locale"], "pt_BR");
    assert_eq!(parsed["@hi"]["placeholders"]["nome"]["type"], "String");

    Ok(())
}

#[test]
fn test_locales_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_dart("de", "static const String hallo = 'Hallo {name}';")?;
    test.write_dart("fr", "static const String salut = 'Salut';")?;

    let output = test.command().args(["--locales", "de"]).output()?;
    assert!(output.status.success());
    assert!(test.arb_exists("de"));
    assert!(!test.arb_exists("fr"));
    assert!(!test.read_arb("de")?.contains("@hallo"));
    assert!(stderr(&output).is_empty());

    Ok(())
}

#[test]
fn test_write_failure_exits_with_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_dart("en", EN_SOURCE)?;
    test.write_file("lib/l10n", "not a directory")?;

    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to create directory"));
    assert!(stdout(&output).contains("Processing en...\n  Found 4 strings\n"));

    Ok(())
}

#[test]
fn test_escaped_double_quotes_are_json_escaped() -> Result<()> {
    let test = CliTest::new()?;
    test.write_dart("en", r#"static const String q = "Say \"hi\" now";"#)?;

    let output = test.command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let content = test.read_arb("en")?;
    assert!(content.contains(r#""q": "Say \\\"hi\\\" now""#));
    let parsed: Value = serde_json::from_str(&content)?;
    assert_eq!(parsed["q"], r#"Say \"hi\" now"#);

    Ok(())
}

#[test]
fn test_invalid_config_exits_with_error() -> Result<()> {
    let test = CliTest::with_file(".arbgenrc.json", r#"{ "outputFileName": "app.arb" }"#)?;

    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("'outputFileName' must contain {locale}"));

    Ok(())
}
