use std::error::Error;
use std::fs;
use std::time::Duration;

use clap::Parser;
use tempfile::tempdir;

use watchrun::cli::CliArgs;
use watchrun::config::{ConfigFile, Settings, load_from_path, load_or_default, validate_settings};

type TestResult = Result<(), Box<dyn Error>>;

fn args(argv: &[&str]) -> CliArgs {
    CliArgs::parse_from(argv)
}

#[test]
fn defaults_apply_without_config_file() -> TestResult {
    let settings = Settings::resolve(&args(&["watchrun"]), &ConfigFile::default())?;

    assert_eq!(settings.command_line, "cargo test");
    assert_eq!(settings.argv, vec!["cargo", "test"]);
    assert_eq!(settings.extension, ".rs");
    assert_eq!(settings.interval, Duration::from_millis(250));
    assert!(settings.dir.is_dir());

    validate_settings(&settings)?;
    Ok(())
}

#[test]
fn config_file_values_apply_when_flags_are_absent() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Watchrun.toml");
    fs::write(
        &path,
        r#"
[command]
run = "make build"

[watch]
extension = ".c"
interval_ms = 500
"#,
    )?;

    let file = load_from_path(&path)?;
    let settings = Settings::resolve(&args(&["watchrun"]), &file)?;

    assert_eq!(settings.argv, vec!["make", "build"]);
    assert_eq!(settings.extension, ".c");
    assert_eq!(settings.interval, Duration::from_millis(500));
    Ok(())
}

#[test]
fn cli_flags_override_config_values() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Watchrun.toml");
    fs::write(
        &path,
        r#"
[command]
run = "make build"

[watch]
extension = ".c"
interval_ms = 500
"#,
    )?;

    let file = load_from_path(&path)?;
    let dir_flag = dir.path().to_string_lossy().into_owned();
    let settings = Settings::resolve(
        &args(&[
            "watchrun",
            "--command",
            "echo hi",
            "--ext",
            "go",
            "--interval-ms",
            "100",
            "--dir",
            &dir_flag,
        ]),
        &file,
    )?;

    assert_eq!(settings.argv, vec!["echo", "hi"]);
    assert_eq!(settings.extension, ".go");
    assert_eq!(settings.interval, Duration::from_millis(100));
    assert_eq!(settings.dir, dir.path().canonicalize()?);
    Ok(())
}

#[test]
fn quoted_arguments_survive_tokenization() -> TestResult {
    let settings = Settings::resolve(
        &args(&["watchrun", "--command", r#"printf "a b" c"#]),
        &ConfigFile::default(),
    )?;

    assert_eq!(settings.argv, vec!["printf", "a b", "c"]);
    Ok(())
}

#[test]
fn unclosed_quote_is_rejected() {
    let result = Settings::resolve(
        &args(&["watchrun", "--command", "echo 'oops"]),
        &ConfigFile::default(),
    );
    assert!(result.is_err());
}

#[test]
fn empty_command_is_rejected() -> TestResult {
    let settings = Settings::resolve(
        &args(&["watchrun", "--command", ""]),
        &ConfigFile::default(),
    )?;

    assert!(settings.argv.is_empty());
    assert!(validate_settings(&settings).is_err());
    Ok(())
}

#[test]
fn suffix_gains_a_leading_dot() -> TestResult {
    let settings = Settings::resolve(
        &args(&["watchrun", "--ext", "py"]),
        &ConfigFile::default(),
    )?;

    assert_eq!(settings.extension, ".py");
    Ok(())
}

#[test]
fn empty_suffix_is_rejected() -> TestResult {
    let settings = Settings::resolve(
        &args(&["watchrun", "--ext", ""]),
        &ConfigFile::default(),
    )?;

    assert!(validate_settings(&settings).is_err());
    Ok(())
}

#[test]
fn zero_interval_is_rejected() -> TestResult {
    let settings = Settings::resolve(
        &args(&["watchrun", "--interval-ms", "0"]),
        &ConfigFile::default(),
    )?;

    assert!(validate_settings(&settings).is_err());
    Ok(())
}

#[test]
fn missing_watch_dir_is_rejected() {
    let result = Settings::resolve(
        &args(&["watchrun", "--dir", "/definitely/not/a/real/path"]),
        &ConfigFile::default(),
    );
    assert!(result.is_err());
}

#[test]
fn file_as_watch_dir_is_rejected() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("not-a-dir.rs");
    fs::write(&path, "")?;

    let settings = Settings::resolve(
        &args(&["watchrun", "--dir", &path.to_string_lossy()]),
        &ConfigFile::default(),
    )?;

    assert!(validate_settings(&settings).is_err());
    Ok(())
}

#[test]
fn malformed_toml_is_rejected() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("Watchrun.toml");
    fs::write(&path, "[command\nrun = ")?;

    assert!(load_from_path(&path).is_err());
    Ok(())
}

#[test]
fn explicitly_named_missing_config_is_rejected() -> TestResult {
    let dir = tempdir()?;
    let missing = dir.path().join("nope.toml");

    assert!(load_or_default(Some(&missing)).is_err());
    Ok(())
}
