use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::NamedTempFile;

use spyrun::config::{load_and_validate, DEFAULT_POLL_INTERVAL};
use spyrun::errors::SpyrunError;

type TestResult = Result<(), Box<dyn Error>>;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn demo_config_is_parsed_correctly() -> TestResult {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let cfg = load_and_validate(manifest.join("demos/spy.toml"))?;

    assert_eq!(cfg.poll_interval(), Duration::from_millis(500));
    assert_eq!(cfg.groups().len(), 2);

    let build = &cfg.groups()["build"];
    assert_eq!(build.file, "src/*.txt");
    assert_eq!(build.command, "echo changed: $SPYRUN_FILE");

    let docs = &cfg.groups()["docs"];
    assert_eq!(docs.file, "docs/*.md");

    Ok(())
}

#[test]
fn spyconf_section_is_optional() -> TestResult {
    let file = write_config(
        r#"
[spys.a]
file = "*.txt"
command = "true"
"#,
    );

    let cfg = load_and_validate(file.path())?;
    assert_eq!(cfg.poll_interval(), DEFAULT_POLL_INTERVAL);
    Ok(())
}

#[test]
fn missing_config_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_and_validate(dir.path().join("spy.toml"));

    match result {
        Err(SpyrunError::Config(msg)) => assert!(msg.contains("not found")),
        other => panic!("Expected Config error, got: {:?}", other),
    }
}

#[test]
fn malformed_toml_is_a_toml_error() {
    let file = write_config("[spys.a\nfile = ");
    match load_and_validate(file.path()) {
        Err(SpyrunError::Toml(_)) => {}
        other => panic!("Expected Toml error, got: {:?}", other),
    }
}

#[test]
fn invalid_sleep_is_fatal() {
    let file = write_config(
        r#"
[spyconf]
sleep = "fast"
"#,
    );

    match load_and_validate(file.path()) {
        Err(SpyrunError::InvalidDuration { input, .. }) => assert_eq!(input, "fast"),
        other => panic!("Expected InvalidDuration, got: {:?}", other),
    }
}
