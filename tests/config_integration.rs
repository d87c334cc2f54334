use std::fs;
use uniqcodes::config::validate_config;
use uniqcodes::{CodeError, Config};

#[test]
fn test_defaults_validate() {
    let config = Config::default();
    let spec = validate_config(&config).expect("defaults are valid");
    assert_eq!(spec.num_codes(), 10_000);
    assert_eq!(spec.code_length(), 6);
}

#[test]
fn test_load_from_yaml_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        "generator:\n  num_codes: 650\n  code_length: 2\nlogging:\n  format: pretty\n",
    )
    .expect("Failed to write config");

    let config = Config::load(&path).expect("Failed to load config");
    let spec = validate_config(&config).unwrap();
    assert_eq!(spec.num_codes(), 650);
    assert_eq!(spec.capacity(), 650);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_unsatisfiable_file_is_rejected() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.yaml");
    fs::write(&path, "generator:\n  num_codes: 651\n  code_length: 2\n")
        .expect("Failed to write config");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(
        err.root_cause().downcast_ref::<CodeError>(),
        Some(CodeError::Unsatisfiable { .. })
    ));
}

#[test]
fn test_overridden_length_is_revalidated() {
    let mut config = Config::default();
    config.generator.code_length = 27;
    let err = validate_config(&config).unwrap_err();
    assert_eq!(
        err.downcast_ref::<CodeError>(),
        Some(&CodeError::InvalidLength { length: 27, max: 26 })
    );
}

#[test]
fn test_malformed_yaml_is_rejected() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.yaml");
    fs::write(&path, "generator: [not, a, mapping]\n").expect("Failed to write config");

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}
