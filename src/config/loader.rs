use super::{Config, LOG_FORMATS};
use crate::core::CodeSpec;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    // An empty file is a valid config with every default
    let config: Config = if contents.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?
    };

    validate_config(&config)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    Ok(config)
}

pub fn validate_config(config: &Config) -> Result<CodeSpec> {
    if !LOG_FORMATS.contains(&config.logging.format.as_str()) {
        anyhow::bail!(
            "Invalid log format: {} (expected one of {})",
            config.logging.format,
            LOG_FORMATS.join(", ")
        );
    }

    let spec = CodeSpec::new(config.generator.num_codes, config.generator.code_length)?;
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodeError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            "generator:\n  num_codes: 5\n  code_length: 3\nlogging:\n  level: debug\n  format: json\n",
        );
        let config = load_config(file.path()).expect("Failed to load config");
        assert_eq!(config.generator.num_codes, 5);
        assert_eq!(config.generator.code_length, 3);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let file = write_config("generator:\n  code_length: 4\n");
        let config = load_config(file.path()).expect("Failed to load config");
        assert_eq!(config.generator.num_codes, 10_000);
        assert_eq!(config.generator.code_length, 4);
        assert_eq!(config.logging.format, "compact");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        let config = load_config(file.path()).expect("Failed to load config");
        assert_eq!(config.generator.num_codes, 10_000);
        assert_eq!(config.generator.code_length, 6);
    }

    #[test]
    fn test_negative_count_fails_validation() {
        let file = write_config("generator:\n  num_codes: -5\n");
        let err = load_config(file.path()).unwrap_err();
        assert_eq!(
            err.root_cause().downcast_ref::<CodeError>(),
            Some(&CodeError::InvalidArgument {
                name: "num_codes",
                value: -5
            })
        );
    }

    #[test]
    fn test_unknown_log_format_fails_validation() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let err = load_config(dir.path().join("absent.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
