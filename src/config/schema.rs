use crate::core::{DEFAULT_CODE_LENGTH, DEFAULT_NUM_CODES};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Raw generation parameters. Signed so that negative values survive parsing
/// and are reported by validation instead of by the YAML decoder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_num_codes")]
    pub num_codes: i64,
    #[serde(default = "default_code_length")]
    pub code_length: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_codes: default_num_codes(),
            code_length: default_code_length(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

pub const LOG_FORMATS: [&str; 3] = ["pretty", "compact", "json"];

// Default functions
fn default_num_codes() -> i64 {
    DEFAULT_NUM_CODES as i64
}

fn default_code_length() -> i64 {
    DEFAULT_CODE_LENGTH as i64
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}
