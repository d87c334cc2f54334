use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uniqcodes::Config;

#[derive(Parser)]
#[command(name = "uniqcodes")]
#[command(about = "Generate unique random codes of distinct uppercase letters", long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of unique codes to generate [default: 10000]
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    num_codes: Option<i64>,

    /// Letters per code, at most 26 [default: 6]
    #[arg(short = 'l', long, value_name = "N", allow_negative_numbers = true)]
    code_length: Option<i64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Only an explicit --config is read; without one the defaults apply
    let config_path = cli.config;

    let mut config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(num_codes) = cli.num_codes {
        config.generator.num_codes = num_codes;
    }
    if let Some(code_length) = cli.code_length {
        config.generator.code_length = code_length;
    }

    init_logging(&config.logging.level, &config.logging.format)?;

    match &config_path {
        Some(path) => tracing::debug!("Config loaded from: {}", path.display()),
        None => tracing::debug!("No config file, using defaults"),
    }

    uniqcodes::run(config)
}

fn init_logging(level: &str, format: &str) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // stdout carries the codes, so logs go to stderr
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        "pretty" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            // Default to compact
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .compact()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }

    Ok(())
}
