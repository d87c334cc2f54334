pub mod config;
pub mod core;
pub mod error;
pub mod output;

pub use config::Config;
pub use crate::core::{generate_codes, generate_codes_with, CodeSpec};
pub use error::CodeError;

use anyhow::{Context, Result};
use std::io::{self, BufWriter};

/// Validate `config`, generate the requested codes and print them to stdout.
pub fn run(config: Config) -> Result<()> {
    let spec = crate::config::validate_config(&config)?;
    tracing::info!(
        "Generating {} codes of length {} ({} possible)",
        spec.num_codes(),
        spec.code_length(),
        spec.capacity()
    );

    let codes = spec.generate();

    let stdout = io::stdout();
    let written = output::emit_codes(BufWriter::new(stdout.lock()), &codes)
        .context("Failed to write codes to stdout")?;

    tracing::info!("Wrote {} codes", written);
    Ok(())
}
