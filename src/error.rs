use thiserror::Error;

/// Errors raised while validating or fulfilling a code generation request.
///
/// All of these are detected before the generation loop starts, so a request
/// that fails never consumes randomness.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// A parameter was outside its domain (e.g. negative).
    #[error("invalid argument: {name} must be non-negative, got {value}")]
    InvalidArgument { name: &'static str, value: i64 },

    /// Codes cannot be longer than the alphabet, since letters never repeat
    /// within a code.
    #[error("invalid code length {length}: must be at most {max}")]
    InvalidLength { length: usize, max: usize },

    /// More codes were requested than distinct codes exist for the length.
    #[error(
        "cannot generate {requested} unique codes of length {code_length}: \
         only {capacity} distinct codes exist"
    )]
    Unsatisfiable {
        requested: usize,
        capacity: u128,
        code_length: usize,
    },
}
