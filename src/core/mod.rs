mod generator;
mod utils;

pub use generator::{
    generate_codes, generate_codes_with, max_codes, CodeSpec, DEFAULT_CODE_LENGTH,
    DEFAULT_NUM_CODES,
};
pub use utils::{is_valid_code, sample_code, ALPHABET};
