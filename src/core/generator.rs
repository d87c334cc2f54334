use super::utils::{sample_code, ALPHABET};
use crate::error::CodeError;
use rand::Rng;
use std::collections::HashSet;

pub const DEFAULT_NUM_CODES: usize = 10_000;
pub const DEFAULT_CODE_LENGTH: usize = 6;

// Upper bound on the set's up-front allocation; larger requests grow on demand.
const MAX_PREALLOCATED: usize = 1 << 20;

/// Number of distinct codes of `code_length` letters, i.e. the permutations
/// of the alphabet taken `code_length` at a time.
///
/// Returns `None` when `code_length` exceeds the alphabet size. 26! fits in a
/// `u128`, so every other length has an exact answer.
pub const fn max_codes(code_length: usize) -> Option<u128> {
    let n = ALPHABET.len();
    if code_length > n {
        return None;
    }
    let mut count: u128 = 1;
    let mut k = n - code_length + 1;
    while k <= n {
        count *= k as u128;
        k += 1;
    }
    Some(count)
}

const DEFAULT_CAPACITY: u128 = match max_codes(DEFAULT_CODE_LENGTH) {
    Some(capacity) => capacity,
    None => panic!("default code length exceeds the alphabet"),
};

/// A validated generation request.
///
/// Holding a `CodeSpec` means the request is satisfiable: the length fits the
/// alphabet and enough distinct codes exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSpec {
    num_codes: usize,
    code_length: usize,
    capacity: u128,
}

impl CodeSpec {
    /// Validate raw, possibly negative, parameters as they arrive from the
    /// command line or a config file.
    pub fn new(num_codes: i64, code_length: i64) -> Result<Self, CodeError> {
        let num_codes = non_negative("num_codes", num_codes)?;
        let code_length = non_negative("code_length", code_length)?;
        Self::from_counts(num_codes, code_length)
    }

    pub fn from_counts(num_codes: usize, code_length: usize) -> Result<Self, CodeError> {
        let capacity = max_codes(code_length).ok_or(CodeError::InvalidLength {
            length: code_length,
            max: ALPHABET.len(),
        })?;

        if num_codes as u128 > capacity {
            return Err(CodeError::Unsatisfiable {
                requested: num_codes,
                capacity,
                code_length,
            });
        }

        Ok(Self {
            num_codes,
            code_length,
            capacity,
        })
    }

    pub fn num_codes(&self) -> usize {
        self.num_codes
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Distinct codes available at this length.
    pub fn capacity(&self) -> u128 {
        self.capacity
    }

    /// Sample codes until `num_codes` distinct ones are collected.
    ///
    /// Duplicates are discarded by the set. The returned order follows set
    /// iteration and is not meaningful.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        if self.num_codes == 0 {
            return Vec::new();
        }

        if (self.num_codes as u128) * 2 > self.capacity {
            tracing::warn!(
                "Requesting {} of {} possible codes; duplicates will slow generation",
                self.num_codes,
                self.capacity
            );
        }

        let mut codes = HashSet::with_capacity(self.num_codes.min(MAX_PREALLOCATED));
        let mut draws: u64 = 0;
        while codes.len() < self.num_codes {
            codes.insert(sample_code(rng, self.code_length));
            draws += 1;
        }

        tracing::debug!(
            "Collected {} codes of length {} in {} draws ({} duplicates)",
            codes.len(),
            self.code_length,
            draws,
            draws - codes.len() as u64
        );

        codes.into_iter().collect()
    }

    pub fn generate(&self) -> Vec<String> {
        self.generate_with(&mut rand::thread_rng())
    }
}

impl Default for CodeSpec {
    fn default() -> Self {
        Self {
            num_codes: DEFAULT_NUM_CODES,
            code_length: DEFAULT_CODE_LENGTH,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

fn non_negative(name: &'static str, value: i64) -> Result<usize, CodeError> {
    usize::try_from(value).map_err(|_| CodeError::InvalidArgument { name, value })
}

/// Generate `num_codes` unique codes of `code_length` distinct uppercase
/// letters using the thread-local RNG.
pub fn generate_codes(num_codes: usize, code_length: usize) -> Result<Vec<String>, CodeError> {
    generate_codes_with(&mut rand::thread_rng(), num_codes, code_length)
}

/// Same as [`generate_codes`], drawing from the supplied RNG.
pub fn generate_codes_with<R: Rng + ?Sized>(
    rng: &mut R,
    num_codes: usize,
    code_length: usize,
) -> Result<Vec<String>, CodeError> {
    let spec = CodeSpec::from_counts(num_codes, code_length)?;
    Ok(spec.generate_with(rng))
}
