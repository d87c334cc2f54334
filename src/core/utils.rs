use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// The 26 uppercase Latin letters codes are drawn from.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Draw `length` distinct letters from the alphabet, uniformly and without
/// replacement, and join them into a code.
///
/// `length` must not exceed the alphabet size; callers validate it first.
pub fn sample_code<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    debug_assert!(length <= ALPHABET.len());
    ALPHABET[..]
        .choose_multiple(rng, length)
        .map(|&b| char::from(b))
        .collect()
}

/// Check that `code` has exactly `length` uppercase letters, none repeated.
pub fn is_valid_code(code: &str, length: usize) -> bool {
    let mut seen = HashSet::with_capacity(length);
    code.len() == length && code.bytes().all(|b| b.is_ascii_uppercase() && seen.insert(b))
}
