//! Everyday helpers: passwords, random picks and stylish text input checks.
//!
//! Randomness is injected through `rand::Rng` so callers decide where it
//! comes from and tests can use a seeded generator.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::glyph::{apply_all_styles, StylishResult};

pub const PASSWORD_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+";

pub const DEFAULT_PASSWORD_LENGTH: usize = 12;
pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 64;

pub const RANDOM_NAMES: [&str; 10] = [
    "Alex", "Jordan", "Taylor", "Morgan", "Casey", "River", "Sam", "Jamie", "Dakota", "Reese",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DailyError {
    #[error("Password length must be between 4 and 64.")]
    PasswordLength,

    #[error("Please enter some text.")]
    EmptyText,
}

/// Draws `length` characters uniformly from [`PASSWORD_CHARSET`].
pub fn generate_password<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Result<String, DailyError> {
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        return Err(DailyError::PasswordLength);
    }

    Ok((0..length)
        .map(|_| PASSWORD_CHARSET[rng.gen_range(0..PASSWORD_CHARSET.len())] as char)
        .collect())
}

/// Picks one entry from `items`, ignoring blank entries. With no usable
/// items the built-in name list is used instead.
pub fn pick_random<R: Rng + ?Sized, S: AsRef<str>>(rng: &mut R, items: &[S]) -> String {
    let candidates: Vec<&str> = items
        .iter()
        .map(|item| item.as_ref().trim())
        .filter(|item| !item.is_empty())
        .collect();

    let pool: &[&str] = if candidates.is_empty() {
        &RANDOM_NAMES
    } else {
        &candidates
    };

    pool.choose(rng).map(|s| s.to_string()).unwrap_or_default()
}

/// Splits a comma or newline separated list into entries.
pub fn split_items(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Stylish text with the empty-input short-circuit applied.
pub fn stylish_text(input: &str) -> Result<Vec<StylishResult>, DailyError> {
    if input.trim().is_empty() {
        return Err(DailyError::EmptyText);
    }
    Ok(apply_all_styles(input))
}
