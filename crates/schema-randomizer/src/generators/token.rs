//! Random alphanumeric token generator.
//!
//! A token is the fractional part of a uniform draw in `[0, 1)` written out
//! in base 36. Its length varies and it can legitimately be empty (a draw of
//! exactly zero).

use rand::Rng;

/// Maximum number of base36 digits in a token.
pub const MAX_TOKEN_DIGITS: usize = 11;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a random base36 token.
pub fn generate_token<R: Rng>(rng: &mut R) -> String {
    fraction_to_base36(rng.gen::<f64>())
}

/// Render the fractional digits of `fraction` in base 36.
///
/// Stops once the remainder is exhausted or `MAX_TOKEN_DIGITS` digits have
/// been written. Trailing zeros are dropped.
pub fn fraction_to_base36(fraction: f64) -> String {
    let mut token = String::with_capacity(MAX_TOKEN_DIGITS);
    let mut rest = fraction.abs().fract();

    while rest > 0.0 && token.len() < MAX_TOKEN_DIGITS {
        rest *= 36.0;
        let digit = (rest.trunc() as usize).min(35);
        token.push(char::from(BASE36_DIGITS[digit]));
        rest -= digit as f64;
    }

    let trimmed = token.trim_end_matches('0').len();
    token.truncate(trimmed);
    token
}
