//! Thin helpers over the `fake` crate and the random source.

use fake::{Dummy, Fake};
use rand::{Rng, RngCore};

use crate::model::GeneratedValue;

const DIGITS: &[u8] = b"0123456789";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Run a `fake` faker that renders to text.
pub fn text<F>(faker: F, rng: &mut dyn RngCore) -> GeneratedValue
where
    String: Dummy<F>,
{
    let value: String = faker.fake_with_rng(rng);
    GeneratedValue::Text(value)
}

/// Same as [`text`] but returns the bare string for composites.
pub fn string<F>(faker: F, rng: &mut dyn RngCore) -> String
where
    String: Dummy<F>,
{
    faker.fake_with_rng(rng)
}

pub fn pick(values: &[&str], rng: &mut dyn RngCore) -> GeneratedValue {
    if values.is_empty() {
        return GeneratedValue::Null;
    }
    let idx = rng.random_range(0..values.len());
    GeneratedValue::Text(values[idx].to_string())
}

pub fn pick_str<'a>(values: &[&'a str], rng: &mut dyn RngCore) -> &'a str {
    let idx = rng.random_range(0..values.len());
    values[idx]
}

pub fn numeric(len: usize, rng: &mut dyn RngCore) -> String {
    from_charset(DIGITS, len, rng)
}

pub fn alpha_upper(len: usize, rng: &mut dyn RngCore) -> String {
    from_charset(UPPER, len, rng)
}

/// Mixed-case letters and digits; callers normalize case as needed.
pub fn alphanumeric(len: usize, rng: &mut dyn RngCore) -> String {
    from_charset(ALPHANUMERIC, len, rng)
}

pub fn from_charset(charset: &[u8], len: usize, rng: &mut dyn RngCore) -> String {
    (0..len)
        .map(|_| charset[rng.random_range(0..charset.len())] as char)
        .collect()
}

/// Uniform float in `min..=max` rounded to `scale` decimal places.
pub fn decimal(min: f64, max: f64, scale: i32, rng: &mut dyn RngCore) -> GeneratedValue {
    let factor = 10_f64.powi(scale);
    let value = rng.random_range(min..=max);
    GeneratedValue::Float((value * factor).round() / factor)
}

/// Luhn check digit for a string of ASCII digits.
pub fn luhn_check_digit(digits: &str) -> char {
    let sum: u32 = digits
        .chars()
        .rev()
        .filter_map(|ch| ch.to_digit(10))
        .enumerate()
        .map(|(idx, digit)| {
            if idx % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();
    char::from_digit((10 - sum % 10) % 10, 10).unwrap_or('0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn luhn_matches_known_numbers() {
        // 79927398713 is the textbook example.
        assert_eq!(luhn_check_digit("7992739871"), '3');
        assert_eq!(luhn_check_digit("453957876362148"), '6');
    }

    #[test]
    fn decimal_respects_bounds_and_scale() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let value = decimal(2.5, 4.0, 2, &mut rng).as_f64().unwrap();
            assert!((2.5..=4.0).contains(&value));
            assert_eq!((value * 100.0).round() / 100.0, value);
        }
    }

    #[test]
    fn charset_helpers_emit_requested_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let digits = numeric(10, &mut rng);
        assert_eq!(digits.len(), 10);
        assert!(digits.chars().all(|ch| ch.is_ascii_digit()));

        let upper = alpha_upper(4, &mut rng);
        assert!(upper.chars().all(|ch| ch.is_ascii_uppercase()));

        assert!(pick(&[], &mut rng).is_null());
    }
}
