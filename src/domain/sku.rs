//! SKU generation for wheels.
//!
//! `SPP-{year}{MAKE3}{MODEL3}-{sizeDigits}-{boltDigits}-{suffix}` where the
//! suffix is four base-36 characters. Uniqueness is probabilistic; no
//! collision check is performed against existing records.

use rand::Rng;

const SUFFIX_LEN: usize = 4;
const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Deterministic SKU builder; the random suffix is supplied by the caller so
/// the formatting itself stays reproducible.
pub fn format_sku(
    year: &str,
    make: &str,
    model: &str,
    size: &str,
    bolt_pattern: &str,
    suffix: &str,
) -> String {
    format!(
        "SPP-{}{}{}-{}-{}-{}",
        year.trim(),
        prefix3(make),
        prefix3(model),
        measurement_digits(size),
        measurement_digits(bolt_pattern),
        suffix
    )
}

/// Generate a SKU with a fresh random suffix.
pub fn generate_sku(year: &str, make: &str, model: &str, size: &str, bolt_pattern: &str) -> String {
    format_sku(year, make, model, size, bolt_pattern, &random_suffix())
}

fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

/// First three characters, uppercased.
fn prefix3(value: &str) -> String {
    value.trim().chars().take(3).flat_map(char::to_uppercase).collect()
}

/// Keep only digits and `.` from a measurement, so `18x7.5` becomes `187.5`
/// and `5x114.3` becomes `5114.3`.
fn measurement_digits(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_the_documented_shape() {
        let sku = format_sku("2024", "Subaru", "Outback", "18x7.5", "5x114.3", "A1B2");
        assert_eq!(sku, "SPP-2024SUBOUT-187.5-5114.3-A1B2");
    }

    #[test]
    fn strips_measurement_noise() {
        assert_eq!(measurement_digits("18\" x 7.5"), "187.5");
        assert_eq!(measurement_digits("5 x 114.3 mm"), "5114.3");
        assert_eq!(measurement_digits(""), "");
    }

    #[test]
    fn short_names_keep_what_they_have() {
        let sku = format_sku("1999", "BR", "Z", "17", "5x100", "ZZZZ");
        assert_eq!(sku, "SPP-1999BRZ-17-5100-ZZZZ");
    }

    #[test]
    fn generated_suffix_is_base36() {
        let sku = generate_sku("2024", "Subaru", "Outback", "18x7.5", "5x114.3");
        let suffix = sku.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 4);
        assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }
}
