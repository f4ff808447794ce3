//! Digit and symbol positions must be spread uniformly by the shuffle.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rpasswd_core::{generate_with, GenParams, DIGITS, SYMBOLS};

use super::chi_square;

const SAMPLES: usize = 5_000;
const LENGTH: usize = 10;

/// Chi-square critical value, 9 degrees of freedom, p = 0.001.
const CRITICAL_DF9: f64 = 27.877;

fn position_counts(class: &str, seed: u64) -> [u64; LENGTH] {
    let params = GenParams {
        length: LENGTH,
        digits: 1,
        symbols: 1,
        lowercase_only: true,
        allow_repeat: false,
    };
    let mut rng = StdRng::seed_from_u64(seed);
    let mut counts = [0u64; LENGTH];
    for _ in 0..SAMPLES {
        let pw = generate_with(&params, &mut rng).unwrap();
        let pos = pw.chars().position(|c| class.contains(c)).unwrap();
        counts[pos] += 1;
    }
    counts
}

#[test]
fn digit_position_is_uniform() {
    let counts = position_counts(DIGITS, 0x5eed);
    let stat = chi_square(&counts);
    assert!(
        stat < CRITICAL_DF9,
        "digit positions skewed: chi2 = {stat:.2}, counts = {counts:?}"
    );
}

#[test]
fn symbol_position_is_uniform() {
    let counts = position_counts(SYMBOLS, 0xc0ffee);
    let stat = chi_square(&counts);
    assert!(
        stat < CRITICAL_DF9,
        "symbol positions skewed: chi2 = {stat:.2}, counts = {counts:?}"
    );
}

#[test]
fn classes_are_not_left_in_concatenation_order() {
    // Without a shuffle the digit would always sit at index 0.
    let counts = position_counts(DIGITS, 1);
    assert!(counts[0] < 1_000, "digit stuck at the front: {counts:?}");
}
