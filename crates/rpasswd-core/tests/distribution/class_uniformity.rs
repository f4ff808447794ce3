//! Each character of a class must be drawn equally often.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rpasswd_core::{generate_with, GenParams, LOWER, SYMBOLS};

use super::chi_square;

/// Chi-square critical value, 29 degrees of freedom, p = 0.001.
const CRITICAL_DF29: f64 = 58.301;

/// Chi-square critical value, 25 degrees of freedom, p = 0.001.
const CRITICAL_DF25: f64 = 52.620;

fn frequencies(alphabet: &str, params: &GenParams, samples: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut counts = vec![0u64; alphabet.len()];
    for _ in 0..samples {
        let pw = generate_with(params, &mut rng).unwrap();
        for c in pw.chars() {
            if let Some(i) = alphabet.find(c) {
                counts[i] += 1;
            }
        }
    }
    counts
}

#[test]
fn symbols_drawn_uniformly() {
    let params = GenParams {
        length: 4,
        digits: 0,
        symbols: 4,
        lowercase_only: true,
        allow_repeat: true,
    };
    let counts = frequencies(SYMBOLS, &params, 3_000, 17);
    let stat = chi_square(&counts);
    assert!(stat < CRITICAL_DF29, "symbol frequencies skewed: chi2 = {stat:.2}");
}

#[test]
fn lowercase_drawn_uniformly_without_repeat() {
    let params = GenParams {
        length: 5,
        digits: 0,
        symbols: 0,
        lowercase_only: true,
        allow_repeat: false,
    };
    let counts = frequencies(LOWER, &params, 3_000, 23);
    let stat = chi_square(&counts);
    assert!(stat < CRITICAL_DF25, "letter frequencies skewed: chi2 = {stat:.2}");
}
