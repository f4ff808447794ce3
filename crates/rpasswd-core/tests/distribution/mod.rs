mod class_uniformity;
mod shuffle_uniformity;

/// Pearson's chi-square statistic against a uniform expectation.
#[allow(clippy::cast_precision_loss)]
pub fn chi_square(observed: &[u64]) -> f64 {
    let total: u64 = observed.iter().sum();
    let expected = total as f64 / observed.len() as f64;
    observed
        .iter()
        .map(|&o| {
            let d = o as f64 - expected;
            d * d / expected
        })
        .sum()
}
