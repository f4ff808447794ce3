//! Unbiased random integers and shuffling on top of a CSPRNG.
//!
//! Every draw goes through [`RngCore::try_fill_bytes`] so an entropy failure
//! surfaces as [`CryptoError::EntropyFailure`] instead of a panic.

use rand::{CryptoRng, RngCore};

use crate::error::CryptoError;

/// Return a uniformly distributed integer in `[0, n)`.
///
/// Reads a 64-bit little-endian word and rejects words at or above the
/// largest multiple of `n` that fits, so no residue class is favoured.
///
/// # Errors
///
/// - [`CryptoError::InvalidParam`] if `n` is zero
/// - [`CryptoError::EntropyFailure`] if the RNG fails
pub fn rand_int<R>(rng: &mut R, n: usize) -> Result<usize, CryptoError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if n == 0 {
        return Err(CryptoError::InvalidParam(
            "random range upper bound must be positive".to_string(),
        ));
    }
    let bound = u64::try_from(n)
        .map_err(|_| CryptoError::InvalidParam(format!("random range too large: {n}")))?;

    // bound > 0, checked above.
    #[allow(clippy::arithmetic_side_effects)]
    let zone = (u64::MAX / bound) * bound;

    loop {
        let mut word = [0u8; 8];
        rng.try_fill_bytes(&mut word)
            .map_err(|e| CryptoError::EntropyFailure(e.to_string()))?;
        let value = u64::from_le_bytes(word);
        if value < zone {
            #[allow(clippy::arithmetic_side_effects)]
            let draw = value % bound;
            // draw < bound == n, so it fits back into usize.
            #[allow(clippy::cast_possible_truncation)]
            return Ok(draw as usize);
        }
    }
}

/// Fisher-Yates shuffle driven by [`rand_int`].
///
/// # Errors
///
/// Returns [`CryptoError::EntropyFailure`] if the RNG fails mid-shuffle; the
/// slice is then left partially shuffled.
pub fn shuffle<T, R>(rng: &mut R, items: &mut [T]) -> Result<(), CryptoError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    for i in (1..items.len()).rev() {
        // i < items.len() <= usize::MAX
        #[allow(clippy::arithmetic_side_effects)]
        let j = rand_int(rng, i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_rngs::{FailingRng, ScriptedRng};
    use super::*;
    use rand::rngs::{OsRng, StdRng};
    use rand::SeedableRng;

    #[test]
    fn zero_bound_rejected() {
        let err = rand_int(&mut OsRng, 0).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidParam(_)));
    }

    #[test]
    fn bound_of_one_always_zero() {
        for _ in 0..32 {
            assert_eq!(rand_int(&mut OsRng, 1).unwrap(), 0);
        }
    }

    #[test]
    fn draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in [2, 10, 26, 30, 52, 1000] {
            for _ in 0..500 {
                assert!(rand_int(&mut rng, n).unwrap() < n);
            }
        }
    }

    #[test]
    fn word_in_biased_tail_is_rejected() {
        // u64::MAX lies above the largest multiple of 26, so it is discarded
        // and the next word (27 -> 27 % 26 == 1) is used.
        let mut rng = ScriptedRng::new(&[u64::MAX, 27]);
        assert_eq!(rand_int(&mut rng, 26).unwrap(), 1);
        assert!(rng.0.is_empty());
    }

    #[test]
    fn word_below_zone_is_reduced_modulo_bound() {
        let mut rng = ScriptedRng::new(&[65]);
        assert_eq!(rand_int(&mut rng, 30).unwrap(), 5);
    }

    #[test]
    fn last_word_inside_zone_is_accepted() {
        // zone for 16 is 2^64 - 16; 2^64 - 17 is its last member.
        let mut rng = ScriptedRng::new(&[u64::MAX - 16]);
        assert_eq!(rand_int(&mut rng, 16).unwrap(), 15);
    }

    #[test]
    fn entropy_failure_propagates() {
        let err = rand_int(&mut FailingRng, 10).unwrap_err();
        assert!(matches!(err, CryptoError::EntropyFailure(_)));
        assert!(err.to_string().contains("getrandom unavailable"));
    }

    #[test]
    fn shuffle_preserves_elements() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut items: Vec<u8> = (0..40).collect();
        shuffle(&mut rng, &mut items).unwrap();
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..40).collect::<Vec<u8>>());
    }

    #[test]
    fn shuffle_of_short_slices_draws_nothing() {
        let mut empty: [u8; 0] = [];
        shuffle(&mut FailingRng, &mut empty).unwrap();
        let mut single = [42u8];
        shuffle(&mut FailingRng, &mut single).unwrap();
        assert_eq!(single, [42]);
    }

    #[test]
    fn shuffle_follows_fisher_yates_order() {
        // i = 2 draws j in [0, 3): word 0 -> swap(2, 0)
        // i = 1 draws j in [0, 2): word 1 -> swap(1, 1)
        let mut rng = ScriptedRng::new(&[0, 1]);
        let mut items = ['a', 'b', 'c'];
        shuffle(&mut rng, &mut items).unwrap();
        assert_eq!(items, ['c', 'b', 'a']);
    }

    #[test]
    fn shuffle_surfaces_entropy_failure() {
        let mut items = [1, 2, 3];
        assert!(matches!(
            shuffle(&mut FailingRng, &mut items),
            Err(CryptoError::EntropyFailure(_))
        ));
    }
}
