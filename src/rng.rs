use getrandom::getrandom;
use oorandom::Rand64;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

pub fn rng64(seed: u64) -> Rand64 {
    Rand64::new(u128::from(seed))
}

/// Draws a seed from the operating system.
/// Falls back to the system clock if no entropy source is available.
pub fn os_random_seed() -> u64 {
    let mut buf = [0; 8];
    match getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(err) => {
            warn!(error = %err, "os entropy unavailable, seeding from the system clock");
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or_default()
        }
    }
}

/// Returns a uniformly random index in `0..bound`. `bound` must not be zero.
pub fn index(rng: &mut Rand64, bound: usize) -> usize {
    debug_assert!(bound > 0, "cannot draw an index from an empty range");
    rng.rand_range(0..bound as u64) as usize
}

/// Returns a uniformly random value in `[range.0, range.1)`.
pub fn uniform(rng: &mut Rand64, range: (f64, f64)) -> f64 {
    let delta = range.1 - range.0;
    rng.rand_float() * delta + range.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = rng64(42);
        let mut b = rng64(42);

        for _ in 0..32 {
            assert_eq!(a.rand_u64(), b.rand_u64(), "Seeded sequences diverged.");
        }
    }

    #[test]
    fn index_stays_in_bounds() {
        let mut rng = rng64(7);

        for bound in 1..50 {
            for _ in 0..20 {
                assert!(index(&mut rng, bound) < bound);
            }
        }
        assert_eq!(index(&mut rng, 1), 0, "Single element range must yield 0.");
    }

    #[test]
    fn uniform_respects_range() {
        let mut rng = rng64(11);

        for _ in 0..1000 {
            let value = uniform(&mut rng, (2.5, 3.0));
            assert!((2.5..3.0).contains(&value), "{} left the range", value);
        }
    }

    #[test]
    fn uniform_on_unit_range_is_the_raw_float() {
        let mut a = rng64(3);
        let mut b = rng64(3);

        let raw = a.rand_float();
        assert!(approx_eq!(f64, uniform(&mut b, (0.0, 1.0)), raw, ulps = 2));
    }
}
