//! Numeric value generators.

use rand::Rng;
use schema_core::RandomValue;

/// Exclusive upper bound for generated numbers.
pub const NUMBER_UPPER_BOUND: i64 = 100;

/// Generate a random integer in `[0, NUMBER_UPPER_BOUND)`.
pub fn generate_number<R: Rng>(rng: &mut R) -> RandomValue {
    RandomValue::Int(rng.gen_range(0..NUMBER_UPPER_BOUND))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_number_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let value = generate_number(&mut rng);
            if let RandomValue::Int(v) = value {
                assert!((0..NUMBER_UPPER_BOUND).contains(&v));
            } else {
                panic!("Expected Int value");
            }
        }
    }

    #[test]
    fn test_generate_number_covers_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; NUMBER_UPPER_BOUND as usize];

        for _ in 0..10_000 {
            if let Some(v) = generate_number(&mut rng).as_i64() {
                seen[v as usize] = true;
            }
        }

        assert!(seen.iter().all(|s| *s));
    }
}
