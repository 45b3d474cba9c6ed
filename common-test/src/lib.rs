use std::{
    collections::HashMap,
    env,
    error::Error,
    sync::{Mutex, OnceLock},
};

use rand::{random, rngs::StdRng, SeedableRng};

/// Environment variable pinning the seed of tests that do not name a scope.
pub const TEST_SEED_ENV: &str = "OBSERVER_LAB_TEST_SEED";

type SeedTable = Mutex<HashMap<&'static str, u64>>;

static SEEDS: OnceLock<SeedTable> = OnceLock::new();

fn seeds() -> &'static SeedTable {
    SEEDS.get_or_init(Default::default)
}

fn seed_from_env(scope: &str) -> Option<u64> {
    env::var(scope).ok()?.parse().ok()
}

/// Seed used by `scope` for the whole test run.
///
/// Read once from the environment variable named after the scope, or drawn at
/// random and printed so a failing run can be replayed.
pub fn seed_for(scope: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = seeds().lock()?;
    let seed = *seeds.entry(scope).or_insert_with(|| {
        let seed = seed_from_env(scope).unwrap_or_else(random);
        println!("{scope}={seed}");
        seed
    });
    Ok(seed)
}

pub fn seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    seeded_rng_for(TEST_SEED_ENV)
}

pub fn seeded_rng_for(scope: &'static str) -> Result<StdRng, Box<dyn Error>> {
    Ok(StdRng::seed_from_u64(seed_for(scope)?))
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use crate::{seed_for, seeded_rng_for};

    #[test]
    fn test_seed_for_reads_environment() {
        // Given
        let scope = "OBSERVER_LAB_SEED_FROM_ENV";
        let seed = 42u64;

        // When
        let result = temp_env::with_var(scope, Some(seed.to_string()), || seed_for(scope).unwrap());

        // Then
        assert_eq!(seed, result);
    }

    #[test]
    fn test_seeded_rng_for_is_stable_within_run() {
        // Given
        let scope = "OBSERVER_LAB_SEED_STABLE";

        // When
        let first = seeded_rng_for(scope).unwrap().gen::<u64>();
        let second = seeded_rng_for(scope).unwrap().gen::<u64>();

        // Then
        assert_eq!(first, second, "Same scope should replay the same sequence");
    }
}
