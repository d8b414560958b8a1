#![allow(clippy::unwrap_used)]
//! Utilities for tests: JSON fixture loading and seeded randomness.

use std::env;
use std::fs::read_to_string;
use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Reads from the resources directory of the crate under test, same as current working directory.
pub fn read_json_file(path_in_resource_dir: &str) -> serde_json::Value {
    let path = Path::new(&env::var("CARGO_MANIFEST_DIR").unwrap())
        .join("resources")
        .join(path_in_resource_dir);
    let json_str = read_to_string(path.to_str().unwrap()).unwrap();
    serde_json::from_str(&json_str).unwrap()
}

/// Loads a value of type `T` from a json fixture, dumps it back and asserts the dump is identical
/// to the fixture.
pub fn validate_load_and_dump<T: Serialize + for<'a> Deserialize<'a>>(path_in_resource_dir: &str) {
    let json_value = read_json_file(path_in_resource_dir);
    let load_result = serde_json::from_value::<T>(json_value.clone());
    assert!(load_result.is_ok(), "error: {:?}", load_result.err());
    let dump_result = serde_json::to_value(load_result.unwrap());
    assert!(dump_result.is_ok(), "error: {:?}", dump_result.err());
    assert_eq!(json_value, dump_result.unwrap());
}

/// Used in random tests to create a random generator.
/// Randomness can be seeded by setting an env variable `SEED` or by the OS (the rust default).
pub fn get_rng() -> ChaCha8Rng {
    let seed: u64 = match env::var("SEED") {
        Ok(seed_str) => seed_str.parse().unwrap(),
        _ => rand::thread_rng().gen(),
    };
    // Will be printed if the test failed.
    println!("Testing with seed: {seed:?}");
    // Create a new PRNG using a u64 seed. This is a convenience-wrapper around from_seed.
    // It is designed such that low Hamming Weight numbers like 0 and 1 can be used and
    // should still result in good, independent seeds to the returned PRNG.
    // This is not suitable for cryptography purposes.
    ChaCha8Rng::seed_from_u64(seed)
}
