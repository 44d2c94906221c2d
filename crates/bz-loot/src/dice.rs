//! Dice rolling.
//!
//! Rolls are uniform draws over `[1, sides]` from an explicit `StdRng` so
//! hosts decide between OS entropy and a fixed seed. The engine itself
//! never owns a random source.

use rand::Rng;
use rand::rngs::StdRng;

/// Roll `count` dice with the given number of sides.
///
/// Returns exactly `count` values, each uniform in `[1, sides]`. A count of
/// zero yields an empty vector. `sides` must be at least 1.
pub fn roll(rng: &mut StdRng, sides: u32, count: u32) -> Vec<u32> {
    (0..count).map(|_| rng.random_range(1..=sides)).collect()
}

/// Sum of a roll sequence; 0 for an empty sequence.
pub fn sum(rolls: &[u32]) -> u32 {
    rolls.iter().sum()
}
