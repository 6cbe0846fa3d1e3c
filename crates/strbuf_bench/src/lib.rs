//! Benchmark utilities.

use rand::Rng;

/// Generate random content of the specified size.
pub fn random_data(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

/// Generate `count` random positions, each valid for a buffer that starts
/// at `start` bytes and grows by one per step.
pub fn random_positions(start: usize, count: usize) -> Vec<usize> {
    let mut rng = rand::thread_rng();
    (0..count).map(|i| rng.gen_range(0..=start + i)).collect()
}
