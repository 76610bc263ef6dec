use crate::RandSource;
use ::rand::{Rng, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// This RNG is cryptographically secure (ChaCha-based), seeded from the OS,
/// and automatically reseeded periodically.
///
/// Each OS thread has its own RNG instance, so calls from multiple threads are
/// contention-free and safe. This type does **not** store the RNG itself; it
/// simply accesses the thread-local generator on each call.
///
/// ⚠️ NOTE: The underlying `ThreadRng` is not `Send` or `Sync`, meaning it
/// cannot be shared or moved across threads. However, since this type is a
/// zero-sized wrapper that does not store the RNG, it **is** thread-safe and
/// may be freely used across threads.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource<u64> for ThreadRandom {
    fn rand(&self) -> u64 {
        rng().random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn thread_random_is_shareable() {
        assert_send_sync::<ThreadRandom>();
    }

    #[test]
    fn thread_random_fills_high_bits() {
        // The chance that 64 draws all leave the top bit clear is 2^-64.
        assert!((0..64).any(|_| ThreadRandom.rand() >> 63 == 1));
    }
}
