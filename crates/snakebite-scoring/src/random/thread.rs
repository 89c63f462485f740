use rand::Rng;

use snakebite_core::RandomSource;

/// Draws from the thread-local generator. The default for production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, n: usize) -> usize {
        rand::thread_rng().gen_range(0..n)
    }
}
