//! Seams the engine is generic over.

/// Source of uniform random choices for the engine's fallback paths.
///
/// Implementations must return an index uniformly distributed in `[0, n)`.
/// `n` is always at least 1.
pub trait RandomSource: Send + Sync {
    fn pick_index(&self, n: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &R {
    fn pick_index(&self, n: usize) -> usize {
        (**self).pick_index(n)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for std::sync::Arc<R> {
    fn pick_index(&self, n: usize) -> usize {
        (**self).pick_index(n)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn pick_index(&self, n: usize) -> usize {
        (**self).pick_index(n)
    }
}
