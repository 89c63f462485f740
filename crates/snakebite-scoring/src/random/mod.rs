//! Random sources for the engine's uniform fallback.

mod seeded;
mod thread;

pub use seeded::SeededRandom;
pub use thread::ThreadRandom;
