pub mod error;
pub mod generator;
pub mod snapshot;

// Re-export key types at crate root for convenience
pub use error::RandomizerError;
pub use generator::Randomizer;
