// Domain layer - Core business logic
pub mod domain;

// Re-exports for convenience
pub use domain::{
    Cell, Pattern, Seed, Universe, UniverseConfig, UniverseError, UniverseResult, presets,
};
