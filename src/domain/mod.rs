mod cell;
mod config;
mod error;
mod universe;
pub mod patterns;

pub use cell::Cell;
pub use config::{Seed, UniverseConfig};
pub use error::{UniverseError, UniverseResult};
pub use universe::Universe;
pub use patterns::{Pattern, presets};
