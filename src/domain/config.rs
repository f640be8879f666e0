use rand::{Rng, SeedableRng, rngs::StdRng};

use super::Cell;

/// Chance of a cell starting alive under [`Seed::Random`]
const RANDOM_DENSITY: f64 = 0.3;

/// How a freshly constructed universe is populated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Seed {
    /// Alive iff the row-major index is divisible by 2 or by 7
    #[default]
    Demo,
    /// Every cell dead
    Empty,
    /// Each cell alive with 30% probability, drawn from an RNG seeded with
    /// the given value. The same value always yields the same grid.
    Random(u64),
}

impl Seed {
    /// Overwrite `cells` with this seed's initial pattern
    pub fn populate(&self, cells: &mut [Cell]) {
        match *self {
            Seed::Demo => cells
                .iter_mut()
                .enumerate()
                .for_each(|(i, cell)| *cell = Cell::from(i % 2 == 0 || i % 7 == 0)),
            Seed::Empty => cells.fill(Cell::Dead),
            Seed::Random(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                cells
                    .iter_mut()
                    .for_each(|cell| *cell = Cell::from(rng.random_bool(RANDOM_DENSITY)));
            }
        }
    }
}

/// Construction parameters for a [`Universe`](super::Universe).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniverseConfig {
    pub width: u32,
    pub height: u32,
    pub seed: Seed,
}

impl UniverseConfig {
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            seed: Seed::Demo,
        }
    }

    /// Replace the seed (builder pattern)
    pub const fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self::new(64, 64)
    }
}
