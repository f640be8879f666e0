use std::fmt;

use tracing::{debug, trace};

use super::{Cell, Seed, UniverseConfig, UniverseError, UniverseResult};

/// Universe owns a fixed-size toroidal grid of cells.
/// Cells are stored row-major: index = `row * width + column`.
#[derive(Clone)]
pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    /// Next-generation buffer, swapped with `cells` on every tick
    scratch: Vec<Cell>,
    generation: u64,
}

impl Universe {
    /// Create a universe seeded with the demo pattern
    pub fn new(width: u32, height: u32) -> UniverseResult<Self> {
        Self::with_config(UniverseConfig::new(width, height))
    }

    pub fn with_config(config: UniverseConfig) -> UniverseResult<Self> {
        let UniverseConfig { width, height, seed } = config;

        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|&len| len > 0)
            .ok_or(UniverseError::InvalidDimension { width, height })?;

        let mut cells = vec![Cell::Dead; len];
        seed.populate(&mut cells);

        debug!(width, height, ?seed, "created universe");

        Ok(Self {
            width,
            height,
            cells,
            scratch: vec![Cell::Dead; len],
            generation: 0,
        })
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of generations advanced since construction
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Current cell buffer, `width * height` cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert 2D coordinates to 1D index, `None` when off the grid
    const fn offset(&self, row: u32, column: u32) -> Option<usize> {
        if row < self.height && column < self.width {
            Some(row as usize * self.width as usize + column as usize)
        } else {
            None
        }
    }

    fn index(&self, row: u32, column: u32) -> UniverseResult<usize> {
        self.offset(row, column).ok_or_else(|| {
            debug!(row, column, "rejected out of range coordinate");
            UniverseError::OutOfRange {
                row,
                column,
                width: self.width,
                height: self.height,
            }
        })
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: u32, column: u32) -> Option<Cell> {
        self.offset(row, column).map(|idx| self.cells[idx])
    }

    pub fn set_cell(&mut self, row: u32, column: u32, cell: Cell) -> UniverseResult<()> {
        let idx = self.index(row, column)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip a single cell between Alive and Dead
    pub fn toggle_cell(&mut self, row: u32, column: u32) -> UniverseResult<()> {
        let idx = self.index(row, column)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(())
    }

    /// Mark every listed cell Alive. Coordinates wrap around the torus, so a
    /// shape stamped near an edge continues on the opposite side.
    pub fn set_cells(&mut self, cells: &[(u32, u32)]) {
        let (w, h) = (self.width as usize, self.height as usize);
        for &(row, column) in cells {
            let idx = (row as usize % h) * w + column as usize % w;
            self.cells[idx] = Cell::Alive;
        }
    }

    /// Kill every cell. The generation counter is left alone.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Repopulate the grid from a seed
    pub fn reseed(&mut self, seed: Seed) {
        seed.populate(&mut self.cells);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Advance the simulation by exactly one generation.
    ///
    /// Every next state is computed from the current buffer into the scratch
    /// buffer, then the two are swapped, so no cell observes an already
    /// updated neighbor.
    pub fn tick(&mut self) {
        let (w, h) = (self.width as usize, self.height as usize);
        let cells = &self.cells;

        self.scratch
            .iter_mut()
            .enumerate()
            .for_each(|(idx, next)| {
                let (row, column) = (idx / w, idx % w);
                let neighbors = live_neighbor_count(cells, w, h, row, column);
                *next = cells[idx].evolve(neighbors);
            });

        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;

        trace!(generation = self.generation, "advanced universe");
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u32, Cell)> + '_ {
        let w = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| ((idx / w) as u32, (idx % w) as u32, cell))
    }
}

// The scratch buffer holds a stale generation and is not part of the state.
impl PartialEq for Universe {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.generation == other.generation
            && self.cells == other.cells
    }
}

impl Eq for Universe {}

impl fmt::Debug for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Universe")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("generation", &self.generation)
            .field("cells", &self.cells)
            .finish_non_exhaustive()
    }
}

/// Count live neighbors using toroidal wrapping (grid wraps like a torus).
/// On grids narrower than 3 cells a neighbor position may alias the same
/// cell more than once, or the cell itself; each position is counted.
fn live_neighbor_count(cells: &[Cell], w: usize, h: usize, row: usize, column: usize) -> u8 {
    let (wi, hi) = (w as i64, h as i64);

    (-1i64..=1)
        .flat_map(|dr| (-1i64..=1).map(move |dc| (dr, dc)))
        .filter(|&(dr, dc)| dr != 0 || dc != 0)
        .map(|(dr, dc)| {
            let r = (row as i64 + dr).rem_euclid(hi) as usize;
            let c = (column as i64 + dc).rem_euclid(wi) as usize;
            cells[r * w + c]
        })
        .filter(|cell| cell.is_alive())
        .count() as u8
}
