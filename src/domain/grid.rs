use super::{Cell, rules::Rule};
use rand::Rng;
use thiserror::Error;

/// Errors from bounds-checked grid access.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("coordinate ({x}, {y}) is outside the board")]
    OutOfBounds { x: usize, y: usize },
}

/// Grid manages the 2D cellular automaton board.
/// It is the sole source of truth for cell state; evolution produces a new
/// grid instead of mutating in place, so a generation is never read and
/// written at the same time.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position, `OutOfBounds` if (x, y) is off the board
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, GridError> {
        if x < self.width && y < self.height {
            Ok(self.cells[self.get_index(x, y)])
        } else {
            Err(GridError::OutOfBounds { x, y })
        }
    }

    /// Set cell at position, `OutOfBounds` if (x, y) is off the board
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GridError> {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
            Ok(())
        } else {
            Err(GridError::OutOfBounds { x, y })
        }
    }

    /// Set every cell to the given state (reset is `fill(Cell::Dead)`)
    pub fn fill(mut self, cell: Cell) -> Self {
        self.cells.iter_mut().for_each(|c| *c = cell);
        self
    }

    /// Count live neighbors among the up-to-8 surrounding cells.
    /// Edges do not wrap: coordinates off the board contribute nothing, so
    /// border cells simply have fewer neighbors.
    fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let w = self.width as i32;
        let h = self.height as i32;

        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                (nx >= 0 && nx < w && ny >= 0 && ny < h)
                    .then(|| self.cells[self.get_index(nx as usize, ny as usize)])
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Pure functional evolution - returns the next generation as a new grid.
    /// Every next state is computed from the receiver before anything is
    /// committed, so no neighbor count can observe a half-updated generation.
    pub fn evolve(&self, rule: &dyn Rule) -> Self {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.get_index(x, y)];
                let neighbors = self.count_live_neighbors(x, y);
                rule.evolve(current, neighbors)
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Overwrite every cell: alive with probability `density`, dead
    /// otherwise, drawn independently per cell. Clamps `density` to [0, 1].
    pub fn randomize<R: Rng>(mut self, density: f64, rng: &mut R) -> Self {
        let density = density.clamp(0.0, 1.0);
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(density) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
        self
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }
}
