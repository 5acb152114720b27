use super::{Cell, Grid};

/// A named set of live cells that can be stamped onto the board
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        Self { name, cells }
    }

    /// Place pattern on grid with its top-left corner at (x, y).
    /// Cells that fall off the board are clipped.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        for (dx, dy) in &self.cells {
            grid.set(x + dx, y + dy, Cell::Alive).ok();
        }
    }
}

/// Classic Game of Life seed patterns
pub mod presets {
    use super::*;

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            vec![
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConwayRule;

    #[test]
    fn test_place_on_sets_documented_cells() {
        let mut grid = Grid::new(10, 10);
        presets::block().place_on(&mut grid, 3, 4);

        assert_eq!(grid.get(3, 4), Ok(Cell::Alive));
        assert_eq!(grid.get(4, 4), Ok(Cell::Alive));
        assert_eq!(grid.get(3, 5), Ok(Cell::Alive));
        assert_eq!(grid.get(4, 5), Ok(Cell::Alive));
        assert_eq!(
            grid.iter_cells().filter(|(_, _, c)| c.is_alive()).count(),
            4
        );
    }

    #[test]
    fn test_place_on_clips_at_edge() {
        let mut grid = Grid::new(5, 5);
        presets::glider().place_on(&mut grid, 3, 3);

        // Only the cells that fit on the board survive
        assert!(grid.iter_cells().filter(|(_, _, c)| c.is_alive()).count() < 5);
        assert_eq!(grid.get(4, 3), Ok(Cell::Alive));
    }

    #[test]
    fn test_toad_oscillates_back() {
        let mut grid = Grid::new(8, 8);
        presets::toad().place_on(&mut grid, 2, 3);
        let before = grid.clone();

        let after_two = grid.evolve(&ConwayRule).evolve(&ConwayRule);
        assert_eq!(after_two, before);
    }
}
