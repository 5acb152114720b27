use std::time::Duration;

use log::{debug, info};
use rand::Rng;

use crate::application::SimulationClock;
use crate::domain::{Cell, Grid, Rule, default_rule};

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic; it is the
/// only type the window shell talks to.
pub struct GameState {
    pub grid: Grid,
    pub rule: Box<dyn Rule>,
    pub clock: SimulationClock,
    pub generation: u64,
    /// Per-cell alive probability used by "Generate pattern"
    pub spawn_density: f64,
}

impl GameState {
    /// Create new game state with given grid dimensions, paused, with a
    /// zero advance interval (one generation per frame once started).
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            rule: default_rule(),
            clock: SimulationClock::default(),
            generation: 0,
            spawn_density: 0.5,
        }
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.clock.toggle();
        info!(
            "simulation {}",
            if self.clock.is_running() { "running" } else { "paused" }
        );
        self
    }

    /// Clear the board and reset the generation counter.
    /// Does not touch the run state; only the start/stop command does.
    pub fn clear(mut self) -> Self {
        self.grid = self.grid.fill(Cell::Dead);
        self.generation = 0;
        debug!("board cleared");
        self
    }

    /// Repopulate the board at the configured density and reset the
    /// generation counter
    pub fn randomize<R: Rng>(mut self, rng: &mut R) -> Self {
        self.grid = self.grid.randomize(self.spawn_density, rng);
        self.generation = 0;
        debug!("board randomized at density {}", self.spawn_density);
        self
    }

    /// Change how much time must pass between generations
    pub fn set_interval(&mut self, interval: Duration) {
        self.clock.set_interval(interval);
    }

    /// Paint the hovered cell. `target` is the board coordinate under the
    /// pointer this frame, or `None` when the pointer is off the board.
    /// Painting is advisory: a missing or out-of-range target is a no-op,
    /// and edits are allowed whether the simulation is running or paused.
    pub fn paint(&mut self, target: Option<(i32, i32)>, brush: Cell) {
        let Some((x, y)) = target else { return };
        if x < 0 || y < 0 {
            return;
        }
        self.grid.set(x as usize, y as usize, brush).ok();
    }

    /// Update simulation by one frame.
    /// Advances at most one generation per call, and only when the clock
    /// says a full interval has elapsed.
    pub fn tick(mut self, frame_delta: Duration) -> Self {
        if self.clock.advance_due(frame_delta) {
            self.grid = self.grid.evolve(self.rule.as_ref());
            self.generation += 1;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn live_count(state: &GameState) -> usize {
        state
            .grid
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .count()
    }

    #[test]
    fn test_paint_then_get() {
        let mut state = GameState::new(10, 10);
        state.paint(Some((4, 6)), Cell::Alive);
        assert_eq!(state.grid.get(4, 6), Ok(Cell::Alive));

        state.paint(Some((4, 6)), Cell::Dead);
        assert_eq!(state.grid.get(4, 6), Ok(Cell::Dead));
    }

    #[test]
    fn test_paint_out_of_range_is_a_noop() {
        let mut state = GameState::new(10, 10);
        state.paint(Some((-1, 3)), Cell::Alive);
        state.paint(Some((3, -2)), Cell::Alive);
        state.paint(Some((10, 0)), Cell::Alive);
        state.paint(Some((0, 99)), Cell::Alive);
        assert_eq!(live_count(&state), 0);
    }

    #[test]
    fn test_paint_without_target_is_a_noop() {
        let mut state = GameState::new(10, 10);
        state.paint(None, Cell::Alive);
        assert_eq!(live_count(&state), 0);
    }

    #[test]
    fn test_paint_works_while_running() {
        let mut state = GameState::new(10, 10).toggle_running();
        assert!(state.clock.is_running());

        state.paint(Some((5, 5)), Cell::Alive);
        assert_eq!(state.grid.get(5, 5), Ok(Cell::Alive));
    }

    #[test]
    fn test_tick_while_paused_never_advances() {
        let mut state = GameState::new(10, 10);
        state.paint(Some((2, 1)), Cell::Alive);
        state.paint(Some((2, 2)), Cell::Alive);
        state.paint(Some((2, 3)), Cell::Alive);
        let before = state.grid.clone();

        for _ in 0..50 {
            state = state.tick(Duration::from_millis(16));
        }

        assert_eq!(state.grid, before);
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn test_tick_advances_one_generation() {
        let mut state = GameState::new(10, 10).toggle_running();
        state.paint(Some((2, 1)), Cell::Alive);
        state.paint(Some((2, 2)), Cell::Alive);
        state.paint(Some((2, 3)), Cell::Alive);

        // Zero interval: one generation per frame, and exactly one
        let state = state.tick(Duration::from_millis(16));
        assert_eq!(state.generation, 1);
        assert_eq!(state.grid.get(1, 2), Ok(Cell::Alive));
        assert_eq!(state.grid.get(2, 2), Ok(Cell::Alive));
        assert_eq!(state.grid.get(3, 2), Ok(Cell::Alive));
        assert_eq!(state.grid.get(2, 1), Ok(Cell::Dead));
    }

    #[test]
    fn test_tick_respects_interval() {
        let mut state = GameState::new(10, 10).toggle_running();
        state.set_interval(Duration::from_millis(100));
        state.paint(Some((2, 1)), Cell::Alive);
        state.paint(Some((2, 2)), Cell::Alive);
        state.paint(Some((2, 3)), Cell::Alive);

        let state = state.tick(Duration::from_millis(60));
        assert_eq!(state.generation, 0);
        let state = state.tick(Duration::from_millis(60));
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn test_clear_kills_every_cell() {
        let mut state = GameState::new(10, 10);
        state = state.randomize(&mut StdRng::seed_from_u64(3));
        assert!(live_count(&state) > 0);

        let state = state.clear();
        assert_eq!(live_count(&state), 0);
        assert_eq!(state.generation, 0);
        assert!(
            state
                .grid
                .iter_cells()
                .all(|(x, y, _)| state.grid.get(x, y) == Ok(Cell::Dead))
        );
    }

    #[test]
    fn test_randomize_replaces_the_board() {
        let mut state = GameState::new(20, 20);
        state.spawn_density = 1.0;
        let state = state.randomize(&mut StdRng::seed_from_u64(11));
        assert_eq!(live_count(&state), 400);
    }
}
