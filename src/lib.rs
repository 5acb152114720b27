// Domain layer - Core automaton logic
pub mod domain;

// Application layer - Simulation coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridError, Pattern, presets};
pub use application::{GameState, SimulationClock};
