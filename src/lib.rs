// Domain layer - the stepping engine
pub mod domain;

// Application layer - scheduling, viewport, repaint tracking
pub mod application;

pub mod config;
pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{GameState, Scheduler, Viewport};
pub use config::Config;
pub use domain::{Algorithm, CellKey, Coord, Delta, Engine, LiveCells, Pattern};
pub use error::{Error, Result};
