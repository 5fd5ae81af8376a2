mod algorithm;
mod bounds;
mod cell;
mod coord;
mod engine;
mod live_cells;
mod neighborhood;
mod patterns;
pub mod stepper;

pub use algorithm::Algorithm;
pub use bounds::Bounds;
pub use cell::Cell;
pub use coord::{CellKey, Coord};
pub use engine::Engine;
pub use live_cells::LiveCells;
pub use neighborhood::live_neighbor_count;
pub use patterns::Pattern;
pub use stepper::{Delta, step, step_parallel};
