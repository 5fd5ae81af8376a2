//! Selection of the stepping implementation.

use serde::{Deserialize, Serialize};

use super::{LiveCells, stepper};

/// Available stepping strategies. Both produce identical generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Two passes over the population on the calling thread
    #[default]
    Serial,
    /// Same two passes spread over rayon's thread pool
    Parallel,
}

impl Algorithm {
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Algorithm::Serial => Algorithm::Parallel,
            Algorithm::Parallel => Algorithm::Serial,
        }
    }

    /// Compute the generation after `current`
    pub fn step(self, current: &LiveCells) -> LiveCells {
        match self {
            Algorithm::Serial => stepper::step(current),
            Algorithm::Parallel => stepper::step_parallel(current),
        }
    }
}
