//! Configuration for the simulation and its window.
//!
//! Supports YAML configuration files with sensible defaults; every section
//! and field may be omitted.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::application::viewport::{MAX_CELL_SIZE, MIN_CELL_SIZE};
use crate::application::scheduler::{MAX_RATE, MIN_RATE};
use crate::domain::{Algorithm, Bounds, Pattern};
use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Stepping and seeding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Generations per second while running
    pub fps: f32,
    /// Start running instead of paused
    pub running: bool,
    pub algorithm: Algorithm,
    /// Initial live cells as `"x,y"` keys; `None` seeds a glider
    pub seed: Option<Vec<String>>,
    /// Optional limit on where cells may be placed by hand or by the seed
    pub bounds: Option<Bounds>,
}

/// Window and grid geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Side of one cell in pixels
    pub cell_size: f32,
    pub window_width: i32,
    pub window_height: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fps: 5.0,
            running: false,
            algorithm: Algorithm::default(),
            seed: None,
            bounds: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_size: 50.0,
            window_width: 1000,
            window_height: 800,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Check ranges and that the seed parses and fits the bounds
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        if !(MIN_RATE..=MAX_RATE).contains(&sim.fps) {
            return Err(Error::InvalidConfig(format!(
                "simulation.fps must be within {MIN_RATE}..={MAX_RATE}, got {}",
                sim.fps
            )));
        }
        let cell_size = self.display.cell_size;
        if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&cell_size) {
            return Err(Error::InvalidConfig(format!(
                "display.cell_size must be within {MIN_CELL_SIZE}..={MAX_CELL_SIZE}, got {cell_size}"
            )));
        }
        if self.display.window_width <= 0 || self.display.window_height <= 0 {
            return Err(Error::InvalidConfig("window size must be positive".to_string()));
        }
        if let Some(bounds) = sim.bounds {
            if !bounds.is_valid() {
                return Err(Error::InvalidConfig(format!("empty bounds {bounds:?}")));
            }
            if let Some(outside) = self.seed_pattern()?.cells().find(|&c| !bounds.contains(c)) {
                return Err(Error::OutOfBounds(outside));
            }
        }
        self.seed_pattern().map(|_| ())
    }

    /// The configured seed, or the glider when none is given
    pub fn seed_pattern(&self) -> Result<Pattern> {
        match &self.simulation.seed {
            Some(keys) => Pattern::from_keys("Config seed", keys),
            None => Ok(Pattern::glider()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coord;

    #[test]
    fn test_defaults_follow_classic_setup() {
        let config = Config::default();
        assert_eq!(config.simulation.fps, 5.0);
        assert!(!config.simulation.running);
        assert_eq!(config.display.cell_size, 50.0);
        assert_eq!(config.seed_pattern().unwrap(), Pattern::glider());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = Config::from_yaml("simulation:\n  fps: 12\n  algorithm: parallel\n").unwrap();
        assert_eq!(config.simulation.fps, 12.0);
        assert_eq!(config.simulation.algorithm, Algorithm::Parallel);
        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_seed_from_yaml() {
        let yaml = "simulation:\n  seed: [\"0,0\", \"-1,0\", \"1,0\"]\n";
        let config = Config::from_yaml(yaml).unwrap();
        let seed = config.seed_pattern().unwrap();
        assert_eq!(seed.cells, vec![Coord::new(0, 0), Coord::new(-1, 0), Coord::new(1, 0)]);
    }

    #[test]
    fn test_malformed_seed_is_rejected() {
        let yaml = "simulation:\n  seed: [\"0,0\", \"1;1\"]\n";
        assert!(matches!(Config::from_yaml(yaml), Err(Error::MalformedKey(_))));
    }

    #[test]
    fn test_seed_outside_bounds_is_rejected() {
        let yaml = "simulation:\n  bounds: {min_x: 0, min_y: 0, max_x: 1, max_y: 1}\n";
        assert!(matches!(Config::from_yaml(yaml), Err(Error::OutOfBounds(_))));
    }

    #[test]
    fn test_out_of_range_values() {
        assert!(matches!(
            Config::from_yaml("simulation:\n  fps: 0\n"),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            Config::from_yaml("display:\n  cell_size: 0.5\n"),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(Config::from_yaml("display: [1, 2]"), Err(Error::Yaml(_))));
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut config = Config::default();
        config.simulation.bounds = Some(Bounds::new(-50, -50, 50, 50));
        config.simulation.seed = Some(Pattern::glider().to_keys());
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
    }
}
