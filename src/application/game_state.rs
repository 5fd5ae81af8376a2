use crate::config::Config;
use crate::domain::{Coord, Delta, Engine};
use crate::error::Result;

use super::{Damage, Painter, Scheduler, Viewport};

/// Share of cells alive after "Random"
const RANDOM_DENSITY: f64 = 0.3;

/// GameState orchestrates the simulation.
/// This is the application layer that ties the engine to the frame loop.
pub struct GameState {
    pub engine: Engine,
    pub scheduler: Scheduler,
    pub viewport: Viewport,
    pub damage: Damage,
    pub last_step_time_ms: f32,
    pub last_render_time_ms: f32,
    default_cell_size: f32,
}

impl GameState {
    /// Unbounded, empty simulation in a window of the given size
    pub fn new(width: f32, height: f32, cell_size: f32) -> Self {
        Self {
            engine: Engine::new(),
            scheduler: Scheduler::default(),
            viewport: Viewport::new(width, height, cell_size),
            damage: Damage::Full,
            last_step_time_ms: 0.0,
            last_render_time_ms: 0.0,
            default_cell_size: cell_size,
        }
    }

    /// Build and seed a simulation from config
    pub fn from_config(config: &Config, width: f32, height: f32) -> Result<Self> {
        let mut engine = Engine::new().with_algorithm(config.simulation.algorithm);
        if let Some(bounds) = config.simulation.bounds {
            engine = engine.with_bounds(bounds);
        }
        let seed = config.seed_pattern()?;
        engine.seed(&seed)?;
        log::info!("seeded {} live cells ({})", engine.population(), seed.name);

        let mut state = Self::new(width, height, config.display.cell_size);
        state.engine = engine;
        state.scheduler = Scheduler::new(config.simulation.fps).with_running(config.simulation.running);
        Ok(state)
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.scheduler.toggle();
        log::info!("simulation {}", if self.is_running() { "running" } else { "paused" });
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.scheduler.adjust_rate(delta);
        self
    }

    /// Switch between serial and parallel stepping
    pub fn cycle_algorithm(mut self) -> Self {
        let next = self.engine.algorithm().next();
        self.engine.set_algorithm(next);
        log::info!("stepping with {}", next.name());
        self
    }

    /// Kill every cell and pause
    pub fn clear(mut self) -> Self {
        let delta = self.engine.clear();
        self.damage.record(&delta);
        self.scheduler.pause();
        self
    }

    /// Fill the visible area with random soup and pause
    pub fn randomize(mut self) -> Self {
        let region = self.viewport.visible_region();
        let delta = self.engine.randomize(region, RANDOM_DENSITY, &mut rand::rng());
        self.damage.record(&delta);
        self.scheduler.pause();
        self
    }

    /// Advance exactly one generation, running or not
    pub fn step_once(mut self) -> Self {
        self.advance();
        self
    }

    /// Reset pan and zoom
    pub fn reset_view(mut self) -> Self {
        self.viewport.reset(self.default_cell_size);
        self.damage.invalidate();
        self
    }

    /// Toggle the cell under a pixel
    pub fn toggle_at(&mut self, screen_x: f32, screen_y: f32) -> Result<Delta> {
        let coord = self.viewport.screen_to_cell(screen_x, screen_y);
        self.toggle_cell(coord)
    }

    pub fn toggle_cell(&mut self, coord: Coord) -> Result<Delta> {
        let delta = self.engine.toggle_cell(coord)?;
        self.damage.record(&delta);
        Ok(delta)
    }

    /// Track the window size; a change forces a full repaint
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.viewport.resize(width, height) {
            log::debug!("viewport resized to {width}x{height}");
            self.damage.invalidate();
        }
    }

    pub fn zoom(&mut self, factor: f32) {
        let changed = if factor >= 1.0 {
            self.viewport.zoom_in(factor)
        } else {
            self.viewport.zoom_out(1.0 / factor)
        };
        if changed {
            log::debug!("cell size now {}", self.viewport.cell_size);
            self.damage.invalidate();
        }
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        if dx != 0.0 || dy != 0.0 {
            self.viewport.pan(dx, dy);
            self.damage.invalidate();
        }
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if self.scheduler.tick(delta_time) {
            self.advance();
        }
        self
    }

    fn advance(&mut self) {
        let start = std::time::Instant::now();
        let delta = self.engine.step();
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.damage.record(&delta);
    }

    /// Paint whatever changed since the last call
    pub fn present(&mut self, painter: &mut dyn Painter) -> bool {
        self.damage.flush(painter, self.engine.cells(), &self.viewport)
    }
}
