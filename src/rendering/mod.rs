use macroquad::prelude::*;

use crate::application::{GameState, Painter, Viewport};
use crate::domain::{Coord, LiveCells};
use crate::ui::{Button, PANEL_WIDTH, panel_x};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Persistent pixel canvas for the grid.
///
/// Cells are painted into a CPU-side image that survives between frames,
/// so a generation only costs the cells that changed. The texture is
/// re-uploaded once per frame when something was painted.
pub struct CanvasPainter {
    image: Image,
    texture: Texture2D,
    dirty: bool,
}

impl CanvasPainter {
    pub fn new(width: u16, height: u16) -> Self {
        let image = Image::gen_image_color(width.max(1), height.max(1), DEAD_COLOR);
        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Nearest);
        Self {
            image,
            texture,
            dirty: false,
        }
    }

    /// Reallocate when the window size no longer matches
    fn fit(&mut self, viewport: &Viewport) {
        let width = viewport.width.max(1.0) as u16;
        let height = viewport.height.max(1.0) as u16;
        if self.image.width != width || self.image.height != height {
            *self = Self::new(width, height);
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let x0 = x.max(0.0) as u32;
        let y0 = y.max(0.0) as u32;
        let x1 = (x + w).min(self.image.width as f32).max(0.0) as u32;
        let y1 = (y + h).min(self.image.height as f32).max(0.0) as u32;
        for py in y0..y1 {
            for px in x0..x1 {
                self.image.set_pixel(px, py, color);
            }
        }
    }

    fn draw_cell(&mut self, coord: Coord, alive: bool, viewport: &Viewport) {
        let size = viewport.cell_size;
        let (x, y) = viewport.cell_to_screen(coord);
        let color = if alive { ALIVE_COLOR } else { DEAD_COLOR };

        if size >= 4.0 {
            // one-pixel grid line on the top and left edge of each cell
            self.fill_rect(x, y, size, 1.0, GRID_LINE_COLOR);
            self.fill_rect(x, y + 1.0, 1.0, size - 1.0, GRID_LINE_COLOR);
            self.fill_rect(x + 1.0, y + 1.0, size - 1.0, size - 1.0, color);
        } else {
            self.fill_rect(x, y, size, size, color);
        }
        self.dirty = true;
    }

    /// Upload pending pixels and blit the canvas
    pub fn draw(&mut self) {
        if self.dirty {
            self.texture.update(&self.image);
            self.dirty = false;
        }
        draw_texture(&self.texture, 0.0, 0.0, WHITE);
    }
}

impl Painter for CanvasPainter {
    fn paint_cell(&mut self, coord: Coord, alive: bool, viewport: &Viewport) {
        self.fit(viewport);
        self.draw_cell(coord, alive, viewport);
    }

    fn repaint(&mut self, cells: &LiveCells, viewport: &Viewport) {
        self.fit(viewport);
        let region = viewport.visible_region();
        for coord in region.iter() {
            self.draw_cell(coord, cells.contains(coord), viewport);
        }
    }
}

/// Draw the control panel with buttons and simulation info
pub fn draw_controls(state: &GameState, buttons: &[Button], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let controls = [
        "Controls:",
        "LMB: Toggle cell",
        "Space: Play/Pause",
        "N: Step",
        "Up/Down: Speed",
        "+/-: Cell size",
        "Arrows: Pan",
        "H: Reset view",
        "A: Algorithm",
    ];
    for (i, text) in controls.iter().enumerate() {
        let (size, color) = if i == 0 { (14.0, WHITE) } else { (12.0, GRAY) };
        draw_text(text, px + 5.0, 240.0 + i as f32 * 14.0, size, color);
    }

    let engine = &state.engine;
    let hovered = state.viewport.screen_to_cell(mouse_pos.0, mouse_pos.1);
    let running = state.is_running();
    let labels = [
        ("Generation:", format!("{}", engine.generation())),
        ("Population:", format_number(engine.population())),
        ("Speed:", format!("{:.0} gen/s", state.scheduler.updates_per_second())),
        ("Step:", format!("{:.2}ms ({})", state.last_step_time_ms, engine.algorithm().name())),
        ("Render:", format!("{:.2}ms | FPS {}", state.last_render_time_ms, get_fps())),
        ("Cell:", format!("{}", hovered)),
        ("Status:", if running { "Running".to_string() } else { "Paused".to_string() }),
    ];
    for (i, (label, value)) in labels.iter().enumerate() {
        let y = 400.0 + i as f32 * 36.0;
        draw_text(label, px + 5.0, y, 16.0, WHITE);
        let color = match *label {
            "Status:" if running => Color::from_rgba(0, 255, 0, 255),
            "Status:" => Color::from_rgba(255, 165, 0, 255),
            _ => Color::from_rgba(180, 180, 180, 255),
        };
        draw_text(value, px + 5.0, y + 16.0, 14.0, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(2_000_000), "2.0M");
    }
}
