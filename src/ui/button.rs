use macroquad::prelude::*;

use super::Action;

/// Panel button with hover highlight
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    pub action: Action,
}

const COLOR: Color = Color::new(0.27, 0.51, 0.71, 1.0);
const HOVER_COLOR: Color = Color::new(0.39, 0.58, 0.93, 1.0);

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>, action: Action) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            action,
        }
    }

    pub fn contains(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.contains(mouse_pos) { HOVER_COLOR } else { COLOR };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text_size = measure_text(&self.text, None, 20, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
