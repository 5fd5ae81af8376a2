mod button;

pub use button::Button;

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Width of the grid area left of the panel
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn grid_area_height() -> f32 {
    screen_height()
}

/// What a panel button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    PlayPause,
    Step,
    Clear,
    Random,
}

/// Panel buttons, laid out top to bottom
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    [
        (Action::PlayPause, "Play/Pause"),
        (Action::Step, "Step"),
        (Action::Clear, "Clear"),
        (Action::Random, "Random"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (action, label))| {
        Button::new(px, 20.0 + i as f32 * 50.0, PANEL_WIDTH, BUTTON_HEIGHT, label, action)
    })
    .collect()
}
