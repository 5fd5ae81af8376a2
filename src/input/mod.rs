use macroquad::prelude::*;

use crate::application::GameState;
use crate::ui::{Action, Button, grid_area_width};

const ZOOM_STEP: f32 = 1.25;
const PAN_STEP: f32 = 20.0;

/// Zoom with the mouse wheel
pub fn handle_zoom(state: &mut GameState) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        state.zoom(ZOOM_STEP);
    } else if wheel < 0.0 {
        state.zoom(1.0 / ZOOM_STEP);
    }
}

/// Middle-button drag state
#[derive(Default)]
pub struct DragPan {
    last: Option<(f32, f32)>,
}

impl DragPan {
    pub fn update(&mut self, state: &mut GameState, mouse_pos: (f32, f32)) {
        if is_mouse_button_down(MouseButton::Middle) {
            if let Some(last) = self.last {
                state.pan(mouse_pos.0 - last.0, mouse_pos.1 - last.1);
            }
            self.last = Some(mouse_pos);
        } else {
            self.last = None;
        }
    }
}

/// Left click on the grid toggles the cell under the cursor
pub fn handle_cell_toggle(state: &mut GameState, mouse_pos: (f32, f32)) {
    if mouse_pos.0 >= grid_area_width() || !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    if let Err(e) = state.toggle_at(mouse_pos.0, mouse_pos.1) {
        log::warn!("toggle rejected: {}", e);
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 8] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::N, GameState::step_once),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
        (KeyCode::H, GameState::reset_view),
        (KeyCode::A, GameState::cycle_algorithm),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    let mut state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    if is_key_pressed(KeyCode::Equal) || is_key_pressed(KeyCode::KpAdd) {
        state.zoom(ZOOM_STEP);
    }
    if is_key_pressed(KeyCode::Minus) || is_key_pressed(KeyCode::KpSubtract) {
        state.zoom(1.0 / ZOOM_STEP);
    }

    let pan = [
        (KeyCode::Left, (PAN_STEP, 0.0)),
        (KeyCode::Right, (-PAN_STEP, 0.0)),
        (KeyCode::PageUp, (0.0, PAN_STEP)),
        (KeyCode::PageDown, (0.0, -PAN_STEP)),
    ];
    for (key, (dx, dy)) in pan {
        if is_key_down(key) {
            state.pan(dx, dy);
        }
    }

    state
}

/// Process button clicks functionally
pub fn process_button_clicks(state: GameState, buttons: &[Button], mouse_pos: (f32, f32)) -> GameState {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .fold(state, |s, btn| match btn.action {
            Action::PlayPause => s.toggle_running(),
            Action::Step => s.step_once(),
            Action::Clear => s.clear(),
            Action::Random => s.randomize(),
        })
}
