use macroquad::prelude::*;
// `::` disambiguates from the `rand` re-export in macroquad's prelude
use ::rand::rng;

use crate::application::GameState;
use crate::domain::Cell;
use crate::ui::{CELL_SIZE, grid_area_width};

/// Board coordinate under the pointer this frame, or None when the pointer
/// is over the panel or outside the window
pub fn hovered_cell(mouse_pos: (f32, f32)) -> Option<(i32, i32)> {
    if mouse_pos.0 < 0.0 || mouse_pos.0 >= grid_area_width() || mouse_pos.1 < 0.0 {
        return None;
    }
    Some((
        (mouse_pos.0 / CELL_SIZE) as i32,
        (mouse_pos.1 / CELL_SIZE) as i32,
    ))
}

/// Handle mouse painting on the board.
/// Left button paints, right button erases. Edits are allowed whether the
/// simulation is running or paused.
pub fn handle_mouse_paint(state: &mut GameState, mouse_pos: (f32, f32)) {
    let target = hovered_cell(mouse_pos);

    if is_mouse_button_down(MouseButton::Left) {
        state.paint(target, Cell::Alive);
    } else if is_mouse_button_down(MouseButton::Right) {
        state.paint(target, Cell::Dead);
    }
}

/// Process keyboard input
pub fn process_keyboard_input(state: GameState, show_panel: &mut bool) -> GameState {
    let mut state = state;

    if is_key_pressed(KeyCode::Space) {
        state = state.toggle_running();
    }
    if is_key_pressed(KeyCode::R) {
        state = state.randomize(&mut rng());
    }
    if is_key_pressed(KeyCode::C) {
        *show_panel = !*show_panel;
    }

    state
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: GameState,
    buttons: &[crate::ui::Button],
    mouse_pos: (f32, f32),
) -> GameState {
    buttons.iter().enumerate().fold(state, |s, (idx, btn)| {
        if !btn.is_clicked(mouse_pos) {
            return s;
        }
        match idx {
            0 => s.toggle_running(),
            1 => s.randomize(&mut rng()),
            2 => s.clear(),
            _ => s,
        }
    })
}
