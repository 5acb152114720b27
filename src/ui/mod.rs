mod button;
mod slider;

pub use button::Button;
pub use slider::Slider;

use macroquad::prelude::screen_width;

/// Board dimensions in cells, fixed at startup
pub const BOARD_WIDTH: usize = 30;
pub const BOARD_HEIGHT: usize = 30;

pub const CELL_SIZE: f32 = 20.0;
pub const PANEL_WIDTH: f32 = 220.0;
pub const BUTTON_HEIGHT: f32 = 36.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the board area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Create control panel buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x() + 10.0;
    let width = PANEL_WIDTH - 20.0;
    vec![
        Button::new(px, 110.0, width, BUTTON_HEIGHT, "Start/Stop"),
        Button::new(px, 156.0, width, BUTTON_HEIGHT, "Generate pattern"),
        Button::new(px, 202.0, width, BUTTON_HEIGHT, "Reset canvas"),
    ]
}
