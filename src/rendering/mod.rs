use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::Grid;
use crate::ui::{Button, PANEL_WIDTH, Slider, CELL_SIZE, panel_x};

/// Draw the board. Dead cells are blank canvas, alive cells are inked.
pub fn draw_board(grid: &Grid) {
    let grid_line_color = Color::from_rgba(205, 205, 205, 255);

    for (x, y, cell) in grid.iter_cells() {
        let px = x as f32 * CELL_SIZE;
        let py = y as f32 * CELL_SIZE;

        let color = if cell.is_alive() { BLACK } else { WHITE };
        draw_rectangle(px, py, CELL_SIZE, CELL_SIZE, color);
        draw_rectangle_lines(px, py, CELL_SIZE, CELL_SIZE, 1.0, grid_line_color);
    }
}

/// Draw the control panel with slider, buttons, help text, and status
pub fn draw_controls(
    state: &GameState,
    buttons: &[Button],
    slider: &Slider,
    mouse_pos: (f32, f32),
) {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(235, 235, 235, 255),
    );

    let px = panel_x() + 10.0;
    draw_text("Control Panel", px, 26.0, 20.0, DARKGRAY);

    slider.draw(mouse_pos);
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let help = [
        "Press C to hide/show this panel",
        "Press SPACE to start/stop the game",
        "Press R to generate a pattern",
        "Left click to paint",
        "Right click to erase",
    ];
    help.iter().enumerate().for_each(|(i, line)| {
        draw_text(line, px, 268.0 + i as f32 * 18.0, 14.0, GRAY);
    });

    let (status, status_color) = if state.clock.is_running() {
        ("Running", DARKGREEN)
    } else {
        ("Paused", Color::from_rgba(200, 120, 0, 255))
    };
    draw_text(&format!("Status: {status}"), px, 388.0, 16.0, status_color);
    draw_text(
        &format!("Generation: {}", state.generation),
        px,
        408.0,
        16.0,
        DARKGRAY,
    );
    draw_text(
        &format!("Rule: {}", state.rule.name()),
        px,
        428.0,
        16.0,
        DARKGRAY,
    );
}
