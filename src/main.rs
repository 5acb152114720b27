use std::time::Duration;

use macroquad::prelude::*;

use life_canvas::{
    GameState,
    input, rendering,
    ui::{self, Slider},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: (ui::BOARD_WIDTH as f32 * ui::CELL_SIZE + ui::PANEL_WIDTH) as i32,
        window_height: (ui::BOARD_HEIGHT as f32 * ui::CELL_SIZE) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut state = GameState::new(ui::BOARD_WIDTH, ui::BOARD_HEIGHT);
    let mut show_panel = true;

    let mut rate_slider = Slider::new(
        ui::panel_x() + 10.0,
        64.0,
        ui::PANEL_WIDTH - 20.0,
        "Update rate",
        0.0,
        1.0,
        0.0,
    );

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        if show_panel {
            if rate_slider.update(mouse_pos) {
                state.set_interval(Duration::from_secs_f32(rate_slider.value()));
            }
            state = input::process_button_clicks(state, &buttons, mouse_pos);
        }
        state = input::process_keyboard_input(state, &mut show_panel);

        // Paint before advancing, so edits made this frame belong to the
        // generation the advance reads.
        input::handle_mouse_paint(&mut state, mouse_pos);
        state = state.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(LIGHTGRAY);
        rendering::draw_board(&state.grid);
        if show_panel {
            rendering::draw_controls(&state, &buttons, &rate_slider, mouse_pos);
        }

        next_frame().await;
    }
}
