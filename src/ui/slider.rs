use macroquad::prelude::*;

const TRACK_HEIGHT: f32 = 6.0;
const HANDLE_RADIUS: f32 = 8.0;

/// Horizontal drag slider UI component
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    label: String,
    min: f32,
    max: f32,
    value: f32,
    dragging: bool,
}

impl Slider {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        label: impl Into<String>,
        min: f32,
        max: f32,
        initial: f32,
    ) -> Self {
        Self {
            x,
            y,
            width,
            label: label.into(),
            min,
            max,
            value: initial.clamp(min, max),
            dragging: false,
        }
    }

    /// Current slider value
    pub fn value(&self) -> f32 {
        self.value
    }

    fn handle_x(&self) -> f32 {
        self.x + (self.value - self.min) / (self.max - self.min) * self.width
    }

    fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x - HANDLE_RADIUS
            && mouse_pos.0 <= self.x + self.width + HANDLE_RADIUS
            && mouse_pos.1 >= self.y - HANDLE_RADIUS
            && mouse_pos.1 <= self.y + HANDLE_RADIUS
    }

    /// Handle interaction and return true if the value changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if is_mouse_button_pressed(MouseButton::Left) && self.is_hovered(mouse_pos) {
            self.dragging = true;
        }
        if !is_mouse_button_down(MouseButton::Left) {
            self.dragging = false;
        }

        if self.dragging {
            let t = ((mouse_pos.0 - self.x) / self.width).clamp(0.0, 1.0);
            let new_value = self.min + t * (self.max - self.min);
            if new_value != self.value {
                self.value = new_value;
                return true;
            }
        }

        false
    }

    /// Draw slider with hover effect on the handle
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 14.0, 14.0, DARKGRAY);

        // Track, with the portion left of the handle filled in
        draw_rectangle(
            self.x,
            self.y - TRACK_HEIGHT / 2.0,
            self.width,
            TRACK_HEIGHT,
            GRAY,
        );
        draw_rectangle(
            self.x,
            self.y - TRACK_HEIGHT / 2.0,
            self.handle_x() - self.x,
            TRACK_HEIGHT,
            Color::from_rgba(70, 130, 180, 255),
        );

        let handle_color = if self.dragging || self.is_hovered(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_circle(self.handle_x(), self.y, HANDLE_RADIUS, handle_color);

        draw_text(
            &format!("{:.2} s", self.value),
            self.x + self.width - 40.0,
            self.y + 22.0,
            14.0,
            DARKGRAY,
        );
    }
}
