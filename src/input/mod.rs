use macroquad::prelude::*;
use crate::application::Scheduler;
use crate::rendering::output_size;

/// Toggle the clicked cell.
///
/// The pointer position is mapped from output pixels to grid coordinates by
/// dividing out the cell scale; clicks landing outside the square output
/// area (or outside the grid after flooring) are ignored, so the grid itself
/// never sees an out-of-range coordinate.
pub fn handle_mouse(scheduler: &mut Scheduler) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }

    let (mouse_x, mouse_y) = mouse_position();
    let size = scheduler.grid.size();
    let scale = output_size() / size as f32;

    let x = (mouse_x / scale).floor() as i32;
    let y = (mouse_y / scale).floor() as i32;
    if x < 0 || y < 0 || x >= size as i32 || y >= size as i32 {
        return;
    }

    scheduler.grid.toggle(x as usize, y as usize);
}

/// Space toggles pause, Right arrow single-steps (while paused).
pub fn handle_keyboard(scheduler: &mut Scheduler) {
    if is_key_pressed(KeyCode::Space) {
        scheduler.toggle_paused();
    }
    if is_key_pressed(KeyCode::Right) {
        scheduler.single_step();
    }
}
