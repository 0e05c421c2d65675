/*
 * Input Module
 *
 * Keyboard shortcuts for the countdown window:
 * - S toggles the snow overlay
 * - Up / Down move the countdown by a day, changing snow density
 * - R drops every flake and restarts the field
 * - D toggles the debug overlay
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::params::HostParams;

// Key pressed event handler
pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    // Typing into an egui widget shouldn't also drive the shortcuts
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key {
        Key::S => {
            model.params.snow_enabled = !model.params.snow_enabled;
            tracing::info!(enabled = model.params.snow_enabled, "Snow toggled");
        }
        Key::Up => step_days(&mut model.params, 1),
        Key::Down => step_days(&mut model.params, -1),
        Key::R => {
            model.field.reset();
            tracing::debug!("Snow field reset from keyboard");
        }
        Key::D => model.params.show_debug = !model.params.show_debug,
        _ => {}
    }
}

// Move the countdown by `delta` days, staying inside the slider's range
fn step_days(params: &mut HostParams, delta: i64) {
    let range = HostParams::get_days_range();
    params.days_remaining = (params.days_remaining + delta).clamp(*range.start(), *range.end());
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::FieldParams;

    #[test]
    fn days_stay_in_range() {
        let mut params = HostParams::new(true, 0, false, FieldParams::default());
        step_days(&mut params, -1);
        assert_eq!(params.days_remaining, 0);

        params.days_remaining = 366;
        step_days(&mut params, 1);
        assert_eq!(params.days_remaining, 366);

        step_days(&mut params, -1);
        assert_eq!(params.days_remaining, 365);
    }
}
