/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It provides controls for the snow overlay and its tuning.
 * Parameter change detection is handled by the HostParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{FieldParams, HostParams, ParamChanges};

// Update the UI and return whether the field should be reset, plus what changed
pub fn update_ui(egui: &mut Egui, params: &mut HostParams, debug_info: &DebugInfo) -> (bool, ParamChanges) {
    let mut should_reset_field = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Snow Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.checkbox(&mut params.snow_enabled, "Snow");
            ui.add(egui::Slider::new(&mut params.days_remaining, HostParams::get_days_range()).text("Days Remaining"));

            if ui.button("Reset Snow").clicked() {
                should_reset_field = true;
            }

            ui.collapsing("Tuning", |ui| {
                let field = &mut params.field;
                ui.add(egui::Slider::new(&mut field.max_population, FieldParams::get_max_population_range()).text("Population Cap"));
                ui.add(egui::Slider::new(&mut field.max_step_change, FieldParams::get_max_step_change_range()).text("Flakes Per Frame"));
                ui.add(egui::Slider::new(&mut field.size_multiplier, FieldParams::get_size_multiplier_range()).text("Flake Size"));
                ui.add(egui::Slider::new(&mut field.min_speed_y, FieldParams::get_speed_range()).text("Min Fall Speed"));
                ui.add(egui::Slider::new(&mut field.max_speed_y, FieldParams::get_speed_range()).text("Max Fall Speed"));

                ui.separator();

                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Flakes: {} / {}", debug_info.field.live, debug_info.field.target));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
        });

    (should_reset_field, params.detect_changes())
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    let lines = debug_info.lines();

    // Create a background panel in the top-right corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.right() - panel_width + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Text is centred on its position, so push it right by roughly half its width
        draw.text(text)
            .x_y(text_x + 80.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
