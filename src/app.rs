/*
 * Application Module
 *
 * This module defines the main application model for the countdown window.
 * The model owns the snow field and drives it exactly once per frame from
 * `update`, handing it the frame timestamp, the window size, the days
 * remaining and the snow switch. The resulting segments are kept on the
 * model for `view` to stroke.
 */

use std::sync::{Mutex, PoisonError};

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::config::Config;
use crate::debug::DebugInfo;
use crate::field::{Bounds, SnowField};
use crate::input;
use crate::params::{HostParams, ParamsError};
use crate::renderer;
use crate::shape::LineSegment;
use crate::ui;

// nannou's model function can't capture, so the config and the field built from it are handed over here
static LAUNCH: Mutex<Option<(Config, SnowField)>> = Mutex::new(None);

pub struct Model {
    pub field: SnowField,
    pub params: HostParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub background: Rgb<u8>,
    // Segments produced by the last field step, in surface-local coordinates
    pub segments: Vec<LineSegment>,
}

// Start the nannou event loop with `config`. Fails before opening a window if the field params are invalid.
pub fn run(config: Config) -> Result<(), ParamsError> {
    let field = build_field(&config)?;
    *LAUNCH.lock().unwrap_or_else(PoisonError::into_inner) = Some((config, field));
    nannou::app(model).update(update).run();
    Ok(())
}

// Create the snow field described by `config`, seeded if it asks for a fixed seed
pub fn build_field(config: &Config) -> Result<SnowField, ParamsError> {
    match config.seed {
        Some(seed) => SnowField::seeded(config.field.clone(), seed),
        None => SnowField::from_entropy(config.field.clone()),
    }
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let (config, field) = LAUNCH
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
        .expect("app::run must build the snow field before the model");

    let window_id = app
        .new_window()
        .title("Christmas Countdown")
        .size(480, 860)
        .view(renderer::view)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .expect("Failed to create the countdown window");

    let window = app
        .window(window_id)
        .expect("Countdown window closed before it could be set up");
    let egui = Egui::from_window(&window);

    tracing::info!(
        snow = config.snow_enabled,
        days_remaining = config.days_remaining,
        seed = ?config.seed,
        "Countdown window ready"
    );

    let [r, g, b] = config.background;

    Model {
        field,
        params: HostParams::new(config.snow_enabled, config.days_remaining, config.show_debug, config.field),
        egui,
        debug_info: DebugInfo::default(),
        background: rgb(r, g, b),
        segments: Vec::new(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let (should_reset_field, changes) = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if changes.field_changed {
        apply_field_params(model);
    }

    if should_reset_field {
        model.field.reset();
        tracing::debug!("Snow field reset from UI");
    }

    let window_rect = app.window_rect();
    let bounds = Bounds::new(window_rect.w(), window_rect.h());

    model.segments = model.field.frame(
        update.since_start,
        bounds,
        model.params.days_remaining,
        model.params.snow_enabled,
    );

    model.debug_info.field = model.field.stats();
    model.debug_info.segments_drawn = model.segments.len();
}

// Push edited tuning into the field, rolling the UI back if it's rejected
fn apply_field_params(model: &mut Model) {
    match model.field.set_params(model.params.field.clone()) {
        Ok(()) => tracing::debug!(params = ?model.params.field, "Snow tuning updated"),
        Err(error) => {
            tracing::warn!("Rejected snow tuning: {error}");
            model.params.revert_field();
        }
    }
}
