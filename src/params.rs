/*
 * Field Parameters Module
 *
 * This module defines the FieldParams struct that contains all the tunable
 * constants of the snowfall simulation. The defaults reproduce the look of the
 * countdown backdrop; the UI and the config file may adjust them. It also
 * provides change detection so the host only pushes new values into the
 * simulator when something actually moved.
 */

use serde::Deserialize;
use std::ops::RangeInclusive;
use thiserror::Error;

// Why a set of parameters was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("{name} range is inverted or empty: {min} > {max}")]
    InvertedRange { name: &'static str, min: f32, max: f32 },

    #[error("{name} must be a positive, finite number (got {value})")]
    NotPositive { name: &'static str, value: f32 },

    #[error("{name} must be a finite, non-negative number (got {value})")]
    Negative { name: &'static str, value: f32 },

    #[error("max_step_change must be at least 1")]
    ZeroStepChange,
}

// Tunable constants of the snowfall simulation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldParams {
    // Upper clamp applied to every target population
    pub max_population: usize,
    // Most flakes added or evicted by one capped reconciliation step
    pub max_step_change: usize,
    // Longest time step (seconds) a single frame may integrate
    pub max_frame_dt: f32,
    // New flakes start up to this many pixels above the top edge
    pub spawn_depth: f32,
    pub min_radius_base: f32,
    pub max_radius_base: f32,
    pub size_multiplier: f32,
    // Downward drift, px/s
    pub min_speed_y: f32,
    pub max_speed_y: f32,
    // Lateral drift is drawn from [-max_side_speed, max_side_speed] px/s
    pub max_side_speed: f32,
    // Spin is drawn from [-max_spin, max_spin] deg/s
    pub max_spin: f32,
    pub stroke_width: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            max_population: 140,
            max_step_change: 6,
            max_frame_dt: 0.05,
            spawn_depth: 200.0,
            min_radius_base: 7.0,
            max_radius_base: 12.0,
            size_multiplier: 1.25,
            min_speed_y: 28.0,
            max_speed_y: 60.0,
            max_side_speed: 10.0,
            max_spin: 6.0,
            stroke_width: 1.2,
        }
    }
}

impl FieldParams {
    // Effective radius bounds once the size multiplier is applied
    pub fn min_radius(&self) -> f32 {
        self.min_radius_base * self.size_multiplier
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius_base * self.size_multiplier
    }

    pub fn radius_range(&self) -> RangeInclusive<f32> {
        self.min_radius()..=self.max_radius()
    }

    // Check that every range can be sampled and every speed moves flakes downward
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.max_step_change == 0 {
            return Err(ParamsError::ZeroStepChange);
        }

        positive("max_frame_dt", self.max_frame_dt)?;
        positive("min_radius_base", self.min_radius_base)?;
        positive("size_multiplier", self.size_multiplier)?;
        positive("min_speed_y", self.min_speed_y)?;
        positive("stroke_width", self.stroke_width)?;
        positive("spawn_depth", self.spawn_depth)?;

        non_negative("max_side_speed", self.max_side_speed)?;
        non_negative("max_spin", self.max_spin)?;

        ordered("radius", self.min_radius_base, self.max_radius_base)?;
        ordered("speed_y", self.min_speed_y, self.max_speed_y)?;

        Ok(())
    }

    // Get parameter ranges for UI sliders
    pub fn get_max_population_range() -> RangeInclusive<usize> {
        0..=400
    }

    pub fn get_max_step_change_range() -> RangeInclusive<usize> {
        1..=50
    }

    pub fn get_size_multiplier_range() -> RangeInclusive<f32> {
        0.25..=4.0
    }

    pub fn get_speed_range() -> RangeInclusive<f32> {
        1.0..=300.0
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ParamsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParamsError::NotPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ParamsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ParamsError::Negative { name, value })
    }
}

fn ordered(name: &'static str, min: f32, max: f32) -> Result<(), ParamsError> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(ParamsError::InvertedRange { name, min, max })
    }
}

// Host-side settings the UI edits every frame, with snapshot based change detection
pub struct HostParams {
    pub snow_enabled: bool,
    pub days_remaining: i64,
    pub show_debug: bool,
    pub field: FieldParams,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    snow_enabled: bool,
    days_remaining: i64,
    show_debug: bool,
    field: FieldParams,
}

// What changed between the snapshot and now
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParamChanges {
    pub field_changed: bool,
    pub any_changed: bool,
}

impl HostParams {
    pub fn new(snow_enabled: bool, days_remaining: i64, show_debug: bool, field: FieldParams) -> Self {
        Self {
            snow_enabled,
            days_remaining,
            show_debug,
            field,
            previous_values: None,
        }
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            snow_enabled: self.snow_enabled,
            days_remaining: self.days_remaining,
            show_debug: self.show_debug,
            field: self.field.clone(),
        });
    }

    // Check if any parameters have changed since the last snapshot
    pub fn detect_changes(&self) -> ParamChanges {
        let Some(prev) = &self.previous_values else {
            return ParamChanges::default();
        };

        let field_changed = self.field != prev.field;
        let any_changed = field_changed
            || self.snow_enabled != prev.snow_enabled
            || self.days_remaining != prev.days_remaining
            || self.show_debug != prev.show_debug;

        ParamChanges { field_changed, any_changed }
    }

    // Put the field params back to the snapshot, used when an edit fails validation
    pub fn revert_field(&mut self) {
        if let Some(prev) = &self.previous_values {
            self.field = prev.field.clone();
        }
    }

    pub fn get_days_range() -> RangeInclusive<i64> {
        0..=366
    }
}
