/*
 * Snowfall Countdown - Module Definitions
 *
 * This file defines the module structure for the countdown backdrop.
 * The simulation modules (flake, density, clock, shape, field, params) have
 * no windowing dependencies beyond nannou's math and colour types; the host
 * modules (app, renderer, ui, input, debug) wire them into a nannou window.
 */

// Re-export key components for easier access
pub use app::Model;
pub use config::Config;
pub use density::{alpha_multiplier, target_population, DensityBucket};
pub use field::{Bounds, FieldStats, SnowField};
pub use flake::Snowflake;
pub use params::{FieldParams, ParamsError};
pub use shape::{LineCap, LineSegment};

// Define modules
pub mod app;
pub mod clock;
pub mod config;
pub mod debug;
pub mod density;
pub mod field;
pub mod flake;
pub mod input;
pub mod params;
pub mod renderer;
pub mod shape;
pub mod ui;
