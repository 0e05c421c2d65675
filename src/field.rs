/*
 * Snow Field Module
 *
 * The particle field simulator. The host calls it once per display frame
 * with the frame timestamp, the surface size, the density driver and the
 * enabled flag; it answers with the line segments to stroke for that frame.
 *
 * Each frame runs the same pipeline:
 * 1. Reconcile the population toward the target, at most a few flakes per frame
 * 2. Integrate every flake (drift, spin, horizontal wraparound)
 * 3. Prune flakes that fell below the bottom edge
 * 4. Backfill the population back up to the target
 * 5. Emit the segments for every live flake
 *
 * Flakes live in insertion order so shrinking the population evicts the
 * oldest ones first.
 */

use std::collections::VecDeque;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock::FrameClock;
use crate::density::{self, DensityBucket};
use crate::flake::Snowflake;
use crate::params::{FieldParams, ParamsError};
use crate::shape::{self, LineSegment, SEGMENTS_PER_FLAKE};

// Size of the surface the flakes are laid out in, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    // Nothing can be laid out on an empty or nonsensical surface
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

// Snapshot of the field after the last frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStats {
    pub live: usize,
    pub target: usize,
    pub bucket: Option<DensityBucket>,
    pub alpha_multiplier: f32,
    pub spawned: usize,
    pub evicted: usize,
    pub fallen: usize,
    pub dt: f32,
}

impl Default for FieldStats {
    fn default() -> Self {
        Self {
            live: 0,
            target: 0,
            bucket: None,
            alpha_multiplier: density::alpha_multiplier(0),
            spawned: 0,
            evicted: 0,
            fallen: 0,
            dt: 0.0,
        }
    }
}

pub struct SnowField<R = StdRng> {
    flakes: VecDeque<Snowflake>,
    params: FieldParams,
    clock: FrameClock,
    rng: R,
    // Cached target, only recomputed when the driver changes bucket
    bucket: Option<DensityBucket>,
    target: usize,
    stats: FieldStats,
}

impl SnowField<StdRng> {
    pub fn seeded(params: FieldParams, seed: u64) -> Result<Self, ParamsError> {
        Self::new(params, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(params: FieldParams) -> Result<Self, ParamsError> {
        Self::new(params, StdRng::from_entropy())
    }
}

impl<R: Rng> SnowField<R> {
    // Params are checked up front so spawning can never sample an empty range
    pub fn new(params: FieldParams, rng: R) -> Result<Self, ParamsError> {
        params.validate()?;
        let clock = FrameClock::new(params.max_frame_dt);
        Ok(Self {
            flakes: VecDeque::with_capacity(params.max_population),
            params,
            clock,
            rng,
            bucket: None,
            target: 0,
            stats: FieldStats::default(),
        })
    }

    // Start from a known set of flakes, oldest first, e.g. to replay a scene
    pub fn with_flakes(mut self, flakes: impl IntoIterator<Item = Snowflake>) -> Self {
        self.flakes.extend(flakes);
        self
    }

    // Host entry point: derive the time step from a monotonic frame timestamp
    pub fn frame(
        &mut self,
        timestamp: Duration,
        bounds: Bounds,
        driver: i64,
        enabled: bool,
    ) -> Vec<LineSegment> {
        if !enabled {
            return self.advance(0.0, bounds, driver, false);
        }
        let dt = self.clock.tick(timestamp);
        self.advance(dt, bounds, driver, true)
    }

    // Run one simulation step of `dt` seconds and return the frame's draw commands
    pub fn advance(&mut self, dt: f32, bounds: Bounds, driver: i64, enabled: bool) -> Vec<LineSegment> {
        if !enabled {
            if !self.flakes.is_empty() || self.clock.is_started() {
                tracing::debug!("Snow disabled, dropping {} flakes", self.flakes.len());
            }
            self.reset();
            return Vec::new();
        }

        if bounds.is_degenerate() {
            if !self.flakes.is_empty() {
                tracing::debug!(?bounds, "Degenerate surface, clearing the field");
            }
            self.flakes.clear();
            self.stats = FieldStats::default();
            return Vec::new();
        }

        let dt = self.clamp_dt(dt);
        self.update_target(driver);

        let (spawned, evicted) = self.reconcile(bounds.width);

        for flake in &mut self.flakes {
            flake.update(dt, bounds.width);
        }

        let before_prune = self.flakes.len();
        self.flakes.retain(|flake| !flake.has_fallen(bounds.height));
        let fallen = before_prune - self.flakes.len();

        let backfilled = self.backfill(bounds.width);

        let alpha_multiplier = density::alpha_multiplier(self.target);
        self.stats = FieldStats {
            live: self.flakes.len(),
            target: self.target,
            bucket: self.bucket,
            alpha_multiplier,
            spawned: spawned + backfilled,
            evicted,
            fallen,
            dt,
        };
        tracing::trace!(stats = ?self.stats, "Snow frame");

        self.render(alpha_multiplier)
    }

    // Drop every flake and the clock baseline
    pub fn reset(&mut self) {
        self.flakes.clear();
        self.clock.reset();
        self.stats = FieldStats::default();
    }

    pub fn flakes(&self) -> impl ExactSizeIterator<Item = &Snowflake> {
        self.flakes.iter()
    }

    pub fn len(&self) -> usize {
        self.flakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flakes.is_empty()
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn stats(&self) -> FieldStats {
        self.stats
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    // Swap in new tuning. Live flakes keep their spawn-time properties.
    pub fn set_params(&mut self, params: FieldParams) -> Result<(), ParamsError> {
        params.validate()?;
        self.clock.set_max_step(params.max_frame_dt);
        self.params = params;
        // Force the target to be recomputed against the new cap
        self.bucket = None;
        Ok(())
    }

    #[cfg(test)]
    fn flakes_mut(&mut self) -> impl Iterator<Item = &mut Snowflake> {
        self.flakes.iter_mut()
    }

    fn clamp_dt(&self, dt: f32) -> f32 {
        if dt.is_nan() {
            0.0
        } else {
            dt.clamp(0.0, self.params.max_frame_dt)
        }
    }

    fn update_target(&mut self, driver: i64) {
        let bucket = DensityBucket::from_driver(driver);
        if self.bucket == Some(bucket) {
            return;
        }

        let target = bucket.population().min(self.params.max_population);
        tracing::debug!(%bucket, from = self.target, to = target, "Snow density changed");
        self.bucket = Some(bucket);
        self.target = target;
    }

    // Move the population toward the target by at most `max_step_change` flakes.
    // Returns (spawned, evicted).
    fn reconcile(&mut self, width: f32) -> (usize, usize) {
        let live = self.flakes.len();
        let cap = self.params.max_step_change;

        if live < self.target {
            let count = (self.target - live).min(cap);
            self.spawn(count, width);
            (count, 0)
        } else if live > self.target {
            let count = (live - self.target).min(cap);
            self.flakes.drain(..count);
            (0, count)
        } else {
            (0, 0)
        }
    }

    // Top the population back up after pruning, uncapped
    fn backfill(&mut self, width: f32) -> usize {
        let missing = self.target.saturating_sub(self.flakes.len());
        self.spawn(missing, width);
        missing
    }

    fn spawn(&mut self, count: usize, width: f32) {
        for _ in 0..count {
            let flake = Snowflake::spawn(&mut self.rng, width, &self.params);
            self.flakes.push_back(flake);
        }
    }

    fn render(&self, alpha_multiplier: f32) -> Vec<LineSegment> {
        let mut segments = Vec::with_capacity(self.flakes.len() * SEGMENTS_PER_FLAKE);
        for flake in &self.flakes {
            shape::push_flake_segments(flake, alpha_multiplier, self.params.stroke_width, &mut segments);
        }
        segments
    }
}
