/*
 * Frame Clock Module
 *
 * Turns the host's monotonic frame timestamps into simulation time steps.
 * The first tick only records a baseline, and every step is clamped so a
 * stall (window hidden, app suspended) cannot fling flakes across the screen.
 */

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FrameClock {
    last_frame: Option<Duration>,
    max_step: Duration,
}

impl FrameClock {
    pub fn new(max_step_secs: f32) -> Self {
        Self {
            last_frame: None,
            max_step: Duration::try_from_secs_f32(max_step_secs).unwrap_or(Duration::ZERO),
        }
    }

    // Seconds elapsed since the previous tick, at most `max_step`
    pub fn tick(&mut self, now: Duration) -> f32 {
        let step = match self.last_frame {
            // Out of order timestamps saturate to a zero step
            Some(last) => now.saturating_sub(last).min(self.max_step),
            None => Duration::ZERO,
        };
        self.last_frame = Some(now);
        step.as_secs_f32()
    }

    // Forget the baseline so the next tick starts from zero again
    pub fn reset(&mut self) {
        self.last_frame = None;
    }

    pub fn is_started(&self) -> bool {
        self.last_frame.is_some()
    }

    pub fn set_max_step(&mut self, max_step_secs: f32) {
        self.max_step = Duration::try_from_secs_f32(max_step_secs).unwrap_or(Duration::ZERO);
    }
}
