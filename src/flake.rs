/*
 * Snowflake Module
 *
 * This module defines the Snowflake struct and its behaviour.
 * Each flake:
 * 1. Spawns somewhere above the visible top edge
 * 2. Drifts down and sideways at a constant speed while spinning
 * 3. Wraps around the left and right edges instead of leaving the field
 * 4. Is considered fallen once it is fully below the bottom edge
 *
 * Coordinates are surface-local pixels with y growing downward.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::FieldParams;

#[derive(Debug, Clone, PartialEq)]
pub struct Snowflake {
    pub position: Point2,
    // Half-length of each of the six branches, fixed at spawn
    pub radius: f32,
    // Downward drift in px/s, always positive
    pub velocity_y: f32,
    // Sideways drift in px/s
    pub velocity_x: f32,
    // Rotation in degrees, kept in [0, 360)
    pub angle: f32,
    // Angular velocity in deg/s
    pub spin: f32,
}

impl Snowflake {
    // Create a flake somewhere along the top of a surface `width` pixels wide
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f32, params: &FieldParams) -> Self {
        let x = rng.gen::<f32>() * width;
        // Sampled from (0, depth] so a new flake never starts on the top edge
        let y = -(1.0 - rng.gen::<f32>()) * params.spawn_depth;

        Self {
            position: pt2(x, y),
            radius: rng.gen_range(params.radius_range()),
            velocity_y: rng.gen_range(params.min_speed_y..=params.max_speed_y),
            velocity_x: symmetric(rng, params.max_side_speed),
            angle: rng.gen::<f32>() * 360.0,
            spin: symmetric(rng, params.max_spin),
        }
    }

    // Advance the flake by `dt` seconds on a surface `width` pixels wide
    pub fn update(&mut self, dt: f32, width: f32) {
        self.position.x += self.velocity_x * dt;
        self.position.y += self.velocity_y * dt;
        self.angle = wrap_degrees(self.angle + self.spin * dt);
        self.wrap_edges(width);
    }

    // Teleport to the opposite side once the flake is two radii past either vertical edge
    pub fn wrap_edges(&mut self, width: f32) {
        let margin = self.radius * 2.0;

        if self.position.x < -margin {
            self.position.x = width + margin;
        } else if self.position.x > width + margin {
            self.position.x = -margin;
        }
    }

    // True once the whole flake is below a surface `height` pixels tall
    pub fn has_fallen(&self, height: f32) -> bool {
        self.position.y - self.radius > height
    }
}

// Uniform sample from [-half_width, half_width)
fn symmetric<R: Rng + ?Sized>(rng: &mut R, half_width: f32) -> f32 {
    (rng.gen::<f32>() * 2.0 - 1.0) * half_width
}

// Normalise an angle in degrees into [0, 360)
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 || !wrapped.is_finite() {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still_flake(x: f32, y: f32) -> Snowflake {
        Snowflake {
            position: pt2(x, y),
            radius: 10.0,
            velocity_y: 0.0,
            velocity_x: 0.0,
            angle: 0.0,
            spin: 0.0,
        }
    }

    #[test]
    fn spawn_respects_ranges() {
        let params = FieldParams::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..2000 {
            let flake = Snowflake::spawn(&mut rng, 400.0, &params);
            assert!((0.0..400.0).contains(&flake.position.x));
            assert!(flake.position.y < 0.0 && flake.position.y >= -200.0);
            assert!(params.radius_range().contains(&flake.radius));
            assert!((28.0..=60.0).contains(&flake.velocity_y));
            assert!((-10.0..=10.0).contains(&flake.velocity_x));
            assert!((0.0..360.0).contains(&flake.angle));
            assert!((-6.0..=6.0).contains(&flake.spin));
        }
    }

    #[test]
    fn spawn_is_strictly_above_top_edge_even_for_zero_draws() {
        // An all-zero generator gives the lowest value of every sample
        let mut rng = StepRng::new(0, 0);
        let flake = Snowflake::spawn(&mut rng, 400.0, &FieldParams::default());

        assert_eq!(flake.position.y, -200.0);
        assert_eq!(flake.position.x, 0.0);
    }

    #[test]
    fn update_integrates_velocity_and_spin() {
        let mut flake = Snowflake {
            velocity_x: -4.0,
            velocity_y: 50.0,
            angle: 359.0,
            spin: 40.0,
            ..still_flake(100.0, 10.0)
        };
        flake.update(0.05, 400.0);

        assert!((flake.position.x - 99.8).abs() < 1e-4);
        assert!((flake.position.y - 12.5).abs() < 1e-4);
        assert!((flake.angle - 1.0).abs() < 1e-3);
    }

    #[test]
    fn negative_spin_wraps_into_range() {
        let mut flake = Snowflake {
            spin: -6.0,
            ..still_flake(0.0, 0.0)
        };
        flake.update(0.05, 400.0);
        assert!((0.0..360.0).contains(&flake.angle));
        assert!((flake.angle - 359.7).abs() < 1e-3);
    }

    #[test]
    fn wraps_past_left_edge() {
        let mut flake = still_flake(-20.5, 50.0);
        flake.wrap_edges(400.0);
        assert_eq!(flake.position.x, 420.0);
    }

    #[test]
    fn wraps_past_right_edge() {
        let mut flake = still_flake(420.5, 50.0);
        flake.wrap_edges(400.0);
        assert_eq!(flake.position.x, -20.0);
    }

    #[test]
    fn stays_put_inside_margin() {
        let mut flake = still_flake(-19.0, 50.0);
        flake.wrap_edges(400.0);
        assert_eq!(flake.position.x, -19.0);
    }

    #[test]
    fn fallen_only_when_fully_below() {
        assert!(!still_flake(0.0, 810.0).has_fallen(800.0));
        assert!(still_flake(0.0, 810.5).has_fallen(800.0));
    }

    #[test]
    fn wrap_degrees_edge_cases() {
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(720.5), 0.5);
        assert!((0.0..360.0).contains(&wrap_degrees(-1e-9)));
        assert_eq!(wrap_degrees(f32::NAN), 0.0);
    }
}
