/*
 * Shape Module
 *
 * Builds the line segments that make up one snowflake. A flake is six primary
 * branches 60 degrees apart; at 50% and 72% along each branch two side
 * branches split off at +/-35 degrees. The whole figure is rotated by the
 * flake's angle around its centre.
 */

use nannou::color::{rgba, Rgba};
use nannou::prelude::*;
use std::f32::consts::TAU;

use crate::flake::Snowflake;

pub const PRIMARY_BRANCHES: usize = 6;
pub const SEGMENTS_PER_FLAKE: usize = PRIMARY_BRANCHES * 5;

const PRIMARY_ALPHA: f32 = 0.95;
const SECONDARY_ALPHA: f32 = 0.90;
const SIDE_BRANCH_ANGLE_DEG: f32 = 35.0;
// (position along the primary branch, side branch length), both as fractions of the radius
const SIDE_BRANCHES: [(f32, f32); 2] = [(0.5, 0.45), (0.72, 0.45 * 0.9)];

// Snowflakes are only ever stroked with round caps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Round,
}

// One stroke for the host to draw, in surface-local coordinates (y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point2,
    pub end: Point2,
    pub color: Rgba,
    pub stroke_width: f32,
    pub cap: LineCap,
}

impl LineSegment {
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

// Append the segments for `flake` to `out`
pub fn push_flake_segments(
    flake: &Snowflake,
    alpha_multiplier: f32,
    stroke_width: f32,
    out: &mut Vec<LineSegment>,
) {
    let centre = flake.position;
    let rotation = flake.angle.to_radians();
    let side_offset = SIDE_BRANCH_ANGLE_DEG.to_radians();

    let primary_color = rgba(1.0, 1.0, 1.0, PRIMARY_ALPHA * alpha_multiplier);
    let secondary_color = rgba(1.0, 1.0, 1.0, SECONDARY_ALPHA * alpha_multiplier);

    let stroke = |start: Point2, end: Point2, color: Rgba| LineSegment {
        start,
        end,
        color,
        stroke_width,
        cap: LineCap::Round,
    };

    for k in 0..PRIMARY_BRANCHES {
        let theta = rotation + k as f32 * (TAU / PRIMARY_BRANCHES as f32);
        let direction = vec2(theta.cos(), theta.sin());

        out.push(stroke(centre, centre + direction * flake.radius, primary_color));

        for (along, length) in SIDE_BRANCHES {
            let base = centre + direction * (flake.radius * along);
            let side_length = flake.radius * length;

            for angle in [theta + side_offset, theta - side_offset] {
                let tip = base + vec2(angle.cos(), angle.sin()) * side_length;
                out.push(stroke(base, tip, secondary_color));
            }
        }
    }
}
