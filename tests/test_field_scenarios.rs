//! End-to-end frame scenarios for the snow field

use std::time::Duration;

use nannou::prelude::pt2;
use snowfall::{Bounds, FieldParams, SnowField, Snowflake};

const WIDTH: f32 = 400.0;
const HEIGHT: f32 = 800.0;

fn bounds() -> Bounds {
    Bounds::new(WIDTH, HEIGHT)
}

fn seeded(seed: u64) -> SnowField {
    SnowField::seeded(FieldParams::default(), seed).expect("Default params are valid")
}

#[test]
fn test_distant_countdown_stabilises_at_thirty() {
    let mut field = seeded(1);

    for frame in 0..1000 {
        field.advance(0.016, bounds(), 100, true);
        assert_eq!(field.len(), 30, "population drifted at frame {frame}");
    }
    assert_eq!(field.target(), 30);
}

#[test]
fn test_imminent_countdown_reaches_full_population() {
    let mut field = seeded(2);

    // No time passes, so nothing can fall out
    for _ in 0..22 {
        field.advance(0.0, bounds(), 1, true);
    }
    assert_eq!(field.len(), 130);
    assert_eq!(field.stats().fallen, 0);
}

#[test]
fn test_stall_is_clamped_to_fifty_ms() {
    let mut field = seeded(3).with_flakes([Snowflake {
        position: pt2(100.0, 0.0),
        radius: 10.0,
        velocity_y: 60.0,
        velocity_x: 0.0,
        angle: 0.0,
        spin: 0.0,
    }]);

    field.frame(Duration::from_secs(10), bounds(), 100, true);
    field.frame(Duration::from_secs(15), bounds(), 100, true);

    let moved = field.flakes().next().map(|flake| flake.position.y);
    assert!(matches!(moved, Some(y) if (y - 3.0).abs() < 1e-4), "moved to {moved:?}");
}

#[test]
fn test_disabled_emits_nothing_regardless_of_history() {
    let mut field = seeded(4);
    for i in 0..50 {
        let segments = field.frame(Duration::from_millis(i * 16), bounds(), 1, true);
        assert!(!segments.is_empty());
    }

    let segments = field.frame(Duration::from_millis(800), bounds(), 1, false);
    assert!(segments.is_empty());
    assert!(field.is_empty());
}

#[test]
fn test_countdown_moving_closer_thickens_snow() {
    let mut field = seeded(5);

    field.advance(0.016, bounds(), 45, true);
    assert_eq!(field.len(), 60);
    assert!((field.stats().alpha_multiplier - 0.85).abs() < f32::EPSILON);

    field.advance(0.016, bounds(), 10, true);
    assert_eq!(field.len(), 110);
    assert!((field.stats().alpha_multiplier - 0.65).abs() < f32::EPSILON);
}

#[test]
fn test_countdown_moving_away_thins_gradually() {
    let mut field = seeded(6);
    field.advance(0.0, bounds(), 0, true);
    assert_eq!(field.len(), 130);

    let mut expected = 130;
    while expected > 30 {
        expected = (expected - 6).max(30);
        field.advance(0.0, bounds(), 200, true);
        assert_eq!(field.len(), expected);
    }

    field.advance(0.0, bounds(), 200, true);
    assert_eq!(field.len(), 30);
}

#[test]
fn test_negative_driver_behaves_like_zero() {
    let mut negative = seeded(7);
    let mut zero = seeded(7);

    let a = negative.advance(0.016, bounds(), -30, true);
    let b = zero.advance(0.016, bounds(), 0, true);

    assert_eq!(negative.target(), 130);
    assert_eq!(a, b);
}

#[test]
fn test_shrunk_window_clears_then_recovers() {
    let mut field = seeded(8);
    field.advance(0.016, bounds(), 20, true);
    assert_eq!(field.len(), 90);

    assert!(field.advance(0.016, Bounds::new(-10.0, 0.0), 20, true).is_empty());
    assert!(field.is_empty());

    field.advance(0.016, bounds(), 20, true);
    assert_eq!(field.len(), 90);
}

#[test]
fn test_inverted_speed_range_is_refused_up_front() {
    let params = FieldParams {
        min_speed_y: 80.0,
        max_speed_y: 20.0,
        ..FieldParams::default()
    };

    // Such a field would be unable to spawn, so it must never be built
    assert!(SnowField::seeded(params.clone(), 1).is_err());

    // The same edit on a running field is rejected and the field keeps snowing
    let mut field = seeded(9);
    assert!(field.set_params(params).is_err());
    assert!(!field.advance(0.016, bounds(), 100, true).is_empty());
}
