/*
 * Density Module
 *
 * Maps the density driver (days remaining in the countdown) to a target
 * flake population, and the target population to the per-frame opacity
 * multiplier. Fewer days remaining means more snow, and denser snow is drawn
 * slightly more transparent so it does not turn into clutter.
 */

use std::fmt;

// Step of the density table a driver value falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DensityBucket {
    // More than 60 days
    Distant,
    // 31 to 60 days
    Months,
    // 16 to 30 days
    Weeks,
    // 8 to 15 days
    Fortnight,
    // 3 to 7 days
    Week,
    // 2 days or fewer
    Imminent,
}

impl DensityBucket {
    // Negative drivers are treated as zero
    pub fn from_driver(driver: i64) -> Self {
        match driver.max(0) {
            61.. => Self::Distant,
            31..=60 => Self::Months,
            16..=30 => Self::Weeks,
            8..=15 => Self::Fortnight,
            3..=7 => Self::Week,
            _ => Self::Imminent,
        }
    }

    // Population this step of the table asks for, before the global cap
    pub fn population(self) -> usize {
        match self {
            Self::Distant => 30,
            Self::Months => 60,
            Self::Weeks => 90,
            Self::Fortnight => 110,
            Self::Week => 120,
            Self::Imminent => 130,
        }
    }
}

impl fmt::Display for DensityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Distant => "more than 60 days",
            Self::Months => "31-60 days",
            Self::Weeks => "16-30 days",
            Self::Fortnight => "8-15 days",
            Self::Week => "3-7 days",
            Self::Imminent => "2 days or fewer",
        };
        f.write_str(label)
    }
}

// Target population for a driver value, clamped to `max_population`
pub fn target_population(driver: i64, max_population: usize) -> usize {
    DensityBucket::from_driver(driver).population().min(max_population)
}

// Opacity multiplier for every stroke in a frame, chosen from the target population
pub fn alpha_multiplier(target: usize) -> f32 {
    match target {
        121.. => 0.55,
        101..=120 => 0.65,
        81..=100 => 0.75,
        _ => 0.85,
    }
}
