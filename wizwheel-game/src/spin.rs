//! Spin planning and the landing computation.
//!
//! The wheel rotates clockwise by a total of `R` degrees; trait 0 is rendered
//! at the top (a -90 degree layout offset) under a fixed pointer, so the trait
//! under the pointer after the spin is found by inverting the rotation and
//! snapping to the nearest segment.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Number of wheel segments.
pub const TRAIT_COUNT: usize = 9;

/// Angular width of one segment, in degrees.
pub const SEGMENT_ANGLE: f64 = 360.0 / TRAIT_COUNT as f64;

/// Guaranteed whole turns added to every spin (five full rotations).
pub const BASE_SPIN_DEGREES: f64 = 1800.0;

/// Fixed duration of the spin animation and reveal timer.
pub const SPIN_DURATION_MS: u32 = 5000;

/// Target rotation and animation duration for one spin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinPlan {
    pub target_rotation: f64,
    pub duration_ms: u32,
}

/// Seedable source for the uniform spin offset draw.
#[derive(Debug, Clone)]
pub struct SpinRng {
    rng: SmallRng,
}

impl SpinRng {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Uniform draw in `[0, 360)` degrees.
    pub fn draw_offset(&mut self) -> f64 {
        self.rng.gen_range(0.0..360.0)
    }
}

/// Plan a spin from the current rotation and a uniform offset draw.
#[must_use]
pub fn plan_spin(current_rotation: f64, offset: f64) -> SpinPlan {
    SpinPlan {
        target_rotation: current_rotation + BASE_SPIN_DEGREES + offset,
        duration_ms: SPIN_DURATION_MS,
    }
}

/// Round half up: ties resolve to the next higher value, so a pointer that
/// stops exactly on a segment boundary deterministically selects the higher
/// adjacent index (before the final wrap).
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Map a total rotation to the index of the trait under the pointer.
///
/// Reproduces exactly:
///
/// ```text
/// final_angle   = R mod 360
/// segment_angle = 360 / count
/// index         = round((360 - final_angle) mod 360 / segment_angle) mod count
/// ```
#[must_use]
pub fn landed_index(rotation: f64, count: usize) -> usize {
    debug_assert!(count > 0);
    let final_angle = rotation.rem_euclid(360.0);
    let segment_angle = 360.0 / count as f64;
    let snapped = round_half_up((360.0 - final_angle).rem_euclid(360.0) / segment_angle);
    (snapped as usize) % count
}
