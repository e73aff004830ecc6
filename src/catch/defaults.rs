//! Object defaults derived from the beatmap difficulty.
//!
//! Both values are pure functions of a single difficulty setting and do not
//! depend on an object's position or its neighbours.

use crate::util::difficulty::{clamp_difficulty, difficulty_range};

const PREEMPT_MIN: f64 = 1800.0;
const PREEMPT_MID: f64 = 1200.0;
const PREEMPT_MAX: f64 = 450.0;

/// Milliseconds before its start time that an object becomes visible.
///
/// Interpolates between `1800` at AR0, `1200` at AR5, and `450` at AR10.
pub fn time_preempt(ar: f64) -> f64 {
    difficulty_range(ar, PREEMPT_MIN, PREEMPT_MID, PREEMPT_MAX)
}

/// The object scale for the given circle size.
///
/// `0.85` at CS0, `0.5` at CS5, and `0.15` at CS10.
pub fn scale(cs: f64) -> f32 {
    let cs = clamp_difficulty(cs) as f32;

    (1.0 - 0.7 * (cs - 5.0) / 5.0) / 2.0
}
