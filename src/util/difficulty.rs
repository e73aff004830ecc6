/// Piecewise-linear interpolation through `(0, min)`, `(5, mid)`, and
/// `(10, max)`.
///
/// The difficulty value is clamped to `[0, 10]` beforehand.
pub fn difficulty_range(difficulty: f64, min: f64, mid: f64, max: f64) -> f64 {
    let difficulty = clamp_difficulty(difficulty);

    if difficulty > 5.0 {
        mid + (max - mid) * (difficulty - 5.0) / 5.0
    } else if difficulty < 5.0 {
        mid - (mid - min) * (5.0 - difficulty) / 5.0
    } else {
        mid
    }
}

/// Clamp a difficulty value into `[0, 10]`.
///
/// `NaN` is treated as the default difficulty of `5`.
pub fn clamp_difficulty(difficulty: f64) -> f64 {
    if difficulty.is_nan() {
        5.0
    } else {
        difficulty.clamp(0.0, 10.0)
    }
}
