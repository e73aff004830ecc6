/// Catcher constants supplied by the movement system.
///
/// The defaults match osu!'s catcher.
#[derive(Copy, Clone, Debug, PartialEq)]
#[must_use]
pub struct CatcherSettings {
    /// Size of the catcher's area at scale `1`.
    pub area_size: f32,
    /// Fraction of the catcher's width that can catch objects.
    pub allowed_catch_range: f32,
    /// Maximum horizontal speed without hyperdashing, in track-space units
    /// per millisecond.
    pub base_speed: f64,
    /// Time in milliseconds subtracted from every gap between two objects.
    pub frame_leniency: f64,
}

impl CatcherSettings {
    pub const AREA_CATCHER_SIZE: f32 = 106.75;
    pub const ALLOWED_CATCH_RANGE: f32 = 0.8;
    pub const BASE_SPEED: f64 = 1.0;
    pub const FRAME_LENIENCY: f64 = 1000.0 / 60.0 / 4.0;

    pub const fn new() -> Self {
        Self {
            area_size: Self::AREA_CATCHER_SIZE,
            allowed_catch_range: Self::ALLOWED_CATCH_RANGE,
            base_speed: Self::BASE_SPEED,
            frame_leniency: Self::FRAME_LENIENCY,
        }
    }

    /// Specify the catcher's area size.
    pub const fn area_size(self, area_size: f32) -> Self {
        Self { area_size, ..self }
    }

    /// Specify the catchable fraction of the catcher's width.
    pub const fn allowed_catch_range(self, allowed_catch_range: f32) -> Self {
        Self {
            allowed_catch_range,
            ..self
        }
    }

    /// Specify the maximum speed without hyperdashing.
    pub const fn base_speed(self, base_speed: f64) -> Self {
        Self { base_speed, ..self }
    }

    /// Specify the leniency subtracted from gaps between objects.
    pub const fn frame_leniency(self, frame_leniency: f64) -> Self {
        Self {
            frame_leniency,
            ..self
        }
    }

    /// The width of the catcher that can catch objects of the given scale.
    pub fn catch_width(&self, object_scale: f32) -> f32 {
        // The catcher is drawn at twice the object scale
        self.area_size * (object_scale * 2.0).abs() * self.allowed_catch_range
    }

    /// Half of the catcher's full width, including the part that cannot
    /// catch objects.
    pub fn half_catcher_width(&self, object_scale: f32) -> f64 {
        f64::from(self.catch_width(object_scale) / 2.0) / f64::from(self.allowed_catch_range)
    }

    /// Time available to move between two objects.
    pub fn available_time(&self, start_time: f64, next_start_time: f64) -> f64 {
        // * Int truncation added to match osu!stable.
        f64::from((next_start_time as i32 - start_time as i32) as f32 - self.frame_leniency as f32)
    }

    /// The furthest distance that can be covered without hyperdashing in
    /// the given time, considering the catcher's reach of `reach`.
    pub fn max_normal_distance(&self, available_time: f64, reach: f64) -> f64 {
        available_time * self.base_speed + reach
    }
}

impl Default for CatcherSettings {
    fn default() -> Self {
        Self::new()
    }
}
