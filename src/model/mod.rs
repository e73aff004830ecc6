/// Beatmap related types.
pub mod beatmap;

/// Hitobject related types.
pub mod hit_object;

/// Hit window related types.
pub mod hit_windows;
