pub use self::{
    beatmap::{CatchBeatmap, HyperDashLink, ObjectCounts},
    catcher::CatcherSettings,
    convert::{ObjectGroup, ObjectGroupKind},
    error::CatchBeatmapError,
    object::{
        CatchHitObject, CatchObjectKind, ComboChange, ComboChanges, ComboState,
        FruitVisualRepresentation,
    },
    processor::{
        CatchBeatmapProcessor, LegacyPositionOffsets, NoPositionOffsets, PositionOffsets,
    },
};

mod beatmap;
mod catcher;
mod convert;
mod error;
mod object;
mod processor;

/// Pure functions computing object defaults from difficulty settings.
pub mod defaults;

/// Width of the playfield in track-space.
pub const PLAYFIELD_WIDTH: f32 = 512.0;
