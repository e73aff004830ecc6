use crate::catch::{CatchBeatmap, CatchBeatmapError};

pub use self::attributes::{BeatmapAttributes, BeatmapAttributesBuilder};

use super::hit_object::HitObject;

mod attributes;

/// All beatmap data required to build the catch object model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beatmap {
    // Difficulty
    pub ar: f32,
    pub cs: f32,

    // HitObjects
    pub hit_objects: Vec<HitObject>,
}

impl Beatmap {
    /// Returns a [`BeatmapAttributesBuilder`] to calculate modified beatmap
    /// attributes.
    pub fn attributes(&self) -> BeatmapAttributesBuilder {
        BeatmapAttributesBuilder::new().map(self)
    }

    /// Convert the hitobjects into a [`CatchBeatmap`] with defaults applied
    /// based on the map's own difficulty settings.
    pub fn to_catch(&self) -> Result<CatchBeatmap, CatchBeatmapError> {
        CatchBeatmap::new(self, &self.attributes().build())
    }

    /// Convert the hitobjects into a [`CatchBeatmap`] with defaults applied
    /// based on the given attributes.
    pub fn to_catch_with(
        &self,
        attrs: &BeatmapAttributes,
    ) -> Result<CatchBeatmap, CatchBeatmapError> {
        CatchBeatmap::new(self, attrs)
    }
}

impl Default for Beatmap {
    fn default() -> Self {
        Self {
            ar: 5.0,
            cs: 5.0,
            hit_objects: Vec::default(),
        }
    }
}
