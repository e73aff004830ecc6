use crate::util::mods::Mods;

use super::{beatmap::CatchBeatmap, catcher::CatcherSettings, object::ComboChanges};

pub use self::offsets::{LegacyPositionOffsets, NoPositionOffsets, PositionOffsets};

mod combo;
mod hyper_dash;
mod offsets;

/// Second pass over a [`CatchBeatmap`] that requires the full object
/// sequence.
///
/// Each call of [`CatchBeatmapProcessor::process`] recomputes position
/// offsets, combo information, and hyperdash links from scratch so
/// processing the same map twice yields the same result.
///
/// # Example
///
/// ```
/// use rosu_catch::{
///     catch::CatchBeatmapProcessor,
///     model::{beatmap::Beatmap, hit_object::HitObject},
/// };
///
/// let map = Beatmap {
///     hit_objects: vec![
///         HitObject::fruit(64.0, 1000.0).with_new_combo(0),
///         HitObject::fruit(448.0, 1150.0),
///     ],
///     ..Default::default()
/// };
///
/// let mut catch_map = map.to_catch().unwrap();
/// let combo_changes = CatchBeatmapProcessor::new().process(&mut catch_map);
///
/// assert_eq!(catch_map[0].hyper_dash_target(), Some(1));
/// assert!(combo_changes.get(1).is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct CatchBeatmapProcessor<O = LegacyPositionOffsets> {
    catcher: CatcherSettings,
    offsets: O,
}

impl CatchBeatmapProcessor {
    /// Create a new [`CatchBeatmapProcessor`] with osu!'s catcher and
    /// position offsets.
    pub const fn new() -> Self {
        Self {
            catcher: CatcherSettings::new(),
            offsets: LegacyPositionOffsets::new(false),
        }
    }

    /// Specify whether the hard rock position offsets should be applied.
    pub const fn hard_rock(self, hard_rock: bool) -> Self {
        Self {
            catcher: self.catcher,
            offsets: LegacyPositionOffsets::new(hard_rock),
        }
    }

    /// Specify the mods as legacy bitflags.
    ///
    /// Only hard rock influences processing.
    pub fn mods(self, mods: u32) -> Self {
        self.hard_rock(mods.hr())
    }
}

impl<O: PositionOffsets> CatchBeatmapProcessor<O> {
    /// Specify the catcher constants.
    pub fn catcher(self, catcher: CatcherSettings) -> Self {
        Self { catcher, ..self }
    }

    /// Use a custom [`PositionOffsets`] implementation.
    pub fn offsets<P: PositionOffsets>(self, offsets: P) -> CatchBeatmapProcessor<P> {
        CatchBeatmapProcessor {
            catcher: self.catcher,
            offsets,
        }
    }

    /// Apply position offsets, combo information, and hyperdash links.
    ///
    /// Previous results are overwritten. Returns every change in combo
    /// information.
    pub fn process(&self, map: &mut CatchBeatmap) -> ComboChanges {
        let (objects, groups) = map.parts_mut();

        debug_assert!(
            groups
                .windows(2)
                .all(|pair| pair[0].start_time <= pair[1].start_time),
            "hitobjects must be sorted by start time"
        );

        for h in objects.iter_mut() {
            h.reset_processing();
        }

        let mut offsets = vec![0.0; objects.len()];
        self.offsets.offsets(groups, objects, &mut offsets);

        for (h, offset) in objects.iter_mut().zip(offsets) {
            h.x_offset = offset;
        }

        let changes = combo::update_combo_information(objects);
        let _hyper_dashes = hyper_dash::initialize_hyper_dash(&self.catcher, objects);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            objects = objects.len(),
            hyper_dashes = _hyper_dashes,
            combo_changes = changes.len(),
            "Processed catch beatmap"
        );

        changes
    }
}

impl Default for CatchBeatmapProcessor {
    fn default() -> Self {
        Self::new()
    }
}
