use std::{ops::Index, slice};

use crate::model::beatmap::{Beatmap, BeatmapAttributes};

use super::{
    convert::{self, ObjectGroup},
    error::CatchBeatmapError,
    object::{CatchHitObject, CatchObjectKind},
};

/// The catch objects of a [`Beatmap`] in beatmap order.
///
/// Defaults are applied on creation. Run a [`CatchBeatmapProcessor`] to
/// fill in position offsets, combo information, and hyperdash links.
///
/// Only obtainable through [`CatchBeatmap::new`] so that its objects are
/// always validated. With the `serde` feature it can be serialized but not
/// deserialized; deserialize the [`Beatmap`] instead.
///
/// [`CatchBeatmapProcessor`]: crate::catch::CatchBeatmapProcessor
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CatchBeatmap {
    objects: Vec<CatchHitObject>,
    groups: Vec<ObjectGroup>,
}

impl CatchBeatmap {
    /// Expand the map's hitobjects into catch objects and apply defaults
    /// based on the given attributes.
    ///
    /// Fails if the hitobjects are not sorted by time or contain non-finite
    /// values.
    pub fn new(map: &Beatmap, attrs: &BeatmapAttributes) -> Result<Self, CatchBeatmapError> {
        if let Err(err) = convert::validate(map) {
            #[cfg(feature = "tracing")]
            tracing::error!(%err, "Invalid catch beatmap");

            return Err(err);
        }

        let (objects, groups) = convert::convert_objects(map);
        let mut map = Self { objects, groups };
        map.apply_defaults(attrs);

        Ok(map)
    }

    /// Recompute time preempt and scale of all objects.
    ///
    /// Must be called whenever the difficulty settings change, followed by
    /// another processing pass.
    pub fn apply_defaults(&mut self, attrs: &BeatmapAttributes) {
        for h in self.objects.iter_mut() {
            h.apply_defaults(attrs);
        }
    }

    /// All objects in beatmap order.
    pub fn objects(&self) -> &[CatchHitObject] {
        &self.objects
    }

    /// The objects grouped by the hitobject they originate from.
    pub fn groups(&self) -> &[ObjectGroup] {
        &self.groups
    }

    pub fn get(&self, idx: usize) -> Option<&CatchHitObject> {
        self.objects.get(idx)
    }

    pub fn iter(&self) -> slice::Iter<'_, CatchHitObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The object that the object at `idx` hyperdashes to.
    pub fn hyper_dash_target(&self, idx: usize) -> Option<&CatchHitObject> {
        self.objects
            .get(idx)?
            .hyper_dash_target()
            .and_then(|target| self.objects.get(target))
    }

    /// Iterate over all hyperdashes in beatmap order.
    pub fn hyper_dash_links(&self) -> impl Iterator<Item = HyperDashLink> + '_ {
        self.objects.iter().enumerate().filter_map(|(from, h)| {
            let to = h.hyper_dash_target()?;
            let target = self.objects.get(to)?;

            let distance = f64::from((target.x() - h.x()).abs());
            let time = (target.start_time() - h.start_time()).max(1.0);

            Some(HyperDashLink {
                from,
                to,
                required_speed: distance / time,
            })
        })
    }

    /// Count the objects per kind.
    pub fn object_counts(&self) -> ObjectCounts {
        self.objects
            .iter()
            .fold(ObjectCounts::default(), |mut counts, h| {
                match h.kind() {
                    CatchObjectKind::Fruit => counts.fruits += 1,
                    CatchObjectKind::Droplet => counts.droplets += 1,
                    CatchObjectKind::TinyDroplet => counts.tiny_droplets += 1,
                    CatchObjectKind::Banana => counts.bananas += 1,
                }

                counts
            })
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut [CatchHitObject], &[ObjectGroup]) {
        (&mut self.objects, &self.groups)
    }
}

impl Index<usize> for CatchBeatmap {
    type Output = CatchHitObject;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.objects[idx]
    }
}

impl<'a> IntoIterator for &'a CatchBeatmap {
    type Item = &'a CatchHitObject;
    type IntoIter = slice::Iter<'a, CatchHitObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A hyperdash from one object to another.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HyperDashLink {
    /// Index of the object initiating the hyperdash.
    pub from: usize,
    /// Index of the targeted object.
    pub to: usize,
    /// Horizontal distance per millisecond that the catcher has to cover.
    pub required_speed: f64,
}

/// The amount of objects per kind.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectCounts {
    pub fruits: u32,
    pub droplets: u32,
    pub tiny_droplets: u32,
    pub bananas: u32,
}

impl ObjectCounts {
    /// Return the maximum combo.
    pub const fn max_combo(&self) -> u32 {
        self.fruits + self.droplets
    }
}
