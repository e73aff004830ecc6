use crate::model::{beatmap::BeatmapAttributes, hit_windows::HitWindows};

pub use self::{
    combo::{ComboChange, ComboChanges, ComboState},
    kind::{CatchObjectKind, FruitVisualRepresentation},
};

mod combo;
mod kind;

/// A single object that falls down the playfield.
///
/// Objects are created through [`CatchBeatmap::new`] which applies the
/// difficulty defaults. Position offsets, combo information, and hyperdash
/// links are filled in by the [`CatchBeatmapProcessor`].
///
/// [`CatchBeatmap::new`]: crate::catch::CatchBeatmap::new
/// [`CatchBeatmapProcessor`]: crate::catch::CatchBeatmapProcessor
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatchHitObject {
    pub(crate) x: f32,
    pub(crate) x_offset: f32,
    pub(crate) start_time: f64,
    pub(crate) kind: CatchObjectKind,

    pub(crate) time_preempt: f64,
    pub(crate) scale: f32,

    pub(crate) index_in_beatmap: usize,
    pub(crate) new_combo: bool,
    pub(crate) combo_offset: u32,
    pub(crate) combo: ComboState,

    pub(crate) distance_to_hyper_dash: f32,
    pub(crate) hyper_dash_target: Option<usize>,
}

impl CatchHitObject {
    /// Radius of an object at scale `1`.
    pub const OBJECT_RADIUS: f32 = 64.0;

    pub(crate) const fn new(
        kind: CatchObjectKind,
        x: f32,
        start_time: f64,
        index_in_beatmap: usize,
    ) -> Self {
        Self {
            x,
            x_offset: 0.0,
            start_time,
            kind,
            time_preempt: 1000.0,
            scale: 1.0,
            index_in_beatmap,
            new_combo: false,
            combo_offset: 0,
            combo: ComboState {
                index_in_current_combo: 0,
                combo_index: 0,
                last_in_combo: false,
            },
            distance_to_hyper_dash: 0.0,
            hyper_dash_target: None,
        }
    }

    pub(crate) fn apply_defaults(&mut self, attrs: &BeatmapAttributes) {
        self.time_preempt = attrs.time_preempt();
        self.scale = attrs.scale();
    }

    /// The horizontal position including the position offset.
    pub fn x(&self) -> f32 {
        self.x + self.x_offset
    }

    /// The horizontal position as specified by the beatmap.
    pub const fn original_x(&self) -> f32 {
        self.x
    }

    /// The offset added onto the original position during processing.
    pub const fn x_offset(&self) -> f32 {
        self.x_offset
    }

    pub const fn start_time(&self) -> f64 {
        self.start_time
    }

    pub const fn kind(&self) -> CatchObjectKind {
        self.kind
    }

    /// Milliseconds before [`CatchHitObject::start_time`] that the object
    /// becomes visible.
    pub const fn time_preempt(&self) -> f64 {
        self.time_preempt
    }

    /// Size multiplier for both the object and the catcher's reach.
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Position among all objects of the beatmap.
    pub const fn index_in_beatmap(&self) -> usize {
        self.index_in_beatmap
    }

    pub const fn new_combo(&self) -> bool {
        self.new_combo
    }

    pub const fn combo_offset(&self) -> u32 {
        self.combo_offset
    }

    pub const fn combo(&self) -> ComboState {
        self.combo
    }

    pub const fn index_in_current_combo(&self) -> u32 {
        self.combo.index_in_current_combo
    }

    pub const fn combo_index(&self) -> u32 {
        self.combo.combo_index
    }

    /// Whether the next object starts a new combo.
    pub const fn last_in_combo(&self) -> bool {
        self.combo.last_in_combo
    }

    /// Difference between the distance to the next object and the distance
    /// that would have triggered a hyperdash.
    ///
    /// A value close to `0` indicates a difficult jump, a negative value
    /// means the jump requires a hyperdash.
    pub const fn distance_to_hyper_dash(&self) -> f32 {
        self.distance_to_hyper_dash
    }

    /// Index of the object that this object hyperdashes to.
    pub const fn hyper_dash_target(&self) -> Option<usize> {
        self.hyper_dash_target
    }

    /// Whether catching this object initiates a hyperdash.
    pub const fn hyper_dash(&self) -> bool {
        self.hyper_dash_target.is_some()
    }

    /// Whether this object remains on the catcher's plate once caught.
    pub const fn can_be_plated(&self) -> bool {
        self.kind.can_be_plated()
    }

    pub const fn visual_representation(&self) -> FruitVisualRepresentation {
        match self.kind {
            CatchObjectKind::Banana => FruitVisualRepresentation::Banana,
            CatchObjectKind::Fruit | CatchObjectKind::Droplet | CatchObjectKind::TinyDroplet => {
                FruitVisualRepresentation::from_index(self.index_in_beatmap)
            }
        }
    }

    /// Catch objects are judged on position only so there are no timing
    /// windows.
    pub const fn hit_windows(&self) -> HitWindows {
        HitWindows::EMPTY
    }

    pub(crate) fn reset_processing(&mut self) {
        self.x_offset = 0.0;
        self.distance_to_hyper_dash = 0.0;
        self.hyper_dash_target = None;
    }
}
