use std::cmp::Ordering;

/// A hitobject as provided by the beatmap loader.
///
/// Positions are in track-space i.e. within `[0, 512]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitObject {
    pub x: f32,
    pub start_time: f64,
    /// Whether this object starts a new combo.
    pub new_combo: bool,
    /// The amount of combo colours to skip when starting a new combo.
    pub combo_offset: u32,
    pub kind: HitObjectKind,
}

impl HitObject {
    /// Create a fruit at the given position and time.
    pub const fn fruit(x: f32, start_time: f64) -> Self {
        Self {
            x,
            start_time,
            new_combo: false,
            combo_offset: 0,
            kind: HitObjectKind::Fruit,
        }
    }

    /// Create a juice stream starting at the given position and time.
    pub const fn juice_stream(x: f32, start_time: f64, stream: JuiceStream) -> Self {
        Self {
            x,
            start_time,
            new_combo: false,
            combo_offset: 0,
            kind: HitObjectKind::JuiceStream(stream),
        }
    }

    /// Create a banana shower spanning from `start_time` to `end_time`.
    pub const fn banana_shower(start_time: f64, end_time: f64) -> Self {
        Self {
            x: 0.0,
            start_time,
            new_combo: false,
            combo_offset: 0,
            kind: HitObjectKind::BananaShower(BananaShower { end_time }),
        }
    }

    /// Mark this object as the start of a new combo.
    #[must_use]
    pub const fn with_new_combo(mut self, combo_offset: u32) -> Self {
        self.new_combo = true;
        self.combo_offset = combo_offset;

        self
    }

    /// The end time of the object.
    pub fn end_time(&self) -> f64 {
        match self.kind {
            HitObjectKind::Fruit => self.start_time,
            HitObjectKind::JuiceStream(ref stream) => stream
                .nested
                .last()
                .map_or(self.start_time, |nested| nested.start_time),
            HitObjectKind::BananaShower(BananaShower { end_time }) => end_time,
        }
    }
}

impl PartialOrd for HitObject {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.start_time.partial_cmp(&other.start_time)
    }
}

/// Additional data for a [`HitObject`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitObjectKind {
    Fruit,
    JuiceStream(JuiceStream),
    BananaShower(BananaShower),
}

/// A juice stream whose nested objects were already generated along its
/// path.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JuiceStream {
    /// The horizontal position at the end of the path.
    pub end_x: f32,
    pub nested: Vec<NestedObject>,
}

/// An object nested within a [`JuiceStream`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NestedObject {
    pub x: f32,
    pub start_time: f64,
    pub kind: NestedObjectKind,
}

/// The kind of a [`NestedObject`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NestedObjectKind {
    Fruit,
    Droplet,
    TinyDroplet,
}

/// A banana shower.
///
/// Its bananas are generated during conversion.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BananaShower {
    pub end_time: f64,
}

impl BananaShower {
    /// Start times of all bananas for a shower starting at `start_time`.
    pub fn banana_times(&self, start_time: f64) -> impl Iterator<Item = f64> {
        // * Int truncation added to match osu!stable.
        let start_time = start_time as i32;
        let end_time = self.end_time as i32;
        let mut spacing = (end_time - start_time) as f32;

        while spacing > 100.0 {
            spacing /= 2.0;
        }

        let end_time = end_time as f32;
        let mut time = start_time as f32;

        std::iter::from_fn(move || {
            if spacing <= 0.0 || time > end_time {
                return None;
            }

            let curr = time;
            time += spacing;

            Some(f64::from(curr))
        })
    }
}
