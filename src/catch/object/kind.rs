/// The concrete type of a [`CatchHitObject`].
///
/// [`CatchHitObject`]: crate::catch::CatchHitObject
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatchObjectKind {
    Fruit,
    Droplet,
    TinyDroplet,
    Banana,
}

impl CatchObjectKind {
    /// Whether objects of this kind remain on the catcher's plate once
    /// caught.
    pub const fn can_be_plated(self) -> bool {
        !matches!(self, Self::Banana)
    }

    /// Whether objects of this kind take part in hyperdash linking.
    ///
    /// Tiny droplets are plated but never require the catcher to move.
    pub const fn is_hyper_dash_candidate(self) -> bool {
        matches!(self, Self::Fruit | Self::Droplet)
    }
}

/// Visual variant of a fruit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FruitVisualRepresentation {
    Pear,
    Grape,
    Pineapple,
    Raspberry,
    Banana,
}

impl FruitVisualRepresentation {
    /// Cycles through the four fruits based on the object's index in the
    /// beatmap.
    pub const fn from_index(index_in_beatmap: usize) -> Self {
        match index_in_beatmap % 4 {
            0 => Self::Pear,
            1 => Self::Grape,
            2 => Self::Pineapple,
            _ => Self::Raspberry,
        }
    }
}
