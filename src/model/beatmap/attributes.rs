use crate::{
    catch::defaults,
    util::{difficulty::clamp_difficulty, mods::Mods},
};

use super::Beatmap;

/// Summary struct for a [`Beatmap`]'s attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct BeatmapAttributes {
    /// The approach rate after applying difficulty-adjusting mods.
    ///
    /// This does not account for the clock rate; see
    /// [`BeatmapAttributes::effective_ar`].
    pub ar: f64,
    /// The circle size after applying difficulty-adjusting mods.
    pub cs: f64,
    /// The clock rate with respect to mods.
    pub clock_rate: f64,
}

impl BeatmapAttributes {
    /// Milliseconds before its start time that an object appears, in
    /// beatmap time.
    pub fn time_preempt(&self) -> f64 {
        defaults::time_preempt(self.ar)
    }

    /// The scale of every object.
    pub fn scale(&self) -> f32 {
        defaults::scale(self.cs)
    }

    /// The approach rate as perceived when playing at the clock rate.
    ///
    /// May exceed `10` for clock rates above `1`.
    pub fn effective_ar(&self) -> f64 {
        let preempt = self.time_preempt() / self.clock_rate;

        if preempt > 1200.0 {
            (1800.0 - preempt) / 120.0
        } else {
            (1200.0 - preempt) / 150.0 + 5.0
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct ModsDependent {
    value: f32,
    with_mods: bool,
}

impl ModsDependent {
    const fn new(value: f32) -> Self {
        Self {
            value,
            with_mods: false,
        }
    }
}

/// A builder for [`BeatmapAttributes`].
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct BeatmapAttributesBuilder {
    ar: ModsDependent,
    cs: ModsDependent,
    mods: u32,
    clock_rate: Option<f64>,
}

impl BeatmapAttributesBuilder {
    /// Create a new [`BeatmapAttributesBuilder`].
    ///
    /// Attributes are set to `5.0`.
    pub const fn new() -> Self {
        Self {
            ar: ModsDependent::new(5.0),
            cs: ModsDependent::new(5.0),
            mods: 0,
            clock_rate: None,
        }
    }

    /// Use the given [`Beatmap`]'s attributes.
    pub const fn map(self, map: &Beatmap) -> Self {
        Self {
            ar: ModsDependent::new(map.ar),
            cs: ModsDependent::new(map.cs),
            ..self
        }
    }

    /// Specify the approach rate.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub const fn ar(self, ar: f32, with_mods: bool) -> Self {
        Self {
            ar: ModsDependent {
                value: ar,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the circle size.
    ///
    /// `with_mods` determines if the given value should be used before
    /// or after accounting for mods, e.g. on `true` the value will be
    /// used as is and on `false` it will be modified based on the mods.
    pub const fn cs(self, cs: f32, with_mods: bool) -> Self {
        Self {
            cs: ModsDependent {
                value: cs,
                with_mods,
            },
            ..self
        }
    }

    /// Specify the mods as legacy bitflags.
    pub const fn mods(self, mods: u32) -> Self {
        Self { mods, ..self }
    }

    /// Specify a custom clock rate.
    pub const fn clock_rate(self, clock_rate: f64) -> Self {
        Self {
            clock_rate: Some(clock_rate),
            ..self
        }
    }

    /// Calculate the [`BeatmapAttributes`].
    pub fn build(&self) -> BeatmapAttributes {
        let mods = self.mods;
        let clock_rate = self.clock_rate.unwrap_or_else(|| mods.clock_rate());

        let mod_mult = |value: ModsDependent, multiplier: f32| {
            if value.with_mods {
                value.value
            } else {
                (value.value * multiplier).min(10.0)
            }
        };

        let ar = mod_mult(self.ar, mods.ar_multiplier());
        let cs = mod_mult(self.cs, mods.cs_multiplier());

        BeatmapAttributes {
            ar: clamp_difficulty(f64::from(ar)),
            cs: clamp_difficulty(f64::from(cs)),
            clock_rate,
        }
    }
}

impl From<&Beatmap> for BeatmapAttributesBuilder {
    fn from(map: &Beatmap) -> Self {
        Self::new().map(map)
    }
}

impl Default for BeatmapAttributesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
