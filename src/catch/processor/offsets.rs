use crate::{
    catch::{
        convert::{ObjectGroup, ObjectGroupKind},
        object::{CatchHitObject, CatchObjectKind},
        PLAYFIELD_WIDTH,
    },
    util::{float_ext::FloatExt, random::Random},
};

/// Computes the horizontal offset of every object.
///
/// Implementations must be deterministic: the same groups and objects
/// always yield the same offsets.
pub trait PositionOffsets {
    /// Write the offset of `objects[i]` into `offsets[i]`.
    ///
    /// `offsets` has the same length as `objects` and is zeroed beforehand.
    fn offsets(&self, groups: &[ObjectGroup], objects: &[CatchHitObject], offsets: &mut [f32]);
}

/// Leaves every object at its original position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoPositionOffsets;

impl PositionOffsets for NoPositionOffsets {
    fn offsets(&self, _: &[ObjectGroup], _: &[CatchHitObject], _: &mut [f32]) {}
}

/// osu!'s offsets.
///
/// Bananas are spread randomly across the playfield and tiny droplets are
/// nudged slightly. With `hard_rock` enabled, fruits additionally
/// exaggerate jumps and stacked fruits are spread apart.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LegacyPositionOffsets {
    pub hard_rock: bool,
}

impl LegacyPositionOffsets {
    pub const RNG_SEED: i32 = 1337;

    pub const fn new(hard_rock: bool) -> Self {
        Self { hard_rock }
    }
}

impl PositionOffsets for LegacyPositionOffsets {
    fn offsets(&self, groups: &[ObjectGroup], objects: &[CatchHitObject], offsets: &mut [f32]) {
        let mut rng = Random::new(Self::RNG_SEED);
        let mut last_pos = None;
        let mut last_start_time = 0.0;

        for group in groups {
            match group.kind {
                ObjectGroupKind::Fruit => {
                    if !self.hard_rock {
                        continue;
                    }

                    for idx in group.objects.clone() {
                        let h = &objects[idx];

                        apply_hr_offset(
                            h.original_x(),
                            &mut offsets[idx],
                            h.start_time(),
                            &mut last_pos,
                            &mut last_start_time,
                            &mut rng,
                        );
                    }
                }
                ObjectGroupKind::JuiceStream { end_x } => {
                    last_pos = Some(end_x);
                    last_start_time = group.start_time;

                    for idx in group.objects.clone() {
                        match objects[idx].kind() {
                            CatchObjectKind::TinyDroplet => {
                                let x = objects[idx].original_x();
                                let offset = rng.next_int_range(-20, 20) as f32;
                                offsets[idx] = offset.clamp(-x, PLAYFIELD_WIDTH - x);
                            }
                            // * Still required to keep the rng in sync
                            CatchObjectKind::Droplet => {
                                let _ = rng.next_int();
                            }
                            CatchObjectKind::Fruit | CatchObjectKind::Banana => {}
                        }
                    }
                }
                ObjectGroupKind::BananaShower => {
                    for idx in group.objects.clone() {
                        offsets[idx] = (rng.next_double() * f64::from(PLAYFIELD_WIDTH)) as f32;

                        // * Used for visuals only
                        let _ = rng.next_int();
                        let _ = rng.next_int();
                        let _ = rng.next_int();
                    }
                }
            }
        }
    }
}

fn apply_hr_offset(
    x: f32,
    x_offset: &mut f32,
    start_time: f64,
    last_pos: &mut Option<f32>,
    last_start_time: &mut f64,
    rng: &mut Random,
) {
    let mut offset_pos = x;

    let last_pos = match last_pos {
        Some(pos) if pos.abs() >= f32::EPSILON => pos,
        Some(_) | None => {
            *last_pos = Some(offset_pos);
            *last_start_time = start_time;

            return;
        }
    };

    let pos_diff = offset_pos - *last_pos;
    // * Int truncation added to match osu!stable.
    let time_diff = (start_time - *last_start_time) as i32;

    if time_diff > 1000 {
        *last_pos = offset_pos;
        *last_start_time = start_time;

        return;
    }

    if pos_diff.eq(0.0) {
        apply_random_offset(&mut offset_pos, f64::from(time_diff) / 4.0, rng);
        *x_offset = offset_pos - x;

        return;
    }

    if pos_diff.abs() < (time_diff / 3) as f32 {
        apply_offset(&mut offset_pos, pos_diff);
    }

    *x_offset = offset_pos - x;

    *last_pos = offset_pos;
    *last_start_time = start_time;
}

fn apply_random_offset(pos: &mut f32, max_offset: f64, rng: &mut Random) {
    let right = rng.next_bool();
    let rand = (rng.next_double_range(0.0, max_offset.max(0.0)) as f32).min(20.0);

    if right {
        if *pos + rand <= PLAYFIELD_WIDTH {
            *pos += rand;
        } else {
            *pos -= rand;
        }
    } else if *pos - rand >= 0.0 {
        *pos -= rand;
    } else {
        *pos += rand;
    }
}

fn apply_offset(pos: &mut f32, amount: f32) {
    if amount > 0.0 {
        // * Clamp to the right bound
        if *pos + amount < PLAYFIELD_WIDTH {
            *pos += amount;
        }
    } else if *pos + amount > 0.0 {
        // * Clamp to the left bound
        *pos += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_is_exaggerated() {
        let mut rng = Random::new(LegacyPositionOffsets::RNG_SEED);
        let mut last_pos = None;
        let mut last_start_time = 0.0;

        let mut first = 0.0;
        apply_hr_offset(100.0, &mut first, 0.0, &mut last_pos, &mut last_start_time, &mut rng);
        assert!(first.eq(0.0));

        // 50px in 300ms is below the threshold of 100px so the jump doubles
        let mut second = 0.0;
        apply_hr_offset(150.0, &mut second, 300.0, &mut last_pos, &mut last_start_time, &mut rng);
        assert!(second.eq(50.0), "{second}");
        assert_eq!(last_pos, Some(200.0));
    }

    #[test]
    fn long_gap_resets() {
        let mut rng = Random::new(LegacyPositionOffsets::RNG_SEED);
        let mut last_pos = Some(100.0);
        let mut last_start_time = 0.0;

        let mut offset = 0.0;
        apply_hr_offset(150.0, &mut offset, 1500.0, &mut last_pos, &mut last_start_time, &mut rng);

        assert!(offset.eq(0.0));
        assert_eq!(last_pos, Some(150.0));
    }

    #[test]
    fn stacked_fruits_stay_in_bounds() {
        let mut rng = Random::new(LegacyPositionOffsets::RNG_SEED);

        for _ in 0..100 {
            let mut pos = 510.0;
            apply_random_offset(&mut pos, 200.0, &mut rng);
            assert!((0.0..=PLAYFIELD_WIDTH).contains(&pos), "{pos}");
            assert!((pos - 510.0).abs() <= 20.0);

            let mut pos = 3.0;
            apply_random_offset(&mut pos, 200.0, &mut rng);
            assert!((0.0..=PLAYFIELD_WIDTH).contains(&pos), "{pos}");
        }
    }

    #[test]
    fn offset_respects_bounds() {
        let mut pos = 500.0;
        apply_offset(&mut pos, 20.0);
        assert!(pos.eq(500.0));

        let mut pos = 10.0;
        apply_offset(&mut pos, -20.0);
        assert!(pos.eq(10.0));

        let mut pos = 100.0;
        apply_offset(&mut pos, -20.0);
        assert!(pos.eq(80.0));
    }
}
