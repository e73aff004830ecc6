use std::ops::Range;

use crate::{
    model::{
        beatmap::Beatmap,
        hit_object::{HitObject, HitObjectKind, NestedObjectKind},
    },
    util::hint::unlikely,
};

use super::{
    error::CatchBeatmapError,
    object::{CatchHitObject, CatchObjectKind},
    PLAYFIELD_WIDTH,
};

/// The objects that a single beatmap [`HitObject`] turned into.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectGroup {
    pub kind: ObjectGroupKind,
    /// The original horizontal position.
    pub x: f32,
    pub start_time: f64,
    /// Indices of the group's objects within the [`CatchBeatmap`].
    ///
    /// [`CatchBeatmap`]: crate::catch::CatchBeatmap
    pub objects: Range<usize>,
}

/// The kind of an [`ObjectGroup`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectGroupKind {
    Fruit,
    JuiceStream { end_x: f32 },
    BananaShower,
}

pub(super) fn validate(map: &Beatmap) -> Result<(), CatchBeatmapError> {
    let mut prev_start_time = f64::NEG_INFINITY;

    for (idx, h) in map.hit_objects.iter().enumerate() {
        if unlikely(!h.start_time.is_finite()) {
            return Err(CatchBeatmapError::NonFiniteTime { idx });
        } else if unlikely(!h.x.is_finite()) {
            return Err(CatchBeatmapError::NonFinitePosition { idx });
        } else if unlikely(h.start_time < prev_start_time) {
            return Err(CatchBeatmapError::UnsortedObjects {
                idx,
                start_time: h.start_time,
                prev_start_time,
            });
        }

        match h.kind {
            HitObjectKind::Fruit => {}
            HitObjectKind::JuiceStream(ref stream) => {
                if unlikely(!stream.end_x.is_finite()) {
                    return Err(CatchBeatmapError::NonFinitePosition { idx });
                }

                let mut prev_nested_time = h.start_time;

                for (nested_idx, nested) in stream.nested.iter().enumerate() {
                    if unlikely(!nested.start_time.is_finite()) {
                        return Err(CatchBeatmapError::NonFiniteTime { idx });
                    } else if unlikely(!nested.x.is_finite()) {
                        return Err(CatchBeatmapError::NonFinitePosition { idx });
                    } else if unlikely(nested.start_time < prev_nested_time) {
                        return Err(CatchBeatmapError::UnsortedNested { idx, nested_idx });
                    }

                    prev_nested_time = nested.start_time;
                }
            }
            HitObjectKind::BananaShower(ref shower) => {
                if unlikely(!shower.end_time.is_finite()) {
                    return Err(CatchBeatmapError::NonFiniteTime { idx });
                }
            }
        }

        prev_start_time = h.start_time;
    }

    Ok(())
}

/// Expand all hitobjects into catch objects and their groups.
///
/// Assumes the map was validated.
pub(super) fn convert_objects(map: &Beatmap) -> (Vec<CatchHitObject>, Vec<ObjectGroup>) {
    let mut objects = Vec::with_capacity(map.hit_objects.len());
    let mut groups = Vec::with_capacity(map.hit_objects.len());

    // Combo information of objects that expanded into nothing is carried
    // over to the next produced object.
    let mut pending_new_combo = false;
    let mut pending_combo_offset: u32 = 0;

    for h in map.hit_objects.iter() {
        let start = objects.len();
        let kind = convert_object(h, &mut objects);

        pending_new_combo |= h.new_combo;
        pending_combo_offset = pending_combo_offset.saturating_add(h.combo_offset);

        if pending_new_combo {
            if let Some(first) = objects.get_mut(start) {
                first.new_combo = true;
                first.combo_offset = pending_combo_offset;
                pending_new_combo = false;
                pending_combo_offset = 0;
            }
        } else {
            pending_combo_offset = 0;
        }

        groups.push(ObjectGroup {
            kind,
            x: h.x,
            start_time: h.start_time,
            objects: start..objects.len(),
        });
    }

    (objects, groups)
}

fn convert_object(h: &HitObject, objects: &mut Vec<CatchHitObject>) -> ObjectGroupKind {
    let mut push = |kind: CatchObjectKind, x: f32, start_time: f64| {
        let idx = objects.len();
        objects.push(CatchHitObject::new(
            kind,
            clamp_to_playfield(x),
            start_time,
            idx,
        ));
    };

    match h.kind {
        HitObjectKind::Fruit => {
            push(CatchObjectKind::Fruit, h.x, h.start_time);

            ObjectGroupKind::Fruit
        }
        HitObjectKind::JuiceStream(ref stream) => {
            for nested in stream.nested.iter() {
                let kind = match nested.kind {
                    NestedObjectKind::Fruit => CatchObjectKind::Fruit,
                    NestedObjectKind::Droplet => CatchObjectKind::Droplet,
                    NestedObjectKind::TinyDroplet => CatchObjectKind::TinyDroplet,
                };

                push(kind, nested.x, nested.start_time);
            }

            ObjectGroupKind::JuiceStream {
                end_x: stream.end_x,
            }
        }
        HitObjectKind::BananaShower(ref shower) => {
            for time in shower.banana_times(h.start_time) {
                // * Bananas are positioned entirely through their offset
                push(CatchObjectKind::Banana, 0.0, time);
            }

            ObjectGroupKind::BananaShower
        }
    }
}

fn clamp_to_playfield(value: f32) -> f32 {
    value.clamp(0.0, PLAYFIELD_WIDTH)
}

#[cfg(test)]
mod tests {
    use crate::model::hit_object::{JuiceStream, NestedObject};

    use super::*;

    fn nested(x: f32, start_time: f64, kind: NestedObjectKind) -> NestedObject {
        NestedObject {
            x,
            start_time,
            kind,
        }
    }

    fn map(hit_objects: Vec<HitObject>) -> Beatmap {
        Beatmap {
            hit_objects,
            ..Default::default()
        }
    }

    #[test]
    fn rejects_unsorted() {
        let map = map(vec![HitObject::fruit(0.0, 500.0), HitObject::fruit(0.0, 400.0)]);

        assert_eq!(
            validate(&map),
            Err(CatchBeatmapError::UnsortedObjects {
                idx: 1,
                start_time: 400.0,
                prev_start_time: 500.0,
            })
        );
    }

    #[test]
    fn rejects_non_finite() {
        let nan_time = map(vec![HitObject::fruit(0.0, f64::NAN)]);
        assert_eq!(
            validate(&nan_time),
            Err(CatchBeatmapError::NonFiniteTime { idx: 0 })
        );

        let inf_pos = map(vec![HitObject::fruit(f32::INFINITY, 0.0)]);
        assert_eq!(
            validate(&inf_pos),
            Err(CatchBeatmapError::NonFinitePosition { idx: 0 })
        );
    }

    #[test]
    fn rejects_unsorted_nested() {
        let stream = JuiceStream {
            end_x: 100.0,
            nested: vec![
                nested(0.0, 100.0, NestedObjectKind::Fruit),
                nested(50.0, 90.0, NestedObjectKind::Droplet),
            ],
        };

        let map = map(vec![HitObject::juice_stream(0.0, 100.0, stream)]);

        assert_eq!(
            validate(&map),
            Err(CatchBeatmapError::UnsortedNested {
                idx: 0,
                nested_idx: 1
            })
        );
    }

    #[test]
    fn expands_groups() {
        let stream = JuiceStream {
            end_x: 200.0,
            nested: vec![
                nested(100.0, 1000.0, NestedObjectKind::Fruit),
                nested(125.0, 1050.0, NestedObjectKind::TinyDroplet),
                nested(150.0, 1100.0, NestedObjectKind::Droplet),
                nested(200.0, 1200.0, NestedObjectKind::Fruit),
            ],
        };

        let map = map(vec![
            HitObject::fruit(600.0, 500.0).with_new_combo(0),
            HitObject::juice_stream(100.0, 1000.0, stream).with_new_combo(2),
            HitObject::banana_shower(1500.0, 1700.0),
        ]);

        let (objects, groups) = convert_objects(&map);

        let kinds: Vec<_> = objects.iter().map(CatchHitObject::kind).collect();

        assert_eq!(
            kinds,
            [
                CatchObjectKind::Fruit,
                CatchObjectKind::Fruit,
                CatchObjectKind::TinyDroplet,
                CatchObjectKind::Droplet,
                CatchObjectKind::Fruit,
                CatchObjectKind::Banana,
                CatchObjectKind::Banana,
                CatchObjectKind::Banana,
            ]
        );

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].objects, 0..1);
        assert_eq!(groups[1].objects, 1..5);
        assert_eq!(groups[2].objects, 5..8);
        assert_eq!(groups[1].kind, ObjectGroupKind::JuiceStream { end_x: 200.0 });

        // clamped into the playfield
        assert!((objects[0].original_x() - PLAYFIELD_WIDTH).abs() < f32::EPSILON);

        assert!(objects[1].new_combo());
        assert_eq!(objects[1].combo_offset(), 2);
        assert!(!objects[2].new_combo());

        for (i, h) in objects.iter().enumerate() {
            assert_eq!(h.index_in_beatmap(), i);
        }
    }

    #[test]
    fn empty_group_carries_new_combo() {
        let map = map(vec![
            HitObject::fruit(0.0, 0.0),
            HitObject::banana_shower(100.0, 100.0).with_new_combo(1),
            HitObject::fruit(0.0, 200.0),
        ]);

        let (objects, groups) = convert_objects(&map);

        assert_eq!(objects.len(), 2);
        assert!(groups[1].objects.is_empty());
        assert!(objects[1].new_combo());
        assert_eq!(objects[1].combo_offset(), 1);
    }

    #[test]
    fn carried_combo_offsets_saturate() {
        let map = map(vec![
            HitObject::banana_shower(0.0, 0.0).with_new_combo(u32::MAX),
            HitObject::fruit(0.0, 100.0).with_new_combo(1),
        ]);

        let (objects, _) = convert_objects(&map);

        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].combo_offset(), u32::MAX);
    }
}
