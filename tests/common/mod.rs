#![allow(unused)]

use rosu_catch::model::{
    beatmap::Beatmap,
    hit_object::{HitObject, JuiceStream, NestedObject, NestedObjectKind},
};

/// Fruits at the given `(x, start_time)` pairs, starting with a new combo.
pub fn fruits(positions: &[(f32, f64)]) -> Vec<HitObject> {
    positions
        .iter()
        .enumerate()
        .map(|(i, &(x, start_time))| {
            let h = HitObject::fruit(x, start_time);

            if i == 0 {
                h.with_new_combo(0)
            } else {
                h
            }
        })
        .collect()
}

/// A juice stream with a fruit at each end, a droplet in the middle, and
/// tiny droplets in between.
pub fn juice_stream(x: f32, end_x: f32, start_time: f64, end_time: f64) -> HitObject {
    let nested_at = |t: f64, kind| NestedObject {
        x: x + (end_x - x) * t as f32,
        start_time: start_time + (end_time - start_time) * t,
        kind,
    };

    let nested = vec![
        nested_at(0.0, NestedObjectKind::Fruit),
        nested_at(0.25, NestedObjectKind::TinyDroplet),
        nested_at(0.5, NestedObjectKind::Droplet),
        nested_at(0.75, NestedObjectKind::TinyDroplet),
        nested_at(1.0, NestedObjectKind::Fruit),
    ];

    HitObject::juice_stream(x, start_time, JuiceStream { end_x, nested })
}

pub fn map(ar: f32, cs: f32, hit_objects: Vec<HitObject>) -> Beatmap {
    Beatmap {
        ar,
        cs,
        hit_objects,
    }
}

/// A map mixing every kind of hitobject.
pub fn mixed_map() -> Beatmap {
    let mut hit_objects = fruits(&[(50.0, 500.0), (60.0, 700.0), (60.0, 850.0)]);
    hit_objects.push(juice_stream(100.0, 400.0, 1000.0, 1600.0).with_new_combo(0));
    hit_objects.push(HitObject::fruit(20.0, 1750.0));
    hit_objects.push(HitObject::banana_shower(2000.0, 2600.0).with_new_combo(1));
    hit_objects.push(HitObject::fruit(300.0, 3000.0).with_new_combo(0));
    hit_objects.push(HitObject::fruit(320.0, 3120.0));

    map(8.0, 4.0, hit_objects)
}
