use crate::catch::{catcher::CatcherSettings, object::CatchHitObject};

/// Link every object that requires a hyperdash to the object it must
/// reach and store the slack of every other jump.
///
/// Only plated objects take part; see
/// [`CatchObjectKind::is_hyper_dash_candidate`].
///
/// Returns the amount of hyperdashes.
///
/// [`CatchObjectKind::is_hyper_dash_candidate`]: crate::catch::CatchObjectKind::is_hyper_dash_candidate
pub(super) fn initialize_hyper_dash(
    catcher: &CatcherSettings,
    objects: &mut [CatchHitObject],
) -> usize {
    let mut candidates: Vec<usize> = objects
        .iter()
        .enumerate()
        .filter(|(_, h)| h.kind.is_hyper_dash_candidate())
        .map(|(i, _)| i)
        .collect();

    // Nested objects may overlap with later hitobjects so the order by
    // index is not necessarily the order by time
    candidates.sort_by(|&a, &b| objects[a].start_time.total_cmp(&objects[b].start_time));

    let Some(&first) = candidates.first() else {
        return 0;
    };

    let mut last_dir = 0;
    let mut last_excess = catcher.half_catcher_width(objects[first].scale);
    let mut hyper_dashes = 0;

    for pair in candidates.windows(2) {
        let (curr_idx, next_idx) = (pair[0], pair[1]);
        let curr = &objects[curr_idx];
        let next = &objects[next_idx];

        let half_catcher_width = catcher.half_catcher_width(curr.scale);

        let this_dir = if next.x() > curr.x() { 1 } else { -1 };
        let time_to_next = catcher.available_time(curr.start_time, next.start_time);

        let reach = if last_dir == this_dir {
            last_excess
        } else {
            half_catcher_width
        };

        let dist_to_next = f64::from((next.x() - curr.x()).abs());
        let dist_to_hyper =
            (catcher.max_normal_distance(time_to_next, reach) - dist_to_next) as f32;

        let strictly_later = next.start_time > curr.start_time;

        let curr = &mut objects[curr_idx];
        curr.distance_to_hyper_dash = dist_to_hyper;

        if dist_to_hyper < 0.0 {
            if strictly_later {
                curr.hyper_dash_target = Some(next_idx);
                hyper_dashes += 1;
            }

            last_excess = half_catcher_width;
        } else {
            last_excess = f64::from(dist_to_hyper).clamp(0.0, half_catcher_width);
        }

        last_dir = this_dir;
    }

    hyper_dashes
}

#[cfg(test)]
mod tests {
    use crate::{catch::object::CatchObjectKind, util::float_ext::FloatExt};

    use super::*;

    fn object(kind: CatchObjectKind, x: f32, start_time: f64, idx: usize) -> CatchHitObject {
        let mut h = CatchHitObject::new(kind, x, start_time, idx);
        h.scale = 0.5;

        h
    }

    fn fruits(positions: &[(f32, f64)]) -> Vec<CatchHitObject> {
        positions
            .iter()
            .enumerate()
            .map(|(i, &(x, time))| object(CatchObjectKind::Fruit, x, time, i))
            .collect()
    }

    #[test]
    fn unreachable_jump() {
        let catcher = CatcherSettings::new()
            .base_speed(0.5)
            .area_size(100.0)
            .frame_leniency(0.0);

        let mut objects = fruits(&[(100.0, 1000.0), (400.0, 1200.0)]);
        let count = initialize_hyper_dash(&catcher, &mut objects);

        assert_eq!(count, 1);
        assert_eq!(objects[0].hyper_dash_target(), Some(1));
        assert!(
            objects[0].distance_to_hyper_dash().almost_eq(-150.0, 1e-3),
            "{}",
            objects[0].distance_to_hyper_dash()
        );

        assert!(!objects[1].hyper_dash());
        assert!(objects[1].distance_to_hyper_dash().eq(0.0));
    }

    #[test]
    fn reachable_jump() {
        let catcher = CatcherSettings::new();
        let mut objects = fruits(&[(100.0, 1000.0), (200.0, 1200.0)]);
        initialize_hyper_dash(&catcher, &mut objects);

        // 195.833 + 53.375 - 100
        let expected = 200.0 - CatcherSettings::FRAME_LENIENCY + 53.375 - 100.0;

        assert!(!objects[0].hyper_dash());
        assert!(
            f64::from(objects[0].distance_to_hyper_dash()).almost_eq(expected, 1e-3),
            "{} != {expected}",
            objects[0].distance_to_hyper_dash()
        );
    }

    #[test]
    fn excess_carries_over() {
        let catcher = CatcherSettings::new().frame_leniency(0.0);

        // Each jump is 240px in 200ms to the right. The first jump can use
        // the full half width of 53.375, the second only the leftover slack.
        let mut objects = fruits(&[(0.0, 0.0), (240.0, 200.0), (480.0, 400.0)]);
        initialize_hyper_dash(&catcher, &mut objects);

        let first = objects[0].distance_to_hyper_dash();
        assert!(first.almost_eq(200.0 + 53.375 - 240.0, 1e-3), "{first}");
        assert!(!objects[0].hyper_dash());

        let second = objects[1].distance_to_hyper_dash();
        assert!(second.almost_eq(200.0 + first - 240.0, 1e-3), "{second}");
        assert!(objects[1].hyper_dash());
        assert_eq!(objects[1].hyper_dash_target(), Some(2));
    }

    #[test]
    fn direction_change_resets_reach() {
        let catcher = CatcherSettings::new().frame_leniency(0.0);

        let mut objects = fruits(&[(0.0, 0.0), (240.0, 200.0), (0.0, 400.0)]);
        initialize_hyper_dash(&catcher, &mut objects);

        let second = objects[1].distance_to_hyper_dash();
        assert!(second.almost_eq(200.0 + 53.375 - 240.0, 1e-3), "{second}");
        assert!(!objects[1].hyper_dash());
    }

    #[test]
    fn skips_non_candidates() {
        let catcher = CatcherSettings::new();

        let mut objects = vec![
            object(CatchObjectKind::Fruit, 0.0, 0.0, 0),
            object(CatchObjectKind::TinyDroplet, 500.0, 50.0, 1),
            object(CatchObjectKind::Banana, 500.0, 60.0, 2),
            object(CatchObjectKind::Droplet, 10.0, 100.0, 3),
        ];

        initialize_hyper_dash(&catcher, &mut objects);

        assert!(!objects[0].hyper_dash());
        assert!(objects[1].distance_to_hyper_dash().eq(0.0));
        assert!(objects[2].distance_to_hyper_dash().eq(0.0));
        assert!(objects[0].distance_to_hyper_dash() > 0.0);
    }

    #[test]
    fn simultaneous_objects_are_not_linked() {
        let catcher = CatcherSettings::new();
        let mut objects = fruits(&[(0.0, 500.0), (500.0, 500.0)]);
        initialize_hyper_dash(&catcher, &mut objects);

        assert!(objects[0].distance_to_hyper_dash() < 0.0);
        assert!(!objects[0].hyper_dash());
    }

    #[test]
    fn links_follow_time_order() {
        let catcher = CatcherSettings::new();

        // index 1 is a nested object that ends after index 2 starts
        let mut objects = fruits(&[(0.0, 0.0), (500.0, 300.0), (0.0, 100.0)]);
        initialize_hyper_dash(&catcher, &mut objects);

        assert_eq!(objects[2].hyper_dash_target(), Some(1));
        assert!(!objects[0].hyper_dash());
        assert!(!objects[1].hyper_dash());
    }
}
