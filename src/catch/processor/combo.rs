use crate::catch::object::{CatchHitObject, ComboChange, ComboChanges, ComboState};

/// Assign combo information to all objects and collect the objects whose
/// information changed.
pub(super) fn update_combo_information(objects: &mut [CatchHitObject]) -> ComboChanges {
    let mut states: Vec<ComboState> = Vec::with_capacity(objects.len());

    for h in objects.iter() {
        let state = match states.last_mut() {
            None => ComboState {
                index_in_current_combo: 0,
                combo_index: if h.new_combo { h.combo_offset } else { 0 },
                last_in_combo: false,
            },
            Some(last) if h.new_combo => {
                last.last_in_combo = true;

                ComboState {
                    index_in_current_combo: 0,
                    combo_index: last
                        .combo_index
                        .saturating_add(h.combo_offset)
                        .saturating_add(1),
                    last_in_combo: false,
                }
            }
            Some(last) => ComboState {
                index_in_current_combo: last.index_in_current_combo + 1,
                combo_index: last.combo_index,
                last_in_combo: false,
            },
        };

        states.push(state);
    }

    if let Some(last) = states.last_mut() {
        last.last_in_combo = true;
    }

    let changes = objects
        .iter_mut()
        .zip(states)
        .enumerate()
        .filter_map(|(idx, (h, new))| {
            let old = std::mem::replace(&mut h.combo, new);

            (old != new).then_some(ComboChange { idx, old, new })
        })
        .collect();

    ComboChanges::new(changes)
}
