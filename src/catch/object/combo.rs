use std::{slice, vec};

/// Combo information of a [`CatchHitObject`], assigned by the processor.
///
/// [`CatchHitObject`]: crate::catch::CatchHitObject
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComboState {
    /// Position within the current combo group, starting at `0`.
    pub index_in_current_combo: u32,
    /// Index of the combo group across the whole beatmap, including combo
    /// offsets.
    pub combo_index: u32,
    /// Whether this is the last object of its combo group.
    pub last_in_combo: bool,
}

/// A [`ComboState`] that changed during processing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ComboChange {
    /// Index of the object within the beatmap.
    pub idx: usize,
    pub old: ComboState,
    pub new: ComboState,
}

/// All combo changes of a single processor pass in ascending index order.
///
/// Display collaborators poll this instead of observing each object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComboChanges {
    changes: Vec<ComboChange>,
}

impl ComboChanges {
    pub(crate) const fn new(changes: Vec<ComboChange>) -> Self {
        Self { changes }
    }

    /// The amount of changed objects.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Whether no object changed.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Iterate over all changes.
    pub fn iter(&self) -> slice::Iter<'_, ComboChange> {
        self.changes.iter()
    }

    /// The change for the object at the given index, if it changed.
    pub fn get(&self, idx: usize) -> Option<&ComboChange> {
        self.changes
            .binary_search_by_key(&idx, |change| change.idx)
            .ok()
            .map(|i| &self.changes[i])
    }
}

impl IntoIterator for ComboChanges {
    type Item = ComboChange;
    type IntoIter = vec::IntoIter<ComboChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ComboChanges {
    type Item = &'a ComboChange;
    type IntoIter = slice::Iter<'a, ComboChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
