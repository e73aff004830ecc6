use thiserror::Error;

/// Reasons why hitobjects cannot be turned into a [`CatchBeatmap`].
///
/// [`CatchBeatmap`]: crate::catch::CatchBeatmap
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CatchBeatmapError {
    /// A hitobject starts before its predecessor.
    #[error("hitobject {idx} starts at {start_time}ms which is before the previous hitobject at {prev_start_time}ms")]
    UnsortedObjects {
        idx: usize,
        start_time: f64,
        prev_start_time: f64,
    },
    /// A hitobject's time is `NaN` or infinite.
    #[error("hitobject {idx} has a non-finite time")]
    NonFiniteTime { idx: usize },
    /// A hitobject's position is `NaN` or infinite.
    #[error("hitobject {idx} has a non-finite position")]
    NonFinitePosition { idx: usize },
    /// An object nested in a juice stream starts before its predecessor or
    /// before the stream itself.
    #[error("nested object {nested_idx} of juice stream {idx} is out of order")]
    UnsortedNested { idx: usize, nested_idx: usize },
}
