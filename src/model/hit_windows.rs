/// The judgement a hit can receive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HitResult {
    Great,
    Ok,
    Meh,
    Miss,
}

/// Timing windows for judging hits, in milliseconds.
///
/// Catch objects are judged on position alone which is why they always
/// return [`HitWindows::EMPTY`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct HitWindows {
    pub great: f64,
    pub ok: f64,
    pub meh: f64,
    pub miss: f64,
}

impl HitWindows {
    /// Hit windows that contain no timing windows at all.
    pub const EMPTY: Self = Self {
        great: 0.0,
        ok: 0.0,
        meh: 0.0,
        miss: 0.0,
    };

    /// Whether there are no timing windows.
    pub fn is_empty(&self) -> bool {
        self.great <= 0.0 && self.ok <= 0.0 && self.meh <= 0.0 && self.miss <= 0.0
    }

    /// The [`HitResult`] for a hit that is `time_offset` milliseconds off.
    ///
    /// Returns `None` if the offset is outside of every window which is
    /// always the case for empty windows.
    pub fn result_for(&self, time_offset: f64) -> Option<HitResult> {
        let offset = time_offset.abs();

        [
            (self.great, HitResult::Great),
            (self.ok, HitResult::Ok),
            (self.meh, HitResult::Meh),
            (self.miss, HitResult::Miss),
        ]
        .into_iter()
        .find(|(window, _)| offset < *window)
        .map(|(_, result)| result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_result() {
        assert!(HitWindows::EMPTY.is_empty());
        assert_eq!(HitWindows::EMPTY.result_for(0.0), None);
        assert_eq!(HitWindows::EMPTY.result_for(-25.0), None);
    }

    #[test]
    fn windows_are_ordered() {
        let windows = HitWindows {
            great: 20.0,
            ok: 50.0,
            meh: 80.0,
            miss: 120.0,
        };

        assert!(!windows.is_empty());
        assert_eq!(windows.result_for(-10.0), Some(HitResult::Great));
        assert_eq!(windows.result_for(30.0), Some(HitResult::Ok));
        assert_eq!(windows.result_for(70.0), Some(HitResult::Meh));
        assert_eq!(windows.result_for(100.0), Some(HitResult::Miss));
        assert_eq!(windows.result_for(200.0), None);
    }
}
