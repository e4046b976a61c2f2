/// Per-group-type A/B reception counters, plus the two counters that track
/// groups the dispatcher could not even classify. Intended for a log
/// exerciser's reporting, not for decode logic itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// `groups[code][0]` counts version A, `groups[code][1]` counts version B.
    pub groups: [[u32; 2]; 16],
    pub blockb_errors: u32,
    pub groups_decoded: u32,
}

impl Stats {
    pub fn record(&mut self, code: u8, version_b: bool) {
        self.groups[code as usize][version_b as usize] += 1;
        self.groups_decoded += 1;
    }
}
