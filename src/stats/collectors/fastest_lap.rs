use super::super::{ResultSample, ScopedStatEntry, StatCollector};

pub struct FastestLapCollector;

impl Default for FastestLapCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FastestLapCollector {
    pub fn new() -> Self {
        Self
    }
}

impl StatCollector for FastestLapCollector {
    fn collect(&self, entry: &mut ScopedStatEntry, sample: &ResultSample<'_>) {
        // Counted whether or not the bonus was awarded
        if sample.result.fastest_lap {
            entry.fastest_laps += 1;
        }
    }
}
