use super::super::{ResultSample, ScopedStatEntry, StatCollector};

/// Counts DNF and retired results in any session
pub struct RetirementCollector;

impl Default for RetirementCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl RetirementCollector {
    pub fn new() -> Self {
        Self
    }
}

impl StatCollector for RetirementCollector {
    fn collect(&self, entry: &mut ScopedStatEntry, sample: &ResultSample<'_>) {
        if sample.result.status.is_retirement() {
            entry.dnfs += 1;
        }
    }
}
