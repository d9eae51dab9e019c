use super::super::{ResultSample, ScopedStatEntry, StatCollector};

pub struct CareerPointsCollector;

impl Default for CareerPointsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl CareerPointsCollector {
    pub fn new() -> Self {
        Self
    }
}

impl StatCollector for CareerPointsCollector {
    fn collect(&self, entry: &mut ScopedStatEntry, sample: &ResultSample<'_>) {
        entry.career_points = entry.career_points.saturating_add(sample.points);
    }
}
