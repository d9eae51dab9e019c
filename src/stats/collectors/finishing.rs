use super::super::{ResultSample, ScopedStatEntry, StatCollector};

/// Attendance, wins, podiums and average finish.
///
/// Only feature sessions count towards attendance, wins, podiums and the
/// average finish. Sprint winners get a separate tally.
pub struct FinishingCollector;

impl Default for FinishingCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FinishingCollector {
    pub fn new() -> Self {
        Self
    }
}

impl StatCollector for FinishingCollector {
    fn collect(&self, entry: &mut ScopedStatEntry, sample: &ResultSample<'_>) {
        let result = sample.result;

        if sample.is_sprint() {
            if result.is_win() {
                entry.sprint_wins += 1;
            }
            return;
        }

        entry.races_attended += 1;
        if result.is_win() {
            entry.wins += 1;
        }
        if result.is_podium() {
            entry.podiums += 1;
        }

        if result.status.is_finished() {
            if let Some(position) = result.position {
                entry.average_finish.record(position);
            }
        }
    }
}
