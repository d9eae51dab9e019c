use std::collections::HashMap;

use serde::Serialize;

use super::{DriverStatLine, LeaderboardEntry, ScopeOption, StatKey, StatsError};

/// Finalized statistics for every scope, ready to be re-ranked per selection
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScopedLeaderboards {
    options: Vec<ScopeOption>,
    scopes: HashMap<String, Vec<DriverStatLine>>,
}

impl ScopedLeaderboards {
    pub fn new(options: Vec<ScopeOption>, scopes: HashMap<String, Vec<DriverStatLine>>) -> Self {
        Self { options, scopes }
    }

    pub fn options(&self) -> &[ScopeOption] {
        &self.options
    }

    pub fn rows(&self, scope: &str) -> Option<&[DriverStatLine]> {
        self.scopes.get(scope).map(Vec::as_slice)
    }

    pub fn driver(&self, scope: &str, driver_id: &str) -> Option<&DriverStatLine> {
        self.rows(scope)?
            .iter()
            .find(|line| line.driver_id == driver_id)
    }

    /// Top `limit` drivers of `scope` for `stat`
    pub fn top(
        &self,
        scope: &str,
        stat: StatKey,
        limit: usize,
    ) -> Result<Vec<LeaderboardEntry>, StatsError> {
        let rows = self
            .rows(scope)
            .ok_or_else(|| StatsError::UnknownScope(scope.to_string()))?;

        Ok(rank_for_stat(rows, stat, limit)
            .into_iter()
            .enumerate()
            .map(|(index, line)| {
                let value = line.value(stat);
                LeaderboardEntry {
                    rank: index as u32 + 1,
                    driver_id: line.driver_id.clone(),
                    driver: line.driver.clone(),
                    value,
                    display_value: stat.format_value(value),
                }
            })
            .collect())
    }
}

/// Drivers with a nonzero value for `stat`, best first.
///
/// Ties fall back to career points, then display name.
pub fn rank_for_stat(
    rows: &[DriverStatLine],
    stat: StatKey,
    limit: usize,
) -> Vec<&DriverStatLine> {
    let mut ranked: Vec<&DriverStatLine> = rows
        .iter()
        .filter(|line| line.value(stat) > 0.0)
        .collect();

    ranked.sort_by(|a, b| {
        let by_value = if stat.higher_is_better() {
            b.value(stat).total_cmp(&a.value(stat))
        } else {
            a.value(stat).total_cmp(&b.value(stat))
        };

        by_value
            .then(b.career_points.cmp(&a.career_points))
            .then_with(|| a.driver.cmp(&b.driver))
            .then_with(|| a.driver_id.cmp(&b.driver_id))
    });

    ranked.truncate(limit);
    ranked
}
