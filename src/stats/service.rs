use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{
    collectors::{
        CareerPointsCollector, FastestLapCollector, FinishingCollector, RetirementCollector,
    },
    leaderboard::ScopedLeaderboards,
    seasons::SeasonResolver,
    DriverCatalog, DriverStatLine, ResultSample, ScopeOption, ScopedStatEntry, StatCollector,
    LIFETIME_SCOPE,
};
use crate::league::{LeagueArchive, PointsConfig, Race, SeasonDefinition};
use crate::standings::compute_points;

/// Everything the statistics are computed from
#[derive(Debug, Clone, Copy)]
pub struct StatsSources<'a> {
    pub seasons: &'a [SeasonDefinition],
    pub archive: &'a LeagueArchive,
    pub races: &'a [Race],
    pub current_points: &'a PointsConfig,
    pub drivers: &'a DriverCatalog,
}

/// Scope key of the season described by the current points config
pub fn current_scope_key(points: &PointsConfig) -> String {
    format!("s{}", points.season)
}

/// Lifetime first, then every season definition, then the current season
/// when no definition covers it.
pub fn scope_options(
    seasons: &[SeasonDefinition],
    current_points: &PointsConfig,
) -> Vec<ScopeOption> {
    let mut options = vec![ScopeOption {
        key: LIFETIME_SCOPE.to_string(),
        label: "Lifetime (All Seasons)".to_string(),
    }];

    options.extend(seasons.iter().map(|season| ScopeOption {
        key: season.id.clone(),
        label: season
            .label
            .clone()
            .unwrap_or_else(|| format!("Season {}", season.id)),
    }));

    let current_key = current_scope_key(current_points);
    if !options.iter().any(|option| option.key == current_key) {
        options.push(ScopeOption {
            key: current_key,
            label: current_points
                .name
                .clone()
                .unwrap_or_else(|| format!("Season {}", current_points.season)),
        });
    }

    options
}

type ScopeTotals = HashMap<String, HashMap<String, ScopedStatEntry>>;

/// Builds per-scope driver statistics from the archive and the current season.
pub struct StatsAggregator {
    collectors: Vec<Arc<dyn StatCollector>>,
}

impl StatsAggregator {
    pub fn builder() -> StatsAggregatorBuilder {
        StatsAggregatorBuilder::new()
    }

    pub fn collectors(&self) -> Vec<Arc<dyn StatCollector>> {
        self.collectors.clone()
    }

    pub fn aggregate(&self, sources: StatsSources<'_>) -> ScopedLeaderboards {
        let options = scope_options(sources.seasons, sources.current_points);

        let mut totals: ScopeTotals = options
            .iter()
            .map(|option| (option.key.clone(), HashMap::new()))
            .collect();

        self.accumulate_archive(&mut totals, sources.archive, sources.seasons);
        self.accumulate_current_season(&mut totals, sources.races, sources.current_points);

        let scopes = totals
            .into_iter()
            .map(|(scope, entries)| (scope, finalize_scope(entries, sources.drivers)))
            .collect();

        ScopedLeaderboards::new(options, scopes)
    }

    fn accumulate_archive(
        &self,
        totals: &mut ScopeTotals,
        archive: &LeagueArchive,
        seasons: &[SeasonDefinition],
    ) {
        let mut resolver = SeasonResolver::new(seasons);

        for (index, block) in archive.seasons.iter().enumerate() {
            let Some(definition) = resolver.resolve(block) else {
                warn!(block = index, season = ?block.season, "Skipping unresolvable archive season");
                continue;
            };
            let Some(points) = definition.points.as_ref() else {
                warn!(season = %definition.id, "Skipping archive season without points config");
                continue;
            };

            debug!(
                block = index,
                season = %definition.id,
                rounds = block.rounds.len(),
                "Accumulating archive season"
            );

            for round in &block.rounds {
                self.apply_race(totals, &definition.id, &round.to_race(), points);

                for driver_id in round.special_event.iter().filter(|id| !id.is_empty()) {
                    for scope in [LIFETIME_SCOPE, definition.id.as_str()] {
                        entry_for(totals, scope, driver_id).special_events += 1;
                    }
                }
            }
        }
    }

    fn accumulate_current_season(
        &self,
        totals: &mut ScopeTotals,
        races: &[Race],
        points: &PointsConfig,
    ) {
        let scope = current_scope_key(points);
        let completed: Vec<&Race> = races.iter().filter(|race| race.is_completed()).collect();

        info!(
            season = %scope,
            races = completed.len(),
            "Accumulating current season"
        );

        for race in completed {
            self.apply_race(totals, &scope, race, points);
        }
    }

    fn apply_race(
        &self,
        totals: &mut ScopeTotals,
        season: &str,
        race: &Race,
        points: &PointsConfig,
    ) {
        for (kind, session) in race.sessions.iter() {
            for result in &session.results {
                let driver_id = result.driver_key();
                if driver_id.is_empty() {
                    continue;
                }

                let sample = ResultSample {
                    result,
                    session: kind,
                    points: compute_points(result, points, kind),
                };

                for scope in [LIFETIME_SCOPE, season] {
                    let entry = entry_for(totals, scope, driver_id);
                    for collector in &self.collectors {
                        collector.collect(entry, &sample);
                    }
                }
            }
        }
    }
}

fn entry_for<'t>(
    totals: &'t mut ScopeTotals,
    scope: &str,
    driver_id: &str,
) -> &'t mut ScopedStatEntry {
    totals
        .entry(scope.to_string())
        .or_default()
        .entry(driver_id.to_string())
        .or_default()
}

fn finalize_scope(
    entries: HashMap<String, ScopedStatEntry>,
    drivers: &DriverCatalog,
) -> Vec<DriverStatLine> {
    let mut lines: Vec<DriverStatLine> = entries
        .iter()
        .map(|(driver_id, entry)| {
            DriverStatLine::from_entry(driver_id, drivers.display_name(driver_id), entry)
        })
        .collect();
    lines.sort_by(|a, b| a.driver_id.cmp(&b.driver_id));
    lines
}

pub struct StatsAggregatorBuilder {
    collectors: Vec<Arc<dyn StatCollector>>,
}

impl Default for StatsAggregatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsAggregatorBuilder {
    fn new() -> Self {
        Self {
            collectors: vec![
                Arc::new(FinishingCollector::new()),
                Arc::new(RetirementCollector::new()),
                Arc::new(FastestLapCollector::new()),
                Arc::new(CareerPointsCollector::new()),
            ],
        }
    }

    pub fn with_collector(mut self, collector: Arc<dyn StatCollector>) -> Self {
        self.collectors.push(collector);
        self
    }

    pub fn build(self) -> StatsAggregator {
        StatsAggregator {
            collectors: self.collectors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::{
        ArchiveRound, ArchiveSeason, Driver, RaceResult, RaceSessions, RaceStatus, ResultStatus,
        SeasonLabel, Session,
    };
    use crate::stats::StatKey;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn points(season: u32) -> PointsConfig {
        PointsConfig {
            feature_points: vec![25, 18, 15, 12, 10, 8, 6, 4, 2, 1],
            sprint_points: vec![8, 7, 6, 5, 4, 3, 2, 1],
            fastest_lap_bonus: 1,
            fastest_lap_only_if_points: true,
            season,
            name: None,
        }
    }

    fn finished(driver: &str, position: u32) -> RaceResult {
        RaceResult {
            position: Some(position),
            driver_id: driver.to_string(),
            status: ResultStatus::Finished,
            ..RaceResult::default()
        }
    }

    fn seasons() -> Vec<SeasonDefinition> {
        vec![SeasonDefinition {
            id: "s1".to_string(),
            year: Some(2024),
            label: Some("Season One".to_string()),
            points: Some(points(1)),
        }]
    }

    fn archive() -> LeagueArchive {
        LeagueArchive {
            seasons: vec![
                ArchiveSeason {
                    season: Some(SeasonLabel::Text("S1".to_string())),
                    rounds: vec![ArchiveRound {
                        round: 1,
                        fastest_lap: Some("a".to_string()),
                        results: vec![finished("a", 1), finished("b", 2)],
                        special_event: vec!["b".to_string()],
                        ..ArchiveRound::default()
                    }],
                    ..ArchiveSeason::default()
                },
                ArchiveSeason {
                    season: Some(SeasonLabel::Text("Exhibition Cup".to_string())),
                    rounds: vec![ArchiveRound {
                        results: vec![finished("ghost", 1)],
                        ..ArchiveRound::default()
                    }],
                    ..ArchiveSeason::default()
                },
            ],
        }
    }

    fn current_races() -> Vec<Race> {
        vec![
            Race {
                status: RaceStatus::Completed,
                sessions: RaceSessions {
                    sprint: Some(Session::new(vec![finished("b", 1)])),
                    feature: Some(Session::new(vec![finished("a", 3), finished("b", 1)])),
                },
                ..Race::default()
            },
            Race {
                status: RaceStatus::Upcoming,
                sessions: RaceSessions {
                    sprint: None,
                    feature: Some(Session::new(vec![finished("a", 1)])),
                },
                ..Race::default()
            },
        ]
    }

    fn aggregate(aggregator: &StatsAggregator) -> ScopedLeaderboards {
        let seasons = seasons();
        let archive = archive();
        let races = current_races();
        let current = points(2);
        let drivers = DriverCatalog::new(&[Driver {
            id: "a".to_string(),
            name: "Alice".to_string(),
            ..Driver::default()
        }]);

        aggregator.aggregate(StatsSources {
            seasons: &seasons,
            archive: &archive,
            races: &races,
            current_points: &current,
            drivers: &drivers,
        })
    }

    #[test]
    fn test_scope_options_add_current_season() {
        let options = scope_options(&seasons(), &points(2));
        let keys: Vec<&str> = options.iter().map(|option| option.key.as_str()).collect();
        assert_eq!(keys, vec!["lifetime", "s1", "s2"]);
        assert_eq!(options[1].label, "Season One");
        assert_eq!(options[2].label, "Season 2");
    }

    #[test]
    fn test_scope_options_do_not_duplicate_current_season() {
        let options = scope_options(&seasons(), &points(1));
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn test_archive_and_current_feed_lifetime() {
        let leaderboards = aggregate(&StatsAggregator::builder().build());

        let alice = leaderboards.driver("lifetime", "a").unwrap();
        assert_eq!(alice.driver, "Alice");
        assert_eq!(alice.wins, 1);
        assert_eq!(alice.podiums, 2);
        assert_eq!(alice.fastest_laps, 1);
        assert_eq!(alice.career_points, 26 + 15);
        assert_eq!(alice.races_attended, 2);
        assert_eq!(alice.wdc_average_finish, 2.0);

        let b = leaderboards.driver("lifetime", "b").unwrap();
        assert_eq!(b.driver, "b");
        assert_eq!(b.sprint_wins, 1);
        assert_eq!(b.wins, 1);
        assert_eq!(b.special_events, 1);
        assert_eq!(b.career_points, 18 + 8 + 25);
    }

    #[test]
    fn test_season_scopes_are_separate() {
        let leaderboards = aggregate(&StatsAggregator::builder().build());

        let archived = leaderboards.driver("s1", "a").unwrap();
        assert_eq!(archived.career_points, 26);
        assert_eq!(archived.races_attended, 1);

        let current = leaderboards.driver("s2", "a").unwrap();
        assert_eq!(current.career_points, 15);
        assert_eq!(current.wins, 0);
        assert!(leaderboards.driver("s2", "b").unwrap().special_events == 0);
    }

    #[test]
    fn test_unresolvable_block_contributes_nothing() {
        let leaderboards = aggregate(&StatsAggregator::builder().build());
        for option in leaderboards.options() {
            assert!(leaderboards.driver(&option.key, "ghost").is_none());
        }
    }

    #[test]
    fn test_every_option_has_a_scope() {
        let leaderboards = aggregate(&StatsAggregator::builder().build());
        for option in leaderboards.options() {
            assert!(leaderboards.top(&option.key, StatKey::Wins, 10).is_ok());
        }
    }

    #[derive(Default)]
    struct CountingCollector {
        calls: AtomicU32,
    }

    impl StatCollector for CountingCollector {
        fn collect(&self, _entry: &mut ScopedStatEntry, _sample: &ResultSample<'_>) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_custom_collectors_see_every_scope_update() {
        let counter = Arc::new(CountingCollector::default());
        let aggregator = StatsAggregator::builder()
            .with_collector(counter.clone())
            .build();
        assert_eq!(aggregator.collectors().len(), 5);

        aggregate(&aggregator);

        // 2 archived results and 3 current results, each into two scopes
        assert_eq!(counter.calls.load(Ordering::SeqCst), 10);
    }
}
