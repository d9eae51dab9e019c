use crate::league::{PointsConfig, RaceResult, SessionKind};

/// Points earned by one result in one session.
///
/// Base points come from the session's table indexed by position, whatever
/// the status. The fastest-lap bonus needs a finished result and, when the
/// config says so, a points-scoring position.
pub fn compute_points(result: &RaceResult, config: &PointsConfig, kind: SessionKind) -> u32 {
    let base_points = result
        .position
        .and_then(|position| position.checked_sub(1))
        .and_then(|index| config.table(kind).get(index as usize))
        .copied()
        .unwrap_or_default();

    let bonus_eligible = result.fastest_lap
        && result.status.is_finished()
        && (!config.fastest_lap_only_if_points || base_points > 0);

    if bonus_eligible {
        base_points.saturating_add(config.fastest_lap_bonus)
    } else {
        base_points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::ResultStatus;
    use rstest::rstest;

    fn config(only_if_points: bool) -> PointsConfig {
        PointsConfig {
            feature_points: vec![25, 18, 15, 12, 10, 8, 6, 4, 2, 1],
            sprint_points: vec![8, 7, 6, 5, 4, 3, 2, 1],
            fastest_lap_bonus: 1,
            fastest_lap_only_if_points: only_if_points,
            season: 3,
            name: None,
        }
    }

    fn result(position: Option<u32>, status: ResultStatus, fastest_lap: bool) -> RaceResult {
        RaceResult {
            position,
            driver_id: "driver".to_string(),
            status,
            fastest_lap,
            ..RaceResult::default()
        }
    }

    #[rstest]
    #[case(Some(1), ResultStatus::Finished, true, 26)]
    #[case(Some(1), ResultStatus::Dnf, true, 25)]
    #[case(Some(1), ResultStatus::Finished, false, 25)]
    #[case(Some(10), ResultStatus::Finished, true, 2)]
    #[case(Some(11), ResultStatus::Finished, true, 0)]
    #[case(Some(0), ResultStatus::Finished, false, 0)]
    #[case(None, ResultStatus::Dns, true, 0)]
    #[case(Some(3), ResultStatus::Unknown, true, 15)]
    fn test_feature_points(
        #[case] position: Option<u32>,
        #[case] status: ResultStatus,
        #[case] fastest_lap: bool,
        #[case] expected: u32,
    ) {
        let points = compute_points(
            &result(position, status, fastest_lap),
            &config(true),
            SessionKind::Feature,
        );
        assert_eq!(points, expected);
    }

    #[test]
    fn test_unconditional_bonus_outside_points() {
        let points = compute_points(
            &result(Some(15), ResultStatus::Finished, true),
            &config(false),
            SessionKind::Feature,
        );
        assert_eq!(points, 1);
    }

    #[test]
    fn test_sprint_uses_sprint_table() {
        let points = compute_points(
            &result(Some(2), ResultStatus::Finished, false),
            &config(true),
            SessionKind::Sprint,
        );
        assert_eq!(points, 7);
    }

    #[test]
    fn test_empty_sprint_table_scores_nothing() {
        let config = PointsConfig {
            sprint_points: vec![],
            ..config(true)
        };
        let points = compute_points(
            &result(Some(1), ResultStatus::Finished, true),
            &config,
            SessionKind::Sprint,
        );
        assert_eq!(points, 0);
    }

    #[test]
    fn test_bonus_saturates_instead_of_overflowing() {
        let config = PointsConfig {
            feature_points: vec![u32::MAX],
            fastest_lap_bonus: 5,
            ..config(false)
        };
        let points = compute_points(
            &result(Some(1), ResultStatus::Finished, true),
            &config,
            SessionKind::Feature,
        );
        assert_eq!(points, u32::MAX);
    }

    #[rstest]
    #[case(r#"{"position": 1, "driverId": "a", "status": null, "fastestLap": true}"#, 25)]
    #[case(r#"{"position": 1, "driverId": "a", "status": "Finished", "fastestLap": null}"#, 25)]
    #[case(r#"{"position": 2, "driverId": "a", "status": "Finished", "fastestLap": true, "penalties": null}"#, 19)]
    fn test_null_fields_still_score(#[case] json: &str, #[case] expected: u32) {
        let result: RaceResult = serde_json::from_str(json).unwrap();
        let points = compute_points(&result, &config(true), SessionKind::Feature);
        assert_eq!(points, expected);
    }
}
