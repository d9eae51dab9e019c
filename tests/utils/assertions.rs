//! Test assertion helpers - fluent API for verifying standings
#![allow(dead_code)] // Test utilities may not all be used in every test

use serde_json::Value;

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Fluent checks over a `/standings` response body
pub struct StandingsAssertion<'a> {
    body: &'a Value,
}

impl<'a> StandingsAssertion<'a> {
    pub fn new(body: &'a Value) -> Self {
        Self { body }
    }

    fn drivers(&self) -> &'a Vec<Value> {
        self.body["driverStandings"]
            .as_array()
            .expect("driverStandings should be an array")
    }

    fn driver(&self, driver_id: &str) -> &'a Value {
        self.drivers()
            .iter()
            .find(|row| row["driverId"] == driver_id)
            .unwrap_or_else(|| panic!("{} should be in the standings", driver_id))
    }

    pub fn driver_order(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .drivers()
            .iter()
            .map(|row| row["driverId"].as_str().unwrap())
            .collect();
        assert_eq!(actual, expected, "driver standings order");
        self
    }

    pub fn driver_points(self, driver_id: &str, points: u64) -> Self {
        assert_eq!(
            self.driver(driver_id)["points"].as_u64(),
            Some(points),
            "points of {}",
            driver_id
        );
        self
    }

    pub fn position_change(self, driver_id: &str, change: i64) -> Self {
        assert_eq!(
            self.driver(driver_id)["positionChange"].as_i64(),
            Some(change),
            "position change of {}",
            driver_id
        );
        self
    }

    pub fn driver_field(self, driver_id: &str, field: &str, value: u64) -> Self {
        assert_eq!(
            self.driver(driver_id)[field].as_u64(),
            Some(value),
            "{} of {}",
            field,
            driver_id
        );
        self
    }

    pub fn team_order(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.body["teamStandings"]
            .as_array()
            .expect("teamStandings should be an array")
            .iter()
            .map(|row| row["teamId"].as_str().unwrap())
            .collect();
        assert_eq!(actual, expected, "team standings order");
        self
    }

    pub fn team_points(self, team_id: &str, points: u64) -> Self {
        let team = self.body["teamStandings"]
            .as_array()
            .expect("teamStandings should be an array")
            .iter()
            .find(|row| row["teamId"] == team_id)
            .unwrap_or_else(|| panic!("{} should be in the team standings", team_id));
        assert_eq!(team["points"].as_u64(), Some(points), "points of {}", team_id);
        self
    }
}
