use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverStanding {
    pub driver_id: String,
    pub team_id: Option<String>, // Team of the most recent race processed
    pub points: u32,
    pub wins: u32,
    pub podiums: u32,
    pub dnfs: u32,
    pub starts: u32,
    pub position: u32,
    pub position_change: i32, // Positive means the driver moved up
}

impl DriverStanding {
    pub fn new(driver_id: String, team_id: Option<String>) -> Self {
        Self {
            driver_id,
            team_id,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub team_id: String,
    pub points: u32,
    pub wins: u32,
    pub position: u32,
    pub position_change: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standings {
    pub driver_standings: Vec<DriverStanding>,
    pub team_standings: Vec<TeamStanding>,
}

impl Standings {
    pub fn driver(&self, driver_id: &str) -> Option<&DriverStanding> {
        self.driver_standings
            .iter()
            .find(|row| row.driver_id == driver_id)
    }

    pub fn team(&self, team_id: &str) -> Option<&TeamStanding> {
        self.team_standings.iter().find(|row| row.team_id == team_id)
    }
}
