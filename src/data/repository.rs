use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::{resources, DataError, LeagueSnapshot};
use crate::league::{
    Driver, LeagueArchive, LicenseRecord, PointsConfig, Race, SeasonCatalog, SeasonDefinition,
    StewardRound, Team,
};

#[async_trait]
pub trait LeagueRepository: Send + Sync {
    async fn drivers(&self) -> Result<Vec<Driver>, DataError>;
    async fn teams(&self) -> Result<Vec<Team>, DataError>;
    async fn races(&self) -> Result<Vec<Race>, DataError>;
    async fn points(&self) -> Result<PointsConfig, DataError>;
    async fn seasons(&self) -> Result<Vec<SeasonDefinition>, DataError>;
    async fn archive(&self) -> Result<LeagueArchive, DataError>;
    async fn licenses(&self) -> Result<Vec<LicenseRecord>, DataError>;
    async fn stewards(&self) -> Result<Vec<StewardRound>, DataError>;
}

/// Fetches every resource concurrently
pub async fn load_snapshot(
    repository: &(dyn LeagueRepository + Send + Sync),
) -> Result<LeagueSnapshot, DataError> {
    let (drivers, teams, races, points, seasons, archive, licenses, stewards) = futures::try_join!(
        repository.drivers(),
        repository.teams(),
        repository.races(),
        repository.points(),
        repository.seasons(),
        repository.archive(),
        repository.licenses(),
        repository.stewards(),
    )?;

    debug!(
        drivers = drivers.len(),
        races = races.len(),
        archived_seasons = archive.seasons.len(),
        "Loaded league snapshot"
    );

    Ok(LeagueSnapshot {
        drivers,
        teams,
        races,
        points,
        seasons,
        archive,
        licenses,
        stewards,
    })
}

/// Reads `<root>/<name>.json` for each resource
#[derive(Debug, Clone)]
pub struct FileLeagueRepository {
    root: PathBuf,
}

impl FileLeagueRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }

    async fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T, DataError> {
        let bytes = match tokio::fs::read(self.path_for(name)).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(DataError::NotFound(name.to_string()));
            }
            Err(source) => {
                return Err(DataError::Io {
                    name: name.to_string(),
                    source,
                });
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| DataError::Parse {
            name: name.to_string(),
            source,
        })
    }

    /// Like `load`, but a missing file yields the empty value
    async fn load_optional<T: DeserializeOwned + Default>(
        &self,
        name: &str,
    ) -> Result<T, DataError> {
        match self.load(name).await {
            Err(DataError::NotFound(_)) => {
                debug!(resource = name, "Optional resource missing, using empty value");
                Ok(T::default())
            }
            other => other,
        }
    }
}

#[async_trait]
impl LeagueRepository for FileLeagueRepository {
    #[instrument(skip(self))]
    async fn drivers(&self) -> Result<Vec<Driver>, DataError> {
        self.load(resources::DRIVERS).await
    }

    #[instrument(skip(self))]
    async fn teams(&self) -> Result<Vec<Team>, DataError> {
        self.load(resources::TEAMS).await
    }

    #[instrument(skip(self))]
    async fn races(&self) -> Result<Vec<Race>, DataError> {
        self.load(resources::RACES).await
    }

    #[instrument(skip(self))]
    async fn points(&self) -> Result<PointsConfig, DataError> {
        self.load(resources::POINTS).await
    }

    #[instrument(skip(self))]
    async fn seasons(&self) -> Result<Vec<SeasonDefinition>, DataError> {
        let catalog: SeasonCatalog = self.load_optional(resources::SEASONS).await?;
        Ok(catalog.seasons)
    }

    #[instrument(skip(self))]
    async fn archive(&self) -> Result<LeagueArchive, DataError> {
        self.load_optional(resources::LEAGUE_HISTORY).await
    }

    #[instrument(skip(self))]
    async fn licenses(&self) -> Result<Vec<LicenseRecord>, DataError> {
        self.load(resources::LICENSES).await
    }

    #[instrument(skip(self))]
    async fn stewards(&self) -> Result<Vec<StewardRound>, DataError> {
        self.load(resources::STEWARDS).await
    }
}

#[derive(Debug, Default)]
pub struct InMemoryLeagueRepository {
    snapshot: Arc<RwLock<LeagueSnapshot>>,
}

impl InMemoryLeagueRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: LeagueSnapshot) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// Swaps the race list, e.g. to preview edited results
    pub async fn replace_races(&self, races: Vec<Race>) {
        self.snapshot.write().await.races = races;
    }
}

#[async_trait]
impl LeagueRepository for InMemoryLeagueRepository {
    async fn drivers(&self) -> Result<Vec<Driver>, DataError> {
        Ok(self.snapshot.read().await.drivers.clone())
    }

    async fn teams(&self) -> Result<Vec<Team>, DataError> {
        Ok(self.snapshot.read().await.teams.clone())
    }

    async fn races(&self) -> Result<Vec<Race>, DataError> {
        Ok(self.snapshot.read().await.races.clone())
    }

    async fn points(&self) -> Result<PointsConfig, DataError> {
        Ok(self.snapshot.read().await.points.clone())
    }

    async fn seasons(&self) -> Result<Vec<SeasonDefinition>, DataError> {
        Ok(self.snapshot.read().await.seasons.clone())
    }

    async fn archive(&self) -> Result<LeagueArchive, DataError> {
        Ok(self.snapshot.read().await.archive.clone())
    }

    async fn licenses(&self) -> Result<Vec<LicenseRecord>, DataError> {
        Ok(self.snapshot.read().await.licenses.clone())
    }

    async fn stewards(&self) -> Result<Vec<StewardRound>, DataError> {
        Ok(self.snapshot.read().await.stewards.clone())
    }
}
