use std::path::PathBuf;

use crate::stats::DEFAULT_TOP_N;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub bind_addr: String,
    pub top_n: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl AppConfig {
    /// Reads `LEAGUE_DATA_DIR`, `LEAGUE_BIND_ADDR` and `LEAGUE_TOP_N`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        // Unparseable sizes fall back to the default
        let top_n = lookup("LEAGUE_TOP_N")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.top_n);

        Self {
            data_dir: lookup("LEAGUE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            bind_addr: lookup("LEAGUE_BIND_ADDR").unwrap_or(defaults.bind_addr),
            top_n,
        }
    }
}
