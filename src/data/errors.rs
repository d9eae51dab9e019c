use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
