use thiserror::Error;

/// Errors reported by [`AssetStore`](crate::AssetStore) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A draft failed validation (blank name on create, update or import).
    #[error("validation failed for {field}: {reason}")]
    ValidationFailed { field: &'static str, reason: String },

    /// No record carries the requested id.
    #[error("asset not found: {id}")]
    NotFound { id: u64 },

    /// The id generator ran out of ids or kept issuing ids already in use.
    #[error("no free asset id after {attempts} attempts")]
    IdsExhausted { attempts: usize },
}

impl StoreError {
    pub(crate) fn blank(field: &'static str) -> Self {
        StoreError::ValidationFailed {
            field,
            reason: format!("{} is required", field),
        }
    }
}

/// Errors raised while loading or validating a [`StoreConfig`](crate::StoreConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
