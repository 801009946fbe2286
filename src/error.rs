use thiserror::Error;

/// Failure of the profile store. Covers an unreachable database, a schema
/// that could not be migrated, and a rejected insert (e.g. the placeholder
/// email already exists).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("profile store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
    #[error("profile store unavailable: migration failed: {0}")]
    Schema(#[from] sqlx::migrate::MigrateError),
}

/// Failure of the outbound fact request.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("fact provider timed out")]
    Timeout,
    #[error("fact provider unreachable: {0}")]
    Transport(String),
    #[error("fact provider returned status {0}")]
    Status(u16),
    #[error("fact provider body could not be decoded: {0}")]
    Decode(String),
    #[error("fact provider body has no `fact` field")]
    MissingFact,
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}
