pub mod client;

use tracing::warn;

use crate::error::FetchError;
use client::FactSource;

/// Fetch one fact, substituting `fallback` on any provider failure. No retry.
pub async fn fact_or_fallback(source: &dyn FactSource, fallback: &str) -> String {
    match source.fetch_fact().await {
        Ok(fact) => fact,
        Err(e) => {
            match &e {
                FetchError::Timeout => warn!("fact provider timed out; using fallback"),
                FetchError::Status(status) => {
                    warn!(status, "fact provider returned error status; using fallback")
                }
                FetchError::Transport(_) | FetchError::Decode(_) | FetchError::MissingFact => {
                    warn!(error = %e, "fact fetch failed; using fallback")
                }
            }
            fallback.to_string()
        }
    }
}
