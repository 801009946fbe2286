use axum::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::FactConfig;
use crate::error::FetchError;

#[async_trait]
pub trait FactSource: Send + Sync {
    async fn fetch_fact(&self) -> Result<String, FetchError>;
}

#[derive(Debug, Deserialize)]
struct FactBody {
    fact: Option<Value>,
}

/// Fact provider reached over HTTP with a bounded timeout.
#[derive(Clone)]
pub struct HttpFactClient {
    client: Client,
    url: String,
}

impl HttpFactClient {
    pub fn new(cfg: &FactConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(cfg.timeout)
            .build()?;
        Ok(Self {
            client,
            url: cfg.url.clone(),
        })
    }
}

#[async_trait]
impl FactSource for HttpFactClient {
    async fn fetch_fact(&self) -> Result<String, FetchError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let body: FactBody =
            serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))?;

        match body.fact {
            Some(Value::String(fact)) => {
                debug!(len = fact.len(), "fact fetched");
                Ok(fact)
            }
            Some(other) => Err(FetchError::Decode(format!("`fact` is not a string: {other}"))),
            None => Err(FetchError::MissingFact),
        }
    }
}
