use std::time::Duration;

use anyhow::{
    Context,
    Result,
};
use async_trait::async_trait;
use battler_kills::ReplayData;
use reqwest::StatusCode;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    ReplayClient,
    ReplayError,
};

fn default_base_url() -> String {
    "https://replay.pokemonshowdown.com".to_owned()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Options for configuring a [`ShowdownReplayClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownReplayClientOptions {
    /// Base URL of the replay service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for a single request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ShowdownReplayClientOptions {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Implementation of [`ReplayClient`] over the Pokémon Showdown replay service's HTTP API.
pub struct ShowdownReplayClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl ShowdownReplayClient {
    /// Creates a new client.
    pub fn new(options: ShowdownReplayClientOptions) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(options.timeout_secs))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            base_url: options.base_url.trim_end_matches('/').to_owned(),
            http_client,
        })
    }

    /// The URL of the replay data for the given replay ID.
    pub fn replay_url(&self, id: &str) -> String {
        format!("{}/{id}.json", self.base_url)
    }
}

#[async_trait]
impl ReplayClient for ShowdownReplayClient {
    async fn replay(&self, id: &str) -> Result<ReplayData, ReplayError> {
        let url = self.replay_url(id);
        log::debug!("fetching replay from {url}");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(ReplayError::Request)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ReplayError::NotFound(id.to_owned()));
        }
        if !status.is_success() {
            return Err(ReplayError::Unavailable(status.as_u16()));
        }

        let body = response.text().await.map_err(ReplayError::Request)?;
        Ok(serde_json::from_str(&body)?)
    }
}
