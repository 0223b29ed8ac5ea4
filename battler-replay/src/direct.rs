use ahash::HashMap;
use async_trait::async_trait;
use battler_kills::ReplayData;
use tokio::sync::RwLock;

use crate::{
    ReplayClient,
    ReplayError,
};

/// Implementation of [`ReplayClient`] that serves replays from memory.
#[derive(Debug, Default)]
pub struct StaticReplayClient {
    replays: RwLock<HashMap<String, ReplayData>>,
}

impl StaticReplayClient {
    /// Creates a new client with no replays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a replay, replacing any replay with the same ID.
    pub async fn insert(&self, id: String, data: ReplayData) {
        self.replays.write().await.insert(id, data);
    }
}

impl FromIterator<(String, ReplayData)> for StaticReplayClient {
    fn from_iter<T: IntoIterator<Item = (String, ReplayData)>>(iter: T) -> Self {
        Self {
            replays: RwLock::new(iter.into_iter().collect()),
        }
    }
}

#[async_trait]
impl ReplayClient for StaticReplayClient {
    async fn replay(&self, id: &str) -> Result<ReplayData, ReplayError> {
        self.replays
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| ReplayError::NotFound(id.to_owned()))
    }
}
