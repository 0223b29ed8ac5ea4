use anyhow::Result;
use async_trait::async_trait;
use battler_kills::ReplayData;

use crate::{
    ReplayError,
    ShowdownReplayClient,
    ShowdownReplayClientOptions,
    StaticReplayClient,
};

/// Client for retrieving replays from some replay service.
#[async_trait]
pub trait ReplayClient: Send + Sync {
    /// Retrieves the replay with the given ID.
    async fn replay(&self, id: &str) -> Result<ReplayData, ReplayError>;
}

/// Creates a new client around the Pokémon Showdown replay service.
pub fn replay_client_over_showdown(
    options: ShowdownReplayClientOptions,
) -> Result<Box<dyn ReplayClient>> {
    Ok(Box::new(ShowdownReplayClient::new(options)?))
}

/// Creates a new client around a fixed set of replays.
pub fn replay_client_over_static_replays<I>(replays: I) -> Box<dyn ReplayClient>
where
    I: IntoIterator<Item = (String, ReplayData)>,
{
    Box::new(StaticReplayClient::from_iter(replays))
}
