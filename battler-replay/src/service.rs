use battler_kills::{
    KillReport,
    KillTrackerOptions,
    parse_kills_with_options,
};

use crate::{
    ReplayClient,
    ReplayError,
    replay_id,
};

/// Service for attributing knockouts in replays retrieved by a [`ReplayClient`].
///
/// Every request parses its replay independently, so the service can be shared across tasks.
pub struct KillStatsService {
    client: Box<dyn ReplayClient>,
    options: KillTrackerOptions,
}

impl KillStatsService {
    /// Creates a new service around a replay client.
    pub fn new(client: Box<dyn ReplayClient>, options: KillTrackerOptions) -> Self {
        Self { client, options }
    }

    /// Retrieves a replay and attributes its knockouts.
    ///
    /// If the replay cannot be retrieved, no report is produced. A replay with no log produces an
    /// empty report.
    pub async fn kill_stats(&self, locator: &str) -> Result<KillReport, ReplayError> {
        let id = replay_id(locator)?;
        let data = match self.client.replay(&id).await {
            Ok(data) => data,
            Err(err) => {
                log::warn!("failed to retrieve replay {id}: {err}");
                return Err(err);
            }
        };
        if data.log.is_none() {
            log::debug!("replay {id} has no log");
        }
        Ok(parse_kills_with_options(&data, &self.options))
    }
}
