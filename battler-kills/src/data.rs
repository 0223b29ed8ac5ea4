use serde::{
    Deserialize,
    Serialize,
};

/// Replay data for a single battle, as served by a replay service.
///
/// Only the fields needed for knockout attribution are kept.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayData {
    /// Newline-delimited battle log.
    #[serde(default)]
    pub log: Option<String>,
    /// Player display names, in side order.
    #[serde(default)]
    pub players: Vec<String>,
}
