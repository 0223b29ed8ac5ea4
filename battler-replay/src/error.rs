use thiserror::Error;

/// An error that occurs while retrieving a replay.
#[derive(Debug, Error)]
pub enum ReplayError {
    /// The replay locator does not name a replay.
    #[error("invalid replay locator: {0:?}")]
    InvalidLocator(String),
    /// The replay does not exist.
    #[error("replay {0} not found")]
    NotFound(String),
    /// The replay service responded with an unexpected status.
    #[error("replay service responded with status {0}")]
    Unavailable(u16),
    /// The request to the replay service failed.
    #[error("replay request failed")]
    Request(#[source] reqwest::Error),
    /// The replay service responded with something that is not replay data.
    #[error("invalid replay data")]
    Decode(#[from] serde_json::Error),
}

impl ReplayError {
    /// A short message suitable for showing to a user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidLocator(_) => "Invalid replay link.",
            _ => "Failed to fetch replay data.",
        }
    }
}
