use serde::{
    Deserialize,
    Serialize,
};

fn default_player_1() -> String {
    "Player 1".to_owned()
}

fn default_player_2() -> String {
    "Player 2".to_owned()
}

/// Options for configuring how a [`KillTracker`][`crate::KillTracker`] builds its report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillTrackerOptions {
    /// Name used for the first side when the replay does not name its player.
    #[serde(default = "default_player_1")]
    pub default_player_1: String,

    /// Name used for the second side when the replay does not name its player.
    #[serde(default = "default_player_2")]
    pub default_player_2: String,
}

impl KillTrackerOptions {
    /// Player names for both sides, falling back to the defaults.
    pub fn player_names(&self, players: &[String]) -> [String; 2] {
        [
            players
                .first()
                .cloned()
                .unwrap_or_else(|| self.default_player_1.clone()),
            players
                .get(1)
                .cloned()
                .unwrap_or_else(|| self.default_player_2.clone()),
        ]
    }
}

impl Default for KillTrackerOptions {
    fn default() -> Self {
        Self {
            default_player_1: default_player_1(),
            default_player_2: default_player_2(),
        }
    }
}
