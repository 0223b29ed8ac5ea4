use std::collections::{
    BTreeMap,
    BTreeSet,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    CauseKind,
    SideId,
};

/// Knockouts credited to a single Mon.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillRecord {
    /// Knockouts caused by the Mon's moves.
    pub direct: u64,
    /// Knockouts caused by passive damage credited to the Mon.
    pub passive: u64,
    /// Species of every Mon knocked out, in order.
    #[serde(default)]
    pub victims: Vec<String>,
}

impl KillRecord {
    /// Total number of knockouts.
    pub fn total(&self) -> u64 {
        self.direct + self.passive
    }

    pub(crate) fn record(&mut self, kind: CauseKind, victim: String) {
        match kind {
            CauseKind::Direct => self.direct += 1,
            CauseKind::Passive => self.passive += 1,
        }
        self.victims.push(victim);
    }
}

/// Knockout statistics for one side of a battle.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideReport {
    /// Display name of the player.
    pub name: String,
    /// Knockouts, keyed by species.
    #[serde(default)]
    pub kills: BTreeMap<String, KillRecord>,
    /// Number of times each species fainted.
    #[serde(default)]
    pub deaths: BTreeMap<String, u64>,
    /// Every species revealed on the side.
    #[serde(default)]
    pub roster: BTreeSet<String>,
}

impl SideReport {
    /// Creates an empty report for a player.
    pub fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// Total knockouts scored by the side.
    pub fn total_kills(&self) -> u64 {
        self.kills.values().map(|record| record.total()).sum()
    }

    /// Total faints suffered by the side.
    pub fn total_deaths(&self) -> u64 {
        self.deaths.values().sum()
    }
}

/// Knockout statistics for a whole battle.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillReport {
    pub sides: [SideReport; 2],
}

impl KillReport {
    /// The report for a side.
    pub fn side(&self, side: SideId) -> &SideReport {
        &self.sides[side.index()]
    }

    /// The report for a side, looked up by player name.
    ///
    /// If both players share a name, the first side wins.
    pub fn side_by_name(&self, name: &str) -> Option<&SideReport> {
        self.sides.iter().find(|side| side.name == name)
    }

    /// Player names, in side order.
    pub fn players(&self) -> [&str; 2] {
        [&self.sides[0].name, &self.sides[1].name]
    }
}
