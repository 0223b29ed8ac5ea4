use std::{
    fmt::Display,
    str::FromStr,
};

use anyhow::Error;
use serde::{
    Deserialize,
    Serialize,
};

/// One of the two sides of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SideId {
    One,
    Two,
}

impl SideId {
    /// Both sides, in order.
    pub const ALL: [SideId; 2] = [SideId::One, SideId::Two];

    /// The index of the side, for side-keyed tables.
    pub fn index(&self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl FromStr for SideId {
    type Err = Error;

    /// Parses a side token, such as `p1` or `p2a`.
    ///
    /// Only the first two characters determine the side.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.get(..2) {
            Some("p1") => Ok(Self::One),
            Some("p2") => Ok(Self::Two),
            _ => Err(Error::msg(format!("invalid side token: {s}"))),
        }
    }
}

impl Display for SideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "p1"),
            Self::Two => write!(f, "p2"),
        }
    }
}

/// The owner of a Mon, as far as the log reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    Side(SideId),
    /// The Mon was never introduced by a roster or switch record.
    Unknown,
}

impl Owner {
    /// The side of the owner, if known.
    pub fn side(&self) -> Option<SideId> {
        match self {
            Self::Side(side) => Some(*side),
            Self::Unknown => None,
        }
    }
}

impl From<SideId> for Owner {
    fn from(value: SideId) -> Self {
        Self::Side(value)
    }
}

impl Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Side(side) => write!(f, "{side}"),
            Self::Unknown => write!(f, "Unknown Player"),
        }
    }
}
