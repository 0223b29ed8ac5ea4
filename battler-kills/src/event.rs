use anyhow::{
    Context,
    Result,
};

use crate::{
    SideId,
    log::{
        LogRecord,
        MonDetails,
        MonName,
    },
};

/// A log record that is relevant to knockout attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A Mon was revealed on a player's team before the battle.
    Declare { side: SideId, species: String },
    /// A Mon entered the field.
    ///
    /// Covers regular switches, forced switches, and illusions breaking.
    SwitchIn {
        side: SideId,
        nickname: String,
        species: String,
    },
    /// A Mon used a move.
    Move { actor: String, name: String },
    /// A Mon took damage from something other than the move that was just used.
    PassiveDamage { victim: String, cause: String },
    /// A Mon fainted.
    Faint { victim: String },
}

impl Event {
    /// Classifies a log record.
    ///
    /// Returns `Ok(None)` for records that do not matter for attribution. Returns an error if the
    /// record kind matters but its values are malformed.
    pub fn classify(record: &LogRecord) -> Result<Option<Self>> {
        let event = match record.title() {
            "poke" => {
                let side = record.arg_or_else::<SideId>(0).context("invalid poke")?;
                let details = record
                    .arg_or_else::<MonDetails>(1)
                    .context("invalid poke")?;
                Self::Declare {
                    side,
                    species: details.species,
                }
            }
            "switch" | "drag" | "replace" => {
                let mon = record
                    .arg_or_else::<MonName>(0)
                    .with_context(|| format!("invalid {}", record.title()))?;
                let details = record
                    .arg_or_else::<MonDetails>(1)
                    .with_context(|| format!("invalid {}", record.title()))?;
                Self::SwitchIn {
                    side: mon.side,
                    nickname: mon.name,
                    species: details.species,
                }
            }
            "move" => {
                let mon = record.arg_or_else::<MonName>(0).context("invalid move")?;
                let name = record.arg_or_else::<String>(1).context("invalid move")?;
                Self::Move {
                    actor: mon.name,
                    name,
                }
            }
            "-damage" => {
                // Damage without a source is the result of the move that was just used, which is
                // already remembered as the cause.
                let cause = match record.tag("from") {
                    Some(cause) => cause.to_owned(),
                    None => return Ok(None),
                };
                let mon = record
                    .arg_or_else::<MonName>(0)
                    .context("invalid -damage")?;
                Self::PassiveDamage {
                    victim: mon.name,
                    cause,
                }
            }
            "faint" => {
                let mon = record.arg_or_else::<MonName>(0).context("invalid faint")?;
                Self::Faint { victim: mon.name }
            }
            _ => return Ok(None),
        };
        Ok(Some(event))
    }
}
