//! Knockout attribution for Pokémon Showdown battle logs.
//!
//! A battle log is read in a single pass. Each knockout is credited to the most recent plausible
//! cause: either the last move used, or the last passive damage taken, by any Mon.

mod attribution;
mod cause;
mod data;
mod event;
mod identity;
pub mod log;
mod options;
mod report;
mod side;
mod tracker;

pub use attribution::Attribution;
pub use cause::{
    Cause,
    CauseKind,
    CauseTracker,
};
pub use data::ReplayData;
pub use event::Event;
pub use identity::{
    Combatant,
    IdentityResolver,
};
pub use options::KillTrackerOptions;
pub use report::{
    KillRecord,
    KillReport,
    SideReport,
};
pub use side::{
    Owner,
    SideId,
};
pub use tracker::{
    KillTracker,
    parse_kills,
    parse_kills_with_options,
};
