//! Replay retrieval for [`battler_kills`].
//!
//! Replays are fetched by a [`ReplayClient`] and handed to the knockout tracker by a
//! [`KillStatsService`].

mod client;
mod direct;
mod error;
mod locator;
mod service;
mod showdown;

pub use client::{
    ReplayClient,
    replay_client_over_showdown,
    replay_client_over_static_replays,
};
pub use direct::StaticReplayClient;
pub use error::ReplayError;
pub use locator::replay_id;
pub use service::KillStatsService;
pub use showdown::{
    ShowdownReplayClient,
    ShowdownReplayClientOptions,
};
