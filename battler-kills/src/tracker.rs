use crate::{
    Attribution,
    CauseTracker,
    Event,
    IdentityResolver,
    KillReport,
    KillTrackerOptions,
    ReplayData,
    log::{
        Log,
        LogRecord,
    },
};

/// Attributes knockouts in a single battle log.
///
/// Records must be applied in log order. A tracker holds the state of exactly one battle; parsing
/// another battle requires a new tracker.
#[derive(Debug)]
pub struct KillTracker {
    identities: IdentityResolver,
    causes: CauseTracker,
    attribution: Attribution,
}

impl KillTracker {
    /// Creates a new tracker for a battle between the given players.
    pub fn new(players: &[String], options: &KillTrackerOptions) -> Self {
        Self {
            identities: IdentityResolver::default(),
            causes: CauseTracker::default(),
            attribution: Attribution::new(options.player_names(players)),
        }
    }

    /// Applies every record in a log.
    pub fn apply_log(&mut self, log: &Log) {
        for record in log.records() {
            self.apply_record(record);
        }
    }

    /// Applies a single log record.
    ///
    /// Malformed records are skipped.
    pub fn apply_record(&mut self, record: &LogRecord) {
        match Event::classify(record) {
            Ok(Some(event)) => self.apply(&event),
            Ok(None) => (),
            Err(err) => log::debug!("skipping {} record: {err:#}", record.title()),
        }
    }

    /// Applies a single event.
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::Declare { side, species } => {
                self.identities.declare(*side, species);
                self.attribution.record_roster(*side, species);
            }
            Event::SwitchIn {
                side,
                nickname,
                species,
            } => {
                self.identities.switch_in(*side, nickname, species);
                self.attribution.record_roster(*side, species);
            }
            Event::Move { actor, .. } => {
                self.causes.record_direct(self.identities.resolve(actor));
            }
            Event::PassiveDamage { victim, .. } => {
                self.causes.record_passive(self.identities.resolve(victim));
            }
            Event::Faint { victim } => {
                let victim = self.identities.resolve(victim);
                self.attribution
                    .record_knockout(&victim, self.causes.current());
            }
        }
    }

    /// Completes the battle into a report.
    pub fn finish(self) -> KillReport {
        self.attribution.finish()
    }
}

/// Attributes knockouts in a replay using default options.
pub fn parse_kills(data: &ReplayData) -> KillReport {
    parse_kills_with_options(data, &KillTrackerOptions::default())
}

/// Attributes knockouts in a replay.
///
/// A replay without a log produces a report with no kills or deaths.
pub fn parse_kills_with_options(data: &ReplayData, options: &KillTrackerOptions) -> KillReport {
    let mut tracker = KillTracker::new(&data.players, options);
    if let Some(text) = &data.log {
        match Log::from_text(text) {
            Ok(log) => tracker.apply_log(&log),
            Err(err) => log::warn!("failed to read replay log: {err:#}"),
        }
    }
    tracker.finish()
}
