use battler_kills::ReplayData;

/// Replay builder object for integration tests.
///
/// Mons are referred to by their position token (e.g., `p1a`) and nickname, just like in the
/// battle log.
#[derive(Debug, Default)]
pub struct TestReplayBuilder {
    players: Vec<String>,
    lines: Vec<String>,
    no_log: bool,
}

impl TestReplayBuilder {
    /// Creates a new [`TestReplayBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a player, in side order.
    pub fn with_player(mut self, name: &str) -> Self {
        let side = self.players.len() + 1;
        self.players.push(name.to_owned());
        self.lines.push(format!("|player|p{side}|{name}|1"));
        self
    }

    /// Builds a replay with no log at all.
    pub fn with_no_log(mut self) -> Self {
        self.no_log = true;
        self
    }

    /// Adds a raw log line.
    pub fn line(mut self, line: &str) -> Self {
        self.lines.push(line.to_owned());
        self
    }

    /// Reveals a Mon on a side's team.
    pub fn poke(self, side: &str, species: &str) -> Self {
        self.line(&format!("|poke|{side}|{species}, L50|"))
    }

    /// Switches a Mon in.
    pub fn switch(self, position: &str, nickname: &str, species: &str) -> Self {
        self.line(&format!(
            "|switch|{position}: {nickname}|{species}, L50|100/100"
        ))
    }

    /// Starts a new turn.
    pub fn turn(self, turn: usize) -> Self {
        self.line(&format!("|turn|{turn}"))
    }

    /// Uses a move against a target.
    pub fn use_move(
        self,
        position: &str,
        nickname: &str,
        name: &str,
        target: (&str, &str),
    ) -> Self {
        self.line(&format!(
            "|move|{position}: {nickname}|{name}|{}: {}",
            target.0, target.1
        ))
    }

    /// Deals direct damage from the last move.
    pub fn damage(self, position: &str, nickname: &str, health: &str) -> Self {
        self.line(&format!("|-damage|{position}: {nickname}|{health}"))
    }

    /// Deals passive damage from some effect.
    pub fn damage_from(self, position: &str, nickname: &str, health: &str, from: &str) -> Self {
        self.line(&format!(
            "|-damage|{position}: {nickname}|{health}|[from] {from}"
        ))
    }

    /// Faints a Mon.
    pub fn faint(self, position: &str, nickname: &str) -> Self {
        self.line(&format!("|faint|{position}: {nickname}"))
    }

    /// Builds the replay data.
    pub fn build(self) -> ReplayData {
        ReplayData {
            log: (!self.no_log).then(|| self.lines.join("\n")),
            players: self.players,
        }
    }
}
