use serde::{
    Deserialize,
    Serialize,
};

use crate::Combatant;

/// How a knockout was caused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CauseKind {
    /// A move used by the credited Mon.
    Direct,
    /// Damage from a hazard, status, weather, or other delayed effect.
    Passive,
}

/// The most recent plausible cause of a knockout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    pub combatant: Combatant,
    pub kind: CauseKind,
}

/// Remembers the single most recent plausible cause of a knockout.
///
/// Every move and every passive damage tick overwrites the memory, regardless of which Mon is
/// involved. A knockout reads the memory without clearing it.
#[derive(Debug, Default)]
pub struct CauseTracker {
    last: Option<Cause>,
}

impl CauseTracker {
    /// Records a move used by the given Mon.
    pub fn record_direct(&mut self, combatant: Combatant) {
        self.last = Some(Cause {
            combatant,
            kind: CauseKind::Direct,
        });
    }

    /// Records passive damage, credited to the given Mon.
    pub fn record_passive(&mut self, combatant: Combatant) {
        self.last = Some(Cause {
            combatant,
            kind: CauseKind::Passive,
        });
    }

    /// The current cause, if any.
    pub fn current(&self) -> Option<&Cause> {
        self.last.as_ref()
    }
}

#[cfg(test)]
mod cause_test {
    use crate::{
        Cause,
        CauseKind,
        CauseTracker,
        Combatant,
        Owner,
        SideId,
    };

    fn combatant(species: &str, side: SideId) -> Combatant {
        Combatant {
            species: species.to_owned(),
            owner: Owner::Side(side),
        }
    }

    #[test]
    fn starts_empty() {
        assert_eq!(CauseTracker::default().current(), None);
    }

    #[test]
    fn newest_cause_replaces_previous_cause() {
        let mut tracker = CauseTracker::default();
        tracker.record_passive(combatant("Skarmory", SideId::Two));
        tracker.record_direct(combatant("Gyarados", SideId::One));
        pretty_assertions::assert_eq!(
            tracker.current(),
            Some(&Cause {
                combatant: combatant("Gyarados", SideId::One),
                kind: CauseKind::Direct,
            })
        );

        tracker.record_passive(combatant("Skarmory", SideId::Two));
        pretty_assertions::assert_eq!(
            tracker.current(),
            Some(&Cause {
                combatant: combatant("Skarmory", SideId::Two),
                kind: CauseKind::Passive,
            })
        );
    }

    #[test]
    fn reading_does_not_clear() {
        let mut tracker = CauseTracker::default();
        tracker.record_direct(combatant("Gyarados", SideId::One));
        assert!(tracker.current().is_some());
        assert!(tracker.current().is_some());
    }
}
