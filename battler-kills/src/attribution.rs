use crate::{
    Cause,
    Combatant,
    KillReport,
    SideId,
    SideReport,
};

/// Accumulates kills, deaths, and rosters for both sides of a battle.
#[derive(Debug)]
pub struct Attribution {
    sides: [SideReport; 2],
}

impl Attribution {
    /// Creates empty tables for the two players.
    pub fn new(players: [String; 2]) -> Self {
        Self {
            sides: players.map(SideReport::new),
        }
    }

    fn side_mut(&mut self, side: SideId) -> &mut SideReport {
        &mut self.sides[side.index()]
    }

    /// Records a species as part of a side's roster.
    pub fn record_roster(&mut self, side: SideId, species: &str) {
        let roster = &mut self.side_mut(side).roster;
        if !roster.contains(species) {
            roster.insert(species.to_owned());
        }
    }

    /// Records a knockout of the given victim, crediting the given cause.
    ///
    /// Victims and causes that do not belong to a known side are dropped.
    pub fn record_knockout(&mut self, victim: &Combatant, cause: Option<&Cause>) {
        match victim.owner.side() {
            Some(side) => {
                *self
                    .side_mut(side)
                    .deaths
                    .entry(victim.species.clone())
                    .or_default() += 1;
            }
            None => log::debug!("dropping death of {}: owner unknown", victim.species),
        }

        let cause = match cause {
            Some(cause) => cause,
            None => {
                log::debug!("{} fainted with no known cause", victim.species);
                return;
            }
        };
        match cause.combatant.owner.side() {
            Some(side) => {
                self.side_mut(side)
                    .kills
                    .entry(cause.combatant.species.clone())
                    .or_default()
                    .record(cause.kind, victim.species.clone());
            }
            None => log::debug!(
                "dropping kill of {} by {}: owner unknown",
                victim.species,
                cause.combatant.species
            ),
        }
    }

    /// Completes the tables into a report.
    pub fn finish(self) -> KillReport {
        KillReport { sides: self.sides }
    }
}

#[cfg(test)]
mod attribution_test {
    use std::collections::BTreeMap;

    use crate::{
        Attribution,
        Cause,
        CauseKind,
        Combatant,
        KillRecord,
        Owner,
        SideId,
    };

    fn attribution() -> Attribution {
        Attribution::new(["Ash".to_owned(), "Gary".to_owned()])
    }

    fn combatant(species: &str, owner: Owner) -> Combatant {
        Combatant {
            species: species.to_owned(),
            owner,
        }
    }

    #[test]
    fn credits_direct_kill_and_death() {
        let mut attribution = attribution();
        attribution.record_knockout(
            &combatant("Skarmory", SideId::Two.into()),
            Some(&Cause {
                combatant: combatant("Gyarados", SideId::One.into()),
                kind: CauseKind::Direct,
            }),
        );
        let report = attribution.finish();
        pretty_assertions::assert_eq!(
            report.side(SideId::One).kills,
            BTreeMap::from_iter([(
                "Gyarados".to_owned(),
                KillRecord {
                    direct: 1,
                    passive: 0,
                    victims: Vec::from_iter(["Skarmory".to_owned()]),
                }
            )])
        );
        pretty_assertions::assert_eq!(
            report.side(SideId::Two).deaths,
            BTreeMap::from_iter([("Skarmory".to_owned(), 1)])
        );
        assert!(report.side(SideId::One).deaths.is_empty());
        assert!(report.side(SideId::Two).kills.is_empty());
    }

    #[test]
    fn records_death_without_cause() {
        let mut attribution = attribution();
        attribution.record_knockout(&combatant("Skarmory", SideId::Two.into()), None);
        let report = attribution.finish();
        assert_eq!(report.side(SideId::Two).total_deaths(), 1);
        assert_eq!(report.side(SideId::One).total_kills(), 0);
        assert_eq!(report.side(SideId::Two).total_kills(), 0);
    }

    #[test]
    fn drops_kill_credited_to_unknown_owner() {
        let mut attribution = attribution();
        attribution.record_knockout(
            &combatant("Skarmory", SideId::Two.into()),
            Some(&Cause {
                combatant: combatant("Mystery", Owner::Unknown),
                kind: CauseKind::Direct,
            }),
        );
        let report = attribution.finish();
        assert_eq!(report.side(SideId::Two).total_deaths(), 1);
        assert_eq!(report.side(SideId::One).total_kills(), 0);
        assert_eq!(report.side(SideId::Two).total_kills(), 0);
    }

    #[test]
    fn drops_death_of_unknown_owner_but_keeps_kill() {
        let mut attribution = attribution();
        attribution.record_knockout(
            &combatant("Mystery", Owner::Unknown),
            Some(&Cause {
                combatant: combatant("Gyarados", SideId::One.into()),
                kind: CauseKind::Passive,
            }),
        );
        let report = attribution.finish();
        assert_eq!(report.side(SideId::One).total_deaths(), 0);
        assert_eq!(report.side(SideId::Two).total_deaths(), 0);
        pretty_assertions::assert_eq!(
            report.side(SideId::One).kills.get("Gyarados"),
            Some(&KillRecord {
                direct: 0,
                passive: 1,
                victims: Vec::from_iter(["Mystery".to_owned()]),
            })
        );
    }

    #[test]
    fn roster_keeps_distinct_species() {
        let mut attribution = attribution();
        attribution.record_roster(SideId::One, "Gyarados");
        attribution.record_roster(SideId::One, "Gyarados");
        attribution.record_roster(SideId::Two, "Skarmory");
        let report = attribution.finish();
        assert_eq!(report.side(SideId::One).roster.len(), 1);
        assert!(report.side(SideId::Two).roster.contains("Skarmory"));
    }
}
