use ahash::HashMap;

use crate::{
    Owner,
    SideId,
};

/// The identity of a Mon that a nickname currently refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combatant {
    pub species: String,
    pub owner: Owner,
}

/// Resolves nicknames used in log records to Mon identities.
///
/// Only the latest mapping for each nickname is kept. Mappings are never removed, so a nickname
/// reused later in the battle resolves to its last known identity until it is overwritten.
#[derive(Debug, Default)]
pub struct IdentityResolver {
    identities: HashMap<String, Combatant>,
}

impl IdentityResolver {
    /// Records a Mon revealed on a side's team, which is referred to by its species.
    pub fn declare(&mut self, side: SideId, species: &str) {
        self.switch_in(side, species, species);
    }

    /// Records a Mon entering the field under a nickname.
    pub fn switch_in(&mut self, side: SideId, nickname: &str, species: &str) {
        self.identities.insert(
            nickname.to_owned(),
            Combatant {
                species: species.to_owned(),
                owner: Owner::Side(side),
            },
        );
    }

    /// Resolves a nickname to the Mon it refers to.
    ///
    /// A nickname that was never introduced resolves to itself, owned by an unknown player.
    pub fn resolve(&self, nickname: &str) -> Combatant {
        match self.identities.get(nickname) {
            Some(combatant) => combatant.clone(),
            None => {
                log::debug!("{nickname} was never introduced");
                Combatant {
                    species: nickname.to_owned(),
                    owner: Owner::Unknown,
                }
            }
        }
    }
}
