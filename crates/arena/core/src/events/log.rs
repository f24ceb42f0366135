use crate::roles::RoleKind;
use crate::state::{CapabilitySet, EntityId, Roster, Round};

use super::{CombatEvent, EventKind};

/// End-of-run status of one roster member.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinalStatus {
    pub id: EntityId,
    pub name: String,
    pub role: RoleKind,
    pub alive: bool,
    pub health: i32,
    pub energy: Option<u32>,
    pub capabilities: CapabilitySet,
}

/// Append-only record of a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatLog {
    pub seed: u64,
    pub rounds: u32,
    events: Vec<CombatEvent>,
    summary: Vec<FinalStatus>,
}

impl CombatLog {
    pub(crate) fn new(seed: u64, rounds: u32) -> Self {
        Self {
            seed,
            rounds,
            events: Vec::new(),
            summary: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, event: CombatEvent) {
        self.events.push(event);
    }

    /// Records the final status of every member, in roster order.
    pub(crate) fn finish(&mut self, roster: &Roster) {
        self.summary = roster
            .iter()
            .map(|combatant| FinalStatus {
                id: combatant.id,
                name: combatant.name.clone(),
                role: combatant.role,
                alive: combatant.is_alive(),
                health: combatant.health(),
                energy: combatant.energy().map(|pool| pool.current()),
                capabilities: combatant.capabilities.set(),
            })
            .collect();
    }

    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    pub fn summary(&self) -> &[FinalStatus] {
        &self.summary
    }

    pub fn events_in_round(&self, round: Round) -> impl Iterator<Item = &CombatEvent> {
        self.events.iter().filter(move |event| event.round == round)
    }

    /// Death events in the order they happened.
    pub fn deaths(&self) -> impl Iterator<Item = &CombatEvent> {
        self.events
            .iter()
            .filter(|event| event.kind == EventKind::Death)
    }

    pub fn survivors(&self) -> impl Iterator<Item = &FinalStatus> {
        self.summary.iter().filter(|status| status.alive)
    }

    /// SHA-256 over the bincode encoding of every event and final status,
    /// in order.
    ///
    /// Two runs with the same seed, roster and configuration produce the
    /// same digest. A record that fails to encode is an error, never skipped.
    #[cfg(feature = "serde")]
    pub fn digest(&self) -> Result<[u8; 32], bincode::Error> {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        for event in &self.events {
            hasher.update(bincode::serialize(event)?);
        }
        for status in &self.summary {
            hasher.update(bincode::serialize(status)?);
        }

        Ok(hasher.finalize().into())
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use crate::config::HealthFloor;
    use crate::state::{Archetype, Capabilities, Combatant, MeleeStats};

    fn roster() -> Roster {
        let fighter = Combatant::new(
            EntityId(0),
            "Guard",
            RoleKind::SwordsMan,
            40,
            10,
            Archetype::Melee(MeleeStats {
                armor: 0,
                weapon_type: "sword".into(),
            }),
            Capabilities::NONE,
        );
        Roster::from_combatants([fighter])
    }

    #[test]
    fn empty_log_digest_is_sha256_of_nothing() {
        let digest = CombatLog::new(0, 1).digest().expect("digest");
        assert_eq!(
            hex::encode(digest),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn digest_covers_final_status() {
        let mut roster = roster();
        let mut before = CombatLog::new(0, 1);
        before.finish(&roster);

        roster
            .get_mut(EntityId(0))
            .expect("guard")
            .take_damage(5, HealthFloor::Unbounded);
        let mut after = CombatLog::new(0, 1);
        after.finish(&roster);

        let first = before.digest().expect("digest");
        assert_eq!(first, before.digest().expect("digest"));
        assert_ne!(first, after.digest().expect("digest"));
    }
}
