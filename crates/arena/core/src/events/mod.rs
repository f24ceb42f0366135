//! Structured output of a run.
//!
//! The core never prints. Every observable step of the scheduler becomes an
//! immutable [`CombatEvent`] appended to the [`CombatLog`]; presentation is
//! left to the caller.

mod log;

pub use log::{CombatLog, FinalStatus};

use crate::combat::{ActionFailure, ActionKind};
use crate::state::{Combatant, EntityId, Round};

/// What a [`CombatEvent`] records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EventKind {
    Prepare,
    Attack,
    Defend,
    Heal,
    Death,
    Recover,
}

impl From<ActionKind> for EventKind {
    fn from(action: ActionKind) -> Self {
        match action {
            ActionKind::Attack => EventKind::Attack,
            ActionKind::Defend => EventKind::Defend,
            ActionKind::Heal => EventKind::Heal,
        }
    }
}

impl EventKind {
    pub fn is_action(self) -> bool {
        matches!(
            self,
            EventKind::Attack | EventKind::Defend | EventKind::Heal
        )
    }
}

/// Whether the recorded step changed state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Applied,
    /// The step was a no-op for the given reason.
    Failed(ActionFailure),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    pub fn failure(&self) -> Option<&ActionFailure> {
        match self {
            Outcome::Applied => None,
            Outcome::Failed(failure) => Some(failure),
        }
    }
}

/// State of one combatant right after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub entity: EntityId,
    pub health: i32,
    pub alive: bool,
    /// Present for energy-bearing combatants only.
    pub energy: Option<u32>,
}

impl Snapshot {
    pub fn of(combatant: &Combatant) -> Self {
        Self {
            entity: combatant.id,
            health: combatant.health(),
            alive: combatant.is_alive(),
            energy: combatant.energy().map(|pool| pool.current()),
        }
    }
}

/// One immutable entry of the combat log.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatEvent {
    pub round: Round,
    /// Turn nonce; all events of one turn share it.
    pub sequence: u64,
    pub actor: EntityId,
    pub kind: EventKind,
    pub target: Option<EntityId>,
    /// Damage applied, health restored or energy regenerated. Zero for
    /// narration-only events and no-ops.
    pub magnitude: i32,
    pub outcome: Outcome,
    /// Human-readable narration supplied by the role profile.
    pub detail: String,
    pub actor_state: Snapshot,
    pub target_state: Option<Snapshot>,
}

impl CombatEvent {
    pub fn is_failure(&self) -> bool {
        !self.outcome.is_applied()
    }
}
