//! Outcome types produced by the entity model and the capability layer.

use crate::state::EntityId;

use super::ActionKind;

/// Soft failure of an action.
///
/// Soft failures never abort a run: the scheduler records them as a no-op
/// event and moves on.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionFailure {
    #[error("insufficient energy: need {required}, have {available}")]
    InsufficientEnergy { required: u32, available: u32 },

    #[error("no valid target for {action}")]
    NoValidTarget { action: ActionKind },

    #[error("actor is not alive")]
    ActorDead,

    #[error("actor lacks the capability required for {action}")]
    MissingCapability { action: ActionKind },
}

impl ActionFailure {
    pub fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Recoverable
    }
}

/// Description produced by a combatant's one-time death hook.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeathNotice {
    pub entity: EntityId,
    pub description: String,
}

/// Result of a single damage intake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DamageReport {
    /// Incoming damage before mitigation.
    pub raw: i32,
    /// Portion absorbed by armor.
    pub mitigated: i32,
    /// Damage actually subtracted from health.
    pub applied: i32,
    pub health_before: i32,
    pub health_after: i32,
    /// Set when this intake fired the death hook.
    pub death: Option<DeathNotice>,
}

/// Result of a successful attack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackReport {
    pub energy_spent: u32,
    pub damage: DamageReport,
}

/// Result of a defend or heal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RestoreReport {
    pub amount: i32,
    pub health_before: i32,
    pub health_after: i32,
    pub energy_spent: u32,
}

/// Result of the pre-turn hook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrepareReport {
    /// Equipment check (melee) or readiness report (ranged).
    pub check: String,
    /// Role-specific preparation.
    pub note: String,
}

/// Result of the post-turn hook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoverReport {
    pub energy_restored: u32,
    pub note: String,
}
