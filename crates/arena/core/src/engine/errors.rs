//! Hard failures of a run.

use crate::error::ErrorSeverity;
use crate::state::{EntityId, Round};

/// Errors that abort a simulation.
///
/// These only surface when an invariant is broken, which means a bug in the
/// engine or a hand-built roster that bypassed validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    #[error("{round}: entity {entity} is not in the roster")]
    UnknownEntity { round: Round, entity: EntityId },

    #[error("{round}: entity {entity} has energy {current} outside [0, {max}]")]
    EnergyOutOfBounds {
        round: Round,
        entity: EntityId,
        current: u32,
        max: u32,
    },

    #[error("{round}: entity {entity} has health {health} but death hook fired = {fired}")]
    DeathHookMismatch {
        round: Round,
        entity: EntityId,
        health: i32,
        fired: bool,
    },
}

impl SimulationError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownEntity { .. } => ErrorSeverity::Internal,
            Self::EnergyOutOfBounds { .. } | Self::DeathHookMismatch { .. } => ErrorSeverity::Fatal,
        }
    }
}
