//! Common error infrastructure for arena-core.
//!
//! Domain-specific errors live next to the code that raises them:
//! [`SetupError`] here (roster construction), [`ActionFailure`] in
//! [`crate::combat`] and [`SimulationError`] in [`crate::engine`].
//!
//! [`ActionFailure`]: crate::combat::ActionFailure
//! [`SimulationError`]: crate::engine::SimulationError

use crate::roles::RoleKind;
use crate::state::ArchetypeKind;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the action failed but the run continues
/// - **Validation**: invalid input, rejected before the run starts
/// - **Internal**: an invariant was violated, which indicates a bug
/// - **Fatal**: the run cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Stat of a participant specification, used to point at the offending value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum StatField {
    Health,
    AttackPower,
    Armor,
    WeaponType,
    Range,
    MaxEnergy,
    InitialEnergy,
    DefenseCapacity,
    HealPower,
}

/// Errors raised while turning participant specifications into a roster.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("participant #{index} ({name}): {field} must be positive, got {value}")]
    NonPositive {
        index: usize,
        name: String,
        field: StatField,
        value: i64,
    },

    #[error("participant #{index} ({name}): {field} must not be negative, got {value}")]
    Negative {
        index: usize,
        name: String,
        field: StatField,
        value: i64,
    },

    #[error("participant #{index} ({name}): missing {field} for a {archetype} combatant")]
    MissingField {
        index: usize,
        name: String,
        field: StatField,
        archetype: ArchetypeKind,
    },

    #[error("participant #{index} ({name}): {field} does not apply to a {archetype} combatant")]
    UnexpectedField {
        index: usize,
        name: String,
        field: StatField,
        archetype: ArchetypeKind,
    },

    #[error("participant #{index} ({name}): initial energy {initial} exceeds max energy {max}")]
    EnergyExceedsMax {
        index: usize,
        name: String,
        initial: u32,
        max: u32,
    },

    #[error("participant #{index} ({name}): role {role} is not a {archetype} role")]
    ArchetypeMismatch {
        index: usize,
        name: String,
        role: RoleKind,
        archetype: ArchetypeKind,
    },

    #[error("participant #{index}: name must not be empty")]
    EmptyName { index: usize },

    #[error("roster holds {count} participants, limit is {limit}")]
    TooManyParticipants { count: usize, limit: usize },
}

impl SetupError {
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    /// Roster index of the offending participant, when there is one.
    pub fn participant(&self) -> Option<usize> {
        match self {
            Self::NonPositive { index, .. }
            | Self::Negative { index, .. }
            | Self::MissingField { index, .. }
            | Self::UnexpectedField { index, .. }
            | Self::EnergyExceedsMax { index, .. }
            | Self::ArchetypeMismatch { index, .. }
            | Self::EmptyName { index } => Some(*index),
            Self::TooManyParticipants { .. } => None,
        }
    }

    /// Stat field the error points at, when there is one.
    pub fn field(&self) -> Option<StatField> {
        match self {
            Self::NonPositive { field, .. }
            | Self::Negative { field, .. }
            | Self::MissingField { field, .. }
            | Self::UnexpectedField { field, .. } => Some(*field),
            Self::EnergyExceedsMax { .. } => Some(StatField::InitialEnergy),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_error_names_participant_and_field() {
        let error = SetupError::NonPositive {
            index: 2,
            name: "Archer".into(),
            field: StatField::Health,
            value: 0,
        };

        assert_eq!(
            error.to_string(),
            "participant #2 (Archer): health must be positive, got 0"
        );
        assert_eq!(error.participant(), Some(2));
        assert_eq!(error.field(), Some(StatField::Health));
        assert_eq!(error.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert_eq!(ErrorSeverity::Internal.as_str(), "internal");
    }
}
