//! Scenario definition.

use arena_core::{ParticipantSpec, Roster, SetupError, build_roster};

/// A named roster plus optional run parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub name: String,
    /// Game seed; callers fall back to their own default when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
    /// Round count; callers fall back to the arena configuration when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rounds: Option<u32>,
    pub participants: Vec<ParticipantSpec>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, participants: Vec<ParticipantSpec>) -> Self {
        Self {
            name: name.into(),
            seed: None,
            rounds: None,
            participants,
        }
    }

    /// Validates the participants and builds the roster.
    pub fn roster(&self) -> Result<Roster, SetupError> {
        build_roster(&self.participants)
    }
}

#[cfg(test)]
mod tests {
    use arena_core::{RoleKind, StatBundle};

    use super::*;

    #[test]
    fn roster_reports_invalid_participants() {
        let mut scenario = Scenario::new(
            "broken",
            vec![ParticipantSpec::new(
                "Swordsman",
                RoleKind::SwordsMan,
                StatBundle::melee(0, 20, 5),
            )],
        );

        assert!(scenario.roster().is_err());

        scenario.participants[0].stats.health = 100;
        assert_eq!(scenario.roster().map(|roster| roster.len()), Ok(1));
    }
}
