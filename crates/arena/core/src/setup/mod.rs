//! Roster construction.
//!
//! Participant specifications are untrusted input (they usually come from a
//! scenario file). [`build_roster`] validates every one of them and either
//! returns a complete roster or the first error found, in roster order.

mod participant;
mod validate;

pub use participant::{CapabilitySpec, ParticipantSpec, StatBundle};

use crate::config::ArenaConfig;
use crate::error::SetupError;
use crate::state::Roster;

/// Validates the specifications and builds a roster in the given order.
pub fn build_roster(specs: &[ParticipantSpec]) -> Result<Roster, SetupError> {
    if specs.len() > ArenaConfig::MAX_PARTICIPANTS {
        return Err(SetupError::TooManyParticipants {
            count: specs.len(),
            limit: ArenaConfig::MAX_PARTICIPANTS,
        });
    }

    let members = specs
        .iter()
        .enumerate()
        .map(|(index, spec)| validate::build_combatant(index, spec))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Roster::from_combatants(members))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatField;
    use crate::roles::RoleKind;
    use crate::state::{ArchetypeKind, EntityId};

    fn swordsman() -> ParticipantSpec {
        ParticipantSpec::new(
            "Swordsman",
            RoleKind::SwordsMan,
            StatBundle::melee(100, 20, 5),
        )
    }

    fn archer() -> ParticipantSpec {
        ParticipantSpec::new(
            "Archer",
            RoleKind::Archer,
            StatBundle::ranged(90, 18, 10, 80),
        )
    }

    #[test]
    fn builds_roster_in_order() {
        let roster = build_roster(&[swordsman(), archer()]).unwrap();

        assert_eq!(roster.len(), 2);
        let archer = roster.get(EntityId(1)).unwrap();
        assert_eq!(archer.name, "Archer");
        assert_eq!(archer.energy().unwrap().current(), 80);
        assert_eq!(
            roster.get(EntityId(0)).unwrap().weapon_label(),
            RoleKind::SwordsMan.profile().weapon_label
        );
    }

    #[test]
    fn explicit_initial_energy_is_kept() {
        let mut spec = archer();
        spec.stats = spec.stats.with_initial_energy(5);

        let roster = build_roster(&[spec]).unwrap();

        assert_eq!(
            roster.get(EntityId(0)).unwrap().energy().unwrap().current(),
            5
        );
    }

    #[test]
    fn rejects_non_positive_health() {
        let mut spec = archer();
        spec.stats.health = 0;

        let error = build_roster(&[swordsman(), spec]).unwrap_err();

        assert_eq!(
            error,
            SetupError::NonPositive {
                index: 1,
                name: "Archer".into(),
                field: StatField::Health,
                value: 0,
            }
        );
    }

    #[test]
    fn rejects_negative_armor() {
        let mut spec = swordsman();
        spec.stats.armor = Some(-1);

        let error = build_roster(&[spec]).unwrap_err();

        assert_eq!(error.field(), Some(StatField::Armor));
    }

    #[test]
    fn rejects_initial_energy_above_max() {
        let mut spec = archer();
        spec.stats = spec.stats.with_initial_energy(81);

        assert!(matches!(
            build_roster(&[spec]),
            Err(SetupError::EnergyExceedsMax {
                initial: 81,
                max: 80,
                ..
            })
        ));
    }

    #[test]
    fn rejects_fields_of_the_other_archetype() {
        let mut spec = swordsman();
        spec.stats.max_energy = Some(50);

        assert!(matches!(
            build_roster(&[spec]),
            Err(SetupError::UnexpectedField {
                field: StatField::MaxEnergy,
                archetype: ArchetypeKind::Melee,
                ..
            })
        ));
    }

    #[test]
    fn rejects_missing_ranged_stats() {
        let mut spec = archer();
        spec.stats.range = None;

        assert!(matches!(
            build_roster(&[spec]),
            Err(SetupError::MissingField {
                field: StatField::Range,
                ..
            })
        ));
    }

    #[test]
    fn rejects_role_archetype_mismatch() {
        let mut spec = swordsman();
        spec.archetype = ArchetypeKind::Ranged;

        assert!(matches!(
            build_roster(&[spec]),
            Err(SetupError::ArchetypeMismatch {
                role: RoleKind::SwordsMan,
                ..
            })
        ));
    }

    #[test]
    fn rejects_non_positive_capability() {
        let spec = swordsman().with_heal(0);

        assert_eq!(
            build_roster(&[spec]).unwrap_err().field(),
            Some(StatField::HealPower)
        );
    }

    #[test]
    fn rejects_blank_name() {
        let mut spec = swordsman();
        spec.name = "  ".into();

        assert_eq!(
            build_roster(&[spec]),
            Err(SetupError::EmptyName { index: 0 })
        );
    }

    #[test]
    fn rejects_oversized_roster() {
        let specs = vec![swordsman(); ArenaConfig::MAX_PARTICIPANTS + 1];

        assert!(matches!(
            build_roster(&specs),
            Err(SetupError::TooManyParticipants { .. })
        ));
    }
}
