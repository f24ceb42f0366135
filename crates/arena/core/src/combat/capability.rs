//! Defend and heal.
//!
//! Both actions dispatch on capability presence, never on role identity, so
//! any archetype can carry either capability.

use crate::config::EnergyCosts;
use crate::state::{Combatant, EnergyPool};

use super::energy::consume_energy;
use super::{ActionFailure, ActionKind, RestoreReport};

/// Restores the owner's health by its defense capacity. No cost.
pub fn defend(owner: &mut Combatant) -> Result<RestoreReport, ActionFailure> {
    let capacity = owner
        .capabilities
        .defend
        .ok_or(ActionFailure::MissingCapability {
            action: ActionKind::Defend,
        })?
        .defense_capacity;

    let (health_before, health_after) = owner.restore_health(capacity);

    Ok(RestoreReport {
        amount: capacity,
        health_before,
        health_after,
        energy_spent: 0,
    })
}

/// Restores `target`'s health by the owner's heal power.
///
/// Pass `None` as `target` for a self-heal. Energy-bearing owners pay
/// `costs.ranged_heal` first; if they cannot, neither health nor energy
/// changes.
pub fn heal(
    owner: &mut Combatant,
    target: Option<&mut Combatant>,
    costs: &EnergyCosts,
) -> Result<RestoreReport, ActionFailure> {
    let power = owner
        .capabilities
        .heal
        .ok_or(ActionFailure::MissingCapability {
            action: ActionKind::Heal,
        })?
        .heal_power;

    let energy_spent = match owner.energy().map(EnergyPool::current) {
        Some(available) => {
            if !consume_energy(owner, costs.ranged_heal) {
                return Err(ActionFailure::InsufficientEnergy {
                    required: costs.ranged_heal,
                    available,
                });
            }
            costs.ranged_heal
        }
        None => 0,
    };

    let (health_before, health_after) = match target {
        Some(target) => target.restore_health(power),
        None => owner.restore_health(power),
    };

    Ok(RestoreReport {
        amount: power,
        health_before,
        health_after,
        energy_spent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::RoleKind;
    use crate::state::{Archetype, Capabilities, EnergyPool, EntityId, MeleeStats, RangedStats};

    fn paladin() -> Combatant {
        Combatant::new(
            EntityId(0),
            "Paladin",
            RoleKind::Paladin,
            110,
            17,
            Archetype::Melee(MeleeStats {
                armor: 6,
                weapon_type: "longsword".into(),
            }),
            Capabilities::NONE.with_defend(12).with_heal(12),
        )
    }

    fn magician(energy: u32) -> Combatant {
        Combatant::new(
            EntityId(1),
            "Magician",
            RoleKind::Magician,
            80,
            15,
            Archetype::Ranged(RangedStats {
                range: 8,
                energy: EnergyPool::new(energy, 100),
            }),
            Capabilities::NONE.with_heal(10),
        )
    }

    #[test]
    fn defend_restores_own_health() {
        let mut paladin = paladin();

        let report = defend(&mut paladin).unwrap();

        assert_eq!(report.health_before, 110);
        assert_eq!(report.health_after, 122);
        assert_eq!(paladin.health(), 122);
    }

    #[test]
    fn defend_without_capability_fails() {
        let mut magician = magician(100);

        assert_eq!(
            defend(&mut magician),
            Err(ActionFailure::MissingCapability {
                action: ActionKind::Defend,
            })
        );
        assert_eq!(magician.health(), 80);
    }

    #[test]
    fn melee_heal_is_free() {
        let mut paladin = paladin();
        let mut ally = magician(100);

        let report = heal(&mut paladin, Some(&mut ally), &EnergyCosts::default()).unwrap();

        assert_eq!(report.energy_spent, 0);
        assert_eq!(ally.health(), 92);
    }

    #[test]
    fn ranged_heal_spends_energy() {
        let mut magician = magician(30);
        let mut ally = paladin();

        let report = heal(&mut magician, Some(&mut ally), &EnergyCosts::default()).unwrap();

        assert_eq!(report.energy_spent, 10);
        assert_eq!(magician.energy().unwrap().current(), 20);
        assert_eq!(ally.health(), 120);
    }

    #[test]
    fn ranged_heal_without_energy_changes_nothing() {
        let mut magician = magician(9);
        let mut ally = paladin();

        let result = heal(&mut magician, Some(&mut ally), &EnergyCosts::default());

        assert_eq!(
            result,
            Err(ActionFailure::InsufficientEnergy {
                required: 10,
                available: 9,
            })
        );
        assert_eq!(magician.energy().unwrap().current(), 9);
        assert_eq!(ally.health(), 110);
    }

    #[test]
    fn self_heal_targets_owner() {
        let mut magician = magician(100);

        heal(&mut magician, None, &EnergyCosts::default()).unwrap();

        assert_eq!(magician.health(), 90);
        assert_eq!(magician.energy().unwrap().current(), 90);
    }
}
