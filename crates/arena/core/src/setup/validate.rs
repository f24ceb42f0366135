//! Per-participant validation.

use crate::error::{SetupError, StatField};
use crate::state::{
    Archetype, ArchetypeKind, Capabilities, Combatant, EnergyPool, EntityId, MeleeStats,
    RangedStats,
};

use super::participant::ParticipantSpec;

/// Validates one specification and builds its combatant.
pub(crate) fn build_combatant(
    index: usize,
    spec: &ParticipantSpec,
) -> Result<Combatant, SetupError> {
    let check = Checker { index, spec };

    if spec.name.trim().is_empty() {
        return Err(SetupError::EmptyName { index });
    }
    if spec.role.archetype() != spec.archetype {
        return Err(SetupError::ArchetypeMismatch {
            index,
            name: spec.name.clone(),
            role: spec.role,
            archetype: spec.archetype,
        });
    }

    let stats = &spec.stats;
    check.positive(StatField::Health, stats.health)?;
    check.non_negative(StatField::AttackPower, stats.attack_power)?;

    let archetype = match spec.archetype {
        ArchetypeKind::Melee => {
            check.absent(StatField::Range, stats.range.is_some())?;
            check.absent(StatField::MaxEnergy, stats.max_energy.is_some())?;
            check.absent(StatField::InitialEnergy, stats.initial_energy.is_some())?;

            let armor = check.required(StatField::Armor, stats.armor)?;
            check.non_negative(StatField::Armor, armor)?;

            let weapon_type = stats
                .weapon_type
                .clone()
                .unwrap_or_else(|| spec.role.profile().weapon_label.to_owned());

            Archetype::Melee(MeleeStats { armor, weapon_type })
        }
        ArchetypeKind::Ranged => {
            check.absent(StatField::Armor, stats.armor.is_some())?;
            check.absent(StatField::WeaponType, stats.weapon_type.is_some())?;

            let range = check.required(StatField::Range, stats.range)?;
            let range = check.positive(StatField::Range, range)?;
            let max = check.required(StatField::MaxEnergy, stats.max_energy)?;
            let max = check.positive(StatField::MaxEnergy, max)?;

            let energy = match stats.initial_energy {
                Some(initial) => {
                    let initial = check.non_negative(StatField::InitialEnergy, initial)?;
                    if initial > max {
                        return Err(SetupError::EnergyExceedsMax {
                            index,
                            name: spec.name.clone(),
                            initial,
                            max,
                        });
                    }
                    EnergyPool::new(initial, max)
                }
                None => EnergyPool::full(max),
            };

            Archetype::Ranged(RangedStats { range, energy })
        }
    };

    let mut capabilities = Capabilities::NONE;
    if let Some(capacity) = spec.capabilities.defend {
        check.positive(StatField::DefenseCapacity, capacity)?;
        capabilities = capabilities.with_defend(capacity);
    }
    if let Some(power) = spec.capabilities.heal {
        check.positive(StatField::HealPower, power)?;
        capabilities = capabilities.with_heal(power);
    }

    Ok(Combatant::new(
        EntityId(index as u32),
        spec.name.clone(),
        spec.role,
        stats.health,
        stats.attack_power,
        archetype,
        capabilities,
    ))
}

struct Checker<'a> {
    index: usize,
    spec: &'a ParticipantSpec,
}

impl Checker<'_> {
    fn name(&self) -> String {
        self.spec.name.clone()
    }

    fn positive(&self, field: StatField, value: i32) -> Result<u32, SetupError> {
        if value <= 0 {
            return Err(SetupError::NonPositive {
                index: self.index,
                name: self.name(),
                field,
                value: value.into(),
            });
        }
        Ok(value.unsigned_abs())
    }

    fn non_negative(&self, field: StatField, value: i32) -> Result<u32, SetupError> {
        if value < 0 {
            return Err(SetupError::Negative {
                index: self.index,
                name: self.name(),
                field,
                value: value.into(),
            });
        }
        Ok(value.unsigned_abs())
    }

    fn required(&self, field: StatField, value: Option<i32>) -> Result<i32, SetupError> {
        value.ok_or_else(|| SetupError::MissingField {
            index: self.index,
            name: self.name(),
            field,
            archetype: self.spec.archetype,
        })
    }

    fn absent(&self, field: StatField, present: bool) -> Result<(), SetupError> {
        if present {
            return Err(SetupError::UnexpectedField {
                index: self.index,
                name: self.name(),
                field,
                archetype: self.spec.archetype,
            });
        }
        Ok(())
    }
}
