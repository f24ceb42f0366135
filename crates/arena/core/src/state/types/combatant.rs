//! Combatant record and the entity-model contract.

use crate::combat::{
    ActionFailure, AttackReport, DamageReport, DeathNotice, PrepareReport, RecoverReport,
    calculate_mitigation, consume_energy, restore_energy,
};
use crate::config::{EnergyCosts, HealthFloor};
use crate::roles::{RoleKind, RoleProfile, SkillDescriptor, SkillHighlight};

use super::archetype::{Archetype, ArchetypeKind, EnergyPool};
use super::capability::Capabilities;
use super::common::EntityId;

/// A roster member.
///
/// Alive status is never stored: it is always derived from `health`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: EntityId,
    pub name: String,
    pub role: RoleKind,
    health: i32,
    pub attack_power: i32,
    pub archetype: Archetype,
    pub capabilities: Capabilities,
    /// Set by the death hook; guards against firing it twice.
    death_fired: bool,
}

impl Combatant {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        role: RoleKind,
        health: i32,
        attack_power: i32,
        archetype: Archetype,
        capabilities: Capabilities,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            health,
            attack_power,
            archetype,
            capabilities,
            death_fired: false,
        }
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn death_fired(&self) -> bool {
        self.death_fired
    }

    pub fn profile(&self) -> &'static RoleProfile {
        self.role.profile()
    }

    pub fn archetype_kind(&self) -> ArchetypeKind {
        self.archetype.kind()
    }

    pub fn energy(&self) -> Option<&EnergyPool> {
        self.archetype.energy()
    }

    pub fn energy_mut(&mut self) -> Option<&mut EnergyPool> {
        self.archetype.energy_mut()
    }

    /// Weapon for melee combatants, attack type for ranged ones.
    pub fn weapon_label(&self) -> &str {
        match &self.archetype {
            Archetype::Melee(melee) => &melee.weapon_type,
            Archetype::Ranged(_) => self.profile().weapon_label,
        }
    }

    /// Outgoing damage before the opponent's mitigation.
    pub fn base_damage(&self) -> i32 {
        self.attack_power
            .saturating_add(self.profile().attack_modifier)
            .max(0)
    }

    /// Attacks `opponent`.
    ///
    /// Energy-bearing combatants pay `costs.ranged_attack` first; when they
    /// cannot, nothing changes on either side.
    pub fn attack(
        &mut self,
        opponent: &mut Combatant,
        costs: &EnergyCosts,
        floor: HealthFloor,
    ) -> Result<AttackReport, ActionFailure> {
        let energy_spent = match self.energy().map(EnergyPool::current) {
            Some(available) => {
                if !consume_energy(self, costs.ranged_attack) {
                    return Err(ActionFailure::InsufficientEnergy {
                        required: costs.ranged_attack,
                        available,
                    });
                }
                costs.ranged_attack
            }
            None => 0,
        };

        let damage = opponent.take_damage(self.base_damage(), floor);

        Ok(AttackReport {
            energy_spent,
            damage,
        })
    }

    /// Applies incoming damage after archetype mitigation.
    ///
    /// Fires the death hook if this call moved health from above zero to zero
    /// or below.
    pub fn take_damage(&mut self, amount: i32, floor: HealthFloor) -> DamageReport {
        let raw = amount.max(0);
        let applied = match &self.archetype {
            Archetype::Melee(melee) => calculate_mitigation(raw, melee.armor),
            Archetype::Ranged(_) => raw,
        };

        let health_before = self.health;
        let mut health_after = health_before.saturating_sub(applied);
        if floor == HealthFloor::Zero {
            health_after = health_after.max(0);
        }
        self.health = health_after;

        let death = if health_before > 0 && health_after <= 0 {
            self.on_death()
        } else {
            None
        };

        DamageReport {
            raw,
            mitigated: raw - applied,
            applied,
            health_before,
            health_after,
            death,
        }
    }

    /// One-time death hook. Returns `None` once it has already fired.
    pub fn on_death(&mut self) -> Option<DeathNotice> {
        if self.death_fired {
            return None;
        }
        self.death_fired = true;

        Some(DeathNotice {
            entity: self.id,
            description: format!("{} {}", self.name, self.profile().death_note),
        })
    }

    /// Restores health by `amount`. Healing never revives: callers only
    /// target living combatants.
    pub(crate) fn restore_health(&mut self, amount: i32) -> (i32, i32) {
        let before = self.health;
        self.health = before.saturating_add(amount.max(0));
        (before, self.health)
    }

    /// Pre-turn hook.
    ///
    /// Melee combatants check their equipment; ranged combatants report
    /// readiness. Neither changes state.
    pub fn prepare_battle(&self) -> PrepareReport {
        let profile = self.profile();
        let check = match &self.archetype {
            Archetype::Melee(melee) => format!(
                "{} checks the {} (armor {})",
                self.name, melee.weapon_type, melee.armor
            ),
            Archetype::Ranged(ranged) => format!(
                "{} readies {} (energy {}/{}, range {})",
                self.name,
                profile.weapon_label,
                ranged.energy.current(),
                ranged.energy.max(),
                ranged.range
            ),
        };

        PrepareReport {
            check,
            note: format!("{} {}", self.name, profile.prepare_note),
        }
    }

    /// Post-turn hook.
    ///
    /// Ranged combatants regenerate `costs.regeneration` energy before their
    /// role-specific recovery step.
    pub fn after_battle(&mut self, costs: &EnergyCosts) -> RecoverReport {
        let energy_restored = restore_energy(self, costs.regeneration);

        RecoverReport {
            energy_restored,
            note: format!("{} {}", self.name, self.profile().recover_note),
        }
    }

    /// Descriptor of the role's signature skill. Pure.
    pub fn special_skill(&self) -> SkillDescriptor {
        let mut highlights = Vec::new();
        match &self.archetype {
            Archetype::Melee(melee) => highlights.push(SkillHighlight::Armor(melee.armor)),
            Archetype::Ranged(ranged) => highlights.push(SkillHighlight::Range(ranged.range)),
        }
        if let Some(defend) = self.capabilities.defend {
            highlights.push(SkillHighlight::DefenseCapacity(defend.defense_capacity));
        }
        if let Some(heal) = self.capabilities.heal {
            highlights.push(SkillHighlight::HealPower(heal.heal_power));
        }

        SkillDescriptor::from_template(&self.name, &self.profile().skill, highlights)
    }
}
