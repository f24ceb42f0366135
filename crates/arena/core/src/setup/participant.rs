use crate::roles::RoleKind;
use crate::state::ArchetypeKind;

/// Blueprint of a combatant that should exist at the start of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticipantSpec {
    pub name: String,
    pub archetype: ArchetypeKind,
    pub role: RoleKind,
    pub stats: StatBundle,
    #[cfg_attr(feature = "serde", serde(default))]
    pub capabilities: CapabilitySpec,
}

impl ParticipantSpec {
    pub fn new(name: impl Into<String>, role: RoleKind, stats: StatBundle) -> Self {
        Self {
            name: name.into(),
            archetype: role.archetype(),
            role,
            stats,
            capabilities: CapabilitySpec::default(),
        }
    }

    pub fn with_defend(mut self, defense_capacity: i32) -> Self {
        self.capabilities.defend = Some(defense_capacity);
        self
    }

    pub fn with_heal(mut self, heal_power: i32) -> Self {
        self.capabilities.heal = Some(heal_power);
        self
    }
}

/// Raw, unvalidated stats.
///
/// Archetype-specific fields are optional here; validation checks that the
/// right ones are present for the declared archetype and absent otherwise.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatBundle {
    pub health: i32,
    pub attack_power: i32,
    /// Melee only.
    pub armor: Option<i32>,
    /// Melee only. Defaults to the role's weapon label.
    pub weapon_type: Option<String>,
    /// Ranged only.
    pub range: Option<i32>,
    /// Ranged only.
    pub max_energy: Option<i32>,
    /// Ranged only. Defaults to `max_energy`.
    pub initial_energy: Option<i32>,
}

impl StatBundle {
    pub fn melee(health: i32, attack_power: i32, armor: i32) -> Self {
        Self {
            health,
            attack_power,
            armor: Some(armor),
            ..Self::default()
        }
    }

    pub fn ranged(health: i32, attack_power: i32, range: i32, max_energy: i32) -> Self {
        Self {
            health,
            attack_power,
            range: Some(range),
            max_energy: Some(max_energy),
            ..Self::default()
        }
    }

    pub fn with_initial_energy(mut self, energy: i32) -> Self {
        self.initial_energy = Some(energy);
        self
    }

    pub fn with_weapon(mut self, weapon_type: impl Into<String>) -> Self {
        self.weapon_type = Some(weapon_type.into());
        self
    }
}

/// Requested capabilities. `None` means the capability is absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CapabilitySpec {
    pub defend: Option<i32>,
    pub heal: Option<i32>,
}
