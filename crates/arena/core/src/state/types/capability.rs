//! Optional capabilities, attached per combatant independently of archetype.

use bitflags::bitflags;

bitflags! {
    /// Set of capabilities a combatant carries.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CapabilitySet: u8 {
        const DEFEND = 1 << 0;
        const HEAL = 1 << 1;
    }
}

impl CapabilitySet {
    /// Collapses the flag set into its policy class.
    pub fn class(self) -> CapabilityClass {
        match (self.contains(Self::DEFEND), self.contains(Self::HEAL)) {
            (false, false) => CapabilityClass::None,
            (true, false) => CapabilityClass::DefendOnly,
            (false, true) => CapabilityClass::HealOnly,
            (true, true) => CapabilityClass::DefendAndHeal,
        }
    }
}

/// Classification of a capability set, used as the action-policy key.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CapabilityClass {
    None,
    DefendOnly,
    HealOnly,
    DefendAndHeal,
}

/// Shield-style self restoration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefendCapability {
    pub defense_capacity: i32,
}

/// Restoration of another combatant's (or one's own) health.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealCapability {
    pub heal_power: i32,
}

/// Capability records carried by one combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capabilities {
    pub defend: Option<DefendCapability>,
    pub heal: Option<HealCapability>,
}

impl Capabilities {
    pub const NONE: Self = Self {
        defend: None,
        heal: None,
    };

    pub fn with_defend(mut self, defense_capacity: i32) -> Self {
        self.defend = Some(DefendCapability { defense_capacity });
        self
    }

    pub fn with_heal(mut self, heal_power: i32) -> Self {
        self.heal = Some(HealCapability { heal_power });
        self
    }

    pub fn set(&self) -> CapabilitySet {
        let mut set = CapabilitySet::empty();
        set.set(CapabilitySet::DEFEND, self.defend.is_some());
        set.set(CapabilitySet::HEAL, self.heal.is_some());
        set
    }

    pub fn can_defend(&self) -> bool {
        self.defend.is_some()
    }

    pub fn can_heal(&self) -> bool {
        self.heal.is_some()
    }
}
