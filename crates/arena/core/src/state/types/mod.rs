mod archetype;
mod capability;
mod combatant;
mod common;

pub use archetype::{
    Archetype, ArchetypeKind, EnergyBounds, EnergyBoundsError, EnergyPool, MeleeStats,
    RangedStats,
};
pub use capability::{
    Capabilities, CapabilityClass, CapabilitySet, DefendCapability, HealCapability,
};
pub use combatant::Combatant;
pub use common::{EntityId, Round};
