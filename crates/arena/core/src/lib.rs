//! Deterministic role/combat simulation.
//!
//! `arena-core` defines the combatant model (archetypes, roles and
//! capabilities), the resolution rules (mitigation, energy gating, one-time
//! death hooks) and the round scheduler. It performs no I/O: a run takes a
//! validated [`Roster`] and a seeded [`RandomSource`] and returns a
//! [`CombatLog`] of structured events.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod events;
pub mod roles;
pub mod setup;
pub mod state;

pub use combat::{
    ActionFailure, ActionKind, calculate_mitigation, consume_energy, defend, heal, restore_energy,
};
pub use config::{ArenaConfig, EnergyCosts, HealthFloor};
pub use engine::{ActionPolicy, ActionWeights, SimulationError, run_simulation, run_simulation_with};
pub use env::{DrawContext, PcgRng, RandomSource, RngOracle, compute_seed};
pub use error::{ErrorSeverity, SetupError, StatField};
pub use events::{CombatEvent, CombatLog, EventKind, FinalStatus, Outcome, Snapshot};
pub use roles::{EffectTag, RoleKind, RoleProfile, SkillDescriptor, SkillHighlight};
pub use setup::{CapabilitySpec, ParticipantSpec, StatBundle, build_roster};
pub use state::{
    Archetype, ArchetypeKind, Capabilities, CapabilityClass, CapabilitySet, Combatant,
    EnergyBounds, EnergyBoundsError, EnergyPool, EntityId, MeleeStats, RangedStats, Roster, Round,
};
