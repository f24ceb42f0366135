//! Combat resolution.
//!
//! Pure helpers (mitigation) and the small set of functions allowed to mutate
//! combatant resources (energy accounting, defend, heal). Attack and damage
//! intake live on [`Combatant`](crate::state::Combatant) and call into this
//! module for mitigation and energy.
//!
//! # Core Functions
//!
//! - `calculate_mitigation`: armor reduction, `max(0, incoming - armor)`
//! - `consume_energy` / `restore_energy`: bounded energy pool mutation
//! - `defend` / `heal`: capability actions

pub mod action;
pub mod capability;
pub mod energy;
pub mod mitigation;
pub mod result;

pub use action::ActionKind;
pub use capability::{defend, heal};
pub use energy::{consume_energy, restore_energy};
pub use mitigation::calculate_mitigation;
pub use result::{
    ActionFailure, AttackReport, DamageReport, DeathNotice, PrepareReport, RecoverReport,
    RestoreReport,
};
