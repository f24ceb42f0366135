//! Rendering of a finished session.
//!
//! The core only produces structured events; this module turns them into
//! either a narrated text report or a JSON document.

mod narrator;
mod report;

pub use narrator::Narrator;
pub use report::JsonReport;

use anyhow::Result;
use arena_core::{ArchetypeKind, CapabilitySet, Combatant, EntityId, RoleKind, SkillDescriptor};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::session::SessionOutcome;

/// Pre-run view of one participant, captured before the roster is consumed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub id: EntityId,
    pub name: String,
    pub role: RoleKind,
    pub archetype: ArchetypeKind,
    pub health: i32,
    pub attack_power: i32,
    pub weapon: String,
    pub energy: Option<u32>,
    pub capabilities: CapabilitySet,
    pub skill: SkillDescriptor,
}

impl From<&Combatant> for RosterEntry {
    fn from(combatant: &Combatant) -> Self {
        Self {
            id: combatant.id,
            name: combatant.name.clone(),
            role: combatant.role,
            archetype: combatant.archetype_kind(),
            health: combatant.health(),
            attack_power: combatant.attack_power,
            weapon: combatant.weapon_label().to_owned(),
            energy: combatant.energy().map(|pool| pool.max()),
            capabilities: combatant.capabilities.set(),
            skill: combatant.special_skill(),
        }
    }
}

/// Renders the outcome in the requested format.
pub fn render(outcome: &SessionOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(Narrator::new(outcome).render()),
        OutputFormat::Json => JsonReport::new(outcome).to_json(),
    }
}

pub(crate) fn capability_label(set: CapabilitySet) -> String {
    if set.is_empty() {
        return "none".to_owned();
    }
    let mut labels = Vec::new();
    if set.contains(CapabilitySet::DEFEND) {
        labels.push("defend");
    }
    if set.contains(CapabilitySet::HEAL) {
        labels.push("heal");
    }
    labels.join(", ")
}
