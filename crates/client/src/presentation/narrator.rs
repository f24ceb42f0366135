use std::fmt::Write;

use arena_core::{CombatEvent, EventKind, FinalStatus, Outcome, Round, SkillHighlight};

use super::{RosterEntry, capability_label};
use crate::session::SessionOutcome;

/// Plain-text narration of a session.
pub struct Narrator<'a> {
    outcome: &'a SessionOutcome,
}

impl<'a> Narrator<'a> {
    pub fn new(outcome: &'a SessionOutcome) -> Self {
        Self { outcome }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_header(&mut out);
        self.write_roster(&mut out);
        self.write_rounds(&mut out);
        self.write_summary(&mut out);
        out
    }

    fn name_of(&self, id: arena_core::EntityId) -> &str {
        self.outcome
            .roster
            .get(id.index())
            .map(|entry| entry.name.as_str())
            .unwrap_or("?")
    }

    fn write_header(&self, out: &mut String) {
        let log = &self.outcome.log;
        let _ = writeln!(
            out,
            "=== {} (seed {}, {} rounds) ===",
            self.outcome.scenario, log.seed, log.rounds
        );
    }

    fn write_roster(&self, out: &mut String) {
        let _ = writeln!(out, "\nRoster");
        for entry in &self.outcome.roster {
            write_entry(out, entry);
        }
    }

    fn write_rounds(&self, out: &mut String) {
        let log = &self.outcome.log;
        for round in (1..=log.rounds).map(Round) {
            let _ = writeln!(out, "\n--- {} ---", round);
            for event in log.events_in_round(round) {
                self.write_event(out, event);
            }
        }
    }

    fn write_event(&self, out: &mut String, event: &CombatEvent) {
        let actor = self.name_of(event.actor);
        let line = match (&event.kind, &event.outcome) {
            (EventKind::Prepare | EventKind::Recover, _) => format!("  {}", event.detail),
            (EventKind::Death, _) => format!("  ✝ {}", event.detail),
            (kind, Outcome::Failed(failure)) => {
                format!("  {} tries to {} but {}", actor, kind, failure)
            }
            (_, Outcome::Applied) => format!("  {}", event.detail),
        };
        let _ = writeln!(out, "{}", line);
    }

    fn write_summary(&self, out: &mut String) {
        let log = &self.outcome.log;
        let _ = writeln!(out, "\n=== Final status ===");
        for status in log.summary() {
            write_status(out, status);
        }
        let _ = writeln!(
            out,
            "\n{} of {} standing. Log digest: {}",
            log.survivors().count(),
            log.summary().len(),
            hex::encode(self.outcome.digest)
        );
    }
}

fn write_entry(out: &mut String, entry: &RosterEntry) {
    let resources = match entry.energy {
        Some(max) => format!("energy {}", max),
        None => "no energy".to_owned(),
    };
    let _ = writeln!(
        out,
        "  {} {} ({}, {}) health {}, attack {}, {}, {}; capabilities: {}",
        entry.id,
        entry.name,
        entry.role,
        entry.archetype,
        entry.health,
        entry.attack_power,
        entry.weapon,
        resources,
        capability_label(entry.capabilities)
    );

    let skill = &entry.skill;
    let highlights: Vec<String> = skill
        .highlights
        .iter()
        .map(|highlight| match highlight {
            SkillHighlight::Armor(value) => format!("armor {value}"),
            SkillHighlight::DefenseCapacity(value) => format!("defense {value}"),
            SkillHighlight::HealPower(value) => format!("heal {value}"),
            SkillHighlight::Range(value) => format!("range {value}"),
        })
        .collect();
    let tags: Vec<String> = skill.tags.iter().map(ToString::to_string).collect();
    let _ = writeln!(
        out,
        "      skill {}: {}, {} [{}] ({})",
        skill.name,
        skill.description,
        skill.effect,
        tags.join(", "),
        highlights.join(", ")
    );
}

fn write_status(out: &mut String, status: &FinalStatus) {
    let energy = status
        .energy
        .map(|energy| format!(", energy {energy}"))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        "  {} {:<18} {:<6} health {}{}",
        status.id,
        status.name,
        if status.alive { "alive" } else { "fallen" },
        status.health,
        energy
    );
}
