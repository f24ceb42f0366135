use anyhow::{Context, Result};
use arena_core::CombatLog;
use serde::Serialize;

use super::RosterEntry;
use crate::session::SessionOutcome;

/// JSON document written when `ARENA_OUTPUT=json`.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub scenario: &'a str,
    pub seed: u64,
    pub rounds: u32,
    /// Hex SHA-256 of the combat log.
    pub digest: String,
    pub roster: &'a [RosterEntry],
    pub log: &'a CombatLog,
}

impl<'a> JsonReport<'a> {
    pub fn new(outcome: &'a SessionOutcome) -> Self {
        Self {
            scenario: &outcome.scenario,
            seed: outcome.log.seed,
            rounds: outcome.log.rounds,
            digest: hex::encode(outcome.digest),
            roster: &outcome.roster,
            log: &outcome.log,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize combat report")
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ClientConfig;
    use crate::session::Session;

    use super::*;

    #[test]
    fn json_report_carries_digest_and_events() {
        let outcome = Session::prepare(&ClientConfig::default())
            .unwrap()
            .run()
            .unwrap();

        let json = JsonReport::new(&outcome).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["scenario"], "Reference Arena");
        assert_eq!(
            value["digest"],
            hex::encode(outcome.log.digest().unwrap())
        );
        assert_eq!(value["roster"].as_array().map(Vec::len), Some(5));
        assert_eq!(value["log"]["summary"].as_array().map(Vec::len), Some(5));
        assert!(!value["log"]["events"].as_array().unwrap().is_empty());
    }
}
