//! One simulation run assembled from client configuration.

use anyhow::{Context, Result};
use arena_content::{ConfigLoader, Scenario, ScenarioLoader, reference_scenario};
use arena_core::{ArenaConfig, CombatLog, RandomSource, run_simulation_with};

use crate::config::ClientConfig;
use crate::presentation::RosterEntry;

/// Resolved inputs of a run.
#[derive(Clone, Debug)]
pub struct Session {
    pub scenario: Scenario,
    pub arena: ArenaConfig,
    pub seed: u64,
    pub rounds: u32,
}

/// Everything the presentation layer needs after a run.
#[derive(Clone, Debug)]
pub struct SessionOutcome {
    pub scenario: String,
    pub roster: Vec<RosterEntry>,
    pub log: CombatLog,
    /// SHA-256 of the combat log.
    pub digest: [u8; 32],
}

impl Session {
    /// Loads scenario and arena configuration.
    ///
    /// Seed precedence: client override, then scenario, then 0. Round
    /// precedence: client override, then scenario, then arena configuration.
    pub fn prepare(client: &ClientConfig) -> Result<Self> {
        let scenario = match &client.scenario {
            Some(path) => ScenarioLoader::load(path)?,
            None => reference_scenario()?,
        };
        let arena = match &client.arena_config {
            Some(path) => ConfigLoader::load(path)?,
            None => ArenaConfig::default(),
        };

        let seed = client.seed.or(scenario.seed).unwrap_or(0);
        let rounds = client.rounds.or(scenario.rounds).unwrap_or(arena.rounds);

        Ok(Self {
            scenario,
            arena,
            seed,
            rounds,
        })
    }

    pub fn run(&self) -> Result<SessionOutcome> {
        let roster = self.scenario.roster().map_err(|error| {
            tracing::error!(severity = error.severity().as_str(), "{}", error);
            error
        })?;
        let entries = roster.iter().map(RosterEntry::from).collect();

        tracing::info!(
            "Running '{}': {} participants, {} rounds, seed {}",
            self.scenario.name,
            roster.len(),
            self.rounds,
            self.seed
        );

        let log = run_simulation_with(
            roster,
            self.rounds,
            RandomSource::seeded(self.seed),
            &self.arena,
        )
        .map_err(|error| {
            tracing::error!(severity = error.severity().as_str(), "{}", error);
            error
        })
        .with_context(|| format!("Simulation of '{}' aborted", self.scenario.name))?;
        let digest = log.digest().context("Failed to digest combat log")?;

        Ok(SessionOutcome {
            scenario: self.scenario.name.clone(),
            roster: entries,
            log,
            digest,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn defaults_to_reference_scenario() {
        let session = Session::prepare(&ClientConfig::default()).unwrap();

        assert_eq!(session.scenario.participants.len(), 5);
        assert_eq!(session.seed, 0);
        assert_eq!(session.rounds, 6);
    }

    #[test]
    fn client_overrides_take_precedence() {
        let client = ClientConfig {
            seed: Some(77),
            rounds: Some(2),
            ..ClientConfig::default()
        };

        let outcome = Session::prepare(&client).unwrap().run().unwrap();

        assert_eq!(outcome.log.seed, 77);
        assert_eq!(outcome.log.rounds, 2);
        assert_eq!(outcome.roster.len(), 5);
        assert_eq!(outcome.digest, outcome.log.digest().unwrap());
    }

    #[test]
    fn config_file_rounds_apply_when_scenario_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let scenario = dir.path().join("duel.ron");
        fs::write(
            &scenario,
            r#"#![enable(implicit_some)]
            (
                name: "duel",
                participants: [
                    (name: "A", archetype: Melee, role: SwordsMan, stats: (health: 50, attack_power: 5, armor: 1)),
                    (name: "B", archetype: Melee, role: SwordsMan, stats: (health: 50, attack_power: 5, armor: 1)),
                ],
            )"#,
        )
        .unwrap();
        let config = dir.path().join("arena.toml");
        fs::write(&config, "rounds = 4\n").unwrap();

        let client = ClientConfig {
            scenario: Some(scenario),
            arena_config: Some(config),
            ..ClientConfig::default()
        };
        let session = Session::prepare(&client).unwrap();

        assert_eq!(session.rounds, 4);
        assert_eq!(session.run().unwrap().log.rounds, 4);
    }

    #[test]
    fn invalid_roster_fails_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let scenario = dir.path().join("bad.ron");
        fs::write(
            &scenario,
            r#"(
                name: "bad",
                participants: [
                    (name: "A", archetype: Ranged, role: SwordsMan, stats: (health: 50, attack_power: 5)),
                ],
            )"#,
        )
        .unwrap();

        let client = ClientConfig {
            scenario: Some(scenario),
            ..ClientConfig::default()
        };
        let error = Session::prepare(&client).unwrap().run().unwrap_err();

        assert!(error.to_string().contains("not a ranged role"));
    }
}
