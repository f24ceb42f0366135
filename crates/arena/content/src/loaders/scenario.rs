//! Scenario loader.

use std::path::Path;

use anyhow::Context;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::Scenario;

const REFERENCE_SCENARIO: &str = include_str!("../../data/reference.ron");

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        let scenario = Self::parse(&content)
            .with_context(|| format!("Invalid scenario file {}", path.display()))?;

        tracing::debug!(
            "Loaded scenario '{}' with {} participants from {}",
            scenario.name,
            scenario.participants.len(),
            path.display()
        );
        Ok(scenario)
    }

    /// Parse a scenario from RON source.
    pub fn parse(source: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(source)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        if scenario.rounds == Some(0) {
            anyhow::bail!("Scenario '{}' must run at least one round", scenario.name);
        }

        Ok(scenario)
    }
}

/// The built-in five-role scenario.
pub fn reference_scenario() -> LoadResult<Scenario> {
    ScenarioLoader::parse(REFERENCE_SCENARIO).context("Built-in reference scenario is invalid")
}

#[cfg(test)]
mod tests {
    use arena_core::{ArchetypeKind, RoleKind};

    use super::*;

    #[test]
    fn reference_scenario_lists_every_role() {
        let scenario = reference_scenario().unwrap();

        let roles: Vec<_> = scenario.participants.iter().map(|p| p.role).collect();
        assert_eq!(
            roles,
            vec![
                RoleKind::SwordsMan,
                RoleKind::ShieldSwordsMan,
                RoleKind::Magician,
                RoleKind::Archer,
                RoleKind::Paladin,
            ]
        );
        assert_eq!(scenario.rounds, Some(6));
        assert_eq!(scenario.seed, Some(0));
    }

    #[test]
    fn reference_stats_match_the_arena_lineup() {
        let scenario = reference_scenario().unwrap();

        let magician = &scenario.participants[2];
        assert_eq!(magician.archetype, ArchetypeKind::Ranged);
        assert_eq!(magician.stats.max_energy, Some(100));
        assert_eq!(magician.capabilities.heal, Some(10));
        assert_eq!(magician.capabilities.defend, None);

        let paladin = &scenario.participants[4];
        assert_eq!(paladin.stats.armor, Some(6));
        assert_eq!(paladin.capabilities.defend, Some(12));
        assert_eq!(paladin.capabilities.heal, Some(12));

        assert_eq!(scenario.roster().map(|roster| roster.len()), Ok(5));
    }

    #[test]
    fn optional_fields_may_be_omitted() {
        let scenario = ScenarioLoader::parse(
            r#"(
                name: "duel",
                participants: [
                    (
                        name: "A",
                        archetype: Melee,
                        role: SwordsMan,
                        stats: (health: 10, attack_power: 3, armor: Some(1)),
                    ),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(scenario.seed, None);
        assert_eq!(scenario.rounds, None);
        assert_eq!(scenario.participants[0].capabilities.defend, None);
    }

    #[test]
    fn zero_rounds_is_rejected() {
        let error = ScenarioLoader::parse(r#"(name: "empty", rounds: Some(0), participants: [])"#)
            .unwrap_err();

        assert!(error.to_string().contains("at least one round"));
    }

    #[test]
    fn malformed_source_is_reported() {
        assert!(ScenarioLoader::parse("(name: ").is_err());
    }
}
