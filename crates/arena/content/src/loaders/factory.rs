//! Content factory for loading a data directory.

use std::path::{Path, PathBuf};

use arena_core::ArenaConfig;

use crate::loaders::{ConfigLoader, LoadResult, ScenarioLoader};
use crate::scenario::Scenario;

/// Content factory that loads arena content from a data directory.
///
/// ```text
/// data_dir/
/// ├── arena.toml
/// └── scenarios/
///     ├── reference.ron
///     └── duel.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load `arena.toml`, or the defaults when the file does not exist.
    pub fn load_config(&self) -> LoadResult<ArenaConfig> {
        let path = self.data_dir.join("arena.toml");
        if !path.exists() {
            tracing::debug!(
                "No arena.toml in {}, using defaults",
                self.data_dir.display()
            );
            return Ok(ArenaConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load `scenarios/<name>.ron`.
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self.data_dir.join("scenarios").join(format!("{name}.ron"));
        ScenarioLoader::load(&path)
    }
}
