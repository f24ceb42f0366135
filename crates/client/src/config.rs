//! Client configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

/// Output rendering selected with `ARENA_OUTPUT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Client-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// RON scenario file; the built-in reference scenario when unset.
    pub scenario: Option<PathBuf>,
    /// TOML arena configuration; defaults when unset.
    pub arena_config: Option<PathBuf>,
    /// Overrides the scenario seed.
    pub seed: Option<u64>,
    /// Overrides the scenario and configuration round count.
    pub rounds: Option<u32>,
    pub output: OutputFormat,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Write logs to a file instead of stderr.
    pub to_file: bool,
    /// Log directory; the platform cache directory when unset.
    pub dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_SCENARIO` - Path to a RON scenario
    /// - `ARENA_CONFIG` - Path to a TOML arena configuration
    /// - `ARENA_SEED` - Game seed (u64)
    /// - `ARENA_ROUNDS` - Number of rounds (at least 1)
    /// - `ARENA_OUTPUT` - `text` (default) or `json`
    /// - `ARENA_LOG_TO_FILE` - Log to a file instead of stderr (default: false)
    /// - `ARENA_LOG_DIR` - Directory for log files
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.scenario = lookup("ARENA_SCENARIO")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        config.arena_config = lookup("ARENA_CONFIG")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        config.seed = parse(&lookup, "ARENA_SEED");
        config.rounds = parse::<u32>(&lookup, "ARENA_ROUNDS").map(|rounds| rounds.max(1));

        if let Some(output) = parse(&lookup, "ARENA_OUTPUT") {
            config.output = output;
        }
        if let Some(to_file) = parse_bool(&lookup, "ARENA_LOG_TO_FILE") {
            config.logging.to_file = to_file;
        }
        config.logging.dir = lookup("ARENA_LOG_DIR")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        config
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn parse_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    match lookup(key)?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
