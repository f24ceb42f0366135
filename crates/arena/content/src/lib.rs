//! Data-driven arena content.
//!
//! - Scenarios: roster, seed and round count (RON)
//! - Arena tuning: costs, action policy, health floor (TOML)
//! - The built-in reference scenario, embedded at compile time
//!
//! Content is turned into `arena-core` types here and never appears in the
//! core itself.

pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scenario::Scenario;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, ScenarioLoader, reference_scenario};
