//! Combat scheduler.
//!
//! [`run_simulation`] consumes a validated roster and drives it through a
//! fixed number of rounds, returning the complete [`CombatLog`]. Soft action
//! failures are recorded in the log; only broken invariants surface as a
//! [`SimulationError`].
//!
//! [`CombatLog`]: crate::events::CombatLog

mod errors;
mod policy;
mod targeting;
mod turns;
mod validation;

pub use errors::SimulationError;
pub use policy::{ActionPolicy, ActionWeights, Candidates};
pub use targeting::{attack_targets, heal_targets};

use crate::config::ArenaConfig;
use crate::env::RandomSource;
use crate::events::CombatLog;
use crate::state::Roster;

/// Runs `rounds` rounds with the default configuration.
pub fn run_simulation(
    roster: Roster,
    rounds: u32,
    rng: RandomSource<'_>,
) -> Result<CombatLog, SimulationError> {
    let config = ArenaConfig::default();
    run_simulation_with(roster, rounds, rng, &config)
}

/// Runs `rounds` rounds under `config`. `config.rounds` is ignored in favour
/// of the explicit argument.
pub fn run_simulation_with(
    roster: Roster,
    rounds: u32,
    rng: RandomSource<'_>,
    config: &ArenaConfig,
) -> Result<CombatLog, SimulationError> {
    turns::Scheduler::new(roster, rounds, rng, config).run()
}
