//! Post-turn invariant checks.

use crate::state::{EntityId, Roster, Round};

use super::SimulationError;

/// Re-checks the invariants of every combatant a turn touched.
pub fn check_touched(
    roster: &Roster,
    round: Round,
    touched: impl IntoIterator<Item = EntityId>,
) -> Result<(), SimulationError> {
    for entity in touched {
        let combatant = roster
            .get(entity)
            .ok_or(SimulationError::UnknownEntity { round, entity })?;

        if let Some(pool) = combatant.energy().filter(|pool| !pool.is_within_bounds()) {
            return Err(SimulationError::EnergyOutOfBounds {
                round,
                entity,
                current: pool.current(),
                max: pool.max(),
            });
        }

        // The hook fires exactly at the >0 -> <=0 crossing and nothing revives.
        if combatant.is_alive() == combatant.death_fired() {
            return Err(SimulationError::DeathHookMismatch {
                round,
                entity,
                health: combatant.health(),
                fired: combatant.death_fired(),
            });
        }
    }

    Ok(())
}
