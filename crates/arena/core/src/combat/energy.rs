//! Energy accounting for energy-bearing combatants.
//!
//! Both operations are atomic with respect to the pool: a consume either
//! subtracts the full amount or nothing, and a restore clamps to the maximum.

use crate::state::Combatant;

/// Consumes `amount` energy from `entity`.
///
/// Returns `false` without touching state when the combatant has no energy
/// pool or not enough energy.
pub fn consume_energy(entity: &mut Combatant, amount: u32) -> bool {
    entity
        .energy_mut()
        .is_some_and(|pool| pool.try_consume(amount))
}

/// Restores up to `amount` energy, clamped to the pool maximum.
///
/// Returns the amount actually restored (zero for combatants without a pool).
pub fn restore_energy(entity: &mut Combatant, amount: u32) -> u32 {
    entity
        .energy_mut()
        .map(|pool| pool.restore(amount))
        .unwrap_or(0)
}
