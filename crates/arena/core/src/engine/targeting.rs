//! Target pools.
//!
//! Pools only ever contain living combatants, in roster order, so a dead
//! entity can never be attacked or healed.

use crate::state::{EntityId, Roster};

/// Every living combatant except the attacker.
pub fn attack_targets(roster: &Roster, attacker: EntityId) -> Vec<EntityId> {
    roster.alive_ids_except(Some(attacker))
}

/// Every living combatant, the healer included when `allow_self` is set.
pub fn heal_targets(roster: &Roster, healer: EntityId, allow_self: bool) -> Vec<EntityId> {
    let excluded = if allow_self { None } else { Some(healer) };
    roster.alive_ids_except(excluded)
}

/// Uniform pick. `draw` receives the pool size and must return an index below it.
pub fn pick(pool: &[EntityId], draw: impl FnOnce(u32) -> u32) -> Option<EntityId> {
    if pool.is_empty() {
        return None;
    }
    let index = draw(pool.len() as u32) as usize;
    pool.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HealthFloor;
    use crate::roles::RoleKind;
    use crate::state::{Archetype, Capabilities, Combatant, MeleeStats};

    fn roster(healths: &[i32]) -> Roster {
        Roster::from_combatants(healths.iter().map(|&health| {
            Combatant::new(
                EntityId(0),
                "fighter",
                RoleKind::SwordsMan,
                health,
                10,
                Archetype::Melee(MeleeStats {
                    armor: 0,
                    weapon_type: "sword".into(),
                }),
                Capabilities::NONE,
            )
        }))
    }

    #[test]
    fn attacker_is_never_its_own_target() {
        let roster = roster(&[10, 10, 10]);

        assert_eq!(
            attack_targets(&roster, EntityId(1)),
            vec![EntityId(0), EntityId(2)]
        );
    }

    #[test]
    fn dead_members_are_excluded() {
        let mut roster = roster(&[10, 10, 10]);
        roster
            .get_mut(EntityId(2))
            .unwrap()
            .take_damage(99, HealthFloor::Unbounded);

        assert_eq!(attack_targets(&roster, EntityId(0)), vec![EntityId(1)]);
        assert_eq!(
            heal_targets(&roster, EntityId(0), true),
            vec![EntityId(0), EntityId(1)]
        );
    }

    #[test]
    fn self_heal_can_be_disabled() {
        let roster = roster(&[10, 10]);

        assert_eq!(heal_targets(&roster, EntityId(0), false), vec![EntityId(1)]);
    }

    #[test]
    fn empty_pool_has_no_pick() {
        assert_eq!(pick(&[], |_| 0), None);
        assert_eq!(
            pick(&[EntityId(4), EntityId(7)], |len| len - 1),
            Some(EntityId(7))
        );
    }
}
