//! Archetype payloads attached to a combatant.
//!
//! Every combatant is exactly one of melee or ranged. The archetype decides
//! how incoming damage is mitigated and whether actions are gated by energy.

/// Archetype tag without payload.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArchetypeKind {
    /// Close-quarters fighter protected by armor.
    Melee,
    /// Distance fighter whose actions draw from an energy pool.
    Ranged,
}

/// Archetype payload, mutually exclusive per combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Archetype {
    Melee(MeleeStats),
    Ranged(RangedStats),
}

impl Archetype {
    pub fn kind(&self) -> ArchetypeKind {
        match self {
            Archetype::Melee(_) => ArchetypeKind::Melee,
            Archetype::Ranged(_) => ArchetypeKind::Ranged,
        }
    }

    /// Armor value, zero for archetypes without armor.
    pub fn armor(&self) -> i32 {
        match self {
            Archetype::Melee(melee) => melee.armor,
            Archetype::Ranged(_) => 0,
        }
    }

    pub fn energy(&self) -> Option<&EnergyPool> {
        match self {
            Archetype::Melee(_) => None,
            Archetype::Ranged(ranged) => Some(&ranged.energy),
        }
    }

    pub fn energy_mut(&mut self) -> Option<&mut EnergyPool> {
        match self {
            Archetype::Melee(_) => None,
            Archetype::Ranged(ranged) => Some(&mut ranged.energy),
        }
    }
}

/// Melee payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeleeStats {
    /// Flat reduction applied to every incoming hit.
    pub armor: i32,
    pub weapon_type: String,
}

/// Ranged payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangedStats {
    pub range: u32,
    pub energy: EnergyPool,
}

/// Bounded energy resource.
///
/// `current` never exceeds `max`. The fields are private so that every
/// mutation goes through [`EnergyPool::try_consume`] or [`EnergyPool::restore`].
/// Deserialization rejects a pool whose `current` exceeds `max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "EnergyBounds"))]
pub struct EnergyPool {
    current: u32,
    max: u32,
}

impl EnergyPool {
    /// Creates a full pool.
    pub const fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Creates a pool with an explicit starting value, clamped to `max`.
    pub fn new(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Subtracts `amount` if the pool holds at least that much.
    ///
    /// Returns `false` and leaves the pool untouched otherwise.
    pub fn try_consume(&mut self, amount: u32) -> bool {
        match self.current.checked_sub(amount) {
            Some(remaining) => {
                self.current = remaining;
                true
            }
            None => false,
        }
    }

    /// Adds up to `amount`, clamped to `max`. Returns the amount actually added.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_add(amount).min(self.max);
        self.current.saturating_sub(before)
    }

    /// Returns true if the bound holds.
    pub const fn is_within_bounds(&self) -> bool {
        self.current <= self.max
    }
}

/// Unchecked wire form of an [`EnergyPool`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyBounds {
    pub current: u32,
    pub max: u32,
}

/// Energy value above the pool maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("energy {current} exceeds max energy {max}")]
pub struct EnergyBoundsError {
    pub current: u32,
    pub max: u32,
}

impl TryFrom<EnergyBounds> for EnergyPool {
    type Error = EnergyBoundsError;

    fn try_from(bounds: EnergyBounds) -> Result<Self, Self::Error> {
        let EnergyBounds { current, max } = bounds;
        if current > max {
            return Err(EnergyBoundsError { current, max });
        }
        Ok(Self { current, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_is_all_or_nothing() {
        let mut pool = EnergyPool::new(5, 100);

        assert!(!pool.try_consume(15));
        assert_eq!(pool.current(), 5);

        assert!(pool.try_consume(5));
        assert_eq!(pool.current(), 0);
    }

    #[test]
    fn restore_clamps_to_max() {
        let mut pool = EnergyPool::new(95, 100);

        assert_eq!(pool.restore(10), 5);
        assert_eq!(pool.current(), 100);
        assert_eq!(pool.restore(10), 0);
    }

    #[test]
    fn restore_on_overfull_pool_adds_nothing() {
        let mut pool = EnergyPool {
            current: 500,
            max: 100,
        };

        assert_eq!(pool.restore(10), 0);
        assert_eq!(pool.current(), 100);
        assert!(pool.is_within_bounds());
    }

    #[test]
    fn bounds_above_max_are_rejected() {
        assert_eq!(
            EnergyPool::try_from(EnergyBounds {
                current: 500,
                max: 100,
            }),
            Err(EnergyBoundsError {
                current: 500,
                max: 100,
            })
        );
        assert_eq!(
            EnergyPool::try_from(EnergyBounds {
                current: 40,
                max: 100,
            }),
            Ok(EnergyPool::new(40, 100))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_overfull_pool() {
        let bytes = bincode::serialize(&EnergyBounds {
            current: 500,
            max: 100,
        })
        .unwrap();

        assert!(bincode::deserialize::<EnergyPool>(&bytes).is_err());

        let pool = EnergyPool::new(30, 100);
        let bytes = bincode::serialize(&pool).unwrap();
        assert_eq!(bincode::deserialize::<EnergyPool>(&bytes).unwrap(), pool);
    }

    #[test]
    fn new_clamps_initial_value() {
        let pool = EnergyPool::new(150, 80);
        assert_eq!(pool.current(), 80);
        assert!(pool.is_within_bounds());
    }

    #[test]
    fn archetype_kind_parses_case_insensitively() {
        assert_eq!(
            "Melee".parse::<ArchetypeKind>().unwrap(),
            ArchetypeKind::Melee
        );
        assert_eq!(ArchetypeKind::Ranged.to_string(), "ranged");
    }
}
