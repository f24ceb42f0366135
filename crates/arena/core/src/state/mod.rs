//! Authoritative simulation state.
//!
//! The [`Roster`] owns every combatant for the whole run. Entities are never
//! removed: a dead combatant stays in place so that the final report can list
//! every participant in construction order.
pub mod types;

pub use types::{
    Archetype, ArchetypeKind, Capabilities, CapabilityClass, CapabilitySet, Combatant,
    DefendCapability, EnergyBounds, EnergyBoundsError, EnergyPool, EntityId, HealCapability,
    MeleeStats, RangedStats, Round,
};

/// Fixed-order collection of combatants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    members: Vec<Combatant>,
}

impl Roster {
    /// Builds a roster from already-validated combatants.
    ///
    /// Identifiers are reassigned to match roster positions.
    pub fn from_combatants(members: impl IntoIterator<Item = Combatant>) -> Self {
        let members = members
            .into_iter()
            .enumerate()
            .map(|(index, mut combatant)| {
                combatant.id = EntityId(index as u32);
                combatant
            })
            .collect();
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&Combatant> {
        self.members.get(id.index())
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Combatant> {
        self.members.get_mut(id.index())
    }

    /// Borrows two distinct combatants mutably at once.
    ///
    /// Returns `None` if either id is out of range or both ids are equal.
    pub fn pair_mut(
        &mut self,
        first: EntityId,
        second: EntityId,
    ) -> Option<(&mut Combatant, &mut Combatant)> {
        let (a, b) = (first.index(), second.index());
        if a == b || a >= self.members.len() || b >= self.members.len() {
            return None;
        }

        if a < b {
            let (left, right) = self.members.split_at_mut(b);
            Some((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.members.split_at_mut(a);
            Some((&mut right[0], &mut left[b]))
        }
    }

    /// Iterates all combatants in roster order, dead ones included.
    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.members.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.members.iter().map(|combatant| combatant.id)
    }

    /// Iterates living combatants in roster order.
    pub fn alive(&self) -> impl Iterator<Item = &Combatant> {
        self.members.iter().filter(|combatant| combatant.is_alive())
    }

    /// Ids of living combatants in roster order, optionally excluding one.
    pub fn alive_ids_except(&self, excluded: Option<EntityId>) -> Vec<EntityId> {
        self.alive()
            .map(|combatant| combatant.id)
            .filter(|id| Some(*id) != excluded)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Combatant;
    type IntoIter = std::slice::Iter<'a, Combatant>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
