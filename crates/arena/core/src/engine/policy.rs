//! Weighted action selection.
//!
//! One weight row per [`CapabilityClass`]. Candidates are walked in the fixed
//! order defend, heal, attack; weights for a capability the actor lacks are
//! ignored so a misconfigured row can never pick an impossible action.

use arrayvec::ArrayVec;

use crate::combat::ActionKind;
use crate::state::{Capabilities, CapabilityClass};

/// Relative weights for one capability class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActionWeights {
    pub defend: u32,
    pub heal: u32,
    pub attack: u32,
}

impl ActionWeights {
    pub const fn new(defend: u32, heal: u32, attack: u32) -> Self {
        Self {
            defend,
            heal,
            attack,
        }
    }

    pub fn weight(&self, action: ActionKind) -> u32 {
        match action {
            ActionKind::Attack => self.attack,
            ActionKind::Defend => self.defend,
            ActionKind::Heal => self.heal,
        }
    }
}

/// Action candidates for one actor, in walk order.
pub type Candidates = ArrayVec<(ActionKind, u32), 3>;

/// Declarative action table keyed by capability class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActionPolicy {
    pub none: ActionWeights,
    pub defend_only: ActionWeights,
    pub heal_only: ActionWeights,
    pub defend_and_heal: ActionWeights,
}

impl Default for ActionPolicy {
    fn default() -> Self {
        Self {
            none: ActionWeights::new(0, 0, 100),
            defend_only: ActionWeights::new(30, 0, 70),
            heal_only: ActionWeights::new(0, 40, 60),
            defend_and_heal: ActionWeights::new(30, 30, 40),
        }
    }
}

impl ActionPolicy {
    pub fn row(&self, class: CapabilityClass) -> &ActionWeights {
        match class {
            CapabilityClass::None => &self.none,
            CapabilityClass::DefendOnly => &self.defend_only,
            CapabilityClass::HealOnly => &self.heal_only,
            CapabilityClass::DefendAndHeal => &self.defend_and_heal,
        }
    }

    /// Actions available to a combatant with `capabilities`, with their
    /// weights. Zero-weight entries are dropped.
    pub fn candidates(&self, capabilities: &Capabilities) -> Candidates {
        let row = self.row(capabilities.set().class());
        let mut candidates = Candidates::new();

        if capabilities.can_defend() && row.defend > 0 {
            candidates.push((ActionKind::Defend, row.defend));
        }
        if capabilities.can_heal() && row.heal > 0 {
            candidates.push((ActionKind::Heal, row.heal));
        }
        if row.attack > 0 {
            candidates.push((ActionKind::Attack, row.attack));
        }

        candidates
    }

    /// Picks one action.
    ///
    /// `draw` receives the total weight and must return a value below it.
    /// A row whose usable weights are all zero falls back to attacking.
    pub fn choose(&self, capabilities: &Capabilities, draw: impl FnOnce(u32) -> u32) -> ActionKind {
        let candidates = self.candidates(capabilities);
        let total = candidates
            .iter()
            .fold(0u32, |sum, (_, weight)| sum.saturating_add(*weight));
        if total == 0 {
            return ActionKind::Attack;
        }

        let roll = draw(total);
        let mut cumulative = 0u32;
        for (action, weight) in &candidates {
            cumulative = cumulative.saturating_add(*weight);
            if roll < cumulative {
                return *action;
            }
        }

        ActionKind::Attack
    }
}
