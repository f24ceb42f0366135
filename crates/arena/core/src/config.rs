use crate::engine::ActionPolicy;

/// Simulation configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    /// Number of full roster passes to run.
    pub rounds: u32,
    /// Whether a healer may pick themselves as the heal beneficiary.
    pub allow_self_heal: bool,
    /// What happens to health once it reaches zero.
    pub health_floor: HealthFloor,
    pub costs: EnergyCosts,
    pub policy: ActionPolicy,
}

impl ArenaConfig {
    // ===== compile-time constants =====
    /// Upper bound on roster size.
    pub const MAX_PARTICIPANTS: usize = 64;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ROUNDS: u32 = 6;

    pub fn new() -> Self {
        Self {
            rounds: Self::DEFAULT_ROUNDS,
            allow_self_heal: true,
            health_floor: HealthFloor::default(),
            costs: EnergyCosts::default(),
            policy: ActionPolicy::default(),
        }
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_policy(mut self, policy: ActionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_self_heal(mut self, allow: bool) -> Self {
        self.allow_self_heal = allow;
        self
    }

    pub fn with_health_floor(mut self, floor: HealthFloor) -> Self {
        self.health_floor = floor;
        self
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed energy costs per action kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnergyCosts {
    /// Paid by energy-bearing combatants for a direct attack.
    pub ranged_attack: u32,
    /// Paid by energy-bearing combatants for a heal.
    pub ranged_heal: u32,
    /// Restored to energy-bearing combatants after each of their turns.
    pub regeneration: u32,
}

impl Default for EnergyCosts {
    fn default() -> Self {
        Self {
            ranged_attack: 15,
            ranged_heal: 10,
            regeneration: 10,
        }
    }
}

/// Lower bound behaviour for health.
///
/// `Unbounded` keeps accumulating damage below zero after death;
/// `Zero` clamps health at zero. Either way the death hook fires once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HealthFloor {
    #[default]
    Unbounded,
    Zero,
}
