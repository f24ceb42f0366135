//! Concrete role behaviour table.
//!
//! Roles do not form a type hierarchy. Each [`RoleKind`] maps to one static
//! [`RoleProfile`] that carries the per-role knobs: attack modifier, the
//! archetype the role belongs to, its weapon label and the narration used by
//! the pre/post-turn hooks and the death hook.

pub mod skill;

pub use skill::{EffectTag, SkillDescriptor, SkillHighlight, SkillTemplate};

use crate::state::ArchetypeKind;

/// Concrete role of a combatant.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RoleKind {
    SwordsMan,
    ShieldSwordsMan,
    Paladin,
    Magician,
    Archer,
}

/// Static behaviour of a role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleProfile {
    pub archetype: ArchetypeKind,
    /// Added to attack power when computing outgoing damage.
    pub attack_modifier: i32,
    /// Weapon for melee roles, attack type for ranged roles.
    pub weapon_label: &'static str,
    pub prepare_note: &'static str,
    pub recover_note: &'static str,
    pub death_note: &'static str,
    pub skill: SkillTemplate,
}

const SWORDS_MAN: RoleProfile = RoleProfile {
    archetype: ArchetypeKind::Melee,
    attack_modifier: 0,
    weapon_label: "two-handed sword",
    prepare_note: "wipes the blade until it gleams",
    recover_note: "slides the sword back into its scabbard",
    death_note: "falls; the sword clatters to the ground and the armor splinters",
    skill: SkillTemplate {
        name: "Cleaving Flurry",
        description: "three rapid cuts in a single breath",
        effect: "deals 150% damage",
        tags: &[EffectTag::Damage, EffectTag::MultiHit],
    },
};

const SHIELD_SWORDS_MAN: RoleProfile = RoleProfile {
    archetype: ArchetypeKind::Melee,
    attack_modifier: -5,
    weapon_label: "one-handed sword and shield",
    prepare_note: "tests the shield straps and settles into a guard stance",
    recover_note: "inspects fresh dents in the shield and patches them",
    death_note: "collapses; the heavy shield slams down and raises a cloud of dust",
    skill: SkillTemplate {
        name: "Shield Bash",
        description: "rams the enemy with the shield",
        effect: "deals damage and stuns",
        tags: &[EffectTag::Damage, EffectTag::Stun, EffectTag::Protection],
    },
};

const PALADIN: RoleProfile = RoleProfile {
    archetype: ArchetypeKind::Melee,
    attack_modifier: 0,
    weapon_label: "blessed longsword and tower shield",
    prepare_note: "murmurs a vow and the blade glows faintly",
    recover_note: "kneels briefly in prayer",
    death_note: "sinks to one knee as the holy light around them fades",
    skill: SkillTemplate {
        name: "Holy Aegis",
        description: "raises a radiant barrier over nearby allies",
        effect: "shields allies and mends wounds",
        tags: &[EffectTag::Protection, EffectTag::Healing],
    },
};

const MAGICIAN: RoleProfile = RoleProfile {
    archetype: ArchetypeKind::Ranged,
    attack_modifier: 0,
    weapon_label: "arcane bolt",
    prepare_note: "opens the spellbook and begins an ancient chant",
    recover_note: "closes their eyes and meditates to recover mana",
    death_note: "dissolves into drifting motes of magic; the spellbook glows on the ground",
    skill: SkillTemplate {
        name: "Elemental Burst",
        description: "calls down a storm of raw elements",
        effect: "area magic damage that restores the caster's mana",
        tags: &[
            EffectTag::Damage,
            EffectTag::AreaOfEffect,
            EffectTag::EnergyRestore,
        ],
    },
};

const ARCHER: RoleProfile = RoleProfile {
    archetype: ArchetypeKind::Ranged,
    attack_modifier: 0,
    weapon_label: "arrow volley",
    prepare_note: "checks the bowstring and counts the arrows in the quiver",
    recover_note: "retrieves spent arrows and restrings the bow",
    death_note: "slumps against the bow; the last arrow slips from their fingers",
    skill: SkillTemplate {
        name: "Piercing Shot",
        description: "a single arrow loosed from extreme distance",
        effect: "precise long-range damage",
        tags: &[EffectTag::Damage, EffectTag::LongRange, EffectTag::Precision],
    },
};

impl RoleKind {
    /// Returns the behaviour table entry for this role.
    pub const fn profile(self) -> &'static RoleProfile {
        match self {
            RoleKind::SwordsMan => &SWORDS_MAN,
            RoleKind::ShieldSwordsMan => &SHIELD_SWORDS_MAN,
            RoleKind::Paladin => &PALADIN,
            RoleKind::Magician => &MAGICIAN,
            RoleKind::Archer => &ARCHER,
        }
    }

    pub const fn archetype(self) -> ArchetypeKind {
        self.profile().archetype
    }
}
