//! Presentation descriptors for role signature skills.

/// Effect tags attached to a skill descriptor.
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
pub enum EffectTag {
    Damage,
    MultiHit,
    Stun,
    AreaOfEffect,
    Protection,
    Healing,
    EnergyRestore,
    LongRange,
    Precision,
}

/// A stat worth showing next to a skill (armor, defense capacity, range).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillHighlight {
    Armor(i32),
    DefenseCapacity(i32),
    HealPower(i32),
    Range(u32),
}

/// Static part of a skill descriptor, stored in the role table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub effect: &'static str,
    pub tags: &'static [EffectTag],
}

/// Fully resolved skill descriptor for one combatant.
///
/// Carries no behaviour; presentation layers render it as they see fit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDescriptor {
    pub owner: String,
    pub name: String,
    pub description: String,
    pub effect: String,
    pub tags: Vec<EffectTag>,
    pub highlights: Vec<SkillHighlight>,
}

impl SkillDescriptor {
    pub fn from_template(
        owner: &str,
        template: &SkillTemplate,
        highlights: Vec<SkillHighlight>,
    ) -> Self {
        Self {
            owner: owner.to_owned(),
            name: template.name.to_owned(),
            description: template.description.to_owned(),
            effect: template.effect.to_owned(),
            tags: template.tags.to_vec(),
            highlights,
        }
    }
}
