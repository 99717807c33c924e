use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub static STANDARD_ROSTER: Lazy<Roster> = Lazy::new(Roster::standard);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AttributeGroup {
    Physical,
    Social,
    Mental,
}

impl AttributeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeGroup::Physical => "physical",
            AttributeGroup::Social => "social",
            AttributeGroup::Mental => "mental",
        }
    }

    /// 不在物理、社交表中的属性名一律归入精神组。
    pub fn of(attribute: &str) -> Self {
        attribute
            .parse::<Attribute>()
            .map(|attribute| attribute.group())
            .unwrap_or(AttributeGroup::Mental)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Strength,
    Dexterity,
    Stamina,
    Charisma,
    Manipulation,
    Presence,
    Perception,
    Intelligence,
    Wits,
}

impl Attribute {
    pub const ALL: [Attribute; 9] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Stamina,
        Attribute::Charisma,
        Attribute::Manipulation,
        Attribute::Presence,
        Attribute::Perception,
        Attribute::Intelligence,
        Attribute::Wits,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Strength => "strength",
            Attribute::Dexterity => "dexterity",
            Attribute::Stamina => "stamina",
            Attribute::Charisma => "charisma",
            Attribute::Manipulation => "manipulation",
            Attribute::Presence => "presence",
            Attribute::Perception => "perception",
            Attribute::Intelligence => "intelligence",
            Attribute::Wits => "wits",
        }
    }

    pub fn group(&self) -> AttributeGroup {
        match self {
            Attribute::Strength | Attribute::Dexterity | Attribute::Stamina => {
                AttributeGroup::Physical
            }
            Attribute::Charisma | Attribute::Manipulation | Attribute::Presence => {
                AttributeGroup::Social
            }
            Attribute::Perception | Attribute::Intelligence | Attribute::Wits => {
                AttributeGroup::Mental
            }
        }
    }
}

impl FromStr for Attribute {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .iter()
            .copied()
            .find(|attribute| attribute.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    Athletics,
    Brawl,
    Crafts,
    Drive,
    Etiquette,
    Firearms,
    Larceny,
    Melee,
    Performance,
    Stealth,
    Survival,
    Technology,
}

impl Skill {
    pub const ALL: [Skill; 12] = [
        Skill::Athletics,
        Skill::Brawl,
        Skill::Crafts,
        Skill::Drive,
        Skill::Etiquette,
        Skill::Firearms,
        Skill::Larceny,
        Skill::Melee,
        Skill::Performance,
        Skill::Stealth,
        Skill::Survival,
        Skill::Technology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Skill::Athletics => "athletics",
            Skill::Brawl => "brawl",
            Skill::Crafts => "crafts",
            Skill::Drive => "drive",
            Skill::Etiquette => "etiquette",
            Skill::Firearms => "firearms",
            Skill::Larceny => "larceny",
            Skill::Melee => "melee",
            Skill::Performance => "performance",
            Skill::Stealth => "stealth",
            Skill::Survival => "survival",
            Skill::Technology => "technology",
        }
    }
}

impl FromStr for Skill {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Skill::ALL
            .iter()
            .copied()
            .find(|skill| skill.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

/// 供界面填充下拉框的名称列表。
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Roster {
    pub skills: Vec<&'static str>,
    pub attributes: Vec<&'static str>,
}

impl Roster {
    pub fn standard() -> Self {
        Self {
            skills: Skill::ALL.iter().map(Skill::as_str).collect(),
            attributes: Attribute::ALL.iter().map(Attribute::as_str).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_sizes() {
        let roster = &*STANDARD_ROSTER;
        assert_eq!(roster.skills.len(), 12);
        assert_eq!(roster.attributes.len(), 9);
        assert_eq!(roster.skills[0], "athletics");
        assert_eq!(roster.attributes[8], "wits");
    }

    #[test]
    fn three_attributes_per_group() {
        for group in [
            AttributeGroup::Physical,
            AttributeGroup::Social,
            AttributeGroup::Mental,
        ] {
            let count = Attribute::ALL
                .iter()
                .filter(|attribute| attribute.group() == group)
                .count();
            assert_eq!(count, 3, "{group:?}");
        }
    }

    #[test]
    fn group_lookup_by_name() {
        assert_eq!(AttributeGroup::of("dexterity"), AttributeGroup::Physical);
        assert_eq!(AttributeGroup::of("Presence"), AttributeGroup::Social);
        assert_eq!(AttributeGroup::of("wits"), AttributeGroup::Mental);
        assert_eq!(AttributeGroup::of("resolve"), AttributeGroup::Mental);
    }

    #[test]
    fn skills_parse_case_insensitively() {
        assert_eq!("Firearms".parse::<Skill>(), Ok(Skill::Firearms));
        assert!("occult".parse::<Skill>().is_err());
    }
}
