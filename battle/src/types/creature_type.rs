//! Creature type system and effectiveness chart

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Creature and move types (18 fixed values)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// All 18 types, in chart order
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Effectiveness category of this type attacking `defender`
    pub fn effectiveness(&self, defender: Type) -> Effectiveness {
        TYPE_CHART[*self as usize][defender as usize]
    }

    /// Numeric damage multiplier of this type attacking `defender`
    pub fn multiplier(&self, defender: Type) -> f64 {
        self.effectiveness(defender).multiplier()
    }

    /// Parse a type name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Convert to canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Qualitative effectiveness of an attacking type against a defending type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Effectiveness {
    SuperEffective,
    Normal,
    NotVeryEffective,
    Immune,
}

impl Effectiveness {
    pub const ALL: [Effectiveness; 4] = [
        Effectiveness::SuperEffective,
        Effectiveness::Normal,
        Effectiveness::NotVeryEffective,
        Effectiveness::Immune,
    ];

    /// Damage multiplier for this category
    pub fn multiplier(self) -> f64 {
        match self {
            Effectiveness::SuperEffective => 2.0,
            Effectiveness::Normal => 1.0,
            Effectiveness::NotVeryEffective => 0.5,
            Effectiveness::Immune => 0.0,
        }
    }
}

const SE: Effectiveness = Effectiveness::SuperEffective;
const NE: Effectiveness = Effectiveness::Normal;
const NV: Effectiveness = Effectiveness::NotVeryEffective;
const IM: Effectiveness = Effectiveness::Immune;

/// 18x18 type effectiveness chart
/// Row = attacking type, Column = defending type
///
/// Order: Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground,
///        Flying, Psychic, Bug, Rock, Ghost, Dragon, Dark, Steel, Fairy
///
/// The array length forces every cell to be filled when a type is added.
#[rustfmt::skip]
pub static TYPE_CHART: [[Effectiveness; 18]; 18] = [
    // Normal attacking
    [NE, NE, NE, NE, NE, NE, NE, NE, NE, NE, NE, NE, NE, IM, NE, NE, NE, NE],
    // Fire attacking
    [NE, NV, NV, NE, SE, SE, NE, NE, NE, NE, NE, SE, NV, NE, NV, NE, SE, NE],
    // Water attacking
    [NE, SE, NV, NE, NV, NE, NE, NE, SE, NE, NE, NE, SE, NE, NV, NE, NE, NE],
    // Electric attacking
    [NE, NE, SE, NV, NV, NE, NE, NE, IM, SE, NE, NE, NE, NE, NV, NE, NE, NE],
    // Grass attacking
    [NE, NV, SE, NE, NV, NE, NE, NV, SE, NV, NE, NV, SE, NE, NV, NE, NV, NE],
    // Ice attacking
    [NE, NV, NV, NE, SE, NV, NE, NE, SE, SE, NE, NE, NE, NE, SE, NE, NV, NE],
    // Fighting attacking
    [SE, NE, NE, NE, NE, SE, NE, NV, NE, NV, NV, NV, SE, IM, NE, SE, SE, NV],
    // Poison attacking
    [NE, NE, NE, NE, SE, NE, NE, NV, NV, NE, NE, NE, NV, NV, NE, NE, IM, SE],
    // Ground attacking
    [NE, SE, NE, SE, NV, NE, NE, SE, NE, IM, NE, NV, SE, NE, NE, NE, SE, NE],
    // Flying attacking
    [NE, NE, NE, NV, SE, NE, SE, NE, IM, NE, NE, SE, NV, NE, NE, NE, NV, NE],
    // Psychic attacking
    [NE, NE, NE, NE, NE, NE, SE, SE, NE, NE, NV, NE, NE, NV, NE, IM, NV, NE],
    // Bug attacking
    [NE, NV, NE, NE, SE, NE, NV, NV, NE, NV, SE, NE, NE, NV, NE, SE, NV, NV],
    // Rock attacking
    [NE, SE, NE, NE, NE, SE, NV, NE, NV, SE, NE, SE, NE, NE, NE, NE, NV, NE],
    // Ghost attacking
    [IM, NE, NE, NE, NE, NE, NE, NE, NE, NE, SE, NE, NE, SE, NE, NV, NE, NE],
    // Dragon attacking
    [NE, NE, NE, NE, NE, NE, NE, NE, NE, NE, NE, NE, NE, NE, SE, NE, NE, NV],
    // Dark attacking
    [NE, NE, NE, NE, NE, NE, NV, NE, NE, NE, SE, NE, NE, SE, NE, NV, NE, NV],
    // Steel attacking
    [NE, NV, NE, NV, NE, SE, NE, NE, NE, NE, NE, NE, SE, NE, NE, NE, NV, SE],
    // Fairy attacking
    [NE, NE, NE, NE, NE, NE, SE, NV, NE, NE, NE, NE, NE, NE, SE, SE, NV, NE],
];
