//! Move definitions

use super::creature_type::{Effectiveness, Type};

/// An immutable move definition.
///
/// Moves are shared between combatants through `Arc<Move>`; nothing mutates a
/// move after it is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    name: String,
    move_type: Type,
    power: u32,
}

impl Move {
    /// Create a new move
    pub fn new(name: impl Into<String>, move_type: Type, power: u32) -> Self {
        Self {
            name: name.into(),
            move_type,
            power,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn move_type(&self) -> Type {
        self.move_type
    }

    /// Base power
    pub fn power(&self) -> u32 {
        self.power
    }

    /// Effectiveness category of this move against a defender of `defender` type
    pub fn effectiveness(&self, defender: Type) -> Effectiveness {
        self.move_type.effectiveness(defender)
    }

    /// Damage multiplier of this move against a defender of `defender` type
    pub fn effectiveness_multiplier(&self, defender: Type) -> f64 {
        self.effectiveness(defender).multiplier()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.move_type, self.power)
    }
}
