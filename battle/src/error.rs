use thiserror::Error;

use crate::engine::Side;

/// Errors raised while building a combatant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombatantError {
    #[error("Combatant {0} has an empty moveset")]
    EmptyMoveset(String),

    #[error("Combatant {0} must have a positive max HP")]
    ZeroMaxHp(String),

    #[error("Combatant {0} must have a positive level")]
    ZeroLevel(String),

    #[error("Invalid floor range {min}..={max}")]
    InvalidFloorRange { min: u32, max: u32 },
}

/// Errors raised by the battle engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("The {0} team is empty")]
    EmptyTeam(Side),

    #[error("Combatant {name} has no moves")]
    EmptyMoveset { name: String },

    #[error("The battle is already over")]
    BattleOver,

    #[error("Battle did not finish within {turns} turns")]
    TurnLimitExceeded { turns: u32 },
}
