//! Domain types shared by the battle and progression engines

mod combatant;
mod creature_type;
mod moves;

pub use combatant::{
    Combatant, CombatantBuilder, CombatantSummary, FloorRange, LEVEL_UP_ATTACK_GAIN,
    LEVEL_UP_HP_GAIN,
};
pub use creature_type::{Effectiveness, TYPE_CHART, Type};
pub use moves::Move;
