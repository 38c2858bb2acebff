//! Turn-based battle resolution

mod battle;
mod selector;

pub use battle::{Battle, BattleConfig, BattleOutcome, Side, TurnReport};
pub use selector::{Action, potential_damage, select_best_action};
