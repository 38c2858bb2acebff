//! Battle resolution and progression rules for Spire.
//!
//! This crate holds everything that decides the outcome of a fight: the type
//! chart, moves, combatants, the turn-based battle engine and the rules for
//! experience, level growth and floor scaling.
//!
//! # Overview
//!
//! ```text
//! spire-catalog (static move/creature data)
//!        │
//!        ▼
//! spire-battle (types + engine + progression) ← THIS CRATE
//!        │
//!        ▼
//! spire-session (party, floor counter, game loop)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] / [`Effectiveness`] - Types with a total effectiveness chart
//! - [`Move`] - Immutable move definition, shared via `Arc`
//! - [`Combatant`] - Creature instance with health, level and experience
//! - [`Battle`] - One encounter between two teams, resolved turn by turn
//! - [`progression`] - Experience rewards, level-ups and floor scaling
//!
//! # Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use spire_battle::{Battle, Combatant, Move, Side, Type};
//!
//! let tackle = Arc::new(Move::new("Tackle", Type::Normal, 40));
//! let make = |name: &str| {
//!     Combatant::builder(name, Type::Normal)
//!         .moves([tackle.clone()])
//!         .max_hp(100)
//!         .attack(50)
//!         .build()
//!         .unwrap()
//! };
//!
//! let mut player = vec![make("Eevee")];
//! let mut opponent = vec![make("Rattata")];
//!
//! let outcome = Battle::new(&mut player, &mut opponent)
//!     .unwrap()
//!     .run_to_completion()
//!     .unwrap();
//! assert_eq!(outcome.winner, Side::Player);
//! ```

pub mod engine;
mod error;
pub mod progression;
pub mod types;

// Re-export main types at crate root for convenience
pub use engine::{Battle, BattleConfig, BattleOutcome, Side, TurnReport};
pub use error::{BattleError, CombatantError};
pub use types::{
    Combatant, CombatantBuilder, CombatantSummary, Effectiveness, FloorRange, Move, TYPE_CHART,
    Type,
};
