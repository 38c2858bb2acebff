//! Game session layer for Spire.
//!
//! A [`GameSession`] owns the player's party, the current floor and the rng
//! used to draw opponents. Each call to [`GameSession::next_battle`] generates
//! a floor-scaled opponent team, resolves the battle with `spire-battle`,
//! awards experience on a win and moves the floor counter.

mod config;
mod error;
pub mod opponents;
mod session;

pub use config::SessionConfig;
pub use error::SessionError;
pub use session::{FloorResult, GameSession, RunSummary};
