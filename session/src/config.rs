//! Session configuration

use std::path::Path;

use serde::{Deserialize, Serialize};
use spire_battle::BattleConfig;
use spire_battle::progression::VICTORY_BASE_EXPERIENCE;

use crate::SessionError;

/// Tuning for a game session. Every field has a default, so a config file
/// only needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Floor a new run starts on, and the floor a defeat sends the player back to
    pub starting_floor: u32,
    /// Base experience for victory rewards
    pub victory_base_experience: u64,
    pub max_party_size: usize,
    /// Restore the party to full health after every battle
    pub heal_between_floors: bool,
    /// Stop `play` after clearing this floor
    pub max_floor: Option<u32>,
    /// Seed for opponent generation; random when unset
    pub seed: Option<u64>,
    pub battle: BattleConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_floor: 1,
            victory_base_experience: VICTORY_BASE_EXPERIENCE,
            max_party_size: 6,
            heal_between_floors: true,
            max_floor: None,
            seed: None,
            battle: BattleConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, SessionError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SessionError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
