//! Raw JSON records as they appear in the data files

use serde::{Deserialize, Serialize};
use spire_battle::{FloorRange, Type};

/// One entry of the move list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: Type,
    pub power: u32,
}

/// One entry of the creature list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub creature_type: Type,
    /// Move names, resolved against the move catalog
    pub moves: Vec<String>,
    #[serde(rename = "maxHP")]
    pub max_hp: u32,
    pub attack: u32,
    #[serde(default)]
    pub exp: u64,
    pub level: u32,
    #[serde(default)]
    pub is_starter: bool,
    pub floor_range: FloorRange,
    #[serde(default)]
    pub sprite: String,
}
