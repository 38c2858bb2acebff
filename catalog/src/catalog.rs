//! Move and creature catalogs

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use spire_battle::{Combatant, FloorRange, Move};

use crate::CatalogError;
use crate::records::{CreatureRecord, MoveRecord};

/// File names looked up by [`Catalog::from_dir`]
pub const MOVES_FILE: &str = "moves.json";
pub const CREATURES_FILE: &str = "creatures.json";

const BUNDLED_MOVES: &str = include_str!("../data/moves.json");
const BUNDLED_CREATURES: &str = include_str!("../data/creatures.json");

/// All known moves, keyed by name
#[derive(Debug, Clone, Default)]
pub struct MoveCatalog {
    moves: HashMap<String, Arc<Move>>,
}

impl MoveCatalog {
    /// Build from records, rejecting duplicate names
    pub fn from_records(records: Vec<MoveRecord>) -> Result<Self, CatalogError> {
        let mut moves = HashMap::with_capacity(records.len());
        for record in records {
            if moves.contains_key(&record.name) {
                return Err(CatalogError::DuplicateMove(record.name));
            }
            let mv = Arc::new(Move::new(record.name.clone(), record.move_type, record.power));
            moves.insert(record.name, mv);
        }
        Ok(Self { moves })
    }

    /// Parse a JSON list of move records
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<MoveRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Get a shared handle to a move
    pub fn get(&self, name: &str) -> Option<Arc<Move>> {
        self.moves.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Move>> {
        self.moves.values()
    }
}

/// Creature templates in data-file order
#[derive(Debug, Clone, Default)]
pub struct CreatureCatalog {
    creatures: Vec<Combatant>,
}

impl CreatureCatalog {
    /// Build from records, resolving move names against `moves`
    pub fn from_records(records: Vec<CreatureRecord>, moves: &MoveCatalog) -> Result<Self, CatalogError> {
        let mut creatures: Vec<Combatant> = Vec::with_capacity(records.len());

        for record in records {
            if creatures.iter().any(|c| c.name() == record.name) {
                return Err(CatalogError::DuplicateCreature(record.name));
            }
            creatures.push(build_creature(record, moves)?);
        }

        Ok(Self { creatures })
    }

    /// Parse a JSON list of creature records
    pub fn from_json(json: &str, moves: &MoveCatalog) -> Result<Self, CatalogError> {
        let records: Vec<CreatureRecord> = serde_json::from_str(json)?;
        Self::from_records(records, moves)
    }

    /// Get a creature template by name
    pub fn get(&self, name: &str) -> Option<&Combatant> {
        self.creatures.iter().find(|c| c.name() == name)
    }

    /// Create a fresh, full-health instance of a creature
    pub fn instantiate(&self, name: &str) -> Option<Combatant> {
        self.get(name).cloned()
    }

    /// Creatures offered as starters
    pub fn starters(&self) -> impl Iterator<Item = &Combatant> {
        self.creatures.iter().filter(|c| c.is_starter_option())
    }

    /// Creatures whose floor range contains `floor`
    pub fn available_for_floor(&self, floor: u32) -> Vec<&Combatant> {
        self.creatures
            .iter()
            .filter(|c| c.floor_range().contains(floor))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.creatures.iter()
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

fn build_creature(record: CreatureRecord, moves: &MoveCatalog) -> Result<Combatant, CatalogError> {
    let moveset = record
        .moves
        .iter()
        .map(|name| {
            moves.get(name).ok_or_else(|| CatalogError::UnknownMove {
                creature: record.name.clone(),
                mv: name.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let invalid = |source| CatalogError::Creature {
        name: record.name.clone(),
        source,
    };
    let floor_range =
        FloorRange::new(record.floor_range.min, record.floor_range.max).map_err(invalid)?;

    Combatant::builder(record.name.clone(), record.creature_type)
        .moves(moveset)
        .max_hp(record.max_hp)
        .attack(record.attack)
        .experience(record.exp)
        .level(record.level)
        .starter_option(record.is_starter)
        .floor_range(floor_range)
        .sprite(record.sprite.clone())
        .build()
        .map_err(invalid)
}

/// Both catalogs, loaded together
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    moves: MoveCatalog,
    creatures: CreatureCatalog,
}

impl Catalog {
    /// Parse both catalogs from JSON text
    pub fn from_json(moves_json: &str, creatures_json: &str) -> Result<Self, CatalogError> {
        let moves = MoveCatalog::from_json(moves_json)?;
        let creatures = CreatureCatalog::from_json(creatures_json, &moves)?;

        tracing::debug!(
            moves = moves.len(),
            creatures = creatures.len(),
            "Catalog loaded"
        );
        Ok(Self { moves, creatures })
    }

    /// Load `moves.json` and `creatures.json` from a directory
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let moves = read_file(&dir.join(MOVES_FILE))?;
        let creatures = read_file(&dir.join(CREATURES_FILE))?;
        Self::from_json(&moves, &creatures)
    }

    /// The catalog shipped with the crate
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_MOVES, BUNDLED_CREATURES)
    }

    pub fn moves(&self) -> &MoveCatalog {
        &self.moves
    }

    pub fn creatures(&self) -> &CreatureCatalog {
        &self.creatures
    }
}

fn read_file(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
