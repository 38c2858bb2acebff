//! Static move and creature catalogs for Spire.
//!
//! Catalogs are loaded once at startup from two JSON documents: a list of
//! moves and a list of creatures whose `moves` entries name moves from the
//! first list. Loaded moves are shared between creatures through `Arc`.
//!
//! ```
//! let catalog = spire_catalog::Catalog::bundled().unwrap();
//! let starter = catalog.creatures().instantiate("Charmander").unwrap();
//! assert_eq!(starter.moveset()[0].name(), "Scratch");
//! ```

mod catalog;
mod records;

use std::path::PathBuf;

use spire_battle::CombatantError;
use thiserror::Error;

pub use catalog::{Catalog, CreatureCatalog, MoveCatalog, CREATURES_FILE, MOVES_FILE};
pub use records::{CreatureRecord, MoveRecord};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate move: {0}")]
    DuplicateMove(String),

    #[error("Duplicate creature: {0}")]
    DuplicateCreature(String),

    #[error("Creature {creature} references unknown move {mv}")]
    UnknownMove { creature: String, mv: String },

    #[error("Invalid creature {name}: {source}")]
    Creature {
        name: String,
        #[source]
        source: CombatantError,
    },
}
