use std::path::PathBuf;

use spire_battle::BattleError;
use spire_catalog::CatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Battle failed: {0}")]
    Battle(#[from] BattleError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("The player party is empty")]
    EmptyParty,

    #[error("The party is full ({0} members)")]
    PartyFull(usize),

    #[error("{0} is not a starter option")]
    NotAStarter(String),

    #[error("No creatures can appear on floor {0}")]
    NoOpponentsForFloor(u32),

    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
