//! `spire` - climb floors with a starter creature until defeated

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use spire_catalog::Catalog;
use spire_session::{GameSession, SessionConfig};

/// Climb the spire with a party of creatures
#[derive(Parser)]
#[command(name = "spire")]
#[command(about = "Turn-based creature battles, one floor at a time", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML session config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding moves.json and creatures.json (bundled data if omitted)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Seed for opponent generation
    #[arg(long)]
    seed: Option<u64>,

    /// Starter to pick (first starter if omitted)
    #[arg(long)]
    starter: Option<String>,

    /// Stop after clearing this floor
    #[arg(long)]
    max_floor: Option<u32>,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SessionConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SessionConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.max_floor.is_some() {
        config.max_floor = cli.max_floor;
    }

    let catalog = match &cli.data_dir {
        Some(dir) => Catalog::from_dir(dir)
            .with_context(|| format!("Failed to load catalog from {}", dir.display()))?,
        None => Catalog::bundled().context("Bundled catalog is invalid")?,
    };

    let mut session = GameSession::new(Arc::new(catalog), config);

    let starter = match cli.starter {
        Some(name) => name,
        None => session
            .starters()
            .first()
            .map(|c| c.name().to_string())
            .ok_or_else(|| anyhow!("Catalog has no starter creatures"))?,
    };
    session.choose_starter(&starter)?;

    let summary = session.play()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Floors cleared: {}", summary.floors_cleared);
    match (summary.defeated_on, summary.exhausted_on) {
        (Some(floor), _) => println!("Defeated on floor {}", floor),
        (None, Some(floor)) => println!("Conquered the spire: no opponents remain on floor {}", floor),
        (None, None) => println!("Reached the floor cap at floor {}", summary.highest_floor),
    }
    for member in &summary.party {
        println!(
            "  {} (Lv. {}, {} exp) {:.1}/{} HP",
            member.name, member.level, member.experience, member.current_hp, member.max_hp
        );
    }

    Ok(())
}
