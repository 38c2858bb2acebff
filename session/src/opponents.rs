//! Opponent team generation for a floor

use rand::Rng;
use rand::seq::SliceRandom;
use spire_battle::Combatant;
use spire_battle::progression::scale_opponent_for_floor;
use spire_catalog::CreatureCatalog;

use crate::SessionError;

/// Opponents faced on `floor`: ceil((floor mod 10) / 2), at least one
pub fn opponent_count(floor: u32) -> usize {
    ((floor % 10).div_ceil(2) as usize).max(1)
}

/// Build the opponent team for a floor.
///
/// Each opponent is drawn uniformly from the creatures whose floor range
/// contains `floor`, then scaled for the floor.
pub fn generate_opponents<R: Rng + ?Sized>(
    floor: u32,
    creatures: &CreatureCatalog,
    rng: &mut R,
) -> Result<Vec<Combatant>, SessionError> {
    let candidates = creatures.available_for_floor(floor);
    if candidates.is_empty() {
        return Err(SessionError::NoOpponentsForFloor(floor));
    }

    let count = opponent_count(floor);
    let opponents: Vec<Combatant> = (0..count)
        .filter_map(|_| candidates.choose(&mut *rng))
        .map(|template| scale_opponent_for_floor(template, floor))
        .collect();

    tracing::debug!(
        floor,
        opponents = ?opponents.iter().map(Combatant::name).collect::<Vec<_>>(),
        "Generated opponents"
    );
    Ok(opponents)
}
