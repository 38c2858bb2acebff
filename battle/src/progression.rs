//! Post-battle experience, level growth and floor scaling

use crate::types::Combatant;

/// Base experience used for victory rewards
pub const VICTORY_BASE_EXPERIENCE: u64 = 100;

/// Levels added to an opponent per floor: floor(floor * 0.5)
pub fn floor_level_bonus(floor: u32) -> u32 {
    floor / 2
}

/// Build a floor-scaled opponent from a template.
///
/// The template is left untouched. Each bonus level adds 10 max HP and
/// 1 attack, and experience is set to the total required for the new level.
/// Stats saturate instead of wrapping on absurdly high floors.
pub fn scale_opponent_for_floor(template: &Combatant, floor: u32) -> Combatant {
    let bonus = floor_level_bonus(floor);
    let level = template.level().saturating_add(bonus);

    template.with_stats(
        level,
        template.max_hp().saturating_add(bonus.saturating_mul(10)),
        template.attack().saturating_add(bonus),
        Combatant::experience_for_level(level),
    )
}

/// Arithmetic mean of the team's levels, `None` for an empty team
pub fn average_level(team: &[Combatant]) -> Option<f64> {
    if team.is_empty() {
        return None;
    }
    let total: u64 = team.iter().map(|c| u64::from(c.level())).sum();
    Some(total as f64 / team.len() as f64)
}

/// Award victory experience to every member of the player team.
///
/// Uses [`VICTORY_BASE_EXPERIENCE`]. See [`distribute_victory_experience_with_base`].
pub fn distribute_victory_experience(player_team: &mut [Combatant], defeated_team: &[Combatant]) -> u64 {
    distribute_victory_experience_with_base(player_team, defeated_team, VICTORY_BASE_EXPERIENCE)
}

/// Award victory experience to every member of the player team, fainted or not.
///
/// The amount is computed once from the defeated team's average level and
/// given to each member identically. Returns the amount granted per member
/// (0 if the defeated team is empty).
pub fn distribute_victory_experience_with_base(
    player_team: &mut [Combatant],
    defeated_team: &[Combatant],
    base_experience: u64,
) -> u64 {
    let Some(avg_level) = average_level(defeated_team) else {
        return 0;
    };
    let amount = Combatant::experience_gained_from_victory(base_experience, avg_level);

    for member in player_team.iter_mut() {
        if member.gain_experience(amount) {
            tracing::info!(name = member.name(), level = member.level(), "Party member leveled up");
        }
    }

    tracing::debug!(amount, average_level = avg_level, "Victory experience distributed");
    amount
}

/// Restore every member of the team to full health
pub fn heal_party(team: &mut [Combatant]) {
    for member in team.iter_mut() {
        member.heal_full();
    }
}
