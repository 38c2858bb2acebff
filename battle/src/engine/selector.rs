//! Automated move and target selection

use crate::types::{Combatant, Move};

/// A chosen (move, target) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Action {
    /// Index into the attacker's moveset
    pub move_index: usize,
    /// Index into the defending team
    pub target_index: usize,
    /// Damage this action deals if executed
    pub damage: f64,
}

/// Damage `mv` would deal from `attacker` to `defender`:
/// `(power + attack) * effectiveness multiplier`
pub fn potential_damage(attacker: &Combatant, defender: &Combatant, mv: &Move) -> f64 {
    let base = f64::from(mv.power()) + f64::from(attacker.attack());
    base * mv.effectiveness_multiplier(defender.creature_type())
}

/// Pick the (move, target) pair with the highest potential damage.
///
/// Only non-fainted defenders are considered. A candidate replaces the current
/// pick only when it deals strictly more damage, starting from zero, so ties go
/// to the first candidate seen. When nothing beats zero the pick falls back to
/// the first move against the first listed defender, fainted or not.
///
/// Returns `None` if the attacker has no moves or there are no defenders.
pub fn select_best_action(attacker: &Combatant, defenders: &[Combatant]) -> Option<Action> {
    let first_move = attacker.moveset().first()?;
    let first_target = defenders.first()?;

    let mut best = Action {
        move_index: 0,
        target_index: 0,
        damage: potential_damage(attacker, first_target, first_move),
    };
    let mut max_damage = 0.0;

    for (move_index, mv) in attacker.moveset().iter().enumerate() {
        for (target_index, defender) in defenders.iter().enumerate() {
            if defender.is_fainted() {
                continue;
            }

            let damage = potential_damage(attacker, defender, mv);
            if damage > max_damage {
                max_damage = damage;
                best = Action {
                    move_index,
                    target_index,
                    damage,
                };
            }
        }
    }

    Some(best)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::types::Type;

    fn combatant(name: &str, creature_type: Type, attack: u32, moves: &[(&str, Type, u32)]) -> Combatant {
        Combatant::builder(name, creature_type)
            .moves(
                moves
                    .iter()
                    .map(|(n, t, p)| Arc::new(Move::new(*n, *t, *p))),
            )
            .max_hp(100)
            .attack(attack)
            .build()
            .unwrap()
    }

    #[test]
    fn test_potential_damage_additive() {
        let attacker = combatant("A", Type::Normal, 50, &[("Ember", Type::Fire, 40)]);
        let grass = combatant("G", Type::Grass, 10, &[("Tackle", Type::Normal, 40)]);
        let water = combatant("W", Type::Water, 10, &[("Tackle", Type::Normal, 40)]);
        let normal = combatant("N", Type::Normal, 10, &[("Tackle", Type::Normal, 40)]);

        let ember = &attacker.moveset()[0];
        assert_eq!(potential_damage(&attacker, &grass, ember), 180.0);
        assert_eq!(potential_damage(&attacker, &water, ember), 45.0);
        assert_eq!(potential_damage(&attacker, &normal, ember), 90.0);
    }

    #[test]
    fn test_higher_attack_deals_more_damage() {
        let weak = combatant("Weak", Type::Normal, 50, &[("Tackle", Type::Normal, 40)]);
        let strong = combatant("Strong", Type::Normal, 100, &[("Tackle", Type::Normal, 40)]);
        let defender = combatant("D", Type::Fire, 50, &[("Tackle", Type::Normal, 40)]);
        let mv = Move::new("Tackle", Type::Normal, 40);

        assert!(potential_damage(&strong, &defender, &mv) > potential_damage(&weak, &defender, &mv));
    }

    #[test]
    fn test_super_effective_beats_normal() {
        let attacker = combatant("A", Type::Normal, 50, &[("Tackle", Type::Normal, 40)]);
        let defender = combatant("D", Type::Fire, 50, &[("Tackle", Type::Normal, 40)]);
        let super_effective = Move::new("Water Gun", Type::Water, 40);
        let normal = Move::new("Tackle", Type::Normal, 40);

        assert_eq!(super_effective.effectiveness_multiplier(defender.creature_type()), 2.0);
        assert_eq!(normal.effectiveness_multiplier(defender.creature_type()), 1.0);
        assert!(
            potential_damage(&attacker, &defender, &super_effective)
                > potential_damage(&attacker, &defender, &normal)
        );
    }

    #[test]
    fn test_selects_highest_damage_pair() {
        let attacker = combatant(
            "A",
            Type::Normal,
            10,
            &[("Tackle", Type::Normal, 40), ("Ember", Type::Fire, 40), ("Water Gun", Type::Water, 40)],
        );
        let defenders = vec![
            combatant("Fire", Type::Fire, 10, &[("Tackle", Type::Normal, 40)]),
            combatant("Grass", Type::Grass, 10, &[("Tackle", Type::Normal, 40)]),
        ];

        let action = select_best_action(&attacker, &defenders).unwrap();
        // Water Gun on Fire and Ember on Grass both deal 100; Ember vs Grass is seen second
        assert_eq!(action.move_index, 1);
        assert_eq!(action.target_index, 1);
        assert_eq!(action.damage, 100.0);
    }

    #[test]
    fn test_first_candidate_wins_ties() {
        let attacker = combatant(
            "A",
            Type::Normal,
            10,
            &[("Tackle", Type::Normal, 40), ("Scratch", Type::Normal, 40)],
        );
        let defenders = vec![
            combatant("D1", Type::Fire, 10, &[("Tackle", Type::Normal, 40)]),
            combatant("D2", Type::Water, 10, &[("Tackle", Type::Normal, 40)]),
        ];

        let action = select_best_action(&attacker, &defenders).unwrap();
        assert_eq!(action.move_index, 0);
        assert_eq!(action.target_index, 0);
    }

    #[test]
    fn test_skips_fainted_defenders() {
        let attacker = combatant("A", Type::Normal, 10, &[("Ember", Type::Fire, 40)]);
        let mut defenders = vec![
            combatant("Grass", Type::Grass, 10, &[("Tackle", Type::Normal, 40)]),
            combatant("Water", Type::Water, 10, &[("Tackle", Type::Normal, 40)]),
        ];
        defenders[0].take_damage(1000.0);

        let action = select_best_action(&attacker, &defenders).unwrap();
        assert_eq!(action.target_index, 1);
        assert_eq!(action.damage, 25.0);
    }

    #[test]
    fn test_all_immune_falls_back_to_first_move_and_defender() {
        let attacker = combatant(
            "A",
            Type::Normal,
            10,
            &[("Tackle", Type::Normal, 40), ("Body Slam", Type::Normal, 85)],
        );
        let mut defenders = vec![
            combatant("Fainted", Type::Fire, 10, &[("Tackle", Type::Normal, 40)]),
            combatant("Ghost", Type::Ghost, 10, &[("Tackle", Type::Normal, 40)]),
        ];
        defenders[0].take_damage(1000.0);

        let action = select_best_action(&attacker, &defenders).unwrap();
        assert_eq!(action.move_index, 0);
        assert_eq!(action.target_index, 0);
        assert_eq!(action.damage, 50.0);
    }

    #[test]
    fn test_no_defenders() {
        let attacker = combatant("A", Type::Normal, 10, &[("Tackle", Type::Normal, 40)]);
        assert!(select_best_action(&attacker, &[]).is_none());
    }
}
