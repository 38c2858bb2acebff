//! Combatant (creature instance) state

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::creature_type::Type;
use super::moves::Move;
use crate::error::CombatantError;

/// Stat growth applied by a single level-up
pub const LEVEL_UP_HP_GAIN: u32 = 10;
pub const LEVEL_UP_ATTACK_GAIN: u32 = 10;

/// Inclusive range of floors a creature can appear on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FloorRange {
    pub min: u32,
    pub max: u32,
}

impl FloorRange {
    pub fn new(min: u32, max: u32) -> Result<Self, CombatantError> {
        if min > max {
            return Err(CombatantError::InvalidFloorRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Check if `floor` lies within the range
    pub fn contains(&self, floor: u32) -> bool {
        (self.min..=self.max).contains(&floor)
    }
}

impl Default for FloorRange {
    fn default() -> Self {
        Self { min: 1, max: u32::MAX }
    }
}

/// A creature instance taking part in battles.
///
/// Health is tracked as `f64` because type multipliers produce fractional
/// damage that is applied unrounded. `current_hp` always stays within
/// `0.0..=max_hp`.
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    name: String,
    creature_type: Type,
    moveset: Vec<Arc<Move>>,
    max_hp: u32,
    current_hp: f64,
    attack: u32,
    experience: u64,
    level: u32,
    is_starter_option: bool,
    floor_range: FloorRange,
    sprite: String,
}

impl Combatant {
    /// Start building a combatant
    pub fn builder(name: impl Into<String>, creature_type: Type) -> CombatantBuilder {
        CombatantBuilder::new(name, creature_type)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn creature_type(&self) -> Type {
        self.creature_type
    }

    pub fn moveset(&self) -> &[Arc<Move>] {
        &self.moveset
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn current_hp(&self) -> f64 {
        self.current_hp
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn experience(&self) -> u64 {
        self.experience
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_starter_option(&self) -> bool {
        self.is_starter_option
    }

    pub fn floor_range(&self) -> FloorRange {
        self.floor_range
    }

    /// Opaque sprite reference for display layers
    pub fn sprite(&self) -> &str {
        &self.sprite
    }

    /// Replace the moveset. An empty moveset is rejected and leaves the old one in place.
    pub fn set_moveset(&mut self, moveset: Vec<Arc<Move>>) -> Result<(), CombatantError> {
        if moveset.is_empty() {
            return Err(CombatantError::EmptyMoveset(self.name.clone()));
        }
        self.moveset = moveset;
        Ok(())
    }

    /// Reduce current HP by `amount`, clamping at zero
    pub fn take_damage(&mut self, amount: f64) {
        if amount.is_nan() {
            return;
        }
        self.current_hp = (self.current_hp - amount).clamp(0.0, f64::from(self.max_hp));
    }

    /// Set current HP, clamped to `0..=max_hp`
    pub fn set_current_hp(&mut self, hp: f64) {
        if hp.is_nan() {
            return;
        }
        self.current_hp = hp.clamp(0.0, f64::from(self.max_hp));
    }

    /// Restore current HP to max HP
    pub fn heal_full(&mut self) {
        self.current_hp = f64::from(self.max_hp);
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp <= 0.0
    }

    /// Remaining HP as a fraction of max HP (0.0-1.0)
    pub fn hp_fraction(&self) -> f64 {
        self.current_hp / f64::from(self.max_hp)
    }

    /// Add experience, levelling up at most once.
    ///
    /// Returns true if the gain crossed the threshold for the next level.
    pub fn gain_experience(&mut self, amount: u64) -> bool {
        self.experience = self.experience.saturating_add(amount);

        if self.experience >= Self::experience_for_level(self.level.saturating_add(1)) {
            self.level_up();
            true
        } else {
            false
        }
    }

    /// Raise level by one. Current HP rises together with max HP.
    pub fn level_up(&mut self) {
        self.level = self.level.saturating_add(1);
        self.max_hp = self.max_hp.saturating_add(LEVEL_UP_HP_GAIN);
        self.current_hp += f64::from(LEVEL_UP_HP_GAIN);
        self.attack = self.attack.saturating_add(LEVEL_UP_ATTACK_GAIN);

        tracing::debug!(
            name = %self.name,
            level = self.level,
            max_hp = self.max_hp,
            attack = self.attack,
            "Level up"
        );
    }

    /// Total experience required to reach `level`: floor(level^3 / 2).
    ///
    /// Saturates at `u64::MAX / 2` for very high levels.
    pub fn experience_for_level(level: u32) -> u64 {
        let level = u64::from(level);
        level.saturating_pow(3) / 2
    }

    /// Experience awarded for defeating a team of the given average level
    pub fn experience_gained_from_victory(base_experience: u64, opponent_average_level: f64) -> u64 {
        ((base_experience as f64 * opponent_average_level / 7.0).floor() as u64).saturating_add(1)
    }

    /// Read-only projection for display layers
    pub fn summary(&self) -> CombatantSummary {
        CombatantSummary {
            name: self.name.clone(),
            creature_type: self.creature_type,
            level: self.level,
            experience: self.experience,
            current_hp: self.current_hp,
            max_hp: self.max_hp,
            attack: self.attack,
            moves: self.moveset.iter().map(|m| m.name().to_string()).collect(),
            sprite: self.sprite.clone(),
            fainted: self.is_fainted(),
        }
    }

    /// Clone this combatant with new base stats, keeping identity and moves.
    /// Current HP starts full.
    pub(crate) fn with_stats(&self, level: u32, max_hp: u32, attack: u32, experience: u64) -> Self {
        Self {
            level,
            max_hp,
            current_hp: f64::from(max_hp),
            attack,
            experience,
            ..self.clone()
        }
    }
}

/// Read-only snapshot of a combatant for UI layers
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CombatantSummary {
    pub name: String,
    pub creature_type: Type,
    pub level: u32,
    pub experience: u64,
    pub current_hp: f64,
    pub max_hp: u32,
    pub attack: u32,
    pub moves: Vec<String>,
    pub sprite: String,
    pub fainted: bool,
}

/// Builder for [`Combatant`]
#[derive(Debug, Clone)]
pub struct CombatantBuilder {
    name: String,
    creature_type: Type,
    moveset: Vec<Arc<Move>>,
    max_hp: u32,
    attack: u32,
    experience: u64,
    level: u32,
    is_starter_option: bool,
    floor_range: FloorRange,
    sprite: String,
}

impl CombatantBuilder {
    fn new(name: impl Into<String>, creature_type: Type) -> Self {
        Self {
            name: name.into(),
            creature_type,
            moveset: Vec::new(),
            max_hp: 1,
            attack: 0,
            experience: 0,
            level: 1,
            is_starter_option: false,
            floor_range: FloorRange::default(),
            sprite: String::new(),
        }
    }

    pub fn moves(mut self, moves: impl IntoIterator<Item = Arc<Move>>) -> Self {
        self.moveset.extend(moves);
        self
    }

    pub fn max_hp(mut self, max_hp: u32) -> Self {
        self.max_hp = max_hp;
        self
    }

    pub fn attack(mut self, attack: u32) -> Self {
        self.attack = attack;
        self
    }

    pub fn experience(mut self, experience: u64) -> Self {
        self.experience = experience;
        self
    }

    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn starter_option(mut self, is_starter_option: bool) -> Self {
        self.is_starter_option = is_starter_option;
        self
    }

    pub fn floor_range(mut self, floor_range: FloorRange) -> Self {
        self.floor_range = floor_range;
        self
    }

    pub fn sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite = sprite.into();
        self
    }

    /// Validate and build. The combatant starts at full health.
    pub fn build(self) -> Result<Combatant, CombatantError> {
        if self.moveset.is_empty() {
            return Err(CombatantError::EmptyMoveset(self.name));
        }
        if self.max_hp == 0 {
            return Err(CombatantError::ZeroMaxHp(self.name));
        }
        if self.level == 0 {
            return Err(CombatantError::ZeroLevel(self.name));
        }

        Ok(Combatant {
            name: self.name,
            creature_type: self.creature_type,
            moveset: self.moveset,
            max_hp: self.max_hp,
            current_hp: f64::from(self.max_hp),
            attack: self.attack,
            experience: self.experience,
            level: self.level,
            is_starter_option: self.is_starter_option,
            floor_range: self.floor_range,
            sprite: self.sprite,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tackle() -> Arc<Move> {
        Arc::new(Move::new("Tackle", Type::Normal, 40))
    }

    fn create_test_combatant() -> Combatant {
        Combatant::builder("Bulbasaur", Type::Grass)
            .moves([tackle(), Arc::new(Move::new("Vine Whip", Type::Grass, 45))])
            .max_hp(100)
            .attack(50)
            .level(5)
            .experience(62)
            .starter_option(true)
            .floor_range(FloorRange::new(1, 10).unwrap())
            .sprite("bulbasaur.png")
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder() {
        let c = create_test_combatant();
        assert_eq!(c.name(), "Bulbasaur");
        assert_eq!(c.creature_type(), Type::Grass);
        assert_eq!(c.moveset().len(), 2);
        assert_eq!(c.max_hp(), 100);
        assert_eq!(c.current_hp(), 100.0);
        assert_eq!(c.attack(), 50);
        assert_eq!(c.level(), 5);
        assert_eq!(c.experience(), 62);
        assert!(c.is_starter_option());
        assert_eq!(c.floor_range(), FloorRange { min: 1, max: 10 });
        assert_eq!(c.sprite(), "bulbasaur.png");
    }

    #[test]
    fn test_builder_rejects_invalid() {
        let err = Combatant::builder("Empty", Type::Normal)
            .max_hp(10)
            .build()
            .unwrap_err();
        assert_eq!(err, CombatantError::EmptyMoveset("Empty".to_string()));

        let err = Combatant::builder("Zero", Type::Normal)
            .moves([tackle()])
            .max_hp(0)
            .build()
            .unwrap_err();
        assert_eq!(err, CombatantError::ZeroMaxHp("Zero".to_string()));

        let err = Combatant::builder("Zero", Type::Normal)
            .moves([tackle()])
            .max_hp(10)
            .level(0)
            .build()
            .unwrap_err();
        assert_eq!(err, CombatantError::ZeroLevel("Zero".to_string()));
    }

    #[test]
    fn test_floor_range() {
        let range = FloorRange::new(3, 7).unwrap();
        assert!(!range.contains(2));
        assert!(range.contains(3));
        assert!(range.contains(7));
        assert!(!range.contains(8));

        assert_eq!(
            FloorRange::new(5, 4),
            Err(CombatantError::InvalidFloorRange { min: 5, max: 4 })
        );
    }

    #[test]
    fn test_take_damage() {
        let mut c = create_test_combatant();
        c.take_damage(30.0);
        assert_eq!(c.current_hp(), 70.0);
        assert!(!c.is_fainted());

        c.take_damage(22.5);
        assert_eq!(c.current_hp(), 47.5);
    }

    #[test]
    fn test_take_damage_clamps_at_zero() {
        let mut c = create_test_combatant();
        c.take_damage(250.0);
        assert_eq!(c.current_hp(), 0.0);
        assert!(c.is_fainted());

        c.take_damage(10.0);
        assert_eq!(c.current_hp(), 0.0);
    }

    #[test]
    fn test_take_damage_never_exceeds_max() {
        let mut c = create_test_combatant();
        c.take_damage(-50.0);
        assert_eq!(c.current_hp(), 100.0);

        c.take_damage(f64::NAN);
        assert_eq!(c.current_hp(), 100.0);
    }

    #[test]
    fn test_hp_stays_in_range_over_sequence() {
        let mut c = create_test_combatant();
        for amount in [0.0, 12.5, 40.0, 0.5, 90.0, 3.0, 1000.0] {
            c.take_damage(amount);
            assert!(c.current_hp() >= 0.0);
            assert!(c.current_hp() <= f64::from(c.max_hp()));
        }
        assert!(c.is_fainted());
    }

    #[test]
    fn test_exact_faint() {
        let mut c = create_test_combatant();
        c.take_damage(f64::from(c.max_hp()));
        assert_eq!(c.current_hp(), 0.0);
        assert!(c.is_fainted());
    }

    #[test]
    fn test_heal_full_and_set_hp() {
        let mut c = create_test_combatant();
        c.take_damage(80.0);
        c.heal_full();
        assert_eq!(c.current_hp(), 100.0);

        c.set_current_hp(150.0);
        assert_eq!(c.current_hp(), 100.0);
        c.set_current_hp(-1.0);
        assert_eq!(c.current_hp(), 0.0);
        c.set_current_hp(25.0);
        assert_eq!(c.hp_fraction(), 0.25);
    }

    #[test]
    fn test_set_moveset() {
        let mut c = create_test_combatant();
        let new_moves = vec![
            Arc::new(Move::new("Tackle", Type::Normal, 50)),
            Arc::new(Move::new("Water Gun", Type::Water, 40)),
        ];
        c.set_moveset(new_moves.clone()).unwrap();
        assert_eq!(c.moveset(), new_moves.as_slice());

        assert!(c.set_moveset(Vec::new()).is_err());
        assert_eq!(c.moveset().len(), 2);
    }

    #[test]
    fn test_experience_for_level() {
        assert_eq!(Combatant::experience_for_level(10), 500);
        assert_eq!(Combatant::experience_for_level(1), 0);
        assert_eq!(Combatant::experience_for_level(3), 13);
        assert_eq!(Combatant::experience_for_level(6), 108);

        let mut prev = 0;
        for level in 1..=100 {
            let exp = Combatant::experience_for_level(level);
            assert!(exp >= prev);
            prev = exp;
        }
    }

    #[test]
    fn test_experience_for_level_saturates() {
        let cap = u64::MAX / 2;
        assert_eq!(Combatant::experience_for_level(3_000_000), cap);
        assert_eq!(Combatant::experience_for_level(u32::MAX), cap);
        assert!(Combatant::experience_for_level(2_000_000) < cap);
        assert!(Combatant::experience_for_level(3_000_000) >= Combatant::experience_for_level(2_000_000));
        assert_eq!(Combatant::experience_gained_from_victory(u64::MAX, 7.0), u64::MAX);
    }

    #[test]
    fn test_experience_gained_from_victory() {
        // floor(100 * 5 / 7) + 1 = 71 + 1
        assert_eq!(Combatant::experience_gained_from_victory(100, 5.0), 72);
        assert_eq!(Combatant::experience_gained_from_victory(100, 0.0), 1);
        assert_eq!(Combatant::experience_gained_from_victory(100, 3.5), 51);
    }

    #[test]
    fn test_level_up() {
        let mut c = create_test_combatant();
        c.take_damage(40.0);
        c.level_up();

        assert_eq!(c.level(), 6);
        assert_eq!(c.max_hp(), 110);
        assert_eq!(c.current_hp(), 70.0);
        assert_eq!(c.attack(), 60);
    }

    #[test]
    fn test_gain_experience_below_threshold() {
        let mut c = create_test_combatant();
        // Level 6 needs 108
        assert!(!c.gain_experience(10));
        assert_eq!(c.experience(), 72);
        assert_eq!(c.level(), 5);
    }

    #[test]
    fn test_gain_experience_levels_up_once() {
        let mut c = create_test_combatant();
        assert!(c.gain_experience(46));
        assert_eq!(c.experience(), 108);
        assert_eq!(c.level(), 6);
    }

    #[test]
    fn test_large_gain_levels_up_only_once() {
        let mut c = create_test_combatant();
        assert!(c.gain_experience(100_000));
        assert_eq!(c.level(), 6);
        assert_eq!(c.max_hp(), 110);
        assert_eq!(c.attack(), 60);
    }

    #[test]
    fn test_level_up_at_stat_ceiling() {
        let mut c = Combatant::builder("Arceus", Type::Normal)
            .moves([tackle()])
            .max_hp(u32::MAX)
            .attack(u32::MAX)
            .level(u32::MAX)
            .build()
            .unwrap();

        assert!(c.gain_experience(u64::MAX));
        assert_eq!(c.experience(), u64::MAX);
        assert_eq!(c.level(), u32::MAX);
        assert_eq!(c.max_hp(), u32::MAX);
        assert_eq!(c.attack(), u32::MAX);
    }

    #[test]
    fn test_summary() {
        let mut c = create_test_combatant();
        c.take_damage(100.0);
        let summary = c.summary();
        assert_eq!(summary.name, "Bulbasaur");
        assert_eq!(summary.moves, vec!["Tackle", "Vine Whip"]);
        assert_eq!(summary.current_hp, 0.0);
        assert!(summary.fainted);
    }

    #[test]
    fn test_with_stats_keeps_identity() {
        let c = create_test_combatant();
        let scaled = c.with_stats(10, 150, 55, 500);
        assert_eq!(scaled.name(), c.name());
        assert_eq!(scaled.moveset(), c.moveset());
        assert_eq!(scaled.level(), 10);
        assert_eq!(scaled.current_hp(), 150.0);
        assert_eq!(c.level(), 5);
    }
}
