//! Battle - a single encounter between two teams

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::selector::select_best_action;
use crate::error::BattleError;
use crate::types::{Combatant, Effectiveness};

/// Which team a turn or result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// The opposing side
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Opponent => "opponent",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Battle tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Turns after which `run_to_completion` gives up.
    /// Two teams whose every move is immune against the other never finish.
    pub max_turns: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self { max_turns: 10_000 }
    }
}

/// What happened during one executed turn
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TurnReport {
    /// 1-based turn number
    pub turn: u32,
    pub side: Side,
    pub attacker_index: usize,
    pub attacker: String,
    pub move_name: String,
    pub target_index: usize,
    pub target: String,
    pub effectiveness: Effectiveness,
    /// Potential damage of the chosen action
    pub damage: f64,
    /// HP the target actually lost, 0 when it was already fainted
    pub hp_lost: f64,
    pub target_fainted: bool,
}

/// Result of a battle run to completion
#[derive(Debug, Clone, PartialEq)]
pub struct BattleOutcome {
    pub winner: Side,
    pub turns: Vec<TurnReport>,
}

/// One encounter between a player team and an opponent team.
///
/// The battle borrows both teams mutably and changes them in place, so health
/// after the battle is visible to the caller once the battle is dropped.
#[derive(Debug)]
pub struct Battle<'a> {
    player: &'a mut [Combatant],
    opponent: &'a mut [Combatant],
    turn: Side,
    player_active: usize,
    opponent_active: usize,
    config: BattleConfig,
    log: Vec<TurnReport>,
}

impl<'a> Battle<'a> {
    /// Create a battle with default config. Both teams must be non-empty.
    pub fn new(
        player: &'a mut [Combatant],
        opponent: &'a mut [Combatant],
    ) -> Result<Self, BattleError> {
        Self::with_config(player, opponent, BattleConfig::default())
    }

    /// Create a battle with the given config
    pub fn with_config(
        player: &'a mut [Combatant],
        opponent: &'a mut [Combatant],
        config: BattleConfig,
    ) -> Result<Self, BattleError> {
        for (side, team) in [(Side::Player, &*player), (Side::Opponent, &*opponent)] {
            if team.is_empty() {
                return Err(BattleError::EmptyTeam(side));
            }
            if let Some(c) = team.iter().find(|c| c.moveset().is_empty()) {
                return Err(BattleError::EmptyMoveset {
                    name: c.name().to_string(),
                });
            }
        }

        Ok(Self {
            player,
            opponent,
            turn: Side::Player,
            player_active: 0,
            opponent_active: 0,
            config,
            log: Vec::new(),
        })
    }

    /// Side whose turn it is
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Number of turns executed so far
    pub fn turn_count(&self) -> u32 {
        self.log.len() as u32
    }

    /// Log of executed turns
    pub fn turns(&self) -> &[TurnReport] {
        &self.log
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Index of the side's active attacker
    pub fn active_index(&self, side: Side) -> usize {
        match side {
            Side::Player => self.player_active,
            Side::Opponent => self.opponent_active,
        }
    }

    pub fn team(&self, side: Side) -> &[Combatant] {
        match side {
            Side::Player => &*self.player,
            Side::Opponent => &*self.opponent,
        }
    }

    pub fn player_team(&self) -> &[Combatant] {
        &*self.player
    }

    pub fn opponent_team(&self) -> &[Combatant] {
        &*self.opponent
    }

    /// Winner of the battle, if decided.
    ///
    /// The player team is checked first, so a double knockout is an opponent win.
    pub fn winner(&self) -> Option<Side> {
        if team_fainted(&*self.player) {
            Some(Side::Opponent)
        } else if team_fainted(&*self.opponent) {
            Some(Side::Player)
        } else {
            None
        }
    }

    /// Check if either team is fully fainted
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Execute one turn for the side to move, then hand the turn to the other side
    pub fn execute_turn(&mut self) -> Result<TurnReport, BattleError> {
        if self.is_over() {
            return Err(BattleError::BattleOver);
        }

        let side = self.turn;
        let turn = self.turn_count() + 1;
        let (attackers, defenders, active) = match side {
            Side::Player => (&*self.player, &mut *self.opponent, &mut self.player_active),
            Side::Opponent => (&*self.opponent, &mut *self.player, &mut self.opponent_active),
        };

        // The tracked attacker may have been knocked out on the other side's turn
        if attackers[*active].is_fainted()
            && let Some(next) = next_alive(attackers, *active)
        {
            *active = next;
        }

        let attacker = &attackers[*active];
        let action = select_best_action(attacker, defenders).ok_or_else(|| {
            BattleError::EmptyMoveset {
                name: attacker.name().to_string(),
            }
        })?;
        let mv = &attacker.moveset()[action.move_index];
        let target = &mut defenders[action.target_index];

        let hp_before = target.current_hp();
        target.take_damage(action.damage);

        let report = TurnReport {
            turn,
            side,
            attacker_index: *active,
            attacker: attacker.name().to_string(),
            move_name: mv.name().to_string(),
            target_index: action.target_index,
            target: target.name().to_string(),
            effectiveness: mv.effectiveness(target.creature_type()),
            damage: action.damage,
            hp_lost: hp_before - target.current_hp(),
            target_fainted: target.is_fainted(),
        };

        tracing::debug!(
            turn,
            side = %side,
            attacker = %report.attacker,
            move_name = %report.move_name,
            target = %report.target,
            damage = report.damage,
            hp_lost = report.hp_lost,
            remaining_hp = target.current_hp(),
            "Turn executed"
        );
        if report.target_fainted {
            tracing::debug!(target = %report.target, side = %side.other(), "Combatant fainted");
        }

        if let Some(next) = next_alive(attackers, *active) {
            *active = next;
        }
        self.turn = side.other();
        self.log.push(report.clone());

        Ok(report)
    }

    /// Execute turns until one team is fully fainted.
    ///
    /// Fails with [`BattleError::TurnLimitExceeded`] if the configured turn limit
    /// is reached first.
    pub fn run_to_completion(&mut self) -> Result<BattleOutcome, BattleError> {
        loop {
            if let Some(winner) = self.winner() {
                tracing::info!(winner = %winner, turns = self.turn_count(), "Battle finished");
                return Ok(BattleOutcome {
                    winner,
                    turns: self.log.clone(),
                });
            }

            if self.turn_count() >= self.config.max_turns {
                tracing::warn!(turns = self.turn_count(), "Battle hit the turn limit");
                return Err(BattleError::TurnLimitExceeded {
                    turns: self.turn_count(),
                });
            }

            self.execute_turn()?;
        }
    }
}

/// Check if every combatant on a team has fainted
pub(crate) fn team_fainted(team: &[Combatant]) -> bool {
    team.iter().all(Combatant::is_fainted)
}

/// Next non-fainted member after `current`, scanning forward and wrapping.
///
/// The scan is bounded to one lap and ends on `current` itself, so `None`
/// means the whole team has fainted.
pub(crate) fn next_alive(team: &[Combatant], current: usize) -> Option<usize> {
    let len = team.len();
    (1..=len)
        .map(|step| (current + step) % len)
        .find(|&idx| !team[idx].is_fainted())
}
