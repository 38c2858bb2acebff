//! GameSession - party, floor counter and the climb loop

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use spire_battle::progression::{distribute_victory_experience_with_base, heal_party};
use spire_battle::{Battle, Combatant, CombatantSummary, Side, TurnReport};
use spire_catalog::Catalog;

use crate::SessionError;
use crate::config::SessionConfig;
use crate::opponents::generate_opponents;

/// Result of one floor's battle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorResult {
    pub floor: u32,
    pub winner: Side,
    pub opponents: Vec<CombatantSummary>,
    /// Experience granted to each party member (0 on defeat)
    pub experience_gained: u64,
    pub turns: Vec<TurnReport>,
}

/// Summary of a run from the starting floor until defeat or the floor cap
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub floors_cleared: u32,
    pub highest_floor: u32,
    /// Floor the party lost on, if it lost
    pub defeated_on: Option<u32>,
    /// First floor with no eligible opponents, if the run stopped there
    pub exhausted_on: Option<u32>,
    pub party: Vec<CombatantSummary>,
}

/// A single player's game: the party, the current floor and the opponent rng.
///
/// All progression state lives here rather than in globals, so several
/// sessions can run side by side.
#[derive(Debug)]
pub struct GameSession {
    catalog: Arc<Catalog>,
    config: SessionConfig,
    party: Vec<Combatant>,
    floor: u32,
    rng: StdRng,
}

impl GameSession {
    /// Create a session with an empty party on the starting floor
    pub fn new(catalog: Arc<Catalog>, config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            catalog,
            floor: config.starting_floor,
            config,
            party: Vec::new(),
            rng,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_floor(&self) -> u32 {
        self.floor
    }

    pub fn party(&self) -> &[Combatant] {
        &self.party
    }

    /// Read-only projections of the party for display
    pub fn party_summary(&self) -> Vec<CombatantSummary> {
        self.party.iter().map(Combatant::summary).collect()
    }

    /// Creatures that can be picked as a starter
    pub fn starters(&self) -> Vec<&Combatant> {
        self.catalog.creatures().starters().collect()
    }

    /// Add a fresh instance of the named starter to the party
    pub fn choose_starter(&mut self, name: &str) -> Result<&Combatant, SessionError> {
        let starter = self
            .catalog
            .creatures()
            .get(name)
            .filter(|c| c.is_starter_option())
            .cloned()
            .ok_or_else(|| SessionError::NotAStarter(name.to_string()))?;

        tracing::info!(starter = name, "Starter chosen");
        self.add_to_party(starter)
    }

    /// Add a combatant to the end of the party
    pub fn add_to_party(&mut self, combatant: Combatant) -> Result<&Combatant, SessionError> {
        if self.party.len() >= self.config.max_party_size {
            return Err(SessionError::PartyFull(self.party.len()));
        }
        self.party.push(combatant);
        Ok(&self.party[self.party.len() - 1])
    }

    /// Restore every party member to full health
    pub fn heal_party(&mut self) {
        heal_party(&mut self.party);
    }

    /// Fight the current floor.
    ///
    /// A win awards experience and moves to the next floor; a loss sends the
    /// session back to the starting floor.
    pub fn next_battle(&mut self) -> Result<FloorResult, SessionError> {
        if self.party.is_empty() {
            return Err(SessionError::EmptyParty);
        }

        let floor = self.floor;
        tracing::info!(floor, "Entering floor");

        let mut opponents = generate_opponents(floor, self.catalog.creatures(), &mut self.rng)?;
        let outcome =
            Battle::with_config(&mut self.party, &mut opponents, self.config.battle)?.run_to_completion()?;

        let experience_gained = match outcome.winner {
            Side::Player => {
                let gained = distribute_victory_experience_with_base(
                    &mut self.party,
                    &opponents,
                    self.config.victory_base_experience,
                );
                tracing::info!(floor, experience = gained, "Floor cleared");
                self.floor += 1;
                gained
            }
            Side::Opponent => {
                tracing::info!(floor, "Party defeated, returning to the starting floor");
                self.floor = self.config.starting_floor;
                0
            }
        };

        if self.config.heal_between_floors {
            self.heal_party();
        }

        Ok(FloorResult {
            floor,
            winner: outcome.winner,
            opponents: opponents.iter().map(Combatant::summary).collect(),
            experience_gained,
            turns: outcome.turns,
        })
    }

    /// Climb until the party is defeated, `max_floor` is cleared or the
    /// catalog has nothing left to field
    pub fn play(&mut self) -> Result<RunSummary, SessionError> {
        let mut floors_cleared = 0;
        let mut highest_floor = self.floor;
        let mut defeated_on = None;
        let mut exhausted_on = None;

        loop {
            if let Some(max) = self.config.max_floor
                && self.floor > max
            {
                break;
            }

            let result = match self.next_battle() {
                Ok(result) => result,
                Err(SessionError::NoOpponentsForFloor(floor)) => {
                    tracing::info!(floor, "No opponents left, ending the run");
                    exhausted_on = Some(floor);
                    break;
                }
                Err(err) => return Err(err),
            };
            highest_floor = highest_floor.max(result.floor);

            if result.winner == Side::Opponent {
                defeated_on = Some(result.floor);
                break;
            }
            floors_cleared += 1;
        }

        Ok(RunSummary {
            floors_cleared,
            highest_floor,
            defeated_on,
            exhausted_on,
            party: self.party_summary(),
        })
    }
}
