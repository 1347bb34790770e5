// ═══════════════════════════════════════════════════════════════════════
// Game setup — validates configuration and builds the initial Game
// ═══════════════════════════════════════════════════════════════════════

use crate::cards;
use crate::error::SetupError;
use crate::game::Game;
use crate::layout::CHARACTERS;
use crate::mansion::Mansion;
use crate::types::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

pub const MIN_PLAYERS: u8 = 3;
pub const MAX_PLAYERS: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub player_count: u8,
    /// Seed for every random draw. None = OS entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new(player_count: u8) -> Self {
        GameConfig { player_count, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(SetupError::InvalidPlayerCount(self.player_count));
        }
        Ok(())
    }
}

/// Create a game for 3–6 players.
///
/// Order of random draws: solution, weapon placement, deck shuffle. Dice
/// rolls continue from the same generator.
pub fn create_game(config: GameConfig) -> Result<Game, SetupError> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mansion = Mansion::new(&mut rng);

    let player_count = config.player_count as usize;
    let mut players: Vec<Player> = CHARACTERS.iter()
        .take(player_count)
        .enumerate()
        .map(|(i, c)| Player::new(i, c.id, mansion.character_room(c.id)))
        .collect();

    let deck = cards::build_deck(&mansion.solution(), &mut rng);
    for (player, hand) in players.iter_mut().zip(cards::deal(&deck, player_count)) {
        player.cards = hand;
    }

    info!(players = player_count, seed = ?config.seed, cards = deck.len(), "game created");

    Ok(Game {
        mansion,
        players,
        current_player_index: 0,
        turn_count: 0,
        remaining_moves: 0,
        rolled: false,
        rng,
    })
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Game, SetupError> {
        create_game(config)
    }
}
