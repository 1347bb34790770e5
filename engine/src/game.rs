// ═══════════════════════════════════════════════════════════════════════
// Game controller — players, dice and the per-turn state machine.
//
// Architecture:
//   The controller is a pure state machine. It never reads input or
//   prints; the runner calls one operation per command and shows the
//   returned outcome (or the error's message).
//
// Turn flow:
//   1. `start_turn` rolls one die              AwaitingRoll → Moving
//   2. `move_player` spends moves; entering a main room sets
//      `must_suggest`                          Moving → MustSuggest
//   3. `make_suggestion` clears the flag       MustSuggest → Moving/TurnOver
//   4. `end_turn` hands over, refusing while a suggestion is owed
//
// Every operation either applies fully or returns an error and leaves the
// state untouched.
// ═══════════════════════════════════════════════════════════════════════

use crate::cards::hand_names;
use crate::error::TurnError;
use crate::layout::{character_name, room_name, weapon_name, CHARACTERS, WEAPONS};
use crate::mansion::Mansion;
use crate::types::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Result of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub from: RoomId,
    pub to: RoomId,
    pub used_secret_passage: bool,
    pub remaining_moves: u8,
    /// The destination is a main room; a suggestion is now owed.
    pub requires_suggestion: bool,
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let to = room_name(self.to);
        if self.used_secret_passage {
            write!(f, "Used secret passage to {}!", to)?;
        } else {
            write!(f, "Moved to {}. Moves remaining: {}", to, self.remaining_moves)?;
        }
        if self.requires_suggestion {
            write!(f, "\nYou entered {}! Now first make a suggestion.", to)?;
        }
        Ok(())
    }
}

/// Result of a successful suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionOutcome {
    pub character: CharacterId,
    pub weapon: WeaponId,
    pub room: RoomId,
    pub character_moved: bool,
    pub weapon_moved: bool,
}

impl std::fmt::Display for SuggestionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (c, w, r) = (character_name(self.character), weapon_name(self.weapon), room_name(self.room));
        writeln!(f, "SUGGESTION: {} with {} in {}", c, w, r)?;
        write!(f, "RESULT: ")?;
        if self.character_moved {
            write!(f, "Moved {} to {}. ", c, r)?;
        } else {
            write!(f, "{} is already here. ", c)?;
        }
        if self.weapon_moved {
            write!(f, "Moved {} to {}.", w, r)
        } else {
            write!(f, "{} is already here.", w)
        }
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) mansion: Mansion,
    pub(crate) players: Vec<Player>,
    pub(crate) current_player_index: usize,
    pub(crate) turn_count: u32,
    pub(crate) remaining_moves: u8,
    /// The current player has rolled this turn.
    pub(crate) rolled: bool,
    pub(crate) rng: ChaCha8Rng,
}

impl Game {
    // ── Accessors ──────────────────────────────────────────────────────

    pub fn mansion(&self) -> &Mansion {
        &self.mansion
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.0)
    }

    pub fn current_player_id(&self) -> PlayerId {
        PlayerId(self.current_player_index)
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn remaining_moves(&self) -> u8 {
        self.remaining_moves
    }

    pub fn phase(&self) -> TurnPhase {
        if self.current_player().must_suggest {
            TurnPhase::MustSuggest
        } else if !self.rolled {
            TurnPhase::AwaitingRoll
        } else if self.remaining_moves > 0 {
            TurnPhase::Moving
        } else {
            TurnPhase::TurnOver
        }
    }

    // ── Turn operations ────────────────────────────────────────────────

    pub fn roll_dice(&mut self) -> u8 {
        self.rng.gen_range(1..=6)
    }

    /// Roll for the current player. Only once per turn.
    pub fn start_turn(&mut self) -> Result<u8, TurnError> {
        if self.rolled {
            return Err(TurnError::AlreadyRolled);
        }
        let roll = self.roll_dice();
        self.rolled = true;
        self.remaining_moves = roll;
        info!(player = %self.current_player().name, roll, "dice rolled");
        Ok(roll)
    }

    /// Move one step. The secret passage is free; any other edge costs one.
    pub fn move_player(&mut self, player: PlayerId, target: &str) -> Result<MoveOutcome, TurnError> {
        self.check_turn(player)?;
        if !self.rolled {
            return Err(TurnError::RollRequired);
        }
        if self.players[player.0].must_suggest {
            return Err(TurnError::SuggestionPending);
        }
        if self.remaining_moves == 0 {
            return Err(TurnError::NoMovesRemaining);
        }

        let from = self.players[player.0].position;
        let to = self.mansion.room_by_name(target)
            .ok_or_else(|| TurnError::RoomNotFound(target.to_string()))?;
        if !self.mansion.is_valid_move(from, to) {
            return Err(TurnError::InvalidMove {
                from: room_name(from).to_string(),
                to: target.to_string(),
            });
        }

        let used_secret_passage = self.mansion.layout().secret_passage(from) == Some(to);
        if !used_secret_passage {
            self.remaining_moves -= 1;
        }
        let requires_suggestion = self.mansion.is_main_room(to);

        let p = &mut self.players[player.0];
        p.position = to;
        if requires_suggestion {
            p.must_suggest = true;
        }
        debug!(player = %p.name, from = room_name(from), to = room_name(to), used_secret_passage, "moved");

        Ok(MoveOutcome {
            from,
            to,
            used_secret_passage,
            remaining_moves: self.remaining_moves,
            requires_suggestion,
        })
    }

    /// Suggest `character` with `weapon` in the player's current room. Both
    /// tokens are pulled into the room. Hands and the solution are not
    /// consulted.
    pub fn make_suggestion(
        &mut self,
        player: PlayerId,
        character: &str,
        weapon: &str,
    ) -> Result<SuggestionOutcome, TurnError> {
        self.check_turn(player)?;
        let room = self.players[player.0].position;
        if !self.mansion.is_main_room(room) {
            return Err(TurnError::NotInMainRoom);
        }

        let character_id = self.mansion.character_by_name(character)
            .ok_or_else(|| TurnError::CharacterNotFound {
                name: character.to_string(),
                available: CHARACTERS.iter().map(|c| c.name).collect::<Vec<_>>().join(", "),
            })?;
        let weapon_id = self.mansion.weapon_by_name(weapon)
            .ok_or_else(|| TurnError::WeaponNotFound {
                name: weapon.to_string(),
                available: WEAPONS.iter().map(|w| w.name).collect::<Vec<_>>().join(", "),
            })?;

        let relocation = self.mansion.resolve_suggestion(character_id, weapon_id, room);
        self.players[player.0].must_suggest = false;

        let outcome = SuggestionOutcome {
            character: character_id,
            weapon: weapon_id,
            room,
            character_moved: relocation.character_moved,
            weapon_moved: relocation.weapon_moved,
        };
        debug!(player = %self.players[player.0].name, ?outcome, "suggestion resolved");
        Ok(outcome)
    }

    /// Finish the current player's turn. Refused before the roll and while
    /// a suggestion is owed. Returns the incoming player.
    pub fn end_turn(&mut self) -> Result<PlayerId, TurnError> {
        if self.current_player().must_suggest {
            return Err(TurnError::SuggestionPending);
        }
        if !self.rolled {
            return Err(TurnError::RollRequired);
        }
        self.next_turn();
        Ok(self.current_player_id())
    }

    /// Hand the turn to the next player, wrapping after the last.
    pub(crate) fn next_turn(&mut self) {
        self.current_player_index = (self.current_player_index + 1) % self.players.len();
        self.turn_count += 1;
        self.remaining_moves = 0;
        self.rolled = false;
        self.players[self.current_player_index].must_suggest = false;
        info!(turn = self.turn_count + 1, player = %self.current_player().name, "turn passed");
    }

    fn check_turn(&self, player: PlayerId) -> Result<(), TurnError> {
        let p = self.players.get(player.0).ok_or(TurnError::UnknownPlayer(player))?;
        if player.0 != self.current_player_index {
            return Err(TurnError::NotYourTurn(p.name.clone()));
        }
        Ok(())
    }

    // ── Queries / formatting ───────────────────────────────────────────

    pub fn available_moves(&self, player: PlayerId) -> Vec<&'static str> {
        self.player(player)
            .map(|p| self.mansion.next_moves(p.position).into_iter().map(room_name).collect())
            .unwrap_or_default()
    }

    pub fn display_player_status(&self, player: PlayerId) -> String {
        let Some(p) = self.player(player) else {
            return TurnError::UnknownPlayer(player).to_string();
        };
        let mut status = format!("\n=== {} ({}) ===\n", p.name, character_name(p.character));
        status.push_str(&format!("Position: {}\n", room_name(p.position)));
        status.push_str(&format!("Moves remaining: {}\n", self.remaining_moves));
        if p.must_suggest {
            status.push_str("YOU MUST MAKE A SUGGESTION (entered a room)\n");
        }
        status.push_str(&format!("Your cards: {}\n", hand_names(&p.cards)));
        status.push_str(&self.mansion.display_room_info(p.position));
        status.push_str(&format!("\nAvailable moves: {}\n", self.available_moves(player).join(", ")));
        status
    }

    pub fn display_game_state(&self) -> String {
        let names: Vec<&str> = self.players.iter().map(|p| p.name.as_str()).collect();
        let mut state = format!("\n=== Game State (Turn {}) ===\n", self.turn_count + 1);
        state.push_str(&format!("Current player: {}\n", self.current_player().name));
        state.push_str(&format!("Total players: {}\n", self.players.len()));
        state.push_str(&format!("Players: {}\n", names.join(", ")));
        state
    }

    /// One line per player: who plays whom, and where they start.
    pub fn starting_positions(&self) -> Vec<String> {
        self.players.iter()
            .map(|p| {
                let def = &CHARACTERS[p.character.0 as usize];
                format!("{} ({}, {}) starts in {}", p.name, def.name, def.color, room_name(def.starting_room))
            })
            .collect()
    }
}
