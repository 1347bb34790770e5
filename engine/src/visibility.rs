// ═══════════════════════════════════════════════════════════════════════
// Visibility / Information Model
//
//   PUBLIC  — token positions, player positions, hand sizes, turn state
//   PRIVATE — the viewer's own hand
//   HIDDEN  — the solution and every other player's cards
//
// A PlayerView is what the front-end may show to one player.
// ═══════════════════════════════════════════════════════════════════════

use crate::game::Game;
use crate::layout::{character_name, room_name, weapon_name, CHARACTERS, WEAPONS};
use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub viewer: String,
    pub turn: u32,
    pub current_player: String,
    pub phase: TurnPhase,
    pub remaining_moves: u8,
    pub players: Vec<PublicPlayer>,
    pub my_cards: Vec<String>,
    pub must_suggest: bool,
    pub characters: Vec<TokenLocation>,
    pub weapons: Vec<TokenLocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicPlayer {
    pub name: String,
    pub character: String,
    pub position: String,
    pub card_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenLocation {
    pub name: String,
    pub room: Option<String>,
}

impl PlayerView {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the view for `viewer`, or None if there is no such player.
pub fn player_view(game: &Game, viewer: PlayerId) -> Option<PlayerView> {
    let me = game.player(viewer)?;
    let mansion = game.mansion();

    let players = game.players().iter()
        .map(|p| PublicPlayer {
            name: p.name.clone(),
            character: character_name(p.character).to_string(),
            position: room_name(p.position).to_string(),
            card_count: p.cards.len(),
        })
        .collect();

    let characters = CHARACTERS.iter()
        .map(|c| TokenLocation {
            name: c.name.to_string(),
            room: Some(room_name(mansion.character_room(c.id)).to_string()),
        })
        .collect();

    let weapons = WEAPONS.iter()
        .map(|w| TokenLocation {
            name: weapon_name(w.id).to_string(),
            room: mansion.weapon_room(w.id).map(|r| room_name(r).to_string()),
        })
        .collect();

    Some(PlayerView {
        viewer: me.name.clone(),
        turn: game.turn_count() + 1,
        current_player: game.current_player().name.clone(),
        phase: game.phase(),
        remaining_moves: game.remaining_moves(),
        players,
        my_cards: me.cards.iter().map(|c| c.name().to_string()).collect(),
        must_suggest: me.must_suggest,
        characters,
        weapons,
    })
}
