// ═══════════════════════════════════════════════════════════════════════
// Core types — identifiers, categories, cards, players
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};

// ── Identifiers ────────────────────────────────────────────────────────
// Compact, copyable ids. Each one indexes a static table in `layout`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct RoomId(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct CharacterId(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct WeaponId(pub u8);

/// Index into `Game::players`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct PlayerId(pub usize);

// ── Enums ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomCategory {
    Main,
    Hallway,
}

impl std::fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomCategory::Main => write!(f, "Main Room"),
            RoomCategory::Hallway => write!(f, "Hallway"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    White,
    Green,
    Blue,
    Purple,
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Yellow => write!(f, "yellow"),
            Color::White => write!(f, "white"),
            Color::Green => write!(f, "green"),
            Color::Blue => write!(f, "blue"),
            Color::Purple => write!(f, "purple"),
        }
    }
}

/// Where a player's turn currently stands.
///
///   AwaitingRoll → Moving → MustSuggest → (Moving | TurnOver) → next player
///
/// Derived from controller state; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    AwaitingRoll,
    Moving,
    MustSuggest,
    TurnOver,
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnPhase::AwaitingRoll => write!(f, "awaiting roll"),
            TurnPhase::Moving => write!(f, "moving"),
            TurnPhase::MustSuggest => write!(f, "must suggest"),
            TurnPhase::TurnOver => write!(f, "turn over"),
        }
    }
}

// ── Cards ──────────────────────────────────────────────────────────────

/// A clue card. The printed name is the entity's name (see `cards`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum Card {
    Character(CharacterId),
    Weapon(WeaponId),
    Room(RoomId),
}

/// The hidden murder triple. Drawn once at setup, never re-drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub character: CharacterId,
    pub weapon: WeaponId,
    pub room: RoomId,
}

impl Solution {
    pub fn contains(&self, card: Card) -> bool {
        match card {
            Card::Character(c) => c == self.character,
            Card::Weapon(w) => w == self.weapon,
            Card::Room(r) => r == self.room,
        }
    }
}

// ── Player ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub character: CharacterId,
    /// Starts on the character's room, then moves only when the player moves.
    /// Suggestions relocate the character token, not the player.
    pub position: RoomId,
    pub cards: Vec<Card>,
    /// Set on entering a main room; cleared by a successful suggestion.
    pub must_suggest: bool,
}

impl Player {
    pub fn new(index: usize, character: CharacterId, position: RoomId) -> Self {
        Player {
            name: format!("Player {}", index + 1),
            character,
            position,
            cards: Vec::new(),
            must_suggest: false,
        }
    }
}
