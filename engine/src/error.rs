//! Error types for game setup and turn actions.
//!
//! Turn errors are ordinary game events, not faults: the `Display` text is
//! the message shown to the player and the game state is left untouched.

use crate::types::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("Players must be between 3 and 6 (got {0})")]
    InvalidPlayerCount(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("Roll the dice before acting.")]
    RollRequired,

    #[error("You have already rolled this turn.")]
    AlreadyRolled,

    #[error("Your turn is over.")]
    NoMovesRemaining,

    #[error("It is not {0}'s turn.")]
    NotYourTurn(String),

    #[error("No such player: {0:?}")]
    UnknownPlayer(PlayerId),

    #[error("You entered a room and must make a suggestion first.")]
    SuggestionPending,

    #[error("Room '{0}' not found.")]
    RoomNotFound(String),

    #[error("Cannot move to {to} from {from}.")]
    InvalidMove { from: String, to: String },

    #[error("You can only make suggestions in main rooms, not hallways.")]
    NotInMainRoom,

    #[error("Character '{name}' not found. Available: {available}")]
    CharacterNotFound { name: String, available: String },

    #[error("Weapon '{name}' not found. Available: {available}")]
    WeaponNotFound { name: String, available: String },
}
