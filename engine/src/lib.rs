pub mod types;
pub mod layout;
pub mod cards;
pub mod error;
pub mod mansion;
pub mod game;
pub mod setup;
pub mod visibility;


pub use types::*;
pub use error::{SetupError, TurnError};
pub use game::{Game, MoveOutcome, SuggestionOutcome};
pub use mansion::Mansion;
pub use setup::{create_game, GameConfig};
