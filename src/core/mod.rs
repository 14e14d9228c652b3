//! Core engine types: teams, card categories, RNG, configuration, errors.
//!
//! This module holds the vocabulary shared by the board, the session state
//! machine and rendering.

pub mod team;
pub mod rng;
pub mod config;
pub mod error;

pub use team::{CardCategory, Team};
pub use rng::GameRng;
pub use config::{
    SessionConfig, ASSASSIN_CARD_COUNT, BOARD_SIZE, BYSTANDER_CARD_COUNT, CARD_COUNT,
    REVEALED_CARD_TOKEN, TEAM_CARD_COUNT,
};
pub use error::{DeckError, GameError, Result, SetupError};
