//! # codenames-engine
//!
//! The game engine behind a chat-bot Codenames plugin.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: No chat protocol, command parsing or text
//!    decoration. Adapters call the engine and render its results.
//!
//! 2. **Deterministic**: All randomness flows through a seeded `GameRng`,
//!    so a seed reproduces a game exactly.
//!
//! 3. **Events, not side effects**: Reveals return a `TurnEvent`; the
//!    caller decides when the turn passes.
//!
//! ## Modules
//!
//! - `core`: Teams, card categories, RNG, configuration, errors
//! - `board`: Word decks, the 5×5 board and reveal bookkeeping
//! - `session`: The phase state machine, rosters, clues, session registry
//! - `render`: Plain projections of the board for any presentation layer

pub mod core;
pub mod board;
pub mod session;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    CardCategory, DeckError, GameError, GameRng, Result, SessionConfig, SetupError, Team,
    BOARD_SIZE, CARD_COUNT, REVEALED_CARD_TOKEN,
};

pub use crate::board::{Board, Card, CardCounts, Position, WordDeck};

pub use crate::session::{
    Clue, ClueCount, EndReason, GameSession, Phase, Rosters, SessionRegistry, SharedSession,
    TurnEvent,
};

pub use crate::render::{BoardView, CellView, ViewMode};
