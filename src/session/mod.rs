//! Game sessions: the state machine driving one game.
//!
//! A `GameSession` owns the rosters, the turn order and the active board.
//! It reports the outcome of each reveal as a `TurnEvent`; deciding when to
//! pass the turn is left to the caller.
//!
//! `SessionRegistry` keeps one session per key for adapters that host many
//! games at once.

pub mod event;
pub mod roster;
pub mod clue;
pub mod game;
pub mod registry;

pub use clue::{Clue, ClueCount, MAX_CLUE_COUNT};
pub use event::{EndReason, Phase, TurnEvent};
pub use game::GameSession;
pub use registry::{lock, SessionRegistry, SharedSession};
pub use roster::Rosters;
