//! Board generation and card reveals.
//!
//! The board owns the word grid and the secret key. It knows nothing about
//! turns or teams' rosters; the session drives it.

pub mod deck;
pub mod grid;
pub mod counts;

pub use counts::CardCounts;
pub use deck::WordDeck;
pub use grid::{Board, Card, Position};
