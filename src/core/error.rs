//! Error types for the game engine.
//!
//! Every engine error is local and recoverable: a failed operation leaves
//! the session exactly as it was. Only a word pool that cannot be loaded
//! prevents a session from being created.

use std::path::PathBuf;

use thiserror::Error;

use super::team::Team;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

/// Problems with a word pool.
#[derive(Error, Debug)]
pub enum DeckError {
    /// The same word (ignoring case) appears more than once.
    #[error("deck must be composed of unique words, '{0}' appears twice")]
    DuplicateWord(String),

    /// Not enough usable words to fill the board.
    #[error("deck has {available} usable words, {required} are required")]
    TooSmall { available: usize, required: usize },

    #[error("failed to read word deck {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse word deck {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Reasons `start()` refuses to begin a game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("{team} must have at least {minimum} players")]
    TeamTooSmall { team: Team, minimum: usize },

    #[error("{0} must have a spymaster")]
    MissingSpymaster(Team),
}

/// Engine-wide error type.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("invalid deck: {0}")]
    InvalidDeck(#[from] DeckError),

    #[error("card at ({row}, {col}) has already been revealed")]
    AlreadyRevealed { row: usize, col: usize },

    #[error("searching for the revealed token is not supported")]
    InvalidSearch,

    #[error("({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("'{0}' is not on the board")]
    WordNotOnBoard(String),

    #[error("{player} must be in the {team} in order to become its spymaster")]
    NotOnTeam { player: String, team: Team },

    #[error("{0} is not participating in the game")]
    NotAPlayer(String),

    #[error("{0} is already participating in the game")]
    AlreadyPlaying(String),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error("can only do that while setting up the game")]
    NotSetup,

    #[error("game hasn't been started yet")]
    NotStarted,

    #[error("game has already concluded, and the {winner} was victorious")]
    AlreadyFinished { winner: Team },

    #[error("invalid clue: {0}")]
    InvalidClue(String),

    #[error("it is not {player}'s turn")]
    NotYourTurn { player: String },

    #[error("{player} is a spymaster and can't touch cards")]
    SpymasterCannotReveal { player: String },

    #[error("{player} is not the moving team's spymaster")]
    NotSpymaster { player: String },
}

impl GameError {
    /// True for the two "action outside of play" variants.
    #[must_use]
    pub fn is_not_in_progress(&self) -> bool {
        matches!(self, GameError::NotStarted | GameError::AlreadyFinished { .. })
    }
}
