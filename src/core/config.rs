//! Session configuration and fixed board dimensions.
//!
//! Adapters configure a session at creation by providing a
//! `SessionConfig`. The board layout itself is fixed by the game rules
//! and exposed as constants.

use serde::{Deserialize, Serialize};

/// Rows and columns of the square board.
pub const BOARD_SIZE: usize = 5;

/// Total number of cards on the board.
pub const CARD_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Cards owned by the team that moves second. The starting team gets one extra.
pub const TEAM_CARD_COUNT: usize = 8;

/// Neutral cards on the board.
pub const BYSTANDER_CARD_COUNT: usize = 7;

/// Assassin cards on the board.
pub const ASSASSIN_CARD_COUNT: usize = 1;

/// Token shown in place of a revealed card's word.
pub const REVEALED_CARD_TOKEN: &str = "#####";

/// Per-session settings.
///
/// ## Example
///
/// ```
/// use codenames_engine::core::SessionConfig;
///
/// let config = SessionConfig::default()
///     .with_min_players_per_team(3)
///     .with_seed(7);
///
/// assert_eq!(config.min_players_per_team, 3);
/// assert!(!config.debug);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Players each team needs before the game can start.
    pub min_players_per_team: usize,

    /// Skip roster checks at start and let spymasters touch cards.
    pub debug: bool,

    /// Characters per cell when rendering plain rows.
    pub column_width: usize,

    /// Fixed seed for reproducible sessions. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_players_per_team: 2,
            debug: false,
            column_width: 15,
            seed: None,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_min_players_per_team(mut self, count: usize) -> Self {
        self.min_players_per_team = count;
        self
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn with_column_width(mut self, width: usize) -> Self {
        self.column_width = width;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
