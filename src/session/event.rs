//! Session phases and reveal outcomes.

use serde::{Deserialize, Serialize};

use crate::core::Team;

/// Lifecycle of a session: `Setup -> InProgress -> Finished`, back to
/// `Setup` only through `reset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Setup,
    InProgress,
    Finished,
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// The moving team touched the assassin.
    Assassin,
    /// The winner's last agent was revealed.
    AllAgentsFound,
}

/// Outcome of revealing one card.
///
/// The session never rotates the turn on its own; callers react to
/// `EndTurnBystander` and `EndTurnEnemy` by calling `next_turn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnEvent {
    /// The mover found one of their own agents and keeps guessing.
    ContinueTurn,
    /// A bystander was revealed.
    EndTurnBystander,
    /// An opposing agent was revealed, but not the opponent's last one.
    EndTurnEnemy,
    /// The game is over.
    EndGame { winner: Team, reason: EndReason },
}

impl TurnEvent {
    /// True when the caller should hand the turn to the other team.
    #[must_use]
    pub fn ends_turn(&self) -> bool {
        matches!(self, TurnEvent::EndTurnBystander | TurnEvent::EndTurnEnemy)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, TurnEvent::EndGame { .. })
    }
}
