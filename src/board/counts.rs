//! Scoreboard tallies.

use serde::{Deserialize, Serialize};

use crate::core::{CardCategory, Team};

/// Revealed and hidden card counts per category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCounts {
    revealed: [usize; 4],
    hidden: [usize; 4],
}

impl CardCounts {
    pub(crate) fn record(&mut self, category: CardCategory, revealed: bool) {
        if revealed {
            self.revealed[category.index()] += 1;
        } else {
            self.hidden[category.index()] += 1;
        }
    }

    #[must_use]
    pub fn revealed(&self, category: CardCategory) -> usize {
        self.revealed[category.index()]
    }

    #[must_use]
    pub fn hidden(&self, category: CardCategory) -> usize {
        self.hidden[category.index()]
    }

    /// Total cards of a category on the board.
    #[must_use]
    pub fn total(&self, category: CardCategory) -> usize {
        self.revealed(category) + self.hidden(category)
    }

    /// Revealed count for a team's agents.
    #[must_use]
    pub fn team_revealed(&self, team: Team) -> usize {
        self.revealed(team.card_category())
    }

    /// Hidden count for a team's agents.
    #[must_use]
    pub fn team_hidden(&self, team: Team) -> usize {
        self.hidden(team.card_category())
    }
}
