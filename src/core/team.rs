//! Team colors and card categories.
//!
//! ## Team
//!
//! The two competing sides. Every team owns exactly one card category.
//!
//! ## CardCategory
//!
//! The secret identity of a board card: one of the two team colors, a
//! neutral bystander, or the assassin.

use serde::{Deserialize, Serialize};

/// One of the two competing teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    /// Both teams, red first.
    pub const ALL: [Team; 2] = [Team::Red, Team::Blue];

    /// The opposing team, used when switching turns.
    ///
    /// ```
    /// use codenames_engine::core::Team;
    ///
    /// assert_eq!(Team::Red.other(), Team::Blue);
    /// assert_eq!(Team::Blue.other().other(), Team::Blue);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }

    /// The card category belonging to this team.
    #[must_use]
    pub const fn card_category(self) -> CardCategory {
        match self {
            Team::Red => CardCategory::Red,
            Team::Blue => CardCategory::Blue,
        }
    }

    /// Lowercase color name.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Team::Red => "red",
            Team::Blue => "blue",
        }
    }

    /// Dense index for array-backed per-team storage.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Team::Red => 0,
            Team::Blue => 1,
        }
    }

    /// Parse a color name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_color(color: &str) -> Option<Self> {
        match color.trim().to_ascii_lowercase().as_str() {
            "red" => Some(Team::Red),
            "blue" => Some(Team::Blue),
            _ => None,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Red => write!(f, "Red team"),
            Team::Blue => write!(f, "Blue team"),
        }
    }
}

/// Secret category of a board card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardCategory {
    Red,
    Blue,
    Bystander,
    Assassin,
}

impl CardCategory {
    /// All categories in a stable order.
    pub const ALL: [CardCategory; 4] = [
        CardCategory::Red,
        CardCategory::Blue,
        CardCategory::Bystander,
        CardCategory::Assassin,
    ];

    /// The team owning this category, `None` for bystanders and the assassin.
    #[must_use]
    pub const fn team(self) -> Option<Team> {
        match self {
            CardCategory::Red => Some(Team::Red),
            CardCategory::Blue => Some(Team::Blue),
            CardCategory::Bystander | CardCategory::Assassin => None,
        }
    }

    /// Single-letter tag used in spoiler views.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            CardCategory::Red => 'R',
            CardCategory::Blue => 'B',
            CardCategory::Bystander => 'W',
            CardCategory::Assassin => 'X',
        }
    }

    /// Dense index for array-backed per-category storage.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            CardCategory::Red => 0,
            CardCategory::Blue => 1,
            CardCategory::Bystander => 2,
            CardCategory::Assassin => 3,
        }
    }
}

impl std::fmt::Display for CardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardCategory::Red => "red",
            CardCategory::Blue => "blue",
            CardCategory::Bystander => "bystander",
            CardCategory::Assassin => "assassin",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_other() {
        assert_eq!(Team::Red.other(), Team::Blue);
        assert_eq!(Team::Blue.other(), Team::Red);
        for team in Team::ALL {
            assert_eq!(team.other().other(), team);
        }
    }

    #[test]
    fn test_team_category_roundtrip() {
        for team in Team::ALL {
            assert_eq!(team.card_category().team(), Some(team));
        }
        assert_eq!(CardCategory::Bystander.team(), None);
        assert_eq!(CardCategory::Assassin.team(), None);
    }

    #[test]
    fn test_from_color() {
        assert_eq!(Team::from_color("red"), Some(Team::Red));
        assert_eq!(Team::from_color(" BLUE "), Some(Team::Blue));
        assert_eq!(Team::from_color("GRU"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Team::Red), "Red team");
        assert_eq!(format!("{}", CardCategory::Bystander), "bystander");
    }

    #[test]
    fn test_category_indices_are_dense() {
        let indices: Vec<_> = CardCategory::ALL.iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Team::Blue).unwrap();
        assert_eq!(json, "\"blue\"");
        let category: CardCategory = serde_json::from_str("\"assassin\"").unwrap();
        assert_eq!(category, CardCategory::Assassin);
    }
}
