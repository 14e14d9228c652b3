//! Team rosters and spymaster assignments.
//!
//! Two parallel per-team tables: the member set and an optional spymaster.
//! Every mutation keeps them consistent:
//! - a player is on at most one team,
//! - a spymaster is always a member of the team they lead.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameError, Result, Team};

/// Player rosters for both teams.
///
/// Member sets are `im::OrdSet` so snapshots clone in O(1) and iterate in a
/// stable order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rosters {
    members: [OrdSet<String>; 2],
    spymasters: [Option<String>; 2],
}

impl Rosters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player to a team, moving them off the other team if needed.
    ///
    /// Returns `false` if the player was already on `team`.
    pub fn add(&mut self, player: impl Into<String>, team: Team) -> bool {
        let player = player.into();
        if self.members[team.index()].contains(&player) {
            return false;
        }
        self.remove_from(&player, team.other());
        debug!(%player, %team, "player joined");
        self.members[team.index()].insert(player);

        debug_assert!(self.is_consistent());
        true
    }

    /// Remove a player from whichever team holds them.
    pub fn remove(&mut self, player: &str) -> Option<Team> {
        let team = self.team_of(player)?;
        self.remove_from(player, team);
        debug!(player, %team, "player left");

        debug_assert!(self.is_consistent());
        Some(team)
    }

    fn remove_from(&mut self, player: &str, team: Team) {
        if self.members[team.index()].remove(player).is_some()
            && self.spymasters[team.index()].as_deref() == Some(player)
        {
            self.spymasters[team.index()] = None;
        }
    }

    /// Make a member of `team` its spymaster.
    pub fn set_spymaster(&mut self, team: Team, player: &str) -> Result<()> {
        if !self.members[team.index()].contains(player) {
            return Err(GameError::NotOnTeam {
                player: player.to_string(),
                team,
            });
        }
        self.spymasters[team.index()] = Some(player.to_string());
        debug!(player, %team, "spymaster assigned");
        Ok(())
    }

    /// Replace both teams wholesale. Spymasters not on their team are dropped.
    pub(crate) fn assign(
        &mut self,
        red: impl IntoIterator<Item = String>,
        blue: impl IntoIterator<Item = String>,
        spymasters: [Option<String>; 2],
    ) {
        self.members = [red.into_iter().collect(), blue.into_iter().collect()];
        self.spymasters = [None, None];
        for (team, spymaster) in Team::ALL.into_iter().zip(spymasters) {
            if let Some(player) = spymaster {
                if self.members[team.index()].contains(&player) {
                    self.spymasters[team.index()] = Some(player);
                }
            }
        }
        debug_assert!(self.is_consistent());
    }

    #[must_use]
    pub fn team_of(&self, player: &str) -> Option<Team> {
        Team::ALL
            .into_iter()
            .find(|team| self.members[team.index()].contains(player))
    }

    #[must_use]
    pub fn spymaster(&self, team: Team) -> Option<&str> {
        self.spymasters[team.index()].as_deref()
    }

    /// The team a player leads, if they are a spymaster.
    #[must_use]
    pub fn spymaster_of(&self, player: &str) -> Option<Team> {
        Team::ALL
            .into_iter()
            .find(|team| self.spymaster(*team) == Some(player))
    }

    #[must_use]
    pub fn members(&self, team: Team) -> &OrdSet<String> {
        &self.members[team.index()]
    }

    #[must_use]
    pub fn team_size(&self, team: Team) -> usize {
        self.members[team.index()].len()
    }

    /// Every player, red team first.
    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.members.iter().flat_map(|set| set.iter().map(String::as_str))
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.members.iter().map(OrdSet::len).sum()
    }

    /// Check the roster invariants.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let disjoint = self.members[0].clone().intersection(self.members[1].clone()).is_empty();
        let spymasters_are_members = Team::ALL.into_iter().all(|team| {
            self.spymaster(team)
                .map_or(true, |player| self.members[team.index()].contains(player))
        });
        disjoint && spymasters_are_members
    }
}
