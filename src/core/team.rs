//! Teams and their scores.
//!
//! ## Team
//!
//! A display name plus the cumulative points awarded to it.
//!
//! ## Roster
//!
//! Ordered team storage. Insertion order is both display order and turn
//! order. Names and scores live in the same entry, so adding or removing a
//! team can never leave the two out of step.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

/// A single team.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    /// Display name. Not required to be unique.
    pub name: String,

    /// Points awarded so far.
    pub score: u32,
}

impl Team {
    /// Create a team with zero points.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.score)
    }
}

/// Ordered list of teams, indexed from 0.
///
/// ## Example
///
/// ```
/// use alias_engine::core::Roster;
///
/// let mut roster = Roster::from_names(["Crocodiles", "Duckies"]);
/// roster.push("Owls");
///
/// assert_eq!(roster.len(), 3);
/// assert_eq!(roster[2].name, "Owls");
/// assert_eq!(roster.scores().collect::<Vec<_>>(), vec![0, 0, 0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roster {
    teams: SmallVec<[Team; 4]>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a roster from names, every team starting at zero points.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            teams: names.into_iter().map(Team::new).collect(),
        }
    }

    /// Number of teams.
    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Check if the roster has no teams.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Check if `index` refers to a team.
    #[must_use]
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.teams.len()
    }

    /// Get a team by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Team> {
        self.teams.get(index)
    }

    /// Get a mutable team by index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Team> {
        self.teams.get_mut(index)
    }

    /// Append a team with zero points. Duplicate names are allowed.
    pub fn push(&mut self, name: impl Into<String>) {
        self.teams.push(Team::new(name));
    }

    /// Remove the team at `index`, shifting later teams down by one.
    ///
    /// Returns `None` if the index is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Team> {
        if self.contains_index(index) {
            Some(self.teams.remove(index))
        } else {
            None
        }
    }

    /// Iterate over teams in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    /// Iterate over team names in turn order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.teams.iter().map(|t| t.name.as_str())
    }

    /// Iterate over scores in turn order.
    pub fn scores(&self) -> impl Iterator<Item = u32> + '_ {
        self.teams.iter().map(|t| t.score)
    }

    /// Highest score on the roster, `None` if empty.
    #[must_use]
    pub fn top_score(&self) -> Option<u32> {
        self.scores().max()
    }
}

impl Index<usize> for Roster {
    type Output = Team;

    fn index(&self, index: usize) -> &Self::Output {
        &self.teams[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_new() {
        let team = Team::new("Crocodiles");
        assert_eq!(team.name, "Crocodiles");
        assert_eq!(team.score, 0);
        assert_eq!(format!("{}", team), "Crocodiles (0)");
    }

    #[test]
    fn test_roster_from_names() {
        let roster = Roster::from_names(["A", "B", "C"]);

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.names().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(roster.scores().collect::<Vec<_>>(), vec![0, 0, 0]);
    }

    #[test]
    fn test_roster_push_allows_duplicates() {
        let mut roster = Roster::from_names(["A"]);
        roster.push("A");

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, roster[1].name);
    }

    #[test]
    fn test_roster_remove_shifts_down() {
        let mut roster = Roster::from_names(["A", "B", "C"]);
        roster.get_mut(2).unwrap().score = 3;

        let removed = roster.remove(0);

        assert_eq!(removed.map(|t| t.name), Some("A".to_string()));
        assert_eq!(roster.names().collect::<Vec<_>>(), vec!["B", "C"]);
        assert_eq!(roster[1].score, 3);
    }

    #[test]
    fn test_roster_remove_out_of_range() {
        let mut roster = Roster::from_names(["A", "B"]);

        assert!(roster.remove(2).is_none());
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_roster_contains_index() {
        let roster = Roster::from_names(["A", "B"]);

        assert!(roster.contains_index(0));
        assert!(roster.contains_index(1));
        assert!(!roster.contains_index(2));
        assert!(!Roster::new().contains_index(0));
    }

    #[test]
    fn test_roster_top_score() {
        let mut roster = Roster::from_names(["A", "B"]);
        assert_eq!(roster.top_score(), Some(0));

        roster.get_mut(1).unwrap().score = 4;
        assert_eq!(roster.top_score(), Some(4));

        assert_eq!(Roster::new().top_score(), None);
    }

    #[test]
    fn test_roster_serialization() {
        let mut roster = Roster::from_names(["A", "B"]);
        roster.get_mut(0).unwrap().score = 2;

        let json = serde_json::to_string(&roster).unwrap();
        let deserialized: Roster = serde_json::from_str(&json).unwrap();

        assert_eq!(roster, deserialized);
    }
}
