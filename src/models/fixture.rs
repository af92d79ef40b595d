//! Fixture, TeamSlot, and FixtureError.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a fixture. Knockout fixtures are linked through it.
pub type FixtureId = Uuid;

/// Errors that can occur while generating or updating fixtures.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FixtureError {
    /// Fewer than 2 teams (or no groups at all).
    InvalidTeamCount { count: usize },
    /// The same team id was supplied twice.
    DuplicateTeam(TeamId),
    /// A team id was empty or whitespace.
    EmptyTeamId,
    /// No fixture with this id in the given list.
    FixtureNotFound(FixtureId),
    /// The team does not play in the fixture it was declared winner of.
    TeamNotInFixture { fixture_id: FixtureId, team_id: TeamId },
    /// The fixture is a final (or league match) and feeds no later fixture.
    NoNextMatch(FixtureId),
    /// The winner's opponent is still to be decided, so the fixture has not been played.
    UndecidedOpponent(FixtureId),
    /// The next fixture's slot already holds a different team.
    SlotTaken { fixture_id: FixtureId, team_id: TeamId },
}

impl std::fmt::Display for FixtureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FixtureError::InvalidTeamCount { count } => {
                write!(f, "Need at least 2 teams to generate fixtures (got {})", count)
            }
            FixtureError::DuplicateTeam(id) => write!(f, "Team {} was entered more than once", id),
            FixtureError::EmptyTeamId => write!(f, "Team id must not be empty"),
            FixtureError::FixtureNotFound(id) => write!(f, "Fixture {} not found", id),
            FixtureError::TeamNotInFixture { fixture_id, team_id } => {
                write!(f, "Team {} does not play in fixture {}", team_id, fixture_id)
            }
            FixtureError::NoNextMatch(id) => write!(f, "Fixture {} has no next match", id),
            FixtureError::UndecidedOpponent(id) => {
                write!(f, "Fixture {} still has an undecided opponent", id)
            }
            FixtureError::SlotTaken { fixture_id, team_id } => {
                write!(f, "Fixture {} already has team {} in that slot", fixture_id, team_id)
            }
        }
    }
}

impl std::error::Error for FixtureError {}

/// One side of a fixture.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "team_id", rename_all = "snake_case")]
pub enum TeamSlot {
    /// A known team.
    Team(TeamId),
    /// No opponent in this round: the other side gets a walkover.
    Bye,
    /// Filled in later by the winner of an earlier fixture.
    #[default]
    ToBeDecided,
}

impl TeamSlot {
    /// Nullable view of the slot (what a persistence layer stores as `team_x_id`).
    pub fn team_id(&self) -> Option<&TeamId> {
        match self {
            TeamSlot::Team(id) => Some(id),
            TeamSlot::Bye | TeamSlot::ToBeDecided => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, TeamSlot::Bye)
    }
}

/// One scheduled match slot.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub team_a: TeamSlot,
    pub team_b: TeamSlot,
    /// 1-based, earliest round first.
    pub round_number: u32,
    /// Global sequential ordering across all rounds (and groups).
    pub match_number: u32,
    /// "Round N", "Quarter Final", "Semi Final", "Final" or "Round of K".
    pub round_name: String,
    pub group_name: Option<String>,
    /// Fixture that receives this fixture's winner (knockout only).
    pub next_match_id: Option<FixtureId>,
    /// Whether the winner takes the A slot (true) or the B slot (false) of `next_match_id`.
    pub is_team_a_winner_slot: Option<bool>,
}

impl Fixture {
    /// A fixture with a fresh id and no forward link.
    pub fn new(
        team_a: TeamSlot,
        team_b: TeamSlot,
        round_number: u32,
        match_number: u32,
        round_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_a,
            team_b,
            round_number,
            match_number,
            round_name: round_name.into(),
            group_name: None,
            next_match_id: None,
            is_team_a_winner_slot: None,
        }
    }

    pub fn team_a_id(&self) -> Option<&TeamId> {
        self.team_a.team_id()
    }

    pub fn team_b_id(&self) -> Option<&TeamId> {
        self.team_b.team_id()
    }

    /// The slot facing `team_id`, if that team plays in this fixture.
    pub fn opponent_of(&self, team_id: &str) -> Option<&TeamSlot> {
        if self.team_a_id().is_some_and(|id| id == team_id) {
            Some(&self.team_b)
        } else if self.team_b_id().is_some_and(|id| id == team_id) {
            Some(&self.team_a)
        } else {
            None
        }
    }

    /// True if the given team occupies either slot.
    pub fn involves(&self, team_id: &str) -> bool {
        self.team_a_id().is_some_and(|id| id == team_id)
            || self.team_b_id().is_some_and(|id| id == team_id)
    }

    /// The sole team of a bye fixture, if this is one (one team against a bye).
    pub fn walkover_team(&self) -> Option<&TeamId> {
        match (&self.team_a, &self.team_b) {
            (TeamSlot::Team(id), TeamSlot::Bye) | (TeamSlot::Bye, TeamSlot::Team(id)) => Some(id),
            _ => None,
        }
    }
}
