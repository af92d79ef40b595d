//! Team data structure (fixture generation input).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque team identifier supplied by the caller (usually a UUID string).
pub type TeamId = String;

/// A team entered in the tournament. Never created or destroyed by fixture generation.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

impl Team {
    /// Create a team with a fresh UUID id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }

    /// Create a team keeping a caller-supplied id (e.g. loaded from storage).
    pub fn with_id(id: impl Into<TeamId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A named group of teams for a group stage (each group plays its own round robin).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub teams: Vec<Team>,
}

impl Group {
    pub fn new(name: impl Into<String>, teams: Vec<Team>) -> Self {
        Self {
            name: name.into(),
            teams,
        }
    }
}
