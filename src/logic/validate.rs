//! Input checks shared by the fixture generators.

use crate::models::{FixtureError, Team};
use std::collections::HashSet;

/// Minimum number of teams for any format.
pub const MIN_TEAMS: usize = 2;

/// Fail fast on a team list no generator can schedule: fewer than 2 teams, blank ids, repeated ids.
pub fn validate_teams(teams: &[Team]) -> Result<(), FixtureError> {
    if teams.len() < MIN_TEAMS {
        return Err(FixtureError::InvalidTeamCount { count: teams.len() });
    }
    ensure_unique_ids(teams, &mut HashSet::new())
}

/// Check ids against (and record them in) `seen`, so callers can validate several lists together.
pub(crate) fn ensure_unique_ids<'a>(
    teams: &'a [Team],
    seen: &mut HashSet<&'a str>,
) -> Result<(), FixtureError> {
    for team in teams {
        if team.id.trim().is_empty() {
            return Err(FixtureError::EmptyTeamId);
        }
        if !seen.insert(team.id.as_str()) {
            return Err(FixtureError::DuplicateTeam(team.id.clone()));
        }
    }
    Ok(())
}
