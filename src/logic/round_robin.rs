//! League stage: round-robin fixture generation (circle method).

use crate::logic::validate::{ensure_unique_ids, validate_teams};
use crate::models::{Fixture, FixtureError, Group, Team, TeamSlot};
use std::collections::HashSet;

/// Generate a single round robin: every pair of teams meets exactly once.
///
/// 1. With an odd team count, add a synthetic bye so the working size is even.
/// 2. Run `size - 1` rounds of `size / 2` slots; slot 0 keeps the last index fixed
///    while everyone else rotates.
/// 3. Drop any pairing against the bye (that team is idle for the round).
///
/// Deterministic: input order decides pairings. Shuffle first for random seeding.
pub fn generate_round_robin_fixtures(teams: &[Team]) -> Result<Vec<Fixture>, FixtureError> {
    validate_teams(teams)?;
    let mut fixtures = Vec::new();
    push_round_robin(teams, None, &mut fixtures);
    log::debug!(
        "Generated {} round-robin fixtures for {} teams",
        fixtures.len(),
        teams.len()
    );
    Ok(fixtures)
}

/// Generate a group stage: one round robin per group, tagged with the group name.
///
/// Round numbers restart at 1 in every group; match numbers keep counting across groups.
/// A team may only be in one group.
pub fn generate_group_stage_fixtures(groups: &[Group]) -> Result<Vec<Fixture>, FixtureError> {
    if groups.is_empty() {
        return Err(FixtureError::InvalidTeamCount { count: 0 });
    }
    let mut seen = HashSet::new();
    for group in groups {
        validate_teams(&group.teams)?;
        ensure_unique_ids(&group.teams, &mut seen)?;
    }

    let mut fixtures = Vec::new();
    for group in groups {
        push_round_robin(&group.teams, Some(&group.name), &mut fixtures);
    }
    log::debug!(
        "Generated {} group-stage fixtures across {} groups",
        fixtures.len(),
        groups.len()
    );
    Ok(fixtures)
}

/// Append one round robin over `teams` to `fixtures`, numbering matches after what is already there.
fn push_round_robin(teams: &[Team], group_name: Option<&str>, fixtures: &mut Vec<Fixture>) {
    // Index `teams.len()` stands for the bye when the count is odd.
    let bye = teams.len();
    let size = if teams.len() % 2 == 0 {
        teams.len()
    } else {
        teams.len() + 1
    };
    let rotating = size - 1;

    for round in 0..rotating {
        for slot in 0..size / 2 {
            let home = (round + slot) % rotating;
            let away = if slot == 0 {
                size - 1
            } else {
                (rotating - slot + round) % rotating
            };
            if home == bye || away == bye {
                continue;
            }
            let match_number = fixtures.len() as u32 + 1;
            let mut fixture = Fixture::new(
                TeamSlot::Team(teams[home].id.clone()),
                TeamSlot::Team(teams[away].id.clone()),
                round as u32 + 1,
                match_number,
                format!("Round {}", round + 1),
            );
            fixture.group_name = group_name.map(str::to_owned);
            fixtures.push(fixture);
        }
    }
}
