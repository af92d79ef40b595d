//! Knockout stage: single-elimination bracket generation and winner propagation.

use crate::logic::validate::validate_teams;
use crate::models::{Fixture, FixtureError, FixtureId, Team, TeamId, TeamSlot};

/// Smallest power of two that is >= `n` (1 for 0).
pub fn next_power_of_two(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

/// Display name for a round contested by `size` teams.
pub fn knockout_round_name(size: usize) -> String {
    match size {
        2 => "Final".to_string(),
        4 => "Semi Final".to_string(),
        8 => "Quarter Final".to_string(),
        _ => format!("Round of {}", size),
    }
}

/// Generate every fixture of a single-elimination bracket for `teams`.
///
/// The bracket is sized to `P = next_power_of_two(teams.len())`, giving `P - 1` fixtures.
/// Each round is created with empty slots, then the previous round is linked to it:
/// fixture `i` feeds fixture `i / 2`, even `i` into slot A and odd `i` into slot B.
/// Finally round 1 is filled from the input order. The `P - N` byes take the B slot of
/// the last round-1 fixtures; those fixtures are walkovers the caller resolves
/// (see `advance_walkovers`).
pub fn generate_knockout_fixtures(teams: &[Team]) -> Result<Vec<Fixture>, FixtureError> {
    validate_teams(teams)?;
    let bracket_size = next_power_of_two(teams.len());

    let mut fixtures: Vec<Fixture> = Vec::with_capacity(bracket_size - 1);
    let mut previous_round: Option<std::ops::Range<usize>> = None;
    let mut round_number = 1;
    let mut round_size = bracket_size;

    while round_size >= 2 {
        let start = fixtures.len();
        for _ in 0..round_size / 2 {
            let match_number = fixtures.len() as u32 + 1;
            fixtures.push(Fixture::new(
                TeamSlot::ToBeDecided,
                TeamSlot::ToBeDecided,
                round_number,
                match_number,
                knockout_round_name(round_size),
            ));
        }
        let current_round = start..fixtures.len();

        if let Some(prev) = previous_round {
            for (i, idx) in prev.enumerate() {
                let target = fixtures[current_round.start + i / 2].id;
                let fixture = &mut fixtures[idx];
                fixture.next_match_id = Some(target);
                fixture.is_team_a_winner_slot = Some(i % 2 == 0);
            }
        }

        previous_round = Some(current_round);
        round_number += 1;
        round_size /= 2;
    }

    seed_first_round(&mut fixtures[..bracket_size / 2], teams);

    log::debug!(
        "Generated {} knockout fixtures for {} teams ({} byes)",
        fixtures.len(),
        teams.len(),
        bracket_size - teams.len()
    );
    Ok(fixtures)
}

/// Fill round 1: full fixtures first in input order, then one team plus a bye per remaining fixture.
fn seed_first_round(first_round: &mut [Fixture], teams: &[Team]) {
    let byes = first_round.len() * 2 - teams.len();
    let full = first_round.len() - byes;
    let mut entrants = teams.iter().map(|t| TeamSlot::Team(t.id.clone()));

    for (i, fixture) in first_round.iter_mut().enumerate() {
        fixture.team_a = entrants.next().unwrap_or(TeamSlot::Bye);
        fixture.team_b = if i < full {
            entrants.next().unwrap_or(TeamSlot::Bye)
        } else {
            TeamSlot::Bye
        };
    }
}

/// Write `winner_id` into the slot of the fixture that `fixture_id` feeds.
///
/// The winner's opponent must be a known team or a bye; a `ToBeDecided` opponent means the
/// fixture has not been played. The target slot must be empty or already hold the winner.
pub fn advance_winner(
    fixtures: &mut [Fixture],
    fixture_id: FixtureId,
    winner_id: &str,
) -> Result<(), FixtureError> {
    let fixture = fixtures
        .iter()
        .find(|f| f.id == fixture_id)
        .ok_or(FixtureError::FixtureNotFound(fixture_id))?;
    let opponent = fixture
        .opponent_of(winner_id)
        .ok_or_else(|| FixtureError::TeamNotInFixture {
            fixture_id,
            team_id: winner_id.to_string(),
        })?;
    if *opponent == TeamSlot::ToBeDecided {
        return Err(FixtureError::UndecidedOpponent(fixture_id));
    }
    let (next_id, slot_a) = match (fixture.next_match_id, fixture.is_team_a_winner_slot) {
        (Some(next), Some(slot_a)) => (next, slot_a),
        _ => return Err(FixtureError::NoNextMatch(fixture_id)),
    };

    let next = fixtures
        .iter_mut()
        .find(|f| f.id == next_id)
        .ok_or(FixtureError::FixtureNotFound(next_id))?;
    let target = if slot_a {
        &mut next.team_a
    } else {
        &mut next.team_b
    };
    if let TeamSlot::Team(existing) = &*target {
        if existing != winner_id {
            return Err(FixtureError::SlotTaken {
                fixture_id: next_id,
                team_id: existing.clone(),
            });
        }
    }
    *target = TeamSlot::Team(winner_id.to_string());
    log::debug!(
        "Advanced {} from fixture {} to fixture {}",
        winner_id,
        fixture_id,
        next_id
    );
    Ok(())
}

/// Fixtures where one team faces a bye, with that team.
pub fn walkovers(fixtures: &[Fixture]) -> Vec<(FixtureId, TeamId)> {
    fixtures
        .iter()
        .filter_map(|f| f.walkover_team().map(|team| (f.id, team.clone())))
        .collect()
}

/// Move every walkover team into its next fixture. Returns how many were advanced.
///
/// All or nothing: on error `fixtures` is left as it was.
/// Opt-in: `generate_knockout_fixtures` leaves byes unresolved.
pub fn advance_walkovers(fixtures: &mut [Fixture]) -> Result<usize, FixtureError> {
    let pending = walkovers(fixtures);
    let mut staged = fixtures.to_vec();
    for (fixture_id, team_id) in &pending {
        advance_winner(&mut staged, *fixture_id, team_id)?;
    }
    fixtures.clone_from_slice(&staged);
    Ok(pending.len())
}
