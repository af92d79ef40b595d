//! Fixture and tie-breaker logic: validation, league, knockout, shootout, roster import.

mod knockout;
mod roster;
mod round_robin;
mod tie_breaker;
mod validate;

pub use knockout::{
    advance_walkovers, advance_winner, generate_knockout_fixtures, knockout_round_name,
    next_power_of_two, walkovers,
};
pub use roster::{parse_teams_csv, shuffle_teams, RosterError};
pub use round_robin::{generate_group_stage_fixtures, generate_round_robin_fixtures};
pub use tie_breaker::record_shootout_point;
pub use validate::{validate_teams, MIN_TEAMS};
