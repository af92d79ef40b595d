//! Sports tournament web app: library with fixture generation and tie-breaker scoring.

pub mod logic;
pub mod models;

pub use logic::{
    advance_walkovers, advance_winner, generate_group_stage_fixtures, generate_knockout_fixtures,
    generate_round_robin_fixtures, knockout_round_name, next_power_of_two, parse_teams_csv,
    record_shootout_point, shuffle_teams, validate_teams, walkovers, RosterError, MIN_TEAMS,
};
pub use models::{
    Fixture, FixtureError, FixtureId, Group, RaidRecord, Side, Team, TeamId, TeamSlot,
    TieBreakerError, TieBreakerPhase, TieBreakerState, MAX_POINTS_PER_RAID,
    SHOOTOUT_RAIDS_PER_SIDE,
};
