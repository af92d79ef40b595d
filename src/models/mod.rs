//! Data structures for fixtures and tie-breakers: teams, fixtures, shootout state.

mod fixture;
mod team;
mod tie_breaker;

pub use fixture::{Fixture, FixtureError, FixtureId, TeamSlot};
pub use team::{Group, Team, TeamId};
pub use tie_breaker::{
    RaidRecord, Side, TieBreakerError, TieBreakerPhase, TieBreakerState, MAX_POINTS_PER_RAID,
    SHOOTOUT_RAIDS_PER_SIDE,
};
