//! Tie-breaker: shootout raids, then a golden raid if still level.
//!
//! No outs, revivals or all-out bonuses here; only raw points per raid count.

use crate::models::{
    RaidRecord, TieBreakerError, TieBreakerPhase, TieBreakerState, MAX_POINTS_PER_RAID,
    SHOOTOUT_RAIDS_PER_SIDE,
};

/// Record one raid for the current raider and advance the state.
///
/// Shootout: adds `points` (0..=5) for the raider, then passes the raid to the other side
/// unless it has no raids left. After 5 raids each, the higher score wins; a level score
/// goes to a golden raid by the side that did not raid last.
///
/// Golden raid: 0 points hands the win to the defending side, anything else to the raider.
///
/// Leaves the state unchanged on error.
pub fn record_shootout_point(
    state: &mut TieBreakerState,
    points: u8,
) -> Result<(), TieBreakerError> {
    match state.phase {
        TieBreakerPhase::Shootout => record_shootout_raid(state, points),
        TieBreakerPhase::GoldenRaid { raider } => {
            let winner = if points == 0 { raider.other() } else { raider };
            state.history.push(RaidRecord {
                side: raider,
                points,
                golden: true,
            });
            state.phase = TieBreakerPhase::Complete { winner };
            log::debug!("Golden raid by {:?} scored {}; {:?} wins", raider, points, winner);
            Ok(())
        }
        phase @ TieBreakerPhase::Complete { .. } => {
            Err(TieBreakerError::InvalidTransition { phase })
        }
    }
}

fn record_shootout_raid(state: &mut TieBreakerState, points: u8) -> Result<(), TieBreakerError> {
    if points > MAX_POINTS_PER_RAID {
        return Err(TieBreakerError::InvalidPoints { points });
    }
    let raider = state.current_raider;
    if state.raids_taken(raider) >= SHOOTOUT_RAIDS_PER_SIDE {
        return Err(TieBreakerError::InvalidTransition { phase: state.phase });
    }

    state.add_raid(raider, points);
    state.history.push(RaidRecord {
        side: raider,
        points,
        golden: false,
    });

    let defender = raider.other();
    if state.raids_left(raider) == 0 && state.raids_left(defender) == 0 {
        let (a, b) = (state.score(raider), state.score(defender));
        state.phase = if a > b {
            TieBreakerPhase::Complete { winner: raider }
        } else if b > a {
            TieBreakerPhase::Complete { winner: defender }
        } else {
            state.current_raider = defender;
            TieBreakerPhase::GoldenRaid { raider: defender }
        };
        log::debug!(
            "Shootout finished {}-{} (A-B); phase is now {}",
            state.scores[0],
            state.scores[1],
            state.phase.name()
        );
        return Ok(());
    }

    state.current_raider = if state.raids_left(defender) > 0 {
        defender
    } else {
        raider
    };
    Ok(())
}
