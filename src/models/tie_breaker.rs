//! Tie-breaker (shootout / golden raid) state and TieBreakerError.

use serde::{Deserialize, Serialize};

/// Raids each side takes in the shootout.
pub const SHOOTOUT_RAIDS_PER_SIDE: u8 = 5;

/// Most points a single shootout raid can score.
pub const MAX_POINTS_PER_RAID: u8 = 5;

/// Errors that can occur while recording tie-breaker raids.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TieBreakerError {
    /// The event does not fit the current phase (already complete, or raider out of raids).
    InvalidTransition { phase: TieBreakerPhase },
    /// A shootout raid scored more than `MAX_POINTS_PER_RAID`.
    InvalidPoints { points: u8 },
}

impl std::fmt::Display for TieBreakerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TieBreakerError::InvalidTransition { phase } => {
                write!(f, "Cannot record a raid in the {} phase", phase.name())
            }
            TieBreakerError::InvalidPoints { points } => write!(
                f,
                "A shootout raid scores 0 to {} points (got {})",
                MAX_POINTS_PER_RAID, points
            ),
        }
    }
}

impl std::error::Error for TieBreakerError {}

/// One of the two teams in a tied match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// Phase of the tie-breaker. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TieBreakerPhase {
    /// Five raids per side, alternating.
    #[default]
    Shootout,
    /// Shootout ended level: one sudden-death raid by `raider`.
    GoldenRaid { raider: Side },
    /// Terminal; always has a winner.
    Complete { winner: Side },
}

impl TieBreakerPhase {
    pub fn name(&self) -> &'static str {
        match self {
            TieBreakerPhase::Shootout => "shootout",
            TieBreakerPhase::GoldenRaid { .. } => "golden_raid",
            TieBreakerPhase::Complete { .. } => "complete",
        }
    }
}

/// One recorded raid (for display of the raid log).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RaidRecord {
    pub side: Side,
    pub points: u8,
    /// True for the golden raid.
    pub golden: bool,
}

/// Full tie-breaker state. Owned by one caller; advanced by `record_shootout_point`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TieBreakerState {
    pub phase: TieBreakerPhase,
    /// Shootout points, indexed A then B.
    pub scores: [u32; 2],
    /// Shootout raids taken, indexed A then B. Never above `SHOOTOUT_RAIDS_PER_SIDE`.
    pub raids: [u8; 2],
    pub current_raider: Side,
    pub history: Vec<RaidRecord>,
}

impl TieBreakerState {
    /// Start a shootout with `first_raider` raiding first.
    pub fn new(first_raider: Side) -> Self {
        Self {
            current_raider: first_raider,
            ..Self::default()
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        self.scores[side.index()]
    }

    pub fn raids_taken(&self, side: Side) -> u8 {
        self.raids[side.index()]
    }

    pub fn raids_left(&self, side: Side) -> u8 {
        SHOOTOUT_RAIDS_PER_SIDE.saturating_sub(self.raids_taken(side))
    }

    pub(crate) fn add_raid(&mut self, side: Side, points: u8) {
        self.raids[side.index()] += 1;
        self.scores[side.index()] += u32::from(points);
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            TieBreakerPhase::Complete { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn golden_raider(&self) -> Option<Side> {
        match self.phase {
            TieBreakerPhase::GoldenRaid { raider } => Some(raider),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.phase, TieBreakerPhase::Complete { .. })
    }
}
