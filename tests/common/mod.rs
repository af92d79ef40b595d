//! Shared helpers for integration tests.

use sports_tournament_web::Team;

/// `n` teams with readable ids "T0", "T1", ...
pub fn teams(n: usize) -> Vec<Team> {
    (0..n)
        .map(|i| Team::with_id(format!("T{i}"), format!("Team {i}")))
        .collect()
}
