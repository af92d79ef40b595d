//! Team roster helpers: CSV import and random seeding.

use crate::models::Team;
use rand::seq::SliceRandom;
use std::io::Read;

/// Errors while importing a roster.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RosterError {
    /// The CSV could not be read.
    Csv(String),
    /// The header has no `name` column.
    MissingNameColumn,
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::Csv(e) => write!(f, "Could not read roster CSV: {}", e),
            RosterError::MissingNameColumn => write!(f, "Roster CSV needs a 'name' column"),
        }
    }
}

impl std::error::Error for RosterError {}

impl From<csv::Error> for RosterError {
    fn from(e: csv::Error) -> Self {
        RosterError::Csv(e.to_string())
    }
}

/// Parse teams from CSV with a header row.
///
/// Columns are matched by header (case-insensitive): `name` is required, `id` is optional.
/// A missing or blank id gets a fresh UUID. Rows with a blank name are skipped.
pub fn parse_teams_csv<R: Read>(reader: R) -> Result<Vec<Team>, RosterError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column = |wanted: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(wanted));
    let name_col = column("name").ok_or(RosterError::MissingNameColumn)?;
    let id_col = column("id");

    let mut teams = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let name = record.get(name_col).unwrap_or_default();
        if name.is_empty() {
            continue;
        }
        let team = match id_col.and_then(|i| record.get(i)).filter(|id| !id.is_empty()) {
            Some(id) => Team::with_id(id, name),
            None => Team::new(name),
        };
        teams.push(team);
    }
    log::debug!("Imported {} teams from CSV", teams.len());
    Ok(teams)
}

/// Shuffle teams in place for random seeding before fixture generation.
pub fn shuffle_teams(teams: &mut [Team]) {
    teams.shuffle(&mut rand::thread_rng());
}
