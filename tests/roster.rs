//! Integration tests for roster import and shuffling.

use sports_tournament_web::{parse_teams_csv, shuffle_teams, RosterError, Team};

#[test]
fn parses_ids_and_names() {
    let csv = "id,name\nt1,Tigers\nt2, Lions \n";
    let teams = parse_teams_csv(csv.as_bytes()).unwrap();
    assert_eq!(
        teams,
        vec![Team::with_id("t1", "Tigers"), Team::with_id("t2", "Lions")]
    );
}

#[test]
fn missing_ids_get_generated_and_blank_names_are_skipped() {
    let csv = "Name,ID\nBulls,\n,x9\nPanthers\n";
    let teams = parse_teams_csv(csv.as_bytes()).unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].name, "Bulls");
    assert_eq!(teams[1].name, "Panthers");
    assert!(uuid::Uuid::parse_str(&teams[0].id).is_ok());
    assert_ne!(teams[0].id, teams[1].id);
}

#[test]
fn name_column_is_required() {
    let csv = "id,club\n1,Tigers\n";
    assert_eq!(
        parse_teams_csv(csv.as_bytes()),
        Err(RosterError::MissingNameColumn)
    );
}

#[test]
fn shuffle_keeps_every_team() {
    let mut teams: Vec<Team> = (0..16).map(|i| Team::new(format!("Team {i}"))).collect();
    let mut before: Vec<String> = teams.iter().map(|t| t.id.clone()).collect();
    shuffle_teams(&mut teams);
    let mut after: Vec<String> = teams.iter().map(|t| t.id.clone()).collect();
    before.sort();
    after.sort();
    assert_eq!(before, after);
}
