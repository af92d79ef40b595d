//! Integration tests for league fixtures: round robin and group stage.

mod common;

use common::teams;
use sports_tournament_web::{
    generate_group_stage_fixtures, generate_round_robin_fixtures, Fixture, FixtureError, Group,
    Team,
};
use std::collections::{BTreeMap, HashSet};

fn pair(f: &Fixture) -> (String, String) {
    let a = f.team_a_id().expect("league fixture has team A").clone();
    let b = f.team_b_id().expect("league fixture has team B").clone();
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[test]
fn every_pair_meets_exactly_once() {
    for n in 2..=20 {
        let fixtures = generate_round_robin_fixtures(&teams(n)).unwrap();
        assert_eq!(fixtures.len(), n * (n - 1) / 2, "n = {n}");

        let pairs: HashSet<_> = fixtures.iter().map(pair).collect();
        assert_eq!(pairs.len(), fixtures.len(), "repeated pairing for n = {n}");
        for (a, b) in &pairs {
            assert_ne!(a, b, "team plays itself for n = {n}");
        }
    }
}

#[test]
fn no_team_plays_twice_in_a_round() {
    for n in 2..=20 {
        let fixtures = generate_round_robin_fixtures(&teams(n)).unwrap();
        let mut by_round: BTreeMap<u32, HashSet<String>> = BTreeMap::new();
        for f in &fixtures {
            let seen = by_round.entry(f.round_number).or_default();
            assert!(seen.insert(f.team_a_id().unwrap().clone()), "n = {n}");
            assert!(seen.insert(f.team_b_id().unwrap().clone()), "n = {n}");
        }
        let expected_rounds = if n % 2 == 0 { n - 1 } else { n };
        assert_eq!(by_round.len(), expected_rounds, "n = {n}");
    }
}

#[test]
fn match_numbers_are_contiguous_in_generation_order() {
    let fixtures = generate_round_robin_fixtures(&teams(7)).unwrap();
    for (i, f) in fixtures.iter().enumerate() {
        assert_eq!(f.match_number, i as u32 + 1);
        assert_eq!(f.round_name, format!("Round {}", f.round_number));
        assert!(f.next_match_id.is_none());
        assert!(f.group_name.is_none());
    }
    assert!(fixtures.windows(2).all(|w| w[0].round_number <= w[1].round_number));
}

#[test]
fn two_teams_play_a_single_fixture() {
    let fixtures = generate_round_robin_fixtures(&teams(2)).unwrap();
    assert_eq!(fixtures.len(), 1);
    assert_eq!(fixtures[0].round_number, 1);
    assert_eq!(fixtures[0].round_name, "Round 1");
}

#[test]
fn three_teams_each_sit_out_one_round() {
    let fixtures = generate_round_robin_fixtures(&teams(3)).unwrap();
    assert_eq!(fixtures.len(), 3);

    let rounds: Vec<u32> = fixtures.iter().map(|f| f.round_number).collect();
    assert_eq!(rounds, vec![1, 2, 3]);

    let pairs: Vec<_> = fixtures.iter().map(pair).collect();
    assert_eq!(
        pairs,
        vec![
            ("T1".to_string(), "T2".to_string()),
            ("T0".to_string(), "T2".to_string()),
            ("T0".to_string(), "T1".to_string()),
        ]
    );
}

#[test]
fn pairing_follows_input_order() {
    let fixtures = generate_round_robin_fixtures(&teams(4)).unwrap();
    let first_round: Vec<_> = fixtures
        .iter()
        .filter(|f| f.round_number == 1)
        .map(|f| (f.team_a_id().unwrap().as_str(), f.team_b_id().unwrap().as_str()))
        .collect();
    assert_eq!(first_round, vec![("T0", "T3"), ("T1", "T2")]);
}

#[test]
fn rejects_fewer_than_two_teams() {
    assert_eq!(
        generate_round_robin_fixtures(&teams(1)),
        Err(FixtureError::InvalidTeamCount { count: 1 })
    );
    assert_eq!(
        generate_round_robin_fixtures(&[]),
        Err(FixtureError::InvalidTeamCount { count: 0 })
    );
}

#[test]
fn rejects_duplicate_and_empty_ids() {
    let dup = vec![
        Team::with_id("x", "X"),
        Team::with_id("y", "Y"),
        Team::with_id("x", "X again"),
    ];
    assert_eq!(
        generate_round_robin_fixtures(&dup),
        Err(FixtureError::DuplicateTeam("x".to_string()))
    );

    let blank = vec![Team::with_id("x", "X"), Team::with_id("  ", "Nobody")];
    assert_eq!(
        generate_round_robin_fixtures(&blank),
        Err(FixtureError::EmptyTeamId)
    );
}

#[test]
fn group_stage_tags_groups_and_numbers_globally() {
    let all = teams(7);
    let groups = vec![
        Group::new("Group A", all[..4].to_vec()),
        Group::new("Group B", all[4..].to_vec()),
    ];
    let fixtures = generate_group_stage_fixtures(&groups).unwrap();
    assert_eq!(fixtures.len(), 6 + 3);

    for (i, f) in fixtures.iter().enumerate() {
        assert_eq!(f.match_number, i as u32 + 1);
    }
    let group_a: Vec<_> = fixtures
        .iter()
        .filter(|f| f.group_name.as_deref() == Some("Group A"))
        .collect();
    let group_b: Vec<_> = fixtures
        .iter()
        .filter(|f| f.group_name.as_deref() == Some("Group B"))
        .collect();
    assert_eq!(group_a.len(), 6);
    assert_eq!(group_b.len(), 3);
    assert_eq!(group_b[0].round_number, 1);
    assert!(group_b.iter().all(|f| !f.involves("T0")));
}

#[test]
fn group_stage_rejects_team_in_two_groups() {
    let all = teams(4);
    let groups = vec![
        Group::new("Group A", all[..2].to_vec()),
        Group::new("Group B", vec![all[1].clone(), all[2].clone(), all[3].clone()]),
    ];
    assert_eq!(
        generate_group_stage_fixtures(&groups),
        Err(FixtureError::DuplicateTeam("T1".to_string()))
    );
    assert_eq!(
        generate_group_stage_fixtures(&[]),
        Err(FixtureError::InvalidTeamCount { count: 0 })
    );
}

#[test]
fn group_stage_validates_every_group() {
    let all = teams(5);
    let lonely = vec![
        Group::new("Group A", all[..4].to_vec()),
        Group::new("Group B", vec![all[4].clone()]),
    ];
    assert_eq!(
        generate_group_stage_fixtures(&lonely),
        Err(FixtureError::InvalidTeamCount { count: 1 })
    );

    let blank = vec![
        Group::new("Group A", all[..3].to_vec()),
        Group::new(
            "Group B",
            vec![all[3].clone(), Team::with_id("", "Unnamed")],
        ),
    ];
    assert_eq!(
        generate_group_stage_fixtures(&blank),
        Err(FixtureError::EmptyTeamId)
    );
}
