//! Integration tests for quarterfinal seeding, knockout rounds, input
//! validation and the full tournament run.

use fiba_sim::{
    run_knockout_round, run_tournament, seed_quarter_finals, validate_roster, ExhibitionHistory,
    FormTracker, GroupRoster, MatchFixture, RoundType, StandingEntry, Team, TournamentError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn ranked_entry(code: &str, rank: u32) -> StandingEntry {
    let mut e = StandingEntry::new(Team::new(code, code, rank as i32));
    e.global_rank = Some(rank);
    e
}

fn qualified_eight() -> Vec<StandingEntry> {
    (1..=8).map(|r| ranked_entry(&format!("T{r}"), r)).collect()
}

#[test]
fn seeding_is_the_fixed_cross_pairing() {
    let fixtures = seed_quarter_finals(&qualified_eight()).unwrap();
    assert_eq!(fixtures.len(), 4);

    let pairs: Vec<(&str, &str)> = fixtures
        .iter()
        .map(|f| (f.team_1.code.as_str(), f.team_2.code.as_str()))
        .collect();
    assert_eq!(pairs, vec![("T1", "T7"), ("T3", "T5"), ("T2", "T8"), ("T4", "T6")]);
    assert!(fixtures.iter().all(|f| f.round == RoundType::QuarterFinal));
}

#[test]
fn seeding_ignores_input_order() {
    let mut qualified = qualified_eight();
    qualified.reverse();
    let fixtures = seed_quarter_finals(&qualified).unwrap();

    // Pots are ordered by rank, not by input position, so rank 1 still
    // only meets rank 7 in round one and the bracket is unchanged.
    let pairs: Vec<(&str, &str)> = fixtures
        .iter()
        .map(|f| (f.team_1.code.as_str(), f.team_2.code.as_str()))
        .collect();
    assert_eq!(pairs, vec![("T1", "T7"), ("T3", "T5"), ("T2", "T8"), ("T4", "T6")]);
}

#[test]
fn every_fixture_gets_its_own_id() {
    let fixtures = seed_quarter_finals(&qualified_eight()).unwrap();
    let mut ids: Vec<_> = fixtures.iter().map(|f| f.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn seeding_rejects_missing_or_duplicate_ranks() {
    let mut qualified = qualified_eight();
    qualified[7].global_rank = Some(1); // two rank-1 teams, no rank 8
    assert!(matches!(
        seed_quarter_finals(&qualified),
        Err(TournamentError::InvalidSeeding { .. })
    ));

    let mut qualified = qualified_eight();
    qualified[3].global_rank = None;
    assert!(matches!(
        seed_quarter_finals(&qualified),
        Err(TournamentError::InvalidSeeding { .. })
    ));
}

#[test]
fn knockout_winner_and_loser_come_from_the_fixture() {
    let fixtures = vec![
        MatchFixture::new(
            Team::new("Serbia", "SRB", 4),
            Team::new("Germany", "GER", 3),
            RoundType::SemiFinal,
        ),
        MatchFixture::new(
            Team::new("France", "FRA", 9),
            Team::new("Canada", "CAN", 7),
            RoundType::SemiFinal,
        ),
    ];
    let mut form = FormTracker::new();
    let mut rng = StdRng::seed_from_u64(17);

    let results = run_knockout_round(&fixtures, &mut form, &mut rng);
    assert_eq!(results.len(), 2);

    for (fixture, result) in fixtures.iter().zip(&results) {
        let codes = [fixture.team_1.code.as_str(), fixture.team_2.code.as_str()];
        assert!(codes.contains(&result.winner.code.as_str()));
        assert!(codes.contains(&result.loser.code.as_str()));
        assert_ne!(result.winner.code, result.loser.code);
        if result.score_1 > result.score_2 {
            assert_eq!(result.winner.code, fixture.team_1.code);
        } else {
            assert_eq!(result.winner.code, fixture.team_2.code);
        }
    }
}

fn full_roster() -> GroupRoster {
    let mut groups = GroupRoster::new();
    groups.insert(
        "A".into(),
        vec![
            Team::new("Canada", "CAN", 7),
            Team::new("Australia", "AUS", 5),
            Team::new("Greece", "GRE", 14),
            Team::new("Spain", "ESP", 2),
        ],
    );
    groups.insert(
        "B".into(),
        vec![
            Team::new("Germany", "GER", 3),
            Team::new("France", "FRA", 9),
            Team::new("Brazil", "BRA", 12),
            Team::new("Japan", "JPN", 26),
        ],
    );
    groups.insert(
        "C".into(),
        vec![
            Team::new("United States", "USA", 1),
            Team::new("Serbia", "SRB", 4),
            Team::new("South Sudan", "SSD", 34),
            Team::new("Puerto Rico", "PRI", 16),
        ],
    );
    groups
}

#[test]
fn validate_rejects_broken_rosters() {
    assert!(matches!(
        validate_roster(&GroupRoster::new()),
        Err(TournamentError::NoGroups)
    ));

    let mut lone = GroupRoster::new();
    lone.insert("A".into(), vec![Team::new("Serbia", "SRB", 4)]);
    assert!(matches!(
        validate_roster(&lone),
        Err(TournamentError::GroupTooSmall { .. })
    ));

    let mut duplicated = full_roster();
    duplicated.get_mut("B").unwrap()[0].code = "CAN".into();
    assert!(matches!(
        validate_roster(&duplicated),
        Err(TournamentError::DuplicateTeamCode(_))
    ));

    let mut small = GroupRoster::new();
    small.insert(
        "A".into(),
        vec![Team::new("Serbia", "SRB", 4), Team::new("Germany", "GER", 3)],
    );
    assert!(matches!(
        validate_roster(&small),
        Err(TournamentError::NotEnoughTeams { available: 2 })
    ));

    assert_eq!(validate_roster(&full_roster()), Ok(()));
}

#[test]
fn full_run_produces_a_complete_report() {
    let groups = full_roster();
    let exhibitions = ExhibitionHistory::new();
    let mut rng = StdRng::seed_from_u64(2024);

    let report = run_tournament(&groups, &exhibitions, &mut rng).unwrap();

    assert_eq!(report.global_ranking.len(), 12);
    assert_eq!(report.qualifiers.len(), 8);
    assert_eq!(report.quarter_finals.len(), 4);
    assert_eq!(report.semi_finals.len(), 2);
    assert_eq!(report.third_place.round, RoundType::ThirdPlace);
    assert_eq!(report.final_game.round, RoundType::Final);

    // The bracket is internally consistent.
    assert_eq!(report.medals.gold, report.final_game.winner);
    assert_eq!(report.medals.silver, report.final_game.loser);
    assert_eq!(report.medals.bronze, report.third_place.winner);
    assert_ne!(report.medals.gold, report.medals.silver);
    assert_ne!(report.medals.gold, report.medals.bronze);

    // Semifinalists are quarterfinal winners.
    let qf_winners: Vec<&str> = report
        .quarter_finals
        .iter()
        .map(|r| r.winner.code.as_str())
        .collect();
    for semi in &report.semi_finals {
        assert!(qf_winners.contains(&semi.winner.code.as_str()));
        assert!(qf_winners.contains(&semi.loser.code.as_str()));
    }

    // Finalists are the semifinal winners, third-place teams the losers.
    let sf_winners: Vec<&str> = report
        .semi_finals
        .iter()
        .map(|r| r.winner.code.as_str())
        .collect();
    assert!(sf_winners.contains(&report.medals.gold.code.as_str()));
    assert!(sf_winners.contains(&report.medals.silver.code.as_str()));
}

#[test]
fn full_run_is_reproducible_for_a_fixed_seed() {
    let groups = full_roster();
    let mut exhibitions = ExhibitionHistory::new();
    exhibitions.insert(
        "SRB".into(),
        vec![fiba_sim::ExhibitionMatch {
            opponent: Some("JPN".into()),
            result: "119-91".into(),
        }],
    );

    let mut rng_1 = StdRng::seed_from_u64(9);
    let first = run_tournament(&groups, &exhibitions, &mut rng_1).unwrap();

    let mut rng_2 = StdRng::seed_from_u64(9);
    let second = run_tournament(&groups, &exhibitions, &mut rng_2).unwrap();

    assert_eq!(first, second);
}
