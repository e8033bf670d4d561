//! Full tournament run: validation, group stage, ranking, knockout
//! bracket, medals.

use crate::logic::form::initial_form;
use crate::logic::group_stage::{init_group_standings, run_group_stage};
use crate::logic::knockout::{run_knockout_match, run_knockout_round, seed_quarter_finals};
use crate::logic::ranking::{global_ranking, qualifiers, QUALIFIER_COUNT};
use crate::models::{
    ExhibitionHistory, GroupRoster, MatchFixture, Medals, RoundType, Team, TournamentError,
    TournamentReport,
};
use rand::Rng;
use std::collections::HashSet;

/// Check the roster shape before any simulation: at least one group,
/// every group playable, codes unique, enough teams to fill the bracket.
pub fn validate_roster(groups: &GroupRoster) -> Result<(), TournamentError> {
    if groups.is_empty() {
        return Err(TournamentError::NoGroups);
    }
    let mut seen: HashSet<&str> = HashSet::new();
    let mut total = 0;
    for (id, teams) in groups {
        if teams.len() < 2 {
            return Err(TournamentError::GroupTooSmall {
                group: id.clone(),
                teams: teams.len(),
            });
        }
        for team in teams {
            if !seen.insert(team.code.as_str()) {
                return Err(TournamentError::DuplicateTeamCode(team.code.clone()));
            }
        }
        total += teams.len();
    }
    if total < QUALIFIER_COUNT {
        return Err(TournamentError::NotEnoughTeams { available: total });
    }
    Ok(())
}

/// Run the whole tournament and return structured results.
///
/// Phases run in a fixed order on one RNG stream: group stage round
/// robins (groups in key order), quarterfinals, semifinals, then the
/// third-place game *before* the final. Form carries across all of it.
pub fn run_tournament(
    groups: &GroupRoster,
    exhibitions: &ExhibitionHistory,
    rng: &mut impl Rng,
) -> Result<TournamentReport, TournamentError> {
    validate_roster(groups)?;

    let roster: Vec<Team> = groups.values().flatten().cloned().collect();
    let mut form = initial_form(exhibitions, &roster);

    let mut standings = init_group_standings(groups);
    run_group_stage(groups, &mut standings, &mut form, rng)?;

    let global = global_ranking(&mut standings);
    let qualified = qualifiers(&global);

    let quarter_fixtures = seed_quarter_finals(&qualified)?;
    let quarter_finals = run_knockout_round(&quarter_fixtures, &mut form, rng);

    let semi_fixtures = vec![
        MatchFixture::new(
            quarter_finals[0].winner.clone(),
            quarter_finals[1].winner.clone(),
            RoundType::SemiFinal,
        ),
        MatchFixture::new(
            quarter_finals[2].winner.clone(),
            quarter_finals[3].winner.clone(),
            RoundType::SemiFinal,
        ),
    ];
    let semi_finals = run_knockout_round(&semi_fixtures, &mut form, rng);

    let third_fixture = MatchFixture::new(
        semi_finals[0].loser.clone(),
        semi_finals[1].loser.clone(),
        RoundType::ThirdPlace,
    );
    let final_fixture = MatchFixture::new(
        semi_finals[0].winner.clone(),
        semi_finals[1].winner.clone(),
        RoundType::Final,
    );

    // The third-place game is played first; swapping the order would
    // shift the RNG stream and the form state going into the final.
    let third_place = run_knockout_match(&third_fixture, &mut form, rng);
    let final_game = run_knockout_match(&final_fixture, &mut form, rng);

    let medals = Medals {
        gold: final_game.winner.clone(),
        silver: final_game.loser.clone(),
        bronze: third_place.winner.clone(),
    };

    Ok(TournamentReport {
        group_standings: standings,
        global_ranking: global,
        qualifiers: qualified,
        quarter_finals,
        semi_finals,
        third_place,
        final_game,
        medals,
    })
}
