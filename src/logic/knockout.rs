//! Knockout stage: quarterfinal seeding and single-match rounds.

use crate::logic::form::FormTracker;
use crate::logic::simulate::simulate_match;
use crate::models::{
    KnockoutResult, MatchFixture, RoundType, StandingEntry, TournamentError,
};
use rand::Rng;

/// Pair the 8 qualifiers into quarterfinals by seeding pot.
///
/// Pots are global-rank pairs {1,2}, {3,4}, {5,6}, {7,8}, each pot in
/// rank order regardless of input order; the bracket is the fixed cross
/// pairing 1-7, 3-5, 2-8, 4-6 (pot 1 only ever meets pot 4 in round
/// one, pot 2 only pot 3). Not a random draw.
pub fn seed_quarter_finals(
    qualified: &[StandingEntry],
) -> Result<Vec<MatchFixture>, TournamentError> {
    let mut pots: [Vec<&StandingEntry>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
    for entry in qualified {
        if let Some(rank) = entry.global_rank {
            if (1..=8).contains(&rank) {
                pots[(rank as usize - 1) / 2].push(entry);
            }
        }
    }
    for pot in &mut pots {
        pot.sort_by_key(|e| e.global_rank);
    }
    for (index, pot) in pots.iter().enumerate() {
        if pot.len() != 2 {
            return Err(TournamentError::InvalidSeeding {
                rank: index as u32 * 2 + 1,
                teams: pot.len(),
            });
        }
    }

    Ok(vec![
        MatchFixture::new(pots[0][0].team.clone(), pots[3][0].team.clone(), RoundType::QuarterFinal),
        MatchFixture::new(pots[1][0].team.clone(), pots[2][0].team.clone(), RoundType::QuarterFinal),
        MatchFixture::new(pots[0][1].team.clone(), pots[3][1].team.clone(), RoundType::QuarterFinal),
        MatchFixture::new(pots[1][1].team.clone(), pots[2][1].team.clone(), RoundType::QuarterFinal),
    ])
}

/// Play a list of knockout fixtures in order.
///
/// Fixtures share the form map, which each match mutates before the next
/// is simulated, so list order is part of the contract. Winner is the
/// strictly higher score; a raw tie goes to the second team, and the
/// loser is always the other team of the fixture.
pub fn run_knockout_round(
    fixtures: &[MatchFixture],
    form: &mut FormTracker,
    rng: &mut impl Rng,
) -> Vec<KnockoutResult> {
    fixtures
        .iter()
        .map(|fixture| run_knockout_match(fixture, form, rng))
        .collect()
}

/// Play one knockout fixture.
pub fn run_knockout_match(
    fixture: &MatchFixture,
    form: &mut FormTracker,
    rng: &mut impl Rng,
) -> KnockoutResult {
    let outcome = simulate_match(&fixture.team_1, &fixture.team_2, form, rng);
    let (winner, loser) = if outcome.first_team_won() {
        (fixture.team_1.clone(), fixture.team_2.clone())
    } else {
        (fixture.team_2.clone(), fixture.team_1.clone())
    };
    let summary = format!(
        "{} {} - {} {}",
        fixture.team_1.name, outcome.score_1, fixture.team_2.name, outcome.score_2
    );
    log::debug!("fixture {} ({:?}): {}", fixture.id, fixture.round, summary);
    KnockoutResult {
        round: fixture.round,
        summary,
        score_1: outcome.score_1,
        score_2: outcome.score_2,
        winner,
        loser,
    }
}
