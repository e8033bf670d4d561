//! Match simulation: bias two random base scores by ranking and form,
//! then feed the result back into the form tracker.

use crate::logic::form::FormTracker;
use crate::models::{MatchOutcome, Team};
use rand::Rng;

/// Base scores are drawn uniformly from this range, first team first.
const BASE_SCORE_MIN: i32 = 80;
const BASE_SCORE_MAX: i32 = 100;

/// Combined ranking+form advantage is capped at this many points.
const MAX_ADJUSTMENT: i32 = 20;

/// Simulate one match. Draws exactly two base scores from `rng` (team 1
/// first), so a seeded generator reproduces a whole tournament as long
/// as fixtures are played in the same order.
pub fn simulate_match(
    team_1: &Team,
    team_2: &Team,
    form: &mut FormTracker,
    rng: &mut impl Rng,
) -> MatchOutcome {
    let base_1 = rng.gen_range(BASE_SCORE_MIN..=BASE_SCORE_MAX);
    let base_2 = rng.gen_range(BASE_SCORE_MIN..=BASE_SCORE_MAX);
    score_match(team_1, team_2, form, base_1, base_2)
}

/// Resolve a match from already-drawn base scores and update form.
///
/// The adjustment is `floor((ranking_diff + form_diff) / 2)` clamped to
/// ±20, added to team 1's base and subtracted from team 2's, with
/// `ranking_diff = ranking_1 - ranking_2` (sign convention is part of
/// the contract: ranking 1 vs 5 with flat form gives 88-92 from 90/90
/// bases). Afterwards the winner's form grows by the margin plus 10 and
/// the loser's shrinks by the same amount; a raw tie puts team 1 on the
/// losing side of a zero margin.
pub fn score_match(
    team_1: &Team,
    team_2: &Team,
    form: &mut FormTracker,
    base_1: i32,
    base_2: i32,
) -> MatchOutcome {
    let form_1 = lookup_form(form, team_1);
    let form_2 = lookup_form(form, team_2);

    let ranking_diff = team_1.ranking - team_2.ranking;
    let form_diff = form_1 - form_2;
    // div_euclid floors toward negative infinity, matching the intended
    // floor division for negative sums.
    let adjustment = (ranking_diff + form_diff)
        .div_euclid(2)
        .clamp(-MAX_ADJUSTMENT, MAX_ADJUSTMENT);

    let score_1 = (base_1 + adjustment).max(0);
    let score_2 = (base_2 - adjustment).max(0);

    // Momentum update: margin plus a flat 10 swing; a tie counts as a
    // loss for team 1 here too.
    let diff = score_1 - score_2;
    if diff > 0 {
        form.add(&team_1.code, diff + 10);
        form.add(&team_2.code, -(diff + 10));
    } else {
        form.add(&team_1.code, diff - 10);
        form.add(&team_2.code, -(diff - 10));
    }

    MatchOutcome {
        score_1: score_1 as u32,
        score_2: score_2 as u32,
    }
}

/// Form lookup with a non-fatal diagnostic for teams that never got an
/// initial entry (no exhibition history).
fn lookup_form(form: &FormTracker, team: &Team) -> i32 {
    match form.value(&team.code) {
        Some(value) => value,
        None => {
            log::warn!("no form entry for {} ({}), defaulting to 0", team.name, team.code);
            0
        }
    }
}
