//! Group stage: round-robin simulation and standings accumulation.

use crate::logic::form::FormTracker;
use crate::logic::simulate::simulate_match;
use crate::models::{GroupRoster, GroupStandings, StandingEntry, TournamentError};
use rand::Rng;

/// Zeroed standings for every team, per group, in roster order.
pub fn init_group_standings(groups: &GroupRoster) -> GroupStandings {
    groups
        .iter()
        .map(|(id, teams)| {
            let entries = teams.iter().cloned().map(StandingEntry::new).collect();
            (id.clone(), entries)
        })
        .collect()
}

/// Play every group's round robin, mutating `standings` and `form`.
///
/// Within a group every `i < j` roster pair plays exactly once, in that
/// order; matches run strictly sequentially because each one feeds the
/// form map the next one reads. The winner takes 2 points, the loser 1;
/// a raw tie counts as a win for the second team. Both entries get the
/// identical summary string, first team of the fixture first.
pub fn run_group_stage(
    groups: &GroupRoster,
    standings: &mut GroupStandings,
    form: &mut FormTracker,
    rng: &mut impl Rng,
) -> Result<(), TournamentError> {
    for (group_id, teams) in groups {
        for i in 0..teams.len() {
            for j in (i + 1)..teams.len() {
                let team_1 = &teams[i];
                let team_2 = &teams[j];
                let outcome = simulate_match(team_1, team_2, form, rng);

                let summary = format!(
                    "{} {} - {} {}",
                    team_1.name, outcome.score_1, team_2.name, outcome.score_2
                );

                let entries = standings
                    .get_mut(group_id)
                    .ok_or_else(|| TournamentError::MissingStanding(team_1.code.clone()))?;
                let idx_1 = position_of(entries, &team_1.code)?;
                let idx_2 = position_of(entries, &team_2.code)?;

                let (points_1, points_2) = if outcome.first_team_won() {
                    (2, 1)
                } else {
                    (1, 2)
                };

                let entry_1 = &mut entries[idx_1];
                entry_1.scored += outcome.score_1;
                entry_1.conceded += outcome.score_2;
                entry_1.points += points_1;
                entry_1.matches.push(summary.clone());

                let entry_2 = &mut entries[idx_2];
                entry_2.scored += outcome.score_2;
                entry_2.conceded += outcome.score_1;
                entry_2.points += points_2;
                entry_2.matches.push(summary);
            }
        }
    }
    Ok(())
}

fn position_of(entries: &[StandingEntry], code: &str) -> Result<usize, TournamentError> {
    entries
        .iter()
        .position(|e| e.team.code == code)
        .ok_or_else(|| TournamentError::MissingStanding(code.to_string()))
}
