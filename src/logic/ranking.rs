//! Ranking: standings sort, global rank assignment, qualification.

use crate::models::{GroupStandings, StandingEntry};

/// How many teams advance to the knockout stage.
pub const QUALIFIER_COUNT: usize = 8;

/// Sort standings in place: points, then point difference, then raw
/// scored, all descending. `sort_by` is stable, so exact ties keep
/// their prior relative order.
pub fn rank_standings(entries: &mut [StandingEntry]) {
    entries.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.point_difference().cmp(&a.point_difference()))
            .then_with(|| b.scored.cmp(&a.scored))
    });
}

/// Rank each group in place, then merge all groups into one globally
/// ranked list with 1-based `global_rank` attached to every entry.
pub fn global_ranking(standings: &mut GroupStandings) -> Vec<StandingEntry> {
    for entries in standings.values_mut() {
        rank_standings(entries);
    }

    let mut all: Vec<StandingEntry> = standings.values().flatten().cloned().collect();
    rank_standings(&mut all);
    for (index, entry) in all.iter_mut().enumerate() {
        entry.global_rank = Some(index as u32 + 1);
    }
    all
}

/// Top 8 of the global ranking, rank order.
pub fn qualifiers(global: &[StandingEntry]) -> Vec<StandingEntry> {
    global.iter().take(QUALIFIER_COUNT).cloned().collect()
}
