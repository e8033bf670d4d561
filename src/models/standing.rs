//! StandingEntry: accumulated group-stage record for one team.

use crate::models::team::Team;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One team's record within its group. Created zeroed at group
/// initialization, mutated by the group stage runner only.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub team: Team,
    /// 2 per win, 1 per loss; every match awards 3 in total.
    pub points: u32,
    pub scored: u32,
    pub conceded: u32,
    /// Human-readable summaries of this team's matches, in play order.
    pub matches: Vec<String>,
    /// 1-based rank across all groups; set after global ranking.
    pub global_rank: Option<u32>,
}

impl StandingEntry {
    /// Fresh zeroed entry for a team.
    pub fn new(team: Team) -> Self {
        Self {
            team,
            points: 0,
            scored: 0,
            conceded: 0,
            matches: Vec::new(),
            global_rank: None,
        }
    }

    /// Scored minus conceded, the second ranking criterion.
    pub fn point_difference(&self) -> i64 {
        i64::from(self.scored) - i64::from(self.conceded)
    }
}

/// Group id to its standings, same order as the roster until ranked.
pub type GroupStandings = BTreeMap<String, Vec<StandingEntry>>;
