//! Fixtures, match outcomes and knockout results.

use crate::models::team::Team;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a fixture.
pub type MatchId = Uuid;

/// Knockout phase a fixture belongs to. Group-stage matches are played
/// straight from the roster and never go through a fixture.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundType {
    QuarterFinal,
    SemiFinal,
    ThirdPlace,
    Final,
}

/// An unordered pair of teams scheduled to play one match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchFixture {
    /// Distinguishes fixtures in logs and serialized brackets; not part
    /// of result equality (results carry teams and scores only).
    pub id: MatchId,
    pub team_1: Team,
    pub team_2: Team,
    pub round: RoundType,
}

impl MatchFixture {
    pub fn new(team_1: Team, team_2: Team, round: RoundType) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_1,
            team_2,
            round,
        }
    }
}

/// Scores of one simulated match, first team first.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub score_1: u32,
    pub score_2: u32,
}

impl MatchOutcome {
    /// Strictly higher score wins. On a raw tie the second team wins;
    /// every winner/loser decision in the crate uses this rule.
    pub fn first_team_won(&self) -> bool {
        self.score_1 > self.score_2
    }
}

/// Result of one knockout fixture.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct KnockoutResult {
    pub round: RoundType,
    /// "TeamA scoreA - TeamB scoreB", fixture order.
    pub summary: String,
    pub score_1: u32,
    pub score_2: u32,
    pub winner: Team,
    pub loser: Team,
}
