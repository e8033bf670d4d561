//! TournamentError and the structured report of a full run.

use crate::models::game::KnockoutResult;
use crate::models::standing::{GroupStandings, StandingEntry};
use crate::models::team::Team;
use serde::{Deserialize, Serialize};

/// Errors that can occur while running a tournament.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// The roster contains no groups at all.
    NoGroups,
    /// A group needs at least two teams to play a round robin.
    GroupTooSmall { group: String, teams: usize },
    /// The same federation code appears on two teams.
    DuplicateTeamCode(String),
    /// Fewer than 8 teams in total; the knockout bracket cannot be seeded.
    NotEnoughTeams { available: usize },
    /// Qualifier list handed to seeding did not contain global ranks 1..=8
    /// exactly once each.
    InvalidSeeding { rank: u32, teams: usize },
    /// A simulated team has no standings entry in its group.
    MissingStanding(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::NoGroups => write!(f, "group roster is empty"),
            TournamentError::GroupTooSmall { group, teams } => {
                write!(f, "group {} has {} team(s), need at least 2", group, teams)
            }
            TournamentError::DuplicateTeamCode(code) => {
                write!(f, "duplicate federation code: {}", code)
            }
            TournamentError::NotEnoughTeams { available } => {
                write!(f, "need at least 8 teams for the knockout stage, have {}", available)
            }
            TournamentError::InvalidSeeding { rank, teams } => {
                write!(f, "seeding pot for rank {} holds {} team(s), expected 1", rank, teams)
            }
            TournamentError::MissingStanding(code) => {
                write!(f, "no standings entry for team {}", code)
            }
        }
    }
}

impl std::error::Error for TournamentError {}

/// Medal standings after the final and third-place game.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Medals {
    pub gold: Team,
    pub silver: Team,
    pub bronze: Team,
}

/// Everything a full tournament run produces. The core returns this
/// struct; rendering is the caller's job.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentReport {
    /// Standings per group, ranked within the group.
    pub group_standings: GroupStandings,
    /// All teams merged and re-ranked; `global_rank` is set 1..=N.
    pub global_ranking: Vec<StandingEntry>,
    /// Top 8 of the global ranking, rank order.
    pub qualifiers: Vec<StandingEntry>,
    pub quarter_finals: Vec<KnockoutResult>,
    pub semi_finals: Vec<KnockoutResult>,
    pub third_place: KnockoutResult,
    pub final_game: KnockoutResult,
    pub medals: Medals,
}
