//! Data structures for the tournament: teams, fixtures, standings, report.

mod game;
mod standing;
mod team;
mod tournament;

pub use game::{KnockoutResult, MatchFixture, MatchId, MatchOutcome, RoundType};
pub use standing::{GroupStandings, StandingEntry};
pub use team::{ExhibitionHistory, ExhibitionMatch, GroupRoster, Team};
pub use tournament::{Medals, TournamentError, TournamentReport};
