//! Basketball tournament simulator: library with models and simulation logic.

pub mod logic;
pub mod models;

pub use logic::{
    global_ranking, init_group_standings, initial_form, qualifiers, rank_standings,
    run_group_stage, run_knockout_match, run_knockout_round, run_tournament, score_match,
    seed_quarter_finals, simulate_match, validate_roster, FormTracker, QUALIFIER_COUNT,
};
pub use models::{
    ExhibitionHistory, ExhibitionMatch, GroupRoster, GroupStandings, KnockoutResult, MatchFixture,
    MatchId, MatchOutcome, Medals, RoundType, StandingEntry, Team, TournamentError,
    TournamentReport,
};
