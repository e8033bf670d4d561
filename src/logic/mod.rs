//! Tournament simulation logic: form, matches, group stage, ranking, knockout.

mod form;
mod group_stage;
mod knockout;
mod ranking;
mod simulate;
mod tournament;

pub use form::{initial_form, FormTracker};
pub use group_stage::{init_group_standings, run_group_stage};
pub use knockout::{run_knockout_match, run_knockout_round, seed_quarter_finals};
pub use ranking::{global_ranking, qualifiers, rank_standings, QUALIFIER_COUNT};
pub use simulate::{score_match, simulate_match};
pub use tournament::{run_tournament, validate_roster};
