//! Form tracking: a running scalar per team, seeded from exhibition
//! history and mutated after every simulated match.

use crate::models::{ExhibitionHistory, Team};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Federation code -> form. Shared mutable context for one tournament
/// run; passed by reference into every simulation call and never reset
/// between phases.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct FormTracker {
    entries: HashMap<String, i32>,
}

impl FormTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current form for a team, if it has ever been set.
    pub fn value(&self, code: &str) -> Option<i32> {
        self.entries.get(code).copied()
    }

    /// Add a delta, creating the entry at 0 first if absent.
    pub fn add(&mut self, code: &str, delta: i32) {
        *self.entries.entry(code.to_string()).or_insert(0) += delta;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compute initial form from exhibition history.
///
/// Each match contributes `diff + 10` on a win and `diff - 10` otherwise,
/// where `diff = own score - opponent score`. Codes not present in the
/// roster get no entry; a malformed result string is skipped with a
/// diagnostic rather than poisoning the team's sum.
pub fn initial_form(exhibitions: &ExhibitionHistory, teams: &[Team]) -> FormTracker {
    let known: std::collections::HashSet<&str> = teams.iter().map(|t| t.code.as_str()).collect();
    let mut form = FormTracker::new();

    for (code, matches) in exhibitions {
        if !known.contains(code.as_str()) {
            log::warn!("exhibition history for unknown team {}, ignoring", code);
            continue;
        }
        let mut total = 0;
        for m in matches {
            match parse_result(&m.result) {
                Some((own, opponent)) => {
                    let diff = own - opponent;
                    total += diff + if diff > 0 { 10 } else { -10 };
                }
                None => {
                    log::warn!("malformed exhibition result {:?} for {}, skipping", m.result, code);
                }
            }
        }
        form.add(code, total);
    }

    form
}

/// Parse "ownScore-opponentScore" into two non-negative integers.
fn parse_result(result: &str) -> Option<(i32, i32)> {
    let (own, opponent) = result.split_once('-')?;
    let own: i32 = own.trim().parse().ok()?;
    let opponent: i32 = opponent.trim().parse().ok()?;
    Some((own, opponent))
}
