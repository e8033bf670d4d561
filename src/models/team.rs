//! Team roster and exhibition-history input shapes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A national team. The federation code is the canonical key everywhere
/// (form map, standings lookups); display names are presentation only.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Display name, e.g. "Serbia".
    pub name: String,
    /// Federation code, e.g. "SRB". Unique across the tournament.
    pub code: String,
    /// Static world ranking; lower = stronger.
    pub ranking: i32,
}

impl Team {
    pub fn new(name: impl Into<String>, code: impl Into<String>, ranking: i32) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            ranking,
        }
    }
}

/// Group id (e.g. "A") to its roster, in seeding order. BTreeMap keeps
/// iteration deterministic, which fixes the round-robin match order.
pub type GroupRoster = BTreeMap<String, Vec<Team>>;

/// One prior exhibition match for a team, as read from exhibitions.json.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ExhibitionMatch {
    /// Opponent code; informational only.
    #[serde(default)]
    pub opponent: Option<String>,
    /// Result from the team's own perspective, "ownScore-opponentScore".
    pub result: String,
}

/// Federation code to that team's exhibition matches, oldest first.
pub type ExhibitionHistory = BTreeMap<String, Vec<ExhibitionMatch>>;
