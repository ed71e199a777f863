use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Country code retained by the roster filter
pub const ROSTER_COUNTRY: &str = "CAN";

/// Division code retained by the roster filter
pub const ROSTER_DIVISION: &str = "ON";

/// One roster entry from an individual point list.
///
/// Only the two columns the roster filter inspects are typed; everything else
/// (names, points, ranks) rides through untouched in `extra`. Entries missing
/// either column decode with an empty value and never pass the filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skier {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub division: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response envelope for `/ViewPointsList.asp`
#[derive(Debug, Clone, Deserialize)]
pub struct RosterResponse {
    pub skiers: Vec<Skier>,
}

/// Filter a full roster down to Ontario-division Canadian entries,
/// preserving relative order. No other transformation is applied.
pub fn filter_roster(skiers: Vec<Skier>) -> Vec<Skier> {
    skiers
        .into_iter()
        .filter(|s| s.country == ROSTER_COUNTRY && s.division == ROSTER_DIVISION)
        .collect()
}
