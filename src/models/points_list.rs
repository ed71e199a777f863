use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::ApiError;
use crate::utils::format::reformat_date;

/// List type for seeding competitions; the only type surfaced to clients
pub const SEEDING_LIST_TYPE: &str = "Seeding";

/// Separator between deduplicated member names in a group heading
const NAME_SEPARATOR: &str = " / ";

/// One point list as returned by the upstream API.
///
/// Dates are free-text in the upstream `MMM D, YYYY` form, sometimes with
/// `&nbsp;` entities in place of spaces. Columns not modeled here (including
/// the id used to fetch a roster) are carried in `extra` so they survive into
/// client output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsList {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "listType", default)]
    pub list_type: String,
    #[serde(rename = "startDate", default)]
    pub start_date: String,
    #[serde(rename = "endDate", default)]
    pub end_date: String,
    #[serde(rename = "publicationDate", default)]
    pub publication_date: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response envelope for `/ViewPoints.asp`
#[derive(Debug, Clone, Deserialize)]
pub struct PointsListsResponse {
    #[serde(rename = "pointsLists")]
    pub points_lists: Vec<PointsList>,
}

/// A point list member of a group, with the three date fields stripped.
/// The dates are redundant once hoisted onto the group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsListSummary {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "listType", default)]
    pub list_type: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<PointsList> for PointsListSummary {
    fn from(list: PointsList) -> Self {
        Self {
            name: list.name,
            list_type: list.list_type,
            extra: list.extra,
        }
    }
}

/// Point lists published on the same day, folded into one client-facing group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsListGroup {
    pub name: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    #[serde(rename = "publicationDate")]
    pub publication_date: String,
    pub lists: Vec<PointsListSummary>,
}

/// Fold raw point lists into per-publication-date groups.
///
/// Only `Seeding` lists are considered. Grouping is on the raw, unreformatted
/// publication date string; group order follows first occurrence among the
/// filtered input. Each group's name is the deduplicated union of member
/// names in first-seen order, and its dates are the first member's,
/// reformatted to `YYYY-MM-DD`.
pub fn group_seeding_lists(lists: Vec<PointsList>) -> Result<Vec<PointsListGroup>, ApiError> {
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<PointsList>> = HashMap::new();

    for list in lists {
        if list.list_type != SEEDING_LIST_TYPE {
            continue;
        }
        let date = list.publication_date.clone();
        match buckets.get_mut(&date) {
            Some(members) => members.push(list),
            None => {
                order.push(date.clone());
                buckets.insert(date, vec![list]);
            }
        }
    }

    let mut groups = Vec::with_capacity(order.len());
    for date in order {
        let members = match buckets.remove(&date) {
            Some(members) if !members.is_empty() => members,
            _ => continue,
        };

        let mut names: Vec<&str> = Vec::new();
        for member in &members {
            if !names.contains(&member.name.as_str()) {
                names.push(&member.name);
            }
        }
        let name = names.join(NAME_SEPARATOR);

        let first = &members[0];
        let start_date = reformat_date(&first.start_date)?;
        let end_date = reformat_date(&first.end_date)?;
        let publication_date = reformat_date(&first.publication_date)?;

        groups.push(PointsListGroup {
            name,
            start_date,
            end_date,
            publication_date,
            lists: members.into_iter().map(PointsListSummary::from).collect(),
        });
    }

    Ok(groups)
}

// ============================================================================
// Tests
// ============================================================================
