//! Public accessors tying the fetcher, day cache, and normalizers together.

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::api::{ApiClient, ApiError};
use crate::cache::{day_key, DayCache};
use crate::models::{
    filter_roster, group_seeding_lists, PointsListGroup, PointsListsResponse, RosterResponse,
    Skier,
};

/// Logical id under which the aggregated group view is cached
const ALL_LISTS_ID: &str = "all-lists";

/// Source of "today" for cache keys. Injectable so tests can pin or roll the
/// calendar day.
pub type Clock = Box<dyn Fn() -> NaiveDate + Send + Sync>;

/// Day-cached access to the CCC points list API.
///
/// Results are cached in memory under keys embedding the current UTC date,
/// so the first call of a day refreshes from upstream and later calls are
/// served locally. A failed fetch never populates the cache; the next call
/// retries against upstream.
///
/// Concurrent calls that miss the same key may each fetch and each store
/// (last write wins). Upstream data is stable within a day, so the duplicate
/// fetch is tolerated rather than serialized.
pub struct PointsService {
    client: ApiClient,
    clock: Clock,
    groups: DayCache<Vec<PointsListGroup>>,
    rosters: DayCache<Vec<Skier>>,
}

impl PointsService {
    /// Create a service keyed on the current UTC date.
    pub fn new(client: ApiClient) -> Self {
        Self::with_clock(client, Box::new(|| Utc::now().date_naive()))
    }

    /// Create a service with an injected clock.
    pub fn with_clock(client: ApiClient, clock: Clock) -> Self {
        Self {
            client,
            clock,
            groups: DayCache::new(),
            rosters: DayCache::new(),
        }
    }

    /// Fetch all seeding point lists, grouped by publication date.
    ///
    /// Served from cache after the first successful call of the day, with no
    /// re-fetch and no re-normalization. Errors propagate to the caller
    /// untranslated and leave the cache untouched.
    pub async fn all_points_lists(&self) -> Result<Vec<PointsListGroup>, ApiError> {
        let key = day_key(ALL_LISTS_ID, (self.clock)());
        if let Some(groups) = self.groups.get(&key) {
            debug!(key = %key, "points list cache hit");
            return Ok(groups);
        }

        debug!(key = %key, "points list cache miss");
        let raw = self.client.get_value("/ViewPoints.asp?format=json").await?;
        let response: PointsListsResponse = serde_json::from_value(raw)?;
        let groups = group_seeding_lists(response.points_lists)?;

        // only cache if request succeeded
        self.groups.insert(key, groups.clone());
        Ok(groups)
    }

    /// Fetch the filtered skier roster for one point list.
    ///
    /// Same caching contract as [`Self::all_points_lists`], keyed per list id.
    pub async fn points_list_data(&self, id: &str) -> Result<Vec<Skier>, ApiError> {
        let key = day_key(id, (self.clock)());
        if let Some(roster) = self.rosters.get(&key) {
            debug!(key = %key, "roster cache hit");
            return Ok(roster);
        }

        debug!(key = %key, "roster cache miss");
        let raw = self
            .client
            .get_value(&format!("/ViewPointsList.asp?id={}&format=json", id))
            .await?;
        let response: RosterResponse = serde_json::from_value(raw)?;
        let roster = filter_roster(response.skiers);

        // only cache if request succeeded
        self.rosters.insert(key, roster.clone());
        Ok(roster)
    }
}
