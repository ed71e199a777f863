//! In-memory day-keyed caching.
//!
//! This module provides the `DayCache` used to hold normalized API results
//! for the rest of the calendar day. There is no eviction and no TTL:
//! staleness is entirely a property of the key, which embeds the date it was
//! built on. Cached data lives for the process lifetime only.

pub mod manager;

pub use manager::{day_key, DayCache};
