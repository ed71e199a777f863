//! Data models for CCC points list entities.
//!
//! This module contains the structures used to represent upstream payloads
//! and the client-facing views derived from them:
//!
//! - `PointsList`: one seeding point list as returned by the API
//! - `PointsListGroup`, `PointsListSummary`: lists folded by publication date
//! - `Skier`: a single roster entry
//!
//! The normalizers that reshape raw payloads into the client-facing views
//! live alongside their types.

pub mod points_list;
pub mod skier;

pub use points_list::{
    group_seeding_lists, PointsList, PointsListGroup, PointsListSummary, PointsListsResponse,
    SEEDING_LIST_TYPE,
};
pub use skier::{filter_roster, RosterResponse, Skier, ROSTER_COUNTRY, ROSTER_DIVISION};
