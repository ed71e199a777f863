//! Day-cached access to CCC points list data.
//!
//! This crate fetches seeding point lists and skier rosters from the
//! apps.cccski.com JSON API, reshapes them into client-friendly structures,
//! and caches the reshaped results in memory for the rest of the calendar
//! day. The upstream content changes at most daily, so the first call of a
//! day refreshes from upstream and everything after is served locally.
//!
//! The cache is single-process and best-effort: entries are keyed by logical
//! id plus the current date, failed fetches are never cached, and state is
//! lost on restart.
//!
//! ```no_run
//! use pointscache::{ApiClient, PointsService};
//!
//! # async fn run() -> Result<(), pointscache::ApiError> {
//! let service = PointsService::new(ApiClient::new()?);
//! for group in service.all_points_lists().await? {
//!     println!("{} (published {})", group.name, group.publication_date);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod models;
pub mod service;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use models::{PointsList, PointsListGroup, PointsListSummary, Skier};
pub use service::PointsService;
