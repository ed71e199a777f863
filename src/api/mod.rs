//! HTTP client module for the CCC points list API.
//!
//! This module provides the `ApiClient` for fetching raw point list and
//! roster payloads from apps.cccski.com, and the `ApiError` taxonomy the
//! rest of the crate surfaces to callers.
//!
//! The upstream API is unauthenticated and serves JSON when asked with
//! `format=json`.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
