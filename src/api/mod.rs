//! Remote query functions.
//!
//! Two GET endpoints on the listing site: autocomplete suggestions for a
//! partial query, and resolution of a full query to a listing-page path.
//! Neither retries, caches or sets its own timeout.

pub mod client;
pub mod endpoints;

use crate::model::ApiError;
use std::future::Future;

pub use client::HttpSearchApi;
pub use endpoints::Endpoints;

/// Prefix joined to a resolved path to form the navigation target.
pub const LISTING_PREFIX: &str = "/lst";

/// The two remote calls the search widget depends on.
///
/// The controller is generic over this trait so tests can script responses
/// and timing without a network.
pub trait SearchApi: Send + Sync + 'static {
    /// Suggestions for a partial query, in server order.
    fn fetch_suggestions(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<String>, ApiError>> + Send;

    /// Listing-page path (e.g. `/bmw-3er/de`) for a full query.
    fn resolve_listing_path(&self, query: &str)
        -> impl Future<Output = Result<String, ApiError>> + Send;
}

/// Navigation target for a resolved listing path.
pub fn navigation_target(resolved_path: &str) -> String {
    format!("{LISTING_PREFIX}{resolved_path}")
}
