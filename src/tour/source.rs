//! Transport seam between the pipeline and the tour service

use async_trait::async_trait;

use crate::Result;
use crate::models::TourItem;
use crate::tour::query::TourQuery;

/// A paginated source of tour items
///
/// The pipeline only talks to the service through this trait, so tests
/// can substitute an in-memory source for the HTTP client.
#[async_trait]
pub trait TourSource: Send + Sync {
    /// Fixed page size this source fetches list pages with
    fn page_size(&self) -> u32;

    /// Declared total result count for a query template
    ///
    /// Issues a single request with page size 1 and reads the count from
    /// the response envelope. Not retried.
    async fn total_count(&self, query: &TourQuery) -> Result<u32>;

    /// Fetch one 1-based page of results, in response order
    async fn fetch_page(&self, query: &TourQuery, page_no: u32) -> Result<Vec<TourItem>>;
}
