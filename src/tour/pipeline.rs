//! The fetch-and-intersect pipeline
//!
//! One load cycle runs the explicit stages count → paginate → intersect.
//! Every stage and page boundary observes a [`CancelToken`], so a
//! consumer that is torn down mid-flight stops the pipeline instead of
//! receiving late results.

use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

use crate::Result;
use crate::error::TourHubError;
use crate::models::TourItem;
use crate::tour::filter::intersect_by_id;
use crate::tour::query::{TourQuery, total_pages};
use crate::tour::source::TourSource;

/// Cooperative cancellation flag shared between a consumer and its
/// running pipeline
///
/// Clones share the same flag; cancelling any clone cancels the cycle.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the consuming view as torn down
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(TourHubError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Fetch-and-intersect pipeline over a [`TourSource`]
pub struct TourPipeline<S> {
    source: S,
    fetch_concurrency: usize,
}

impl<S: TourSource> TourPipeline<S> {
    /// Create a fully sequential pipeline
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            fetch_concurrency: 1,
        }
    }

    /// Allow up to `concurrency` page requests in flight at once
    ///
    /// Pages still land in page-number order.
    #[must_use]
    pub fn with_fetch_concurrency(mut self, concurrency: usize) -> Self {
        self.fetch_concurrency = concurrency.max(1);
        self
    }

    /// Resolve the total count for a query, then fetch every page
    ///
    /// Items are concatenated in page order; duplicate identifiers within
    /// the fetch are dropped, first occurrence wins. A zero total fetches
    /// no pages at all.
    pub async fn fetch_all(&self, query: &TourQuery, cancel: &CancelToken) -> Result<Vec<TourItem>> {
        cancel.check()?;

        let total = self.source.total_count(query).await?;
        let pages = total_pages(total, self.source.page_size());
        info!(
            endpoint = query.endpoint.path(),
            total, pages, "starting paginated fetch"
        );

        let mut items = Vec::with_capacity(total as usize);
        if self.fetch_concurrency <= 1 {
            for page_no in 1..=pages {
                cancel.check()?;
                items.extend(self.source.fetch_page(query, page_no).await?);
            }
        } else {
            let mut pages_stream =
                stream::iter((1..=pages).map(|page_no| self.source.fetch_page(query, page_no)))
                    .buffered(self.fetch_concurrency);
            while let Some(page) = pages_stream.next().await {
                cancel.check()?;
                items.extend(page?);
            }
        }

        let before = items.len();
        let mut seen = HashSet::new();
        items.retain(|item| seen.insert(item.content_id.clone()));
        if items.len() < before {
            debug!(
                dropped = before - items.len(),
                "dropped duplicate identifiers within one fetch"
            );
        }

        Ok(items)
    }

    /// Run one full load cycle: fetch both sources, intersect the primary
    /// against the secondary by identifier
    pub async fn run(
        &self,
        primary: &TourQuery,
        secondary: &TourQuery,
        cancel: &CancelToken,
    ) -> Result<Vec<TourItem>> {
        let primary_items = self.fetch_all(primary, cancel).await?;
        let secondary_items = self.fetch_all(secondary, cancel).await?;
        cancel.check()?;

        let filtered = intersect_by_id(primary_items, &secondary_items);
        info!(kept = filtered.len(), "intersection complete");
        Ok(filtered)
    }
}
