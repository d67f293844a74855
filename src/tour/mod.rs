//! Tour data aggregation
//!
//! This module covers the whole path from the tour service to a
//! finalized result set:
//! - query templates for the list endpoints
//! - the XML response envelope
//! - count resolution and sequential page fetching
//! - identifier intersection of the primary set against the secondary

pub mod client;
pub mod envelope;
pub mod filter;
pub mod pipeline;
pub mod query;
pub mod source;

// Re-export commonly used types from submodules
pub use client::TourApiClient;
pub use envelope::{TourEnvelope, parse_envelope};
pub use filter::intersect_by_id;
pub use pipeline::{CancelToken, TourPipeline};
pub use query::{DEFAULT_PAGE_SIZE, Endpoint, EventWindow, TourQuery, total_pages};
pub use source::TourSource;
