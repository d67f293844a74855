//! `TourHub` - attraction and festival aggregation for the Korea Tourism open API
//!
//! This library provides the fetch-and-intersect pipeline behind the
//! `TourHub` CLI: result-count resolution, paginated fetching, identifier
//! intersection, and delivery to pluggable rendering and map seams.

pub mod config;
pub mod error;
pub mod map;
pub mod models;
pub mod render;
pub mod tour;

// Re-export core types for public API
pub use config::TourHubConfig;
pub use error::TourHubError;
pub use map::{MapService, Marker, RecordingMap, TraceMap, plot_items};
pub use models::{Coordinates, TourItem};
pub use render::{JsonView, TextGrid, TourView, deliver};
pub use tour::{
    CancelToken, Endpoint, EventWindow, TourApiClient, TourPipeline, TourQuery, TourSource,
    intersect_by_id, total_pages,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TourHubError>;
