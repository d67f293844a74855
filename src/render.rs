//! Delivery seam between the pipeline and a rendering layer
//!
//! The aggregator's only contract with the renderer: one finalized,
//! order-stable sequence of items per load cycle, or one error string.
//! A cancelled cycle delivers nothing at all.

use tracing::debug;

use crate::Result;
use crate::error::TourHubError;
use crate::models::TourItem;

/// Consumer of one load cycle's outcome
pub trait TourView {
    /// Display the finalized item list
    fn show_items(&mut self, items: &[TourItem]);

    /// Replace the entire display with an error message
    fn show_error(&mut self, message: &str);
}

/// Deliver one load cycle's outcome to a view
///
/// Errors collapse to a single user-facing string; there is no partial
/// display. A cancelled outcome is discarded without touching the view,
/// since its consumer is already gone.
pub fn deliver(view: &mut dyn TourView, outcome: &Result<Vec<TourItem>>) {
    match outcome {
        Ok(items) => view.show_items(items),
        Err(TourHubError::Cancelled) => {
            debug!("load cycle cancelled, discarding result");
        }
        Err(e) => view.show_error(&e.user_message()),
    }
}

/// Card-style text renderer for the CLI
#[derive(Debug, Default)]
pub struct TextGrid;

impl TourView for TextGrid {
    fn show_items(&mut self, items: &[TourItem]) {
        println!("Tour Information");
        println!("================");
        for item in items {
            println!();
            println!("{}", item.title);
            println!("  {}", item.addr);
            if let Some(image) = &item.image {
                println!("  image: {image}");
            }
        }
        println!();
        println!("{} attraction(s) listed", items.len());
    }

    fn show_error(&mut self, message: &str) {
        println!("Error: {message}");
    }
}

/// JSON renderer, for piping the aggregated list into other tools
#[derive(Debug, Default)]
pub struct JsonView;

impl TourView for JsonView {
    fn show_items(&mut self, items: &[TourItem]) {
        let json =
            serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
        println!("{json}");
    }

    fn show_error(&mut self, message: &str) {
        println!("{}", serde_json::json!({ "error": message }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingView {
        items: Vec<Vec<TourItem>>,
        errors: Vec<String>,
    }

    impl TourView for RecordingView {
        fn show_items(&mut self, items: &[TourItem]) {
            self.items.push(items.to_vec());
        }

        fn show_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }
    }

    fn item(id: &str) -> TourItem {
        TourItem {
            content_id: id.to_string(),
            title: format!("Festival {id}"),
            addr: String::new(),
            image: None,
            mapx: None,
            mapy: None,
        }
    }

    #[test]
    fn test_success_delivers_items_once() {
        let mut view = RecordingView::default();
        deliver(&mut view, &Ok(vec![item("1"), item("2")]));

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].len(), 2);
        assert!(view.errors.is_empty());
    }

    #[test]
    fn test_failure_delivers_one_error_string_and_no_items() {
        let mut view = RecordingView::default();
        deliver(&mut view, &Err(TourHubError::parse("bad envelope")));

        assert!(view.items.is_empty());
        assert_eq!(view.errors.len(), 1);
        assert!(view.errors[0].contains("unreadable response"));
    }

    #[test]
    fn test_cancelled_outcome_never_reaches_the_view() {
        let mut view = RecordingView::default();
        deliver(&mut view, &Err(TourHubError::Cancelled));

        assert!(view.items.is_empty());
        assert!(view.errors.is_empty());
    }
}
