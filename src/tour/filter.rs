//! Identifier intersection of two result sets

use std::collections::HashSet;

use crate::models::TourItem;

/// Retain the primary items whose identifier also appears in the
/// secondary set, preserving primary order
///
/// A repeated identifier is kept once, at its first position.
#[must_use]
pub fn intersect_by_id(primary: Vec<TourItem>, secondary: &[TourItem]) -> Vec<TourItem> {
    let secondary_ids: HashSet<&str> = secondary
        .iter()
        .map(|item| item.content_id.as_str())
        .collect();

    let mut seen = HashSet::new();
    primary
        .into_iter()
        .filter(|item| {
            secondary_ids.contains(item.content_id.as_str()) && seen.insert(item.content_id.clone())
        })
        .collect()
}
