//! Query templates and page-boundary math for the tour service

use crate::error::TourHubError;
use crate::Result;
use chrono::NaiveDate;

/// Fixed page size used by the reference queries
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// List endpoints of the tour service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Area-based attraction listing
    AreaBasedList,
    /// Festival search with an event date range
    SearchFestival,
}

impl Endpoint {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::AreaBasedList => "areaBasedList1",
            Endpoint::SearchFestival => "searchFestival1",
        }
    }
}

/// Event date range for festival queries, serialized as `YYYYMMDD`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl EventWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(TourHubError::validation(format!(
                "Event window end {end} is before start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    fn params(&self) -> [(&'static str, String); 2] {
        [
            ("eventStartDate", self.start.format("%Y%m%d").to_string()),
            ("eventEndDate", self.end.format("%Y%m%d").to_string()),
        ]
    }
}

/// A query template: all fixed parameters of one upstream list query,
/// everything except page size and page number
#[derive(Debug, Clone, PartialEq)]
pub struct TourQuery {
    pub endpoint: Endpoint,
    pub content_type_id: u32,
    pub area_code: Option<u32>,
    pub sigungu_code: Option<u32>,
    pub cat1: Option<String>,
    pub cat2: Option<String>,
    pub cat3: Option<String>,
    pub event_window: Option<EventWindow>,
}

impl TourQuery {
    /// Area-based attraction listing for one area
    #[must_use]
    pub fn area_based(content_type_id: u32, area_code: u32) -> Self {
        Self {
            endpoint: Endpoint::AreaBasedList,
            content_type_id,
            area_code: Some(area_code),
            sigungu_code: None,
            cat1: None,
            cat2: None,
            cat3: None,
            event_window: None,
        }
    }

    /// Festival search restricted to an event date range
    #[must_use]
    pub fn festival_search(content_type_id: u32, area_code: u32, window: EventWindow) -> Self {
        Self {
            endpoint: Endpoint::SearchFestival,
            content_type_id,
            area_code: Some(area_code),
            sigungu_code: None,
            cat1: None,
            cat2: None,
            cat3: None,
            event_window: Some(window),
        }
    }

    /// Query string pairs for one page request, in the order the
    /// reference queries send them
    #[must_use]
    pub fn query_pairs(&self, page_no: u32, num_of_rows: u32) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("numOfRows", num_of_rows.to_string()),
            ("pageNo", page_no.to_string()),
            ("listYN", "Y".to_string()),
            ("arrange", "A".to_string()),
            ("contentTypeId", self.content_type_id.to_string()),
        ];

        if let Some(code) = self.area_code {
            pairs.push(("areaCode", code.to_string()));
        }
        if let Some(code) = self.sigungu_code {
            pairs.push(("sigunguCode", code.to_string()));
        }
        if let Some(cat) = &self.cat1 {
            pairs.push(("cat1", cat.clone()));
        }
        if let Some(cat) = &self.cat2 {
            pairs.push(("cat2", cat.clone()));
        }
        if let Some(cat) = &self.cat3 {
            pairs.push(("cat3", cat.clone()));
        }
        if let Some(window) = &self.event_window {
            pairs.extend(window.params());
        }

        pairs
    }
}

/// Number of pages needed to cover `total_count` items at `page_size`
/// items per page
#[must_use]
pub fn total_pages(total_count: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn window() -> EventWindow {
        EventWindow::new(
            NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 31).unwrap(),
        )
        .unwrap()
    }

    #[rstest]
    #[case(25, 12, 3)]
    #[case(0, 12, 0)]
    #[case(12, 12, 1)]
    #[case(13, 12, 2)]
    #[case(1, 1, 1)]
    fn test_total_pages(#[case] total: u32, #[case] page_size: u32, #[case] expected: u32) {
        assert_eq!(total_pages(total, page_size), expected);
    }

    #[test]
    fn test_area_based_pairs() {
        let mut query = TourQuery::area_based(15, 1);
        query.cat1 = Some("A02".to_string());
        query.cat2 = Some("A0207".to_string());

        let pairs = query.query_pairs(2, 12);
        assert!(pairs.contains(&("numOfRows", "12".to_string())));
        assert!(pairs.contains(&("pageNo", "2".to_string())));
        assert!(pairs.contains(&("listYN", "Y".to_string())));
        assert!(pairs.contains(&("arrange", "A".to_string())));
        assert!(pairs.contains(&("contentTypeId", "15".to_string())));
        assert!(pairs.contains(&("areaCode", "1".to_string())));
        assert!(pairs.contains(&("cat2", "A0207".to_string())));
        assert!(!pairs.iter().any(|(k, _)| *k == "eventStartDate"));
    }

    #[test]
    fn test_festival_pairs_carry_event_window() {
        let query = TourQuery::festival_search(15, 1, window());
        let pairs = query.query_pairs(1, 1);
        assert!(pairs.contains(&("eventStartDate", "20260801".to_string())));
        assert!(pairs.contains(&("eventEndDate", "20261031".to_string())));
        assert_eq!(query.endpoint.path(), "searchFestival1");
    }

    #[test]
    fn test_inverted_event_window_rejected() {
        let result = EventWindow::new(
            NaiveDate::from_ymd_opt(2026, 10, 31).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        );
        assert!(result.is_err());
    }
}
