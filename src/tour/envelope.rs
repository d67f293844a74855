//! XML response envelope of the tour service

use quick_xml::de::from_str;
use serde::Deserialize;

use crate::Result;
use crate::error::TourHubError;
use crate::models::TourItem;

/// Result code the service uses for a successful response
const RESULT_OK: &str = "0000";

/// Outer response structure wrapping the result header and body
#[derive(Debug, Deserialize)]
pub struct TourEnvelope {
    pub header: EnvelopeHeader,
    pub body: EnvelopeBody,
}

#[derive(Debug, Deserialize)]
pub struct EnvelopeHeader {
    #[serde(rename = "resultCode")]
    pub result_code: String,
    #[serde(rename = "resultMsg")]
    pub result_msg: String,
}

#[derive(Debug, Deserialize)]
pub struct EnvelopeBody {
    pub items: Option<EnvelopeItems>,
    #[serde(rename = "numOfRows")]
    pub num_of_rows: u32,
    #[serde(rename = "pageNo")]
    pub page_no: u32,
    #[serde(rename = "totalCount")]
    pub total_count: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct EnvelopeItems {
    #[serde(rename = "item", default)]
    pub item: Vec<RawTourItem>,
}

/// One item record as the service emits it
#[derive(Debug, Deserialize)]
pub struct RawTourItem {
    #[serde(rename = "contentid")]
    pub content_id: String,
    pub title: String,
    #[serde(rename = "addr1")]
    pub addr: Option<String>,
    #[serde(rename = "firstimage")]
    pub image: Option<String>,
    pub mapx: Option<String>,
    pub mapy: Option<String>,
}

impl EnvelopeBody {
    /// Items of this page, converted and in response order
    #[must_use]
    pub fn into_items(self) -> Vec<TourItem> {
        self.items
            .unwrap_or_default()
            .item
            .into_iter()
            .map(RawTourItem::into_tour_item)
            .collect()
    }
}

impl RawTourItem {
    fn into_tour_item(self) -> TourItem {
        TourItem {
            content_id: self.content_id,
            title: self.title,
            addr: self.addr.unwrap_or_default(),
            image: none_if_empty(self.image),
            mapx: none_if_empty(self.mapx),
            mapy: none_if_empty(self.mapy),
        }
    }
}

// The service emits empty elements for absent optional fields
fn none_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse one response body into an envelope
///
/// Malformed XML is a parse error; a non-success result code is an API
/// error carrying the service's own message.
pub fn parse_envelope(xml: &str) -> Result<TourEnvelope> {
    let envelope: TourEnvelope = from_str(xml)
        .map_err(|e| TourHubError::parse(format!("Malformed tour service response: {e}")))?;

    if envelope.header.result_code != RESULT_OK {
        return Err(TourHubError::api(format!(
            "Tour service error {}: {}",
            envelope.header.result_code, envelope.header.result_msg
        )));
    }

    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ITEM_PAGE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<response>
    <header>
        <resultCode>0000</resultCode>
        <resultMsg>OK</resultMsg>
    </header>
    <body>
        <items>
            <item>
                <addr1>171 Sejong-daero, Jongno-gu, Seoul</addr1>
                <contentid>2674675</contentid>
                <firstimage>http://tong.visitkorea.or.kr/cms/resource/01/2674671_image2_1.jpg</firstimage>
                <mapx>126.9768545044</mapx>
                <mapy>37.5724848376</mapy>
                <title><![CDATA[Seoul Lantern Festival]]></title>
            </item>
            <item>
                <addr1>Yeouido, Yeongdeungpo-gu, Seoul</addr1>
                <contentid>786409</contentid>
                <firstimage></firstimage>
                <title>Yeouido Spring Flower Festival</title>
            </item>
        </items>
        <numOfRows>12</numOfRows>
        <pageNo>1</pageNo>
        <totalCount>25</totalCount>
    </body>
</response>"#;

    #[test]
    fn test_parse_two_item_page() {
        let envelope = parse_envelope(TWO_ITEM_PAGE).unwrap();
        assert_eq!(envelope.body.total_count, 25);
        assert_eq!(envelope.body.page_no, 1);
        assert_eq!(envelope.body.num_of_rows, 12);

        let items = envelope.body.into_items();
        assert_eq!(items.len(), 2);

        let first = &items[0];
        assert_eq!(first.content_id, "2674675");
        assert_eq!(first.title, "Seoul Lantern Festival");
        assert_eq!(first.addr, "171 Sejong-daero, Jongno-gu, Seoul");
        assert!(first.image.as_deref().unwrap().ends_with("image2_1.jpg"));
        assert_eq!(first.mapx.as_deref(), Some("126.9768545044"));

        // empty elements normalize to None
        let second = &items[1];
        assert!(second.image.is_none());
        assert!(second.mapx.is_none());
        assert!(second.coordinates().is_none());
    }

    #[test]
    fn test_parse_empty_result() {
        let xml = r#"<response>
            <header><resultCode>0000</resultCode><resultMsg>OK</resultMsg></header>
            <body>
                <items></items>
                <numOfRows>1</numOfRows>
                <pageNo>1</pageNo>
                <totalCount>0</totalCount>
            </body>
        </response>"#;

        let envelope = parse_envelope(xml).unwrap();
        assert_eq!(envelope.body.total_count, 0);
        assert!(envelope.body.into_items().is_empty());
    }

    #[test]
    fn test_missing_items_element() {
        let xml = r#"<response>
            <header><resultCode>0000</resultCode><resultMsg>OK</resultMsg></header>
            <body>
                <numOfRows>1</numOfRows>
                <pageNo>1</pageNo>
                <totalCount>0</totalCount>
            </body>
        </response>"#;

        let envelope = parse_envelope(xml).unwrap();
        assert!(envelope.body.into_items().is_empty());
    }

    #[test]
    fn test_service_error_code_surfaces_as_api_error() {
        let xml = r#"<response>
            <header>
                <resultCode>30</resultCode>
                <resultMsg>SERVICE_KEY_IS_NOT_REGISTERED_ERROR</resultMsg>
            </header>
            <body>
                <numOfRows>0</numOfRows>
                <pageNo>0</pageNo>
                <totalCount>0</totalCount>
            </body>
        </response>"#;

        let err = parse_envelope(xml).unwrap_err();
        assert!(matches!(err, TourHubError::Api { .. }));
        assert!(err.to_string().contains("SERVICE_KEY_IS_NOT_REGISTERED"));
    }

    #[test]
    fn test_malformed_body_is_parse_error() {
        let err = parse_envelope("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, TourHubError::Parse { .. }));
    }
}
