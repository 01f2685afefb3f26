/// Listing fetch and JSON envelope parsing
///
/// One GET per (source, refresh) against the fixed listing endpoint.
/// The envelope is `{code, msg?, data?}` where `code == 0` means success.
/// Parsing is a pure function over the body text so it can be exercised
/// without a network.

use serde::Deserialize;
use std::time::Duration;

use super::source::Source;
use crate::error::Error;

/// Fixed listing endpoint; the provider is chosen via query parameters.
const LISTING_ENDPOINT: &str = "http://wallpaper-api.smartisan.com/app/index.php";

/// How many records one listing request asks for.
const LISTING_LIMIT: &str = "20";

const LISTING_TIMEOUT: Duration = Duration::from_secs(10);

/// Shown in place of author/description when the API omits them.
pub const FIELD_PLACEHOLDER: &str = "N/A";

/// One wallpaper as returned by the listing API.
/// Immutable once parsed; replaced wholesale when the listing is refetched.
#[derive(Debug, Clone, PartialEq)]
pub struct WallpaperRecord {
    /// Identifier used for display and for the `{id}.jpg` download name.
    /// Empty when the API omitted it; such records can still be previewed
    /// but are skipped by the downloader.
    pub id: String,
    pub author: String,
    pub desc: String,
    /// Location of the full-resolution image bytes.
    pub url: String,
}

/// Top-level JSON envelope of the listing response.
#[derive(Deserialize)]
struct Envelope {
    code: i64,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    data: Vec<RawRecord>,
}

/// One listing entry as it appears on the wire, all fields optional.
#[derive(Deserialize)]
struct RawRecord {
    #[serde(default)]
    id: Option<IdValue>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    desc: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// The API serves ids as strings or bare numbers depending on the source.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdValue {
    Text(String),
    Number(i64),
}

impl IdValue {
    fn into_string(self) -> String {
        match self {
            IdValue::Text(text) => text,
            IdValue::Number(number) => number.to_string(),
        }
    }
}

/// Fetch the full listing for one source.
///
/// Returns `Error::Network` on transport/timeout failure, `Error::Api`
/// when the envelope code is nonzero, and `Error::Decode` when the body
/// is not valid JSON. No retries; the caller decides what to do next.
pub async fn fetch_listing(source: Source) -> Result<Vec<WallpaperRecord>, Error> {
    let client = reqwest::Client::builder()
        .timeout(LISTING_TIMEOUT)
        .build()?;

    let body = client
        .get(LISTING_ENDPOINT)
        .query(&[
            ("r", "paperapi/index/list"),
            ("client_version", "2"),
            ("source", source.query_name()),
            ("limit", LISTING_LIMIT),
            ("paper_id", "0"),
        ])
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    parse_listing(&body)
}

/// Parse a listing response body into wallpaper records.
///
/// Records without a URL are skipped rather than failing the whole
/// listing; missing author/description fields get a placeholder.
pub fn parse_listing(body: &str) -> Result<Vec<WallpaperRecord>, Error> {
    let envelope: Envelope = serde_json::from_str(body)?;

    if envelope.code != 0 {
        return Err(Error::Api {
            code: envelope.code,
            msg: envelope
                .msg
                .unwrap_or_else(|| String::from("unknown error")),
        });
    }

    let records = envelope
        .data
        .into_iter()
        .filter_map(|raw| {
            // A record without a URL can neither be previewed nor downloaded.
            let url = raw.url.filter(|u| !u.is_empty())?;

            Some(WallpaperRecord {
                id: raw.id.map(IdValue::into_string).unwrap_or_default(),
                author: raw
                    .author
                    .unwrap_or_else(|| String::from(FIELD_PLACEHOLDER)),
                desc: raw
                    .desc
                    .unwrap_or_else(|| String::from(FIELD_PLACEHOLDER)),
                url,
            })
        })
        .collect();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_maps_all_fields() {
        let body = r#"{
            "code": 0,
            "data": [
                {"id": "w1", "author": "Ana", "desc": "dunes", "url": "http://x/w1.jpg"},
                {"id": "w2", "author": "Ben", "desc": "sea", "url": "http://x/w2.jpg"}
            ]
        }"#;

        let records = parse_listing(body).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "w1");
        assert_eq!(records[0].author, "Ana");
        assert_eq!(records[0].desc, "dunes");
        assert_eq!(records[0].url, "http://x/w1.jpg");
    }

    #[test]
    fn test_missing_author_and_desc_get_placeholder() {
        let body = r#"{"code": 0, "data": [{"id": "w1", "url": "http://x/w1.jpg"}]}"#;

        let records = parse_listing(body).unwrap();

        assert_eq!(records[0].author, FIELD_PLACEHOLDER);
        assert_eq!(records[0].desc, FIELD_PLACEHOLDER);
    }

    #[test]
    fn test_record_without_url_is_skipped() {
        let body = r#"{
            "code": 0,
            "data": [
                {"id": "w1", "url": "http://x/w1.jpg"},
                {"id": "no-url"},
                {"id": "empty-url", "url": ""},
                {"id": "w2", "url": "http://x/w2.jpg"}
            ]
        }"#;

        let records = parse_listing(body).unwrap();

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["w1", "w2"]);
    }

    #[test]
    fn test_missing_id_keeps_record_with_empty_id() {
        let body = r#"{"code": 0, "data": [{"url": "http://x/anon.jpg"}]}"#;

        let records = parse_listing(body).unwrap();

        assert_eq!(records.len(), 1);
        assert!(records[0].id.is_empty());
    }

    #[test]
    fn test_numeric_id_is_stringified() {
        let body = r#"{"code": 0, "data": [{"id": 42, "url": "http://x/42.jpg"}]}"#;

        let records = parse_listing(body).unwrap();

        assert_eq!(records[0].id, "42");
    }

    #[test]
    fn test_nonzero_code_is_api_error_with_server_message() {
        let body = r#"{"code": 7, "msg": "rate limited"}"#;

        let err = parse_listing(body).unwrap_err();

        assert_eq!(
            err,
            Error::Api {
                code: 7,
                msg: String::from("rate limited")
            }
        );
    }

    #[test]
    fn test_nonzero_code_without_message_gets_fallback() {
        let body = r#"{"code": 1}"#;

        match parse_listing(body).unwrap_err() {
            Error::Api { code, msg } => {
                assert_eq!(code, 1);
                assert_eq!(msg, "unknown error");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let err = parse_listing("not json at all").unwrap_err();

        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_empty_data_array_yields_empty_listing() {
        let records = parse_listing(r#"{"code": 0, "data": []}"#).unwrap();
        assert!(records.is_empty());
    }
}
