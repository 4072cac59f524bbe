//! Schema of the listing response and its validation.
//!
//! Parsing fails closed: a body missing `data` or `meta.last_page`, or with
//! `last_page = 0`, is a [`FetchError::Malformed`] and never reaches the
//! list state.

use serde::Deserialize;

use crate::{error::FetchError, listing::ListPage, pagination::RangeSummary, Article};

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    data: Vec<Article>,
    meta: ListMeta,
}

#[derive(Debug, Deserialize)]
struct ListMeta {
    last_page: u32,
    #[serde(default)]
    from: Option<u64>,
    #[serde(default)]
    to: Option<u64>,
    #[serde(default)]
    total: Option<u64>,
}

/// Parses and validates a listing response body.
pub fn parse_list_response(body: &str) -> Result<ListPage, FetchError> {
    let envelope: ListEnvelope =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    if envelope.meta.last_page == 0 {
        return Err(FetchError::Malformed("meta.last_page must be >= 1".to_string()));
    }

    let summary = match (envelope.meta.from, envelope.meta.to) {
        (Some(from), Some(to)) if from <= to => Some(RangeSummary {
            from,
            to,
            total: envelope.meta.total,
        }),
        _ => None,
    };

    Ok(ListPage {
        records: envelope.data,
        last_page: envelope.meta.last_page,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(data: &str, meta: &str) -> String {
        format!(r#"{{"data": {data}, "meta": {meta}, "links": {{}}}}"#)
    }

    const ONE_IDEA: &str = r#"[{
        "id": 11,
        "title": "Ship it",
        "slug": "ship-it",
        "content": "<p>x</p>",
        "created_at": "2022-10-05 10:00:00",
        "updated_at": "2022-10-05 10:00:00",
        "published_at": "2022-10-05 10:00:00",
        "deleted_at": null,
        "small_image": [{"id": 1, "mime": "image/jpeg", "file_name": "s.jpg", "url": "https://a/s.jpg"}],
        "medium_image": [{"id": 2, "mime": "image/jpeg", "file_name": "m.jpg", "url": "https://a/m.jpg"}]
    }]"#;

    #[test]
    fn parses_data_and_meta() {
        let page = parse_list_response(&body(
            ONE_IDEA,
            r#"{"current_page": 1, "last_page": 26, "from": 1, "to": 1, "total": 251}"#,
        ))
        .expect("valid body");
        assert_eq!(page.last_page, 26);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.records[0].medium_image[0].url, "https://a/m.jpg");
        assert_eq!(
            page.summary,
            Some(RangeSummary {
                from: 1,
                to: 1,
                total: Some(251)
            })
        );
    }

    #[test]
    fn null_range_on_empty_page_has_no_summary() {
        let page = parse_list_response(&body("[]", r#"{"last_page": 3, "from": null, "to": null}"#))
            .expect("valid body");
        assert!(page.records.is_empty());
        assert_eq!(page.summary, None);
    }

    #[test]
    fn missing_fields_fail_closed() {
        for raw in [
            body(ONE_IDEA, "{}"),
            r#"{"meta": {"last_page": 2}}"#.to_string(),
            r#"{"data": []}"#.to_string(),
            body("[{\"id\": 1}]", r#"{"last_page": 1}"#),
            "<html>502 Bad Gateway</html>".to_string(),
        ] {
            assert!(
                matches!(parse_list_response(&raw), Err(FetchError::Malformed(_))),
                "accepted: {raw}"
            );
        }
    }

    #[test]
    fn zero_last_page_is_malformed() {
        assert!(matches!(
            parse_list_response(&body("[]", r#"{"last_page": 0}"#)),
            Err(FetchError::Malformed(_))
        ));
    }
}
