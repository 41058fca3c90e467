use crate::core::errors::LastfmError;
use crate::core::kernel::{text_content, Selector};
use crate::core::types::{MethodDescriptor, Record};
use roxmltree::Document;
use tracing::warn;

/// Decodes service responses into records
///
/// Error elements take priority over any payload. Field values are the
/// trimmed text content of each selector match; error messages are kept
/// as the service wrote them.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlCodec;

impl XmlCodec {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(
        &self,
        body: &str,
        descriptor: &MethodDescriptor,
    ) -> Result<Vec<Record>, LastfmError> {
        let doc = Document::parse(body).map_err(|e| {
            LastfmError::MalformedResponse(format!("{}: invalid XML: {}", descriptor, e))
        })?;

        check_error(&doc)?;

        let columns = descriptor
            .selectors
            .iter()
            .map(|selector| {
                let selector = Selector::parse(selector)?;
                Ok(selector
                    .select(&doc)
                    .into_iter()
                    .map(|node| text_content(node).trim().to_string())
                    .collect::<Vec<_>>())
            })
            .collect::<Result<Vec<_>, LastfmError>>()?;

        let lengths: Vec<usize> = columns.iter().map(Vec::len).collect();
        if lengths.windows(2).any(|pair| pair[0] != pair[1]) {
            warn!(
                method = %descriptor,
                ?lengths,
                "selectors matched different counts, truncating to shortest"
            );
        }

        Ok(transpose(columns))
    }

    /// Service error carried by a body, if it is an lfm error document
    ///
    /// Used for replies the transport rejected on status alone: Last.fm sends
    /// its error documents with 4xx statuses.
    pub fn service_error(&self, body: &str) -> Option<LastfmError> {
        let doc = Document::parse(body).ok()?;
        check_error(&doc).err()
    }
}

/// Fail with the service's own message when the response is an error
fn check_error(doc: &Document<'_>) -> Result<(), LastfmError> {
    let error = doc
        .descendants()
        .find(|node| node.is_element() && node.tag_name().name() == "error");

    if let Some(node) = error {
        return Err(LastfmError::ServiceError {
            code: node.attribute("code").map(str::to_string),
            message: text_content(node),
        });
    }

    let root = doc.root_element();
    if root.attribute("status") == Some("failed") {
        return Err(LastfmError::ServiceError {
            code: None,
            message: "request failed".to_string(),
        });
    }

    Ok(())
}

/// Zip per-selector columns into rows; stops at the shortest column
pub fn transpose(columns: Vec<Vec<String>>) -> Vec<Record> {
    let rows = columns.iter().map(Vec::len).min().unwrap_or(0);
    let mut iters: Vec<_> = columns.into_iter().map(Vec::into_iter).collect();

    (0..rows)
        .map(|_| {
            iters
                .iter_mut()
                .filter_map(|column| column.next())
                .collect::<Vec<_>>()
                .into()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::AuthMode;

    fn descriptor(selectors: &'static [&'static str]) -> MethodDescriptor {
        MethodDescriptor {
            group: "test",
            name: "method",
            auth: AuthMode::None,
            required: &[],
            optional: &[],
            selectors,
        }
    }

    #[test]
    fn test_two_selectors_zip_into_pairs() {
        let body = r#"<lfm status="ok">
            <artist><name>A1</name></artist>
            <artist><name>A2</name></artist>
            <artist><name>A3</name></artist>
            <track><name>T1</name></track>
            <track><name>T2</name></track>
            <track><name>T3</name></track>
        </lfm>"#;
        let records = XmlCodec
            .decode(body, &descriptor(&["artist name", "track name"]))
            .unwrap();
        let rows: Vec<Vec<&str>> = records.iter().map(Record::as_strs).collect();
        assert_eq!(
            rows,
            vec![vec!["A1", "T1"], vec!["A2", "T2"], vec!["A3", "T3"]]
        );
    }

    #[test]
    fn test_single_selector_gives_singletons() {
        let body = r#"<lfm status="ok"><toptags>
            <tag><name>rock</name></tag>
            <tag><name>pop</name></tag>
        </toptags></lfm>"#;
        let records = XmlCodec.decode(body, &descriptor(&["tag name"])).unwrap();
        let values: Vec<_> = records.iter().filter_map(Record::value).collect();
        assert_eq!(values, vec!["rock", "pop"]);
        assert!(records.iter().all(|r| r.len() == 1));
    }

    #[test]
    fn test_three_selectors() {
        let body = r#"<lfm status="ok">
            <track><name>T1</name><artist>X</artist><playcount>10</playcount></track>
            <track><name>T2</name><artist>Y</artist><playcount>20</playcount></track>
        </lfm>"#;
        let records = XmlCodec
            .decode(
                body,
                &descriptor(&["track > name", "track > artist", "track > playcount"]),
            )
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].as_strs(), vec!["T2", "Y", "20"]);
    }

    #[test]
    fn test_error_node_wins() {
        let body = r#"<?xml version="1.0" encoding="utf-8"?>
<lfm status="failed">
  <error code="10">Invalid API key</error>
</lfm>"#;
        let err = XmlCodec.decode(body, &descriptor(&["tag name"])).unwrap_err();
        match err {
            LastfmError::ServiceError { code, message } => {
                assert_eq!(code.as_deref(), Some("10"));
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("expected service error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_message_is_verbatim() {
        let body = "<lfm status=\"failed\"><error code=\"6\">\n  Artist not found\n</error></lfm>";
        let err = XmlCodec.decode(body, &descriptor(&["name"])).unwrap_err();
        assert_eq!(err.service_message(), Some("\n  Artist not found\n"));
    }

    #[test]
    fn test_service_error_in_rejected_body() {
        let body = r#"<?xml version="1.0" encoding="utf-8"?>
<lfm status="failed"><error code="10">Invalid API key</error></lfm>"#;
        match XmlCodec.service_error(body) {
            Some(LastfmError::ServiceError { code, message }) => {
                assert_eq!(code.as_deref(), Some("10"));
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("expected service error, got {:?}", other),
        }

        assert!(XmlCodec.service_error("Service Unavailable").is_none());
        assert!(XmlCodec.service_error(r#"<lfm status="ok"/>"#).is_none());
        assert!(XmlCodec.service_error("<html><body>502</body></html>").is_none());
    }

    #[test]
    fn test_failed_status_without_error_node() {
        let err = XmlCodec
            .decode(r#"<lfm status="failed"/>"#, &descriptor(&["name"]))
            .unwrap_err();
        assert!(err.is_service());
    }

    #[test]
    fn test_record_count_follows_first_selector() {
        let body = r#"<lfm status="ok"><a>1</a><a>2</a><a>3</a><b>x</b><b>y</b><b>z</b></lfm>"#;
        let records = XmlCodec.decode(body, &descriptor(&["a", "b"])).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_ragged_columns_truncate() {
        let body = r#"<lfm status="ok"><a>1</a><a>2</a><a>3</a><b>x</b></lfm>"#;
        let records = XmlCodec.decode(body, &descriptor(&["a", "b"])).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].as_strs(), vec!["1", "x"]);
    }

    #[test]
    fn test_no_selectors_gives_no_records() {
        let records = XmlCodec
            .decode(r#"<lfm status="ok"/>"#, &descriptor(&[]))
            .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_malformed_body() {
        let err = XmlCodec
            .decode("<lfm><unclosed></lfm>", &descriptor(&["a"]))
            .unwrap_err();
        assert!(matches!(err, LastfmError::MalformedResponse(_)));

        let err = XmlCodec.decode("", &descriptor(&["a"])).unwrap_err();
        assert!(matches!(err, LastfmError::MalformedResponse(_)));
    }

    #[test]
    fn test_transpose_empty() {
        assert!(transpose(Vec::new()).is_empty());
        assert!(transpose(vec![Vec::new(), vec!["x".to_string()]]).is_empty());
    }
}
