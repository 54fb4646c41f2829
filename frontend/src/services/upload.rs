//! HTTP service uploading a PDF to the document-analysis backend.

use gloo_net::http::Request;
use web_sys::{AbortSignal, File, FormData};

use crate::config::UPLOAD_FIELD;
use crate::types::{AppError, AppResult, PageResult, ProcessResponse};

/// Upload `file` as the single multipart field and return the page results.
///
/// `abort` lets the caller cancel the request when a newer upload starts.
pub async fn process_pdf(
    file: &File,
    endpoint: &str,
    abort: Option<&AbortSignal>,
) -> AppResult<Vec<PageResult>> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Request(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob(UPLOAD_FIELD, file)
        .map_err(|e| AppError::Request(format!("Failed to append file: {:?}", e)))?;

    // The browser fills in the multipart boundary header itself.
    let request = Request::post(endpoint)
        .abort_signal(abort)
        .body(form_data)
        .map_err(|e| AppError::Request(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Server {
            status: response.status(),
            body,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))?;

    parse_process_response(&body)
}

/// Decode the service's JSON body into page results.
pub fn parse_process_response(body: &str) -> AppResult<Vec<PageResult>> {
    let response: ProcessResponse = serde_json::from_str(body)?;
    Ok(response.result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "result": [
                {
                    "page": 1,
                    "table_data": [
                        {"qty": "2", "description": "Stapler", "amount": "$12.00"},
                        {"qty": "1", "description": "Paper", "amount": "$4.50"}
                    ],
                    "raw_texts": ["Invoice 42\n", "qty description amount\n"],
                    "boxes": [[36, 40, 220, 58], [36, 90, 540, 104]]
                },
                {
                    "page": 2,
                    "table_data": [],
                    "raw_texts": [],
                    "boxes": []
                }
            ]
        }"#;

        let pages = parse_process_response(json).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page, 1);
        assert_eq!(pages[0].table_data.len(), 2);
        assert_eq!(pages[0].table_data[1].get("amount"), Some("$4.50"));
        assert_eq!(pages[0].raw_texts[0], "Invoice 42\n");
        assert_eq!(pages[0].boxes[1], vec![36.0, 90.0, 540.0, 104.0]);
        assert_eq!(pages[1].page, 2);
        assert!(pages[1].table_data.is_empty());
    }

    #[test]
    fn test_boxes_of_any_length_keep_table() {
        let json = r#"{"result": [{"page": 1, "table_data": [{"A": "1", "B": "2"}], "boxes": [[1, 2, 3, 4, 5], [6, 7]]}]}"#;
        let pages = parse_process_response(json).unwrap();
        assert_eq!(pages[0].table_data[0].get("B"), Some("2"));
        assert_eq!(pages[0].boxes, vec![vec![1.0, 2.0, 3.0, 4.0, 5.0], vec![6.0, 7.0]]);
    }

    #[test]
    fn test_malformed_boxes_are_skipped() {
        let json = r#"{"result": [{"page": 1, "table_data": [{"A": "1"}], "boxes": [[1, 2, 3, 4], "oops", null, [1, "x"]]}]}"#;
        let pages = parse_process_response(json).unwrap();
        assert_eq!(pages[0].boxes, vec![vec![1.0, 2.0, 3.0, 4.0]]);
        assert_eq!(pages[0].table_data.len(), 1);
    }

    #[test]
    fn test_null_raw_text_is_skipped() {
        let json = r#"{"result": [{"page": 1, "table_data": [{"A": "1"}], "raw_texts": ["Invoice", null, 7]}]}"#;
        let pages = parse_process_response(json).unwrap();
        assert_eq!(pages[0].raw_texts, vec!["Invoice".to_string()]);
        assert_eq!(pages[0].table_data.len(), 1);
    }

    #[test]
    fn test_null_lists_decode_as_empty() {
        let json = r#"{"result": [{"page": 3, "table_data": null, "raw_texts": null, "boxes": null}]}"#;
        let pages = parse_process_response(json).unwrap();
        assert_eq!(pages[0].page, 3);
        assert!(pages[0].table_data.is_empty());
        assert!(pages[0].raw_texts.is_empty());
        assert!(pages[0].boxes.is_empty());
    }

    #[test]
    fn test_non_list_informational_fields_decode_as_empty() {
        let json = r#"{"result": [{"page": 1, "table_data": [{"A": "1"}], "raw_texts": "Invoice", "boxes": {"x0": 1}}]}"#;
        let pages = parse_process_response(json).unwrap();
        assert!(pages[0].raw_texts.is_empty());
        assert!(pages[0].boxes.is_empty());
        assert_eq!(pages[0].table_data.len(), 1);
    }

    #[test]
    fn test_empty_result_list() {
        assert_eq!(parse_process_response(r#"{"result": []}"#).unwrap(), Vec::new());
    }

    #[test]
    fn test_missing_result_is_decode_error() {
        let err = parse_process_response(r#"{"detail": "Not Found"}"#).unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn test_non_json_body_is_decode_error() {
        let err = parse_process_response("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }

    #[test]
    fn test_malformed_page_is_decode_error() {
        let err = parse_process_response(r#"{"result": [{"table_data": []}]}"#).unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));
    }
}
