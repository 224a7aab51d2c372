use super::api_client::ApiResponse;
use hyper::StatusCode;

/// Every response carries the permissive cross-origin headers.
pub fn assert_cors_headers(response: &ApiResponse) {
    response
        .assert_header("access-control-allow-origin", "*")
        .assert_header("access-control-allow-methods", "POST,OPTIONS")
        .assert_header("access-control-allow-headers", "Content-Type");
}

/// Error responses are `{ "error": ... }` with nothing else but an optional detail.
pub fn assert_error_response(response: &ApiResponse, status: StatusCode, expected_error: &str) {
    response.assert_status(status).assert_error(expected_error);

    let body = response
        .body
        .as_ref()
        .and_then(|b| b.as_object())
        .expect("Error body should be a JSON object");
    assert!(
        body.keys().all(|k| k == "error" || k == "detail"),
        "Unexpected fields in error body: {:?}",
        body
    );
}

pub fn assert_audio_base64(response: &ApiResponse) -> String {
    response.assert_status(StatusCode::OK);
    response
        .body
        .as_ref()
        .and_then(|b| b.get("audioBase64"))
        .and_then(|v| v.as_str())
        .expect("Missing audioBase64 field")
        .to_string()
}
