//! HTTP response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Whether the body carries no value: empty, whitespace, or JSON `null`.
    ///
    /// Some catalog services answer a lookup for a missing id with `200` and
    /// no content instead of a `404`.
    pub fn is_empty_body(&self) -> bool {
        let text = String::from_utf8_lossy(&self.body);
        let trimmed = text.trim();
        trimmed.is_empty() || trimmed == "null"
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            let message = self.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(FetchError::HttpError {
                status: self.status,
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, body.to_vec())
    }

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(299, b"").is_success());
        assert!(!make_response(404, b"").is_success());
        assert!(!make_response(500, b"").is_success());
    }

    #[test]
    fn test_response_json() {
        let resp = make_response(200, br#"[{"id": 1, "title": "A", "price": 2.5}]"#);
        let items: Vec<storefront_commerce::catalog::CatalogItem> = resp.json().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "A");
    }

    #[test]
    fn test_response_json_invalid() {
        let resp = make_response(200, b"not json");
        let result: Result<Vec<u32>, _> = resp.json();
        assert!(matches!(result, Err(FetchError::ParseError(_))));
    }

    #[test]
    fn test_empty_body_detection() {
        assert!(make_response(200, b"").is_empty_body());
        assert!(make_response(200, b"  \n").is_empty_body());
        assert!(make_response(200, b"null").is_empty_body());
        assert!(!make_response(200, b"{}").is_empty_body());
    }

    #[test]
    fn test_response_error_for_status() {
        assert!(make_response(200, b"OK").error_for_status().is_ok());

        match make_response(503, b"Service Unavailable").error_for_status() {
            Err(FetchError::HttpError { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "Service Unavailable");
            }
            other => panic!("expected HttpError, got {:?}", other),
        }
    }
}
