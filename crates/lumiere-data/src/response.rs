//! Buffered HTTP responses.

use crate::error::map_reqwest_error;
use lumiere_commerce::FetchError;
use serde::de::DeserializeOwned;

/// Longest body excerpt carried in an HTTP error message.
const ERROR_EXCERPT_LEN: usize = 200;

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Read a `reqwest` response to the end.
    pub(crate) async fn read(resp: reqwest::Response) -> Result<Self, FetchError> {
        let status = resp.status().as_u16();
        let body = resp.bytes().await.map_err(map_reqwest_error)?.to_vec();
        Ok(Self::new(status, body))
    }

    /// Check if the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body parsed as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Turn a non-2xx status into [`FetchError::Http`].
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }
        let text = String::from_utf8_lossy(&self.body);
        let message = if text.trim().is_empty() {
            "empty response body".to_string()
        } else {
            text.chars().take(ERROR_EXCERPT_LEN).collect()
        };
        Err(FetchError::Http {
            status: self.status,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, body.to_vec())
    }

    #[test]
    fn test_only_2xx_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(201, b"").is_success());
        assert!(!make_response(302, b"").is_success());
        assert!(!make_response(404, b"").is_success());
    }

    #[test]
    fn test_json() {
        let resp = make_response(200, br#"{"success": true, "data": []}"#);
        let value: serde_json::Value = resp.json().unwrap();
        assert_eq!(value["success"], true);
    }

    #[test]
    fn test_json_invalid() {
        let resp = make_response(200, b"<html>oops</html>");
        let result: Result<serde_json::Value, _> = resp.json();
        assert!(matches!(result, Err(FetchError::InvalidPayload(_))));
    }

    #[test]
    fn test_error_for_status_success() {
        assert!(make_response(200, b"OK").error_for_status().is_ok());
    }

    #[test]
    fn test_error_for_status_carries_body() {
        let err = make_response(502, b"Bad Gateway").error_for_status().unwrap_err();
        assert_eq!(
            err,
            FetchError::Http {
                status: 502,
                message: "Bad Gateway".to_string()
            }
        );
    }

    #[test]
    fn test_error_for_status_empty_body() {
        let err = make_response(404, b"").error_for_status().unwrap_err();
        assert!(matches!(err, FetchError::Http { status: 404, .. }));
    }
}
