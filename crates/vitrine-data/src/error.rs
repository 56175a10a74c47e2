//! Fetch error taxonomy.

use http::StatusCode;
use thiserror::Error;

/// Errors surfaced by the catalog API client.
///
/// A successful fetch that yields zero records is not an error; pages
/// render that as a distinct empty state.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status} for {url}")]
    Http { status: StatusCode, url: String },

    /// The body was not valid JSON, or valid JSON missing the expected shape.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl FetchError {
    /// True exactly for HTTP 404, which single-record lookups surface as
    /// "not found" instead of a generic failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Http { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found_only_for_404() {
        let not_found = FetchError::Http {
            status: StatusCode::NOT_FOUND,
            url: "http://localhost:8000/api/products/missing".to_string(),
        };
        assert!(not_found.is_not_found());

        let server_error = FetchError::Http {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: "http://localhost:8000/api/products".to_string(),
        };
        assert!(!server_error.is_not_found());
        assert!(!FetchError::Network("connection refused".to_string()).is_not_found());
        assert!(!FetchError::Parse("expected value".to_string()).is_not_found());
    }

    #[test]
    fn test_http_error_display_names_status_and_url() {
        let err = FetchError::Http {
            status: StatusCode::BAD_GATEWAY,
            url: "http://localhost:8000/api/products".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("502"));
        assert!(message.contains("/api/products"));
    }
}
