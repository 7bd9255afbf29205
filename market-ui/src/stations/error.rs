//! Station search error types.

/// Errors that can occur when querying the station search endpoint.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StationError::Api {
            status: 502,
            message: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "API error 502: Bad Gateway");

        let err = StationError::Json {
            message: "expected value".into(),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");
    }
}
