use thiserror::Error;

/// Errors from the single dataset fetch.
///
/// The view collapses all variants into one failure message; the variants
/// exist for logging and for tests to tell outcomes apart.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Connection, TLS or protocol failure before a response arrived.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The source answered with a non-success status.
    #[error("source returned HTTP {status}")]
    Status { status: u16 },

    /// The response body is not a JSON array of campaign records.
    #[error("invalid response body: {0}")]
    Parse(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_names_the_code() {
        let err = SourceError::Status { status: 500 };
        assert_eq!(err.to_string(), "source returned HTTP 500");
    }

    #[test]
    fn parse_message_prefixed() {
        let inner = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err = SourceError::Parse(inner);
        assert!(err.to_string().starts_with("invalid response body:"));
    }
}
