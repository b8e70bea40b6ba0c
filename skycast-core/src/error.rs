use thiserror::Error;

/// Failure modes of a single weather fetch. None of these are retried; each
/// fetch attempt either yields a result or exactly one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// City input was empty or otherwise unusable.
    #[error("Provided city name is invalid.")]
    InvalidInput,

    /// The request URL could not be formed from the city input.
    #[error("Provided city name cannot be turned into a request URL.")]
    InvalidUrl,

    /// The server answered with a non-200 status.
    #[error("Request failed with error code: {0}. Please try again later.")]
    RequestFailed(u16),

    /// The response body did not match the expected schema.
    #[error("Unable to decode weather data. The server may have changed its response format.")]
    DecodingFailed,

    /// Transport-level failure (connection, DNS, body read).
    #[error("Unknown error.")]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_message_embeds_status_code() {
        let err = FetchError::RequestFailed(404);
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(FetchError::InvalidInput.to_string(), "Provided city name is invalid.");
        assert_eq!(FetchError::Unknown.to_string(), "Unknown error.");
        assert!(FetchError::DecodingFailed.to_string().contains("decode"));
    }
}
