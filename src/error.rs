//! Error types shared by the fetch client and the search orchestrator.

use thiserror::Error;

/// Failure of a single request to TMDB.
///
/// The fetch client only ever returns these; turning them into UI state and
/// notices is the orchestrator's job.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API token is missing. No request is built in this case.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport failure, timeout or a body that could not be decoded.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// TMDB answered with a non-2xx status.
    #[error("TMDB responded with status {0}")]
    HttpStatus(reqwest::StatusCode),

    /// A downloaded image could not be decoded.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl FetchError {
    pub fn missing_token() -> Self {
        FetchError::Configuration(
            "TMDB token is not defined; set TMDB_TOKEN in the environment or .env".to_string(),
        )
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, FetchError::Configuration(_))
    }
}

/// Rejected user input. Recovered locally with a notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your search query.")]
    EmptyQuery,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_message_matches_notice_text() {
        assert_eq!(
            ValidationError::EmptyQuery.to_string(),
            "Please enter your search query."
        );
    }

    #[test]
    fn only_missing_token_is_a_configuration_error() {
        assert!(FetchError::missing_token().is_configuration());
        assert!(!FetchError::HttpStatus(reqwest::StatusCode::UNAUTHORIZED).is_configuration());
    }
}
