use thiserror::Error;

use crate::network::NetworkError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    NetworkError(#[from] NetworkError),

    #[error(transparent)]
    DeserializationError(#[from] DeserializationError),

    #[error("Cannot serialize request payload: {0}")]
    SerializationError(serde_json::Error),

    #[error("Invalid client configuration: {0}")]
    InvalidConfiguration(String),

    #[error("{0}")]
    Other(String),
}

/// An error that can be returned when deserializing data.
#[derive(Debug, Error)]
#[error("Cannot deserialize string '{string}': {source}")]
pub struct DeserializationError {
    pub string: String,
    pub source: DeserializationErrorKind,
}

/// Additional information for [`DeserializationError`] error
#[derive(Debug, Error)]
pub enum DeserializationErrorKind {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` when the error means that none of the candidate
    /// endpoints could be used.
    pub fn is_connectivity_failure(&self) -> bool {
        matches!(self, Error::NetworkError(e) if e.is_exhaustion())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhaustion_is_connectivity_failure() {
        let error: Error = NetworkError::NoReachableEndpoint {
            attempts: 2,
            last: Box::new(NetworkError::UnsuccessfulStatus {
                url: "http://a/stylists".to_string(),
                status: 500,
            }),
        }
        .into();
        assert!(error.is_connectivity_failure());
        assert_eq!(
            error.to_string(),
            "No reachable endpoint after 2 attempt(s), last error: Server at 'http://a/stylists' answered with status 500"
        );
    }

    #[test]
    fn test_other_errors_are_not_connectivity_failures() {
        let error: Error = NetworkError::InvalidPath("stylists".to_string()).into();
        assert!(!error.is_connectivity_failure());

        let error = Error::InvalidConfiguration("no candidates".to_string());
        assert!(!error.is_connectivity_failure());
    }
}
