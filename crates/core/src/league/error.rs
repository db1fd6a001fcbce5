use thiserror::Error;

use crate::storage::RepositoryError;

/// Errors surfaced by the league workflows.
///
/// This is the closed set the HTTP layer maps to response codes; every
/// business rule violation lands in exactly one variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed or missing input fields.
    #[error("{0}")]
    Validation(String),
    /// Duplicate team name, unavailable time slot, or non-distinct sides.
    #[error("{0}")]
    Conflict(String),
    /// Unknown team or fixture id.
    #[error("{0}")]
    NotFound(String),
    /// Fixture not in a deletable state.
    #[error("{0}")]
    DeleteNotAllowed(String),
    /// Persistence or cache connectivity failure.
    #[error("{0}")]
    Dependency(String),
}

/// Result type for league workflow operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Maps this error to an HTTP status code.
    ///
    /// Conflicts and disallowed deletions report as 400 alongside
    /// validation failures; only unknown resources report 404.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            Error::Conflict(_) => 400,
            Error::NotFound(_) => 404,
            Error::DeleteNotAllowed(_) => 400,
            Error::Dependency(_) => 500,
        }
    }
}

impl From<RepositoryError> for Error {
    /// Repository failures are dependency errors; repositories report
    /// "not found" as an empty result, never as an error.
    fn from(err: RepositoryError) -> Self {
        Error::Dependency(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Error::Validation("bad".into()).status_code(), 400);
        assert_eq!(Error::Conflict("dup".into()).status_code(), 400);
        assert_eq!(Error::NotFound("gone".into()).status_code(), 404);
        assert_eq!(Error::DeleteNotAllowed("no".into()).status_code(), 400);
        assert_eq!(Error::Dependency("down".into()).status_code(), 500);
    }

    #[test]
    fn test_display_passes_message_through() {
        let err = Error::Conflict("team already exists".into());
        assert_eq!(err.to_string(), "team already exists");
    }

    #[test]
    fn test_repository_error_becomes_dependency() {
        let err: Error = RepositoryError::ConnectionFailed("timeout".into()).into();
        assert!(matches!(err, Error::Dependency(_)));
        assert_eq!(err.to_string(), "Connection failed: timeout");
    }
}
