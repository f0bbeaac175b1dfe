//! Remote Store Errors
//!
//! Every failure of a remote call ends up as exactly one `StoreError` kind.

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Which kind of request produced a status, since 404 only means
/// "not found" for a by-id lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    ById,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Item not found.")]
    NotFound,

    #[error("Error: {status} - {status_text}")]
    Server { status: u16, status_text: String },

    #[error("Network error. No response received from server.")]
    Network,

    #[error("{0}")]
    Unknown(String),
}

impl StoreError {
    /// Map a non-2xx status to an error kind
    pub fn from_status(status: u16, reason: &str, lookup: Lookup) -> Self {
        if status == 404 && lookup == Lookup::ById {
            return StoreError::NotFound;
        }
        let status_text = if reason.trim().is_empty() { "Server Error" } else { reason };
        StoreError::Server { status, status_text: status_text.to_string() }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return StoreError::from_status(status.as_u16(), status.canonical_reason().unwrap_or_default(), Lookup::Other);
        }
        // Connect failures, aborted fetches and dropped connections all land here
        if err.is_request() || err.is_timeout() {
            return StoreError::Network;
        }
        StoreError::Unknown(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_only_for_lookup_by_id() {
        assert_eq!(StoreError::from_status(404, "Not Found", Lookup::ById), StoreError::NotFound);
        assert_eq!(
            StoreError::from_status(404, "Not Found", Lookup::Other),
            StoreError::Server { status: 404, status_text: "Not Found".into() }
        );
    }

    #[test]
    fn test_server_error_message() {
        let err = StoreError::from_status(503, "Service Unavailable", Lookup::ById);
        assert_eq!(err.to_string(), "Error: 503 - Service Unavailable");
    }

    #[test]
    fn test_missing_reason_falls_back() {
        let err = StoreError::from_status(599, "", Lookup::Other);
        assert_eq!(err.to_string(), "Error: 599 - Server Error");
    }

    #[test]
    fn test_user_facing_strings() {
        assert_eq!(StoreError::NotFound.to_string(), "Item not found.");
        assert_eq!(StoreError::Network.to_string(), "Network error. No response received from server.");
        assert_eq!(StoreError::Unknown("boom".into()).to_string(), "boom");
    }
}
