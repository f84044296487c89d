//! Error Types

use thiserror::Error;

/// Failure of a Task API call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request could not be sent, or the response body could not be read
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// Server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Response body did not have the expected shape
    #[error("unexpected response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl ApiError {
    pub fn transport(url: &str, err: impl std::fmt::Display) -> Self {
        ApiError::Transport { url: url.to_string(), message: err.to_string() }
    }

    pub fn decode(url: &str, err: impl std::fmt::Display) -> Self {
        ApiError::Decode { url: url.to_string(), message: err.to_string() }
    }

    /// Network/transport failure, as opposed to an application failure
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. } | ApiError::Decode { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Local validation failure of the new-task form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter a task title")]
    EmptyTitle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_taxonomy() {
        let status = ApiError::Status { url: "/api/tasks".into(), status: 500 };
        assert!(!status.is_transport());
        assert_eq!(status.status(), Some(500));
        assert_eq!(status.to_string(), "/api/tasks returned HTTP 500");

        let decode = ApiError::decode("/api/tasks", "missing field `tasks`");
        assert!(decode.is_transport());
        assert_eq!(decode.status(), None);
    }
}
