//! Errors raised by the migration API client

use thiserror::Error;

/// Errors that can occur when talking to the migration API
#[derive(Error, Debug)]
pub enum ClientError {
    /// The configured base URL could not be used
    #[error("invalid API base URL '{0}'")]
    InvalidBaseUrl(String),

    /// Connection, timeout or other transport failure
    #[error("failed to {action}: {source}")]
    Transport {
        action: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status
    #[error("failed to {action}: HTTP {status}")]
    Status { action: &'static str, status: u16 },

    /// Body could not be decoded into the expected payload
    #[error("failed to {action}: invalid response body: {source}")]
    Decode {
        action: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    /// The user-facing action that failed, e.g. "load modules"
    pub fn action(&self) -> &'static str {
        match self {
            ClientError::InvalidBaseUrl(_) => "reach the migration API",
            ClientError::Transport { action, .. }
            | ClientError::Status { action, .. }
            | ClientError::Decode { action, .. } => action,
        }
    }

    /// HTTP status, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ClientError::Status {
            action: "generate migration plan",
            status: 500,
        };
        assert_eq!(err.to_string(), "failed to generate migration plan: HTTP 500");
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.action(), "generate migration plan");
    }

    #[test]
    fn test_invalid_base_url_message() {
        let err = ClientError::InvalidBaseUrl("::nope".to_string());
        assert!(err.to_string().contains("::nope"));
        assert!(err.status().is_none());
    }
}
