// Backend trait for the dashboard's remote endpoints
use crate::domain::dashboard::ImageUpdate;
use async_trait::async_trait;
use thiserror::Error;

/// Failure of a single backend call
#[derive(Debug, Error)]
pub enum BackendError {
    /// Connection, DNS, TLS or timeout failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not the expected JSON
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl BackendError {
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

#[async_trait]
pub trait DashboardBackend: Send + Sync {
    /// Ask the backend for the latest camera and mask URLs
    async fn refresh_images(&self) -> Result<ImageUpdate, BackendError>;

    /// Liveness check, returns the backend's message (normally "pong")
    async fn ping(&self) -> Result<String, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let status = BackendError::status(503, "unavailable");
        assert!(status.is_status());
        assert!(!status.is_transport());
        assert_eq!(status.to_string(), "backend returned status 503: unavailable");

        let parse = BackendError::Parse("missing field `brMask`".to_string());
        assert!(parse.is_parse());
        assert!(!parse.is_status());
    }
}
