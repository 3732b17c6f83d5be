use thiserror::Error;

/// Failures raised by a generative backend.
///
/// All of these are recoverable at the response-composition boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("{backend} is not configured")]
    NotConfigured { backend: String },

    #[error("{backend} request failed: {message}")]
    Network { backend: String, message: String },

    #[error("{backend} rejected the credentials: {message}")]
    Auth { backend: String, message: String },

    #[error("{backend} quota exceeded: {message}")]
    Quota { backend: String, message: String },

    #[error("{backend} returned a malformed response: {message}")]
    MalformedResponse { backend: String, message: String },

    #[error("{backend} blocked the prompt: {reason}")]
    Blocked { backend: String, reason: String },

    #[error("{backend} error: {message}")]
    Provider { backend: String, message: String },
}

impl BackendError {
    pub fn not_configured(backend: impl Into<String>) -> Self {
        Self::NotConfigured {
            backend: backend.into(),
        }
    }

    pub fn network(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            backend: backend.into(),
            message: message.into(),
        }
    }

    pub fn auth(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Auth {
            backend: backend.into(),
            message: message.into(),
        }
    }

    pub fn quota(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Quota {
            backend: backend.into(),
            message: message.into(),
        }
    }

    pub fn malformed(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            backend: backend.into(),
            message: message.into(),
        }
    }

    pub fn blocked(backend: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Blocked {
            backend: backend.into(),
            reason: reason.into(),
        }
    }

    pub fn provider(backend: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            backend: backend.into(),
            message: message.into(),
        }
    }

    /// Classify a non-success HTTP status
    pub fn from_status(backend: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            401 | 403 => Self::auth(backend, format!("HTTP {}: {}", status, body)),
            429 => Self::quota(backend, format!("HTTP {}: {}", status, body)),
            _ => Self::provider(backend, format!("HTTP {}: {}", status, body)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            BackendError::from_status("gemini", 401, "bad key"),
            BackendError::Auth { .. }
        ));
        assert!(matches!(
            BackendError::from_status("gemini", 403, "forbidden"),
            BackendError::Auth { .. }
        ));
        assert!(matches!(
            BackendError::from_status("gemini", 429, "slow down"),
            BackendError::Quota { .. }
        ));
        assert!(matches!(
            BackendError::from_status("gemini", 500, "oops"),
            BackendError::Provider { .. }
        ));
    }

    #[test]
    fn test_error_messages() {
        let error = BackendError::quota("gemini", "HTTP 429: slow down");
        assert_eq!(error.to_string(), "gemini quota exceeded: HTTP 429: slow down");

        let error = BackendError::not_configured("gemini");
        assert_eq!(error.to_string(), "gemini is not configured");
    }
}
