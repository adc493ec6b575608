//! Error types shared by the lead-submission flow and its adapters

/// Failure of the remote lead insert
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Lead store rejected the insert ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Failed to encode lead: {0}")]
    Serialization(String),

    #[error("Lead store is not available")]
    Unavailable,
}

impl StoreError {
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }
}

/// Failure of an analytics call. Callers discard these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyticsError {
    #[error("Analytics provider is not loaded")]
    Unavailable,

    #[error("Analytics provider error: {0}")]
    Provider(String),
}
