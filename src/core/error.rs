//! Error types shared by the lead capture pipeline and client preferences

/// Errors raised while handing a lead over to the external messaging app
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandoffError {
    #[error("No browser window available")]
    NoWindow,

    #[error("The browser blocked the new window")]
    PopupBlocked,

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),
}

/// Lead submission error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    #[error("Please fill in all required fields.")]
    IncompleteFields,

    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("Handoff failed: {0}")]
    Handoff(#[from] HandoffError),
}

/// Client-local storage error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Local storage is not available")]
    Unavailable,

    #[error("Failed to write key {0}")]
    WriteFailed(String),
}
