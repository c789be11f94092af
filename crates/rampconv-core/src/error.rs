//! Errors raised by host-side plumbing. Conversion itself never fails.

/// Errors from persisting a named curve set.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize curve set: {0}")]
    Serialize(String),

    #[error("store rejected {name}: {reason}")]
    Rejected { name: String, reason: String },
}

/// Errors from running an asset action.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to read source for {asset}: {message}")]
    Source { asset: String, message: String },

    #[error("action `{0}` does not apply to the current selection")]
    NotApplicable(&'static str),

    #[error("no action registered with id `{0}`")]
    UnknownAction(String),
}
