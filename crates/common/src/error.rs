//! Error types shared across QuickRec crates.

/// Top-level error type for QuickRec operations.
///
/// Resolution failures are terminal for the session: the interactive flow
/// never retries a declined choice and never downgrades to a smaller audio
/// configuration than the one the user asked for.
#[derive(Debug, thiserror::Error)]
pub enum QuickrecError {
    #[error("No candidates available for {what}")]
    NoCandidates { what: String },

    #[error("Screen selection aborted")]
    SelectionAborted,

    #[error("Audio device selection aborted: {message}")]
    DeviceSelectionAborted { message: String },

    /// Contract violation between selection and synthesis. Structurally
    /// unreachable while `AudioSelection` stays a closed sum type; fatal if
    /// it ever triggers.
    #[error("Inconsistent audio state: {message}")]
    InconsistentAudioState { message: String },

    #[error("Platform error: {message}")]
    Platform { message: String },

    #[error("Executor error: {message}")]
    Executor { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using QuickrecError.
pub type QuickrecResult<T> = Result<T, QuickrecError>;

impl QuickrecError {
    pub fn no_candidates(what: impl Into<String>) -> Self {
        Self::NoCandidates { what: what.into() }
    }

    pub fn device_selection_aborted(msg: impl Into<String>) -> Self {
        Self::DeviceSelectionAborted {
            message: msg.into(),
        }
    }

    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform {
            message: msg.into(),
        }
    }

    pub fn executor(msg: impl Into<String>) -> Self {
        Self::Executor {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
