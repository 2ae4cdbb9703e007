use thiserror::Error;

/// Failure reported by a listener callback.
///
/// Returned from a listener to signal that it could not handle an event. The
/// dispatcher logs it and carries on with the remaining listeners.
#[derive(Error, Debug)]
pub enum ListenerError {
    /// Listener-specific failure described by a message.
    #[error("{0}")]
    Message(String),

    /// Failure caused by an underlying error.
    #[error(transparent)]
    Source(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ListenerError {
    pub fn msg(message: impl Into<String>) -> Self {
        ListenerError::Message(message.into())
    }
}
