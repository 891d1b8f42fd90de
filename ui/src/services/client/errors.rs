use thiserror::Error;

/// Fallback shown when the server rejects a submission without a message.
pub const REJECTION_FALLBACK_NOTICE: &str = "Something went wrong. Please try again.";

/// Fallback shown when no usable response was obtained at all.
pub const GENERIC_ERROR_NOTICE: &str = "An error occurred. Please try again.";

/// Client-side auth operation errors
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The endpoint answered with a non-success status.
    #[error("request rejected: {}", .message.as_deref().unwrap_or("no server message"))]
    Rejected { message: Option<String> },

    /// The request could not be completed.
    #[error("network error: {message}")]
    Network { message: String },

    /// A response arrived but its body was not what the endpoint contracts.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// Writing to the browser's persistent store failed.
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl ClientError {
    /// The string surfaced to the user. A server-provided rejection message
    /// is shown verbatim; everything else degrades to a generic fallback.
    pub fn user_notice(&self) -> &str {
        match self {
            ClientError::Rejected {
                message: Some(message),
            } => message,
            ClientError::Rejected { message: None } => REJECTION_FALLBACK_NOTICE,
            _ => GENERIC_ERROR_NOTICE,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
