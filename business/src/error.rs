use thiserror::Error;

/// Failure of the users request.
///
/// Every variant names the URL that failed so the view can show what could not
/// be retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl NetworkError {
    /// The resource that could not be retrieved.
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => {
                url
            }
        }
    }

    /// HTTP status code, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}
