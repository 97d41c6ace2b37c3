//! Error types for tvrecode-plan.

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop a plan from being produced.
///
/// Either a complete plan is returned or one of these is raised; there is no
/// partial result.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Probe output is missing, empty, or not the expected structure.
    #[error("invalid probe metadata: {0}")]
    Metadata(String),

    /// The file has no video stream to build a plan around.
    #[error("no video stream found")]
    NoVideoStream,
}

impl Error {
    /// Create a metadata error.
    pub fn metadata(message: impl Into<String>) -> Self {
        Self::Metadata(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::metadata("no streams");
        assert_eq!(err.to_string(), "invalid probe metadata: no streams");

        let err = Error::NoVideoStream;
        assert_eq!(err.to_string(), "no video stream found");
    }
}
