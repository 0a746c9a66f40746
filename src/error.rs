// Error taxonomy for the streaming parser.

use thiserror::Error;

/// Errors surfaced by a parse. Nothing is retried internally: a single
/// local file scan has no transient-fault class to retry against.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file could not be opened, or a window read/map failed.
    /// Fatal; the scan aborts and no further records are delivered.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The consumer's record callback signaled failure. The scan aborts;
    /// records already delivered are not rolled back.
    #[error("record callback failed: {0}")]
    Callback(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ParseError {
    /// Wrap a consumer error for propagation out of the record callback.
    pub fn callback<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        ParseError::Callback(err.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ParseError = io.into();
        assert!(matches!(err, ParseError::Io(_)));
    }

    #[test]
    fn test_callback_error_from_message() {
        let err = ParseError::callback("consumer gave up");
        assert!(err.to_string().contains("consumer gave up"));
    }
}
