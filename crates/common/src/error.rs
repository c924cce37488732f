//! Error taxonomy for a single submission run.

use thiserror::Error;

/// Every way a submission can fail.
///
/// All variants are terminal for the invocation: nothing is retried and there
/// is no partial-failure state, since each run carries exactly one record.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The encryption key is not the size the cipher requires.
    #[error("invalid encryption key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// The block cipher could not be initialised or failed to encrypt.
    #[error("cipher construction failed: {0}")]
    CipherConstruction(String),

    /// The outbound HTTP request could not be built (bad URL, bad header value, empty body).
    #[error("failed to build request: {0}")]
    RequestConstruction(String),

    /// The request could not be delivered or the response could not be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// A record or envelope could not be converted to or from JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The record input could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl SubmitError {
    /// Short machine-readable code, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            SubmitError::InvalidKeyLength { .. } => "invalid_key_length",
            SubmitError::CipherConstruction(_) => "cipher_construction",
            SubmitError::RequestConstruction(_) => "request_construction",
            SubmitError::Transport(_) => "transport",
            SubmitError::Serialization(_) => "serialization",
            SubmitError::Io(_) => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        assert_eq!(
            SubmitError::InvalidKeyLength {
                expected: 32,
                actual: 16
            }
            .code(),
            "invalid_key_length"
        );
        assert_eq!(
            SubmitError::Transport("timed out".into()).code(),
            "transport"
        );
        assert_eq!(
            SubmitError::RequestConstruction("x".into()).code(),
            "request_construction"
        );
    }

    #[test]
    fn key_length_display_includes_sizes() {
        let e = SubmitError::InvalidKeyLength {
            expected: 32,
            actual: 16,
        };
        let msg = e.to_string();
        assert!(msg.contains("32"));
        assert!(msg.contains("16"));
    }

    #[test]
    fn serde_errors_convert() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let e: SubmitError = err.into();
        assert_eq!(e.code(), "serialization");
    }
}
