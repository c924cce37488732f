//! Loading the plaintext collection record from caller input.

use common::protocol::CollectionRecord;
use common::SubmitError;
use tokio::io::AsyncReadExt;

/// Path value that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// Read a [`CollectionRecord`] as JSON from `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns [`SubmitError::Io`] if the input cannot be read and
/// [`SubmitError::Serialization`] if it is not a valid record.
pub async fn load_record(path: &str) -> Result<CollectionRecord, SubmitError> {
    let raw = if path == STDIN_PATH {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    } else {
        tokio::fs::read_to_string(path).await?
    };
    parse_record(&raw)
}

fn parse_record(raw: &str) -> Result<CollectionRecord, SubmitError> {
    Ok(serde_json::from_str(raw)?)
}
