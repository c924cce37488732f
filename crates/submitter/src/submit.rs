//! The submission pipeline: serialise, encrypt, post.

use common::protocol::CollectionRecord;
use common::SubmitError;
use tracing::info;

use crate::crypto::encrypt_payload;
use crate::gateway::{GatewayClient, GatewayResponse};

/// Serialise `record`, encrypt it under `key`, and submit it through `client`.
///
/// Encryption runs before any network activity, so a bad key never produces
/// an outbound request.
///
/// # Errors
///
/// Propagates [`SubmitError`] from serialisation, the cipher, or the gateway client.
pub async fn submit_record(
    record: &CollectionRecord,
    key: &[u8],
    client: &GatewayClient,
) -> Result<GatewayResponse, SubmitError> {
    let plaintext = common::wire::to_vec(record)?;
    let encrypted = encrypt_payload(&plaintext, key)?;
    info!(
        plaintext_bytes = plaintext.len(),
        ciphertext_chars = encrypted.len(),
        "record encrypted"
    );

    let response = client.submit(&encrypted).await?;
    info!(status = response.status.as_u16(), "gateway call completed");
    Ok(response)
}
