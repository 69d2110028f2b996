use {
    crate::{constants::SHA256_OUTPUT_LEN, SigningError},
    hmac::{Hmac, Mac},
    sha2::{Digest, Sha256},
};

type HmacSha256 = Hmac<Sha256>;

/// Wrapper function to form a HMAC-SHA256 operation, returning the raw tag.
///
/// HMAC accepts keys of any length, so the error path is unreachable in practice; it is still
/// propagated as [SigningError::InternalFailure] rather than panicking.
#[inline(always)]
pub(crate) fn hmac_sha256(key: &[u8], value: &[u8]) -> Result<[u8; SHA256_OUTPUT_LEN], SigningError> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|e| SigningError::InternalFailure(Box::new(e)))?;
    mac.update(value);
    Ok(mac.finalize().into_bytes().into())
}

/// HMAC-SHA256 of `value`, hex-encoded in lowercase. Used only for the final signature.
#[inline(always)]
pub(crate) fn hmac_sha256_hex(key: &[u8], value: &[u8]) -> Result<String, SigningError> {
    Ok(hex::encode(hmac_sha256(key, value)?))
}

#[inline(always)]
pub(crate) fn sha256(value: &[u8]) -> [u8; SHA256_OUTPUT_LEN] {
    Sha256::digest(value).into()
}

/// Lowercase hex SHA-256 digest of `value`.
#[inline(always)]
pub fn sha256_hex(value: &[u8]) -> String {
    hex::encode(sha256(value))
}
