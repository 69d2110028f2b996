//! Credential scope and string-to-sign construction.
//!
//! The credential scope binds a signature to a date, region, and service; the string to sign combines the fixed
//! algorithm identifier, the request timestamp, the scope, and the hash of the canonical request. Both are plain
//! string assembly with no failure modes.

use {
    crate::{
        constants::{AWS4_HMAC_SHA256, AWS4_REQUEST, ISO8601_UTC_LENGTH, SHA256_HEX_LENGTH},
        crypto::sha256_hex,
    },
    log::trace,
};

/// Build the credential scope: `short_date/region/service/aws4_request`.
pub fn credential_scope(short_date: &str, region: &str, service: &str) -> String {
    let mut result =
        String::with_capacity(short_date.len() + 1 + region.len() + 1 + service.len() + 1 + AWS4_REQUEST.len());
    result.push_str(short_date);
    result.push('/');
    result.push_str(region);
    result.push('/');
    result.push_str(service);
    result.push('/');
    result.push_str(AWS4_REQUEST);
    result
}

/// Build the string to sign from the long-form timestamp, the credential scope, and the canonical request.
///
/// The canonical request is hashed here; callers pass the request string itself, not its digest.
pub fn string_to_sign(long_date: &str, scope: &str, canonical_request: &str) -> String {
    let hashed_canonical_request = sha256_hex(canonical_request.as_bytes());

    let capacity = AWS4_HMAC_SHA256.len() + 1 + ISO8601_UTC_LENGTH + 1 + scope.len() + 1 + SHA256_HEX_LENGTH;
    let mut result = String::with_capacity(capacity);
    result.push_str(AWS4_HMAC_SHA256);
    result.push('\n');
    result.push_str(long_date);
    result.push('\n');
    result.push_str(scope);
    result.push('\n');
    result.push_str(&hashed_canonical_request);

    trace!("String to sign:\n{}", result);
    result
}
