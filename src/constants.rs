//! Common constants used throughout the crate.
//!
//! This was consolidated here so the entire crate is on the same page about these constant values. If a value
//! is spelled incorrectly, at least it can be fixed in one spot.
//!
//! Tests that are testing the content of a header or error message should not use these constants;
//! they should use hard-coded strings so the tests are also testing for misspellings.
//!
//! Please keep this file organized alphabetically. (This can be a bit hard with comments, etc.)

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Domain suffix appended to `bucket.service` to form the request host.
pub(crate) const AMAZONAWS_COM: &str = "amazonaws.com";

/// Algorithm for AWS SigV4
pub(crate) const AWS4_HMAC_SHA256: &str = "AWS4-HMAC-SHA256";

/// Prefix applied to the raw secret key before the first HMAC in the key derivation chain
pub(crate) const AWS4_KEY_PREFIX: &[u8] = b"AWS4";

/// String included at the end of the AWS SigV4 credential scope
pub(crate) const AWS4_REQUEST: &str = "aws4_request";

/// Percent-encoding set for query string names and values.
///
/// Everything except the RFC 3986 unreserved characters (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) is encoded.
pub(crate) static AWS_QUERY_ENCODE_SET: AsciiSet =
    NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encoding set for URI paths. Same as [AWS_QUERY_ENCODE_SET] but `/` is left alone.
pub(crate) static AWS_URI_ENCODE_SET: AsciiSet =
    NON_ALPHANUMERIC.remove(b'/').remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Default service name for S3-style object storage.
pub(crate) const DEFAULT_SERVICE: &str = "s3";

/// Error code: InternalFailure
pub(crate) const ERR_CODE_INTERNAL_FAILURE: &str = "InternalFailure";

/// Error code: InvalidClientTokenId
pub(crate) const ERR_CODE_INVALID_CLIENT_TOKEN_ID: &str = "InvalidClientTokenId";

/// Error code: InvalidSigningContext (non-AWS standard)
pub(crate) const ERR_CODE_INVALID_SIGNING_CONTEXT: &str = "InvalidSigningContext";

/// Error code: InvalidURIPath
pub(crate) const ERR_CODE_INVALID_URI_PATH: &str = "InvalidURIPath";

/// Error code: MalformedHeader
pub(crate) const ERR_CODE_MALFORMED_HEADER: &str = "MalformedHeader";

/// Error code: MalformedQueryString
pub(crate) const ERR_CODE_MALFORMED_QUERY_STRING: &str = "MalformedQueryString";

/// Error code: MalformedTimestamp (non-AWS standard)
pub(crate) const ERR_CODE_MALFORMED_TIMESTAMP: &str = "MalformedTimestamp";

/// Error code: MissingSecretKey (non-AWS standard)
pub(crate) const ERR_CODE_MISSING_SECRET_KEY: &str = "MissingSecretKey";

/// Error message: `"Secret access key must not be empty"`
pub(crate) const ERR_MSG_MISSING_SECRET_KEY: &str = "Secret access key must not be empty";

/// Header for `host`
pub(crate) const HDR_HOST: &str = "host";

/// Header for `user-agent`
pub(crate) const HDR_USER_AGENT: &str = "user-agent";

/// Header for `x-amz-content-sha256`
pub(crate) const HDR_X_AMZ_CONTENT_SHA256: &str = "x-amz-content-sha256";

/// Header for delivering the request timestamp
pub(crate) const HDR_X_AMZ_DATE: &str = "x-amz-date";

/// Header for delivering the session token
pub(crate) const HDR_X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";

/// Compact ISO8601 format used for the string to sign and the `x-amz-date` header.
pub(crate) const ISO8601_COMPACT_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Short date format used in the credential scope.
pub(crate) const ISO8601_DATE_FORMAT: &str = "%Y%m%d";

/// Length of an ISO8601 date string in the UTC time zone.
pub(crate) const ISO8601_UTC_LENGTH: usize = 16;

/// Authorization header parameter carrying the access key and scope
pub(crate) const PARAM_CREDENTIAL: &str = "Credential";

/// Authorization header parameter carrying the signature itself
pub(crate) const PARAM_SIGNATURE: &str = "Signature";

/// Authorization header parameter specifying the signed headers
pub(crate) const PARAM_SIGNED_HEADERS: &str = "SignedHeaders";

/// Length of a SHA-256 hex string.
pub(crate) const SHA256_HEX_LENGTH: usize = 64;

/// The length of a SHA-256 digest in bytes.
pub(crate) const SHA256_OUTPUT_LEN: usize = 32;

/// URI scheme used for every signed request.
pub(crate) const URI_SCHEME_HTTPS: &str = "https";
