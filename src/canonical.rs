//! Canonicalization functionality for signature generation.
//!
//! This includes the URI path, query string, and header canonicalization functions, as well as the ability to
//! create an AWS SigV4 canonical request.
//!
//! **Stability of the helper functions in this module is not guaranteed.** They are exposed with the `unstable`
//! feature for testing and debugging purposes only; [CanonicalRequest] itself is stable.

use {
    crate::{
        constants::{AWS_QUERY_ENCODE_SET, AWS_URI_ENCODE_SET, HDR_X_AMZ_SECURITY_TOKEN},
        crypto::sha256_hex,
        SigningError,
    },
    http::{
        header::{HeaderMap, HeaderValue},
        method::Method,
    },
    log::trace,
    percent_encoding::utf8_percent_encode,
    qualifier_attr::qualifiers,
    std::{
        collections::BTreeMap,
        fmt::{Debug, Formatter, Result as FmtResult},
    },
};

/// A canonicalized request for AWS SigV4.
///
/// The request string is the newline-joined concatenation of the method, the encoded path, the canonical query
/// string, one `name:value` line per signed header, an empty line, the signed header list, and the payload hash.
#[derive(Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    /// The canonical request string that is hashed into the string to sign.
    request_string: String,

    /// Lowercased names of the signed headers, in ascending order.
    signed_header_names: Vec<String>,
}

impl CanonicalRequest {
    /// Create a canonical request.
    ///
    /// # Parameters
    /// * `method` - The HTTP method.
    /// * `path` - The absolute, *unencoded* URI path. It is percent-encoded here.
    /// * `query` - The raw query string without the leading `?`; may be empty.
    /// * `headers` - Every header to sign. Names are compared case-insensitively; insertion order is irrelevant.
    /// * `payload_hash` - The lowercase hex SHA-256 of the body.
    /// * `unsigned_headers` - Lowercase names of headers in `headers` to leave out of the signature.
    ///
    /// # Errors
    /// Returns [SigningError::MalformedHeader] if a header value is not visible ASCII.
    pub fn new(
        method: &Method,
        path: &str,
        query: &str,
        headers: &HeaderMap,
        payload_hash: &str,
        unsigned_headers: &[String],
    ) -> Result<Self, SigningError> {
        let canonical_path = encode_uri_path(path);
        let canonical_query = canonicalize_query_string(query);
        let headers = normalize_headers(headers, unsigned_headers)?;

        let mut request_string = String::with_capacity(1024);
        request_string.push_str(method.as_str());
        request_string.push('\n');
        request_string.push_str(&canonical_path);
        request_string.push('\n');
        request_string.push_str(&canonical_query);
        request_string.push('\n');

        for (name, values) in headers.iter() {
            request_string.push_str(name);
            request_string.push(':');
            request_string.push_str(&values.join(","));
            request_string.push('\n');
        }

        let signed_header_names: Vec<String> = headers.into_keys().collect();

        request_string.push('\n');
        request_string.push_str(&signed_header_names.join(";"));
        request_string.push('\n');
        request_string.push_str(payload_hash);

        let result = Self {
            request_string,
            signed_header_names,
        };

        trace!("Canonical request:\n{}", result.redacted());
        Ok(result)
    }

    /// Retrieve the canonical request string.
    #[inline(always)]
    pub fn request_string(&self) -> &str {
        &self.request_string
    }

    /// Retrieve the lowercased signed header names, in ascending order.
    #[inline(always)]
    pub fn signed_header_names(&self) -> &[String] {
        &self.signed_header_names
    }

    /// The signed header names joined by `;`, as they appear in the `SignedHeaders` parameter.
    pub fn signed_headers(&self) -> String {
        self.signed_header_names.join(";")
    }

    /// Get the lowercase hex SHA-256 hash of the canonical request string.
    pub fn sha256_hex(&self) -> String {
        sha256_hex(self.request_string.as_bytes())
    }

    /// The request string with the session token value masked, suitable for logging.
    fn redacted(&self) -> String {
        self.request_string
            .split('\n')
            .map(|line| match line.split_once(':') {
                Some((HDR_X_AMZ_SECURITY_TOKEN, _)) => format!("{}:<redacted>", HDR_X_AMZ_SECURITY_TOKEN),
                _ => line.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Debug for CanonicalRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CanonicalRequest")
            .field("request_string", &self.redacted())
            .field("signed_header_names", &self.signed_header_names)
            .finish()
    }
}

/// Percent-encode a URI path, leaving `/` and the RFC 3986 unreserved characters alone.
#[cfg_attr(any(doc, feature = "unstable"), qualifiers(pub))]
#[cfg_attr(not(any(doc, feature = "unstable")), qualifiers(pub(crate)))]
fn encode_uri_path(path: &str) -> String {
    utf8_percent_encode(path, &AWS_URI_ENCODE_SET).to_string()
}

/// Canonicalize a raw query string.
///
/// The query is split into `name=value` pairs (a bare `name` has an empty value), each side is re-encoded with every
/// byte but the RFC 3986 unreserved characters percent-encoded, and the encoded pairs are sorted by name and then by
/// value.
#[cfg_attr(any(doc, feature = "unstable"), qualifiers(pub))]
#[cfg_attr(not(any(doc, feature = "unstable")), qualifiers(pub(crate)))]
fn canonicalize_query_string(query: &str) -> String {
    let mut params: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| {
            let k = utf8_percent_encode(&k, &AWS_QUERY_ENCODE_SET).to_string();
            let v = utf8_percent_encode(&v, &AWS_QUERY_ENCODE_SET).to_string();
            (k, v)
        })
        .collect();

    // Sort order is over the encoded forms.
    params.sort();

    params.iter().map(|(k, v)| format!("{}={}", k, v)).collect::<Vec<_>>().join("&")
}

/// Normalize the headers into an ordered map of lowercased name to trimmed values.
///
/// Values for a repeated name are kept in the order they appear in `headers`. Headers named in `unsigned_headers`
/// are skipped.
#[cfg_attr(any(doc, feature = "unstable"), qualifiers(pub))]
#[cfg_attr(not(any(doc, feature = "unstable")), qualifiers(pub(crate)))]
fn normalize_headers(
    headers: &HeaderMap,
    unsigned_headers: &[String],
) -> Result<BTreeMap<String, Vec<String>>, SigningError> {
    let mut result = BTreeMap::<String, Vec<String>>::new();
    for (name, value) in headers.iter() {
        // HeaderName is always lowercase.
        let name = name.as_str();
        if unsigned_headers.iter().any(|h| h.eq_ignore_ascii_case(name)) {
            continue;
        }

        let value = normalize_header_value(name, value)?;
        result.entry(name.to_string()).or_default().push(value);
    }

    Ok(result)
}

/// Trim leading and trailing whitespace from a header value. Internal whitespace is preserved.
#[cfg_attr(any(doc, feature = "unstable"), qualifiers(pub))]
#[cfg_attr(not(any(doc, feature = "unstable")), qualifiers(pub(crate)))]
fn normalize_header_value(name: &str, value: &HeaderValue) -> Result<String, SigningError> {
    let value = value.to_str().map_err(|_| {
        SigningError::MalformedHeader(format!("Header '{}' has a value that is not visible ASCII", name))
    })?;
    Ok(value.trim().to_string())
}
