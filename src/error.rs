use {
    crate::constants::*,
    std::{
        error::Error,
        fmt::{Display, Formatter, Result as FmtResult},
    },
};

/// Error returned when an attempt at signing a request fails.
///
/// Signing either succeeds completely or fails with one of these; partial results are never returned. None of the
/// messages carried here include secret key material.
#[derive(Debug)]
#[non_exhaustive]
pub enum SigningError {
    /// Signing failed due to an internal fault in a cryptographic primitive or in assembling the output request.
    InternalFailure(Box<dyn Error + Send + Sync>),

    /// The access key id is missing or empty.
    InvalidClientTokenId(/* message */ String),

    /// The signing context (bucket, region, or service) is incomplete.
    InvalidSigningContext(/* message */ String),

    /// The URI path is not an absolute path, e.g. `foo/bar` instead of `/foo/bar`.
    InvalidURIPath(/* message */ String),

    /// A header could not be signed -- the value is not visible ASCII, or the name or value cannot be represented
    /// as an HTTP header.
    MalformedHeader(/* message */ String),

    /// The query string cannot be represented in the signed request URI.
    MalformedQueryString(/* message */ String),

    /// A timestamp could not be parsed as ISO 8601.
    MalformedTimestamp(/* message */ String),

    /// The secret access key is empty.
    MissingSecretKey,
}

impl SigningError {
    /// Return a short, stable code identifying the kind of error.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InternalFailure(_) => ERR_CODE_INTERNAL_FAILURE,
            Self::InvalidClientTokenId(_) => ERR_CODE_INVALID_CLIENT_TOKEN_ID,
            Self::InvalidSigningContext(_) => ERR_CODE_INVALID_SIGNING_CONTEXT,
            Self::InvalidURIPath(_) => ERR_CODE_INVALID_URI_PATH,
            Self::MalformedHeader(_) => ERR_CODE_MALFORMED_HEADER,
            Self::MalformedQueryString(_) => ERR_CODE_MALFORMED_QUERY_STRING,
            Self::MalformedTimestamp(_) => ERR_CODE_MALFORMED_TIMESTAMP,
            Self::MissingSecretKey => ERR_CODE_MISSING_SECRET_KEY,
        }
    }

    /// Indicates whether the error was caused by the caller's input rather than an internal fault.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::InternalFailure(_))
    }
}

impl Display for SigningError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::InternalFailure(ref e) => Display::fmt(e, f),
            Self::InvalidClientTokenId(msg) => f.write_str(msg),
            Self::InvalidSigningContext(msg) => f.write_str(msg),
            Self::InvalidURIPath(msg) => f.write_str(msg),
            Self::MalformedHeader(msg) => f.write_str(msg),
            Self::MalformedQueryString(msg) => f.write_str(msg),
            Self::MalformedTimestamp(msg) => f.write_str(msg),
            Self::MissingSecretKey => f.write_str(ERR_MSG_MISSING_SECRET_KEY),
        }
    }
}

impl Error for SigningError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InternalFailure(ref e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<http::Error> for SigningError {
    fn from(e: http::Error) -> SigningError {
        SigningError::InternalFailure(Box::new(e))
    }
}

impl From<Box<dyn Error + Send + Sync>> for SigningError {
    fn from(e: Box<dyn Error + Send + Sync>) -> SigningError {
        match e.downcast::<SigningError>() {
            Ok(sig_err) => *sig_err,
            Err(e) => SigningError::InternalFailure(e),
        }
    }
}
