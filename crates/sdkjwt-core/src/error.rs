//! Token codec error types.

/// Result type alias using the codec error.
pub type Result<T> = std::result::Result<T, JwtError>;

/// Errors from encoding or decoding a token.
///
/// Signature mismatches during [`verify`](crate::JwtCodec::verify) are not
/// errors; only [`decode`](crate::JwtCodec::decode) reports them.
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid base64url segment: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid HMAC key: {0}")]
    InvalidKey(String),

    #[error("Malformed token: expected 3 segments, got {segments}")]
    MalformedToken { segments: usize },

    #[error("Issue time {iat} is too large: expiry would overflow")]
    IssueTimeOutOfRange { iat: i64 },

    #[error("Token signature does not match")]
    InvalidSignature,
}
