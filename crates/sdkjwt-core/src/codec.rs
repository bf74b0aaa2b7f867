//! HS256 token encoding and verification.

use tracing::debug;

use crate::base64url;
use crate::claims::{Claims, Header};
use crate::error::{JwtError, Result};
use crate::signer;

/// Secret used when none is configured. Matches the jwt.io debugger default,
/// so tokens can be checked there without extra setup.
pub const DEFAULT_SECRET: &str = "your-256-bit-secret";

/// A verified token split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedToken {
    pub header: Header,
    pub claims: Claims,
    pub signature: String,
}

/// A verified token whose header and claims are left as JSON values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub header: serde_json::Value,
    pub claims: serde_json::Value,
    pub signature: String,
}

/// Encodes and verifies HS256 tokens with a shared secret.
#[derive(Clone)]
pub struct JwtCodec {
    secret: Option<String>,
}

impl std::fmt::Debug for JwtCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtCodec")
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for JwtCodec {
    fn default() -> Self {
        Self::new(None)
    }
}

impl JwtCodec {
    /// Create a codec. `None` falls back to [`DEFAULT_SECRET`].
    pub fn new(secret: Option<&str>) -> Self {
        Self {
            secret: secret.map(str::to_string),
        }
    }

    fn secret(&self) -> &str {
        self.secret.as_deref().unwrap_or(DEFAULT_SECRET)
    }

    /// Encode a token for `app_key` issued now.
    pub fn encode(&self, app_key: &str) -> Result<String> {
        self.encode_at(app_key, now_secs())
    }

    /// Encode a token for `app_key` issued at `iat` (unix seconds).
    pub fn encode_at(&self, app_key: &str, iat: i64) -> Result<String> {
        let header = base64url::encode(serde_json::to_vec(&Header::default())?);
        let claims = base64url::encode(serde_json::to_vec(&Claims::new(app_key, iat)?)?);
        let signing_input = format!("{header}.{claims}");
        let signature = signer::sign(&signing_input, self.secret())?;

        debug!(iat, header_len = header.len(), claims_len = claims.len(), "encoded token");
        Ok(format!("{signing_input}.{signature}"))
    }

    /// Check the token's signature. Anything other than three segments with a
    /// matching signature is `false`.
    pub fn verify(&self, token: &str) -> bool {
        let parts: Vec<&str> = token.split('.').collect();
        let [header, claims, signature] = parts.as_slice() else {
            debug!(segments = parts.len(), "rejecting malformed token");
            return false;
        };

        let Ok(expected) = signer::sign(&format!("{header}.{claims}"), self.secret()) else {
            return false;
        };
        let valid = signer::signatures_match(&expected, signature);
        debug!(valid, "verified token signature");
        valid
    }

    /// Verify the token and parse its header and claims.
    ///
    /// Expiry is not checked.
    pub fn decode(&self, token: &str) -> Result<DecodedToken> {
        let (header, claims, signature) = self.verified_segments(token)?;
        Ok(DecodedToken {
            header: serde_json::from_slice(&base64url::decode(header)?)?,
            claims: serde_json::from_slice(&base64url::decode(claims)?)?,
            signature: signature.to_string(),
        })
    }

    /// Verify the token and parse its header and claims as arbitrary JSON.
    ///
    /// Unlike [`decode`](Self::decode) this accepts any claim set, e.g.
    /// tokens signed with the same secret for other audiences.
    pub fn decode_json(&self, token: &str) -> Result<RawToken> {
        let (header, claims, signature) = self.verified_segments(token)?;
        Ok(RawToken {
            header: serde_json::from_slice(&base64url::decode(header)?)?,
            claims: serde_json::from_slice(&base64url::decode(claims)?)?,
            signature: signature.to_string(),
        })
    }

    fn verified_segments<'a>(&self, token: &'a str) -> Result<(&'a str, &'a str, &'a str)> {
        let parts: Vec<&str> = token.split('.').collect();
        let [header, claims, signature] = parts[..] else {
            return Err(JwtError::MalformedToken {
                segments: parts.len(),
            });
        };

        if !self.verify(token) {
            return Err(JwtError::InvalidSignature);
        }
        Ok((header, claims, signature))
    }
}

/// Encode a token for `app_key`, signed with `secret` or [`DEFAULT_SECRET`].
pub fn encode(app_key: &str, secret: Option<&str>) -> Result<String> {
    JwtCodec::new(secret).encode(app_key)
}

/// Verify `token` against `secret` or [`DEFAULT_SECRET`].
pub fn verify(token: &str, secret: Option<&str>) -> bool {
    JwtCodec::new(secret).verify(token)
}

fn now_secs() -> i64 {
    #[allow(clippy::cast_possible_wrap)]
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;
    secs
}
