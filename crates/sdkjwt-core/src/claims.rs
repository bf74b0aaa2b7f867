//! Token header and claims.

use serde::{Deserialize, Serialize};

use crate::error::{JwtError, Result};

/// Lifetime of a generated token: one year, in seconds.
pub const TOKEN_LIFETIME_SECS: i64 = 3600 * 24 * 365;

/// JOSE header. Always `{"typ":"JWT","alg":"HS256"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub typ: String,
    pub alg: String,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            typ: "JWT".to_string(),
            alg: "HS256".to_string(),
        }
    }
}

/// SDK authentication claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// SDK app key.
    pub app_key: String,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiration (unix timestamp).
    pub exp: i64,
    /// SDK token expiration; always equal to `exp`.
    pub token_exp: i64,
}

impl Claims {
    /// Build claims issued at `iat`, expiring [`TOKEN_LIFETIME_SECS`] later.
    ///
    /// Fails when the expiry does not fit in an `i64`.
    pub fn new(app_key: &str, iat: i64) -> Result<Self> {
        let exp = iat
            .checked_add(TOKEN_LIFETIME_SECS)
            .ok_or(JwtError::IssueTimeOutOfRange { iat })?;
        Ok(Self {
            app_key: app_key.to_string(),
            iat,
            exp,
            token_exp: exp,
        })
    }
}
