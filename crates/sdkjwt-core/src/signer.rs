//! HS256 signing.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::base64url;
use crate::error::{JwtError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Sign `signing_input` (`"<header>.<claims>"`) with HMAC-SHA256 keyed by the
/// secret's UTF-8 bytes and return the base64url-encoded MAC.
pub fn sign(signing_input: &str, secret: &str) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| JwtError::InvalidKey(e.to_string()))?;
    mac.update(signing_input.as_bytes());
    Ok(base64url::encode(mac.finalize().into_bytes()))
}

/// Compare two encoded signatures.
///
/// Runs in time independent of where the inputs first differ.
pub fn signatures_match(expected: &str, actual: &str) -> bool {
    expected.as_bytes().ct_eq(actual.as_bytes()).into()
}
