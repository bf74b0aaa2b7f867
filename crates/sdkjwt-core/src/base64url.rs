//! base64url helpers shared by every encode and decode path.
//!
//! Tokens use the URL-safe alphabet (`-` and `_`) with padding stripped.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::Result;

/// Encode bytes as an unpadded base64url segment.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode an unpadded base64url segment.
///
/// Padding and standard-alphabet characters (`+`, `/`) are rejected.
pub fn decode(segment: &str) -> Result<Vec<u8>> {
    Ok(URL_SAFE_NO_PAD.decode(segment)?)
}
