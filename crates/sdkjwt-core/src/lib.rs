//! `sdkjwt` token codec
//!
//! Builds and verifies the HS256 JSON Web Tokens used to authenticate a
//! meeting SDK client.
//!
//! ## Token layout
//!
//! `base64url(header).base64url(claims).base64url(HMAC-SHA256(secret, "<header>.<claims>"))`
//!
//! - **Header**: `{"typ":"JWT","alg":"HS256"}`
//! - **Claims**: `appKey`, `iat`, `exp` (`iat` + one year), `tokenExp` (= `exp`)
//! - **Secret**: caller supplied, defaulting to the jwt.io debugger secret

pub mod base64url;
pub mod claims;
pub mod codec;
pub mod error;
pub mod signer;

pub use claims::{Claims, Header, TOKEN_LIFETIME_SECS};
pub use codec::{DEFAULT_SECRET, DecodedToken, JwtCodec, RawToken, encode, verify};
pub use error::{JwtError, Result};
