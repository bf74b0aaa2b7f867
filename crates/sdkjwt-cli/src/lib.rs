//! sdkjwt CLI Library
//!
//! Argument handling and the token commands behind the `sdkjwt` binary.

pub mod config;
pub mod token_cmd;
