//! Command-line and environment configuration.

use clap::Parser;

/// App key used when none is configured.
pub const DEFAULT_APP_KEY: &str = "12345abc";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "sdkjwt=info,sdkjwt_cli=info,sdkjwt_core=info";

/// Generate and verify HS256 tokens for meeting SDK authentication.
///
/// With no arguments, prints a token for the built-in app key signed with the
/// jwt.io default secret, followed by its verification result.
#[derive(Parser, Debug, Clone)]
#[command(name = "sdkjwt", version, about, long_about = None)]
pub struct Config {
    /// SDK app key placed in the `appKey` claim
    #[arg(long, env = "SDKJWT_APP_KEY", default_value = DEFAULT_APP_KEY)]
    pub app_key: String,

    /// Signing secret (defaults to the jwt.io debugger secret)
    #[arg(long, env = "SDKJWT_SECRET", hide_env_values = true)]
    pub secret: Option<String>,

    /// Verify an existing token instead of generating one
    #[arg(long, value_name = "TOKEN")]
    pub verify: Option<String>,

    /// Print the decoded header and claims of a verified token
    #[arg(long)]
    pub decode: bool,

    /// Emit logs as JSON lines
    #[arg(long, env = "SDKJWT_LOG_JSON")]
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_key: DEFAULT_APP_KEY.to_string(),
            secret: None,
            verify: None,
            decode: false,
            log_json: false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::ffi::OsStr;

    use clap::CommandFactory;

    use super::*;

    fn arg(id: &str) -> clap::Arg {
        Config::command()
            .get_arguments()
            .find(|a| a.get_id() == id)
            .cloned()
            .expect("argument should exist")
    }

    #[test]
    fn app_key_defaults_to_built_in_key() {
        let defaults: Vec<String> = arg("app_key")
            .get_default_values()
            .iter()
            .map(|v| v.to_string_lossy().into_owned())
            .collect();
        assert_eq!(defaults, [DEFAULT_APP_KEY]);
    }

    #[test]
    fn secret_has_no_built_in_default() {
        assert!(arg("secret").get_default_values().is_empty());
    }

    #[test]
    fn settings_fall_back_to_env_vars() {
        assert_eq!(arg("app_key").get_env(), Some(OsStr::new("SDKJWT_APP_KEY")));
        assert_eq!(arg("secret").get_env(), Some(OsStr::new("SDKJWT_SECRET")));
        assert_eq!(arg("log_json").get_env(), Some(OsStr::new("SDKJWT_LOG_JSON")));
        assert_eq!(arg("verify").get_env(), None);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "sdkjwt",
            "--app-key",
            "abc",
            "--secret",
            "s3cret",
            "--verify",
            "a.b.c",
            "--decode",
        ])
        .unwrap();
        assert_eq!(config.app_key, "abc");
        assert_eq!(config.secret.as_deref(), Some("s3cret"));
        assert_eq!(config.verify.as_deref(), Some("a.b.c"));
        assert!(config.decode);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Config::try_parse_from(["sdkjwt", "extra"]).is_err());
    }

    #[test]
    fn default_matches_no_flag_behavior() {
        let config = Config::default();
        assert_eq!(config.app_key, DEFAULT_APP_KEY);
        assert!(config.secret.is_none());
        assert!(config.verify.is_none());
        assert!(!config.decode);
    }

    #[test]
    fn cli_definition_is_valid() {
        Config::command().debug_assert();
    }
}
