//! Environment fallback for connection parameters.
//!
//! `url` and `token` may be omitted by the caller and picked up from
//! `NAUTOBOT_URL` / `NAUTOBOT_TOKEN`. The environment is read through the
//! [`EnvSource`] trait so callers (and tests) decide where values come from.

use std::collections::HashMap;

/// Environment variable consulted when no `url` parameter is given.
pub const URL_ENV_VAR: &str = "NAUTOBOT_URL";

/// Environment variable consulted when no `token` parameter is given.
pub const TOKEN_ENV_VAR: &str = "NAUTOBOT_TOKEN";

/// A source of environment-style settings.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use nautobot_graphql::config::EnvSource;
///
/// let mut env = HashMap::new();
/// env.insert("NAUTOBOT_URL".to_string(), "http://localhost:8000".to_string());
///
/// assert_eq!(env.var("NAUTOBOT_URL").as_deref(), Some("http://localhost:8000"));
/// assert_eq!(env.var("NAUTOBOT_TOKEN"), None);
/// ```
pub trait EnvSource {
    /// Returns the value of `key`, or `None` if it is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads settings from the process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Resolves a setting: explicit value first, then the environment.
///
/// Empty strings count as unset at both levels.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use nautobot_graphql::config::{resolve_setting, URL_ENV_VAR};
///
/// let mut env = HashMap::new();
/// env.insert(URL_ENV_VAR.to_string(), "http://from-env".to_string());
///
/// assert_eq!(
///     resolve_setting(Some("http://explicit"), &env, URL_ENV_VAR).as_deref(),
///     Some("http://explicit")
/// );
/// assert_eq!(
///     resolve_setting(None, &env, URL_ENV_VAR).as_deref(),
///     Some("http://from-env")
/// );
/// ```
pub fn resolve_setting<E: EnvSource + ?Sized>(
    explicit: Option<&str>,
    env: &E,
    key: &str,
) -> Option<String> {
    explicit
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .or_else(|| env.var(key).filter(|value| !value.is_empty()))
}
