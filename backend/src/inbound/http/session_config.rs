//! Session cookie configuration.
//!
//! Flash messages travel in a signed and encrypted cookie session. The key
//! and cookie flags are read from the environment through [`mockable::Env`]
//! so every toggle can be exercised without touching the process
//! environment.
//!
//! | Variable                  | Debug default          | Release            |
//! |---------------------------|------------------------|--------------------|
//! | `SESSION_KEY_FILE`        | ephemeral key if unset | required, >= 64 B  |
//! | `SESSION_COOKIE_SECURE`   | `false` with a warning | required           |
//! | `SESSION_ALLOW_EPHEMERAL` | `false`                | must not be `true` |

use std::path::PathBuf;

use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::{Key, SameSite};
use mockable::Env;
use tracing::warn;
use zeroize::Zeroize;

/// Name of the session cookie carrying flash messages.
pub const SESSION_COOKIE_NAME: &str = "fitness_session";

const KEY_FILE_ENV: &str = "SESSION_KEY_FILE";
const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
const ALLOW_EPHEMERAL_ENV: &str = "SESSION_ALLOW_EPHEMERAL";
const SESSION_KEY_DEFAULT_PATH: &str = "/var/run/secrets/session_key";
const RELEASE_KEY_MIN_LEN: usize = 64;
// `Key::derive_from` rejects anything shorter.
const DERIVE_KEY_MIN_LEN: usize = 32;
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";

/// Build flavour used to decide how strict validation is.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Missing toggles fall back to development defaults.
    Debug,
    /// Every toggle must be set explicitly.
    Release,
}

impl BuildMode {
    /// Mode matching the current compilation profile.
    ///
    /// # Examples
    /// ```
    /// use fitness_tracker::inbound::http::session_config::BuildMode;
    ///
    /// let expected = if cfg!(debug_assertions) { BuildMode::Debug } else { BuildMode::Release };
    /// assert_eq!(BuildMode::current(), expected);
    /// ```
    #[must_use]
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Errors raised while reading session configuration.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    /// A variable release builds depend on is unset.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable holds something other than a boolean.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    /// The key file could not be read.
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The key file holds too few bytes.
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
    /// Release builds refuse throwaway keys.
    #[error("SESSION_ALLOW_EPHEMERAL must be disabled in release builds")]
    EphemeralNotAllowed,
}

/// Validated cookie session settings.
#[derive(Clone)]
pub struct SessionSettings {
    /// Signing and encryption key.
    pub key: Key,
    /// Whether the cookie carries the `Secure` attribute.
    pub cookie_secure: bool,
}

impl SessionSettings {
    /// Read settings from `env`, applying the rules for `mode`.
    ///
    /// # Errors
    /// Returns [`SessionConfigError`] when a release build is missing a
    /// toggle, a toggle is malformed, or the key file is unusable.
    ///
    /// # Examples
    /// ```
    /// use fitness_tracker::inbound::http::session_config::{BuildMode, SessionSettings};
    /// use mockable::MockEnv;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|_| None);
    /// let settings = SessionSettings::from_env(&env, BuildMode::Debug).expect("debug defaults");
    /// assert!(!settings.cookie_secure);
    /// ```
    pub fn from_env<E: Env>(env: &E, mode: BuildMode) -> Result<Self, SessionConfigError> {
        let cookie_secure = cookie_secure_from_env(env, mode)?;
        let allow_ephemeral = flag_from_env(env, ALLOW_EPHEMERAL_ENV, mode, false)?;
        if allow_ephemeral && !mode.is_debug() {
            return Err(SessionConfigError::EphemeralNotAllowed);
        }
        let key = session_key_from_env(env, mode, allow_ephemeral)?;
        Ok(Self { key, cookie_secure })
    }

    /// Cookie session middleware built from these settings.
    #[must_use]
    pub fn middleware(&self) -> SessionMiddleware<CookieSessionStore> {
        SessionMiddleware::builder(CookieSessionStore::default(), self.key.clone())
            .cookie_name(SESSION_COOKIE_NAME.to_owned())
            .cookie_secure(self.cookie_secure)
            .cookie_same_site(SameSite::Lax)
            .cookie_http_only(true)
            .build()
    }
}

fn cookie_secure_from_env<E: Env>(env: &E, mode: BuildMode) -> Result<bool, SessionConfigError> {
    if env.string(COOKIE_SECURE_ENV).is_none() {
        if mode.is_debug() {
            warn!("SESSION_COOKIE_SECURE not set; sending session cookie over plain HTTP");
            return Ok(false);
        }
        return Err(SessionConfigError::MissingEnv {
            name: COOKIE_SECURE_ENV,
        });
    }
    flag_from_env(env, COOKIE_SECURE_ENV, mode, false)
}

fn flag_from_env<E: Env>(
    env: &E,
    name: &'static str,
    mode: BuildMode,
    default: bool,
) -> Result<bool, SessionConfigError> {
    let Some(value) = env.string(name) else {
        return Ok(default);
    };
    match parse_bool(&value) {
        Some(flag) => Ok(flag),
        None if mode.is_debug() => {
            warn!(variable = name, value = %value, default, "invalid boolean; using default");
            Ok(default)
        }
        None => Err(SessionConfigError::InvalidEnv {
            name,
            value,
            expected: BOOL_EXPECTED,
        }),
    }
}

fn session_key_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
    allow_ephemeral: bool,
) -> Result<Key, SessionConfigError> {
    let path = PathBuf::from(
        env.string(KEY_FILE_ENV)
            .unwrap_or_else(|| SESSION_KEY_DEFAULT_PATH.to_owned()),
    );
    let mut bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(error) if mode.is_debug() || allow_ephemeral => {
            warn!(path = %path.display(), %error, "using temporary session key (dev only)");
            return Ok(Key::generate());
        }
        Err(source) => return Err(SessionConfigError::KeyRead { path, source }),
    };

    let min_len = if mode.is_debug() {
        DERIVE_KEY_MIN_LEN
    } else {
        RELEASE_KEY_MIN_LEN
    };
    let length = bytes.len();
    if length < min_len {
        bytes.zeroize();
        return Err(SessionConfigError::KeyTooShort {
            path,
            length,
            min_len,
        });
    }
    let key = Key::derive_from(&bytes);
    bytes.zeroize();
    Ok(key)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "session_config_tests.rs"]
mod tests;
