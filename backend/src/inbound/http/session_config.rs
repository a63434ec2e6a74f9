//! Session cookie settings read from the environment.
//!
//! Debug builds fall back to permissive defaults with a warning. Release
//! builds require every toggle to be present and valid.

use std::path::PathBuf;

use actix_web::cookie::{Key, SameSite};
use mockable::Env;
use tracing::warn;
use zeroize::Zeroizing;

const SESSION_KEY_DEFAULT_PATH: &str = "/var/run/secrets/session_key";
const SESSION_KEY_MIN_LEN: usize = 64;
const KEY_FILE_ENV: &str = "SESSION_KEY_FILE";
const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
const SAMESITE_ENV: &str = "SESSION_SAMESITE";
const ALLOW_EPHEMERAL_ENV: &str = "SESSION_ALLOW_EPHEMERAL";
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no";
const SAMESITE_EXPECTED: &str = "Strict|Lax|None";

/// Validation strictness for session settings.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// Strictness matching the current compilation profile.
    ///
    /// ```rust
    /// use artfolio::inbound::http::session_config::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// assert_eq!(mode == BuildMode::Debug, cfg!(debug_assertions));
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }
}

/// Resolved cookie session settings.
pub struct SessionSettings {
    pub key: Key,
    pub cookie_secure: bool,
    pub same_site: SameSite,
}

/// Errors raised while validating session configuration.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
    #[error("SESSION_SAMESITE=None requires SESSION_COOKIE_SECURE=1")]
    InsecureSameSiteNone,
    #[error("SESSION_ALLOW_EPHEMERAL must be 0 in release builds")]
    EphemeralNotAllowed,
}

/// Build session settings from environment variables.
///
/// # Errors
///
/// Returns [`SessionConfigError`] when a release build finds a missing or
/// malformed toggle, or when the key file cannot be used.
pub fn session_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    let toggles = Toggles { env, mode };
    let cookie_secure = toggles.read(COOKIE_SECURE_ENV, BOOL_EXPECTED, parse_bool, true)?;
    let same_site = toggles.read(SAMESITE_ENV, SAMESITE_EXPECTED, parse_same_site, SameSite::Lax)?;
    if same_site == SameSite::None && !cookie_secure {
        if mode == BuildMode::Release {
            return Err(SessionConfigError::InsecureSameSiteNone);
        }
        warn!("SESSION_SAMESITE=None without a secure cookie; browsers may drop it");
    }
    let allow_ephemeral = toggles.read(ALLOW_EPHEMERAL_ENV, BOOL_EXPECTED, parse_bool, false)?;
    if allow_ephemeral && mode == BuildMode::Release {
        return Err(SessionConfigError::EphemeralNotAllowed);
    }
    let key = load_key(env, mode, allow_ephemeral)?;

    Ok(SessionSettings {
        key,
        cookie_secure,
        same_site,
    })
}

struct Toggles<'a, E> {
    env: &'a E,
    mode: BuildMode,
}

impl<E: Env> Toggles<'_, E> {
    /// Parse `name`, substituting `fallback` in debug builds.
    fn read<T: Copy>(
        &self,
        name: &'static str,
        expected: &'static str,
        parse: fn(&str) -> Option<T>,
        fallback: T,
    ) -> Result<T, SessionConfigError> {
        let Some(value) = self.env.string(name) else {
            return match self.mode {
                BuildMode::Debug => {
                    warn!(variable = name, "not set; using debug default");
                    Ok(fallback)
                }
                BuildMode::Release => Err(SessionConfigError::MissingEnv { name }),
            };
        };
        match (parse(value.trim()), self.mode) {
            (Some(parsed), _) => Ok(parsed),
            (None, BuildMode::Debug) => {
                warn!(variable = name, value = %value, "invalid value; using debug default");
                Ok(fallback)
            }
            (None, BuildMode::Release) => Err(SessionConfigError::InvalidEnv {
                name,
                value,
                expected,
            }),
        }
    }
}

fn load_key<E: Env>(
    env: &E,
    mode: BuildMode,
    allow_ephemeral: bool,
) -> Result<Key, SessionConfigError> {
    let path = PathBuf::from(
        env.string(KEY_FILE_ENV)
            .unwrap_or_else(|| SESSION_KEY_DEFAULT_PATH.to_owned()),
    );
    match std::fs::read(&path) {
        Ok(bytes) => {
            let bytes = Zeroizing::new(bytes);
            if mode == BuildMode::Release && bytes.len() < SESSION_KEY_MIN_LEN {
                return Err(SessionConfigError::KeyTooShort {
                    path,
                    length: bytes.len(),
                    min_len: SESSION_KEY_MIN_LEN,
                });
            }
            Ok(Key::derive_from(&bytes))
        }
        Err(source) if mode == BuildMode::Debug || allow_ephemeral => {
            warn!(path = %path.display(), error = %source, "using ephemeral session key");
            Ok(Key::generate())
        }
        Err(source) => Err(SessionConfigError::KeyRead { path, source }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn parse_same_site(value: &str) -> Option<SameSite> {
    match value.to_ascii_lowercase().as_str() {
        "strict" => Some(SameSite::Strict),
        "lax" => Some(SameSite::Lax),
        "none" => Some(SameSite::None),
        _ => None,
    }
}
