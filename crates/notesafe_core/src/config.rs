//! Configuration loading from environment variables.

use crate::constants::{
    DEFAULT_FRONTEND_ORIGIN, DEFAULT_MAX_NOTE_SIZE, DEFAULT_PORT, DEFAULT_XOR_KEY,
};
use crate::{AppError, XorCodec};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Runtime configuration for NoteSafe.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub db_path: String,
    pub port: u16,
    pub xor_key: String,
    pub frontend_origin: String,
    pub max_note_size: usize,
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: String) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = resolve_home_dir() {
            return home.join(rest).to_string_lossy().to_string();
        }
    }
    path
}

fn resolve_home_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        if !home.trim().is_empty() {
            return Some(PathBuf::from(home));
        }
    }

    // Windows
    if let Ok(profile) = env::var("USERPROFILE") {
        if !profile.trim().is_empty() {
            return Some(PathBuf::from(profile));
        }
    }

    std::env::current_dir().ok()
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        Self {
            db_path: non_empty_var("DB_PATH")
                .map(expand_tilde)
                .unwrap_or_else(|| {
                    let home = resolve_home_dir().unwrap_or_else(|| PathBuf::from("."));
                    let cache_dir = home.join(".cache").join("notesafe");
                    cache_dir.join("db").to_string_lossy().to_string()
                }),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            // An empty key would make the keystream undefined, so it falls back too.
            xor_key: env::var("XOR_KEY")
                .ok()
                .filter(|key| !key.is_empty())
                .unwrap_or_else(|| DEFAULT_XOR_KEY.to_string()),
            frontend_origin: non_empty_var("FRONTEND_ORIGIN")
                .map(|origin| origin.trim().to_string())
                .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGIN.to_string()),
            max_note_size: env::var("MAX_NOTE_SIZE")
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_MAX_NOTE_SIZE),
        }
    }

    /// Whether the configured key is the published fallback literal.
    pub fn uses_default_xor_key(&self) -> bool {
        self.xor_key == DEFAULT_XOR_KEY
    }

    /// Build the content codec for the configured key.
    ///
    /// # Errors
    /// Returns [`AppError::InvalidInput`] when the key is empty.
    pub fn codec(&self) -> Result<XorCodec, AppError> {
        XorCodec::new(self.xor_key.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_env_flag, Config};
    use crate::constants::{DEFAULT_FRONTEND_ORIGIN, DEFAULT_PORT, DEFAULT_XOR_KEY};
    use crate::env::{env_lock, EnvGuard};

    #[test]
    fn parse_env_flag_accepts_truthy_values() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert_eq!(parse_env_flag(value), Some(true), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_accepts_falsy_values() {
        for value in ["", "0", "false", "FALSE", " no ", "off"] {
            assert_eq!(parse_env_flag(value), Some(false), "value: {}", value);
        }
    }

    #[test]
    fn parse_env_flag_rejects_unknown_values() {
        assert_eq!(parse_env_flag("maybe"), None);
        assert_eq!(parse_env_flag("enabled"), None);
    }

    #[test]
    fn from_env_applies_defaults_when_unset() {
        let _lock = env_lock().lock().expect("env lock");
        let _key = EnvGuard::remove("XOR_KEY");
        let _port = EnvGuard::remove("PORT");
        let _origin = EnvGuard::remove("FRONTEND_ORIGIN");

        let config = Config::from_env();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.xor_key, DEFAULT_XOR_KEY);
        assert_eq!(config.frontend_origin, DEFAULT_FRONTEND_ORIGIN);
        assert!(config.uses_default_xor_key());
    }

    #[test]
    fn from_env_reads_overrides_and_rejects_empty_key() {
        let _lock = env_lock().lock().expect("env lock");
        let _port = EnvGuard::set("PORT", "4100");
        let _origin = EnvGuard::set("FRONTEND_ORIGIN", " http://notes.local:8080 ");
        let _db = EnvGuard::set("DB_PATH", "/tmp/notesafe-config-test");

        {
            let _key = EnvGuard::set("XOR_KEY", "s3cret");
            let config = Config::from_env();
            assert_eq!(config.port, 4100);
            assert_eq!(config.xor_key, "s3cret");
            assert_eq!(config.frontend_origin, "http://notes.local:8080");
            assert_eq!(config.db_path, "/tmp/notesafe-config-test");
            assert!(!config.uses_default_xor_key());
        }

        let _empty_key = EnvGuard::set("XOR_KEY", "");
        assert_eq!(Config::from_env().xor_key, DEFAULT_XOR_KEY);
    }
}
