//! Load the sibyl secrets file (`~/.ai-agent-key/master.env`) into a typed [`Secrets`].
//!
//! Precedence per key: **existing process env > key file**. The file path can be
//! overridden with `SIBYL_KEY_FILE` (used by tests). Both API keys are required;
//! a missing file or key is a [`SecretsError`] and the caller is expected to
//! treat it as fatal at startup.

mod dotenv;

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;

/// Env var (and key-file key) holding the Tavily search API key.
pub const TAVILY_API_KEY: &str = "TAVILY_API_KEY";
/// Env var (and key-file key) holding the OpenRouter gateway API key.
pub const OPENROUTER_API_KEY: &str = "OPENROUTER_API_KEY";

/// Path override for the key file; when unset, `~/.ai-agent-key/master.env` is used.
pub const KEY_FILE_ENV: &str = "SIBYL_KEY_FILE";

#[derive(Error, Debug)]
pub enum SecretsError {
    /// The key file does not exist and the required keys are not in the environment.
    #[error(
        "key file {0:?} not found; run `cp sample.env {0:?}` and put your API keys inside"
    )]
    KeyFileMissing(PathBuf),

    /// The key file exists but could not be read.
    #[error("read key file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A required key is in neither the environment nor the key file.
    #[error("missing required key: {0}")]
    MissingKey(&'static str),
}

/// API keys required at startup.
///
/// Built once by [`Secrets::load`] and passed to the server; nothing re-reads
/// the key file after startup.
#[derive(Clone, Debug)]
pub struct Secrets {
    pub tavily_api_key: String,
    pub openrouter_api_key: String,
}

/// Resolves the key file path: `SIBYL_KEY_FILE` if set, else `~/.ai-agent-key/master.env`.
pub fn key_file_path() -> PathBuf {
    if let Ok(path) = std::env::var(KEY_FILE_ENV) {
        return PathBuf::from(path);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".ai-agent-key")
        .join("master.env")
}

impl Secrets {
    /// Loads both required keys, preferring the process environment over the key file.
    ///
    /// The key file may be absent as long as both keys are already in the
    /// environment; otherwise the absence is reported as [`SecretsError::KeyFileMissing`].
    pub fn load() -> Result<Self, SecretsError> {
        let path = key_file_path();
        let file_map = if path.is_file() {
            let content = std::fs::read_to_string(&path).map_err(|source| SecretsError::Read {
                path: path.clone(),
                source,
            })?;
            dotenv::parse_env_file(&content)
        } else {
            let both_in_env =
                std::env::var(TAVILY_API_KEY).is_ok() && std::env::var(OPENROUTER_API_KEY).is_ok();
            if !both_in_env {
                return Err(SecretsError::KeyFileMissing(path));
            }
            HashMap::new()
        };

        Ok(Self {
            tavily_api_key: resolve(TAVILY_API_KEY, &file_map)?,
            openrouter_api_key: resolve(OPENROUTER_API_KEY, &file_map)?,
        })
    }
}

/// One key: existing env wins, then the file map; empty values count as missing.
fn resolve(key: &'static str, file_map: &HashMap<String, String>) -> Result<String, SecretsError> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| file_map.get(key).filter(|v| !v.trim().is_empty()).cloned())
        .ok_or(SecretsError::MissingKey(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    // Secrets::load reads process env, so these tests run serially via a lock
    // and restore every env var they touch.
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    fn restore(key: &str, prev: Option<String>) {
        match prev {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
    }

    fn with_clean_env<R>(f: impl FnOnce() -> R) -> R {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let prev_file = env::var(KEY_FILE_ENV).ok();
        let prev_tavily = env::var(TAVILY_API_KEY).ok();
        let prev_router = env::var(OPENROUTER_API_KEY).ok();
        env::remove_var(TAVILY_API_KEY);
        env::remove_var(OPENROUTER_API_KEY);
        let out = f();
        restore(KEY_FILE_ENV, prev_file);
        restore(TAVILY_API_KEY, prev_tavily);
        restore(OPENROUTER_API_KEY, prev_router);
        out
    }

    #[test]
    fn loads_both_keys_from_file() {
        with_clean_env(|| {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("master.env");
            std::fs::write(&path, "TAVILY_API_KEY=tvly-x\nOPENROUTER_API_KEY=or-y\n").unwrap();
            env::set_var(KEY_FILE_ENV, &path);

            let secrets = Secrets::load().unwrap();
            assert_eq!(secrets.tavily_api_key, "tvly-x");
            assert_eq!(secrets.openrouter_api_key, "or-y");
        });
    }

    #[test]
    fn env_wins_over_file() {
        with_clean_env(|| {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("master.env");
            std::fs::write(&path, "TAVILY_API_KEY=from-file\nOPENROUTER_API_KEY=or-y\n").unwrap();
            env::set_var(KEY_FILE_ENV, &path);
            env::set_var(TAVILY_API_KEY, "from-env");

            let secrets = Secrets::load().unwrap();
            assert_eq!(secrets.tavily_api_key, "from-env");
        });
    }

    #[test]
    fn missing_file_without_env_keys_is_fatal() {
        with_clean_env(|| {
            let dir = tempfile::tempdir().unwrap();
            env::set_var(KEY_FILE_ENV, dir.path().join("nope.env"));

            let err = Secrets::load().unwrap_err();
            assert!(matches!(err, SecretsError::KeyFileMissing(_)), "{err}");
        });
    }

    #[test]
    fn missing_file_with_both_env_keys_is_ok() {
        with_clean_env(|| {
            let dir = tempfile::tempdir().unwrap();
            env::set_var(KEY_FILE_ENV, dir.path().join("nope.env"));
            env::set_var(TAVILY_API_KEY, "tvly-x");
            env::set_var(OPENROUTER_API_KEY, "or-y");

            let secrets = Secrets::load().unwrap();
            assert_eq!(secrets.openrouter_api_key, "or-y");
        });
    }

    #[test]
    fn key_present_but_empty_counts_as_missing() {
        with_clean_env(|| {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("master.env");
            std::fs::write(&path, "TAVILY_API_KEY=tvly-x\nOPENROUTER_API_KEY=\n").unwrap();
            env::set_var(KEY_FILE_ENV, &path);

            let err = Secrets::load().unwrap_err();
            assert!(
                matches!(err, SecretsError::MissingKey(OPENROUTER_API_KEY)),
                "{err}"
            );
        });
    }
}
