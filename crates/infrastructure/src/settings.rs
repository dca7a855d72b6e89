//! Logger settings.
//!
//! Settings are read from an optional file (format picked by extension)
//! and then from `LINELOG_*` environment variables, which take precedence:
//! - `LINELOG_MAX_LEVEL=warn` (or the numeric code, `2`)
//! - `LINELOG_STREAM=stdout_only`

use std::path::Path;

use config::{Config, Environment, File};
use linelog_domain::Level;
use serde::{Deserialize, Serialize};

/// Prefix of the environment variables read by [`load_settings`].
pub const ENV_PREFIX: &str = "LINELOG";

/// Error type for settings loading.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// A source could not be read or a value had the wrong shape.
    #[error("invalid logger settings: {0}")]
    Config(#[from] config::ConfigError),
}

/// Where lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StreamTarget {
    /// Most severe level to standard error, everything else to standard output.
    #[default]
    Stdio,
    /// Every level to standard output.
    StdoutOnly,
}

/// Settings for a process-level logger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    /// Least severe level that is still written.
    pub max_level: Level,

    /// Stream routing.
    pub stream: StreamTarget,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            max_level: Level::Debug,
            stream: StreamTarget::default(),
        }
    }
}

/// Loads settings from `path` (if given and present) and the environment.
///
/// A missing file is not an error; defaults apply for anything unset.
///
/// # Errors
///
/// Returns an error if the file cannot be parsed or a value is invalid,
/// e.g. an unknown level name.
pub fn load_settings(path: Option<&Path>) -> Result<LoggerSettings, SettingsError> {
    load_with_env(path, Environment::with_prefix(ENV_PREFIX))
}

fn load_with_env(
    path: Option<&Path>,
    env: Environment,
) -> Result<LoggerSettings, SettingsError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "settings file not found, using defaults");
        }
        builder = builder.add_source(File::from(path).required(false));
    }

    let settings: LoggerSettings = builder.add_source(env).build()?.try_deserialize()?;
    tracing::debug!(
        max_level = %settings.max_level,
        stream = ?settings.stream,
        "logger settings loaded"
    );
    Ok(settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_sources() {
        let settings = load_with_env(None, env(&[])).unwrap();
        assert_eq!(settings, LoggerSettings::default());
        assert_eq!(settings.max_level, Level::Debug);
        assert_eq!(settings.stream, StreamTarget::Stdio);
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let settings = load_with_env(Some(&path), env(&[])).unwrap();
        assert_eq!(settings, LoggerSettings::default());
    }

    #[test]
    fn test_file_values() {
        let file = toml_file("max_level = \"warn\"\nstream = \"stdout_only\"\n");
        let settings = load_with_env(Some(file.path()), env(&[])).unwrap();
        assert_eq!(settings.max_level, Level::Warn);
        assert_eq!(settings.stream, StreamTarget::StdoutOnly);
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = toml_file("max_level = \"warn\"\n");
        let settings =
            load_with_env(Some(file.path()), env(&[("LINELOG_MAX_LEVEL", "error")])).unwrap();
        assert_eq!(settings.max_level, Level::Error);
        assert_eq!(settings.stream, StreamTarget::Stdio);
    }

    #[test]
    fn test_level_by_numeric_code() {
        let settings = load_with_env(None, env(&[("LINELOG_MAX_LEVEL", "2")])).unwrap();
        assert_eq!(settings.max_level, Level::Warn);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let result = load_with_env(None, env(&[("LINELOG_MAX_LEVEL", "chatty")]));
        assert!(matches!(result, Err(SettingsError::Config(_))));
    }
}
