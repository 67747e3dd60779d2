use calcword_types::{DisplayWidth, Example, InputMode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while locating, reading or writing the configuration file
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// File content or value could not be (de)serialized
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<calcword_types::Error> for Error {
    fn from(err: calcword_types::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Resolve the configuration file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CALCWORD_CONFIG environment variable (with tilde expansion)
/// 3. User config directory (`$XDG_CONFIG_HOME/calcword/config.toml` and platform equivalents)
/// 4. ~/.calcword/config.toml (fallback for systems without a config dir)
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var("CALCWORD_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("calcword").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".calcword").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or config directory found".to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub width: DisplayWidth,
    #[serde(default)]
    pub mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    /// Appended after the built-in examples
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply command-line overrides on top of file values
    pub fn with_overrides(mut self, mode: Option<InputMode>, width: Option<usize>) -> Result<Self> {
        if let Some(mode) = mode {
            self.display.mode = mode;
        }
        if let Some(width) = width {
            self.display.width = DisplayWidth::new(width)?;
        }
        Ok(self)
    }
}
