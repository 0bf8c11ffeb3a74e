//! Persisted player preferences.
//!
//! Stored as JSON under a fixed file name in the user's config directory.
//! A missing file yields defaults; writes go through a temporary file and
//! rename so a crash never leaves a half-written config behind.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name of the preferences file inside the config directory.
pub const PREFS_FILE_NAME: &str = "prefs.json";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "SEESAW_CONFIG_DIR";

/// Preferences persisted between sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefs {
    /// Skip the how-to-play overlay at startup.
    ///
    /// Written only when the player opts out of seeing the overlay again.
    #[serde(default)]
    pub hide_how_to_play: bool,
}

/// Error type for preference persistence.
#[derive(Debug)]
pub enum PrefsError {
    /// Filesystem access failed.
    Io(std::io::Error),
    /// The stored file is not valid preferences JSON.
    Format(serde_json::Error),
    /// No config directory could be determined.
    NoConfigDir,
}

impl fmt::Display for PrefsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefsError::Io(e) => write!(f, "preferences I/O error: {e}"),
            PrefsError::Format(e) => write!(f, "malformed preferences file: {e}"),
            PrefsError::NoConfigDir => write!(f, "no config directory available"),
        }
    }
}

impl std::error::Error for PrefsError {}

impl From<std::io::Error> for PrefsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for PrefsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Format(e)
    }
}

/// Resolve the directory holding the preferences file.
///
/// `SEESAW_CONFIG_DIR` wins, then `$XDG_CONFIG_HOME/seesaw`, then
/// `$HOME/.config/seesaw`.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join("seesaw"));
    }
    env::var_os("HOME").map(|home| PathBuf::from(home).join(".config").join("seesaw"))
}

impl Prefs {
    /// Load preferences from the default location.
    ///
    /// Any failure (no config directory, unreadable or malformed file)
    /// falls back to defaults; preferences are never load-bearing.
    #[must_use]
    pub fn load() -> Self {
        config_dir()
            .map(|dir| dir.join(PREFS_FILE_NAME))
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default()
    }

    /// Load preferences from an explicit path.
    ///
    /// A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, PrefsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Save preferences to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if no config directory is available or the write
    /// fails.
    pub fn save(&self) -> Result<(), PrefsError> {
        let dir = config_dir().ok_or(PrefsError::NoConfigDir)?;
        self.save_to(&dir.join(PREFS_FILE_NAME))
    }

    /// Save preferences to an explicit path, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the write
    /// fails.
    pub fn save_to(&self, path: &Path) -> Result<(), PrefsError> {
        let dir = path.parent().ok_or(PrefsError::NoConfigDir)?;
        std::fs::create_dir_all(dir)?;

        // Atomic write: write to temp file, then rename
        let temp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&temp_path, json)?;
        std::fs::rename(temp_path, path)?;
        Ok(())
    }
}
