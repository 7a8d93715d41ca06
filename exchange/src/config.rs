//! Settings for the embedding host, loaded via `OrthoConfig`.
//!
//! Values come from `PROFILE_EXCHANGE_*` environment variables or a config
//! file; command-line arguments are accepted for parity but the library has
//! no binary of its own.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_DATA_DIR: &str = ".";
const DEFAULT_PROFILE_FILE: &str = "own_profile.json";

/// Where the owner's profile is stored.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PROFILE_EXCHANGE")]
pub struct ExchangeSettings {
    /// Directory holding the profile file.
    pub data_dir: Option<PathBuf>,
    /// File name of the stored profile within `data_dir`.
    pub profile_file: Option<String>,
}

impl ExchangeSettings {
    /// Configured data directory, falling back to the working directory.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    /// Configured profile file name, falling back to `own_profile.json`.
    #[must_use]
    pub fn profile_file(&self) -> &str {
        self.profile_file.as_deref().unwrap_or(DEFAULT_PROFILE_FILE)
    }
}
