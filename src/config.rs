use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR_PREFIX: &str = "drive-sheets-uploader";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_KEY_FILE: &str = "credentials.json";

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub google: GoogleConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GoogleConfig {
    /// Path to the service account key file
    #[serde(default = "default_key_file")]
    pub key_file: PathBuf,
    /// Drive folder that uploads go into and listings are scoped to
    #[serde(default)]
    pub folder_id: String,
    /// Spreadsheet that range updates are written to
    #[serde(default)]
    pub sheet_id: String,
}

fn default_key_file() -> PathBuf {
    PathBuf::from(DEFAULT_KEY_FILE)
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            key_file: default_key_file(),
            folder_id: String::new(),
            sheet_id: String::new(),
        }
    }
}

impl GoogleConfig {
    pub fn folder_id(&self) -> Result<&str> {
        match self.folder_id.is_empty() {
            true => Err(AppError::Config(
                "Drive folder ID must be set (--folder-id, FOLDER_ID or config file)".to_string(),
            )),
            false => Ok(&self.folder_id),
        }
    }

    pub fn sheet_id(&self) -> Result<&str> {
        match self.sheet_id.is_empty() {
            true => Err(AppError::Config(
                "Spreadsheet ID must be set (--sheet-id, SHEETS_ID or config file)".to_string(),
            )),
            false => Ok(&self.sheet_id),
        }
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub key_file: Option<PathBuf>,
    pub folder_id: Option<String>,
    pub sheet_id: Option<String>,
}

impl Config {
    /// Load the config file (if any) and layer the overrides on top.
    ///
    /// An explicit `path` must exist. The default XDG location is optional.
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::xdg_dirs().find_config_file(CONFIG_FILE_NAME) {
                Some(default_path) => Self::from_file(&default_path)?,
                None => {
                    debug!("No config file, using defaults");
                    Config::default()
                }
            },
        };

        let config = config.with_overrides(overrides);

        if config.google.key_file.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Service account key file path must not be empty".to_string(),
            ));
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "Config file not found at {:?}",
                path
            )));
        }

        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))
    }

    fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(key_file) = overrides.key_file {
            self.google.key_file = key_file;
        }
        if let Some(folder_id) = overrides.folder_id {
            self.google.folder_id = folder_id;
        }
        if let Some(sheet_id) = overrides.sheet_id {
            self.google.sheet_id = sheet_id;
        }
        self
    }

    fn xdg_dirs() -> xdg::BaseDirectories {
        xdg::BaseDirectories::with_prefix(CONFIG_DIR_PREFIX)
    }

    /// Get the config file path, creating its directory
    pub fn config_file() -> Result<PathBuf> {
        let xdg_dirs = Self::xdg_dirs();
        xdg_dirs
            .place_config_file(CONFIG_FILE_NAME)
            .map_err(|e| AppError::Config(format!("Failed to create config directory: {}", e)))
    }
}
