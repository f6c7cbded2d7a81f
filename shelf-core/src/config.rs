use crate::book::{current_year, DEFAULT_YEAR, MIN_YEAR};
use crate::library_dir::LibraryDir;
use serde::{Deserialize, Serialize};
use shelf_common::{is_listed_genre, GENRES};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_RECENT_LIMIT: usize = 3;
const DEFAULT_TOP_GENRE_LIMIT: usize = 10;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Failed to parse {}: {}", .path.display(), .message)]
    Parse { path: PathBuf, message: String },
    #[error("Failed to get home directory")]
    NoHomeDir,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// YAML config file structure (per-library, all keys optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigYaml {
    /// Year the add form starts at
    pub default_year: Option<i32>,
    /// Genre preselected in the add form
    pub default_genre: Option<String>,
    /// How many recent additions the dashboard lists
    pub recent_limit: Option<usize>,
    /// How many genres the dashboard chart shows
    pub top_genre_limit: Option<usize>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub library_dir: LibraryDir,
    pub default_year: i32,
    pub default_genre: String,
    pub recent_limit: usize,
    pub top_genre_limit: usize,
}

impl Config {
    /// `~/.shelf`
    pub fn default_library_path() -> Result<PathBuf, ConfigError> {
        dirs::home_dir()
            .map(|home| home.join(".shelf"))
            .ok_or(ConfigError::NoHomeDir)
    }

    /// Load config for `library_path`, or for the default library when `None`.
    pub fn load(library_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let library_path = match library_path {
            Some(path) => path,
            None => Self::default_library_path()?,
        };
        Self::load_from_library_dir(LibraryDir::new(library_path))
    }

    /// Read `config.yaml` from the library directory. A missing file means defaults.
    pub fn load_from_library_dir(library_dir: LibraryDir) -> Result<Self, ConfigError> {
        let config_path = library_dir.config_path();
        let yaml = match std::fs::read_to_string(&config_path) {
            Ok(contents) => {
                serde_yaml::from_str::<Option<ConfigYaml>>(&contents)
                    .map_err(|e| ConfigError::Parse {
                        path: config_path.clone(),
                        message: e.to_string(),
                    })?
                    // An empty file parses as None
                    .unwrap_or_default()
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No config.yaml at {}, using defaults", config_path.display());
                ConfigYaml::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self::from_yaml(library_dir, yaml))
    }

    fn from_yaml(library_dir: LibraryDir, yaml: ConfigYaml) -> Self {
        let max_year = current_year();
        let default_year = match yaml.default_year {
            Some(year) if (MIN_YEAR..=max_year).contains(&year) => year,
            Some(year) => {
                warn!("default_year {year} outside {MIN_YEAR}..={max_year}, using {DEFAULT_YEAR}");
                DEFAULT_YEAR
            }
            None => DEFAULT_YEAR,
        };

        let default_genre = match yaml.default_genre {
            Some(genre) if is_listed_genre(&genre) => genre,
            Some(genre) => {
                warn!("default_genre '{genre}' is not a known genre, using {}", GENRES[0]);
                GENRES[0].to_string()
            }
            None => GENRES[0].to_string(),
        };

        Self {
            library_dir,
            default_year,
            default_genre,
            recent_limit: positive_or_default("recent_limit", yaml.recent_limit, DEFAULT_RECENT_LIMIT),
            top_genre_limit: positive_or_default(
                "top_genre_limit",
                yaml.top_genre_limit,
                DEFAULT_TOP_GENRE_LIMIT,
            ),
        }
    }

    pub fn save_to_config_yaml(&self) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&*self.library_dir)?;
        let yaml = ConfigYaml {
            default_year: Some(self.default_year),
            default_genre: Some(self.default_genre.clone()),
            recent_limit: Some(self.recent_limit),
            top_genre_limit: Some(self.top_genre_limit),
        };
        let contents =
            serde_yaml::to_string(&yaml).map_err(|e| ConfigError::Serialization(e.to_string()))?;
        std::fs::write(self.library_dir.config_path(), contents)?;
        Ok(())
    }
}

fn positive_or_default(key: &str, value: Option<usize>, default: usize) -> usize {
    match value {
        Some(0) => {
            warn!("{key} must be at least 1, using {default}");
            default
        }
        Some(n) => n,
        None => default,
    }
}
