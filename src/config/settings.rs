//! Application settings and paths.
//!
//! Settings live in the XDG config directory. Data files default to the
//! current directory under each program's fixed file name.

use crate::error::{ConfigError, ConfigResult};
use crate::storage::Document;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/tally)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Resolve paths using XDG directories.
    pub fn resolve() -> ConfigResult<Self> {
        let project =
            ProjectDirs::from("com", "tally", "tally").ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Directory holding the data files; the working directory when unset.
    pub data_dir: Option<PathBuf>,
    /// Currency label printed after amounts.
    pub currency: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            data_dir: None,
            currency: "тг".to_string(),
        }
    }
}

impl AppSettings {
    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> ConfigResult<Self> {
        let file = match Paths::resolve() {
            Ok(paths) => paths.settings_file(),
            Err(ConfigError::DirectoryNotFound) => return Ok(Self::default()),
            Err(e) => return Err(e),
        };

        if !file.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// Resolve the data file for document `D`.
    ///
    /// An explicit override wins; otherwise the document's default file name
    /// inside `data_dir` or the working directory.
    pub fn data_file<D: Document>(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        match &self.data_dir {
            Some(dir) => dir.join(D::DEFAULT_FILE),
            None => PathBuf::from(D::DEFAULT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apartments::BuildingData;
    use crate::bookstore::BookstoreData;
    use crate::dealership::DealershipData;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.data_dir, None);
        assert_eq!(settings.currency, "тг");
    }

    #[test]
    fn test_default_data_files() {
        let settings = AppSettings::default();
        assert_eq!(settings.data_file::<BookstoreData>(None), PathBuf::from("store.json"));
        assert_eq!(settings.data_file::<DealershipData>(None), PathBuf::from("data.json"));
        assert_eq!(
            settings.data_file::<BuildingData>(None),
            PathBuf::from("house_data.json")
        );
    }

    #[test]
    fn test_data_file_precedence() {
        let settings = AppSettings {
            data_dir: Some(PathBuf::from("/srv/tally")),
            ..Default::default()
        };
        assert_eq!(
            settings.data_file::<DealershipData>(None),
            PathBuf::from("/srv/tally/data.json")
        );
        assert_eq!(
            settings.data_file::<DealershipData>(Some(Path::new("other.json"))),
            PathBuf::from("other.json")
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("settings.json");
        fs::write(&file, r#"{"data_dir": "/srv/tally", "currency": "₸"}"#).unwrap();

        let settings = AppSettings::load_from(&file).unwrap();
        assert_eq!(settings.data_dir, Some(PathBuf::from("/srv/tally")));
        assert_eq!(settings.currency, "₸");
    }

    #[test]
    fn test_load_from_reports_bad_files() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(matches!(
            AppSettings::load_from(&missing),
            Err(ConfigError::ReadFailed { .. })
        ));

        let bad = dir.path().join("settings.json");
        fs::write(&bad, "{ currency").unwrap();
        assert!(matches!(
            AppSettings::load_from(&bad),
            Err(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("settings.json");
        fs::write(&file, r#"{"currency": "USD"}"#).unwrap();

        let settings = AppSettings::load_from(&file).unwrap();
        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.data_dir, None);
    }
}
