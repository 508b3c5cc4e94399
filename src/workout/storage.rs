//! Training settings persistence.
//!
//! Settings live in a single YAML file under `~/.repset/`. An absent file
//! means "never saved" rather than an error; a present-but-unreadable file
//! is surfaced to the caller.

use crate::config::Paths;
use crate::error::RepsetError;

use super::settings::TrainingSettings;

/// Store for the persisted training settings.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsStore {
    /// Load the saved settings, or `None` when nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored settings exist but cannot be read
    /// or parsed.
    fn load(&self) -> Result<Option<TrainingSettings>, RepsetError>;

    /// Persist the settings, replacing any previous save.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be serialized or written.
    fn save(&self, settings: &TrainingSettings) -> Result<(), RepsetError>;

    /// Remove the saved settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored file exists but cannot be removed.
    fn clear(&self) -> Result<(), RepsetError>;
}

/// YAML-file-backed settings store.
pub struct FileSettingsStore {
    paths: Paths,
}

impl FileSettingsStore {
    /// Create a store rooted at the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, RepsetError> {
        Ok(Self { paths: Paths::new()? })
    }

    /// Create a store with custom paths (useful for testing).
    #[must_use]
    pub const fn with_paths(paths: Paths) -> Self {
        Self { paths }
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<Option<TrainingSettings>, RepsetError> {
        let path = &self.paths.settings_file;
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            RepsetError::Storage(format!(
                "Failed to read settings file {}: {e}",
                path.display()
            ))
        })?;

        let settings: TrainingSettings = serde_yaml::from_str(&contents).map_err(|e| {
            RepsetError::Storage(format!(
                "Failed to parse settings file {}: {e}",
                path.display()
            ))
        })?;

        Ok(Some(settings.normalized()))
    }

    fn save(&self, settings: &TrainingSettings) -> Result<(), RepsetError> {
        self.paths.ensure_dirs()?;

        let contents = serde_yaml::to_string(settings)
            .map_err(|e| RepsetError::Storage(format!("Failed to serialize settings: {e}")))?;

        std::fs::write(&self.paths.settings_file, contents).map_err(|e| {
            RepsetError::Storage(format!(
                "Failed to write settings file {}: {e}",
                self.paths.settings_file.display()
            ))
        })
    }

    fn clear(&self) -> Result<(), RepsetError> {
        let path = &self.paths.settings_file;
        if path.exists() {
            std::fs::remove_file(path).map_err(|e| {
                RepsetError::Storage(format!(
                    "Failed to remove settings file {}: {e}",
                    path.display()
                ))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn store(temp: &TempDir) -> FileSettingsStore {
        FileSettingsStore::with_paths(Paths::with_root(temp.path().to_path_buf()))
    }

    fn sample() -> TrainingSettings {
        TrainingSettings {
            seconds_per_exercise: 30,
            break_seconds: 10,
            sets_number: 3,
            exercises_number: 2,
            exercises: vec!["Push-ups".to_string(), "Squats".to_string()],
        }
    }

    #[test]
    fn test_load_absent_is_none() {
        let temp = TempDir::new().unwrap();

        assert!(store(&temp).load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);

        store.save(&sample()).unwrap();
        let loaded = store.load().unwrap().unwrap();

        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_load_normalizes_stored_shape() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);

        let mut settings = sample();
        settings.exercises_number = 3;
        store.save(&settings).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.exercises.len(), 3);
        assert_eq!(loaded.exercises[2], "");
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let paths = Paths::with_root(temp.path().to_path_buf());
        paths.ensure_dirs().unwrap();
        std::fs::write(&paths.settings_file, "break_seconds: 15\n").unwrap();

        let loaded = FileSettingsStore::with_paths(paths).load().unwrap().unwrap();

        assert_eq!(loaded.break_seconds, 15);
        assert_eq!(loaded.seconds_per_exercise, 0);
    }

    #[test]
    fn test_load_corrupt_file_is_error() {
        let temp = TempDir::new().unwrap();
        let paths = Paths::with_root(temp.path().to_path_buf());
        paths.ensure_dirs().unwrap();
        std::fs::write(&paths.settings_file, "seconds_per_exercise: [not a number\n").unwrap();

        let result = FileSettingsStore::with_paths(paths).load();

        assert!(matches!(result, Err(RepsetError::Storage(_))));
    }

    #[test]
    fn test_clear_removes_saved_settings() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);

        store.save(&sample()).unwrap();
        store.clear().unwrap();

        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_clear_without_save_is_ok() {
        let temp = TempDir::new().unwrap();

        store(&temp).clear().unwrap();
    }
}
