//! Path resolution for repset data files.
//!
//! All repset data is stored in `~/.repset/`:
//! - `settings.yaml` - Persisted training settings

use std::path::PathBuf;

use crate::error::RepsetError;

/// Paths to repset data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.repset/`
    pub root: PathBuf,
    /// Settings file: `~/.repset/settings.yaml`
    pub settings_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, RepsetError> {
        let home = std::env::var("HOME")
            .map_err(|_| RepsetError::Config("Could not determine home directory".to_string()))?;

        let root = PathBuf::from(home).join(".repset");
        Ok(Self::with_root(root))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            settings_file: root.join("settings.yaml"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), RepsetError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                RepsetError::Config(format!(
                    "Failed to create directory {:?}: {}",
                    self.root, e
                ))
            })?;
        }
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".repset"))
        })
    }
}
