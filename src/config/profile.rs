use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PROFILE_FILE, PROFILE_VERSION};

/// A collection profile: where to scan, what to match, where copies go.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CollectionProfile {
    pub version: String,
    pub description: String,
    /// Directory the collector scans.
    pub source_root: PathBuf,
    /// Glob patterns; an empty list selects every regular file.
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Default destination root for copy runs.
    #[serde(default)]
    pub destination: Option<PathBuf>,
}

impl Default for CollectionProfile {
    fn default() -> Self {
        CollectionProfile {
            version: PROFILE_VERSION.to_string(),
            description: "File collection profile".to_string(),
            source_root: PathBuf::from("."),
            patterns: Vec::new(),
            destination: None,
        }
    }
}

impl CollectionProfile {
    /// Load a profile from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read profile file: {}", path.display()))?;

        let profile: CollectionProfile =
            serde_yaml::from_str(&content).context("Failed to parse YAML profile")?;

        debug!("Loaded profile from {}", path.display());
        Ok(profile)
    }

    /// Save the profile to a YAML file
    pub fn save_to_yaml_file(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self).context("Failed to serialize profile to YAML")?;

        fs::write(path, yaml)
            .context(format!("Failed to write profile to {}", path.display()))?;

        info!("Saved profile to {}", path.display());
        Ok(())
    }
}

/// Load a profile file or fall back to defaults.
///
/// Resolution order:
/// 1. The specified path, if provided and it exists
/// 2. The specified path gets a freshly written default profile if missing
/// 3. With no path, `collection.yaml` in the working directory if present
/// 4. Otherwise the built-in default profile
pub fn load_or_create_config(config_path: Option<&Path>) -> Result<CollectionProfile> {
    match config_path {
        Some(path) => {
            if path.exists() {
                CollectionProfile::from_yaml_file(path)
            } else {
                info!(
                    "Profile {} not found, writing a default profile there",
                    path.display()
                );
                let profile = CollectionProfile::default();
                profile.save_to_yaml_file(path)?;
                Ok(profile)
            }
        }
        None => {
            let default_path = Path::new(DEFAULT_PROFILE_FILE);
            if default_path.exists() {
                CollectionProfile::from_yaml_file(default_path)
            } else {
                debug!("No profile path provided, using built-in defaults");
                Ok(CollectionProfile::default())
            }
        }
    }
}
