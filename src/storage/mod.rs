// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::profile::{Defaulted, ParsedProfile};
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Directory holding every output for one input, created on demand.
    pub fn target_dir(&self, stem: &str) -> Result<PathBuf, StorageError> {
        let target_dir = self.base_dir.join(stem);
        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }
        Ok(target_dir)
    }

    /// Saves the profile as pretty JSON: /base_dir/stem/stem_profile.json
    pub fn save_profile(&self, profile: &ParsedProfile, stem: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.target_dir(stem)?.join(format!("{}_profile.json", stem));

        let json = serde_json::to_string_pretty(profile)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, json).map_err(StorageError::IoError)?;

        tracing::info!("Saved profile to {}", file_path.display());
        Ok(file_path)
    }

    /// Saves extraction metadata next to the profile.
    pub fn save_profile_metadata(
        &self,
        profile: &ParsedProfile,
        defaulted: Defaulted,
        stem: &str,
        source: &Path,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.target_dir(stem)?.join(format!("{}_profile_meta.json", stem));

        let metadata = serde_json::json!({
            "source": source.display().to_string(),
            "skill_count": profile.skills.len(),
            "experience_count": profile.experiences.len(),
            "project_count": profile.projects.len(),
            "defaulted": {
                "school": defaulted.school,
                "major": defaulted.major,
                "graduation_year": defaulted.graduation_year,
            },
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());
        Ok(file_path)
    }
}
