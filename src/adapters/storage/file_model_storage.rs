//! File-based Model Storage Adapter
//!
//! Stores each decision model as a YAML file named after its id.
//! The files are human-editable and can be fed straight to the CLI.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::ahp::DecisionModel;
use crate::domain::foundation::ModelId;
use crate::ports::{ModelStorage, ModelStorageError};

const MODEL_EXTENSION: &str = "yaml";

/// File-based storage for decision models
#[derive(Debug, Clone)]
pub struct FileModelStorage {
    base_path: PathBuf,
}

impl FileModelStorage {
    /// Create a new file storage with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileModelStorage::new("./data/models");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path for a model
    fn model_file_path(&self, id: ModelId) -> PathBuf {
        self.base_path.join(format!("{}.{}", id, MODEL_EXTENSION))
    }

    /// Ensure the base directory exists
    async fn ensure_dir(&self) -> Result<(), ModelStorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| ModelStorageError::IoError(e.to_string()))
    }
}

/// Reads, parses, and validates a model file at an arbitrary path.
///
/// A file that parses but breaks a model rule (shared ids, self-comparisons,
/// a pair judged twice) is rejected as `DeserializationFailed`.
pub async fn read_model_file(path: &Path) -> Result<DecisionModel, ModelStorageError> {
    let yaml = fs::read_to_string(path)
        .await
        .map_err(|e| ModelStorageError::IoError(format!("{}: {}", path.display(), e)))?;

    let model: DecisionModel = serde_yaml::from_str(&yaml)
        .map_err(|e| ModelStorageError::DeserializationFailed(e.to_string()))?;

    model.validate().map_err(|e| {
        warn!(path = %path.display(), error = %e, "Rejected invalid model file");
        ModelStorageError::DeserializationFailed(format!("{}: {}", path.display(), e))
    })?;

    Ok(model)
}

#[async_trait]
impl ModelStorage for FileModelStorage {
    async fn save(&self, model: &DecisionModel) -> Result<(), ModelStorageError> {
        self.ensure_dir().await?;

        let file_path = self.model_file_path(model.id);
        let yaml = serde_yaml::to_string(model)
            .map_err(|e| ModelStorageError::SerializationFailed(e.to_string()))?;

        fs::write(&file_path, yaml)
            .await
            .map_err(|e| ModelStorageError::IoError(e.to_string()))?;

        debug!(model_id = %model.id, path = %file_path.display(), "Saved model");
        Ok(())
    }

    async fn load(&self, id: ModelId) -> Result<DecisionModel, ModelStorageError> {
        let file_path = self.model_file_path(id);

        if !file_path.exists() {
            return Err(ModelStorageError::NotFound(id));
        }

        let model = read_model_file(&file_path).await?;
        debug!(model_id = %id, "Loaded model");
        Ok(model)
    }

    async fn exists(&self, id: ModelId) -> Result<bool, ModelStorageError> {
        Ok(self.model_file_path(id).exists())
    }

    async fn list(&self) -> Result<Vec<ModelId>, ModelStorageError> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.base_path)
            .await
            .map_err(|e| ModelStorageError::IoError(e.to_string()))?;

        let mut ids = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ModelStorageError::IoError(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(MODEL_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match ModelId::from_str(stem) {
                Ok(id) => ids.push(id),
                Err(_) => warn!(path = %path.display(), "Skipping file with non-model name"),
            }
        }

        Ok(ids)
    }

    async fn delete(&self, id: ModelId) -> Result<(), ModelStorageError> {
        let file_path = self.model_file_path(id);

        if file_path.exists() {
            fs::remove_file(&file_path)
                .await
                .map_err(|e| ModelStorageError::IoError(e.to_string()))?;
        }

        Ok(())
    }
}
