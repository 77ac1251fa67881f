//! Model Storage Port - Interface for persisting decision models.
//!
//! Only criteria, alternatives, and judgments are stored. Matrices, weights,
//! and rankings are recomputed on demand and never persisted.

use async_trait::async_trait;

use crate::domain::ahp::DecisionModel;
use crate::domain::foundation::ModelId;

/// Errors that can occur during model storage operations
#[derive(Debug, thiserror::Error)]
pub enum ModelStorageError {
    #[error("Model not found: {0}")]
    NotFound(ModelId),

    #[error("Failed to serialize model: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize model: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting and loading decision models
#[async_trait]
pub trait ModelStorage: Send + Sync {
    /// Save a model, replacing any earlier version with the same id
    ///
    /// # Errors
    /// Returns `ModelStorageError` if save fails
    async fn save(&self, model: &DecisionModel) -> Result<(), ModelStorageError>;

    /// Load a model
    ///
    /// # Errors
    /// Returns `ModelStorageError::NotFound` if no model exists
    async fn load(&self, id: ModelId) -> Result<DecisionModel, ModelStorageError>;

    /// Check if a model exists
    async fn exists(&self, id: ModelId) -> Result<bool, ModelStorageError>;

    /// List the ids of all stored models
    async fn list(&self) -> Result<Vec<ModelId>, ModelStorageError>;

    /// Delete a model; deleting a missing model is not an error
    async fn delete(&self, id: ModelId) -> Result<(), ModelStorageError>;
}
