//! In-Memory Model Storage Adapter
//!
//! Stores decision models in memory.
//! Useful for testing and for one-shot CLI runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ahp::DecisionModel;
use crate::domain::foundation::ModelId;
use crate::ports::{ModelStorage, ModelStorageError};

/// In-memory storage for decision models
#[derive(Debug, Clone)]
pub struct InMemoryModelStorage {
    models: Arc<RwLock<HashMap<ModelId, DecisionModel>>>,
}

impl InMemoryModelStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self {
            models: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored models (useful for tests)
    pub async fn clear(&self) {
        self.models.write().await.clear();
    }

    /// Get the number of stored models
    pub async fn model_count(&self) -> usize {
        self.models.read().await.len()
    }
}

impl Default for InMemoryModelStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModelStorage for InMemoryModelStorage {
    async fn save(&self, model: &DecisionModel) -> Result<(), ModelStorageError> {
        debug!(model_id = %model.id, "Saving model in memory");
        self.models.write().await.insert(model.id, model.clone());
        Ok(())
    }

    async fn load(&self, id: ModelId) -> Result<DecisionModel, ModelStorageError> {
        self.models
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(ModelStorageError::NotFound(id))
    }

    async fn exists(&self, id: ModelId) -> Result<bool, ModelStorageError> {
        Ok(self.models.read().await.contains_key(&id))
    }

    async fn list(&self) -> Result<Vec<ModelId>, ModelStorageError> {
        Ok(self.models.read().await.keys().copied().collect())
    }

    async fn delete(&self, id: ModelId) -> Result<(), ModelStorageError> {
        self.models.write().await.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_model(name: &str) -> DecisionModel {
        DecisionModel::builder(name)
            .criteria(vec!["Cost", "Quality"])
            .alternatives(vec!["A", "B"])
            .compare_criteria("Cost", "Quality", 3.0)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_in_memory_save_and_load() {
        let storage = InMemoryModelStorage::new();
        let model = test_model("Laptop");

        storage.save(&model).await.unwrap();
        let loaded = storage.load(model.id).await.unwrap();

        assert_eq!(loaded, model);
    }

    #[tokio::test]
    async fn test_in_memory_load_nonexistent() {
        let storage = InMemoryModelStorage::new();
        let result = storage.load(ModelId::new()).await;
        assert!(matches!(result, Err(ModelStorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_in_memory_save_replaces_existing() {
        let storage = InMemoryModelStorage::new();
        let mut model = test_model("Laptop");
        storage.save(&model).await.unwrap();

        model.add_alternative("C").unwrap();
        storage.save(&model).await.unwrap();

        assert_eq!(storage.model_count().await, 1);
        assert_eq!(storage.load(model.id).await.unwrap().alternatives.len(), 3);
    }

    #[tokio::test]
    async fn test_in_memory_exists_and_delete() {
        let storage = InMemoryModelStorage::new();
        let model = test_model("Laptop");

        assert!(!storage.exists(model.id).await.unwrap());
        storage.save(&model).await.unwrap();
        assert!(storage.exists(model.id).await.unwrap());

        storage.delete(model.id).await.unwrap();
        assert!(!storage.exists(model.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_in_memory_list_and_clear() {
        let storage = InMemoryModelStorage::new();
        let first = test_model("First");
        let second = test_model("Second");
        storage.save(&first).await.unwrap();
        storage.save(&second).await.unwrap();

        let mut ids = storage.list().await.unwrap();
        ids.sort_by_key(|id| id.to_string());
        let mut expected = vec![first.id, second.id];
        expected.sort_by_key(|id| id.to_string());
        assert_eq!(ids, expected);

        storage.clear().await;
        assert_eq!(storage.model_count().await, 0);
    }
}
