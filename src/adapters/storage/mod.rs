//! Storage Adapters
//!
//! Implementations of the ModelStorage port for persisting decision models.
//!
//! ## Available Adapters
//!
//! - **FileModelStorage** - Stores each model as a YAML file on disk
//! - **InMemoryModelStorage** - Stores models in memory (testing/CLI)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileModelStorage, InMemoryModelStorage};
//!
//! // Production: file-based storage
//! let storage = FileModelStorage::new("./data/models");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryModelStorage::new();
//! ```

mod file_model_storage;
mod in_memory_model_storage;

pub use file_model_storage::{read_model_file, FileModelStorage};
pub use in_memory_model_storage::InMemoryModelStorage;
