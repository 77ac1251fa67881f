//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Decision model persistence (in-memory, YAML files)

pub mod storage;

pub use storage::{read_model_file, FileModelStorage, InMemoryModelStorage};
