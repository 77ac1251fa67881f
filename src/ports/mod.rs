//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `ModelStorage` - Persistence of decision models (criteria, alternatives, judgments)

mod model_storage;

pub use model_storage::{ModelStorage, ModelStorageError};
