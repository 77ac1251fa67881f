//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `ahp` - Pure domain services for AHP analysis (matrices, priorities, consistency, ranking)

pub mod ahp;
pub mod foundation;
