// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod bits;
pub mod error;
pub mod state;

// Re-export public types for convenient access via `ampsearch::core::TypeName`
pub use bits::BitString;
pub use error::SearchError;
pub use state::StateVector;
