//! Shared data models for the SnapVid resolver service.
//!
//! This crate provides:
//! - Request URL validation and normalization
//! - Serde-serializable types for the resolution API response

pub mod media;
pub mod target;

// Re-export common types
pub use media::{MediaOption, ResolutionResult};
pub use target::{NormalizedTarget, ValidationError};
