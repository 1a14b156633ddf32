//! Shared types for Fatoor
//!
//! Data models and error types used by every crate in the workspace.
//! All models serialize to the camelCase JSON documents held by the
//! external document store, so the wire shape here is load-bearing.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult};
pub use serde::{Deserialize, Serialize};
