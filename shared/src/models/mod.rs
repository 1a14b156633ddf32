//! Data models
//!
//! One module per document kind held by the external store. Field names
//! serialize as camelCase to stay interoperable with documents written by
//! the original web client. All IDs are opaque `String`s.

pub mod order;
pub mod poll;
pub mod restaurant;
pub mod user;

// Re-exports
pub use order::*;
pub use poll::*;
pub use restaurant::*;
pub use user::*;
