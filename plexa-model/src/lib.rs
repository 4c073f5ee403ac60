//! Core data model definitions shared across Plexa crates.
#![allow(missing_docs)]

pub mod container;
pub mod error;
pub mod item;
pub mod media_type;

// Intentionally curated re-exports for downstream consumers.
pub use container::MediaContainer;
pub use error::{ModelError, Result as ModelResult};
pub use item::MediaItem;
pub use media_type::MediaType;
