//! Core traits and types for seodesk

pub mod content;
pub mod error;
pub mod types;

pub use content::ContentStudio;
pub use error::{Error, Result};
pub use types::Mode;
