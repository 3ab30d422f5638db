//! Template-based content drafting for seodesk
//!
//! Implements the `ContentStudio` trait with fixed template tables. The
//! drafts only need to look plausible; nothing here consults a model or a
//! network.

mod config;
mod studio;
mod templates;

pub use config::StudioConfig;
pub use studio::TemplateStudio;

// Re-export core types
pub use seodesk_core::{ContentStudio, Error, Result};
