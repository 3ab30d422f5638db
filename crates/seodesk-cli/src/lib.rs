//! Interactive terminal session for seodesk

mod render;
mod session;
mod ui;

#[cfg(test)]
mod tests;

pub use render::grade_for;
pub use session::{Command, DraftKind, Session};
pub use ui::{display_banner, print_help, read_line_with_history};

// Re-export core types
pub use seodesk_core::{Error, Result};
