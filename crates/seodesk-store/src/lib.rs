//! Local persisted workspace store for seodesk
//!
//! The store owns the mutable entity collections (projects, clients,
//! completed lessons, mode, analysis counter) and mirrors each one to a JSON
//! slot file on every mutation. It knows nothing about the analyzer; callers
//! hand it plain score data to append as history.

mod config;
mod curriculum;
mod model;
mod workspace;

pub use config::WorkspaceConfig;
pub use curriculum::{Lesson, LearningModule, curriculum, module_completed, module_progress};
pub use model::{
    Client, ClientDraft, ClientPatch, HistoryDraft, HistorySummary, Project, ProjectDraft,
    ProjectPatch, ProjectStatus, SeoHistoryEntry,
};
pub use workspace::SeoWorkspace;

// Re-export core types
pub use seodesk_core::{Error, Mode, Result};
