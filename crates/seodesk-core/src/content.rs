//! Content studio trait and types

use async_trait::async_trait;

use super::Result;

/// Trait for content draft backends (templates today, a real generation
/// service later).
///
/// This trait defines the interface for producing draft titles, meta
/// descriptions, keyword ideas and improvement tips for a topic. The
/// analyzer and the store never depend on it; swapping the backend
/// touches nothing but the wiring in `main`.
#[async_trait]
pub trait ContentStudio: Send + Sync {
    /// Draft page titles for a topic
    async fn draft_titles(&self, topic: &str) -> Result<Vec<String>>;

    /// Draft meta descriptions for a topic
    async fn draft_descriptions(&self, topic: &str) -> Result<Vec<String>>;

    /// Draft keyword ideas for a topic
    async fn draft_keywords(&self, topic: &str) -> Result<Vec<String>>;

    /// Draft general improvement tips for a topic
    async fn draft_tips(&self, topic: &str) -> Result<Vec<String>>;

    /// Name of the backend producing the drafts
    fn backend_name(&self) -> &str;
}
