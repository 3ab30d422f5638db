//! Template-backed implementation of the content studio

use async_trait::async_trait;
use rand::seq::SliceRandom;

use seodesk_core::{ContentStudio, Result};

use crate::config::StudioConfig;
use crate::templates::{
    DESCRIPTION_TEMPLATES, KEYWORD_PATTERNS, TIP_TEMPLATES, TITLE_TEMPLATES,
};

/// Content studio that fills fixed templates with the requested topic.
///
/// Title drafts are picked from a shuffled copy of the template table so
/// repeated requests differ; descriptions, keywords and tips come back in
/// fixed table order. Each call pauses for the configured delay to mimic a
/// remote backend.
pub struct TemplateStudio {
    config: StudioConfig,
}

impl TemplateStudio {
    /// Number of title drafts returned per request
    pub const TITLE_DRAFTS: usize = 5;

    pub fn new(config: StudioConfig) -> Self {
        Self { config }
    }

    /// Studio with no artificial latency, for tests and scripting
    pub fn instant() -> Self {
        Self::new(StudioConfig::instant())
    }

    async fn pause(&self) {
        if !self.config.draft_delay.is_zero() {
            tokio::time::sleep(self.config.draft_delay).await;
        }
    }
}

/// Upper-case the first letter of each whitespace-separated word
fn capitalize(topic: &str) -> String {
    topic
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl ContentStudio for TemplateStudio {
    async fn draft_titles(&self, topic: &str) -> Result<Vec<String>> {
        self.pause().await;

        let topic = capitalize(topic);
        let mut templates: Vec<&str> = TITLE_TEMPLATES.to_vec();
        templates.shuffle(&mut rand::thread_rng());

        Ok(templates
            .into_iter()
            .take(Self::TITLE_DRAFTS)
            .map(|template| template.replace("{topic}", &topic))
            .collect())
    }

    async fn draft_descriptions(&self, topic: &str) -> Result<Vec<String>> {
        self.pause().await;

        let topic = topic.trim().to_lowercase();
        Ok(DESCRIPTION_TEMPLATES
            .iter()
            .map(|template| template.replace("{topic}", &topic))
            .collect())
    }

    async fn draft_keywords(&self, topic: &str) -> Result<Vec<String>> {
        self.pause().await;

        let topic = topic.trim().to_lowercase();
        Ok(KEYWORD_PATTERNS
            .iter()
            .map(|pattern| pattern.replace("{topic}", &topic))
            .collect())
    }

    async fn draft_tips(&self, topic: &str) -> Result<Vec<String>> {
        self.pause().await;

        let topic = topic.trim().to_lowercase();
        Ok(TIP_TEMPLATES
            .iter()
            .map(|template| template.replace("{topic}", &topic))
            .collect())
    }

    fn backend_name(&self) -> &str {
        "templates"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_yaml_snapshot;

    #[test]
    fn test_capitalize_each_word() {
        assert_eq!(capitalize("local seo audit"), "Local Seo Audit");
        assert_eq!(capitalize("  spaced   out  "), "Spaced Out");
        assert_eq!(capitalize(""), "");
    }

    #[tokio::test]
    async fn test_titles_are_shuffled_templates() {
        let studio = TemplateStudio::instant();
        let titles = studio.draft_titles("link building").await.unwrap();

        assert_eq!(titles.len(), TemplateStudio::TITLE_DRAFTS);
        for title in &titles {
            assert!(title.contains("Link Building"), "title: {}", title);
            assert!(!title.contains("{topic}"));
        }
    }

    #[tokio::test]
    async fn test_descriptions_come_in_fixed_order() {
        let studio = TemplateStudio::instant();
        let first = studio.draft_descriptions("Local SEO").await.unwrap();
        let second = studio.draft_descriptions("Local SEO").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), DESCRIPTION_TEMPLATES.len());
        assert!(first[0].contains("local seo"));
    }

    #[tokio::test]
    async fn test_keyword_patterns_snapshot() {
        let studio = TemplateStudio::instant();
        let keywords = studio.draft_keywords("Email Outreach").await.unwrap();

        assert_yaml_snapshot!(keywords, @r###"
        ---
        - email outreach
        - best email outreach
        - email outreach guide
        - email outreach tips
        - how to email outreach
        - email outreach for beginners
        - email outreach tools
        - email outreach checklist
        - learn email outreach
        - email outreach strategy
        "###);
    }

    #[tokio::test]
    async fn test_tips_mention_the_topic() {
        let studio = TemplateStudio::instant();
        let tips = studio.draft_tips("schema markup").await.unwrap();

        assert_eq!(tips.len(), TIP_TEMPLATES.len());
        assert!(tips.iter().all(|tip| tip.contains("schema markup")));
    }
}
