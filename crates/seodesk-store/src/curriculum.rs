//! Static learning curriculum catalog
//!
//! The catalog itself never changes at runtime; the only mutable state is
//! the set of completed lesson ids held by the workspace store. Progress is
//! always computed from that set on read, never cached on the module.

use std::collections::BTreeSet;

/// One lesson inside a learning module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub minutes: u32,
}

/// A learning module: a titled group of lessons at one difficulty level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningModule {
    pub id: String,
    pub title: String,
    pub level: String,
    pub summary: String,
    pub lessons: Vec<Lesson>,
}

fn lesson(id: &str, title: &str, minutes: u32) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        minutes,
    }
}

/// The full static curriculum
pub fn curriculum() -> Vec<LearningModule> {
    vec![
        LearningModule {
            id: "foundations".to_string(),
            title: "SEO Foundations".to_string(),
            level: "beginner".to_string(),
            summary: "How search engines crawl, index and rank pages.".to_string(),
            lessons: vec![
                lesson("foundations-1", "How search engines work", 12),
                lesson("foundations-2", "Anatomy of a search result", 10),
                lesson("foundations-3", "Titles, descriptions and headings", 15),
                lesson("foundations-4", "Measuring what matters", 10),
            ],
        },
        LearningModule {
            id: "keywords".to_string(),
            title: "Keyword Research".to_string(),
            level: "beginner".to_string(),
            summary: "Finding the queries your audience actually types.".to_string(),
            lessons: vec![
                lesson("keywords-1", "Search intent explained", 12),
                lesson("keywords-2", "Building a keyword list", 18),
                lesson("keywords-3", "Judging difficulty and volume", 14),
            ],
        },
        LearningModule {
            id: "onpage".to_string(),
            title: "On-Page Optimization".to_string(),
            level: "intermediate".to_string(),
            summary: "Turning a draft into a page search engines understand.".to_string(),
            lessons: vec![
                lesson("onpage-1", "Writing titles that earn clicks", 15),
                lesson("onpage-2", "Meta descriptions as ad copy", 12),
                lesson("onpage-3", "Internal linking structure", 16),
                lesson("onpage-4", "Images, alt text and media", 10),
            ],
        },
        LearningModule {
            id: "technical".to_string(),
            title: "Technical SEO".to_string(),
            level: "intermediate".to_string(),
            summary: "Crawlability, speed and the plumbing under rankings.".to_string(),
            lessons: vec![
                lesson("technical-1", "Sitemaps and robots.txt", 14),
                lesson("technical-2", "Page speed fundamentals", 16),
                lesson("technical-3", "Mobile-first indexing", 12),
            ],
        },
        LearningModule {
            id: "authority".to_string(),
            title: "Content & Authority".to_string(),
            level: "advanced".to_string(),
            summary: "Earning links and building topical depth over time.".to_string(),
            lessons: vec![
                lesson("authority-1", "Topic clusters and pillar pages", 18),
                lesson("authority-2", "Link building that scales", 20),
                lesson("authority-3", "Refreshing and pruning content", 14),
            ],
        },
    ]
}

/// Percentage of a module's lessons present in the completed set, rounded
pub fn module_progress(module: &LearningModule, completed: &BTreeSet<String>) -> u32 {
    if module.lessons.is_empty() {
        return 0;
    }

    let done = module
        .lessons
        .iter()
        .filter(|lesson| completed.contains(&lesson.id))
        .count();

    ((done * 100) as f64 / module.lessons.len() as f64).round() as u32
}

/// A module counts as completed only when every lesson is done
pub fn module_completed(module: &LearningModule, completed: &BTreeSet<String>) -> bool {
    module_progress(module, completed) == 100
}
