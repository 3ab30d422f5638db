//! Heuristic SEO analysis for seodesk
//!
//! Everything in this crate is a pure function over plain data: scores are
//! illustrative length-band heuristics, not validated ranking science. All
//! functions are total — degenerate input produces a zero score or an empty
//! sequence, never an error.

mod keywords;
mod report;
mod scoring;
mod suggestions;

pub use keywords::{KeywordResult, extract_keywords, keyword_score};
pub use report::{PageInput, PerformanceStats, SeoReport, analyze_page, simulate_performance};
pub use scoring::{AnalysisField, overall_score, score_description, score_title};
pub use suggestions::{Suggestion, SuggestionKind, generate_suggestions};
