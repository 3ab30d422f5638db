//! Full-page analysis report assembly

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::keywords::{KeywordResult, extract_keywords, keyword_score};
use crate::scoring::{AnalysisField, overall_score, score_description, score_title};
use crate::suggestions::{Suggestion, generate_suggestions};

/// Raw page metadata supplied by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageInput {
    pub title: String,
    pub description: String,
    pub content: String,
}

/// Simulated performance figures. These are illustrative stand-ins, not
/// measurements of anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceStats {
    pub mobile_score: u32,
    pub speed_score: u32,
    pub is_responsive: bool,
}

/// Aggregate analysis result for one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    pub score: u32,
    pub title: AnalysisField,
    pub description: AnalysisField,
    pub keywords: KeywordResult,
    pub performance: PerformanceStats,
    pub suggestions: Vec<Suggestion>,
}

/// Produce simulated performance stats in plausible bands
pub fn simulate_performance() -> PerformanceStats {
    let mut rng = rand::thread_rng();
    PerformanceStats {
        mobile_score: rng.gen_range(55..100),
        speed_score: rng.gen_range(60..100),
        is_responsive: rng.gen_range(0..10) < 9,
    }
}

/// Run the full analysis over a page's metadata.
///
/// Keywords are extracted from the combined title, description and body
/// text; the performance sub-score fed into the weighted overall score is
/// the mean of the simulated mobile and speed figures.
pub fn analyze_page(input: &PageInput) -> SeoReport {
    let title = score_title(&input.title);
    let description = score_description(&input.description);

    let combined = format!("{} {} {}", input.title, input.description, input.content);
    let found = extract_keywords(&combined);
    let keywords = KeywordResult {
        density: if found.is_empty() { 0.0 } else { 2.5 },
        score: keyword_score(found.len()),
        found,
    };

    let performance = simulate_performance();
    let performance_score = (performance.mobile_score + performance.speed_score) / 2;

    let suggestions = generate_suggestions(&title, &description);
    let score = overall_score(
        title.score,
        description.score,
        keywords.score,
        performance_score,
    );

    SeoReport {
        score,
        title,
        description,
        keywords,
        performance,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> PageInput {
        PageInput {
            title: "10 Essential SEO Tips for Beginners - Complete Guide 2024".to_string(),
            description: "Learn the essential SEO techniques every beginner needs: keyword \
                          research, on-page optimization, link building and content strategy, \
                          explained with practical examples."
                .to_string(),
            content: "Search engine optimization rewards consistent, relevant content. \
                      Keyword research tells you what your audience searches for."
                .to_string(),
        }
    }

    #[test]
    fn test_report_composes_all_sections() {
        let report = analyze_page(&sample_input());

        assert!(report.title.is_optimal);
        assert_eq!(report.title.score, 100);
        assert!(!report.keywords.found.is_empty());
        assert_eq!(report.keywords.density, 2.5);
        assert_eq!(report.suggestions.len(), 2);
        assert!(report.score <= 100);
    }

    #[test]
    fn test_empty_input_degenerates_cleanly() {
        let report = analyze_page(&PageInput::default());

        assert_eq!(report.title.score, 0);
        assert_eq!(report.description.score, 0);
        assert!(report.keywords.found.is_empty());
        assert_eq!(report.keywords.score, 0);
        assert_eq!(report.keywords.density, 0.0);
        assert_eq!(report.suggestions[0].id, "title-missing");
        assert_eq!(report.suggestions[1].id, "desc-missing");
    }

    #[test]
    fn test_simulated_performance_stays_in_band() {
        for _ in 0..50 {
            let stats = simulate_performance();
            assert!((55..100).contains(&stats.mobile_score));
            assert!((60..100).contains(&stats.speed_score));
        }
    }

    #[test]
    fn test_report_serializes_with_stable_field_names() {
        let report = analyze_page(&sample_input());
        let json = serde_json::to_value(&report).unwrap();

        // External renderers bind to these names
        assert!(json["title"]["isOptimal"].is_boolean());
        assert!(json["performance"]["mobileScore"].is_number());
        assert!(json["performance"]["isResponsive"].is_boolean());
        assert!(json["keywords"]["found"].is_array());
    }
}
