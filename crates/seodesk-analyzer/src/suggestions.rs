//! Rule-based improvement suggestions

use serde::{Deserialize, Serialize};

use crate::scoring::AnalysisField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Success,
    Warning,
    Error,
    Info,
}

/// A single improvement suggestion produced by the rule table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub how_to_fix: Option<String>,
}

fn suggestion(
    id: &str,
    kind: SuggestionKind,
    title: &str,
    description: &str,
    how_to_fix: Option<&str>,
) -> Suggestion {
    Suggestion {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        description: description.to_string(),
        how_to_fix: how_to_fix.map(|s| s.to_string()),
    }
}

/// Evaluate the fixed suggestion rule table.
///
/// Title rules run before description rules; within a field the first
/// matching rule wins, so each field contributes exactly one suggestion.
pub fn generate_suggestions(title: &AnalysisField, description: &AnalysisField) -> Vec<Suggestion> {
    let mut suggestions = Vec::with_capacity(2);

    if !title.exists {
        suggestions.push(suggestion(
            "title-missing",
            SuggestionKind::Error,
            "Missing page title",
            "Your page has no title tag. Search engines weight the title more heavily than any other on-page element.",
            Some("Add a title of 50-60 characters that leads with your primary keyword."),
        ));
    } else if title.length < 30 {
        suggestions.push(suggestion(
            "title-short",
            SuggestionKind::Warning,
            "Title is too short",
            "Titles under 30 characters waste the space search results display and usually leave out secondary keywords.",
            Some("Expand the title toward 50-60 characters with a specific benefit or qualifier."),
        ));
    } else if title.length > 60 {
        suggestions.push(suggestion(
            "title-long",
            SuggestionKind::Warning,
            "Title is too long",
            "Titles over 60 characters get cut off in search results, so the end of yours may never be seen.",
            Some("Trim the title to 60 characters or fewer, keeping the primary keyword near the front."),
        ));
    } else {
        suggestions.push(suggestion(
            "title-good",
            SuggestionKind::Success,
            "Title length looks good",
            "Your title fits the 50-60 character window that search results display in full.",
            None,
        ));
    }

    if !description.exists {
        suggestions.push(suggestion(
            "desc-missing",
            SuggestionKind::Error,
            "Missing meta description",
            "Without a meta description, search engines pick an arbitrary page snippet and you lose control of your pitch.",
            Some("Write a 150-160 character description that summarizes the page and invites the click."),
        ));
    } else if description.length < 120 {
        suggestions.push(suggestion(
            "desc-short",
            SuggestionKind::Warning,
            "Description is too short",
            "Short descriptions leave snippet space unused and give searchers little reason to click.",
            Some("Grow the description toward 150-160 characters with concrete detail about the page."),
        ));
    } else if description.length > 160 {
        suggestions.push(suggestion(
            "desc-long",
            SuggestionKind::Warning,
            "Description is too long",
            "Descriptions over 160 characters get truncated mid-sentence in search results.",
            Some("Tighten the description to 160 characters or fewer, front-loading the key message."),
        ));
    } else {
        suggestions.push(suggestion(
            "desc-good",
            SuggestionKind::Success,
            "Description length looks good",
            "Your meta description fits the snippet window search results display in full.",
            None,
        ));
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{score_description, score_title};

    #[test]
    fn test_missing_title_yields_single_error() {
        let title = score_title("");
        let description = score_description("fine enough");
        let suggestions = generate_suggestions(&title, &description);

        let title_rules: Vec<_> = suggestions
            .iter()
            .filter(|s| s.id.starts_with("title-"))
            .collect();
        assert_eq!(title_rules.len(), 1);
        assert_eq!(title_rules[0].id, "title-missing");
        assert_eq!(title_rules[0].kind, SuggestionKind::Error);
    }

    #[test]
    fn test_exactly_one_suggestion_per_field() {
        let title = score_title("short");
        let description = score_description(&"d".repeat(170));
        let suggestions = generate_suggestions(&title, &description);

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].id, "title-short");
        assert_eq!(suggestions[1].id, "desc-long");
    }

    #[test]
    fn test_title_rules_precede_description_rules() {
        let title = score_title("");
        let description = score_description("");
        let suggestions = generate_suggestions(&title, &description);

        assert_eq!(suggestions[0].id, "title-missing");
        assert_eq!(suggestions[1].id, "desc-missing");
    }

    #[test]
    fn test_optimal_fields_get_success_without_fix() {
        let title = score_title(&"t".repeat(55));
        let description = score_description(&"d".repeat(155));
        let suggestions = generate_suggestions(&title, &description);

        assert!(suggestions.iter().all(|s| s.kind == SuggestionKind::Success));
        assert!(suggestions.iter().all(|s| s.how_to_fix.is_none()));
    }

    #[test]
    fn test_description_short_threshold_is_120() {
        // 119 chars warns, 120 chars passes (title band tops out at 60)
        let title = score_title(&"t".repeat(55));

        let short = generate_suggestions(&title, &score_description(&"d".repeat(119)));
        assert_eq!(short[1].id, "desc-short");

        let fine = generate_suggestions(&title, &score_description(&"d".repeat(120)));
        assert_eq!(fine[1].id, "desc-good");
    }

    #[test]
    fn test_warning_rules_carry_a_fix() {
        let title = score_title("Tiny");
        let description = score_description("");
        let suggestions = generate_suggestions(&title, &description);

        assert_eq!(suggestions[0].id, "title-short");
        assert_eq!(suggestions[0].kind, SuggestionKind::Warning);
        assert!(suggestions[0].how_to_fix.is_some());

        assert_eq!(suggestions[1].id, "desc-missing");
        assert_eq!(suggestions[1].kind, SuggestionKind::Error);
        assert!(suggestions[1].how_to_fix.is_some());
    }

    #[test]
    fn test_kind_serializes_as_lowercase_type() {
        let title = score_title("");
        let suggestions = generate_suggestions(&title, &score_description(""));
        let json = serde_json::to_value(&suggestions[0]).unwrap();

        assert_eq!(json["type"], "error");
        assert_eq!(json["id"], "title-missing");
        assert!(json["howToFix"].is_string());
    }
}
