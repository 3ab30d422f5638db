//! Keyword extraction by token frequency

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Keyword analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordResult {
    pub found: Vec<String>,
    pub density: f64,
    pub score: u32,
}

/// Common function words excluded from extraction. Closed list; tokens of
/// three characters or fewer are dropped separately, before this filter.
const STOP_WORDS: [&str; 60] = [
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "has", "him", "his", "how", "its", "may", "new", "now", "old", "see", "two",
    "who", "did", "get", "let", "say", "she", "too", "use", "that", "with", "have", "this",
    "will", "your", "from", "they", "know", "want", "been", "good", "much", "some", "time",
    "very", "when", "come", "here", "just", "like", "long", "make", "many", "over", "such",
];

/// Extract up to 10 keywords from free text, most frequent first.
///
/// Tokens are lower-cased, stripped of everything outside `[a-z0-9]` and
/// whitespace, split on whitespace runs, and filtered: tokens of length <= 3
/// and stop words never survive. Ordering is by descending frequency with
/// first-seen order breaking ties, so identical input always yields the same
/// ordered output.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    // Punctuation is removed, not replaced: "don't" becomes "dont".
    let sanitizer = regex::Regex::new(r"[^a-z0-9\s]+").unwrap();
    let cleaned = sanitizer.replace_all(&lowered, "");

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for token in cleaned.split_whitespace() {
        if token.len() <= 3 || STOP_WORDS.contains(&token) {
            continue;
        }
        if !counts.contains_key(token) {
            first_seen.push(token);
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    // sort_by is stable, so ties keep first-seen order
    let mut ranked = first_seen;
    ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));
    ranked.truncate(10);

    ranked.into_iter().map(str::to_string).collect()
}

/// Score stepped by how many keywords were found
pub fn keyword_score(count: usize) -> u32 {
    match count {
        n if n >= 5 => 100,
        n if n >= 3 => 70,
        n if n >= 1 => 40,
        _ => 0,
    }
}
