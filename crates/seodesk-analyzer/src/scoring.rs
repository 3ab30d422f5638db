//! Length-band scoring for titles and meta descriptions

use serde::{Deserialize, Serialize};

/// Analysis result for a single text field (title or description)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisField {
    pub exists: bool,
    pub length: usize,
    pub is_optimal: bool,
    pub content: String,
    pub score: u32,
}

/// Score a page title by its trimmed character count.
///
/// Search engines display roughly 50-60 characters of a title, so that band
/// scores 100; shorter or longer titles fall off in fixed steps.
pub fn score_title(title: &str) -> AnalysisField {
    let trimmed = title.trim();
    let length = trimmed.chars().count();

    let score = match length {
        0 => 0,
        1..=29 => 40,
        30..=49 => 70,
        50..=60 => 100,
        61..=70 => 80,
        _ => 50,
    };

    AnalysisField {
        exists: length > 0,
        length,
        is_optimal: (50..=60).contains(&length),
        content: trimmed.to_string(),
        score,
    }
}

/// Score a meta description by its trimmed character count.
///
/// The display window is roughly 150-160 characters.
pub fn score_description(description: &str) -> AnalysisField {
    let trimmed = description.trim();
    let length = trimmed.chars().count();

    let score = match length {
        0 => 0,
        1..=69 => 40,
        70..=149 => 70,
        150..=160 => 100,
        161..=200 => 75,
        _ => 50,
    };

    AnalysisField {
        exists: length > 0,
        length,
        is_optimal: (150..=160).contains(&length),
        content: trimmed.to_string(),
        score,
    }
}

/// Combine the four sub-scores into the overall score.
///
/// Inputs are already in [0,100] and the weights sum to 1.0, so the rounded
/// result needs no clamping.
pub fn overall_score(title: u32, description: u32, keywords: u32, performance: u32) -> u32 {
    let weighted = f64::from(title) * 0.30
        + f64::from(description) * 0.25
        + f64::from(keywords) * 0.25
        + f64::from(performance) * 0.20;

    weighted.round() as u32
}
