//! Entity models owned by the workspace store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use seodesk_core::Error;

/// Lifecycle status of a tracked project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
    Paused,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Paused => "paused",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(ProjectStatus::Active),
            "completed" => Ok(ProjectStatus::Completed),
            "paused" => Ok(ProjectStatus::Paused),
            other => Err(Error::InvalidInput(format!(
                "unknown project status '{}' (expected active, completed or paused)",
                other
            ))),
        }
    }
}

/// A tracked website/project with its analysis history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub url: String,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub last_analyzed: Option<DateTime<Utc>>,
    /// Append-only, chronological
    pub seo_history: Vec<SeoHistoryEntry>,
}

/// One recorded analysis in a project's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoHistoryEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub score: u32,
    pub grade: String,
    pub summary: HistorySummary,
}

/// Issue counts captured alongside a recorded score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub critical: u32,
    pub warnings: u32,
    pub passed: u32,
}

/// Fields the caller supplies when creating a project; id, timestamps and
/// history are assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub name: String,
    pub url: String,
    pub status: ProjectStatus,
}

/// Partial update for a project; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub status: Option<ProjectStatus>,
}

/// Fields the caller supplies when recording history; id and date are
/// assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct HistoryDraft {
    pub score: u32,
    pub grade: String,
    pub summary: HistorySummary,
}

/// An agency-mode client profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub company: String,
    pub email: String,
    pub website: String,
    pub created_at: DateTime<Utc>,
    /// References into the project collection, by project id
    pub projects: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ClientDraft {
    pub name: String,
    pub company: String,
    pub email: String,
    pub website: String,
}

/// Partial update for a client; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub projects: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            ProjectStatus::Active,
            ProjectStatus::Completed,
            ProjectStatus::Paused,
        ] {
            let parsed: ProjectStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_project_serializes_with_camel_case_names() {
        let project = Project {
            id: "abc123".to_string(),
            name: "Demo".to_string(),
            url: "https://example.com".to_string(),
            status: ProjectStatus::Active,
            created_at: Utc::now(),
            last_analyzed: None,
            seo_history: Vec::new(),
        };

        let json = serde_json::to_value(&project).unwrap();
        assert!(json["createdAt"].is_string());
        assert!(json["lastAnalyzed"].is_null());
        assert!(json["seoHistory"].is_array());
        assert_eq!(json["status"], "active");
    }
}
