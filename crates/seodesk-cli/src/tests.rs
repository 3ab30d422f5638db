//! Session and command-parsing tests

use tempfile::tempdir;

use crate::{Command, DraftKind, Session};
use seodesk_content::TemplateStudio;
use seodesk_store::{Mode, ProjectStatus, SeoWorkspace, WorkspaceConfig};

fn session_in(dir: &std::path::Path) -> Session {
    let store = SeoWorkspace::open(&WorkspaceConfig::new(dir)).unwrap();
    Session::new(store, Box::new(TemplateStudio::instant()))
}

#[test]
fn test_parse_project_add_with_quoted_name() {
    let command = Command::parse("project add \"My Blog\" https://blog.example.com").unwrap();
    assert_eq!(
        command,
        Command::ProjectAdd {
            name: "My Blog".to_string(),
            url: "https://blog.example.com".to_string(),
        }
    );
}

#[test]
fn test_parse_project_status() {
    let command = Command::parse("project status abc123 paused").unwrap();
    assert_eq!(
        command,
        Command::ProjectStatus {
            id: "abc123".to_string(),
            status: ProjectStatus::Paused,
        }
    );
}

#[test]
fn test_parse_draft_joins_topic_words() {
    let command = Command::parse("draft titles local seo audit").unwrap();
    assert_eq!(
        command,
        Command::Draft {
            kind: DraftKind::Titles,
            topic: "local seo audit".to_string(),
        }
    );
}

#[test]
fn test_parse_rejects_unknown_command() {
    assert!(Command::parse("transmogrify").is_err());
    assert!(Command::parse("").is_err());
}

#[test]
fn test_parse_rejects_bad_mode() {
    assert!(Command::parse("mode expert").is_err());
}

#[test]
fn test_parse_usage_errors() {
    assert!(Command::parse("record").is_err());
    assert!(Command::parse("project add onlyname").is_err());
    assert!(Command::parse("draft titles").is_err());
    assert!(Command::parse("learn done").is_err());
}

#[tokio::test]
async fn test_project_add_reaches_the_store() {
    let dir = tempdir().unwrap();
    let mut session = session_in(dir.path());

    session
        .execute(Command::ProjectAdd {
            name: "Demo".to_string(),
            url: "https://demo.example.com".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(session.store().projects().len(), 1);
    assert_eq!(session.store().projects()[0].name, "Demo");
    assert_eq!(session.store().projects()[0].status, ProjectStatus::Active);
}

#[tokio::test]
async fn test_project_status_resolves_by_name() {
    let dir = tempdir().unwrap();
    let mut session = session_in(dir.path());

    session
        .execute(Command::ProjectAdd {
            name: "Demo".to_string(),
            url: "https://demo.example.com".to_string(),
        })
        .await
        .unwrap();
    session
        .execute(Command::ProjectStatus {
            id: "demo".to_string(),
            status: ProjectStatus::Completed,
        })
        .await
        .unwrap();

    assert_eq!(
        session.store().projects()[0].status,
        ProjectStatus::Completed
    );
}

#[tokio::test]
async fn test_record_without_analysis_is_harmless() {
    let dir = tempdir().unwrap();
    let mut session = session_in(dir.path());

    session
        .execute(Command::ProjectAdd {
            name: "Demo".to_string(),
            url: "https://demo.example.com".to_string(),
        })
        .await
        .unwrap();
    session
        .execute(Command::Record {
            project: "Demo".to_string(),
        })
        .await
        .unwrap();

    assert!(session.store().projects()[0].seo_history.is_empty());
}

#[tokio::test]
async fn test_client_add_is_gated_outside_agency_mode() {
    let dir = tempdir().unwrap();
    let mut session = session_in(dir.path());

    // Beginner mode: the gate fires before any prompting happens
    session.execute(Command::ClientAdd).await.unwrap();
    assert!(session.store().clients().is_empty());
}

#[tokio::test]
async fn test_mode_switch_persists() {
    let dir = tempdir().unwrap();
    let mut session = session_in(dir.path());

    session
        .execute(Command::ModeSet { mode: Mode::Agency })
        .await
        .unwrap();
    assert_eq!(session.store().mode(), Mode::Agency);

    let reopened = session_in(dir.path());
    assert_eq!(reopened.store().mode(), Mode::Agency);
}

#[tokio::test]
async fn test_learn_done_rejects_unknown_lesson() {
    let dir = tempdir().unwrap();
    let mut session = session_in(dir.path());

    session
        .execute(Command::LearnDone {
            lesson: "no-such-lesson".to_string(),
        })
        .await
        .unwrap();
    assert!(session.store().completed_lessons().is_empty());

    session
        .execute(Command::LearnDone {
            lesson: "foundations-1".to_string(),
        })
        .await
        .unwrap();
    assert!(session.store().completed_lessons().contains("foundations-1"));
}

#[tokio::test]
async fn test_draft_command_runs_against_the_template_backend() {
    let dir = tempdir().unwrap();
    let mut session = session_in(dir.path());

    session
        .execute(Command::Draft {
            kind: DraftKind::Keywords,
            topic: "link building".to_string(),
        })
        .await
        .unwrap();
}
