//! The persisted workspace store

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use seodesk_core::{Mode, Result};

use crate::config::WorkspaceConfig;
use crate::curriculum::{LearningModule, module_completed, module_progress};
use crate::model::{
    Client, ClientDraft, ClientPatch, HistoryDraft, Project, ProjectDraft, ProjectPatch,
    SeoHistoryEntry,
};

const MODE_SLOT: &str = "mode.json";
const PROJECTS_SLOT: &str = "projects.json";
const CLIENTS_SLOT: &str = "clients.json";
const LESSONS_SLOT: &str = "completed_lessons.json";
const ANALYSES_SLOT: &str = "analyses.json";

/// Owns every entity collection and mirrors each one to a JSON slot file in
/// the data directory after every successful mutation.
///
/// Mutations on an unknown id are silent no-ops across all operations, and
/// a no-op never rewrites its slot. Corrupt or missing slot files fall back
/// to their documented defaults on open.
pub struct SeoWorkspace {
    dir: PathBuf,
    mode: Mode,
    projects: Vec<Project>,
    clients: Vec<Client>,
    completed_lessons: BTreeSet<String>,
    total_analyses: u64,
}

fn read_slot<T: DeserializeOwned>(path: &Path, default: T) -> T {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or(default),
        Err(_) => default,
    }
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

impl SeoWorkspace {
    /// Open (or create) the workspace rooted at the configured directory,
    /// rehydrating every slot.
    pub fn open(config: &WorkspaceConfig) -> Result<Self> {
        let dir = config.data_dir.clone();
        fs::create_dir_all(&dir)?;

        Ok(Self {
            mode: read_slot(&dir.join(MODE_SLOT), Mode::default()),
            projects: read_slot(&dir.join(PROJECTS_SLOT), Vec::new()),
            clients: read_slot(&dir.join(CLIENTS_SLOT), Vec::new()),
            completed_lessons: read_slot(&dir.join(LESSONS_SLOT), BTreeSet::new()),
            total_analyses: read_slot(&dir.join(ANALYSES_SLOT), 0),
            dir,
        })
    }

    fn write_slot<T: Serialize>(&self, slot: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.dir.join(slot), json)?;
        Ok(())
    }

    // --- mode ---

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) -> Result<()> {
        self.mode = mode;
        self.write_slot(MODE_SLOT, &self.mode)
    }

    // --- projects ---

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn add_project(&mut self, draft: ProjectDraft) -> Result<Project> {
        let project = Project {
            id: new_id(),
            name: draft.name,
            url: draft.url,
            status: draft.status,
            created_at: Utc::now(),
            last_analyzed: None,
            seo_history: Vec::new(),
        };

        self.projects.push(project.clone());
        self.write_slot(PROJECTS_SLOT, &self.projects)?;
        Ok(project)
    }

    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) -> Result<()> {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            return Ok(());
        };

        if let Some(name) = patch.name {
            project.name = name;
        }
        if let Some(url) = patch.url {
            project.url = url;
        }
        if let Some(status) = patch.status {
            project.status = status;
        }

        self.write_slot(PROJECTS_SLOT, &self.projects)
    }

    pub fn delete_project(&mut self, id: &str) -> Result<()> {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);

        if self.projects.len() == before {
            return Ok(());
        }
        self.write_slot(PROJECTS_SLOT, &self.projects)
    }

    /// Append a history entry to a project and stamp it as analyzed now
    pub fn add_seo_history(&mut self, project_id: &str, draft: HistoryDraft) -> Result<()> {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == project_id) else {
            return Ok(());
        };

        let now = Utc::now();
        project.seo_history.push(SeoHistoryEntry {
            id: new_id(),
            date: now,
            score: draft.score,
            grade: draft.grade,
            summary: draft.summary,
        });
        project.last_analyzed = Some(now);

        self.write_slot(PROJECTS_SLOT, &self.projects)
    }

    // --- clients ---

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn add_client(&mut self, draft: ClientDraft) -> Result<Client> {
        let client = Client {
            id: new_id(),
            name: draft.name,
            company: draft.company,
            email: draft.email,
            website: draft.website,
            created_at: Utc::now(),
            projects: Vec::new(),
        };

        self.clients.push(client.clone());
        self.write_slot(CLIENTS_SLOT, &self.clients)?;
        Ok(client)
    }

    pub fn update_client(&mut self, id: &str, patch: ClientPatch) -> Result<()> {
        let Some(client) = self.clients.iter_mut().find(|c| c.id == id) else {
            return Ok(());
        };

        if let Some(name) = patch.name {
            client.name = name;
        }
        if let Some(company) = patch.company {
            client.company = company;
        }
        if let Some(email) = patch.email {
            client.email = email;
        }
        if let Some(website) = patch.website {
            client.website = website;
        }
        if let Some(projects) = patch.projects {
            client.projects = projects;
        }

        self.write_slot(CLIENTS_SLOT, &self.clients)
    }

    pub fn delete_client(&mut self, id: &str) -> Result<()> {
        let before = self.clients.len();
        self.clients.retain(|c| c.id != id);

        if self.clients.len() == before {
            return Ok(());
        }
        self.write_slot(CLIENTS_SLOT, &self.clients)
    }

    // --- learning progress ---

    pub fn completed_lessons(&self) -> &BTreeSet<String> {
        &self.completed_lessons
    }

    /// Idempotent: completing an already-completed lesson changes nothing
    /// and does not rewrite the slot.
    pub fn mark_lesson_complete(&mut self, lesson_id: &str) -> Result<()> {
        if !self.completed_lessons.insert(lesson_id.to_string()) {
            return Ok(());
        }
        self.write_slot(LESSONS_SLOT, &self.completed_lessons)
    }

    /// Progress percentage for a module, computed from the canonical
    /// completed-lesson set.
    pub fn progress_for(&self, module: &LearningModule) -> u32 {
        module_progress(module, &self.completed_lessons)
    }

    pub fn is_module_completed(&self, module: &LearningModule) -> bool {
        module_completed(module, &self.completed_lessons)
    }

    // --- analysis counter ---

    pub fn total_analyses(&self) -> u64 {
        self.total_analyses
    }

    pub fn increment_analyses(&mut self) -> Result<u64> {
        self.total_analyses += 1;
        self.write_slot(ANALYSES_SLOT, &self.total_analyses)?;
        Ok(self.total_analyses)
    }
}
