//! Command parsing and dispatch for the interactive session

use colored::*;

use seodesk_analyzer::{PageInput, SuggestionKind, analyze_page};
use seodesk_core::{ContentStudio, Error, Mode, Result};
use seodesk_store::{
    ClientDraft, HistoryDraft, HistorySummary, ProjectDraft, ProjectPatch, ProjectStatus,
    SeoWorkspace, curriculum,
};

use crate::render::{
    grade_for, print_clients, print_curriculum, print_drafts, print_projects, print_report,
    print_stats,
};
use crate::ui::prompt_line;

/// What kind of content to draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftKind {
    Titles,
    Descriptions,
    Keywords,
    Tips,
}

/// A parsed session command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Analyze,
    Record { project: String },
    ProjectAdd { name: String, url: String },
    ProjectList,
    ProjectStatus { id: String, status: ProjectStatus },
    ProjectRemove { id: String },
    ClientAdd,
    ClientList,
    ClientRemove { id: String },
    Learn,
    LearnDone { lesson: String },
    Draft { kind: DraftKind, topic: String },
    ModeShow,
    ModeSet { mode: Mode },
    Stats,
}

/// Split a command line into tokens, honoring double quotes
fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

fn usage(message: &str) -> Error {
    Error::InvalidInput(message.to_string())
}

impl Command {
    /// Parse one line of user input into a command
    pub fn parse(line: &str) -> Result<Command> {
        let tokens = tokenize(line);
        let words: Vec<&str> = tokens.iter().map(String::as_str).collect();

        match words.as_slice() {
            ["analyze"] => Ok(Command::Analyze),
            ["record", project] => Ok(Command::Record {
                project: project.to_string(),
            }),
            ["record"] => Err(usage("usage: record <project-id-or-name>")),

            ["project", "add", name, url] => Ok(Command::ProjectAdd {
                name: name.to_string(),
                url: url.to_string(),
            }),
            ["project", "add", ..] => Err(usage("usage: project add <name> <url>")),
            ["project", "list"] | ["project"] | ["projects"] => Ok(Command::ProjectList),
            ["project", "status", id, status] => Ok(Command::ProjectStatus {
                id: id.to_string(),
                status: status.parse()?,
            }),
            ["project", "status", ..] => {
                Err(usage("usage: project status <id> <active|completed|paused>"))
            }
            ["project", "rm", id] => Ok(Command::ProjectRemove { id: id.to_string() }),
            ["project", "rm"] => Err(usage("usage: project rm <id>")),

            ["client", "add"] => Ok(Command::ClientAdd),
            ["client", "list"] | ["client"] | ["clients"] => Ok(Command::ClientList),
            ["client", "rm", id] => Ok(Command::ClientRemove { id: id.to_string() }),
            ["client", "rm"] => Err(usage("usage: client rm <id>")),

            ["learn"] | ["learn", "list"] => Ok(Command::Learn),
            ["learn", "done", lesson] => Ok(Command::LearnDone {
                lesson: lesson.to_string(),
            }),
            ["learn", "done"] => Err(usage("usage: learn done <lesson-id>")),

            ["draft", kind, rest @ ..] if !rest.is_empty() => {
                let kind = match *kind {
                    "titles" => DraftKind::Titles,
                    "descriptions" | "desc" => DraftKind::Descriptions,
                    "keywords" => DraftKind::Keywords,
                    "tips" => DraftKind::Tips,
                    other => {
                        return Err(usage(&format!(
                            "unknown draft kind '{}' (expected titles, descriptions, keywords or tips)",
                            other
                        )));
                    }
                };
                Ok(Command::Draft {
                    kind,
                    topic: rest.join(" "),
                })
            }
            ["draft", ..] => Err(usage("usage: draft <titles|descriptions|keywords|tips> <topic>")),

            ["mode"] => Ok(Command::ModeShow),
            ["mode", mode] => Ok(Command::ModeSet {
                mode: mode.parse()?,
            }),

            ["stats"] => Ok(Command::Stats),

            [] => Err(usage("empty command")),
            [other, ..] => Err(usage(&format!(
                "unknown command '{}'; type 'help' for the command list",
                other
            ))),
        }
    }
}

/// One interactive session: the workspace store, the content studio and the
/// report most recently produced by `analyze`.
pub struct Session {
    store: SeoWorkspace,
    studio: Box<dyn ContentStudio>,
    last_report: Option<seodesk_analyzer::SeoReport>,
}

impl Session {
    pub fn new(store: SeoWorkspace, studio: Box<dyn ContentStudio>) -> Self {
        Self {
            store,
            studio,
            last_report: None,
        }
    }

    /// Read access to the workspace, mainly for status display and tests
    pub fn store(&self) -> &SeoWorkspace {
        &self.store
    }

    /// Parse and execute one line of input
    pub async fn handle(&mut self, line: &str) -> Result<()> {
        let command = Command::parse(line)?;
        self.execute(command).await
    }

    pub async fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Analyze => self.analyze(),
            Command::Record { project } => self.record(&project),
            Command::ProjectAdd { name, url } => {
                let project = self.store.add_project(ProjectDraft {
                    name,
                    url,
                    status: ProjectStatus::Active,
                })?;
                println!(
                    "{} Added project {} ({})",
                    "✅".green(),
                    project.name.bold(),
                    &project.id[..8]
                );
                Ok(())
            }
            Command::ProjectList => {
                print_projects(self.store.projects());
                Ok(())
            }
            Command::ProjectStatus { id, status } => {
                let Some(project_id) = self.resolve_project(&id) else {
                    println!("{} No project matches '{}'", "❌".red(), id);
                    return Ok(());
                };
                self.store.update_project(
                    &project_id,
                    ProjectPatch {
                        status: Some(status),
                        ..Default::default()
                    },
                )?;
                println!("{} Project marked {}", "✅".green(), status);
                Ok(())
            }
            Command::ProjectRemove { id } => {
                let Some(project_id) = self.resolve_project(&id) else {
                    println!("{} No project matches '{}'", "❌".red(), id);
                    return Ok(());
                };
                self.store.delete_project(&project_id)?;
                println!("{} Project removed", "✅".green());
                Ok(())
            }
            Command::ClientAdd => self.client_add(),
            Command::ClientList => {
                if !self.require_agency() {
                    return Ok(());
                }
                print_clients(self.store.clients());
                Ok(())
            }
            Command::ClientRemove { id } => {
                if !self.require_agency() {
                    return Ok(());
                }
                self.store.delete_client(&id)?;
                println!("{} Client removed (if it existed)", "✅".green());
                Ok(())
            }
            Command::Learn => {
                print_curriculum(&self.store);
                Ok(())
            }
            Command::LearnDone { lesson } => self.learn_done(&lesson),
            Command::Draft { kind, topic } => self.draft(kind, &topic).await,
            Command::ModeShow => {
                println!("{} Current mode: {}", "⚙️".cyan(), self.store.mode());
                Ok(())
            }
            Command::ModeSet { mode } => {
                self.store.set_mode(mode)?;
                println!("{} Switched to {} mode", "⚙️".cyan(), mode);
                Ok(())
            }
            Command::Stats => {
                print_stats(&self.store);
                Ok(())
            }
        }
    }

    fn analyze(&mut self) -> Result<()> {
        let title = prompt_line("Title")?;
        let description = prompt_line("Meta description")?;
        let content = prompt_line("Page content")?;

        let report = analyze_page(&PageInput {
            title,
            description,
            content,
        });
        print_report(&report);

        self.store.increment_analyses()?;
        self.last_report = Some(report);

        println!(
            "{}",
            "Use 'record <project>' to save this score to a project's history.".dimmed()
        );
        Ok(())
    }

    fn record(&mut self, needle: &str) -> Result<()> {
        let Some(report) = self.last_report.clone() else {
            println!("{} Nothing to record — run 'analyze' first", "❌".red());
            return Ok(());
        };
        let Some(project_id) = self.resolve_project(needle) else {
            println!("{} No project matches '{}'", "❌".red(), needle);
            return Ok(());
        };

        let summary = HistorySummary {
            critical: count_kind(&report, SuggestionKind::Error),
            warnings: count_kind(&report, SuggestionKind::Warning),
            passed: count_kind(&report, SuggestionKind::Success),
        };

        self.store.add_seo_history(
            &project_id,
            HistoryDraft {
                score: report.score,
                grade: grade_for(report.score).to_string(),
                summary,
            },
        )?;

        println!(
            "{} Recorded score {} ({}) to project history",
            "✅".green(),
            report.score,
            grade_for(report.score)
        );
        Ok(())
    }

    fn client_add(&mut self) -> Result<()> {
        if !self.require_agency() {
            return Ok(());
        }

        let draft = ClientDraft {
            name: prompt_line("Client name")?,
            company: prompt_line("Company")?,
            email: prompt_line("Email")?,
            website: prompt_line("Website")?,
        };

        let client = self.store.add_client(draft)?;
        println!(
            "{} Added client {} ({})",
            "✅".green(),
            client.name.bold(),
            &client.id[..8]
        );
        Ok(())
    }

    fn learn_done(&mut self, lesson_id: &str) -> Result<()> {
        let known = curriculum()
            .iter()
            .any(|module| module.lessons.iter().any(|lesson| lesson.id == lesson_id));
        if !known {
            println!(
                "{} Unknown lesson '{}'; run 'learn' to see lesson ids",
                "❌".red(),
                lesson_id
            );
            return Ok(());
        }

        self.store.mark_lesson_complete(lesson_id)?;
        println!("{} Lesson '{}' marked complete", "🎓".green(), lesson_id);
        Ok(())
    }

    async fn draft(&mut self, kind: DraftKind, topic: &str) -> Result<()> {
        println!(
            "{} Drafting with the {} backend...",
            "✍️".cyan(),
            self.studio.backend_name()
        );

        match kind {
            DraftKind::Titles => {
                let drafts = self.studio.draft_titles(topic).await?;
                print_drafts("Title ideas", &drafts);
            }
            DraftKind::Descriptions => {
                let drafts = self.studio.draft_descriptions(topic).await?;
                print_drafts("Description ideas", &drafts);
            }
            DraftKind::Keywords => {
                let drafts = self.studio.draft_keywords(topic).await?;
                print_drafts("Keyword ideas", &drafts);
            }
            DraftKind::Tips => {
                let drafts = self.studio.draft_tips(topic).await?;
                print_drafts("Improvement tips", &drafts);
            }
        }
        Ok(())
    }

    /// Match a project by full id, id prefix or exact (case-insensitive) name
    fn resolve_project(&self, needle: &str) -> Option<String> {
        self.store
            .projects()
            .iter()
            .find(|p| p.id == needle || p.id.starts_with(needle) || p.name.eq_ignore_ascii_case(needle))
            .map(|p| p.id.clone())
    }

    fn require_agency(&self) -> bool {
        if self.store.mode() == Mode::Agency {
            return true;
        }
        println!(
            "{} Client management needs agency mode; switch with 'mode agency'",
            "🔒".yellow()
        );
        false
    }
}

fn count_kind(report: &seodesk_analyzer::SeoReport, kind: SuggestionKind) -> u32 {
    report
        .suggestions
        .iter()
        .filter(|s| s.kind == kind)
        .count() as u32
}
