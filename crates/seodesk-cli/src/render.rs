//! Rendering of reports, projects and curriculum to the terminal

use colored::*;

use seodesk_analyzer::{SeoReport, SuggestionKind};
use seodesk_store::{Client, Project, SeoWorkspace, curriculum};

/// Letter bucket for a numeric score, display only
pub fn grade_for(score: u32) -> &'static str {
    match score {
        90..=u32::MAX => "A",
        80..=89 => "B",
        70..=79 => "C",
        60..=69 => "D",
        _ => "F",
    }
}

fn score_color(score: u32) -> ColoredString {
    let text = format!("{}", score);
    match score {
        80..=u32::MAX => text.green().bold(),
        60..=79 => text.yellow().bold(),
        _ => text.red().bold(),
    }
}

fn field_line(label: &str, length: usize, score: u32, optimal: bool) -> String {
    let marker = if optimal {
        "✅".to_string()
    } else {
        "▫️".to_string()
    };
    format!("  {} {} — {} chars, score {}", marker, label, length, score)
}

pub(crate) fn print_report(report: &SeoReport) {
    println!();
    println!(
        "{} Overall score: {} ({})",
        "📊".cyan(),
        score_color(report.score),
        grade_for(report.score)
    );
    println!(
        "{}",
        field_line(
            "Title",
            report.title.length,
            report.title.score,
            report.title.is_optimal
        )
    );
    println!(
        "{}",
        field_line(
            "Description",
            report.description.length,
            report.description.score,
            report.description.is_optimal
        )
    );
    println!(
        "  🚀 Performance — mobile {}, speed {}, responsive: {}",
        report.performance.mobile_score,
        report.performance.speed_score,
        if report.performance.is_responsive { "yes" } else { "no" }
    );

    if report.keywords.found.is_empty() {
        println!("  🔎 Keywords — none found");
    } else {
        println!(
            "  🔎 Keywords ({}) — {}",
            report.keywords.found.len(),
            report.keywords.found.join(", ")
        );
    }

    println!();
    for suggestion in &report.suggestions {
        let glyph = match suggestion.kind {
            SuggestionKind::Success => "✅".green(),
            SuggestionKind::Warning => "⚠️".yellow(),
            SuggestionKind::Error => "❌".red(),
            SuggestionKind::Info => "💡".cyan(),
        };
        println!("{} {}", glyph, suggestion.title.bold());
        println!("   {}", suggestion.description);
        if let Some(fix) = &suggestion.how_to_fix {
            println!("   {} {}", "Fix:".cyan(), fix);
        }
    }
    println!();
}

pub(crate) fn print_projects(projects: &[Project]) {
    if projects.is_empty() {
        println!("{} No projects yet. Add one with 'project add <name> <url>'.", "📁".cyan());
        return;
    }

    println!("{} {} project(s):", "📁".cyan(), projects.len());
    for project in projects {
        let latest = project
            .seo_history
            .last()
            .map(|entry| format!("last score {} ({})", entry.score, entry.grade))
            .unwrap_or_else(|| "no analyses recorded".to_string());
        println!(
            "  {} {} — {} [{}] since {} — {}",
            project.id[..8].dimmed(),
            project.name.bold(),
            project.url,
            project.status,
            project.created_at.format("%Y-%m-%d"),
            latest.dimmed()
        );
    }
}

pub(crate) fn print_clients(clients: &[Client]) {
    if clients.is_empty() {
        println!("{} No clients yet. Add one with 'client add'.", "👥".cyan());
        return;
    }

    println!("{} {} client(s):", "👥".cyan(), clients.len());
    for client in clients {
        println!(
            "  {} {} — {} <{}> ({} project refs)",
            client.id[..8].dimmed(),
            client.name.bold(),
            client.company,
            client.email,
            client.projects.len()
        );
    }
}

pub(crate) fn print_curriculum(store: &SeoWorkspace) {
    println!("{} Learning curriculum:", "🎓".cyan());
    for module in curriculum() {
        let progress = store.progress_for(&module);
        let badge = if store.is_module_completed(&module) {
            "✅".to_string()
        } else {
            format!("{}%", progress)
        };
        println!(
            "  {} {} [{}] — {}",
            badge,
            module.title.bold(),
            module.level,
            module.summary.dimmed()
        );
        for lesson in &module.lessons {
            let mark = if store.completed_lessons().contains(&lesson.id) {
                "✔".green()
            } else {
                "·".dimmed()
            };
            println!(
                "      {} {} {} ({} min)",
                mark,
                lesson.id.dimmed(),
                lesson.title,
                lesson.minutes
            );
        }
    }
    println!(
        "{}",
        "Mark a lesson done with 'learn done <lesson-id>'.".dimmed()
    );
}

pub(crate) fn print_stats(store: &SeoWorkspace) {
    let modules = curriculum();
    let lessons_total: usize = modules.iter().map(|m| m.lessons.len()).sum();

    println!("{} Workspace statistics:", "📈".cyan());
    println!("  Analyses run:      {}", store.total_analyses());
    println!("  Projects tracked:  {}", store.projects().len());
    println!("  Clients:           {}", store.clients().len());
    println!(
        "  Lessons completed: {}/{}",
        store.completed_lessons().len(),
        lessons_total
    );
    println!("  Mode:              {}", store.mode());
}

pub(crate) fn print_drafts(heading: &str, drafts: &[String]) {
    println!("{} {}:", "✍️".cyan(), heading.bold());
    for (index, draft) in drafts.iter().enumerate() {
        println!("  {}. {}", index + 1, draft);
    }
}
